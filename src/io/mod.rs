pub mod bitmap;
pub mod png;
pub mod stream;
