pub mod memory;
pub mod table;
pub mod chain;

pub use chain::{ChainView, LutChain};
pub use table::Lut;
