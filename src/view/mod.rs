pub mod settings;
pub mod mapper;

pub use mapper::PixelMapper;
pub use settings::Settings;
