pub mod palettes;
pub mod color_models;

/// Couleur RGB 8 bits.
pub type Rgb = (u8, u8, u8);

pub use palettes::{color_for_iterations, color_for_value, gray_for_iterations, ColorMode};
