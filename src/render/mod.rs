pub mod zeta_kernel;
pub mod iteration_grid;

pub use iteration_grid::{iteration_grid, Patch};
pub use zeta_kernel::{computed_color, pixel_color, render};
