pub mod complex;
pub mod gamma;
pub mod series;
pub mod iterate;
pub mod types;

pub use iterate::{iterate, iterate_with, trace};
pub use series::{zeta, zeta_with};
pub use types::{IterationOutcome, IterationReport, ZetaParams};
