use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Tolérance de convergence par défaut.
pub const EPSILON: f64 = 10e-15;
/// Nombre maximal d'évaluations de zêta pour `iterate`.
pub const MAX_ITS: u32 = 2000;
/// Module au-delà duquel un point est considéré comme échappé.
pub const CABS_Z_MAX: f64 = 10000.0;
/// Bornes du rang de coupure N de la sommation d'Euler–Maclaurin.
pub const MIN_N: u32 = 100;
pub const MAX_N: u32 = 1_000_000;

/// Paramètres numériques de l'évaluateur.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZetaParams {
    pub epsilon: f64,
    pub max_its: u32,
    pub cabs_z_max: f64,
    pub min_n: u32,
    pub max_n: u32,
}

impl ZetaParams {
    pub const DEFAULT: ZetaParams = ZetaParams {
        epsilon: EPSILON,
        max_its: MAX_ITS,
        cabs_z_max: CABS_Z_MAX,
        min_n: MIN_N,
        max_n: MAX_N,
    };
}

impl Default for ZetaParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Issue d'une itération de `s ← ζ(s)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IterationOutcome {
    /// |Re(ζ(s)) - Re(s)| est passé sous la tolérance.
    Converged,
    /// Le module a atteint `cabs_z_max`.
    Escaped,
    /// Le module est devenu NaN.
    Diverged,
    /// Budget `max_its` consommé sans conclusion.
    Exhausted,
}

impl IterationOutcome {
    pub fn name(self) -> &'static str {
        match self {
            IterationOutcome::Converged => "converged",
            IterationOutcome::Escaped => "escaped",
            IterationOutcome::Diverged => "diverged",
            IterationOutcome::Exhausted => "exhausted",
        }
    }
}

/// Résultat de `iterate` : nombre d'itérations consommées et dernière valeur.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IterationReport {
    pub count: u32,
    pub last: Complex64,
    pub outcome: IterationOutcome,
}
