//! Dérivation des couleurs : coloration de domaine à partir de ζ(s), ou
//! palette/niveaux de gris à partir du nombre d'itérations.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use super::color_models::{hsb_to_rgb, Hsb};
use super::Rgb;
use crate::zeta::complex::{arg, modulus};
use crate::zeta::{IterationOutcome, IterationReport};

/// Couleur sentinelle pour les valeurs non finies ou non convergées.
pub const SENTINEL: Rgb = (255, 0, 255);

/// Palette d'itérations des tables de référence (index = nombre d'itérations).
pub const ITERATION_PALETTE: [Rgb; 100] = [
    (0, 0, 0), (0, 0, 0), (0, 0, 255), (0, 60, 255),
    (0, 100, 255), (0, 125, 255), (0, 140, 255), (0, 155, 255),
    (0, 170, 255), (0, 180, 255), (0, 190, 255), (0, 200, 255),
    (0, 210, 255), (0, 220, 255), (0, 225, 255), (0, 230, 255),
    (0, 235, 255), (0, 238, 255), (0, 241, 255), (0, 244, 255),
    (0, 247, 255), (0, 250, 255), (0, 253, 255), (0, 255, 255),
    (0, 255, 255), (0, 255, 255), (0, 255, 255), (0, 255, 255),
    (0, 255, 255), (0, 255, 255), (0, 255, 255), (0, 255, 255),
    (0, 255, 255), (0, 255, 0), (0, 255, 0), (0, 255, 0),
    (0, 255, 0), (0, 255, 0), (0, 255, 0), (0, 255, 0),
    (0, 255, 0), (0, 255, 0), (0, 255, 0), (23, 255, 0),
    (46, 255, 0), (70, 255, 0), (93, 255, 0), (116, 255, 0),
    (139, 255, 0), (163, 255, 0), (186, 255, 0), (209, 255, 0),
    (232, 255, 0), (255, 255, 0), (255, 237, 0), (255, 218, 0),
    (255, 200, 0), (255, 181, 0), (255, 163, 0), (255, 146, 0),
    (255, 128, 0), (255, 111, 0), (255, 93, 0), (255, 76, 0),
    (255, 63, 0), (255, 51, 0), (255, 42, 0), (255, 39, 0),
    (255, 36, 0), (255, 33, 0), (255, 30, 0), (255, 27, 0),
    (255, 24, 0), (255, 21, 0), (255, 18, 0), (255, 15, 0),
    (255, 12, 0), (255, 9, 0), (255, 6, 0), (255, 3, 0),
    (255, 0, 0), (255, 0, 0), (255, 0, 0), (255, 0, 0),
    (255, 0, 0), (255, 0, 0), (255, 0, 0), (255, 0, 0),
    (255, 0, 0), (255, 0, 0), (255, 0, 0), (255, 0, 0),
    (255, 0, 0), (255, 0, 0), (255, 0, 0), (255, 0, 0),
    (255, 0, 0), (255, 0, 0), (255, 0, 0), (255, 0, 0),
];

/// Stratégie de colorisation d'un pixel calculé.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Teinte = argument de ζ(s), luminosité = module normalisé.
    #[default]
    Domain,
    /// Nombre d'itérations de s ← ζ(s) via `ITERATION_PALETTE`.
    Iterations,
    /// Nombre d'itérations en niveaux de gris.
    Grayscale,
}

impl ColorMode {
    pub fn name(self) -> &'static str {
        match self {
            ColorMode::Domain => "domain",
            ColorMode::Iterations => "iterations",
            ColorMode::Grayscale => "grayscale",
        }
    }

    pub fn from_cli_name(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "domain" | "value" => Some(ColorMode::Domain),
            "iterations" | "its" | "palette" => Some(ColorMode::Iterations),
            "grayscale" | "gray" | "grey" => Some(ColorMode::Grayscale),
            _ => None,
        }
    }
}

/// Coloration de domaine : teinte depuis l'argument, luminosité
/// `(2/π)·atan(|z|)` (zéros noirs, pôles blancs), saturation 1.
pub fn color_for_value(z: Complex64) -> Rgb {
    let m = modulus(z);
    let a = arg(z);
    if !m.is_finite() || !a.is_finite() {
        return SENTINEL;
    }
    let mut h = a.to_degrees();
    if h < 0.0 {
        h += 360.0;
    }
    let b = m.atan() * std::f64::consts::FRAC_2_PI;
    hsb_to_rgb(Hsb { h, s: 1.0, b })
}

/// Couleur de palette pour un compte d'itérations.
pub fn color_for_iterations(report: &IterationReport) -> Rgb {
    match report.outcome {
        IterationOutcome::Converged | IterationOutcome::Escaped => {
            let idx = (report.count as usize).min(ITERATION_PALETTE.len() - 1);
            ITERATION_PALETTE[idx]
        }
        IterationOutcome::Diverged | IterationOutcome::Exhausted => SENTINEL,
    }
}

/// Niveau de gris logarithmique `255 · ln(1 + count) / ln(1 + max_its)` :
/// les comptes usuels (moins de 100 pour 2000 autorisés) restent lisibles.
pub fn gray_for_iterations(report: &IterationReport, max_its: u32) -> Rgb {
    match report.outcome {
        IterationOutcome::Converged | IterationOutcome::Escaped => {
            let t = (report.count as f64).ln_1p() / (max_its.max(1) as f64).ln_1p();
            let v = (t * 255.0).clamp(0.0, 255.0) as u8;
            (v, v, v)
        }
        IterationOutcome::Diverged | IterationOutcome::Exhausted => SENTINEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(count: u32, outcome: IterationOutcome) -> IterationReport {
        IterationReport { count, last: Complex64::new(0.0, 0.0), outcome }
    }

    #[test]
    fn test_domain_coloring() {
        // Zéro : noir
        assert_eq!(color_for_value(Complex64::new(0.0, 0.0)), (0, 0, 0));
        // Réel positif : teinte 0 (rouge)
        let (r, g, b) = color_for_value(Complex64::new(1e9, 0.0));
        assert!(r > 250 && g == 0 && b == 0, "({r}, {g}, {b})");
        // Imaginaire pur positif : teinte 90
        let (r, g, b) = color_for_value(Complex64::new(0.0, 1e9));
        assert!(g > 250 && r > 120 && r < 135 && b == 0, "({r}, {g}, {b})");
    }

    #[test]
    fn test_non_finite_maps_to_sentinel() {
        assert_eq!(color_for_value(Complex64::new(f64::NAN, 0.0)), SENTINEL);
        assert_eq!(color_for_value(Complex64::new(f64::INFINITY, 1.0)), SENTINEL);
    }

    #[test]
    fn test_iteration_palette() {
        assert_eq!(color_for_iterations(&report(2, IterationOutcome::Escaped)), (0, 0, 255));
        assert_eq!(color_for_iterations(&report(5000, IterationOutcome::Converged)), ITERATION_PALETTE[99]);
        assert_eq!(color_for_iterations(&report(2000, IterationOutcome::Exhausted)), SENTINEL);
    }

    #[test]
    fn test_grayscale() {
        assert_eq!(gray_for_iterations(&report(0, IterationOutcome::Converged), 100), (0, 0, 0));
        assert_eq!(gray_for_iterations(&report(100, IterationOutcome::Converged), 100), (255, 255, 255));
        assert_eq!(gray_for_iterations(&report(50, IterationOutcome::Diverged), 100), SENTINEL);
    }

    #[test]
    fn test_grayscale_short_orbits_stay_visible() {
        // Un échappement en 3 itérations sur 2000 autorisées
        let (v, _, _) = gray_for_iterations(&report(3, IterationOutcome::Escaped), 2000);
        assert!((40..=50).contains(&v), "gris {v}");
        let levels: Vec<u8> = [1, 5, 20, 100, 2000]
            .iter()
            .map(|&n| gray_for_iterations(&report(n, IterationOutcome::Converged), 2000).0)
            .collect();
        assert!(levels.windows(2).all(|w| w[0] < w[1]), "{levels:?}");
        assert_eq!(levels[4], 255);
    }

    #[test]
    fn test_mode_cli_names() {
        for mode in [ColorMode::Domain, ColorMode::Iterations, ColorMode::Grayscale] {
            assert_eq!(ColorMode::from_cli_name(mode.name()), Some(mode));
        }
        assert_eq!(ColorMode::from_cli_name("hsv"), None);
    }
}
