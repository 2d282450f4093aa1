//! Itération de l'application s ← ζ(s).
//!
//! Le nombre d'évaluations consommées sert de « temps d'échappement » pour
//! les rendus en mode itérations, à la manière d'un Mandelbrot.

use num_complex::Complex64;

use super::complex::modulus;
use super::series::zeta_with;
use super::types::{IterationOutcome, IterationReport, ZetaParams};

/// Itère ζ depuis `s` jusqu'à convergence, échappement ou épuisement du budget.
///
/// Un échappement ajoute 1 au compteur si la valeur échappée a une partie
/// réelle négative, 2 sinon : la parité du compteur encode la direction.
pub fn iterate_with(s: Complex64, epsilon: f64, params: &ZetaParams) -> IterationReport {
    let mut s = s;
    let mut z = s;
    let mut count = 0u32;
    let mut cabs = 0.0f64;
    let mut diff = f64::INFINITY;

    while !cabs.is_nan() && diff > epsilon && cabs < params.cabs_z_max && count < params.max_its {
        z = zeta_with(s, params);
        diff = (z.re - s.re).abs();
        cabs = modulus(z);
        count += 1;
        s = z;
    }

    let outcome = if cabs.is_nan() {
        IterationOutcome::Diverged
    } else if cabs >= params.cabs_z_max {
        count += if z.re < 0.0 { 1 } else { 2 };
        IterationOutcome::Escaped
    } else if diff <= epsilon {
        IterationOutcome::Converged
    } else {
        IterationOutcome::Exhausted
    };

    IterationReport { count, last: z, outcome }
}

/// `iterate_with` avec les paramètres par défaut.
pub fn iterate(s: Complex64, epsilon: f64) -> IterationReport {
    iterate_with(s, epsilon, &ZetaParams::DEFAULT)
}

/// Suite complète des valeurs visitées (point de départ inclus).
pub fn trace(s: Complex64, epsilon: f64, params: &ZetaParams) -> Vec<Complex64> {
    let mut orbit = vec![s];
    let mut s = s;
    let mut diff = f64::INFINITY;
    let mut cabs = 0.0f64;

    while !cabs.is_nan() && diff > epsilon && cabs < params.cabs_z_max && orbit.len() <= params.max_its as usize {
        let z = zeta_with(s, params);
        diff = (z.re - s.re).abs();
        cabs = modulus(z);
        orbit.push(z);
        s = z;
    }
    orbit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attracting_fixed_point_converges() {
        // Point fixe réel attractif de ζ vers -0.2959
        let report = iterate(Complex64::new(-0.3, 0.0), 1e-10);
        assert_eq!(report.outcome, IterationOutcome::Converged);
        assert!(report.count > 1 && report.count < 500, "count = {}", report.count);
        assert!((report.last.re + 0.2959).abs() < 1e-3, "last = {}", report.last);
    }

    #[test]
    fn test_escape_near_pole_encodes_sign() {
        // ζ(1 + 1e-6) ≈ 1e6 : échappement dès la première évaluation, Re > 0
        let report = iterate(Complex64::new(1.0 + 1e-6, 0.0), 1e-14);
        assert_eq!(report.outcome, IterationOutcome::Escaped);
        assert_eq!(report.count, 3);

        // ζ(1 - 1e-6) ≈ -1e6 : Re < 0
        let report = iterate(Complex64::new(1.0 - 1e-6, 0.0), 1e-14);
        assert_eq!(report.outcome, IterationOutcome::Escaped);
        assert_eq!(report.count, 2);
    }

    #[test]
    fn test_budget_is_respected() {
        let params = ZetaParams { max_its: 3, ..ZetaParams::DEFAULT };
        let report = iterate_with(Complex64::new(-0.3, 0.0), 1e-300, &params);
        assert_eq!(report.outcome, IterationOutcome::Exhausted);
        assert_eq!(report.count, 3);
    }

    #[test]
    fn test_trace_matches_iterate() {
        let s = Complex64::new(-0.3, 0.0);
        let orbit = trace(s, 1e-10, &ZetaParams::DEFAULT);
        let report = iterate(s, 1e-10);
        assert_eq!(orbit.len() as u32, report.count + 1);
        assert_eq!(*orbit.last().unwrap(), report.last);
    }
}
