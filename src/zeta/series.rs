//! Sommation d'Euler–Maclaurin et prolongement analytique de ζ(s).

use std::f64::consts::PI;

use num_complex::Complex64;

use super::complex::{cexp, clog, cpow_real, log_cos_half_pi, modulus};
use super::gamma::{log_gamma, pochhammer};
use super::types::ZetaParams;

/// B_{2k} / (2k)! pour k = 0..19.
const BERNOULLI_COEFFS: [f64; 20] = [
    1.0000000000000000000000000000000,
    0.0833333333333333333333333333333,
    -0.0013888888888888888888888888888,
    3.3068783068783068783068783068783e-5,
    -8.2671957671957671957671957671958e-7,
    2.0876756987868098979210090321201e-8,
    -5.2841901386874931848476822021796e-10,
    1.3382536530684678832826980975129e-11,
    -3.3896802963225828668301953912494e-13,
    8.5860620562778445641359054504256e-15,
    -2.1748686985580618730415164238659e-16,
    5.5090028283602295152026526089023e-18,
    -1.3954464685812523340707686264064e-19,
    3.5347070396294674716932299778038e-21,
    -8.9535174266605480875210207537274e-23,
    2.2679524523376830603109507388682e-24,
    -5.7447906688722024452638819876070e-26,
    1.4551724756148649018662648672713e-27,
    -3.6859949406653101781817824799086e-29,
    9.3367342570950446720325551527856e-31,
];

/// Rang de coupure N = clamp(floor(|s|), min_n, max_n).
fn cutoff(s: Complex64, params: &ZetaParams) -> u32 {
    let n = modulus(s);
    let n = if n.is_finite() { n as u32 } else { params.max_n };
    n.clamp(params.min_n, params.max_n)
}

/// Approximation d'Euler–Maclaurin de ζ(s). `zeta_with` ne l'appelle que
/// pour Re(s) >= 0 ; la table de Bernoulli la limite à Re(s) > -37.
///
/// Somme directe jusqu'à N-1, terme intégral, demi-terme de bord, puis
/// corrections de Bernoulli ajoutées tant que leur module dépasse
/// `params.epsilon`.
pub fn ems(s: Complex64, params: &ZetaParams) -> Complex64 {
    let n = cutoff(s, params);
    let nf = n as f64;
    let one = Complex64::new(1.0, 0.0);

    let mut z = Complex64::new(0.0, 0.0);
    for k in 1..n {
        z += cpow_real(k as f64, -s);
    }
    z += cpow_real(nf, one - s) / (s - 1.0);
    z += cpow_real(nf, -s) * 0.5;

    let mut correction = Complex64::new(0.0, 0.0);
    for (k, &b) in BERNOULLI_COEFFS.iter().enumerate().skip(1) {
        let order = 2 * k as u32 - 1;
        let exponent = Complex64::new(1.0 - 2.0 * k as f64, 0.0) - s;
        let term = pochhammer(s, order) * cpow_real(nf, exponent) * b;
        correction += term;
        if modulus(term) < params.epsilon {
            break;
        }
    }
    z + correction
}

/// ζ(s) prolongée analytiquement.
///
/// Pour Re(s) < 0 on passe par l'équation fonctionnelle
/// `ζ(s) = 2 (2π)^{s-1} cos(π(1-s)/2) Γ(1-s) ζ(1-s)`, dont tous les
/// facteurs sont additionnés en logarithmes puis exponentiés une seule fois :
/// les zéros triviaux sont exacts et une valeur hors de la plage des `f64`
/// devient un infini signé, jamais NaN.
pub fn zeta_with(s: Complex64, params: &ZetaParams) -> Complex64 {
    if s.re < 0.0 {
        let s1 = 1.0 - s;
        let log_factor = 2f64.ln() - s1 * (2.0 * PI).ln() + log_cos_half_pi(s1) + log_gamma(s1);
        cexp(log_factor + clog(ems(s1, params)))
    } else {
        ems(s, params)
    }
}

/// ζ(s) avec les paramètres par défaut.
pub fn zeta(s: Complex64) -> Complex64 {
    zeta_with(s, &ZetaParams::DEFAULT)
}
