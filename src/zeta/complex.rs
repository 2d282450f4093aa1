//! Fonctions analytiques complexes utilisées par l'évaluateur zêta.
//!
//! Les quatre opérations de corps (et leurs variantes avec un scalaire réel)
//! sont fournies par `Complex64`. Diviser par un complexe de module nul ou
//! prendre le logarithme de zéro produit des valeurs non finies (sémantique
//! IEEE) : c'est une violation de précondition, pas une erreur rattrapée.
//!
//! `log_sin_pi` et `log_cos_half_pi` donnent directement le logarithme de
//! facteurs trigonométriques qui débordent (ou s'annulent) loin de l'axe
//! réel, pour que Γ et l'équation fonctionnelle se combinent en un seul
//! exposant.

use std::f64::consts::PI;

use num_complex::Complex64;

/// Unité imaginaire.
pub const I: Complex64 = Complex64::new(0.0, 1.0);

/// Module `sqrt(re² + im²)`.
#[inline]
pub fn modulus(z: Complex64) -> f64 {
    (z.re * z.re + z.im * z.im).sqrt()
}

/// Argument principal `atan2(im, re)`.
#[inline]
pub fn arg(z: Complex64) -> f64 {
    z.im.atan2(z.re)
}

/// Exponentielle complexe. Sur l'axe réel la partie imaginaire reste nulle,
/// même quand `exp(re)` déborde.
#[inline]
pub fn cexp(z: Complex64) -> Complex64 {
    let r = z.re.exp();
    if z.im == 0.0 {
        return Complex64::new(r, 0.0);
    }
    Complex64::new(r * z.im.cos(), r * z.im.sin())
}

/// Logarithme népérien, branche principale.
#[inline]
pub fn clog(z: Complex64) -> Complex64 {
    Complex64::new(modulus(z).ln(), arg(z))
}

/// cos(z) = (e^{iz} + e^{-iz}) / 2
pub fn ccos(z: Complex64) -> Complex64 {
    let iz = I * z;
    (cexp(iz) + cexp(-iz)) / 2.0
}

/// sin(z) = (e^{iz} - e^{-iz}) / 2i
pub fn csin(z: Complex64) -> Complex64 {
    let iz = I * z;
    (cexp(iz) - cexp(-iz)) / (I * 2.0)
}

/// x^z pour une base réelle strictement positive.
#[inline]
pub fn cpow_real(x: f64, z: Complex64) -> Complex64 {
    let m = x.powf(z.re);
    if z.im == 0.0 {
        return Complex64::new(m, 0.0);
    }
    let a = z.im * x.ln();
    Complex64::new(m * a.cos(), m * a.sin())
}

/// x^z pour une base complexe (branche principale du logarithme).
#[inline]
pub fn cpow(x: Complex64, z: Complex64) -> Complex64 {
    cexp(z * clog(x))
}

/// (sin πx, cos πx), exacts aux multiples de 1/2.
pub fn sin_cos_pi(x: f64) -> (f64, f64) {
    let r = x.rem_euclid(2.0);
    if r < 0.5 {
        ((PI * r).sin(), (PI * r).cos())
    } else if r < 1.0 {
        let t = r - 0.5;
        ((PI * t).cos(), -(PI * t).sin())
    } else if r < 1.5 {
        let t = r - 1.0;
        (-(PI * t).sin(), -(PI * t).cos())
    } else {
        let t = r - 1.5;
        (-(PI * t).cos(), (PI * t).sin())
    }
}

/// e^{-damping} · e^{iπx}
fn damped_unit(x: f64, damping: f64) -> Complex64 {
    let (s, c) = sin_cos_pi(x);
    let m = (-damping).exp();
    Complex64::new(m * c, m * s)
}

/// Un logarithme de sin(πs), toujours fini hors des entiers.
///
/// On factorise l'exponentielle dominante : pour Im(s) >= 0,
/// `sin(πs) = e^{-iπs} (e^{2iπs} - 1) / 2i` et `|e^{2iπs}| <= 1`.
/// La branche n'est pas la principale ; seule l'exponentielle du résultat
/// a un sens.
pub fn log_sin_pi(s: Complex64) -> Complex64 {
    if s.im >= 0.0 {
        let w = damped_unit(2.0 * s.re, 2.0 * PI * s.im);
        -I * PI * s + clog((w - 1.0) / (I * 2.0))
    } else {
        let w = damped_unit(-2.0 * s.re, -2.0 * PI * s.im);
        I * PI * s + clog((1.0 - w) / (I * 2.0))
    }
}

/// Un logarithme de cos(πs/2) ; vaut -inf (partie réelle) aux entiers impairs.
pub fn log_cos_half_pi(s: Complex64) -> Complex64 {
    if s.im >= 0.0 {
        let w = damped_unit(s.re, PI * s.im);
        -I * (PI / 2.0) * s + clog((w + 1.0) / 2.0)
    } else {
        let w = damped_unit(-s.re, -PI * s.im);
        I * (PI / 2.0) * s + clog((w + 1.0) / 2.0)
    }
}
