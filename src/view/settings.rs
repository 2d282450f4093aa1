use std::fmt;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ZetaError};

/// Fenêtre rectangulaire du plan complexe.
///
/// `res` ne sert qu'à ordonner les tables de correspondance : il n'a pas à
/// correspondre à la densité réelle de pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub min: Complex64,
    pub max: Complex64,
    pub res: f64,
}

impl Settings {
    pub fn new(min: Complex64, max: Complex64, res: f64) -> Self {
        Self { min, max, res }
    }

    /// Construit une fenêtre depuis ses bornes réelles et imaginaires.
    pub fn from_bounds(rmin: f64, rmax: f64, imin: f64, imax: f64, res: f64) -> Self {
        Self::new(Complex64::new(rmin, imin), Complex64::new(rmax, imax), res)
    }

    pub fn span(&self) -> Complex64 {
        self.max - self.min
    }

    /// Vérifie que `min.re < max.re` et `min.im < max.im` (bornes finies).
    pub fn validate(&self) -> Result<()> {
        let finite = [self.min.re, self.min.im, self.max.re, self.max.im]
            .iter()
            .all(|v| v.is_finite());
        if finite && self.min.re < self.max.re && self.min.im < self.max.im {
            Ok(())
        } else {
            Err(ZetaError::InvalidWindow {
                min_re: self.min.re,
                min_im: self.min.im,
                max_re: self.max.re,
                max_im: self.max.im,
            })
        }
    }

    /// Parse `RMIN,RMAX,IMIN,IMAX,RES`.
    pub fn parse_bounds(text: &str) -> Result<Self> {
        let values: Vec<f64> = text
            .split(',')
            .map(|v| v.trim().parse::<f64>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| ZetaError::Config(format!("fenêtre '{text}': {e}")))?;
        match values.as_slice() {
            &[rmin, rmax, imin, imax, res] => {
                let settings = Self::from_bounds(rmin, rmax, imin, imax, res);
                settings.validate()?;
                Ok(settings)
            }
            _ => Err(ZetaError::Config(format!(
                "fenêtre '{text}': attendu RMIN,RMAX,IMIN,IMAX,RES"
            ))),
        }
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[({}, {}) -> ({}, {}) res={}]",
            self.min.re, self.min.im, self.max.re, self.max.im, self.res
        )
    }
}
