//! Paramètres de rendu et fichiers de configuration JSON.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::color::ColorMode;
use crate::error::{Result, ZetaError};
use crate::view::Settings;
use crate::zeta::ZetaParams;

/// Une table de correspondance à charger : image et fenêtre associée.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LutSpec {
    pub path: PathBuf,
    pub settings: Settings,
}

impl LutSpec {
    /// Parse `CHEMIN:RMIN,RMAX,IMIN,IMAX,RES` (le dernier `:` sépare la fenêtre).
    pub fn parse(text: &str) -> Result<Self> {
        let (path, bounds) = text
            .rsplit_once(':')
            .ok_or_else(|| ZetaError::Config(format!("table '{text}': attendu CHEMIN:RMIN,RMAX,IMIN,IMAX,RES")))?;
        Ok(Self {
            path: PathBuf::from(path),
            settings: Settings::parse_bounds(bounds)?,
        })
    }
}

/// Paramètres complets d'un rendu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Fenêtre rendue (`res` est ignoré pour la sortie).
    pub window: Settings,
    pub width: u32,
    pub height: u32,
    pub color_mode: ColorMode,
    #[serde(flatten)]
    pub zeta: ZetaParams,
    /// Tables à charger, dans l'ordre d'insertion.
    pub luts: Vec<LutSpec>,
}

impl Default for RenderParams {
    fn default() -> Self {
        default_params(1024, 1024)
    }
}

impl RenderParams {
    /// Charge un fichier JSON ; les champs absents prennent leur valeur par défaut.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let params: RenderParams = serde_json::from_str(text)?;
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        self.window.validate()?;
        if self.width == 0 || self.height == 0 {
            return Err(ZetaError::InvalidDimensions {
                width: self.width,
                height: self.height,
                len: 0,
            });
        }
        if !(self.zeta.epsilon > 0.0) || self.zeta.max_its == 0 || !(self.zeta.cabs_z_max > 0.0) {
            return Err(ZetaError::Config(format!(
                "paramètres numériques invalides: epsilon={} max_its={} cabs_z_max={}",
                self.zeta.epsilon, self.zeta.max_its, self.zeta.cabs_z_max
            )));
        }
        for spec in &self.luts {
            spec.settings.validate()?;
        }
        Ok(())
    }
}

/// Paramètres par défaut : carré [-30, 30] x [-30, 30], coloration de domaine.
pub fn default_params(width: u32, height: u32) -> RenderParams {
    RenderParams {
        window: Settings::from_bounds(-30.0, 30.0, -30.0, 30.0, 0.0),
        width,
        height,
        color_mode: ColorMode::default(),
        zeta: ZetaParams::default(),
        luts: Vec::new(),
    }
}

/// Les six tables de référence, de la plus fine à la plus grossière,
/// cherchées dans `dir`.
pub fn default_lut_specs(dir: &Path) -> Vec<LutSpec> {
    const TABLES: [(&str, f64, f64, f64, f64, f64); 6] = [
        ("CL100000.bmp", 0.975, 1.025, -0.025, 0.025, 100000.0),
        ("CL010000.bmp", 0.75, 1.25, -0.25, 0.25, 10000.0),
        ("CL001000.bmp", -1.5, 3.5, -2.5, 2.5, 1000.0),
        ("CL000100.bmp", -24.0, 26.0, -25.0, 25.0, 100.0),
        ("CL000010.bmp", -249.0, 251.0, -250.0, 250.0, 10.0),
        ("CL000001.bmp", -2499.0, 2501.0, -2500.0, 2500.0, 1.0),
    ];
    TABLES
        .iter()
        .map(|&(name, rmin, rmax, imin, imax, res)| LutSpec {
            path: dir.join(name),
            settings: Settings::from_bounds(rmin, rmax, imin, imax, res),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_defaults_are_valid() {
        let params = RenderParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.zeta, ZetaParams::DEFAULT);
        assert_eq!(params.color_mode, ColorMode::Domain);
    }

    #[test]
    fn test_json_partial_override() {
        let json = r#"{
            "window": { "min": [-1.0, -1.0], "max": [1.0, 1.0], "res": 16.0 },
            "width": 16,
            "height": 16,
            "color_mode": "iterations",
            "max_its": 500,
            "luts": [
                { "path": "CL000001.bmp",
                  "settings": { "min": [-2499.0, -2500.0], "max": [2501.0, 2500.0], "res": 1.0 } }
            ]
        }"#;
        let params = RenderParams::from_json_str(json).unwrap();
        assert_eq!(params.width, 16);
        assert_eq!(params.window.min, Complex64::new(-1.0, -1.0));
        assert_eq!(params.color_mode, ColorMode::Iterations);
        assert_eq!(params.zeta.max_its, 500);
        assert_eq!(params.zeta.epsilon, ZetaParams::DEFAULT.epsilon);
        assert_eq!(params.luts.len(), 1);
        assert_eq!(params.luts[0].settings.res, 1.0);
    }

    #[test]
    fn test_json_rejects_degenerate_window() {
        let json = r#"{ "window": { "min": [1.0, 0.0], "max": [0.0, 1.0], "res": 1.0 } }"#;
        assert!(RenderParams::from_json_str(json).is_err());
        assert!(RenderParams::from_json_str("{ not json").is_err());
    }

    #[test]
    fn test_lut_spec_parse() {
        let spec = LutSpec::parse("luts/CL001000.bmp:-1.5,3.5,-2.5,2.5,1000").unwrap();
        assert_eq!(spec.path, PathBuf::from("luts/CL001000.bmp"));
        assert_eq!(spec.settings.res, 1000.0);
        assert!(LutSpec::parse("sans-fenetre.bmp").is_err());
    }

    #[test]
    fn test_default_lut_specs() {
        let specs = default_lut_specs(Path::new("cuda/lut"));
        assert_eq!(specs.len(), 6);
        assert!(specs.iter().all(|s| s.settings.validate().is_ok()));
        assert_eq!(specs[0].path, Path::new("cuda/lut/CL100000.bmp"));
        assert!(specs.windows(2).all(|w| w[0].settings.res > w[1].settings.res));
    }
}
