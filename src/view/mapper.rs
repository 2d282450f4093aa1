//! Correspondance pixel ↔ plan complexe.
//!
//! Les coordonnées logiques `(x, y)` suivent l'orientation mathématique :
//! `y = 0` correspond à `min.im`. Les buffers d'image sont stockés ligne du
//! haut en premier, donc la ligne de buffer d'un `y` logique est
//! `height - 1 - y` (voir [`PixelMapper::row_of`]). C'est le seul endroit où
//! les deux conventions sont réconciliées.

use num_complex::Complex64;

use super::settings::Settings;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelMapper {
    pub settings: Settings,
    pub width: u32,
    pub height: u32,
}

impl PixelMapper {
    pub fn new(settings: Settings, width: u32, height: u32) -> Self {
        Self { settings, width, height }
    }

    /// Pixel logique → point du plan complexe (coin inférieur gauche du pixel).
    #[inline]
    pub fn to_complex(&self, x: u32, y: u32) -> Complex64 {
        let span = self.settings.span();
        let u = x as f64 / self.width as f64;
        let v = y as f64 / self.height as f64;
        Complex64::new(
            self.settings.min.re + u * span.re,
            self.settings.min.im + v * span.im,
        )
    }

    /// Point du plan complexe → pixel logique, `None` hors de la fenêtre.
    #[inline]
    pub fn to_pixel(&self, z: Complex64) -> Option<(u32, u32)> {
        let span = self.settings.span();
        let u = (z.re - self.settings.min.re) / span.re;
        let v = (z.im - self.settings.min.im) / span.im;
        let x = (u * self.width as f64).floor();
        let y = (v * self.height as f64).floor();
        // Les comparaisons sont fausses pour NaN : un point non fini est un échec.
        if x >= 0.0 && x < self.width as f64 && y >= 0.0 && y < self.height as f64 {
            Some((x as u32, y as u32))
        } else {
            None
        }
    }

    /// Ligne de buffer (haut en premier) d'un `y` logique.
    #[inline]
    pub fn row_of(&self, y: u32) -> u32 {
        self.height - 1 - y
    }

    /// Index du premier octet RGB du pixel logique `(x, y)` dans un buffer.
    #[inline]
    pub fn byte_index(&self, x: u32, y: u32) -> usize {
        (self.row_of(y) as usize * self.width as usize + x as usize) * 3
    }
}
