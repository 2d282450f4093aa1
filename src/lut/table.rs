//! Table de correspondance : une fenêtre du plan complexe associée à une
//! image déjà rendue.

use num_complex::Complex64;

use crate::color::Rgb;
use crate::error::{Result, ZetaError};
use crate::io::bitmap::{DecodedImage, RowOrder};
use crate::view::{PixelMapper, Settings};

use super::memory::SharedMemory;

/// Table immuable après construction ; possède son buffer de pixels
/// (ligne du haut en premier, 3 octets par pixel).
#[derive(Debug)]
pub struct Lut {
    mapper: PixelMapper,
    pixels: Vec<u8>,
}

impl Lut {
    /// Enveloppe un buffer déjà au format canonique.
    pub fn new(settings: Settings, width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 || pixels.len() != width as usize * height as usize * 3 {
            return Err(ZetaError::InvalidDimensions { width, height, len: pixels.len() });
        }
        Ok(Self {
            mapper: PixelMapper::new(settings, width, height),
            pixels,
        })
    }

    /// Copie une image décodée dans un stockage obtenu auprès de `memory`,
    /// en normalisant l'ordre des lignes.
    pub fn from_image<M: SharedMemory + ?Sized>(
        settings: Settings,
        image: &DecodedImage,
        memory: &M,
    ) -> Result<Self> {
        let (width, height) = (image.width, image.height);
        let mut pixels = memory.allocate(width as usize * height as usize * 3)?;

        match image.order {
            RowOrder::TopDown => pixels.copy_from_slice(&image.pixels),
            RowOrder::BottomUp => {
                let stride = width as usize * 3;
                for (row, dst) in pixels.chunks_exact_mut(stride).enumerate() {
                    for x in 0..width {
                        let rgb = image.pixel_from_top(x, row as u32);
                        let i = x as usize * 3;
                        dst[i..i + 3].copy_from_slice(&rgb);
                    }
                }
            }
        }

        Ok(Self {
            mapper: PixelMapper::new(settings, width, height),
            pixels,
        })
    }

    pub fn res(&self) -> f64 {
        self.mapper.settings.res
    }

    /// Couleur du pixel logique `(x, y)` (`y = 0` en bas), `None` hors limites.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x < self.mapper.width && y < self.mapper.height {
            let i = self.mapper.byte_index(x, y);
            Some((self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]))
        } else {
            None
        }
    }

    /// Couleur stockée pour le point `z`, `None` si `z` est hors de la fenêtre.
    #[inline]
    pub fn lookup(&self, z: Complex64) -> Option<Rgb> {
        let (x, y) = self.mapper.to_pixel(z)?;
        self.get_pixel(x, y)
    }

    /// Rend le buffer de pixels (pour libération par l'allocateur).
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lut::memory::HostMemory;

    /// Image 2x2 : logique (0,0) = rouge (bas gauche), (1,0) = vert,
    /// (0,1) = bleu (haut gauche), (1,1) = blanc.
    fn top_down_2x2() -> Vec<u8> {
        vec![
            0, 0, 255, 255, 255, 255, // ligne du haut : bleu, blanc
            255, 0, 0, 0, 255, 0, // ligne du bas : rouge, vert
        ]
    }

    fn window() -> Settings {
        Settings::from_bounds(0.0, 2.0, 0.0, 2.0, 1.0)
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let lut = Lut::new(window(), 2, 2, top_down_2x2()).unwrap();
        assert_eq!(lut.lookup(Complex64::new(0.1, 0.1)), Some((255, 0, 0)));
        assert_eq!(lut.lookup(Complex64::new(1.5, 0.5)), Some((0, 255, 0)));
        assert_eq!(lut.lookup(Complex64::new(0.5, 1.9)), Some((0, 0, 255)));
        assert_eq!(lut.lookup(Complex64::new(2.0, 0.5)), None);
        assert_eq!(lut.lookup(Complex64::new(-0.1, 0.5)), None);
        assert_eq!(lut.lookup(Complex64::new(0.5, 2.0)), None);
    }

    #[test]
    fn test_get_pixel_bounds() {
        let lut = Lut::new(window(), 2, 2, top_down_2x2()).unwrap();
        assert_eq!(lut.get_pixel(1, 1), Some((255, 255, 255)));
        assert_eq!(lut.get_pixel(2, 0), None);
        assert_eq!(lut.get_pixel(0, 2), None);
    }

    #[test]
    fn test_from_image_normalizes_row_order() {
        let top_down = DecodedImage::new(2, 2, top_down_2x2(), RowOrder::TopDown).unwrap();
        let mut flipped = top_down_2x2()[6..].to_vec();
        flipped.extend_from_slice(&top_down_2x2()[..6]);
        let bottom_up = DecodedImage::new(2, 2, flipped, RowOrder::BottomUp).unwrap();

        let a = Lut::from_image(window(), &top_down, &HostMemory).unwrap();
        let b = Lut::from_image(window(), &bottom_up, &HostMemory).unwrap();
        for y in 0..2 {
            for x in 0..2 {
                assert_eq!(a.get_pixel(x, y), b.get_pixel(x, y), "pixel ({x}, {y})");
            }
        }
        assert_eq!(b.get_pixel(0, 0), Some((255, 0, 0)));
        assert_eq!(b.get_pixel(0, 1), Some((0, 0, 255)));
    }

    #[test]
    fn test_known_origin_color_in_square_window() {
        let n = 8u32;
        let mut pixels = vec![0u8; (n * n * 3) as usize];
        // Logique (0,0) = dernière ligne du buffer
        let i = ((n - 1) * n * 3) as usize;
        pixels[i..i + 3].copy_from_slice(&[12, 34, 56]);
        let lut = Lut::new(Settings::from_bounds(-1.0, 1.0, -1.0, 1.0, 8.0), n, n, pixels).unwrap();
        assert_eq!(lut.lookup(Complex64::new(-1.0, -1.0)), Some((12, 34, 56)));
        assert_eq!(lut.lookup(Complex64::new(-0.9, -0.9)), Some((12, 34, 56)));
        assert_eq!(lut.lookup(Complex64::new(1.0, 1.0)), None);
    }

    #[test]
    fn test_rejects_mismatched_buffer() {
        assert!(Lut::new(window(), 2, 2, vec![0; 5]).is_err());
    }
}
