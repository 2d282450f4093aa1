use std::path::Path;

use crate::error::{Result, ZetaError};

/// Ordre de stockage des lignes d'une image décodée.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowOrder {
    /// Ligne du haut en premier (PNG, `image::RgbImage`).
    TopDown,
    /// Ligne du bas en premier (BMP brut).
    BottomUp,
}

/// Image RGB 8 bits décodée, telle que fournie par le codec.
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
    pub order: RowOrder,
}

impl DecodedImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>, order: RowOrder) -> Result<Self> {
        if width == 0 || height == 0 || pixels.len() != width as usize * height as usize * 3 {
            return Err(ZetaError::InvalidDimensions { width, height, len: pixels.len() });
        }
        Ok(Self { width, height, pixels, order })
    }

    /// Couleur à la ligne `row` comptée depuis le haut de l'image.
    pub fn pixel_from_top(&self, x: u32, row: u32) -> [u8; 3] {
        let stored_row = match self.order {
            RowOrder::TopDown => row,
            RowOrder::BottomUp => self.height - 1 - row,
        };
        let i = (stored_row as usize * self.width as usize + x as usize) * 3;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }
}

/// Codec capable de décoder un fichier image.
pub trait ImageSource {
    fn load(&self, path: &Path) -> Result<DecodedImage>;
}

/// Décodage via la crate `image` (tous les formats qu'elle supporte).
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageCrateSource;

impl ImageSource for ImageCrateSource {
    fn load(&self, path: &Path) -> Result<DecodedImage> {
        let img = image::open(path).map_err(|e| ZetaError::LoadImage {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        DecodedImage::new(width, height, rgb.into_raw(), RowOrder::TopDown).map_err(|e| {
            ZetaError::LoadImage {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })
    }
}
