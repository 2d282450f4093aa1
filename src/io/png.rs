use std::path::Path;

use image::RgbImage;
use tracing::info;

use crate::error::{Result, ZetaError};

/// Enregistre un buffer RGB (ligne du haut en premier) ; le format est
/// déduit de l'extension de `output` (PNG, BMP, ...).
pub fn save_rgb(width: u32, height: u32, buffer: Vec<u8>, output: &Path) -> Result<()> {
    let len = buffer.len();
    let img = RgbImage::from_raw(width, height, buffer)
        .ok_or(ZetaError::InvalidDimensions { width, height, len })?;

    // Avec image 0.25, save() détecte automatiquement le format depuis l'extension
    img.save(output)?;
    info!("image {}x{} écrite dans {}", width, height, output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::bitmap::{ImageCrateSource, ImageSource};

    #[test]
    fn test_save_then_load_keeps_row_order() {
        let path = std::env::temp_dir().join(format!("zeta-machine-{}-rows.png", std::process::id()));
        // 1x2 : rouge en haut, bleu en bas
        save_rgb(1, 2, vec![255, 0, 0, 0, 0, 255], &path).unwrap();
        let img = ImageCrateSource.load(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(img.pixel_from_top(0, 0), [255, 0, 0]);
        assert_eq!(img.pixel_from_top(0, 1), [0, 0, 255]);
    }

    #[test]
    fn test_rejects_short_buffer() {
        let path = std::env::temp_dir().join("zeta-machine-short.png");
        assert!(matches!(
            save_rgb(4, 4, vec![0; 10], &path),
            Err(ZetaError::InvalidDimensions { .. })
        ));
    }
}
