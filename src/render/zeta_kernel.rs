use std::time::Instant;

use num_complex::Complex64;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::color::{color_for_iterations, color_for_value, gray_for_iterations, ColorMode, Rgb};
use crate::config::RenderParams;
use crate::error::{try_alloc_bytes, Result, ZetaError};
use crate::lut::ChainView;
use crate::view::PixelMapper;
use crate::zeta::{iterate_with, zeta_with, ZetaParams};

/// Couleur d'un point calculé (sans table de correspondance).
#[inline]
pub fn computed_color(z: Complex64, mode: ColorMode, zeta: &ZetaParams) -> Rgb {
    match mode {
        ColorMode::Domain => color_for_value(zeta_with(z, zeta)),
        ColorMode::Iterations => color_for_iterations(&iterate_with(z, zeta.epsilon, zeta)),
        ColorMode::Grayscale => gray_for_iterations(&iterate_with(z, zeta.epsilon, zeta), zeta.max_its),
    }
}

/// Couleur d'un point : la première table qui le contient l'emporte,
/// sinon la couleur est calculée.
#[inline]
pub fn pixel_color(z: Complex64, mode: ColorMode, zeta: &ZetaParams, luts: Option<ChainView<'_>>) -> Rgb {
    luts.and_then(|chain| chain.lookup(z))
        .unwrap_or_else(|| computed_color(z, mode, zeta))
}

/// Rend la fenêtre de `params` dans un buffer RGB (ligne du haut en premier,
/// `width * height * 3` octets).
///
/// Chaque ligne est calculée en parallèle avec rayon ; aucun pixel ne dépend
/// d'un autre. La chaîne de tables n'est accessible qu'en lecture.
pub fn render(params: &RenderParams, luts: Option<ChainView<'_>>) -> Result<Vec<u8>> {
    params.window.validate()?;
    let width = params.width as usize;
    let height = params.height as usize;
    let len = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .filter(|&n| n > 0)
        .ok_or(ZetaError::InvalidDimensions {
            width: params.width,
            height: params.height,
            len: 0,
        })?;

    let mut buffer = try_alloc_bytes(len, "image de sortie")?;
    let mapper = PixelMapper::new(params.window, params.width, params.height);
    let mode = params.color_mode;
    let zeta = params.zeta;
    let start = Instant::now();

    buffer
        .par_chunks_mut(width * 3)
        .enumerate()
        .for_each(|(row, line)| {
            // row_of est sa propre réciproque : ligne de buffer -> y logique
            let y = mapper.row_of(row as u32);
            for (x, rgb) in line.chunks_exact_mut(3).enumerate() {
                let z = mapper.to_complex(x as u32, y);
                let (r, g, b) = pixel_color(z, mode, &zeta, luts);
                rgb[0] = r;
                rgb[1] = g;
                rgb[2] = b;
            }
        });

    info!(
        "rendu {}x{} {} ({}) terminé",
        params.width,
        params.height,
        params.window,
        mode.name()
    );
    debug!(
        elapsed_ms = start.elapsed().as_millis() as u64,
        tables = luts.map_or(0, |c| c.len()),
        "durée du rendu"
    );
    Ok(buffer)
}
