use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use num_complex::Complex64;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, ZetaError};
use crate::view::{PixelMapper, Settings};
use crate::zeta::{iterate_with, ZetaParams};

/// Grille carrée `size x size` des nombres d'itérations bruts sur
/// `[min, max]`, ligne 0 = `min.im` (orientation mathématique).
///
/// Utile aux appelants qui colorisent ou agrègent eux-mêmes les comptes.
pub fn iteration_grid(min: Complex64, max: Complex64, size: u32, params: &ZetaParams) -> Result<Vec<u32>> {
    let settings = Settings::new(min, max, size as f64);
    settings.validate()?;
    if size == 0 {
        return Err(ZetaError::InvalidDimensions { width: 0, height: 0, len: 0 });
    }
    let side = size as usize;
    let len = side * side;
    let mut data = Vec::new();
    data.try_reserve_exact(len).map_err(|_| ZetaError::OutOfMemory {
        what: "grille d'itérations",
        bytes: len * std::mem::size_of::<u32>(),
    })?;
    data.resize(len, 0u32);

    let mapper = PixelMapper::new(settings, size, size);
    data.par_chunks_mut(side)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, count) in row.iter_mut().enumerate() {
                let s = mapper.to_complex(x as u32, y as u32);
                *count = iterate_with(s, params.epsilon, params).count;
            }
        });

    Ok(data)
}

/// Tuile de comptes bruts, sérialisable en JSON pour un traitement externe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patch {
    pub min: Complex64,
    pub max: Complex64,
    pub size: u32,
    pub data: Vec<u32>,
}

impl Patch {
    pub fn compute(min: Complex64, max: Complex64, size: u32, params: &ZetaParams) -> Result<Self> {
        let data = iteration_grid(min, max, size, params)?;
        Ok(Self { min, max, size, data })
    }

    pub fn save_json(&self, output: &Path) -> Result<()> {
        let writer = BufWriter::new(File::create(output)?);
        serde_json::to_writer(writer, self)?;
        info!("tuile {}x{} écrite dans {}", self.size, self.size, output.display());
        Ok(())
    }
}
