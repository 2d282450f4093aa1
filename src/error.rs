use std::path::PathBuf;

use thiserror::Error;

/// Erreurs remontées par le moteur de rendu.
///
/// Les dégénérescences numériques (division par zéro, log(0)) ne passent pas
/// par ce type : elles produisent des valeurs non finies, traitées lors de
/// la colorisation.
#[derive(Error, Debug)]
pub enum ZetaError {
    #[error("allocation impossible pour {what} ({bytes} octets)")]
    OutOfMemory { what: &'static str, bytes: usize },

    #[error("impossible de charger l'image {}: {message}", path.display())]
    LoadImage { path: PathBuf, message: String },

    #[error("fenêtre dégénérée: min=({min_re}, {min_im}) max=({max_re}, {max_im})")]
    InvalidWindow {
        min_re: f64,
        min_im: f64,
        max_re: f64,
        max_im: f64,
    },

    #[error("dimensions invalides: {width}x{height} pour un buffer de {len} octets")]
    InvalidDimensions { width: u32, height: u32, len: usize },

    #[error("erreur d'écriture d'image: {0}")]
    Image(#[from] image::ImageError),

    #[error("configuration invalide: {0}")]
    Config(String),

    #[error("erreur d'E/S: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ZetaError {
    fn from(err: serde_json::Error) -> Self {
        ZetaError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ZetaError>;

/// Alloue un buffer d'octets initialisé à zéro sans avorter en cas d'échec.
pub fn try_alloc_bytes(len: usize, what: &'static str) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| ZetaError::OutOfMemory { what, bytes: len })?;
    buf.resize(len, 0);
    Ok(buf)
}
