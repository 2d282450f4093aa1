//! Chaîne de tables de correspondance ordonnée par résolution décroissante.
//!
//! La chaîne est construite séquentiellement côté hôte, puis remise en
//! lecture seule à la phase parallèle via [`LutChain::view`]. La requête
//! `lookup` renvoie la première table qui contient le point, dans l'ordre de
//! la chaîne : c'est cet ordre qui permet à une table grossière de surcharger
//! (ou d'amorcer) un rendu fin.

use std::path::Path;

use num_complex::Complex64;
use tracing::{debug, info};

use crate::color::Rgb;
use crate::error::{Result, ZetaError};
use crate::io::bitmap::ImageSource;
use crate::view::Settings;

use super::memory::{HostMemory, SharedMemory};
use super::table::Lut;

pub struct LutChain<M: SharedMemory = HostMemory> {
    memory: M,
    luts: Vec<Lut>,
}

impl LutChain<HostMemory> {
    pub fn new() -> Self {
        Self::with_memory(HostMemory)
    }
}

impl Default for LutChain<HostMemory> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: SharedMemory> LutChain<M> {
    pub fn with_memory(memory: M) -> Self {
        Self { memory, luts: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.luts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.luts.is_empty()
    }

    /// Insère avant la première table dont `res` est inférieure ou égale :
    /// `res` décroissante, et à résolution égale la plus récente passe devant.
    pub fn insert(&mut self, lut: Lut) {
        let res = lut.res();
        let pos = self
            .luts
            .iter()
            .position(|existing| existing.res() <= res)
            .unwrap_or(self.luts.len());
        self.luts.insert(pos, lut);
        debug!(res, position = pos, count = self.luts.len(), "table insérée");
    }

    /// Décode `path`, construit la table dans le stockage de la chaîne et
    /// l'insère. En cas d'échec, rien n'est inséré.
    pub fn load_and_insert<S: ImageSource + ?Sized>(
        &mut self,
        settings: Settings,
        path: &Path,
        source: &S,
    ) -> Result<()> {
        settings.validate().map_err(|e| ZetaError::LoadImage {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let image = source.load(path)?;
        let lut = Lut::from_image(settings, &image, &self.memory)?;
        self.insert(lut);
        info!("Loaded LUT {} {}", path.display(), settings);
        Ok(())
    }

    /// Première couleur trouvée en parcourant la chaîne.
    pub fn lookup(&self, z: Complex64) -> Option<Rgb> {
        self.view().lookup(z)
    }

    /// Vue en lecture seule remise à la phase de rendu parallèle.
    pub fn view(&self) -> ChainView<'_> {
        ChainView { luts: &self.luts }
    }

    /// Résolutions dans l'ordre de consultation.
    pub fn resolutions(&self) -> Vec<f64> {
        self.luts.iter().map(Lut::res).collect()
    }

    /// Libère toutes les tables ; sans effet sur une chaîne vide.
    pub fn clear(&mut self) {
        for lut in self.luts.drain(..) {
            self.memory.release(lut.into_pixels());
        }
    }
}

impl<M: SharedMemory> Drop for LutChain<M> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Vue immuable de la chaîne, partageable entre threads.
#[derive(Clone, Copy)]
pub struct ChainView<'a> {
    luts: &'a [Lut],
}

impl<'a> ChainView<'a> {
    #[inline]
    pub fn lookup(&self, z: Complex64) -> Option<Rgb> {
        self.luts.iter().find_map(|lut| lut.lookup(z))
    }

    pub fn len(&self) -> usize {
        self.luts.len()
    }
}
