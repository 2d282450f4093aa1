//! Allocation du stockage des pixels des tables de correspondance.
//!
//! Les tables sont construites côté hôte, avant toute phase parallèle, puis
//! lues sans verrou par les workers. L'allocateur est un trait pour que les
//! tests puissent vérifier que chaque buffer est libéré exactement une fois.

use crate::error::{try_alloc_bytes, Result};

pub trait SharedMemory: Send + Sync {
    /// Alloue `len` octets initialisés à zéro.
    fn allocate(&self, len: usize) -> Result<Vec<u8>>;

    /// Rend un buffer obtenu par `allocate`.
    fn release(&self, buf: Vec<u8>);
}

/// Allocateur par défaut : mémoire hôte ordinaire, échec signalé sans avorter.
#[derive(Clone, Copy, Debug, Default)]
pub struct HostMemory;

impl SharedMemory for HostMemory {
    fn allocate(&self, len: usize) -> Result<Vec<u8>> {
        try_alloc_bytes(len, "table de correspondance")
    }

    fn release(&self, buf: Vec<u8>) {
        drop(buf);
    }
}
