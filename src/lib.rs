//! Rendu de la fonction zêta de Riemann sur le plan complexe.
//!
//! `zeta` évalue ζ(s) et l'itération s ← ζ(s), `lut` gère les tables de
//! correspondance multi-résolution, `render` produit les buffers RGB que
//! `io` écrit ou sert sur un flux.

pub mod color;
pub mod config;
pub mod error;
pub mod io;
pub mod lut;
pub mod render;
pub mod view;
pub mod zeta;
