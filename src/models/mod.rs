//! Memory growth models.
//!
//! - `growth`: the piecewise-blended smooth model
//! - `baseline`: comparison formulas and per-curve dispatch

pub mod baseline;
pub mod growth;

pub use baseline::*;
pub use growth::*;
