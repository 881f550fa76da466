//! 1s radial functions: Slater orbital vs contracted Gaussian basis sets.
//!
//! - `basis`: primitive functions and contraction tables
//! - `radial`: grid normalization and radial distribution

pub mod basis;
pub mod radial;

pub use basis::*;
pub use radial::*;
