//! Plot rendering.
//!
//! - `ascii`: deterministic terminal plots
//! - `svg`: figures rendered with Plotters

pub mod ascii;
pub mod svg;

pub use ascii::*;
pub use svg::*;
