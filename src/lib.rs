//! `cp-growth` library crate.
//!
//! Estimates how much memory a critical-point search needs as a function of
//! the number of atoms, using a piecewise-blended growth model, and compares it
//! with baseline formulas. A second, smaller area normalizes 1s radial
//! functions (Slater vs contracted Gaussians).
//!
//! The binary (`cpg`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the model can be embedded elsewhere (`models::SmoothGrowthModel`)

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod models;
pub mod orbital;
pub mod plot;
pub mod report;
