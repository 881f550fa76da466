//! Input/output helpers.
//!
//! - CSV tables for sweeps and orbital profiles (`export`)
//! - sweep JSON read/write (`sweep_file`)

pub mod export;
pub mod sweep_file;

pub use export::*;
pub use sweep_file::*;
