//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - growth model settings and cached anchors (`GrowthSettings`, `Anchors`)
//! - the curves a sweep can evaluate (`CurveKind`)
//! - sweep configuration and outputs (`SweepConfig`, `SweepRow`, `SweepFile`)
//! - orbital basis sets and profiles (`BasisSet`, `OrbitalConfig`, `OrbitalProfile`)

pub mod types;

pub use types::*;
