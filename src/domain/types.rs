//! Shared domain types.
//!
//! These types are kept lightweight and serializable so they can be:
//!
//! - used in-memory during a sweep
//! - exported to JSON/CSV
//! - reloaded later for plotting

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Tunable constants of the smooth growth model.
///
/// The regime boundaries (59 and 136 atoms) and the erf transition width are
/// fixed; these four knobs only shape the transitions and the high-n tail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthSettings {
    /// Steepness of the logistic blend centred on the first boundary.
    pub k1: f64,
    /// Width of the arcsine smoothstep window starting at the second boundary.
    pub d3: f64,
    /// Amplitude of the logarithmic tail.
    pub c: f64,
    /// Scale of the logarithmic tail (atoms per e-fold of `1 + x/d`).
    pub d: f64,
}

impl Default for GrowthSettings {
    fn default() -> Self {
        Self {
            k1: 0.1,
            d3: 50.0,
            c: 50.0,
            d: 5.0,
        }
    }
}

impl GrowthSettings {
    /// Reject settings that would make the model undefined or non-monotone.
    pub fn validate(&self) -> Result<(), AppError> {
        let fields = [("k1", self.k1), ("d3", self.d3), ("c", self.c), ("d", self.d)];
        for (name, value) in fields {
            if !(value.is_finite() && value > 0.0) {
                return Err(AppError::input(format!(
                    "Invalid growth setting {name}={value} (must be finite and > 0)."
                )));
            }
        }
        Ok(())
    }
}

/// Values of the regime formulas at the boundaries where they hand off.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchors {
    /// Regime 1 at the first boundary (= regime 2 there).
    pub first: f64,
    /// Regime 2 at the second boundary (= regime 3 there).
    pub second: f64,
}

/// A curve the memory sweep can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CurveKind {
    /// Theoretical maximum number of critical points.
    Theoretical,
    /// Piecewise-blended growth model.
    Smooth,
    /// `50·√n·(1 - e^(-n/50))`.
    SqrtDecay,
    /// `⌊5·√(100n)·(1 - e^(-n))⌋`.
    ModifiedSqrt,
    /// `256·n`.
    Linear,
}

impl CurveKind {
    pub const ALL: [CurveKind; 5] = [
        CurveKind::Theoretical,
        CurveKind::SqrtDecay,
        CurveKind::Linear,
        CurveKind::Smooth,
        CurveKind::ModifiedSqrt,
    ];

    /// Legend label.
    pub fn display_name(self) -> &'static str {
        match self {
            CurveKind::Theoretical => "Limit of maxCP",
            CurveKind::Smooth => "Function defined by parts",
            CurveKind::SqrtDecay => "Current implementation",
            CurveKind::ModifiedSqrt => "sqrt(n) with exponential decay",
            CurveKind::Linear => "Original implementation",
        }
    }

    /// Column prefix in CSV exports.
    pub fn slug(self) -> &'static str {
        match self {
            CurveKind::Theoretical => "theoretical",
            CurveKind::Smooth => "smooth",
            CurveKind::SqrtDecay => "sqrt_decay",
            CurveKind::ModifiedSqrt => "modified_sqrt",
            CurveKind::Linear => "linear",
        }
    }

    /// Bytes allocated per critical-point slot.
    pub fn bytes_per_unit(self) -> f64 {
        match self {
            CurveKind::Linear => 27.0,
            _ => 26.0,
        }
    }

    /// Glyph used by the ASCII plot.
    pub fn glyph(self) -> char {
        match self {
            CurveKind::Theoretical => 'T',
            CurveKind::Smooth => '*',
            CurveKind::SqrtDecay => 's',
            CurveKind::ModifiedSqrt => 'm',
            CurveKind::Linear => 'L',
        }
    }

    /// Convert a unit count into the memory figure plotted (bytes/1024).
    pub fn memory_mb(self, units: f64) -> f64 {
        self.bytes_per_unit() * units / 1024.0
    }
}

/// A sweep's configuration, derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub start: f64,
    pub end: f64,
    pub points: usize,
    pub curves: Vec<CurveKind>,
    pub settings: GrowthSettings,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_csv: Option<PathBuf>,
    pub export_json: Option<PathBuf>,
    pub svg: Option<PathBuf>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: 1.0,
            end: 600.0,
            points: 600,
            curves: CurveKind::ALL.to_vec(),
            settings: GrowthSettings::default(),
            plot: true,
            plot_width: 100,
            plot_height: 25,
            export_csv: None,
            export_json: None,
            svg: None,
        }
    }
}

/// One curve evaluated at one atom count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSample {
    pub kind: CurveKind,
    /// Estimated critical-point slots.
    pub units: f64,
    /// `bytes_per_unit · units / 1024`.
    pub memory_mb: f64,
}

/// All selected curves at one atom count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    pub natoms: f64,
    pub samples: Vec<CurveSample>,
}

impl SweepRow {
    pub fn sample(&self, kind: CurveKind) -> Option<&CurveSample> {
        self.samples.iter().find(|s| s.kind == kind)
    }
}

/// A saved sweep (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SweepFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub settings: GrowthSettings,
    pub anchors: Anchors,
    pub curves: Vec<CurveKind>,
    pub rows: Vec<SweepRow>,
}

/// 1s radial functions compared in the orbital figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum BasisSet {
    /// Exact Slater-type 1s orbital (ζ = 1).
    Slater,
    #[value(name = "sto-1g")]
    #[serde(rename = "sto-1g")]
    Sto1g,
    #[value(name = "sto-2g")]
    #[serde(rename = "sto-2g")]
    Sto2g,
    #[value(name = "sto-3g")]
    #[serde(rename = "sto-3g")]
    Sto3g,
    #[value(name = "6-31g")]
    #[serde(rename = "6-31g")]
    G631,
}

impl BasisSet {
    pub const ALL: [BasisSet; 5] = [
        BasisSet::Slater,
        BasisSet::Sto1g,
        BasisSet::Sto2g,
        BasisSet::Sto3g,
        BasisSet::G631,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            BasisSet::Slater => "Slater 1s",
            BasisSet::Sto1g => "STO-1G",
            BasisSet::Sto2g => "STO-2G",
            BasisSet::Sto3g => "STO-3G",
            BasisSet::G631 => "6-31G",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            BasisSet::Slater => "slater",
            BasisSet::Sto1g => "sto_1g",
            BasisSet::Sto2g => "sto_2g",
            BasisSet::Sto3g => "sto_3g",
            BasisSet::G631 => "g631",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            BasisSet::Slater => 'S',
            BasisSet::Sto1g => '1',
            BasisSet::Sto2g => '2',
            BasisSet::Sto3g => '3',
            BasisSet::G631 => '6',
        }
    }
}

/// Which radial quantity to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RadialQuantity {
    /// Normalized wavefunction `ψ(r)`.
    Wavefunction,
    /// Radial distribution `4πr²|ψ(r)|²`.
    Distribution,
}

/// Orbital comparison configuration, derived from CLI flags.
#[derive(Debug, Clone)]
pub struct OrbitalConfig {
    /// Grid end in bohr (grid starts at 0).
    pub r_max: f64,
    pub points: usize,
    pub basis: Vec<BasisSet>,
    pub quantity: RadialQuantity,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,
    /// Only the first `r_view` bohr are drawn (the grid still spans `r_max`).
    pub r_view: f64,

    pub export_csv: Option<PathBuf>,
    pub svg: Option<PathBuf>,
}

impl Default for OrbitalConfig {
    fn default() -> Self {
        Self {
            r_max: 8.0,
            points: 400,
            basis: BasisSet::ALL.to_vec(),
            quantity: RadialQuantity::Wavefunction,
            plot: true,
            plot_width: 100,
            plot_height: 25,
            r_view: 4.0,
            export_csv: None,
            svg: None,
        }
    }
}

/// A normalized radial profile for one basis set on a shared grid.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalProfile {
    pub basis: BasisSet,
    /// `ψ(r)`, normalized so that `Σ ψ² 4πr² dr = 1`.
    pub psi: Vec<f64>,
    /// `4πr²|ψ(r)|²`.
    pub distribution: Vec<f64>,
}

impl OrbitalProfile {
    pub fn values(&self, quantity: RadialQuantity) -> &[f64] {
        match quantity {
            RadialQuantity::Wavefunction => &self.psi,
            RadialQuantity::Distribution => &self.distribution,
        }
    }
}
