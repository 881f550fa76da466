//! Command-line parsing for the `cpg` binary.
//!
//! The goal of this module is to keep **argument parsing** separate from the
//! model/math code. Handlers in `app` turn these structs into plain configs.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::domain::{BasisSet, CurveKind, GrowthSettings, RadialQuantity};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "cpg", version, about = "Critical-point memory growth curves and orbital figures")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sweep atom counts, print a memory table/plot, and optionally export.
    Sweep(SweepArgs),
    /// Print every stage of the smooth model for the given atom counts.
    Eval(EvalArgs),
    /// Plot a previously exported sweep JSON.
    Plot(PlotArgs),
    /// Compare the Slater 1s orbital with contracted Gaussian basis sets.
    Orbitals(OrbitalArgs),
}

/// Smooth model constants.
#[derive(Debug, Args, Clone)]
pub struct SettingsArgs {
    /// Steepness of the logistic blend around 59 atoms.
    #[arg(long, default_value_t = 0.1)]
    pub k1: f64,

    /// Width (atoms) of the smoothstep window starting at 136 atoms.
    #[arg(long, default_value_t = 50.0)]
    pub d3: f64,

    /// Amplitude of the logarithmic tail.
    #[arg(long, default_value_t = 50.0)]
    pub c: f64,

    /// Scale (atoms) of the logarithmic tail.
    #[arg(long, default_value_t = 5.0)]
    pub d: f64,
}

impl SettingsArgs {
    pub fn to_settings(&self) -> GrowthSettings {
        GrowthSettings {
            k1: self.k1,
            d3: self.d3,
            c: self.c,
            d: self.d,
        }
    }
}

/// Options for `cpg sweep`.
#[derive(Debug, Args, Clone)]
pub struct SweepArgs {
    /// First atom count.
    #[arg(long, default_value_t = 1.0)]
    pub start: f64,

    /// Last atom count.
    #[arg(long, default_value_t = 600.0)]
    pub end: f64,

    /// Number of evenly spaced atom counts.
    #[arg(long, default_value_t = 600)]
    pub points: usize,

    /// Curves to evaluate (repeatable; default: all).
    #[arg(long = "curve", value_enum)]
    pub curves: Vec<CurveKind>,

    #[command(flatten)]
    pub settings: SettingsArgs,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export the sweep to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the sweep (settings + rows) to JSON.
    #[arg(long = "export-json")]
    pub export_json: Option<PathBuf>,

    /// Render the memory figure to SVG.
    #[arg(long)]
    pub svg: Option<PathBuf>,
}

/// Options for `cpg eval`.
#[derive(Debug, Args, Clone)]
pub struct EvalArgs {
    /// Atom counts to evaluate (negative values are clamped to 0).
    #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
    pub natoms: Vec<f64>,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

/// Options for plotting a saved sweep.
#[derive(Debug, Args, Clone)]
pub struct PlotArgs {
    /// Sweep JSON file produced by `cpg sweep --export-json`.
    #[arg(long, value_name = "JSON")]
    pub sweep: PathBuf,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Also render the figure to SVG.
    #[arg(long)]
    pub svg: Option<PathBuf>,
}

/// Options for `cpg orbitals`.
#[derive(Debug, Args, Clone)]
pub struct OrbitalArgs {
    /// Grid end (bohr); the grid starts at 0.
    #[arg(long, default_value_t = 8.0)]
    pub r_max: f64,

    /// Number of grid points.
    #[arg(long, default_value_t = 400)]
    pub points: usize,

    /// Basis sets to compare (repeatable; default: all).
    #[arg(long = "basis", value_enum)]
    pub basis: Vec<BasisSet>,

    /// Quantity to plot.
    #[arg(long, value_enum, default_value_t = RadialQuantity::Wavefunction)]
    pub quantity: RadialQuantity,

    /// Only draw r <= this value (bohr).
    #[arg(long)]
    pub r_view: Option<f64>,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export ψ and the radial distribution to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Render the figure to SVG.
    #[arg(long)]
    pub svg: Option<PathBuf>,
}
