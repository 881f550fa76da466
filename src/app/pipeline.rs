//! Shared compute steps used by every `cpg` subcommand.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! config -> model -> grid -> evaluation
//!
//! The command handlers can then focus on presentation (printing vs files).

use rayon::prelude::*;
use tracing::{debug, info};

use crate::domain::{CurveKind, CurveSample, OrbitalConfig, OrbitalProfile, SweepConfig, SweepRow};
use crate::error::AppError;
use crate::math::linspace;
use crate::models::{SmoothGrowthModel, units_for};
use crate::orbital::{profiles, radial_grid};

/// All computed outputs of a single memory sweep.
#[derive(Debug, Clone)]
pub struct SweepOutput {
    pub model: SmoothGrowthModel,
    pub rows: Vec<SweepRow>,
}

/// Normalized orbital profiles on their shared radial grid.
#[derive(Debug, Clone)]
pub struct OrbitalOutput {
    pub r: Vec<f64>,
    pub profiles: Vec<OrbitalProfile>,
}

/// Evaluate every selected curve over the configured atom-count grid.
pub fn run_sweep(config: &SweepConfig) -> Result<SweepOutput, AppError> {
    if config.curves.is_empty() {
        return Err(AppError::input("No curves selected for the sweep."));
    }
    if config.start < 0.0 {
        return Err(AppError::input(format!(
            "Sweep start must be >= 0 atoms, got {}.",
            config.start
        )));
    }

    let model = SmoothGrowthModel::new(config.settings)?;
    let grid = linspace(config.start, config.end, config.points)?;
    debug!(points = grid.len(), curves = config.curves.len(), "sweep grid ready");

    // Each grid point is independent; `collect` keeps grid order.
    let rows: Vec<SweepRow> = grid
        .par_iter()
        .map(|&n| sweep_row(&model, &config.curves, n))
        .collect();

    if let Some(bad) = rows
        .iter()
        .find(|row| row.samples.iter().any(|s| !s.memory_mb.is_finite()))
    {
        return Err(AppError::numeric(format!(
            "Non-finite memory estimate at n = {}.",
            bad.natoms
        )));
    }

    info!(
        points = rows.len(),
        start = config.start,
        end = config.end,
        "sweep complete"
    );
    Ok(SweepOutput { model, rows })
}

/// Evaluate `curves` at one atom count.
pub fn sweep_row(model: &SmoothGrowthModel, curves: &[CurveKind], natoms: f64) -> SweepRow {
    let samples = curves
        .iter()
        .map(|&kind| {
            let units = units_for(kind, model, natoms);
            CurveSample {
                kind,
                units,
                memory_mb: kind.memory_mb(units),
            }
        })
        .collect();
    SweepRow { natoms, samples }
}

/// Build the radial grid and normalize every selected basis set on it.
pub fn run_orbitals(config: &OrbitalConfig) -> Result<OrbitalOutput, AppError> {
    if config.basis.is_empty() {
        return Err(AppError::input("No basis sets selected."));
    }
    let r = radial_grid(config.r_max, config.points)?;
    let profiles = profiles(&config.basis, &r)?;
    info!(points = r.len(), basis = profiles.len(), "orbital profiles ready");
    Ok(OrbitalOutput { r, profiles })
}
