//! Radial grids, numerical normalization, and radial distributions.
//!
//! Normalization uses the same left-point rule as the figure it reproduces:
//!
//! ```text
//! I = Σ ψ(rᵢ)² · 4π rᵢ² · dr,    ψ_norm = ψ / √I
//! ```
//!
//! so the normalized profile integrates to exactly 1 under that rule.

use std::f64::consts::PI;

use tracing::debug;

use crate::domain::{BasisSet, OrbitalProfile};
use crate::error::AppError;
use crate::math::{linspace, uniform_step};
use crate::orbital::basis::wavefunction;

/// Relative tolerance when checking that a grid is uniform.
const UNIFORM_TOL: f64 = 1e-9;

/// Uniform radial grid `[0, r_max]` with `points` samples.
pub fn radial_grid(r_max: f64, points: usize) -> Result<Vec<f64>, AppError> {
    linspace(0.0, r_max, points)
}

/// `Σ ψ² · 4πr² · dr` over a uniform grid.
pub fn radial_norm(r: &[f64], psi: &[f64]) -> Result<f64, AppError> {
    if r.len() != psi.len() {
        return Err(AppError::input(format!(
            "Grid/profile length mismatch: {} radii vs {} values.",
            r.len(),
            psi.len()
        )));
    }
    let dr = uniform_step(r, UNIFORM_TOL)
        .ok_or_else(|| AppError::input("Radial grid must be uniform with at least 2 points."))?;

    let integral: f64 = r
        .iter()
        .zip(psi)
        .map(|(&ri, &p)| p * p * 4.0 * PI * ri * ri)
        .sum::<f64>()
        * dr;
    Ok(integral)
}

/// Scale `psi` so that its radial norm on `r` is 1.
pub fn normalize_radial(r: &[f64], psi: &[f64]) -> Result<Vec<f64>, AppError> {
    let integral = radial_norm(r, psi)?;
    if !(integral.is_finite() && integral > 0.0) {
        return Err(AppError::numeric(format!(
            "Cannot normalize radial function (integral = {integral})."
        )));
    }
    let scale = integral.sqrt().recip();
    Ok(psi.iter().map(|p| p * scale).collect())
}

/// Radial distribution `4πr²|ψ(r)|²`.
pub fn radial_distribution(r: &[f64], psi: &[f64]) -> Vec<f64> {
    r.iter()
        .zip(psi)
        .map(|(&ri, &p)| 4.0 * PI * ri * ri * p.abs().powi(2))
        .collect()
}

/// Normalized profile of one basis set on `r`.
pub fn profile(basis: BasisSet, r: &[f64]) -> Result<OrbitalProfile, AppError> {
    let raw: Vec<f64> = r.iter().map(|&ri| wavefunction(basis, ri)).collect();
    let psi = normalize_radial(r, &raw)?;
    let distribution = radial_distribution(r, &psi);
    debug!(basis = basis.display_name(), psi0 = psi[0], "normalized radial profile");
    Ok(OrbitalProfile {
        basis,
        psi,
        distribution,
    })
}

/// Normalized profiles for several basis sets on a shared grid.
pub fn profiles(basis: &[BasisSet], r: &[f64]) -> Result<Vec<OrbitalProfile>, AppError> {
    basis.iter().map(|&b| profile(b, r)).collect()
}
