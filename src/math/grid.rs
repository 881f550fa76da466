//! Sampling grids.
//!
//! Sweeps and radial profiles are evaluated on deterministic, evenly spaced
//! grids so that repeated runs produce identical tables and figures.

use crate::error::AppError;

/// Generate `points` evenly spaced values from `start` to `end` (inclusive).
///
/// The last value is exactly `end`.
pub fn linspace(start: f64, end: f64, points: usize) -> Result<Vec<f64>, AppError> {
    if !(start.is_finite() && end.is_finite() && end > start) {
        return Err(AppError::input(format!(
            "Invalid grid range: start={start}, end={end} (must be finite and end>start)."
        )));
    }
    if points < 2 {
        return Err(AppError::input("Grid needs at least 2 points."));
    }

    let step = (end - start) / (points as f64 - 1.0);
    let mut out = Vec::with_capacity(points);
    for i in 0..points - 1 {
        out.push(start + step * i as f64);
    }
    out.push(end);
    Ok(out)
}

/// Spacing of a uniform grid, or `None` if it is not uniform within `tol`.
pub fn uniform_step(values: &[f64], tol: f64) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let step = values[1] - values[0];
    if !(step.is_finite() && step > 0.0) {
        return None;
    }
    let uniform = values
        .windows(2)
        .all(|w| ((w[1] - w[0]) - step).abs() <= tol * step);
    uniform.then_some(step)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_endpoints() {
        let v = linspace(1.0, 600.0, 600).unwrap();
        assert_eq!(v.len(), 600);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[1], 2.0);
        assert_eq!(v[599], 600.0);
    }

    #[test]
    fn linspace_rejects_bad_input() {
        assert_eq!(linspace(0.0, 1.0, 1).unwrap_err().exit_code(), 2);
        assert!(linspace(5.0, 1.0, 10).is_err());
        assert!(linspace(0.0, f64::INFINITY, 10).is_err());
    }

    #[test]
    fn uniform_step_detects_spacing() {
        let v = linspace(0.0, 8.0, 401).unwrap();
        let step = uniform_step(&v, 1e-9).unwrap();
        assert!((step - 0.02).abs() < 1e-15);
        assert_eq!(uniform_step(&[0.0, 1.0, 3.0], 1e-9), None);
        assert_eq!(uniform_step(&[1.0], 1e-9), None);
    }
}
