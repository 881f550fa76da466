//! Comparison curves drawn next to the smooth model.
//!
//! These are direct formulas with no state. `units_for` dispatches on
//! [`CurveKind`] so the sweep can stay generic over the curves it evaluates.

use crate::domain::CurveKind;
use crate::models::growth::SmoothGrowthModel;

/// Theoretical maximum number of critical points for `n` atoms.
///
/// Negative for `n < 3`; callers plotting on a log scale drop those points.
pub fn theoretical_max_cp(n: f64) -> f64 {
    n * (n - 1.0) + n * (n - 3.0) / 2.0 + 6.0 * n - 23.0
}

/// Square root with exponential decay: `50·√n·(1 - e^(-n/50))`.
pub fn sqrt_decay(n: f64) -> f64 {
    50.0 * n.sqrt() * -(-n / 50.0).exp_m1()
}

/// `5·√(100n)·(1 - e^(-n))`, truncated toward zero.
pub fn modified_sqrt(n: f64) -> f64 {
    (5.0 * (100.0 * n).sqrt() * -(-n).exp_m1()).trunc()
}

/// `256·n`.
pub fn linear(n: f64) -> f64 {
    256.0 * n
}

/// Unit count of `kind` at `n` atoms.
pub fn units_for(kind: CurveKind, model: &SmoothGrowthModel, n: f64) -> f64 {
    match kind {
        CurveKind::Theoretical => theoretical_max_cp(n),
        CurveKind::Smooth => model.evaluate(n) as f64,
        CurveKind::SqrtDecay => sqrt_decay(n),
        CurveKind::ModifiedSqrt => modified_sqrt(n),
        CurveKind::Linear => linear(n),
    }
}
