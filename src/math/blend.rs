//! Blend weights used to splice piecewise curves together.
//!
//! Both weights are in `[0, 1]` and non-decreasing in `x`.

use std::f64::consts::{FRAC_PI_2, PI};

/// Logistic weight centred at `center` with steepness `k`.
///
/// Never reaches exactly 0 or 1 for finite arguments, so both sides of the
/// transition always contribute.
pub fn logistic(x: f64, center: f64, k: f64) -> f64 {
    1.0 / (1.0 + (-k * (x - center)).exp())
}

/// Arcsine smoothstep over the window `[start, start + width]`.
///
/// Exactly `0` at or before `start`, exactly `1` at or after `start + width`,
/// and `(asin(2t/width - 1) + π/2) / π` in between, where `t = x - start`.
pub fn arcsine_smoothstep(x: f64, start: f64, width: f64) -> f64 {
    let t = x - start;
    if t <= 0.0 {
        return 0.0;
    }
    if t >= width {
        return 1.0;
    }
    let u = 2.0 * t / width - 1.0;
    (u.asin() + FRAC_PI_2) / PI
}
