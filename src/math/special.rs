//! Special functions missing from `std`.
//!
//! `f64::erf` is not stable, so we carry our own. The growth model truncates its
//! output to an integer, which means a low-precision approximation (e.g. the
//! 7-digit Abramowitz–Stegun fit) can move a value across an integer boundary.
//! We therefore use two near-machine-precision forms:
//!
//! - `|x| < 3`: the positive-term series
//!   `erf(x) = 2/√π · exp(-x²) · Σ 2ᵏ x^(2k+1) / (1·3·…·(2k+1))`
//! - `3 ≤ |x| < 6`: `1 - erfc(x)` with the Laplace continued fraction for `erfc`
//! - `|x| ≥ 6`: `±1` (erfc(6) is below one ulp of 1.0)

use std::f64::consts::PI;

/// Switch point between the series and the continued fraction.
const SERIES_LIMIT: f64 = 3.0;

/// Beyond this, `erf(x)` rounds to exactly `±1.0`.
const SATURATION: f64 = 6.0;

/// Depth of the backward-evaluated continued fraction.
const CF_TERMS: usize = 60;

const MAX_SERIES_TERMS: usize = 200;

/// Error function.
///
/// Odd, total over finite inputs, `erf(0) == 0` exactly. Returns NaN for NaN.
pub fn erf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == 0.0 {
        return x;
    }
    if x < 0.0 {
        return -erf(-x);
    }
    if x >= SATURATION {
        return 1.0;
    }
    if x < SERIES_LIMIT {
        erf_series(x)
    } else {
        1.0 - erfc_continued_fraction(x)
    }
}

/// Complementary error function, `1 - erf(x)`.
pub fn erfc(x: f64) -> f64 {
    if x >= SERIES_LIMIT && x < SATURATION {
        return erfc_continued_fraction(x);
    }
    1.0 - erf(x)
}

fn erf_series(x: f64) -> f64 {
    let x2 = x * x;
    let mut term = x;
    let mut sum = x;
    for k in 1..MAX_SERIES_TERMS {
        term *= 2.0 * x2 / (2 * k + 1) as f64;
        sum += term;
        if term < sum * 1e-17 {
            break;
        }
    }
    2.0 / PI.sqrt() * (-x2).exp() * sum
}

/// `erfc(x) = exp(-x²)/√π · 1/(x + ½/(x + 1/(x + ³⁄₂/(x + …))))`, valid for `x > 0`.
fn erfc_continued_fraction(x: f64) -> f64 {
    let mut tail = x;
    for k in (1..=CF_TERMS).rev() {
        tail = x + (k as f64 / 2.0) / tail;
    }
    (-x * x).exp() / (PI.sqrt() * tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erf_matches_reference_values() {
        let cases = [
            (0.1, 0.1124629160182849),
            (0.5, 0.5204998778130465),
            (1.0, 0.8427007929497149),
            (1.54, 0.9705856898613637),
            (2.0, 0.9953222650189527),
            (2.9, 0.9999589021219005),
            (3.5, 0.9999992569016276),
        ];
        for (x, expected) in cases {
            let got = erf(x);
            assert!(
                (got - expected).abs() < 1e-12,
                "erf({x}) = {got}, expected {expected}"
            );
        }
    }

    #[test]
    fn erf_is_odd_and_saturates() {
        assert_eq!(erf(0.0), 0.0);
        for &x in &[0.3, 1.18, 2.5, 4.0] {
            assert_eq!(erf(-x), -erf(x));
        }
        assert_eq!(erf(6.0), 1.0);
        assert_eq!(erf(-50.0), -1.0);
        assert!(erf(f64::NAN).is_nan());
    }

    #[test]
    fn erf_is_continuous_across_branch_switch() {
        let below = erf(SERIES_LIMIT - 1e-9);
        let above = erf(SERIES_LIMIT);
        assert!((below - above).abs() < 1e-12);
    }

    #[test]
    fn erfc_tail_keeps_precision() {
        // erfc(4) = 1.541725790028002e-8
        let got = erfc(4.0);
        assert!((got - 1.541725790028002e-8).abs() / 1.541725790028002e-8 < 1e-9);
    }
}
