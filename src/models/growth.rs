//! Piecewise-blended growth model for critical-point memory.
//!
//! Three closed-form regimes describe how many critical-point slots a system
//! with `n` atoms needs:
//!
//! - regime 1 (small systems): `f1(n) = n(n-1)/2 + n/2 + n/3`
//! - regime 2 (mid-size): `f2(n) = f1(59) + 500·erf((n - 59)/50)`
//! - regime 3 (large): `f3(n) = f2(136) + C·log1p(max(n - 136, 0)/D)`
//!
//! Regimes 2 and 3 are anchored on the value of the previous regime at its
//! boundary, so each pair agrees exactly where they hand off. The composite is
//!
//! ```text
//! mid(n) = (1 - w1)·f1 + w1·f2          w1 = logistic(n; 59, k1)
//! out(n) = (1 - w2)·mid + w2·f3         w2 = arcsine_smoothstep(n; 136, D3)
//! ```
//!
//! truncated toward zero. Only the final value is truncated.

use tracing::trace;

use crate::domain::{Anchors, GrowthSettings};
use crate::error::AppError;
use crate::math::{arcsine_smoothstep, erf, logistic};

/// Boundary between regime 1 and regime 2 (atoms).
pub const FIRST_BOUNDARY: f64 = 59.0;

/// Boundary between regime 2 and regime 3 (atoms).
pub const SECOND_BOUNDARY: f64 = 136.0;

/// Width of the erf transition in regime 2 (atoms).
pub const ERF_WIDTH: f64 = 50.0;

/// Asymptotic rise of regime 2 above its anchor.
pub const ERF_AMPLITUDE: f64 = 500.0;

/// Every intermediate of one evaluation, for reports and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stages {
    pub n: f64,
    pub regime1: f64,
    pub regime2: f64,
    pub regime3: f64,
    pub w1: f64,
    pub mid: f64,
    pub w2: f64,
    pub blend: f64,
    pub value: u64,
}

/// The smooth growth model.
///
/// Holds its settings and the anchors derived from them; both are fixed at
/// construction. Evaluation is pure, so one instance can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothGrowthModel {
    settings: GrowthSettings,
    anchors: Anchors,
}

impl Default for SmoothGrowthModel {
    fn default() -> Self {
        Self::from_valid(GrowthSettings::default())
    }
}

impl SmoothGrowthModel {
    /// Build a model, validating the settings.
    pub fn new(settings: GrowthSettings) -> Result<Self, AppError> {
        settings.validate()?;
        let model = Self::from_valid(settings);
        trace!(
            first = model.anchors.first,
            second = model.anchors.second,
            "growth model anchors"
        );
        Ok(model)
    }

    fn from_valid(settings: GrowthSettings) -> Self {
        let first = regime1(FIRST_BOUNDARY);
        let second = regime2_from(first, SECOND_BOUNDARY);
        Self {
            settings,
            anchors: Anchors { first, second },
        }
    }

    pub fn settings(&self) -> &GrowthSettings {
        &self.settings
    }

    pub fn anchors(&self) -> Anchors {
        self.anchors
    }

    /// Regime 1: quadratic growth.
    pub fn regime1(&self, n: f64) -> f64 {
        regime1(n)
    }

    /// Regime 2: erf rise anchored on regime 1 at the first boundary.
    pub fn regime2(&self, n: f64) -> f64 {
        regime2_from(self.anchors.first, n)
    }

    /// Regime 3: logarithmic tail anchored on regime 2 at the second boundary.
    pub fn regime3(&self, n: f64) -> f64 {
        let x = (n - SECOND_BOUNDARY).max(0.0);
        self.anchors.second + self.settings.c * (x / self.settings.d).ln_1p()
    }

    /// Logistic weight of regime 2 against regime 1.
    pub fn logistic_weight(&self, n: f64) -> f64 {
        logistic(n, FIRST_BOUNDARY, self.settings.k1)
    }

    /// Smoothstep weight of regime 3 against the regime 1/2 mix.
    pub fn smoothstep_weight(&self, n: f64) -> f64 {
        arcsine_smoothstep(n, SECOND_BOUNDARY, self.settings.d3)
    }

    /// The blended curve before truncation.
    ///
    /// Negative and NaN sizes are clamped to 0.
    pub fn blend(&self, n: f64) -> f64 {
        self.stages(n).blend
    }

    /// Estimated critical-point slots for `n` atoms.
    ///
    /// Negative and NaN sizes are clamped to 0; `+∞` saturates to `u64::MAX`.
    pub fn evaluate(&self, n: f64) -> u64 {
        self.stages(n).value
    }

    /// Evaluate and keep every intermediate.
    pub fn stages(&self, n: f64) -> Stages {
        let n = clamp_size(n);

        let regime1 = self.regime1(n);
        let regime2 = self.regime2(n);
        let regime3 = self.regime3(n);

        let w1 = self.logistic_weight(n);
        let w2 = self.smoothstep_weight(n);

        let mid = (1.0 - w1) * regime1 + w1 * regime2;
        // Past the window the output is regime 3 alone. Short-circuiting also
        // keeps an overflowing regime 1 (n ~ 1e154) from turning 0·∞ into NaN.
        let blend = if w2 == 1.0 {
            regime3
        } else {
            (1.0 - w2) * mid + w2 * regime3
        };

        Stages {
            n,
            regime1,
            regime2,
            regime3,
            w1,
            mid,
            w2,
            blend,
            value: truncate_units(blend),
        }
    }
}

fn regime1(n: f64) -> f64 {
    n * (n - 1.0) / 2.0 + n / 2.0 + n / 3.0
}

fn regime2_from(anchor: f64, n: f64) -> f64 {
    anchor + ERF_AMPLITUDE * erf((n - FIRST_BOUNDARY) / ERF_WIDTH)
}

fn clamp_size(n: f64) -> f64 {
    // `f64::max` returns the non-NaN operand, so NaN maps to 0 as well.
    n.max(0.0)
}

/// Truncate toward zero; `as` saturates at `u64::MAX` for `+∞`.
fn truncate_units(value: f64) -> u64 {
    value.trunc() as u64
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn model() -> SmoothGrowthModel {
        SmoothGrowthModel::new(GrowthSettings::default()).unwrap()
    }

    #[test]
    fn anchors_match_regimes_at_boundaries() {
        let m = model();
        let a = m.anchors();
        assert_eq!(a.first, m.regime1(FIRST_BOUNDARY));
        assert_eq!(a.first, m.regime2(FIRST_BOUNDARY));
        assert_eq!(a.second, m.regime2(SECOND_BOUNDARY));
        assert_eq!(a.second, m.regime3(SECOND_BOUNDARY));
        assert!((a.first - 1760.1666666666667).abs() < 1e-9);
        assert!((a.second - 2245.4595115973484).abs() < 1e-9);
    }

    #[test]
    fn blend_at_first_boundary_equals_shared_anchor() {
        let m = model();
        let s = m.stages(FIRST_BOUNDARY);
        assert_eq!(s.w1, 0.5);
        assert_eq!(s.w2, 0.0);
        assert!((s.blend - m.anchors().first).abs() < 1e-9);
        assert_eq!(m.evaluate(FIRST_BOUNDARY), 1760);
    }

    #[test]
    fn continuous_across_boundaries() {
        let m = model();
        for boundary in [FIRST_BOUNDARY, SECOND_BOUNDARY] {
            let below = m.blend(boundary - 1e-6);
            let at = m.blend(boundary);
            assert!(
                (below - at).abs() < 1e-3,
                "jump at {boundary}: {below} vs {at}"
            );
            let diff = m.evaluate(boundary - 1e-6).abs_diff(m.evaluate(boundary));
            assert!(diff <= 1, "integer jump at {boundary}: {diff}");
        }
    }

    #[test]
    fn near_second_boundary_close_to_anchor() {
        let m = model();
        // The logistic tail of regime 1 still adds a few units at n = 136.
        let v = m.evaluate(SECOND_BOUNDARY) as f64;
        assert!((v - m.anchors().second).abs() < 5.0, "evaluate(136) = {v}");
        assert_eq!(m.evaluate(SECOND_BOUNDARY), 2248);
    }

    #[test]
    fn non_decreasing_over_plot_range() {
        let m = model();
        let mut max_blend = f64::NEG_INFINITY;
        let mut max_units = 0u64;
        for i in 0..=59_900 {
            let n = 1.0 + i as f64 * 0.01;
            let blend = m.blend(n);
            assert!(
                max_blend - blend < 0.05,
                "blend dropped at n={n}: {blend} < {max_blend}"
            );
            max_blend = max_blend.max(blend);

            let units = m.evaluate(n);
            assert!(units + 1 >= max_units, "units dropped at n={n}");
            max_units = max_units.max(units);
        }
    }

    #[test]
    fn saturates_to_regime3_after_window() {
        let m = model();
        for n in [186.0, 186.5, 250.0, 600.0, 1e6] {
            let s = m.stages(n);
            assert_eq!(s.w2, 1.0);
            assert_eq!(m.evaluate(n), m.regime3(n).trunc() as u64);
        }
        assert_eq!(m.evaluate(600.0), 2472);
    }

    #[test]
    fn small_sizes_follow_regime1() {
        let m = model();
        assert_eq!(m.evaluate(0.0), 3);
        assert_eq!(m.evaluate(1.0), 4);
        assert!(m.evaluate(1.0) < 10);
        // The logistic already mixes in a little of regime 2.
        let s = m.stages(1.0);
        assert!(s.w1 > 0.0 && s.w1 < 0.01);
        assert!(s.blend >= s.regime1);
    }

    #[test]
    fn truncation_applies_only_to_final_value() {
        let m = model();
        let s = m.stages(100.0);
        assert!(s.blend.fract() != 0.0);
        assert_eq!(s.value, s.blend.trunc() as u64);
        assert!(s.mid.fract() != 0.0);
    }

    #[test]
    fn out_of_domain_sizes_are_clamped() {
        let m = model();
        assert_eq!(m.evaluate(-5.0), m.evaluate(0.0));
        assert_eq!(m.evaluate(f64::NAN), m.evaluate(0.0));
        assert_eq!(m.evaluate(f64::INFINITY), u64::MAX);
        assert!(m.blend(1e200).is_finite());
    }

    #[test]
    fn deterministic_for_random_sizes() {
        let m = model();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let n: f64 = rng.gen_range(0.0..600.0);
            assert_eq!(m.evaluate(n), m.evaluate(n));
            assert_eq!(m.blend(n).to_bits(), m.blend(n).to_bits());
        }
    }

    #[test]
    fn settings_change_only_the_transitions() {
        let wide = SmoothGrowthModel::new(GrowthSettings {
            c: 100.0,
            d: 10.0,
            ..GrowthSettings::default()
        })
        .unwrap();
        let base = model();
        assert_eq!(wide.anchors(), base.anchors());
        assert_eq!(wide.evaluate(30.0), base.evaluate(30.0));
        assert!(wide.evaluate(600.0) > base.evaluate(600.0));
    }

    #[test]
    fn rejects_invalid_settings() {
        let err = SmoothGrowthModel::new(GrowthSettings {
            d: -1.0,
            ..GrowthSettings::default()
        })
        .unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn model_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SmoothGrowthModel>();

        let m = model();
        let handles: Vec<_> = (0..4)
            .map(|t| std::thread::spawn(move || m.evaluate(100.0 + t as f64)))
            .collect();
        let got: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let expected: Vec<u64> = (0..4).map(|t| m.evaluate(100.0 + t as f64)).collect();
        assert_eq!(got, expected);
    }
}
