// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing curves for the reveal transition.
//!
//! [`Easing`] is a CSS-style cubic Bézier from `(0, 0)` to `(1, 1)`. Only
//! curves that are monotone in time and never leave `[0, 1]` in progress are
//! accepted, so a reveal can never overshoot its resting pose or move
//! backwards mid-flight.

use core::fmt;

use kurbo::{CubicBez, ParamCurve};

/// Bisection steps used by [`Easing::sample`]. 2^-40 is far below a pixel.
const SOLVE_STEPS: u32 = 40;

/// A validated cubic Bézier timing curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Easing {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl Easing {
    /// Fast start, long smooth settle: `cubic-bezier(0.2, 0.8, 0.2, 1)`.
    ///
    /// This is the default reveal curve.
    pub const EASE_OUT: Self = Self {
        x1: 0.2,
        y1: 0.8,
        x2: 0.2,
        y2: 1.0,
    };

    /// Cubic ease-out (`1 - (1 - t)^3`), the usual tween-library default.
    pub const POWER3_OUT: Self = Self {
        x1: 0.215,
        y1: 0.61,
        x2: 0.355,
        y2: 1.0,
    };

    /// Constant-rate progress.
    pub const LINEAR: Self = Self {
        x1: 0.0,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    };

    /// Creates a curve from its two inner control points.
    ///
    /// # Errors
    ///
    /// Returns an [`EasingError`] if any coordinate is not finite, if an x
    /// coordinate lies outside `[0, 1]`, or if the y coordinates do not
    /// satisfy `0 <= y1 <= y2 <= 1` (which is what keeps progress monotone
    /// and free of overshoot).
    pub fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, EasingError> {
        if ![x1, y1, x2, y2].iter().all(|v| v.is_finite()) {
            return Err(EasingError::NonFinite);
        }
        if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
            return Err(EasingError::TimeOutOfRange);
        }
        if !(0.0 <= y1 && y1 <= y2 && y2 <= 1.0) {
            return Err(EasingError::Overshoot);
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Returns the inner control points as `[x1, y1, x2, y2]`.
    #[must_use]
    pub const fn control_points(&self) -> [f64; 4] {
        [self.x1, self.y1, self.x2, self.y2]
    }

    /// Returns eased progress for linear `progress` in `[0, 1]`.
    ///
    /// Inputs outside the unit interval are clamped.
    #[must_use]
    pub fn sample(&self, progress: f64) -> f64 {
        if progress.is_nan() || progress <= 0.0 {
            return 0.0;
        }
        if progress >= 1.0 {
            return 1.0;
        }

        let curve = CubicBez::new(
            (0.0, 0.0),
            (self.x1, self.y1),
            (self.x2, self.y2),
            (1.0, 1.0),
        );

        // x(t) is monotone because both inner x coordinates are in [0, 1].
        let (mut lo, mut hi) = (0.0, 1.0);
        for _ in 0..SOLVE_STEPS {
            let mid = 0.5 * (lo + hi);
            if curve.eval(mid).x < progress {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        curve.eval(0.5 * (lo + hi)).y.clamp(0.0, 1.0)
    }
}

impl Default for Easing {
    fn default() -> Self {
        Self::EASE_OUT
    }
}

/// Why a set of control points was rejected by [`Easing::cubic_bezier`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EasingError {
    /// A coordinate was NaN or infinite.
    NonFinite,
    /// An x coordinate was outside `[0, 1]`, making time non-monotone.
    TimeOutOfRange,
    /// The y coordinates would let progress dip or exceed the target.
    Overshoot,
}

impl fmt::Display for EasingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => f.write_str("easing control point is not finite"),
            Self::TimeOutOfRange => f.write_str("easing x coordinates must lie in [0, 1]"),
            Self::Overshoot => f.write_str("easing y coordinates must satisfy 0 <= y1 <= y2 <= 1"),
        }
    }
}

impl core::error::Error for EasingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for easing in [Easing::EASE_OUT, Easing::POWER3_OUT, Easing::LINEAR] {
            assert_eq!(easing.sample(0.0), 0.0, "{easing:?} at 0");
            assert_eq!(easing.sample(1.0), 1.0, "{easing:?} at 1");
        }
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        assert_eq!(Easing::EASE_OUT.sample(-0.5), 0.0);
        assert_eq!(Easing::EASE_OUT.sample(3.0), 1.0);
        assert_eq!(Easing::EASE_OUT.sample(f64::NAN), 0.0);
    }

    #[test]
    fn ease_out_front_loads_progress() {
        let half = Easing::EASE_OUT.sample(0.5);
        assert!(half > 0.8, "ease-out should be mostly done at half time, got {half}");
    }

    #[test]
    fn linear_tracks_input() {
        let v = Easing::LINEAR.sample(0.25);
        assert!(v > 0.2499 && v < 0.2501, "expected ~0.25, got {v}");
    }

    #[test]
    fn samples_are_monotone_and_bounded() {
        for easing in [Easing::EASE_OUT, Easing::POWER3_OUT] {
            let mut prev = 0.0;
            for i in 0..=200 {
                let v = easing.sample(f64::from(i) / 200.0);
                assert!(v >= prev, "{easing:?} went backwards at step {i}");
                assert!(v <= 1.0, "{easing:?} overshot at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn rejects_overshooting_curves() {
        assert_eq!(
            Easing::cubic_bezier(0.3, 1.4, 0.6, 1.0),
            Err(EasingError::Overshoot)
        );
        assert_eq!(
            Easing::cubic_bezier(0.3, 0.9, 0.6, 0.2),
            Err(EasingError::Overshoot)
        );
        assert_eq!(
            Easing::cubic_bezier(-0.1, 0.0, 0.6, 1.0),
            Err(EasingError::TimeOutOfRange)
        );
        assert_eq!(
            Easing::cubic_bezier(0.1, f64::NAN, 0.6, 1.0),
            Err(EasingError::NonFinite)
        );
    }

    #[test]
    fn accepts_the_default_curve() {
        let e = Easing::cubic_bezier(0.2, 0.8, 0.2, 1.0).unwrap();
        assert_eq!(e, Easing::EASE_OUT);
        assert_eq!(e.control_points(), [0.2, 0.8, 0.2, 1.0]);
    }
}
