// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-supplied reveal configuration.

use crate::easing::Easing;
use crate::region::TriggerRegion;

/// Configuration for a [`RevealController`](crate::controller::RevealController).
///
/// Every field has a documented default; build from [`RevealOptions::new`]
/// (or [`Default`]) and override with the `with_*` methods.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    /// Vertical displacement of the hidden state, in pixels.
    pub offset: f64,
    /// Transition duration, in seconds.
    pub duration: f64,
    /// Extra delay per child index when staggering, in seconds.
    pub stagger: f64,
    /// Where in the viewport the reveal fires.
    pub trigger: TriggerRegion,
    /// Progress curve of the transition.
    pub easing: Easing,
}

impl RevealOptions {
    /// Default hidden-state offset (px).
    pub const DEFAULT_OFFSET: f64 = 14.0;
    /// Default duration (s).
    pub const DEFAULT_DURATION: f64 = 0.7;
    /// Default stagger increment (s).
    pub const DEFAULT_STAGGER: f64 = 0.06;

    /// Returns the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset: Self::DEFAULT_OFFSET,
            duration: Self::DEFAULT_DURATION,
            stagger: Self::DEFAULT_STAGGER,
            trigger: TriggerRegion::DEFAULT,
            easing: Easing::EASE_OUT,
        }
    }

    /// Overrides the hidden-state offset.
    #[must_use]
    pub const fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Overrides the transition duration.
    #[must_use]
    pub const fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Overrides the stagger increment.
    #[must_use]
    pub const fn with_stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    /// Overrides the trigger region.
    #[must_use]
    pub const fn with_trigger(mut self, trigger: TriggerRegion) -> Self {
        self.trigger = trigger;
        self
    }

    /// Overrides the easing curve.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Replaces unusable values with their defaults.
    ///
    /// A non-finite offset, and a non-finite or negative duration or stagger,
    /// fall back to the default for that field. Negative offsets are kept:
    /// they slide content down from above.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let seconds = |v: f64, default: f64| if v.is_finite() && v >= 0.0 { v } else { default };
        Self {
            offset: if self.offset.is_finite() {
                self.offset
            } else {
                Self::DEFAULT_OFFSET
            },
            duration: seconds(self.duration, Self::DEFAULT_DURATION),
            stagger: seconds(self.stagger, Self::DEFAULT_STAGGER),
            ..self
        }
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let o = RevealOptions::default();
        assert_eq!(o.offset, 14.0);
        assert_eq!(o.duration, 0.7);
        assert_eq!(o.stagger, 0.06);
        assert_eq!(o.trigger, TriggerRegion::DEFAULT);
        assert_eq!(o.easing, Easing::EASE_OUT);
    }

    #[test]
    fn builders_override_single_fields() {
        let o = RevealOptions::new().with_offset(20.0).with_duration(0.5);
        assert_eq!(o.offset, 20.0);
        assert_eq!(o.duration, 0.5);
        assert_eq!(o.stagger, RevealOptions::DEFAULT_STAGGER);
    }

    #[test]
    fn sanitize_replaces_unusable_values() {
        let o = RevealOptions::new()
            .with_offset(f64::NAN)
            .with_duration(-1.0)
            .with_stagger(f64::INFINITY)
            .sanitized();
        assert_eq!(o.offset, RevealOptions::DEFAULT_OFFSET);
        assert_eq!(o.duration, RevealOptions::DEFAULT_DURATION);
        assert_eq!(o.stagger, RevealOptions::DEFAULT_STAGGER);
    }

    #[test]
    fn sanitize_keeps_negative_offset_and_zero_times() {
        let o = RevealOptions::new()
            .with_offset(-8.0)
            .with_duration(0.0)
            .with_stagger(0.0)
            .sanitized();
        assert_eq!(o.offset, -8.0);
        assert_eq!(o.duration, 0.0);
        assert_eq!(o.stagger, 0.0);
    }
}
