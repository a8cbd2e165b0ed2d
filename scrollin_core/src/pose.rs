// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual states and transitions applied to reveal targets.

use crate::easing::Easing;

/// The two animated properties of a target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Vertical translation in pixels (positive is down).
    pub translate_y: f64,
}

impl Pose {
    /// Fully opaque at the resting position.
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        translate_y: 0.0,
    };

    /// Fully transparent, displaced by `offset` pixels.
    #[must_use]
    pub const fn hidden(offset: f64) -> Self {
        Self {
            opacity: 0.0,
            translate_y: offset,
        }
    }

    /// Interpolates towards `to` by eased progress `t` in `[0, 1]`.
    #[must_use]
    pub fn lerp(self, to: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            translate_y: self.translate_y + (to.translate_y - self.translate_y) * t,
        }
    }
}

/// Timing parameters of one target's transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Duration in seconds.
    pub duration: f64,
    /// Delay before the transition starts, in seconds.
    pub delay: f64,
    /// Progress curve.
    pub easing: Easing,
}

/// One target's part of a commit: where it goes and when.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cue {
    /// Index of the target in DOM order.
    pub index: usize,
    /// Pose the target starts from (the hidden state).
    pub from: Pose,
    /// Pose the target settles at.
    pub to: Pose,
    /// Timing for this target; `delay` carries the stagger.
    pub transition: Transition,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_pose_is_transparent_and_offset() {
        let p = Pose::hidden(20.0);
        assert_eq!(p.opacity, 0.0);
        assert_eq!(p.translate_y, 20.0);
    }

    #[test]
    fn lerp_hits_endpoints_and_clamps() {
        let from = Pose::hidden(14.0);
        assert_eq!(from.lerp(Pose::VISIBLE, 0.0), from);
        assert_eq!(from.lerp(Pose::VISIBLE, 1.0), Pose::VISIBLE);
        assert_eq!(from.lerp(Pose::VISIBLE, 2.0), Pose::VISIBLE);

        let mid = from.lerp(Pose::VISIBLE, 0.5);
        assert_eq!(mid.opacity, 0.5);
        assert_eq!(mid.translate_y, 7.0);
    }
}
