// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Environment signals and the degradation ladder.
//!
//! A reveal is visual polish and must never keep content hidden. The decision
//! of how much of the behavior to run is made once, at construction, from
//! three read-only signals:
//!
//! 1. No windowed context → [`RevealMode::Inert`]: touch nothing.
//! 2. Reduced motion requested → [`RevealMode::Final`]: content stays in its
//!    final visible form, no hidden styling is ever written.
//! 3. No visibility observation → [`RevealMode::Immediate`]: hide, then
//!    commit in the same pass.
//! 4. Otherwise → [`RevealMode::Watch`]: hide, arm, and wait.

/// Read-only signals a backend reports about its host environment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EnvironmentSignals {
    /// A windowed (browser-like) context is available.
    pub windowed: bool,
    /// The user asked for reduced motion.
    pub reduced_motion: bool,
    /// A visibility-observation primitive is available.
    pub observation: bool,
}

impl EnvironmentSignals {
    /// A full-featured interactive environment.
    pub const INTERACTIVE: Self = Self {
        windowed: true,
        reduced_motion: false,
        observation: true,
    };

    /// No window at all (server rendering, workers).
    pub const HEADLESS: Self = Self {
        windowed: false,
        reduced_motion: false,
        observation: false,
    };

    /// Picks the rung of the degradation ladder these signals allow.
    #[must_use]
    pub const fn mode(&self) -> RevealMode {
        if !self.windowed {
            RevealMode::Inert
        } else if self.reduced_motion {
            RevealMode::Final
        } else if !self.observation {
            RevealMode::Immediate
        } else {
            RevealMode::Watch
        }
    }
}

/// How a controller behaves, decided once at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealMode {
    /// No windowed context; the controller is a no-op.
    Inert,
    /// Reduced motion; content is left in its final state without styling.
    Final,
    /// No observation primitive; hide and reveal in the same pass.
    Immediate,
    /// Normal path; hide, arm a visibility watch, reveal on trigger.
    Watch,
}

impl RevealMode {
    /// Returns `true` if this mode writes any styles to its targets.
    #[must_use]
    pub const fn animates(self) -> bool {
        matches!(self, Self::Immediate | Self::Watch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_priority_order() {
        let mut s = EnvironmentSignals {
            windowed: false,
            reduced_motion: true,
            observation: false,
        };
        assert_eq!(s.mode(), RevealMode::Inert);

        s.windowed = true;
        assert_eq!(s.mode(), RevealMode::Final);

        s.reduced_motion = false;
        assert_eq!(s.mode(), RevealMode::Immediate);

        s.observation = true;
        assert_eq!(s.mode(), RevealMode::Watch);
    }

    #[test]
    fn reduced_motion_wins_over_missing_observation() {
        let s = EnvironmentSignals {
            windowed: true,
            reduced_motion: true,
            observation: false,
        };
        assert_eq!(s.mode(), RevealMode::Final);
        assert!(!s.mode().animates());
    }

    #[test]
    fn presets() {
        assert_eq!(EnvironmentSignals::INTERACTIVE.mode(), RevealMode::Watch);
        assert_eq!(EnvironmentSignals::HEADLESS.mode(), RevealMode::Inert);
    }
}
