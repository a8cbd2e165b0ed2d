// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Target selection and stagger scheduling.
//!
//! A host with at least [`STAGGER_MIN_CHILDREN`] direct children reveals each
//! child on its own, delayed by `index * stagger`. Any smaller host reveals
//! itself as a single target with no stagger.

use alloc::vec;
use alloc::vec::Vec;

use crate::options::RevealOptions;
use crate::pose::{Cue, Pose, Transition};

/// Minimum number of direct children for per-child staggering.
pub const STAGGER_MIN_CHILDREN: usize = 3;

/// The ordered, non-empty set of elements a controller animates.
#[derive(Clone, Debug)]
pub struct Targets<T> {
    items: Vec<T>,
    stagger: f64,
}

impl<T> Targets<T> {
    /// Selects targets for `host` given its direct `children` in DOM order.
    ///
    /// `stagger` is used only when the children become the targets;
    /// otherwise the effective stagger is zero.
    #[must_use]
    pub fn select(host: T, children: Vec<T>, stagger: f64) -> Self {
        if children.len() >= STAGGER_MIN_CHILDREN {
            Self {
                items: children,
                stagger,
            }
        } else {
            Self {
                items: vec![host],
                stagger: 0.0,
            }
        }
    }

    /// Returns the targets in DOM order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns the number of targets (always at least one).
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Returns the effective per-index stagger, in seconds.
    #[must_use]
    pub fn stagger(&self) -> f64 {
        self.stagger
    }

    /// Returns the commit delay of target `index`, in seconds.
    #[must_use]
    pub fn delay(&self, index: usize) -> f64 {
        index as f64 * self.stagger
    }

    /// Builds the hidden-state transition every target is primed with.
    #[must_use]
    pub fn priming(&self, options: &RevealOptions) -> (Pose, Transition) {
        (
            Pose::hidden(options.offset),
            Transition {
                duration: options.duration,
                delay: 0.0,
                easing: options.easing,
            },
        )
    }

    /// Builds one [`Cue`] per target for a commit.
    #[must_use]
    pub fn cues(&self, options: &RevealOptions) -> Vec<Cue> {
        (0..self.items.len())
            .map(|index| Cue {
                index,
                from: Pose::hidden(options.offset),
                to: Pose::VISIBLE,
                transition: Transition {
                    duration: options.duration,
                    delay: self.delay(index),
                    easing: options.easing,
                },
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn few_children_collapse_to_host() {
        for n in 0..STAGGER_MIN_CHILDREN {
            let children: Vec<u32> = (1..=n as u32).collect();
            let t = Targets::select(0, children, 0.06);
            assert_eq!(t.as_slice(), &[0], "with {n} children");
            assert_eq!(t.stagger(), 0.0, "with {n} children");
            assert_eq!(t.delay(0), 0.0, "with {n} children");
        }
    }

    #[test]
    fn enough_children_become_targets() {
        let t = Targets::select(0, vec![1, 2, 3, 4, 5], 0.06);
        assert_eq!(t.count(), 5);
        assert_eq!(t.as_slice(), &[1, 2, 3, 4, 5]);
        for k in 0..5 {
            let expected = k as f64 * 0.06;
            assert_eq!(t.delay(k), expected, "delay of child {k}");
        }
    }

    #[test]
    fn cues_carry_stagger_and_options() {
        let options = RevealOptions::new().with_offset(20.0).with_duration(0.5);
        let t = Targets::select(0, vec![1, 2, 3], 0.1);
        let cues = t.cues(&options);
        assert_eq!(cues.len(), 3);
        assert_eq!(cues[2].index, 2);
        assert_eq!(cues[2].transition.delay, 0.2);
        assert_eq!(cues[2].transition.duration, 0.5);
        assert_eq!(cues[2].from, Pose::hidden(20.0));
        assert_eq!(cues[2].to, Pose::VISIBLE);
    }

    #[test]
    fn priming_has_zero_delay() {
        let t = Targets::select(0, vec![], 0.06);
        let (pose, transition) = t.priming(&RevealOptions::new());
        assert_eq!(pose, Pose::hidden(14.0));
        assert_eq!(transition.delay, 0.0);
        assert_eq!(transition.duration, 0.7);
    }
}
