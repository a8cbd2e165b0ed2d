// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for reveal controllers.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that a
//! [`RevealController`](crate::controller::RevealController) calls at each
//! step of its lifecycle. All method bodies default to no-ops, so
//! implementing only the events you care about is fine.
//!
//! [`Tracer`] owns an optional boxed sink. When the `trace` feature is
//! **off**, every `Tracer` method compiles to nothing and the sink is dropped
//! at construction. When **on**, each method performs a single `Option`
//! branch before dispatching.

use alloc::boxed::Box;

use crate::controller::Phase;
use crate::environment::RevealMode;
use crate::region::{ParseRegionError, TriggerRegion};
use crate::scroll::ScrollContainer;

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted once per controller, after targets are selected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstructEvent {
    /// Rung of the degradation ladder taken.
    pub mode: RevealMode,
    /// Number of targets.
    pub targets: usize,
    /// Effective per-index stagger, in seconds.
    pub stagger: f64,
}

/// Emitted when a visibility watch has been requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArmEvent {
    /// Container the watch observes scrolling of.
    pub scroller: ScrollContainer,
    /// Whether the backend produced a watch; `false` degrades to an
    /// immediate reveal.
    pub watching: bool,
    /// Whether a deferred re-measurement was scheduled.
    pub remeasure_scheduled: bool,
}

/// What caused a reveal to commit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriggerSource {
    /// The visibility watch reported the host inside the trigger region.
    Watch,
    /// The deferred re-measurement found the host inside the region.
    Remeasure,
    /// No watch could be armed; revealed during construction.
    Immediate,
}

/// Emitted when the controller moves from armed to triggered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TriggerEvent {
    /// What fired.
    pub source: TriggerSource,
}

/// Emitted once per target as a commit starts its transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CommitEvent {
    /// Target index in DOM order.
    pub index: usize,
    /// Start delay, in seconds.
    pub delay: f64,
    /// Duration, in seconds.
    pub duration: f64,
}

/// Emitted when the deferred re-measurement runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemeasureEvent {
    /// `None` if the backend could not measure the host.
    pub reached: Option<bool>,
}

/// Emitted when a trigger-region descriptor was rejected and the default
/// region used instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionFallbackEvent {
    /// Why the descriptor was rejected.
    pub error: ParseRegionError,
    /// The region used in its place.
    pub fallback: TriggerRegion,
}

/// Emitted on the first `dispose` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisposeEvent {
    /// Phase the controller was in before disposal.
    pub from: Phase,
    /// Whether a still-pending watch was released.
    pub released_watch: bool,
    /// Whether disposal stopped a transition that was still running.
    pub halted_motion: bool,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from reveal controllers.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after targets are selected.
    fn on_construct(&mut self, e: &ConstructEvent) {
        _ = e;
    }

    /// Called after a watch is requested.
    fn on_arm(&mut self, e: &ArmEvent) {
        _ = e;
    }

    /// Called when the reveal is triggered.
    fn on_trigger(&mut self, e: &TriggerEvent) {
        _ = e;
    }

    /// Called for each target a commit starts.
    fn on_commit(&mut self, e: &CommitEvent) {
        _ = e;
    }

    /// Called when the deferred re-measurement runs.
    fn on_remeasure(&mut self, e: &RemeasureEvent) {
        _ = e;
    }

    /// Called on the first `dispose`.
    fn on_dispose(&mut self, e: &DisposeEvent) {
        _ = e;
    }

    /// Called when option parsing replaced a bad trigger region.
    fn on_region_fallback(&mut self, e: &RegionFallbackEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Owns an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
pub struct Tracer {
    #[cfg(feature = "trace")]
    sink: Option<Box<dyn TraceSink>>,
}

impl core::fmt::Debug for Tracer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

macro_rules! dispatch {
    ($(#[$doc:meta])* $name:ident, $method:ident, $event:ty) => {
        $(#[$doc])*
        #[inline]
        pub fn $name(&mut self, e: &$event) {
            #[cfg(feature = "trace")]
            if let Some(s) = &mut self.sink {
                s.$method(e);
            }
            #[cfg(not(feature = "trace"))]
            {
                _ = e;
            }
        }
    };
}

impl Tracer {
    /// Creates a tracer that dispatches to `sink`.
    #[inline]
    #[must_use]
    pub fn new(sink: Box<dyn TraceSink>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            drop(sink);
            Self {}
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {}
        }
    }

    /// Returns `true` if events reach a sink.
    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        #[cfg(feature = "trace")]
        {
            self.sink.is_some()
        }
        #[cfg(not(feature = "trace"))]
        {
            false
        }
    }

    dispatch!(
        /// Emits a [`ConstructEvent`].
        construct, on_construct, ConstructEvent
    );
    dispatch!(
        /// Emits an [`ArmEvent`].
        arm, on_arm, ArmEvent
    );
    dispatch!(
        /// Emits a [`TriggerEvent`].
        trigger, on_trigger, TriggerEvent
    );
    dispatch!(
        /// Emits a [`CommitEvent`].
        commit, on_commit, CommitEvent
    );
    dispatch!(
        /// Emits a [`RemeasureEvent`].
        remeasure, on_remeasure, RemeasureEvent
    );
    dispatch!(
        /// Emits a [`DisposeEvent`].
        dispose, on_dispose, DisposeEvent
    );
    dispatch!(
        /// Emits a [`RegionFallbackEvent`].
        region_fallback, on_region_fallback, RegionFallbackEvent
    );
}

impl Default for Tracer {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(all(test, feature = "trace"))]
mod tests {
    use alloc::rc::Rc;
    use core::cell::Cell;

    use super::*;

    struct Counting(Rc<Cell<u32>>);

    impl TraceSink for Counting {
        fn on_trigger(&mut self, _e: &TriggerEvent) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn dispatches_to_sink() {
        let hits = Rc::new(Cell::new(0));
        let mut tracer = Tracer::new(Box::new(Counting(Rc::clone(&hits))));
        assert!(tracer.is_enabled());
        tracer.trigger(&TriggerEvent {
            source: TriggerSource::Watch,
        });
        // Events the sink does not override fall through to the no-op default.
        tracer.remeasure(&RemeasureEvent { reached: None });
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn none_discards() {
        let mut tracer = Tracer::none();
        assert!(!tracer.is_enabled());
        tracer.trigger(&TriggerEvent {
            source: TriggerSource::Immediate,
        });
    }
}
