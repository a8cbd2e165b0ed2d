// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and appends every event to a
//! list shared with a [`Recording`] handle. The sink can be boxed into a
//! controller while the handle stays with the caller for inspection.

use std::cell::RefCell;
use std::rc::Rc;

use scrollin_core::trace::{
    ArmEvent, CommitEvent, ConstructEvent, DisposeEvent, RegionFallbackEvent, RemeasureEvent,
    TraceSink, TriggerEvent,
};

/// One recorded trace event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// See [`TraceSink::on_construct`].
    Construct(ConstructEvent),
    /// See [`TraceSink::on_arm`].
    Arm(ArmEvent),
    /// See [`TraceSink::on_trigger`].
    Trigger(TriggerEvent),
    /// See [`TraceSink::on_commit`].
    Commit(CommitEvent),
    /// See [`TraceSink::on_remeasure`].
    Remeasure(RemeasureEvent),
    /// See [`TraceSink::on_dispose`].
    Dispose(DisposeEvent),
    /// See [`TraceSink::on_region_fallback`].
    RegionFallback(RegionFallbackEvent),
}

/// Shared view of the events a [`RecorderSink`] has received.
#[derive(Clone, Debug, Default)]
pub struct Recording {
    events: Rc<RefCell<Vec<RecordedEvent>>>,
}

impl Recording {
    /// Returns a copy of the events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.borrow().clone()
    }

    /// Returns the number of events recorded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

/// A [`TraceSink`] that records events in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    recording: Recording,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle that observes this recorder's events.
    #[must_use]
    pub fn recording(&self) -> Recording {
        self.recording.clone()
    }

    fn push(&mut self, e: RecordedEvent) {
        self.recording.events.borrow_mut().push(e);
    }
}

impl TraceSink for RecorderSink {
    fn on_construct(&mut self, e: &ConstructEvent) {
        self.push(RecordedEvent::Construct(*e));
    }

    fn on_arm(&mut self, e: &ArmEvent) {
        self.push(RecordedEvent::Arm(*e));
    }

    fn on_trigger(&mut self, e: &TriggerEvent) {
        self.push(RecordedEvent::Trigger(*e));
    }

    fn on_commit(&mut self, e: &CommitEvent) {
        self.push(RecordedEvent::Commit(*e));
    }

    fn on_remeasure(&mut self, e: &RemeasureEvent) {
        self.push(RecordedEvent::Remeasure(*e));
    }

    fn on_dispose(&mut self, e: &DisposeEvent) {
        self.push(RecordedEvent::Dispose(*e));
    }

    fn on_region_fallback(&mut self, e: &RegionFallbackEvent) {
        self.push(RecordedEvent::RegionFallback(*e));
    }
}
