// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON-lines trace output.
//!
//! [`JsonLinesSink`] writes one JSON object per event, each carrying an
//! `"event"` tag and a monotonically increasing `"seq"` number, suitable for
//! shipping to a log pipeline or diffing between runs.

use std::io::Write;

use serde_json::{Value, json};

use scrollin_core::trace::{
    ArmEvent, CommitEvent, ConstructEvent, DisposeEvent, RegionFallbackEvent, RemeasureEvent,
    TraceSink, TriggerEvent,
};

/// Writes one JSON object per trace event.
pub struct JsonLinesSink<W: Write> {
    writer: W,
    seq: u64,
}

impl<W: Write> std::fmt::Debug for JsonLinesSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonLinesSink")
            .field("seq", &self.seq)
            .finish_non_exhaustive()
    }
}

impl<W: Write> JsonLinesSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer, seq: 0 }
    }

    /// Consumes the sink and returns its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn emit(&mut self, event: &str, mut fields: Value) {
        if let Value::Object(map) = &mut fields {
            map.insert("event".into(), Value::from(event));
            map.insert("seq".into(), Value::from(self.seq));
        }
        self.seq += 1;
        if serde_json::to_writer(&mut self.writer, &fields).is_ok() {
            let _ = self.writer.write_all(b"\n");
        }
    }
}

impl<W: Write> TraceSink for JsonLinesSink<W> {
    fn on_construct(&mut self, e: &ConstructEvent) {
        self.emit(
            "construct",
            json!({
                "mode": format!("{:?}", e.mode),
                "targets": e.targets,
                "stagger": e.stagger,
            }),
        );
    }

    fn on_arm(&mut self, e: &ArmEvent) {
        self.emit(
            "arm",
            json!({
                "scroller": format!("{:?}", e.scroller),
                "watching": e.watching,
                "remeasure_scheduled": e.remeasure_scheduled,
            }),
        );
    }

    fn on_trigger(&mut self, e: &TriggerEvent) {
        self.emit("trigger", json!({ "source": format!("{:?}", e.source) }));
    }

    fn on_commit(&mut self, e: &CommitEvent) {
        self.emit(
            "commit",
            json!({
                "index": e.index,
                "delay": e.delay,
                "duration": e.duration,
            }),
        );
    }

    fn on_remeasure(&mut self, e: &RemeasureEvent) {
        self.emit("remeasure", json!({ "reached": e.reached }));
    }

    fn on_dispose(&mut self, e: &DisposeEvent) {
        self.emit(
            "dispose",
            json!({
                "from": format!("{:?}", e.from),
                "released_watch": e.released_watch,
                "halted_motion": e.halted_motion,
            }),
        );
    }

    fn on_region_fallback(&mut self, e: &RegionFallbackEvent) {
        self.emit(
            "region_fallback",
            json!({ "error": format!("{:?}", e.error) }),
        );
    }
}
