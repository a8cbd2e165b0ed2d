// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser console trace output.

use wasm_bindgen::JsValue;
use web_sys::console;

use scrollin_core::trace::{
    ArmEvent, CommitEvent, ConstructEvent, DisposeEvent, RegionFallbackEvent, RemeasureEvent,
    TraceSink, TriggerEvent,
};

/// A [`TraceSink`] that writes one `console.debug` line per event.
///
/// Region fallbacks go to `console.warn`.
#[derive(Clone, Debug, Default)]
pub struct ConsoleSink {
    label: Option<String>,
}

impl ConsoleSink {
    /// Creates an unlabeled sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefixes every line with `[label]`.
    #[must_use]
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }

    fn format(&self, line: &str) -> JsValue {
        match &self.label {
            Some(label) => JsValue::from_str(&format!("scrollin [{label}] {line}")),
            None => JsValue::from_str(&format!("scrollin {line}")),
        }
    }

    fn debug(&self, line: &str) {
        console::debug_1(&self.format(line));
    }
}

impl TraceSink for ConsoleSink {
    fn on_construct(&mut self, e: &ConstructEvent) {
        self.debug(&format!(
            "construct mode={:?} targets={} stagger={}s",
            e.mode, e.targets, e.stagger
        ));
    }

    fn on_arm(&mut self, e: &ArmEvent) {
        self.debug(&format!(
            "arm scroller={:?} watching={} remeasure={}",
            e.scroller, e.watching, e.remeasure_scheduled
        ));
    }

    fn on_trigger(&mut self, e: &TriggerEvent) {
        self.debug(&format!("trigger source={:?}", e.source));
    }

    fn on_commit(&mut self, e: &CommitEvent) {
        self.debug(&format!(
            "commit target={} delay={}s duration={}s",
            e.index, e.delay, e.duration
        ));
    }

    fn on_remeasure(&mut self, e: &RemeasureEvent) {
        self.debug(&format!("remeasure reached={:?}", e.reached));
    }

    fn on_dispose(&mut self, e: &DisposeEvent) {
        self.debug(&format!(
            "dispose from={:?} released_watch={} halted={}",
            e.from, e.released_watch, e.halted_motion
        ));
    }

    fn on_region_fallback(&mut self, e: &RegionFallbackEvent) {
        console::warn_1(&self.format(&format!("{}; using the default region", e.error)));
    }
}
