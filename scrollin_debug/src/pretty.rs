// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr), optionally
//! prefixed with a label identifying the host element.

use std::io::Write;

use scrollin_core::controller::Phase;
use scrollin_core::environment::RevealMode;
use scrollin_core::trace::{
    ArmEvent, CommitEvent, ConstructEvent, DisposeEvent, RegionFallbackEvent, RemeasureEvent,
    TraceSink, TriggerEvent, TriggerSource,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
    label: Option<String>,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
            label: None,
        }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self {
            writer,
            label: None,
        }
    }

    /// Prefixes every line with `[label]`.
    #[must_use]
    pub fn labeled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Consumes the sink and returns its writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        let _ = match &self.label {
            Some(label) => writeln!(self.writer, "[{label}] {args}"),
            None => writeln!(self.writer, "{args}"),
        };
    }
}

fn mode_name(mode: RevealMode) -> &'static str {
    match mode {
        RevealMode::Inert => "inert",
        RevealMode::Final => "final",
        RevealMode::Immediate => "immediate",
        RevealMode::Watch => "watch",
    }
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Armed => "armed",
        Phase::Triggered => "triggered",
        Phase::Disposed => "disposed",
    }
}

fn source_name(source: TriggerSource) -> &'static str {
    match source {
        TriggerSource::Watch => "watch",
        TriggerSource::Remeasure => "remeasure",
        TriggerSource::Immediate => "immediate",
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_construct(&mut self, e: &ConstructEvent) {
        self.line(format_args!(
            "[construct] mode={} targets={} stagger={:.3}s",
            mode_name(e.mode),
            e.targets,
            e.stagger,
        ));
    }

    fn on_arm(&mut self, e: &ArmEvent) {
        self.line(format_args!(
            "[arm] scroller={:?} watching={} remeasure={}",
            e.scroller, e.watching, e.remeasure_scheduled,
        ));
    }

    fn on_trigger(&mut self, e: &TriggerEvent) {
        self.line(format_args!("[trigger] source={}", source_name(e.source)));
    }

    fn on_commit(&mut self, e: &CommitEvent) {
        self.line(format_args!(
            "[commit] target={} delay={:.3}s duration={:.3}s",
            e.index, e.delay, e.duration,
        ));
    }

    fn on_remeasure(&mut self, e: &RemeasureEvent) {
        let reached = match e.reached {
            Some(true) => "reached",
            Some(false) => "outside",
            None => "?",
        };
        self.line(format_args!("[remeasure] {reached}"));
    }

    fn on_dispose(&mut self, e: &DisposeEvent) {
        self.line(format_args!(
            "[dispose] from={} released_watch={} halted={}",
            phase_name(e.from),
            e.released_watch,
            e.halted_motion,
        ));
    }

    fn on_region_fallback(&mut self, e: &RegionFallbackEvent) {
        self.line(format_args!("[region] {}; using default", e.error));
    }
}

#[cfg(test)]
mod tests {
    use scrollin_core::region::{ParseRegionError, TriggerRegion};

    use super::*;

    #[test]
    fn pretty_print_commit() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_commit(&CommitEvent {
            index: 2,
            delay: 0.12,
            duration: 0.7,
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert_eq!(output, "[commit] target=2 delay=0.120s duration=0.700s\n");
    }

    #[test]
    fn region_fallback_names_the_error() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        sink.on_region_fallback(&RegionFallbackEvent {
            error: ParseRegionError::TooManyAnchors,
            fallback: TriggerRegion::DEFAULT,
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        assert_eq!(
            output,
            "[region] trigger region takes at most two anchors; using default\n"
        );
    }

    #[test]
    fn label_prefixes_every_line() {
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new()).labeled("projects");
        sink.on_trigger(&TriggerEvent {
            source: TriggerSource::Remeasure,
        });
        sink.on_dispose(&DisposeEvent {
            from: Phase::Triggered,
            released_watch: false,
            halted_motion: true,
        });
        let output = String::from_utf8(sink.into_writer()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(
            lines,
            [
                "[projects] [trigger] source=remeasure",
                "[projects] [dispose] from=triggered released_watch=false halted=true",
            ]
        );
    }
}
