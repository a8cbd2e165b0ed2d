// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing, JSON-lines, and recording trace sinks for scrollin
//! diagnostics.
//!
//! This crate provides [`TraceSink`](scrollin_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`]: human-readable one-line-per-event output.
//! - [`json::JsonLinesSink`]: one JSON object per event, for log pipelines.
//! - [`recorder::RecorderSink`]: in-memory event list with a shared
//!   [`recorder::Recording`] handle for inspection.

pub mod json;
pub mod pretty;
pub mod recorder;
