// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport-triggered reveal animation.
//!
//! `scrollin_core` fades and slides an element into view the first time it
//! scrolls into a region of the viewport. It is `no_std` compatible (with
//! `alloc`) and knows nothing about any particular platform: browsers and
//! other hosts plug in through the [`Backend`](backend::Backend) trait.
//!
//! # Architecture
//!
//! ```text
//!   Backend::signals() ──► RevealMode (degradation ladder)
//!                               │
//!                               ▼
//!   RevealController::new() ── select targets ── conceal (hidden pose)
//!                               │
//!                               ▼
//!                  Backend::watch() + Backend::defer()
//!                               │  Trigger::fire / re-measure
//!                               ▼
//!                  commit ──► Backend::reveal() (staggered cues)
//!                               │
//!                               ▼
//!                  dispose() ──► Release::release / Motion::halt
//! ```
//!
//! **[`controller`]**: The [`RevealController`](controller::RevealController)
//! state machine (`Armed → Triggered → Disposed`).
//!
//! **[`backend`]**: The [`Backend`](backend::Backend) contract, owned
//! resource handles, and the [`Trigger`](backend::Trigger) callback.
//!
//! **[`environment`]**: Environment signals and the
//! [`RevealMode`](environment::RevealMode) they select.
//!
//! **[`options`]**: [`RevealOptions`](options::RevealOptions) with defaults.
//!
//! **[`region`]**: [`TriggerRegion`](region::TriggerRegion) parsing and
//! geometry, plus its intersection-observer form.
//!
//! **[`easing`]**: Validated cubic Bézier timing curves.
//!
//! **[`targets`]**: Host-vs-children target selection and stagger delays.
//!
//! **[`pose`]**: Hidden/visible poses and per-target transitions.
//!
//! **[`scroll`]**: Scroll-container detection from computed overflow.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and lifecycle events,
//! with a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! **[`headless`]**: An in-memory backend.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod controller;
pub mod easing;
pub mod environment;
pub mod headless;
pub mod options;
pub mod pose;
pub mod region;
pub mod scroll;
pub mod targets;
pub mod trace;
