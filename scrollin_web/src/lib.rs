// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser backends for scrollin.
//!
//! Two [`Backend`](scrollin_core::backend::Backend) implementations drive a
//! [`RevealController`] over live DOM elements:
//!
//! - [`ObserverBackend`]: `IntersectionObserver` watch, CSS transition
//!   reveal. Transitions finish on their own after disposal.
//! - [`TimelineBackend`]: `scroll`/`resize` listener watch,
//!   `requestAnimationFrame` tween reveal. Disposal stops the tween and snaps
//!   every target to its final pose.
//!
//! Both share one [`PageContext`] per page, which probes capabilities and
//! detects the scroll container once.
//!
//! From JavaScript, [`scroll_in`] (exported as `scrollIn`) attaches a
//! controller to an element and returns a handle with `destroy()`.
//!
//! # Crate features
//!
//! - `timeline` (disabled by default): `scrollIn` uses [`TimelineBackend`]
//!   instead of [`ObserverBackend`].
//! - `trace` (disabled by default): controllers created by `scrollIn` report
//!   lifecycle events to the browser console through [`ConsoleSink`].

mod console;
mod dom;
mod env;
mod observer;
mod options;
mod raf;
mod style;
mod timeline;

pub use console::ConsoleSink;
pub use env::PageContext;
pub use observer::{ObserverBackend, ObserverWatch};
pub use raf::FrameTask;
pub use scrollin_core::controller::RevealController;
pub use scrollin_core::options::RevealOptions;
pub use timeline::{ListenerWatch, TimelineBackend, TweenMotion};

use wasm_bindgen::prelude::*;
use web_sys::Element;

use scrollin_core::trace::{RegionFallbackEvent, TraceSink as _};

use crate::options::RawOptions;

/// The backend `scrollIn` uses, chosen by the `timeline` feature.
#[cfg(not(feature = "timeline"))]
pub type DefaultBackend = ObserverBackend;

/// The backend `scrollIn` uses, chosen by the `timeline` feature.
#[cfg(feature = "timeline")]
pub type DefaultBackend = TimelineBackend;

/// Handle returned to JavaScript by [`scroll_in`].
///
/// Freeing the handle from JavaScript disposes the controller as well.
#[wasm_bindgen]
#[derive(Debug)]
pub struct ScrollIn {
    controller: RevealController<DefaultBackend>,
}

#[wasm_bindgen]
impl ScrollIn {
    /// Stops watching. Revealed content stays revealed. Safe to call more
    /// than once.
    pub fn destroy(&self) {
        self.controller.dispose();
    }
}

/// Reveals `node` the first time it scrolls into view.
///
/// `opts` is an optional object with `offset` (or `y`), `duration`,
/// `stagger`, and `triggerRegion` (or `start`). An unparsable region is
/// reported with `console.warn` and replaced by the default `"top 80%"`.
#[wasm_bindgen(js_name = scrollIn)]
pub fn scroll_in(node: Element, opts: JsValue) -> ScrollIn {
    let (options, rejected) = RawOptions::from_js(&opts).resolve();

    let mut sink = ConsoleSink::new();
    if let Some(error) = rejected {
        sink.on_region_fallback(&RegionFallbackEvent {
            error,
            fallback: options.trigger,
        });
    }

    // Without the `trace` feature the controller drops the sink unused.
    let controller =
        RevealController::with_sink(DefaultBackend::new(), node, options, Box::new(sink));
    ScrollIn { controller }
}
