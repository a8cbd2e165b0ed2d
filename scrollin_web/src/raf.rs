// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `requestAnimationFrame` scheduling.
//!
//! [`FrameTask`] runs one closure on the next animation frame (the post-arm
//! re-measurement). [`RafLoop`] calls a closure every frame until it returns
//! `false`, is stopped, or is dropped (the timeline tween).
//!
//! Both receive the [`DOMHighResTimeStamp`][mdn] in milliseconds.
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/API/DOMHighResTimeStamp

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use scrollin_core::backend::Release;

// Direct global bindings instead of `web_sys::Window` methods, so no Window
// lookup happens per frame.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = "requestAnimationFrame")]
    fn request_animation_frame(callback: &JsValue) -> i32;

    #[wasm_bindgen(js_name = "cancelAnimationFrame")]
    fn cancel_animation_frame(id: i32);
}

/// A closure scheduled for the next animation frame.
///
/// Releasing or dropping the task before the frame cancels it. Dropping it
/// from inside its own callback is fine.
pub struct FrameTask {
    id: i32,
    pending: Rc<Cell<bool>>,
    closure: Option<Closure<dyn FnMut()>>,
}

impl FrameTask {
    /// Schedules `task` for the next animation frame.
    pub(crate) fn next_frame(task: Box<dyn FnOnce()>) -> Self {
        let pending = Rc::new(Cell::new(true));
        let flag = Rc::clone(&pending);
        let closure = Closure::once(move || {
            flag.set(false);
            task();
        });
        let id = request_animation_frame(closure.as_ref().unchecked_ref());
        Self {
            id,
            pending,
            closure: Some(closure),
        }
    }

    /// Returns `true` until the task has run or been cancelled.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    fn cancel(&mut self) {
        if self.pending.replace(false) {
            cancel_animation_frame(self.id);
        }
        self.closure.take();
    }
}

impl Release for FrameTask {
    fn release(&mut self) {
        self.cancel();
    }
}

impl Drop for FrameTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl core::fmt::Debug for FrameTask {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameTask")
            .field("id", &self.id)
            .field("pending", &self.pending.get())
            .finish_non_exhaustive()
    }
}

/// A `requestAnimationFrame` loop.
///
/// Create with [`RafLoop::new`], then call [`start`](Self::start). The loop
/// re-registers itself each frame until the callback returns `false`,
/// [`stop`](Self::stop) is called, or the `RafLoop` is dropped.
pub(crate) struct RafLoop {
    inner: Rc<RafInner>,
}

type RafClosure = Closure<dyn FnMut(f64)>;

struct RafInner {
    /// The JS closure registered with `requestAnimationFrame`.
    ///
    /// In its own `RefCell` so it can be referenced from inside itself without
    /// conflicting with `callback`.
    closure: RefCell<Option<RafClosure>>,

    /// Per-frame callback; returns `false` to end the loop.
    callback: RefCell<Box<dyn FnMut(f64) -> bool>>,

    running: Cell<bool>,

    /// ID of the most recent `requestAnimationFrame` call.
    raf_id: Cell<i32>,
}

impl RafLoop {
    /// Creates a loop that is **not yet running**.
    pub(crate) fn new(callback: impl FnMut(f64) -> bool + 'static) -> Self {
        Self {
            inner: Rc::new(RafInner {
                closure: RefCell::new(None),
                callback: RefCell::new(Box::new(callback)),
                running: Cell::new(false),
                raf_id: Cell::new(0),
            }),
        }
    }

    /// Starts the loop. No-op if already running.
    pub(crate) fn start(&self) {
        if self.inner.running.get() {
            return;
        }
        self.inner.running.set(true);

        // The closure holds a weak reference: the loop's owner decides its
        // lifetime, not the pending frame.
        let weak = Rc::downgrade(&self.inner);
        let closure = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !inner.running.get() {
                return;
            }

            let more = inner.callback.borrow_mut()(timestamp_ms);
            if !more {
                inner.running.set(false);
                return;
            }

            if inner.running.get()
                && let Some(ref closure) = *inner.closure.borrow()
            {
                let id = request_animation_frame(closure.as_ref().unchecked_ref());
                inner.raf_id.set(id);
            }
        }) as Box<dyn FnMut(f64)>);

        let id = request_animation_frame(closure.as_ref().unchecked_ref());
        self.inner.raf_id.set(id);
        *self.inner.closure.borrow_mut() = Some(closure);
    }

    /// Stops the loop and cancels the pending frame.
    pub(crate) fn stop(&self) {
        if !self.inner.running.get() {
            return;
        }
        self.inner.running.set(false);
        cancel_animation_frame(self.inner.raf_id.get());
    }

    /// Returns `true` while the loop is running.
    #[must_use]
    pub(crate) fn is_running(&self) -> bool {
        self.inner.running.get()
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.stop();
        // Drop the JS closure so it doesn't leak.
        self.inner.closure.borrow_mut().take();
    }
}

impl core::fmt::Debug for RafLoop {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RafLoop")
            .field("running", &self.inner.running.get())
            .field("raf_id", &self.inner.raf_id.get())
            .finish_non_exhaustive()
    }
}
