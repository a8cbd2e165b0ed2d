// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-listener + `requestAnimationFrame` tween strategy.
//!
//! The watch measures the host against the trigger region on every `scroll`
//! of the scroll container and every window `resize`. The reveal is a tween
//! written frame by frame, so unlike CSS transitions it can be stopped: on
//! disposal every target snaps to its final pose.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Element, EventTarget};

use scrollin_core::backend::{Backend, Geometry, Motion, Release, Trigger};
use scrollin_core::environment::EnvironmentSignals;
use scrollin_core::pose::{Cue, Pose, Transition};
use scrollin_core::region::TriggerRegion;
use scrollin_core::scroll::ScrollContainer;

use crate::dom;
use crate::env::PageContext;
use crate::raf::{FrameTask, RafLoop};

/// [`Backend`] driven by scroll listeners and a frame-by-frame tween.
#[derive(Clone, Debug)]
pub struct TimelineBackend {
    page: Rc<PageContext>,
}

impl TimelineBackend {
    /// Creates a backend over the current page.
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: PageContext::current(),
        }
    }
}

impl Default for TimelineBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Registered `scroll`/`resize` listeners.
pub struct ListenerWatch {
    listeners: Vec<(EventTarget, &'static str)>,
    callback: Option<Closure<dyn FnMut()>>,
}

impl ListenerWatch {
    fn detach(&mut self) {
        let Some(callback) = self.callback.take() else {
            return;
        };
        for (target, event) in self.listeners.drain(..) {
            let _ = target
                .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }
    }
}

impl core::fmt::Debug for ListenerWatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ListenerWatch")
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl Release for ListenerWatch {
    fn release(&mut self) {
        self.detach();
    }
}

impl Drop for ListenerWatch {
    fn drop(&mut self) {
        self.detach();
    }
}

/// A running tween.
///
/// Halting stops the frame loop and writes the final pose of every target.
pub struct TweenMotion {
    frames: RafLoop,
    targets: Vec<Element>,
    finals: Vec<Pose>,
}

impl core::fmt::Debug for TweenMotion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TweenMotion")
            .field("running", &self.frames.is_running())
            .field("targets", &self.targets.len())
            .finish_non_exhaustive()
    }
}

impl Motion for TweenMotion {
    fn halt(&mut self) -> bool {
        if !self.frames.is_running() {
            return false;
        }
        self.frames.stop();
        for (target, pose) in self.targets.iter().zip(&self.finals) {
            dom::write_pose(target, *pose);
        }
        true
    }
}

/// Progress of one cue `elapsed` seconds into the tween, eased.
fn eased_progress(cue: &Cue, elapsed: f64) -> f64 {
    let t = &cue.transition;
    let local = elapsed - t.delay;
    if local <= 0.0 {
        return 0.0;
    }
    if t.duration <= 0.0 || local >= t.duration {
        return 1.0;
    }
    t.easing.sample(local / t.duration)
}

/// Whether every cue has finished `elapsed` seconds in.
fn finished(cues: &[Cue], elapsed: f64) -> bool {
    cues.iter()
        .all(|c| elapsed >= c.transition.delay + c.transition.duration)
}

impl Backend for TimelineBackend {
    type Node = Element;
    type Watch = ListenerWatch;
    type Task = FrameTask;
    type Motion = TweenMotion;

    fn signals(&self) -> EnvironmentSignals {
        self.page.signals()
    }

    fn scroll_container(&self) -> ScrollContainer {
        self.page.scroll_container()
    }

    fn children(&self, host: &Element) -> Vec<Element> {
        dom::children(host)
    }

    fn conceal(&self, target: &Element, pose: Pose, _transition: &Transition) {
        dom::clear_transition(target);
        dom::write_will_change(target);
        dom::write_pose(target, pose);
    }

    fn reveal(&self, targets: &[Element], cues: &[Cue]) -> TweenMotion {
        let start = Cell::new(None::<f64>);
        let frame_targets = targets.to_vec();
        let frame_cues = cues.to_vec();
        let frames = RafLoop::new(move |now_ms| {
            let t0 = start.get().unwrap_or(now_ms);
            start.set(Some(t0));
            let elapsed = (now_ms - t0) / 1000.0;
            for (target, cue) in frame_targets.iter().zip(&frame_cues) {
                let pose = cue.from.lerp(cue.to, eased_progress(cue, elapsed));
                dom::write_pose(target, pose);
            }
            !finished(&frame_cues, elapsed)
        });
        frames.start();
        TweenMotion {
            frames,
            targets: targets.to_vec(),
            finals: cues.iter().map(|c| c.to).collect(),
        }
    }

    fn watch(
        &self,
        host: &Element,
        region: &TriggerRegion,
        trigger: Trigger,
    ) -> Option<ListenerWatch> {
        let window = self.page.window()?;
        let scroller: EventTarget = match self.page.scroll_root() {
            Some(body) => body.into(),
            None => window.clone().into(),
        };

        let page = Rc::clone(&self.page);
        let host = host.clone();
        let region = *region;
        let callback = Closure::wrap(Box::new(move || {
            let reached = dom::measure(&page, &host)
                .is_some_and(|g| region.is_reached(g.element, g.viewport));
            if reached {
                trigger.fire();
            }
        }) as Box<dyn FnMut()>);

        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        let function = callback.as_ref().unchecked_ref::<js_sys::Function>().clone();
        let mut watch = ListenerWatch {
            listeners: Vec::with_capacity(2),
            callback: Some(callback),
        };
        for (target, event) in [(scroller, "scroll"), (window.clone().into(), "resize")] {
            // On failure, dropping `watch` detaches what was attached so far.
            target
                .add_event_listener_with_callback_and_add_event_listener_options(
                    event, &function, &options,
                )
                .ok()?;
            watch.listeners.push((target, event));
        }
        Some(watch)
    }

    fn defer(&self, task: Box<dyn FnOnce()>) -> Option<FrameTask> {
        Some(FrameTask::next_frame(task))
    }

    fn measure(&self, host: &Element) -> Option<Geometry> {
        dom::measure(&self.page, host)
    }
}

#[cfg(test)]
mod tests {
    use scrollin_core::easing::Easing;

    use super::*;

    fn cue(delay: f64, duration: f64) -> Cue {
        Cue {
            index: 0,
            from: Pose::hidden(14.0),
            to: Pose::VISIBLE,
            transition: Transition {
                duration,
                delay,
                easing: Easing::LINEAR,
            },
        }
    }

    #[test]
    fn progress_waits_for_delay() {
        let c = cue(0.12, 0.7);
        assert_eq!(eased_progress(&c, 0.0), 0.0);
        assert_eq!(eased_progress(&c, 0.12), 0.0);
        assert_eq!(eased_progress(&c, 0.9), 1.0);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        let c = cue(0.0, 0.0);
        assert_eq!(eased_progress(&c, 0.001), 1.0);
    }

    #[test]
    fn tween_ends_after_last_cue() {
        let cues = [cue(0.0, 0.7), cue(0.06, 0.7), cue(0.12, 0.7)];
        assert!(!finished(&cues, 0.8));
        assert!(finished(&cues, 0.83));
    }
}
