// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `IntersectionObserver` + CSS transition strategy.
//!
//! The trigger region becomes the observer's `rootMargin` and thresholds.
//! Observer reports only prompt a check: whether the region is reached is
//! decided from the reported element box and the full viewport, as the
//! timeline strategy does. The reveal is a set of CSS transitions the browser
//! runs on its own, so disposal leaves them to finish.

use std::rc::Rc;

use wasm_bindgen::JsCast as _;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use scrollin_core::backend::{Backend, Detached, Geometry, Release, Trigger};
use scrollin_core::environment::EnvironmentSignals;
use scrollin_core::pose::{Cue, Pose, Transition};
use scrollin_core::region::TriggerRegion;
use scrollin_core::scroll::ScrollContainer;

use crate::dom;
use crate::env::PageContext;
use crate::raf::FrameTask;
use crate::style;

/// [`Backend`] driven by `IntersectionObserver` and CSS transitions.
#[derive(Clone, Debug)]
pub struct ObserverBackend {
    page: Rc<PageContext>,
}

impl ObserverBackend {
    /// Creates a backend over the current page.
    #[must_use]
    pub fn new() -> Self {
        Self {
            page: PageContext::current(),
        }
    }
}

impl Default for ObserverBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// A connected observer and the callback it holds.
pub struct ObserverWatch {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl core::fmt::Debug for ObserverWatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ObserverWatch").finish_non_exhaustive()
    }
}

impl Release for ObserverWatch {
    fn release(&mut self) {
        self.observer.disconnect();
    }
}

impl Drop for ObserverWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl Backend for ObserverBackend {
    type Node = Element;
    type Watch = ObserverWatch;
    type Task = FrameTask;
    type Motion = Detached;

    fn signals(&self) -> EnvironmentSignals {
        self.page.signals()
    }

    fn scroll_container(&self) -> ScrollContainer {
        self.page.scroll_container()
    }

    fn children(&self, host: &Element) -> Vec<Element> {
        dom::children(host)
    }

    fn conceal(&self, target: &Element, pose: Pose, transition: &Transition) {
        dom::write_pose(target, pose);
        dom::write_will_change(target);
        dom::write_transition(target, transition);
    }

    fn reveal(&self, targets: &[Element], cues: &[Cue]) -> Detached {
        for (target, cue) in targets.iter().zip(cues) {
            dom::write_transition(target, &cue.transition);
            dom::write_pose(target, cue.to);
        }
        Detached
    }

    fn watch(
        &self,
        host: &Element,
        region: &TriggerRegion,
        trigger: Trigger,
    ) -> Option<ObserverWatch> {
        let viewport_height = self.page.viewport_rect().map_or(0.0, |r| r.height());
        let config = region.observer_config(viewport_height);

        let init = IntersectionObserverInit::new();
        init.set_root_margin(&style::root_margin(&config));
        let thresholds: js_sys::Array = config
            .thresholds
            .iter()
            .map(|&t| JsValue::from_f64(t))
            .collect();
        init.set_threshold(&thresholds);
        if let Some(root) = self.page.scroll_root() {
            init.set_root(Some(root.unchecked_ref()));
        }

        let page = Rc::clone(&self.page);
        let region = *region;
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            let viewport = page.viewport_rect();
            let hit = entries.iter().any(|e| {
                let Ok(entry) = e.dyn_into::<IntersectionObserverEntry>() else {
                    return false;
                };
                match viewport {
                    Some(viewport) => {
                        region.is_reached(dom::rect(&entry.bounding_client_rect()), viewport)
                    }
                    None => entry.is_intersecting(),
                }
            });
            if hit {
                trigger.fire();
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .ok()?;
        observer.observe(host);
        Some(ObserverWatch {
            observer,
            _callback: callback,
        })
    }

    fn defer(&self, task: Box<dyn FnOnce()>) -> Option<FrameTask> {
        Some(FrameTask::next_frame(task))
    }

    fn measure(&self, host: &Element) -> Option<Geometry> {
        dom::measure(&self.page, host)
    }
}
