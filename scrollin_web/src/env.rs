// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-level environment shared by every controller on the page.
//!
//! The capability probe and scroll-container detection run once per page;
//! reduced motion is re-read for each controller, since users can flip it
//! while the page is open.

use std::cell::OnceCell;
use std::rc::Rc;

use kurbo::Rect;
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlElement, Window};

use scrollin_core::environment::EnvironmentSignals;
use scrollin_core::scroll::{DocumentState, Overflow, ScrollContainer, detect_scroll_container};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

thread_local! {
    static PAGE: Rc<PageContext> = Rc::new(PageContext::probe());
}

/// Window handle, capabilities, and cached scroll container of the page.
pub struct PageContext {
    window: Option<Window>,
    observation: bool,
    scroll_container: OnceCell<ScrollContainer>,
}

impl core::fmt::Debug for PageContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PageContext")
            .field("windowed", &self.window.is_some())
            .field("observation", &self.observation)
            .field("scroll_container", &self.scroll_container.get())
            .finish()
    }
}

impl PageContext {
    /// Returns the context of the current page, probing it on first use.
    #[must_use]
    pub fn current() -> Rc<Self> {
        PAGE.with(Rc::clone)
    }

    fn probe() -> Self {
        let window = web_sys::window();
        let observation = window.as_ref().is_some_and(|w| {
            js_sys::Reflect::has(w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
        });
        Self {
            window,
            observation,
            scroll_container: OnceCell::new(),
        }
    }

    /// Returns the window, if this is a windowed context.
    #[must_use]
    pub fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }

    /// Reads the environment signals for a new controller.
    #[must_use]
    pub fn signals(&self) -> EnvironmentSignals {
        let Some(window) = &self.window else {
            return EnvironmentSignals::HEADLESS;
        };
        let reduced_motion = window
            .match_media(REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .is_some_and(|q| q.matches());
        EnvironmentSignals {
            windowed: true,
            reduced_motion,
            observation: self.observation,
        }
    }

    /// Returns the box that scrolls the page, detecting it on first use.
    pub fn scroll_container(&self) -> ScrollContainer {
        *self.scroll_container.get_or_init(|| {
            self.document_state()
                .map_or(ScrollContainer::Viewport, |d| detect_scroll_container(&d))
        })
    }

    /// Returns `<body>` when it is the scroll container, `None` for the
    /// viewport.
    #[must_use]
    pub fn scroll_root(&self) -> Option<HtmlElement> {
        match self.scroll_container() {
            ScrollContainer::Viewport => None,
            ScrollContainer::Body => self.window.as_ref()?.document()?.body(),
        }
    }

    /// Visible area of the scroll container in client coordinates.
    #[must_use]
    pub fn viewport_rect(&self) -> Option<Rect> {
        if let Some(root) = self.scroll_root() {
            let r = root.get_bounding_client_rect();
            let height = f64::from(root.client_height());
            return Some(Rect::new(r.left(), r.top(), r.right(), r.top() + height));
        }
        let window = self.window.as_ref()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(Rect::new(0.0, 0.0, width, height))
    }

    fn document_state(&self) -> Option<DocumentState> {
        let window = self.window.as_ref()?;
        let document = window.document()?;
        let root = document.document_element()?;
        let body = document.body()?;
        let overflow_y = |el: &Element| {
            window
                .get_computed_style(el)
                .ok()
                .flatten()
                .and_then(|s| s.get_property_value("overflow-y").ok())
                .and_then(|v| v.parse::<Overflow>().ok())
                .unwrap_or_default()
        };
        Some(DocumentState {
            root_overflow_y: overflow_y(&root),
            body_overflow_y: overflow_y(&body),
        })
    }
}
