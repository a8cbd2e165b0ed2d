// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline-style writes and geometry reads shared by the browser backends.
//!
//! Style writes are best effort: a failing `setProperty` leaves the element
//! as it was, which at worst means it is shown without animation.

use kurbo::Rect;
use wasm_bindgen::JsCast as _;
use web_sys::{CssStyleDeclaration, DomRectReadOnly, Element, HtmlElement, SvgElement};

use scrollin_core::backend::Geometry;
use scrollin_core::pose::{Pose, Transition};

use crate::env::PageContext;
use crate::style;

/// Direct element children of `host`, in DOM order.
pub(crate) fn children(host: &Element) -> Vec<Element> {
    let collection = host.children();
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

/// Inline style of an HTML or SVG element.
///
/// Other elements (MathML) count as targets but are left unstyled.
fn inline_style(el: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    el.dyn_ref::<SvgElement>().map(SvgElement::style)
}

/// Writes opacity and translation.
pub(crate) fn write_pose(el: &Element, pose: Pose) {
    let Some(s) = inline_style(el) else {
        return;
    };
    let _ = s.set_property("opacity", &style::opacity(pose.opacity));
    let _ = s.set_property("transform", &style::translate_y(pose.translate_y));
}

/// Writes the CSS transition longhands.
pub(crate) fn write_transition(el: &Element, transition: &Transition) {
    let Some(s) = inline_style(el) else {
        return;
    };
    let _ = s.set_property("transition-property", style::TRANSITION_PROPERTY);
    let _ = s.set_property("transition-duration", &style::seconds(transition.duration));
    let _ = s.set_property(
        "transition-timing-function",
        &style::timing_function(&transition.easing),
    );
    let _ = s.set_property("transition-delay", &style::seconds(transition.delay));
}

/// Turns CSS transitions off so per-frame writes land immediately.
pub(crate) fn clear_transition(el: &Element) {
    if let Some(s) = inline_style(el) {
        let _ = s.set_property("transition-property", "none");
    }
}

/// Writes the compositor hint.
pub(crate) fn write_will_change(el: &Element) {
    if let Some(s) = inline_style(el) {
        let _ = s.set_property("will-change", style::WILL_CHANGE);
    }
}

/// Converts a DOM rectangle.
pub(crate) fn rect(r: &DomRectReadOnly) -> Rect {
    Rect::new(r.left(), r.top(), r.right(), r.bottom())
}

/// Bounding boxes of `host` and the scroll container, in client coordinates.
pub(crate) fn measure(page: &PageContext, host: &Element) -> Option<Geometry> {
    let viewport = page.viewport_rect()?;
    Some(Geometry {
        element: rect(&host.get_bounding_client_rect()),
        viewport,
    })
}
