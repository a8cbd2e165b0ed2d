// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Effective scroll-container detection.
//!
//! Some layouts lock the root element and let `<body>` scroll instead. Scroll
//! listeners and observer roots have to be attached to whichever box actually
//! scrolls. [`detect_scroll_container`] decides this from computed overflow
//! values; backends compute it once per page and cache the result.

use core::fmt;
use core::str::FromStr;

/// A computed `overflow-y` value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Overflow {
    /// `visible`
    #[default]
    Visible,
    /// `hidden`
    Hidden,
    /// `clip`
    Clip,
    /// `scroll`
    Scroll,
    /// `auto`
    Auto,
}

impl Overflow {
    /// Returns `true` if a box with this overflow can scroll its content.
    #[must_use]
    pub const fn scrolls(self) -> bool {
        matches!(self, Self::Scroll | Self::Auto)
    }

    /// Returns `true` if this overflow stops the box from scrolling at all.
    #[must_use]
    pub const fn locks(self) -> bool {
        matches!(self, Self::Hidden | Self::Clip)
    }
}

impl FromStr for Overflow {
    type Err = ParseOverflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "visible" => Ok(Self::Visible),
            "hidden" => Ok(Self::Hidden),
            "clip" => Ok(Self::Clip),
            "scroll" => Ok(Self::Scroll),
            "auto" | "overlay" => Ok(Self::Auto),
            _ => Err(ParseOverflowError),
        }
    }
}

/// The computed overflow value was not recognized.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ParseOverflowError;

impl fmt::Display for ParseOverflowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unrecognized overflow value")
    }
}

impl core::error::Error for ParseOverflowError {}

/// The document state scroll-container detection depends on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DocumentState {
    /// Computed `overflow-y` of the root (`<html>`) element.
    pub root_overflow_y: Overflow,
    /// Computed `overflow-y` of `<body>`.
    pub body_overflow_y: Overflow,
}

/// The box whose scrolling moves content through the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScrollContainer {
    /// The window/viewport scrolls (the common case).
    #[default]
    Viewport,
    /// The root is locked and `<body>` is the scroller.
    Body,
}

/// Decides which box scrolls, from computed overflow values.
///
/// `<body>` only counts as the scroller when the root is locked
/// (`hidden`/`clip`) and the body itself scrolls; a scrollable body under a
/// visible root propagates its overflow to the viewport instead.
#[must_use]
pub const fn detect_scroll_container(doc: &DocumentState) -> ScrollContainer {
    if doc.root_overflow_y.locks() && doc.body_overflow_y.scrolls() {
        ScrollContainer::Body
    } else {
        ScrollContainer::Viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(root: &str, body: &str) -> DocumentState {
        DocumentState {
            root_overflow_y: root.parse().unwrap(),
            body_overflow_y: body.parse().unwrap(),
        }
    }

    #[test]
    fn plain_document_scrolls_viewport() {
        assert_eq!(
            detect_scroll_container(&DocumentState::default()),
            ScrollContainer::Viewport
        );
        assert_eq!(
            detect_scroll_container(&doc("visible", "auto")),
            ScrollContainer::Viewport
        );
    }

    #[test]
    fn locked_root_with_scrolling_body() {
        assert_eq!(
            detect_scroll_container(&doc("hidden", "auto")),
            ScrollContainer::Body
        );
        assert_eq!(
            detect_scroll_container(&doc("clip", "scroll")),
            ScrollContainer::Body
        );
    }

    #[test]
    fn locked_root_with_locked_body_stays_on_viewport() {
        assert_eq!(
            detect_scroll_container(&doc("hidden", "hidden")),
            ScrollContainer::Viewport
        );
    }

    #[test]
    fn parses_computed_values() {
        assert_eq!(" overlay ".parse(), Ok(Overflow::Auto));
        assert_eq!("sideways".parse::<Overflow>(), Err(ParseOverflowError));
    }
}
