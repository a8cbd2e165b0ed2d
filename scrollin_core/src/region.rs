// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trigger regions: where in the viewport a reveal fires.
//!
//! A [`TriggerRegion`] pairs an anchor on the element with an anchor on the
//! viewport, written in the scroll-trigger idiom `"<element> <viewport>"`.
//! The default, `"top 80%"`, fires once the element's top edge has risen
//! above the line 80% of the way down the viewport, i.e. when the element
//! enters the bottom ~80% of the screen.
//!
//! Backends consume a region in one of two ways:
//!
//! - Geometry: [`TriggerRegion::is_reached`] compares an element rectangle
//!   against a viewport rectangle (scroll-listener backends, re-measurement).
//! - Observer form: [`TriggerRegion::observer_config`] turns the region into
//!   root margins and intersection thresholds. Intersection ratios are taken
//!   against the element's own area, so for anything but a top-edge anchor
//!   they only wake the observer up; the decision is still
//!   [`is_reached`](TriggerRegion::is_reached) on fresh geometry.

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use kurbo::Rect;

/// A position along the vertical axis of a box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Anchor {
    /// A fraction of the box height from its top edge (`0.0` = top).
    Fraction(f64),
    /// A fixed distance in pixels from the box's top edge.
    Pixels(f64),
}

impl Anchor {
    /// The top edge.
    pub const TOP: Self = Self::Fraction(0.0);
    /// The vertical midpoint.
    pub const CENTER: Self = Self::Fraction(0.5);
    /// The bottom edge.
    pub const BOTTOM: Self = Self::Fraction(1.0);

    /// Resolves this anchor to an absolute y coordinate within `rect`.
    #[must_use]
    pub fn resolve(self, rect: Rect) -> f64 {
        match self {
            Self::Fraction(f) => rect.y0 + f * rect.height(),
            Self::Pixels(px) => rect.y0 + px,
        }
    }

    fn parse(token: &str) -> Option<Self> {
        match token {
            "top" => return Some(Self::TOP),
            "center" => return Some(Self::CENTER),
            "bottom" => return Some(Self::BOTTOM),
            _ => {}
        }
        let (number, percent) = if let Some(n) = token.strip_suffix('%') {
            (n, true)
        } else if let Some(n) = token.strip_suffix("px") {
            (n, false)
        } else {
            (token, false)
        };
        let value: f64 = number.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(if percent {
            Self::Fraction(value / 100.0)
        } else {
            Self::Pixels(value)
        })
    }
}

/// Where a reveal fires, relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerRegion {
    /// Line on the element that must cross the viewport line.
    pub element: Anchor,
    /// Line on the viewport the element line must reach.
    pub viewport: Anchor,
}

impl TriggerRegion {
    /// `"top 80%"`: the element's top enters the bottom ~80% of the viewport.
    pub const DEFAULT: Self = Self {
        element: Anchor::TOP,
        viewport: Anchor::Fraction(0.8),
    };

    /// Lowest intersection ratio handed to observer backends.
    ///
    /// A zero threshold would also report elements merely touching the
    /// root edge.
    pub const MIN_THRESHOLD: f64 = 0.01;

    /// Number of evenly spaced intersection thresholds used for element
    /// anchors below the top edge.
    pub const THRESHOLD_STEPS: u32 = 20;

    /// How far the observer root is extended above the viewport for element
    /// anchors below the top edge, in percent of the root height.
    ///
    /// With the root reaching far upward, the intersection ratio grows
    /// steadily while the element rises through the viewport line, even for
    /// elements taller than the viewport.
    pub const TOP_OUTSET_PERCENT: f64 = 1000.0;

    /// Parses a region descriptor such as `"top 80%"` or `"center 300px"`.
    ///
    /// A single anchor is taken as the viewport line, with the element's top
    /// edge as the element line.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseRegionError`] for empty input, more than two anchors,
    /// or an anchor that is neither a keyword nor a finite number with an
    /// optional `%`/`px` suffix.
    pub fn parse(s: &str) -> Result<Self, ParseRegionError> {
        let mut parts = s.split_whitespace();
        let first = parts.next().ok_or(ParseRegionError::Empty)?;
        let second = parts.next();
        if parts.next().is_some() {
            return Err(ParseRegionError::TooManyAnchors);
        }
        let parse = |t: &str| Anchor::parse(t).ok_or(ParseRegionError::InvalidAnchor);
        match second {
            None => Ok(Self {
                element: Anchor::TOP,
                viewport: parse(first)?,
            }),
            Some(second) => Ok(Self {
                element: parse(first)?,
                viewport: parse(second)?,
            }),
        }
    }

    /// Returns `true` once the element line is at or above the viewport line
    /// while some part of the element is still at or below the viewport top.
    ///
    /// Both rectangles must be in the same coordinate space.
    #[must_use]
    pub fn is_reached(&self, element: Rect, viewport: Rect) -> bool {
        let element_line = self.element.resolve(element);
        let viewport_line = self.viewport.resolve(viewport);
        element_line <= viewport_line && element.y1 >= viewport.y0
    }

    /// Converts this region to an intersection-observer configuration.
    ///
    /// `viewport_height` is only consulted for pixel viewport anchors, which
    /// an observer cannot express relative to the root's top edge.
    ///
    /// A top-edge element anchor maps directly: the root's bottom edge is the
    /// viewport line and any intersection means the line was crossed. Other
    /// element anchors also extend the root upward and observe a ladder of
    /// thresholds; each crossing is a prompt to re-check with
    /// [`is_reached`](Self::is_reached).
    #[must_use]
    pub fn observer_config(&self, viewport_height: f64) -> ObserverConfig {
        let bottom_inset = match self.viewport {
            Anchor::Fraction(f) => Inset::Percent(((1.0 - f) * 100.0).clamp(0.0, 100.0)),
            Anchor::Pixels(px) => Inset::Pixels((viewport_height - px).max(0.0)),
        };
        let direct = match self.element {
            Anchor::Fraction(f) if f <= 0.0 => Some(Self::MIN_THRESHOLD),
            Anchor::Pixels(px) if px <= 0.0 => Some(Self::MIN_THRESHOLD),
            _ => None,
        };
        if let Some(threshold) = direct {
            return ObserverConfig {
                top_outset: Inset::Pixels(0.0),
                bottom_inset,
                thresholds: alloc::vec![threshold],
            };
        }

        let steps = Self::THRESHOLD_STEPS;
        let mut thresholds: Vec<f64> = core::iter::once(Self::MIN_THRESHOLD)
            .chain((1..=steps).map(|i| f64::from(i) / f64::from(steps)))
            .collect();
        if let Anchor::Fraction(f) = self.element {
            thresholds.push(f.clamp(Self::MIN_THRESHOLD, 1.0));
        }
        thresholds.sort_by(f64::total_cmp);
        thresholds.dedup();
        ObserverConfig {
            top_outset: Inset::Percent(Self::TOP_OUTSET_PERCENT),
            bottom_inset,
            thresholds,
        }
    }
}

impl Default for TriggerRegion {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for TriggerRegion {
    type Err = ParseRegionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A distance along the root's height, for root margins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Inset {
    /// Percentage of the root height.
    Percent(f64),
    /// Absolute pixels.
    Pixels(f64),
}

/// Intersection-observer parameters derived from a [`TriggerRegion`].
#[derive(Clone, Debug, PartialEq)]
pub struct ObserverConfig {
    /// Extension above the top of the root (a positive root margin).
    pub top_outset: Inset,
    /// Inset applied to the bottom of the root (a negative root margin).
    pub bottom_inset: Inset,
    /// Ascending intersection ratios at which the observer reports.
    pub thresholds: Vec<f64>,
}

/// Why a trigger-region descriptor failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParseRegionError {
    /// The descriptor was empty or whitespace.
    Empty,
    /// More than two anchors were given.
    TooManyAnchors,
    /// An anchor was not a keyword, percentage, or pixel length.
    InvalidAnchor,
}

impl fmt::Display for ParseRegionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("trigger region is empty"),
            Self::TooManyAnchors => f.write_str("trigger region takes at most two anchors"),
            Self::InvalidAnchor => f.write_str(
                "trigger region anchor must be top, center, bottom, a percentage, or pixels",
            ),
        }
    }
}

impl core::error::Error for ParseRegionError {}
