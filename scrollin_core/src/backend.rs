// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! A [`RevealController`](crate::controller::RevealController) decides *what*
//! happens and *when*; a [`Backend`] does the platform work:
//!
//! - **Signals**: reports the windowed / reduced-motion / observation
//!   signals the degradation ladder is decided from.
//! - **Tree access**: exposes the host's direct children in DOM order.
//! - **Styling**: primes targets with the hidden pose and starts the reveal
//!   transitions.
//! - **Watching**: arms a one-shot visibility watch that calls a
//!   [`Trigger`] and hands back an owned [`Release`] handle.
//! - **Scheduling**: defers one task to a later rendering pass, for the
//!   post-arm re-measurement.
//! - **Measuring**: reports host and viewport geometry in one coordinate
//!   space.
//!
//! Two browser backends implement this trait in `scrollin_web` (an
//! observer/CSS-transition strategy and a scroll-listener/tween strategy),
//! and [`headless`](crate::headless) provides an in-memory one. The contract
//! above is identical for all of them.

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Rect;

use crate::environment::EnvironmentSignals;
use crate::pose::{Cue, Pose, Transition};
use crate::region::TriggerRegion;
use crate::scroll::ScrollContainer;

/// An owned platform resource released exactly once by its owner.
///
/// Implementations must tolerate `release` being called after the resource
/// has already completed on its own (e.g. a deferred task that ran).
pub trait Release {
    /// Releases the resource. The owner never calls this twice.
    fn release(&mut self);
}

/// A started reveal transition.
pub trait Motion {
    /// Stops the transition on disposal, returning `true` if anything was
    /// still running and got stopped.
    ///
    /// Implementations either do nothing (letting the transition finish on
    /// its own) or stop it and leave every target at its final visible pose.
    /// Leaving a target mid-transition is not allowed.
    fn halt(&mut self) -> bool;
}

/// A motion that runs to completion on its own and ignores `halt`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Detached;

impl Motion for Detached {
    fn halt(&mut self) -> bool {
        false
    }
}

/// Host and viewport rectangles in the same coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geometry {
    /// Bounding box of the host element.
    pub element: Rect,
    /// Visible area of the scroll container.
    pub viewport: Rect,
}

/// Callback a backend invokes when its watch sees the host in the region.
///
/// Cheap to clone. Firing after the controller has triggered or been
/// disposed is a no-op, so backends may fire as often as their platform
/// reports intersections.
#[derive(Clone)]
pub struct Trigger {
    fire: Rc<dyn Fn()>,
}

impl Trigger {
    pub(crate) fn new(fire: impl Fn() + 'static) -> Self {
        Self {
            fire: Rc::new(fire),
        }
    }

    /// Reports the host as inside the trigger region.
    pub fn fire(&self) {
        (self.fire)();
    }
}

impl fmt::Debug for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Trigger").finish_non_exhaustive()
    }
}

/// Platform integration driven by a
/// [`RevealController`](crate::controller::RevealController).
///
/// All methods take `&self`: platform handles (DOM nodes, observers) are
/// interior-mutable, and a backend may be called from inside its own
/// callbacks. Those callbacks outlive any borrow, so backends are `'static`.
pub trait Backend: 'static {
    /// An element handle. Both the host and its children are nodes.
    type Node: Clone;
    /// Owned handle of an armed visibility watch.
    type Watch: Release;
    /// Owned handle of a deferred task.
    type Task: Release;
    /// Handle of a started reveal.
    type Motion: Motion;

    /// Reads the environment signals for the degradation ladder.
    fn signals(&self) -> EnvironmentSignals;

    /// Returns the scroll container of the host's page.
    ///
    /// Backends compute this at most once per page and cache it.
    fn scroll_container(&self) -> ScrollContainer {
        ScrollContainer::Viewport
    }

    /// Returns the direct element children of `host` in DOM order.
    fn children(&self, host: &Self::Node) -> Vec<Self::Node>;

    /// Writes the hidden pose and primes the transition on one target.
    ///
    /// Called synchronously during construction, before the host can paint.
    fn conceal(&self, target: &Self::Node, pose: Pose, transition: &Transition);

    /// Starts the reveal. `cues[i]` belongs to `targets[i]`; all targets start
    /// in the same frame, in index order.
    fn reveal(&self, targets: &[Self::Node], cues: &[Cue]) -> Self::Motion;

    /// Arms a one-shot watch over `host`.
    ///
    /// Returns `None` if the platform refused to create the watch; the
    /// controller then reveals immediately.
    fn watch(
        &self,
        host: &Self::Node,
        region: &TriggerRegion,
        trigger: Trigger,
    ) -> Option<Self::Watch>;

    /// Runs `task` once on a later rendering pass.
    ///
    /// Returns `None` if the platform cannot defer work.
    fn defer(&self, task: Box<dyn FnOnce()>) -> Option<Self::Task>;

    /// Measures `host` against its scroll container, if possible.
    fn measure(&self, host: &Self::Node) -> Option<Geometry>;
}
