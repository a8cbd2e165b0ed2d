// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory backend.
//!
//! [`HeadlessPage`] models a document as a flat node list with document-space
//! rectangles, a scrollable viewport, and queues for visibility watches and
//! deferred tasks. [`HeadlessBackend`] implements [`Backend`] over it, for
//! hosts without a browser (pre-rendering, native shells) and as the test
//! double for controller behavior.
//!
//! Nothing happens on its own: the owner drives the page with
//! [`scroll_to`](HeadlessPage::scroll_to) (delivers intersections),
//! [`run_frame`](HeadlessPage::run_frame) (runs deferred tasks), and
//! [`settle`](HeadlessPage::settle) (finishes in-flight transitions).

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::{Cell, OnceCell, RefCell};
use core::fmt;

use kurbo::Rect;

use crate::backend::{Backend, Geometry, Motion, Release, Trigger};
use crate::environment::EnvironmentSignals;
use crate::pose::{Cue, Pose, Transition};
use crate::region::TriggerRegion;
use crate::scroll::{DocumentState, ScrollContainer, detect_scroll_container};

/// Handle to a node on a [`HeadlessPage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

/// Inline style state of a headless node.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NodeStyle {
    /// Last pose written, if any.
    pub pose: Option<Pose>,
    /// Last transition written, if any.
    pub transition: Option<Transition>,
    /// A reveal transition was started and has not settled.
    pub in_flight: bool,
    /// Number of style writes this node has received.
    pub writes: u32,
}

#[derive(Debug)]
struct Node {
    children: Vec<NodeId>,
    rect: Rect,
    style: NodeStyle,
}

struct WatchSlot {
    host: NodeId,
    region: TriggerRegion,
    trigger: Trigger,
    active: bool,
    releases: u32,
}

struct TaskSlot {
    task: Option<Box<dyn FnOnce()>>,
    cancelled: bool,
}

/// An in-memory document driven by its owner.
pub struct HeadlessPage {
    nodes: RefCell<Vec<Node>>,
    signals: Cell<EnvironmentSignals>,
    document: Cell<DocumentState>,
    scroll_container: OnceCell<ScrollContainer>,
    detections: Cell<u32>,
    viewport: Cell<Rect>,
    measurable: Cell<bool>,
    refuse_watches: Cell<bool>,
    eager_watches: Cell<bool>,
    watches: RefCell<Vec<WatchSlot>>,
    tasks: RefCell<Vec<TaskSlot>>,
}

impl fmt::Debug for HeadlessPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HeadlessPage")
            .field("nodes", &self.nodes.borrow().len())
            .field("signals", &self.signals.get())
            .field("viewport", &self.viewport.get())
            .field("watches", &self.watches.borrow().len())
            .field("tasks", &self.tasks.borrow().len())
            .finish_non_exhaustive()
    }
}

impl HeadlessPage {
    /// Creates an empty page with the given signals and viewport (in
    /// document coordinates).
    #[must_use]
    pub fn new(signals: EnvironmentSignals, viewport: Rect) -> Rc<Self> {
        Rc::new(Self {
            nodes: RefCell::new(Vec::new()),
            signals: Cell::new(signals),
            document: Cell::new(DocumentState::default()),
            scroll_container: OnceCell::new(),
            detections: Cell::new(0),
            viewport: Cell::new(viewport),
            measurable: Cell::new(true),
            refuse_watches: Cell::new(false),
            eager_watches: Cell::new(false),
            watches: RefCell::new(Vec::new()),
            tasks: RefCell::new(Vec::new()),
        })
    }

    /// Adds a node with document-space bounds `rect`, optionally under
    /// `parent`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this page.
    pub fn add_node(&self, parent: Option<NodeId>, rect: Rect) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(u32::try_from(nodes.len()).expect("node count fits in u32"));
        nodes.push(Node {
            children: Vec::new(),
            rect,
            style: NodeStyle::default(),
        });
        if let Some(parent) = parent {
            nodes[parent.0 as usize].children.push(id);
        }
        id
    }

    /// Returns the inline style of `node`.
    #[must_use]
    pub fn style(&self, node: NodeId) -> NodeStyle {
        self.nodes.borrow()[node.0 as usize].style
    }

    /// Returns the total number of style writes across all nodes.
    #[must_use]
    pub fn total_writes(&self) -> u32 {
        self.nodes.borrow().iter().map(|n| n.style.writes).sum()
    }

    /// Moves `node` (layout shift).
    pub fn set_rect(&self, node: NodeId, rect: Rect) {
        self.nodes.borrow_mut()[node.0 as usize].rect = rect;
    }

    /// Replaces the environment signals seen by new controllers.
    pub fn set_signals(&self, signals: EnvironmentSignals) {
        self.signals.set(signals);
    }

    /// Sets the computed document state.
    ///
    /// Only the first scroll-container detection reads it.
    pub fn set_document(&self, document: DocumentState) {
        self.document.set(document);
    }

    /// Makes [`Backend::measure`] succeed or fail.
    pub fn set_measurable(&self, measurable: bool) {
        self.measurable.set(measurable);
    }

    /// Makes [`Backend::watch`] refuse to create watches.
    pub fn set_refuse_watches(&self, refuse: bool) {
        self.refuse_watches.set(refuse);
    }

    /// Makes [`Backend::watch`] fire before returning when the host is
    /// already inside its region, like a platform that reports the initial
    /// intersection synchronously.
    pub fn set_eager_watches(&self, eager: bool) {
        self.eager_watches.set(eager);
    }

    /// Scrolls the viewport so its top edge is at `y`, then delivers
    /// intersections to active watches.
    pub fn scroll_to(&self, y: f64) {
        let vp = self.viewport.get();
        self.viewport
            .set(Rect::new(vp.x0, y, vp.x1, y + vp.height()));
        self.deliver_intersections();
    }

    /// Fires every active watch whose host is inside its region.
    pub fn deliver_intersections(&self) {
        let viewport = self.viewport.get();
        let due: Vec<Trigger> = {
            let nodes = self.nodes.borrow();
            self.watches
                .borrow()
                .iter()
                .filter(|w| {
                    w.active
                        && w.region
                            .is_reached(nodes[w.host.0 as usize].rect, viewport)
                })
                .map(|w| w.trigger.clone())
                .collect()
        };
        for trigger in due {
            trigger.fire();
        }
    }

    /// Fires every watch ever armed over `host`, released or not.
    ///
    /// Models platform callbacks that were queued before a release and are
    /// delivered late.
    pub fn force_intersection(&self, host: NodeId) {
        let all: Vec<Trigger> = self
            .watches
            .borrow()
            .iter()
            .filter(|w| w.host == host)
            .map(|w| w.trigger.clone())
            .collect();
        for trigger in all {
            trigger.fire();
        }
    }

    /// Runs all queued deferred tasks that were not cancelled, returning how
    /// many ran. Tasks queued while running wait for the next frame.
    pub fn run_frame(&self) -> usize {
        let ready: Vec<Box<dyn FnOnce()>> = self
            .tasks
            .borrow_mut()
            .iter_mut()
            .filter(|slot| !slot.cancelled)
            .filter_map(|slot| slot.task.take())
            .collect();
        let ran = ready.len();
        for task in ready {
            task();
        }
        ran
    }

    /// Finishes every in-flight transition.
    pub fn settle(&self) {
        for node in self.nodes.borrow_mut().iter_mut() {
            node.style.in_flight = false;
        }
    }

    /// Number of watches ever created.
    #[must_use]
    pub fn watches_created(&self) -> usize {
        self.watches.borrow().len()
    }

    /// Number of watches not yet released.
    #[must_use]
    pub fn active_watches(&self) -> usize {
        self.watches.borrow().iter().filter(|w| w.active).count()
    }

    /// Release count of each watch, in creation order.
    #[must_use]
    pub fn watch_releases(&self) -> Vec<u32> {
        self.watches.borrow().iter().map(|w| w.releases).collect()
    }

    /// Number of deferred tasks that are neither run nor cancelled.
    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.tasks
            .borrow()
            .iter()
            .filter(|t| !t.cancelled && t.task.is_some())
            .count()
    }

    /// Number of times scroll-container detection ran.
    #[must_use]
    pub fn scroll_container_detections(&self) -> u32 {
        self.detections.get()
    }

    fn write(&self, node: NodeId, f: impl FnOnce(&mut NodeStyle)) {
        let mut nodes = self.nodes.borrow_mut();
        let style = &mut nodes[node.0 as usize].style;
        f(style);
        style.writes += 1;
    }
}

/// [`Backend`] over a shared [`HeadlessPage`].
#[derive(Clone, Debug)]
pub struct HeadlessBackend {
    page: Rc<HeadlessPage>,
    halt_on_dispose: bool,
}

impl HeadlessBackend {
    /// Creates a backend whose reveals run to completion after disposal.
    #[must_use]
    pub fn new(page: Rc<HeadlessPage>) -> Self {
        Self {
            page,
            halt_on_dispose: false,
        }
    }

    /// Creates a backend whose reveals stop on disposal and snap every
    /// target to its final visible pose.
    #[must_use]
    pub fn halting(page: Rc<HeadlessPage>) -> Self {
        Self {
            page,
            halt_on_dispose: true,
        }
    }

    /// Returns the page.
    #[must_use]
    pub fn page(&self) -> &Rc<HeadlessPage> {
        &self.page
    }
}

/// Watch handle of a [`HeadlessBackend`].
#[derive(Debug)]
pub struct HeadlessWatch {
    page: Rc<HeadlessPage>,
    slot: usize,
}

impl Release for HeadlessWatch {
    fn release(&mut self) {
        let mut watches = self.page.watches.borrow_mut();
        let w = &mut watches[self.slot];
        w.active = false;
        w.releases += 1;
    }
}

/// Deferred-task handle of a [`HeadlessBackend`].
#[derive(Debug)]
pub struct HeadlessTask {
    page: Rc<HeadlessPage>,
    slot: usize,
}

impl Release for HeadlessTask {
    fn release(&mut self) {
        self.page.tasks.borrow_mut()[self.slot].cancelled = true;
    }
}

/// Reveal handle of a [`HeadlessBackend`].
#[derive(Debug)]
pub struct HeadlessMotion {
    page: Rc<HeadlessPage>,
    targets: Vec<NodeId>,
    halt: bool,
}

impl Motion for HeadlessMotion {
    fn halt(&mut self) -> bool {
        if !self.halt {
            return false;
        }
        let mut halted = false;
        for &target in &self.targets {
            if self.page.style(target).in_flight {
                self.page.write(target, |s| {
                    s.pose = Some(Pose::VISIBLE);
                    s.in_flight = false;
                });
                halted = true;
            }
        }
        halted
    }
}

impl Backend for HeadlessBackend {
    type Node = NodeId;
    type Watch = HeadlessWatch;
    type Task = HeadlessTask;
    type Motion = HeadlessMotion;

    fn signals(&self) -> EnvironmentSignals {
        self.page.signals.get()
    }

    fn scroll_container(&self) -> ScrollContainer {
        *self.page.scroll_container.get_or_init(|| {
            self.page.detections.set(self.page.detections.get() + 1);
            detect_scroll_container(&self.page.document.get())
        })
    }

    fn children(&self, host: &NodeId) -> Vec<NodeId> {
        self.page.nodes.borrow()[host.0 as usize].children.clone()
    }

    fn conceal(&self, target: &NodeId, pose: Pose, transition: &Transition) {
        self.page.write(*target, |s| {
            s.pose = Some(pose);
            s.transition = Some(*transition);
            s.in_flight = false;
        });
    }

    fn reveal(&self, targets: &[NodeId], cues: &[Cue]) -> HeadlessMotion {
        for (target, cue) in targets.iter().zip(cues) {
            self.page.write(*target, |s| {
                s.pose = Some(cue.to);
                s.transition = Some(cue.transition);
                s.in_flight = true;
            });
        }
        HeadlessMotion {
            page: Rc::clone(&self.page),
            targets: targets.to_vec(),
            halt: self.halt_on_dispose,
        }
    }

    fn watch(
        &self,
        host: &NodeId,
        region: &TriggerRegion,
        trigger: Trigger,
    ) -> Option<HeadlessWatch> {
        if self.page.refuse_watches.get() {
            return None;
        }
        let slot = {
            let mut watches = self.page.watches.borrow_mut();
            watches.push(WatchSlot {
                host: *host,
                region: *region,
                trigger: trigger.clone(),
                active: true,
                releases: 0,
            });
            watches.len() - 1
        };
        if self.page.eager_watches.get() {
            let rect = self.page.nodes.borrow()[host.0 as usize].rect;
            if region.is_reached(rect, self.page.viewport.get()) {
                trigger.fire();
            }
        }
        Some(HeadlessWatch {
            page: Rc::clone(&self.page),
            slot,
        })
    }

    fn defer(&self, task: Box<dyn FnOnce()>) -> Option<HeadlessTask> {
        let mut tasks = self.page.tasks.borrow_mut();
        tasks.push(TaskSlot {
            task: Some(task),
            cancelled: false,
        });
        Some(HeadlessTask {
            page: Rc::clone(&self.page),
            slot: tasks.len() - 1,
        })
    }

    fn measure(&self, host: &NodeId) -> Option<Geometry> {
        if !self.page.measurable.get() {
            return None;
        }
        Some(Geometry {
            element: self.page.nodes.borrow()[host.0 as usize].rect,
            viewport: self.page.viewport.get(),
        })
    }
}
