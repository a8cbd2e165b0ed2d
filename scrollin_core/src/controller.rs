// Copyright 2026 the Scrollin Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The reveal state machine.
//!
//! ```text
//!             ┌──────── trigger / re-measure ───────┐
//!             │                                     ▼
//!   new() ─► Armed ──────── dispose() ──────►   Triggered
//!             │                                     │
//!             └──────────────► Disposed ◄── dispose()┘
//! ```
//!
//! [`Inert`](RevealMode::Inert) and [`Final`](RevealMode::Final) controllers
//! start in [`Phase::Triggered`] without writing any style.
//! [`Immediate`](RevealMode::Immediate) controllers pass through `Armed` and
//! commit before [`RevealController::new`] returns.

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};
use core::fmt;

use crate::backend::{Backend, Motion as _, Release as _, Trigger};
use crate::environment::RevealMode;
use crate::options::RevealOptions;
use crate::targets::Targets;
use crate::trace::{
    ArmEvent, CommitEvent, ConstructEvent, DisposeEvent, RemeasureEvent, TraceSink, Tracer,
    TriggerEvent, TriggerSource,
};

/// Lifecycle phase of a [`RevealController`].
///
/// Phases only move forward: `Armed → Triggered → Disposed` or
/// `Armed → Disposed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// The watch is active and the reveal is pending.
    Armed,
    /// The reveal has been committed and the watch released.
    Triggered,
    /// Terminal; nothing further happens.
    Disposed,
}

/// Animates one host element into view the first time it scrolls into its
/// trigger region.
///
/// Construction does all the work: it reads the environment, selects the
/// targets, writes the hidden pose, and arms the watch. The only operation
/// afterwards is [`dispose`](Self::dispose), which is idempotent and also
/// runs on drop.
pub struct RevealController<B: Backend> {
    inner: Rc<Inner<B>>,
}

struct Inner<B: Backend> {
    backend: B,
    host: B::Node,
    targets: Targets<B::Node>,
    options: RevealOptions,
    mode: RevealMode,
    phase: Cell<Phase>,
    /// Set while the backend registers the watch.
    arming: Cell<bool>,
    /// The watch fired before registration returned.
    fired_while_arming: Cell<bool>,
    /// Platform handles; taken out before being released so no borrow is held
    /// while the backend runs.
    resources: RefCell<Resources<B>>,
    tracer: RefCell<Tracer>,
}

struct Resources<B: Backend> {
    watch: Option<B::Watch>,
    remeasure: Option<B::Task>,
    motion: Option<B::Motion>,
}

impl<B: Backend> RevealController<B> {
    /// Creates a controller for `host` and runs the construction pass.
    pub fn new(backend: B, host: B::Node, options: RevealOptions) -> Self {
        Self::with_tracer(backend, host, options, Tracer::none())
    }

    /// Like [`new`](Self::new), reporting lifecycle events to `sink`.
    ///
    /// Events are only delivered when the `trace` feature is enabled.
    pub fn with_sink(
        backend: B,
        host: B::Node,
        options: RevealOptions,
        sink: Box<dyn TraceSink>,
    ) -> Self {
        Self::with_tracer(backend, host, options, Tracer::new(sink))
    }

    fn with_tracer(backend: B, host: B::Node, options: RevealOptions, mut tracer: Tracer) -> Self {
        let options = options.sanitized();
        let mode = backend.signals().mode();
        let children = backend.children(&host);
        let targets = Targets::select(host.clone(), children, options.stagger);

        tracer.construct(&ConstructEvent {
            mode,
            targets: targets.count(),
            stagger: targets.stagger(),
        });

        let phase = if mode.animates() {
            Phase::Armed
        } else {
            Phase::Triggered
        };

        let inner = Rc::new(Inner {
            backend,
            host,
            targets,
            options,
            mode,
            phase: Cell::new(phase),
            arming: Cell::new(false),
            fired_while_arming: Cell::new(false),
            resources: RefCell::new(Resources {
                watch: None,
                remeasure: None,
                motion: None,
            }),
            tracer: RefCell::new(tracer),
        });

        match mode {
            RevealMode::Inert | RevealMode::Final => {}
            RevealMode::Immediate => {
                inner.conceal();
                inner.commit(TriggerSource::Immediate);
            }
            RevealMode::Watch => {
                inner.conceal();
                Inner::arm(&inner);
            }
        }

        Self { inner }
    }

    /// Stops pending work and moves to [`Phase::Disposed`].
    ///
    /// Releases the watch and the deferred re-measurement if still held.
    /// Never un-reveals content. Calling it again is a no-op.
    pub fn dispose(&self) {
        self.inner.dispose();
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.inner.phase.get()
    }

    /// Returns the degradation-ladder rung chosen at construction.
    #[must_use]
    pub fn mode(&self) -> RevealMode {
        self.inner.mode
    }

    /// Returns the animated targets in DOM order.
    #[must_use]
    pub fn targets(&self) -> &[B::Node] {
        self.inner.targets.as_slice()
    }

    /// Returns the number of targets.
    #[must_use]
    pub fn target_count(&self) -> usize {
        self.inner.targets.count()
    }

    /// Returns the effective per-index stagger, in seconds.
    #[must_use]
    pub fn stagger(&self) -> f64 {
        self.inner.targets.stagger()
    }

    /// Returns the options after sanitizing.
    #[must_use]
    pub fn options(&self) -> &RevealOptions {
        &self.inner.options
    }

    /// Returns the backend.
    #[must_use]
    pub fn backend(&self) -> &B {
        &self.inner.backend
    }
}

impl<B: Backend> Drop for RevealController<B> {
    fn drop(&mut self) {
        self.inner.dispose();
    }
}

impl<B: Backend> fmt::Debug for RevealController<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealController")
            .field("phase", &self.inner.phase.get())
            .field("mode", &self.inner.mode)
            .field("targets", &self.inner.targets.count())
            .field("options", &self.inner.options)
            .finish_non_exhaustive()
    }
}

impl<B: Backend> Inner<B> {
    fn conceal(&self) {
        let (pose, transition) = self.targets.priming(&self.options);
        for target in self.targets.as_slice() {
            self.backend.conceal(target, pose, &transition);
        }
    }

    fn arm(this: &Rc<Self>) {
        let weak = Rc::downgrade(this);
        let trigger = Trigger::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if inner.arming.get() {
                inner.fired_while_arming.set(true);
            } else {
                inner.commit(TriggerSource::Watch);
            }
        });

        this.arming.set(true);
        let watch = this
            .backend
            .watch(&this.host, &this.options.trigger, trigger);
        this.arming.set(false);

        let Some(watch) = watch else {
            this.tracer.borrow_mut().arm(&ArmEvent {
                scroller: this.backend.scroll_container(),
                watching: false,
                remeasure_scheduled: false,
            });
            this.commit(TriggerSource::Immediate);
            return;
        };
        this.resources.borrow_mut().watch = Some(watch);

        // A watch that fired during registration commits once `Arm` is traced.
        let fired = this.fired_while_arming.replace(false);
        let mut remeasure_scheduled = false;
        if !fired {
            let weak = Rc::downgrade(this);
            let task = this.backend.defer(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.remeasure();
                }
            }));
            if let Some(mut task) = task {
                remeasure_scheduled = true;
                if this.phase.get() == Phase::Armed {
                    this.resources.borrow_mut().remeasure = Some(task);
                } else {
                    task.release();
                }
            }
        }

        this.tracer.borrow_mut().arm(&ArmEvent {
            scroller: this.backend.scroll_container(),
            watching: true,
            remeasure_scheduled,
        });

        if fired {
            this.commit(TriggerSource::Watch);
        }
    }

    fn commit(&self, source: TriggerSource) {
        if self.phase.get() != Phase::Armed {
            return;
        }
        self.phase.set(Phase::Triggered);

        let (watch, task) = {
            let mut r = self.resources.borrow_mut();
            (r.watch.take(), r.remeasure.take())
        };
        if let Some(mut watch) = watch {
            watch.release();
        }
        if let Some(mut task) = task {
            task.release();
        }

        let cues = self.targets.cues(&self.options);
        {
            let mut tracer = self.tracer.borrow_mut();
            tracer.trigger(&TriggerEvent { source });
            for cue in &cues {
                tracer.commit(&CommitEvent {
                    index: cue.index,
                    delay: cue.transition.delay,
                    duration: cue.transition.duration,
                });
            }
        }

        let motion = self.backend.reveal(self.targets.as_slice(), &cues);
        self.resources.borrow_mut().motion = Some(motion);
    }

    fn remeasure(&self) {
        // The task has run; its handle is spent.
        let spent = self.resources.borrow_mut().remeasure.take();
        drop(spent);

        if self.phase.get() != Phase::Armed {
            return;
        }
        let reached = self
            .backend
            .measure(&self.host)
            .map(|g| self.options.trigger.is_reached(g.element, g.viewport));
        self.tracer
            .borrow_mut()
            .remeasure(&RemeasureEvent { reached });
        if reached == Some(true) {
            self.commit(TriggerSource::Remeasure);
        }
    }

    fn dispose(&self) {
        let from = self.phase.get();
        if from == Phase::Disposed {
            return;
        }
        self.phase.set(Phase::Disposed);

        let (watch, task, motion) = {
            let mut r = self.resources.borrow_mut();
            (r.watch.take(), r.remeasure.take(), r.motion.take())
        };
        let released_watch = watch.is_some();
        if let Some(mut watch) = watch {
            watch.release();
        }
        if let Some(mut task) = task {
            task.release();
        }
        let halted_motion = motion.is_some_and(|mut motion| motion.halt());

        self.tracer.borrow_mut().dispose(&DisposeEvent {
            from,
            released_watch,
            halted_motion,
        });
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::Rect;

    use super::*;
    use crate::environment::EnvironmentSignals;
    use crate::headless::{HeadlessBackend, HeadlessPage, NodeId};
    use crate::pose::Pose;
    use crate::scroll::{DocumentState, Overflow, ScrollContainer};

    const VIEWPORT: Rect = Rect::new(0.0, 0.0, 1280.0, 800.0);

    /// Scroll position that puts the default host's top above the 80% line.
    const IN_VIEW: f64 = 1500.0;

    const REDUCED: EnvironmentSignals = EnvironmentSignals {
        windowed: true,
        reduced_motion: true,
        observation: true,
    };

    const NO_OBSERVER: EnvironmentSignals = EnvironmentSignals {
        windowed: true,
        reduced_motion: false,
        observation: false,
    };

    /// A page with one host below the fold holding `children` stacked rows.
    fn page_with(
        signals: EnvironmentSignals,
        children: usize,
    ) -> (Rc<HeadlessPage>, NodeId, Vec<NodeId>) {
        let page = HeadlessPage::new(signals, VIEWPORT);
        let host = page.add_node(None, Rect::new(0.0, 2000.0, 1280.0, 2600.0));
        let kids = (0..children)
            .map(|i| {
                let y = 2000.0 + 100.0 * i as f64;
                page.add_node(Some(host), Rect::new(0.0, y, 1280.0, y + 100.0))
            })
            .collect();
        (page, host, kids)
    }

    fn controller(
        page: &Rc<HeadlessPage>,
        host: NodeId,
        options: RevealOptions,
    ) -> RevealController<HeadlessBackend> {
        RevealController::new(HeadlessBackend::new(Rc::clone(page)), host, options)
    }

    #[test]
    fn single_child_host_reveals_itself_without_delay() {
        let (page, host, kids) = page_with(EnvironmentSignals::INTERACTIVE, 1);
        let options = RevealOptions::new().with_offset(20.0).with_duration(0.5);
        let c = controller(&page, host, options);

        assert_eq!(c.targets(), &[host]);
        assert_eq!(c.stagger(), 0.0);
        assert_eq!(c.phase(), Phase::Armed);
        let hidden = page.style(host);
        assert_eq!(hidden.pose, Some(Pose::hidden(20.0)));
        assert_eq!(hidden.transition.map(|t| t.delay), Some(0.0));
        assert_eq!(page.style(kids[0]).writes, 0);

        page.scroll_to(IN_VIEW);

        assert_eq!(c.phase(), Phase::Triggered);
        let shown = page.style(host);
        assert_eq!(shown.pose, Some(Pose::VISIBLE));
        let t = shown.transition.unwrap();
        assert_eq!(t.delay, 0.0);
        assert_eq!(t.duration, 0.5);
        assert!(shown.in_flight, "reveal should be a running transition");
        assert_eq!(page.active_watches(), 0);
    }

    #[test]
    fn two_children_still_collapse_to_host() {
        let (page, host, _kids) = page_with(EnvironmentSignals::INTERACTIVE, 2);
        let c = controller(&page, host, RevealOptions::new().with_stagger(0.5));
        assert_eq!(c.target_count(), 1);
        assert_eq!(c.stagger(), 0.0);
    }

    #[test]
    fn five_children_are_staggered_by_index() {
        let (page, host, kids) = page_with(EnvironmentSignals::INTERACTIVE, 5);
        let c = controller(&page, host, RevealOptions::default());

        assert_eq!(c.targets(), kids.as_slice());
        for &kid in &kids {
            assert_eq!(page.style(kid).pose, Some(Pose::hidden(14.0)));
        }

        page.scroll_to(IN_VIEW);

        for (k, &kid) in kids.iter().enumerate() {
            let style = page.style(kid);
            assert_eq!(style.pose, Some(Pose::VISIBLE), "child {k}");
            let expected = k as f64 * 0.06;
            assert_eq!(style.transition.map(|t| t.delay), Some(expected), "child {k}");
        }
        assert_eq!(page.style(host).writes, 0, "host itself is not a target");
    }

    #[test]
    fn reduced_motion_touches_nothing() {
        let (page, host, _kids) = page_with(REDUCED, 4);
        let c = controller(&page, host, RevealOptions::default());

        assert_eq!(c.mode(), RevealMode::Final);
        assert_eq!(c.phase(), Phase::Triggered);
        assert_eq!(page.total_writes(), 0);
        assert_eq!(page.watches_created(), 0);
        assert_eq!(page.pending_tasks(), 0);

        c.dispose();
        assert_eq!(page.total_writes(), 0);
        assert_eq!(c.phase(), Phase::Disposed);
    }

    #[test]
    fn no_window_is_inert() {
        let (page, host, _kids) = page_with(EnvironmentSignals::HEADLESS, 0);
        let c = controller(&page, host, RevealOptions::default());
        assert_eq!(c.mode(), RevealMode::Inert);
        assert_eq!(page.total_writes(), 0);
        assert_eq!(page.watches_created(), 0);
        c.dispose();
        assert_eq!(page.total_writes(), 0);
    }

    #[test]
    fn missing_observation_hides_then_reveals_in_one_pass() {
        let (page, host, _kids) = page_with(NO_OBSERVER, 0);
        let c = controller(&page, host, RevealOptions::default());

        assert_eq!(c.mode(), RevealMode::Immediate);
        assert_eq!(c.phase(), Phase::Triggered);
        let style = page.style(host);
        assert_eq!(style.writes, 2, "one hidden write, one reveal write");
        assert_eq!(style.pose, Some(Pose::VISIBLE));
        assert_eq!(page.watches_created(), 0);
        assert_eq!(page.pending_tasks(), 0);
    }

    #[test]
    fn refused_watch_degrades_to_immediate_reveal() {
        let (page, host, _kids) = page_with(EnvironmentSignals::INTERACTIVE, 0);
        page.set_refuse_watches(true);
        let c = controller(&page, host, RevealOptions::default());

        assert_eq!(c.phase(), Phase::Triggered);
        assert_eq!(page.style(host).pose, Some(Pose::VISIBLE));
        assert_eq!(page.pending_tasks(), 0);
    }

    #[test]
    fn stays_armed_until_region_is_reached() {
        let (page, host, _kids) = page_with(EnvironmentSignals::INTERACTIVE, 0);
        let c = controller(&page, host, RevealOptions::default());

        page.scroll_to(1000.0);
        assert_eq!(c.phase(), Phase::Armed);
        assert_eq!(page.style(host).pose, Some(Pose::hidden(14.0)));

        page.scroll_to(IN_VIEW);
        assert_eq!(c.phase(), Phase::Triggered);
    }

    #[test]
    fn custom_region_changes_fire_point() {
        let (page, host, _kids) = page_with(EnvironmentSignals::INTERACTIVE, 0);
        let region = "top 25%".parse().unwrap();
        let c = controller(&page, host, RevealOptions::new().with_trigger(region));

        // 80% line is reached at 1500, the 25% line is not (2000 > 1500 + 200).
        page.scroll_to(IN_VIEW);
        assert_eq!(c.phase(), Phase::Armed);

        page.scroll_to(1800.0);
        assert_eq!(c.phase(), Phase::Triggered);
    }

    #[test]
    fn dispose_before_trigger_blocks_late_events() {
        let (page, host, _kids) = page_with(EnvironmentSignals::INTERACTIVE, 0);
        let c = controller(&page, host, RevealOptions::default());

        c.dispose();
        assert_eq!(c.phase(), Phase::Disposed);
        assert_eq!(page.active_watches(), 0);
        assert_eq!(page.pending_tasks(), 0);

        page.force_intersection(host);
        page.scroll_to(IN_VIEW);
        assert_eq!(c.phase(), Phase::Disposed);
        assert_eq!(page.style(host).pose, Some(Pose::hidden(14.0)));
        assert_eq!(page.watch_releases(), vec![1]);
    }

    #[test]
    fn dispose_after_commit_changes_nothing() {
        let (page, host, _kids) = page_with(EnvironmentSignals::INTERACTIVE, 0);
        let c = controller(&page, host, RevealOptions::default());
        page.scroll_to(IN_VIEW);
        let before = page.style(host);

        c.dispose();

        assert_eq!(page.style(host), before);
        assert_eq!(c.phase(), Phase::Disposed);
        assert_eq!(page.watch_releases(), vec![1]);
    }

    #[test]
    fn dispose_twice_equals_once() {
        let (page, host, _kids) = page_with(EnvironmentSignals::INTERACTIVE, 3);
        let c = controller(&page, host, RevealOptions::default());

        c.dispose();
        let writes = page.total_writes();
        c.dispose();

        assert_eq!(page.total_writes(), writes);
        assert_eq!(page.watch_releases(), vec![1]);
        assert_eq!(c.phase(), Phase::Disposed);
    }

    #[test]
    fn repeated_intersections_commit_once() {
        let (page, host, _kids) = page_with(EnvironmentSignals::INTERACTIVE, 0);
        let c = controller(&page, host, RevealOptions::default());

        page.scroll_to(IN_VIEW);
        page.force_intersection(host);
        page.force_intersection(host);
        page.scroll_to(IN_VIEW + 10.0);

        assert_eq!(c.phase(), Phase::Triggered);
        assert_eq!(page.style(host).writes, 2);
        assert_eq!(page.watch_releases(), vec![1]);
    }

    #[test]
    fn remeasure_catches_a_missed_trigger() {
        let page = HeadlessPage::new(EnvironmentSignals::INTERACTIVE, VIEWPORT);
        // Already on screen when armed; the watch never reports it.
        let host = page.add_node(None, Rect::new(0.0, 100.0, 1280.0, 300.0));
        let c = controller(&page, host, RevealOptions::default());

        assert_eq!(c.phase(), Phase::Armed);
        assert_eq!(page.pending_tasks(), 1);

        assert_eq!(page.run_frame(), 1);
        assert_eq!(c.phase(), Phase::Triggered);
        assert_eq!(page.style(host).pose, Some(Pose::VISIBLE));
        assert_eq!(page.active_watches(), 0);
    }

    #[test]
    fn remeasure_runs_exactly_once() {
        let (page, host, _kids) = page_with(EnvironmentSignals::INTERACTIVE, 0);
        let c = controller(&page, host, RevealOptions::default());

        assert_eq!(page.run_frame(), 1);
        assert_eq!(c.phase(), Phase::Armed, "host is still below the fold");
        assert_eq!(page.pending_tasks(), 0);

        // A later layout shift is not picked up by another pass.
        page.set_rect(host, Rect::new(0.0, 100.0, 1280.0, 300.0));
        assert_eq!(page.run_frame(), 0);
        assert_eq!(c.phase(), Phase::Armed);
    }

    #[test]
    fn unmeasurable_host_stays_armed() {
        let page = HeadlessPage::new(EnvironmentSignals::INTERACTIVE, VIEWPORT);
        let host = page.add_node(None, Rect::new(0.0, 100.0, 1280.0, 300.0));
        page.set_measurable(false);
        let c = controller(&page, host, RevealOptions::default());

        page.run_frame();
        assert_eq!(c.phase(), Phase::Armed);
    }

    #[test]
    fn dispose_cancels_pending_remeasure() {
        let page = HeadlessPage::new(EnvironmentSignals::INTERACTIVE, VIEWPORT);
        let host = page.add_node(None, Rect::new(0.0, 100.0, 1280.0, 300.0));
        let c = controller(&page, host, RevealOptions::default());

        c.dispose();
        assert_eq!(page.pending_tasks(), 0);
        assert_eq!(page.run_frame(), 0);
        assert_eq!(page.style(host).pose, Some(Pose::hidden(14.0)));
    }

    #[test]
    fn detached_motion_keeps_running_after_dispose() {
        let (page, host, kids) = page_with(EnvironmentSignals::INTERACTIVE, 3);
        let c = controller(&page, host, RevealOptions::default());
        page.scroll_to(IN_VIEW);

        c.dispose();
        assert!(kids.iter().all(|&k| page.style(k).in_flight));

        page.settle();
        assert!(kids.iter().all(|&k| !page.style(k).in_flight));
        assert!(kids
            .iter()
            .all(|&k| page.style(k).pose == Some(Pose::VISIBLE)));
    }

    #[test]
    fn halting_motion_snaps_to_final_pose_on_dispose() {
        let (page, host, kids) = page_with(EnvironmentSignals::INTERACTIVE, 3);
        let c = RevealController::new(
            HeadlessBackend::halting(Rc::clone(&page)),
            host,
            RevealOptions::default(),
        );
        page.scroll_to(IN_VIEW);

        c.dispose();
        for &k in &kids {
            let style = page.style(k);
            assert!(!style.in_flight, "halted targets must not stay mid-transition");
            assert_eq!(style.pose, Some(Pose::VISIBLE));
        }
    }

    #[test]
    fn watch_firing_during_registration_commits_once() {
        let page = HeadlessPage::new(EnvironmentSignals::INTERACTIVE, VIEWPORT);
        page.set_eager_watches(true);
        let host = page.add_node(None, Rect::new(0.0, 100.0, 1280.0, 300.0));
        let c = controller(&page, host, RevealOptions::default());

        assert_eq!(c.phase(), Phase::Triggered);
        assert_eq!(page.style(host).pose, Some(Pose::VISIBLE));
        assert_eq!(page.style(host).writes, 2);
        assert_eq!(page.watch_releases(), vec![1]);
        assert_eq!(page.pending_tasks(), 0, "no re-measure after a commit");
    }

    #[test]
    fn eager_watch_below_the_fold_arms_normally() {
        let (page, host, _kids) = page_with(EnvironmentSignals::INTERACTIVE, 0);
        page.set_eager_watches(true);
        let c = controller(&page, host, RevealOptions::default());

        assert_eq!(c.phase(), Phase::Armed);
        assert_eq!(page.pending_tasks(), 1);
        page.scroll_to(IN_VIEW);
        assert_eq!(c.phase(), Phase::Triggered);
    }

    #[test]
    fn drop_disposes() {
        let (page, host, _kids) = page_with(EnvironmentSignals::INTERACTIVE, 0);
        {
            let _c = controller(&page, host, RevealOptions::default());
            assert_eq!(page.active_watches(), 1);
        }
        assert_eq!(page.active_watches(), 0);
        assert_eq!(page.pending_tasks(), 0);

        page.force_intersection(host);
        assert_eq!(page.style(host).pose, Some(Pose::hidden(14.0)));
    }

    #[test]
    fn scroll_container_is_detected_once_per_page() {
        let page = HeadlessPage::new(EnvironmentSignals::INTERACTIVE, VIEWPORT);
        page.set_document(DocumentState {
            root_overflow_y: Overflow::Hidden,
            body_overflow_y: Overflow::Auto,
        });
        let controllers: Vec<_> = (0..8)
            .map(|i| {
                let y = 2000.0 + 300.0 * f64::from(i);
                let host = page.add_node(None, Rect::new(0.0, y, 1280.0, y + 200.0));
                controller(&page, host, RevealOptions::default())
            })
            .collect();

        assert_eq!(page.scroll_container_detections(), 1);
        assert_eq!(
            controllers[0].backend().scroll_container(),
            ScrollContainer::Body
        );
    }

    #[test]
    fn unusable_options_fall_back_to_defaults() {
        let (page, host, _kids) = page_with(EnvironmentSignals::INTERACTIVE, 0);
        let c = controller(
            &page,
            host,
            RevealOptions::new()
                .with_duration(f64::NAN)
                .with_offset(f64::INFINITY),
        );
        assert_eq!(c.options().duration, RevealOptions::DEFAULT_DURATION);
        assert_eq!(page.style(host).pose, Some(Pose::hidden(14.0)));
    }
}
