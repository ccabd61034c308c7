//! The page controller: input surface, lifecycle, and signals.
//!
//! [`PageController`] binds one configuration to one page stack and owns
//! every collaborator: the gesture tracker, the transition engine, and the
//! overlay models. The host feeds it touch and lifecycle events through
//! explicit method calls and observes it through signals — there is no
//! event-proxy delegation and no callback closures in the configuration.
//!
//! # Lifecycle
//!
//! 1. Construct with [`PageController::new`] and connect the signals.
//! 2. Call [`loaded`](PageController::loaded) once the surface is ready;
//!    this performs the initial display and fires the first `page_changed`.
//! 3. Feed `touch_start` / `touch_move` / `touch_end` from the platform's
//!    touch events; apply the returned frames and snap animations.
//! 4. Call [`transition_finished`](PageController::transition_finished) when
//!    the platform reports the snap animation done — this flips the current
//!    marking, fires `page_changed`, and restarts entrance animations.
//!
//! # Example
//!
//! ```
//! use pageturn::{
//!     EndReaction, PageController, PageDescriptor, PagerConfig, Point, Viewport,
//! };
//!
//! let config = PagerConfig::new();
//! let pages = vec![PageDescriptor::new(); 3];
//! let mut controller = PageController::new(config, Viewport::new(375.0, 667.0), pages)?;
//!
//! controller.page_changed.connect(|change| {
//!     println!("page {} ({:?})", change.index, change.direction);
//! });
//! controller.loaded();
//!
//! controller.touch_start(Point::new(0.0, 500.0));
//! controller.touch_move(Point::new(0.0, 450.0));
//! let reaction = controller.touch_end(Point::new(0.0, 420.0))?;
//! assert!(matches!(reaction, EndReaction::Commit(_)));
//! assert_eq!(controller.current_index(), 1);
//! # Ok::<(), pageturn::PagerError>(())
//! ```

use std::time::Instant;

use tracing::debug;

use pageturn_core::Signal;
use pageturn_core::logging::targets;

use crate::animation::entrance::{self, EntrancePlayback};
use crate::config::PagerConfig;
use crate::engine::{CommitOutcome, Direction, DragFrame, EnginePhase, TransitionEngine};
use crate::error::{Result, StateError};
use crate::geometry::{Orientation, Point, Viewport};
use crate::gesture::{GestureStage, GestureTracker};
use crate::overlay::{self, Indicator, LoadingGate};
use crate::page::{PageDescriptor, PageId, PageStack};

/// Payload of the [`PageController::page_changed`] signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    /// The new current page index.
    pub index: usize,
    /// The new current page's stable handle.
    pub page: PageId,
    /// How the page became current.
    pub direction: Direction,
}

/// Reaction to a touch-start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartReaction {
    /// A session opened; the stage is now pressed.
    Pressed,
    /// Input is blocked by the settle lock or the loading gate. Suppress the
    /// platform's default touch handling and ignore the gesture.
    Blocked,
}

/// Reaction to a touch-move.
///
/// Hosts should suppress the platform's default handling for every move
/// while a session is active, whichever variant is returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoveReaction {
    /// No active session, or input is blocked.
    Blocked,
    /// The drag advanced.
    Dragging {
        /// Styling hint: which way the surface is being pulled.
        hint: Direction,
        /// Live frame to apply, present when drag-follow is on and the
        /// boundary policy allows the movement.
        frame: Option<DragFrame>,
    },
}

/// Reaction to a touch-end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EndReaction {
    /// Press and release without movement: a tap, never a page change.
    Tap,
    /// The commit step ran; play the snap animation if one is carried.
    Commit(CommitOutcome),
}

/// A touch-gesture page-transition controller bound to one page stack.
///
/// # Signals
///
/// - [`page_changed`](Self::page_changed): fired after every committed
///   transition and the initial display
/// - [`orientation_changed`](Self::orientation_changed): fired on device
///   rotation
/// - [`indicator_changed`](Self::indicator_changed): fired when the
///   indicator highlight moves
/// - [`entrance_started`](Self::entrance_started): fired when entrance
///   animations should restart on the new current page
pub struct PageController {
    config: PagerConfig,
    viewport: Viewport,
    stack: PageStack,
    tracker: GestureTracker,
    engine: TransitionEngine,
    gate: LoadingGate,
    indicator: Option<Indicator>,
    started: bool,
    /// Set when a commit moved pages and the host has not yet reported the
    /// animation finished.
    pending_transition: bool,

    /// Emitted after every committed transition and the initial display.
    pub page_changed: Signal<PageChange>,
    /// Emitted with the device orientation on rotation.
    pub orientation_changed: Signal<Orientation>,
    /// Emitted when the indicator highlight moves to a new page index.
    pub indicator_changed: Signal<usize>,
    /// Emitted when entrance animations should restart on the new current page.
    pub entrance_started: Signal<EntrancePlayback>,
}

impl PageController {
    /// Creates a controller for `pages` inside `viewport`.
    ///
    /// Validates that at least one page was supplied and that the viewport
    /// has positive extent along the configured axis.
    pub fn new(
        config: PagerConfig,
        viewport: Viewport,
        pages: Vec<PageDescriptor>,
    ) -> Result<Self> {
        let stack = PageStack::new(pages)?;
        let engine =
            TransitionEngine::new(&config, stack.count(), viewport.extent(config.axis()))?;
        let indicator = config
            .indicator()
            .then(|| Indicator::new(config.axis(), stack.count()));
        let gate = LoadingGate::new(config.preload());
        let tracker = GestureTracker::new(config.axis());

        Ok(Self {
            config,
            viewport,
            stack,
            tracker,
            engine,
            gate,
            indicator,
            started: false,
            pending_transition: false,
            page_changed: Signal::new(),
            orientation_changed: Signal::new(),
            indicator_changed: Signal::new(),
            entrance_started: Signal::new(),
        })
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The bound configuration.
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// The viewport reported at initialization.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The number of pages.
    pub fn page_count(&self) -> usize {
        self.stack.count()
    }

    /// The current page index.
    pub fn current_index(&self) -> usize {
        self.engine.current_index()
    }

    /// The current page's stable handle.
    pub fn current_page(&self) -> PageId {
        // The engine keeps the index in bounds
        self.stack
            .get(self.engine.current_index())
            .map(|page| page.id())
            .unwrap_or_else(|| PageId::from_index(0))
    }

    /// The direction of the last commit.
    pub fn direction(&self) -> Direction {
        self.engine.direction()
    }

    /// The tracked resting translation of the stack (sliding style).
    pub fn resting_offset(&self) -> f32 {
        self.engine.resting_offset()
    }

    /// The state-machine phase right now.
    pub fn phase(&self) -> EnginePhase {
        self.engine.phase(Instant::now())
    }

    /// Whether a commit is still settling.
    pub fn is_transitioning(&self) -> bool {
        self.engine.is_locked(Instant::now())
    }

    /// The stage of the current gesture session.
    pub fn gesture_stage(&self) -> GestureStage {
        self.tracker.stage()
    }

    /// The indicator model, when configured.
    pub fn indicator(&self) -> Option<&Indicator> {
        self.indicator.as_ref()
    }

    /// Whether the next-page arrow shows on `index` (arrows configured and
    /// not the last page).
    pub fn arrow_visible(&self, index: usize) -> bool {
        self.config.arrows() && overlay::arrow_visible(index, self.stack.count())
    }

    /// Whether gesture input is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.gate.is_engaged() || self.engine.is_locked(Instant::now())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Marks the surface loaded.
    ///
    /// Opens the loading gate, marks the first page current, and fires the
    /// initial `page_changed` (direction [`Direction::Stay`]) together with
    /// its entrance playback. Call once, after connecting signals; repeated
    /// calls are no-ops.
    pub fn loaded(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.gate.release();

        let index = self.engine.current_index();
        self.stack.set_current(index);
        debug!(target: targets::CONTROLLER, index, "initial display");
        self.emit_page_changed(index);
        self.emit_entrances(index);
    }

    /// Reports the platform's animation/transition completion for the last
    /// commit.
    ///
    /// For a commit that moved pages this flips the current marking, fires
    /// `page_changed`, and restarts the new page's entrance animations.
    /// Calls without a pending moved commit are no-ops, as are completions
    /// of stay-settle animations.
    pub fn transition_finished(&mut self) {
        if !self.pending_transition {
            return;
        }
        self.pending_transition = false;

        let index = self.engine.current_index();
        self.stack.set_current(index);
        debug!(target: targets::CONTROLLER, index, "transition finished");
        self.emit_page_changed(index);
        self.emit_entrances(index);
    }

    /// Reports a device rotation.
    pub fn rotated(&mut self, orientation: Orientation) {
        self.orientation_changed.emit(orientation);
    }

    // =========================================================================
    // Touch input
    // =========================================================================

    /// Feeds a touch-start.
    ///
    /// Opens a gesture session unless the settle lock or the loading gate
    /// blocks input, capturing the tracked resting offset as the drag base.
    pub fn touch_start(&mut self, point: Point) -> StartReaction {
        if self.is_blocked() {
            return StartReaction::Blocked;
        }
        self.tracker.begin(point, self.engine.resting_offset());
        StartReaction::Pressed
    }

    /// Feeds a touch-move.
    ///
    /// Advances the drag and returns the live frame to apply, when one is
    /// due.
    pub fn touch_move(&mut self, point: Point) -> MoveReaction {
        if self.is_blocked() {
            return MoveReaction::Blocked;
        }
        let Some(session) = self.tracker.update(point) else {
            return MoveReaction::Blocked;
        };
        let frame = self.engine.drag_update(&session);
        MoveReaction::Dragging {
            hint: Direction::hint_for(session.delta()),
            frame,
        }
    }

    /// Feeds a touch-end.
    ///
    /// Runs the commit step when the session was dragging. A press-release
    /// without movement is a tap and commits nothing; a touch-end with no
    /// session at all is a [`StateError::UnmatchedTouchEnd`].
    pub fn touch_end(&mut self, point: Point) -> Result<EndReaction> {
        match self.tracker.stage() {
            GestureStage::Idle | GestureStage::Released => {
                return Err(StateError::UnmatchedTouchEnd.into());
            }
            GestureStage::Pressed => {
                self.tracker.cancel();
                return Ok(EndReaction::Tap);
            }
            GestureStage::Dragging => {}
        }

        let Some(session) = self.tracker.finish(point) else {
            return Err(StateError::UnmatchedTouchEnd.into());
        };
        let outcome = self.engine.commit(&session, Instant::now());
        if outcome.moved() {
            self.pending_transition = true;
        }
        self.refresh_indicator();
        Ok(EndReaction::Commit(outcome))
    }

    /// Abandons the current gesture session (platform touch cancellation).
    pub fn touch_cancel(&mut self) {
        self.tracker.cancel();
        self.engine.cancel_drag();
    }

    // =========================================================================
    // Programmatic navigation
    // =========================================================================

    /// Navigates to `index` with the configured transition, outside any
    /// gesture.
    ///
    /// Unlike a gesture commit this may cross several pages at once. Fails
    /// with a [`StateError`] while a commit is settling or when `index` is
    /// out of range.
    pub fn jump_to(&mut self, index: usize) -> Result<CommitOutcome> {
        let outcome = self.engine.jump(index, Instant::now())?;
        if outcome.moved() {
            self.pending_transition = true;
        }
        self.refresh_indicator();
        Ok(outcome)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn refresh_indicator(&mut self) {
        let index = self.engine.current_index();
        if let Some(indicator) = self.indicator.as_mut()
            && indicator.set_highlighted(index)
        {
            self.indicator_changed.emit(index);
        }
    }

    fn emit_page_changed(&self, index: usize) {
        let Some(page) = self.stack.get(index) else {
            return;
        };
        self.page_changed.emit(PageChange {
            index,
            page: page.id(),
            direction: self.engine.direction(),
        });
    }

    fn emit_entrances(&self, index: usize) {
        let Some(page) = self.stack.get(index) else {
            return;
        };
        let playback =
            entrance::playback_for(page, index, self.config.axis(), self.engine.direction());
        if !playback.animations.is_empty() {
            self.entrance_started.emit(playback);
        }
    }
}

static_assertions::assert_impl_all!(PageController: Send, Sync);
