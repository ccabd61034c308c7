//! The gesture-to-page transition state machine.
//!
//! The engine owns the navigation state — current index, last committed
//! direction, settle lock, tracked resting offset — and is its only writer.
//! Given gesture data it produces live [`DragFrame`]s during a drag and a
//! [`CommitOutcome`] with the settle animation at release.
//!
//! Time is passed in explicitly (`Instant` parameters) so lock expiry is
//! testable without sleeping; the controller supplies `Instant::now()`.

mod strategy;

pub use strategy::{
    CommitDecision, CoverStrategy, DragContext, DragFrame, SlideStrategy, SnapAnimation,
    TransitionStrategy,
};

use std::time::{Duration, Instant};

use tracing::debug;

use pageturn_core::logging::targets;

use crate::boundary::outward_at_edge;
use crate::config::{PagerConfig, TransitionStyle};
use crate::error::{ConfigurationError, StateError};
use crate::gesture::GestureSession;

/// Committed page-turn direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// The current page stayed.
    #[default]
    Stay,
    /// Moved to the next page.
    Forward,
    /// Moved to the previous page.
    Backward,
}

impl Direction {
    /// Styling hint for an in-progress drag: a non-negative delta pulls
    /// toward the previous page.
    pub(crate) fn hint_for(delta: f32) -> Self {
        if delta >= 0.0 {
            Self::Backward
        } else {
            Self::Forward
        }
    }
}

/// Phase of the transition state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnginePhase {
    /// Nothing in progress.
    #[default]
    Idle,
    /// A drag is being followed.
    Dragging,
    /// A commit animation is settling; the lock rejects new gestures.
    Committing,
}

/// Timed lock held for the settle delay after each commit.
///
/// Implemented as a deadline rather than a queue: while held, new gestures
/// are rejected, not deferred. The lock releases itself once the deadline
/// passes; there is no explicit unlock on the commit path.
#[derive(Debug, Clone, Copy)]
pub struct SettleLock {
    delay: Duration,
    held_until: Option<Instant>,
}

impl SettleLock {
    /// Creates a lock with the given hold duration.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            held_until: None,
        }
    }

    /// Holds the lock for the settle delay starting at `now`.
    pub fn acquire(&mut self, now: Instant) {
        self.held_until = Some(now + self.delay);
    }

    /// Whether the lock still rejects input at `now`.
    pub fn is_held(&self, now: Instant) -> bool {
        self.held_until.is_some_and(|deadline| now < deadline)
    }

    /// Drops the deadline unconditionally.
    pub fn clear(&mut self) {
        self.held_until = None;
    }
}

/// Current page pointer and last committed direction.
///
/// Written only by the engine; every other collaborator reads it through
/// accessors.
#[derive(Debug, Clone, Copy)]
struct NavigationState {
    index: usize,
    direction: Direction,
}

/// Outcome of the commit step for a finished gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommitOutcome {
    /// The gesture pushed outward at the first or last page: nothing
    /// changes and no snap animation plays. Not an error — distinguishable
    /// from a real commit.
    BoundaryNoop,
    /// The gesture settled back on the current page.
    Stayed {
        /// Settle animation, absent when nothing moved on screen.
        snap: Option<SnapAnimation>,
    },
    /// The gesture moved to an adjacent page.
    Moved {
        /// Index before the commit.
        from: usize,
        /// Index after the commit.
        to: usize,
        /// Committed direction, never [`Direction::Stay`].
        direction: Direction,
        /// Settle animation for the destination.
        snap: SnapAnimation,
    },
}

impl CommitOutcome {
    /// The snap animation to play, if any.
    pub fn snap(&self) -> Option<SnapAnimation> {
        match self {
            Self::BoundaryNoop => None,
            Self::Stayed { snap } => *snap,
            Self::Moved { snap, .. } => Some(*snap),
        }
    }

    /// Whether the outcome changed the current page.
    pub fn moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

/// The transition state machine.
///
/// One engine exists per controller. It validates its geometry at
/// construction and selects the [`TransitionStrategy`] matching the
/// configured style once, up front.
#[derive(Debug)]
pub struct TransitionEngine {
    strategy: Box<dyn TransitionStrategy>,
    nav: NavigationState,
    lock: SettleLock,
    phase: EnginePhase,
    /// Tracked resting translation of the stack; replaces recovering the
    /// offset from live transforms.
    resting: f32,
    count: usize,
    extent: f32,
    drag_follow: bool,
    threshold: f32,
}

impl TransitionEngine {
    /// Creates an engine for `count` pages of `extent` along the scroll axis.
    pub fn new(
        config: &PagerConfig,
        count: usize,
        extent: f32,
    ) -> Result<Self, ConfigurationError> {
        if count == 0 {
            return Err(ConfigurationError::NoPages);
        }
        if !(extent > 0.0) {
            return Err(ConfigurationError::EmptyViewport { extent });
        }

        let strategy: Box<dyn TransitionStrategy> = match config.style() {
            TransitionStyle::Slide => Box::new(SlideStrategy),
            TransitionStyle::Cover => Box::new(CoverStrategy),
        };

        Ok(Self {
            strategy,
            nav: NavigationState {
                index: 0,
                direction: Direction::Stay,
            },
            lock: SettleLock::new(config.settle_delay()),
            phase: EnginePhase::Idle,
            resting: 0.0,
            count,
            extent,
            drag_follow: config.drag_follow(),
            threshold: config.swipe_threshold(),
        })
    }

    /// The current page index. Always within `0..count`.
    pub fn current_index(&self) -> usize {
        self.nav.index
    }

    /// The direction of the last commit.
    pub fn direction(&self) -> Direction {
        self.nav.direction
    }

    /// The tracked resting translation of the stack.
    pub fn resting_offset(&self) -> f32 {
        self.resting
    }

    /// Whether the settle lock rejects new gestures at `now`.
    pub fn is_locked(&self, now: Instant) -> bool {
        self.lock.is_held(now)
    }

    /// The state-machine phase at `now`.
    pub fn phase(&self, now: Instant) -> EnginePhase {
        if self.phase == EnginePhase::Committing && !self.lock.is_held(now) {
            EnginePhase::Idle
        } else {
            self.phase
        }
    }

    /// Live drag update.
    ///
    /// Returns the frame to apply, or `None` when drag-follow is disabled
    /// or the gesture pushes outward at an edge.
    pub fn drag_update(&mut self, session: &GestureSession) -> Option<DragFrame> {
        self.phase = EnginePhase::Dragging;
        let delta = session.delta();
        if !self.drag_follow || outward_at_edge(self.nav.index, self.count, delta) {
            return None;
        }
        Some(self.strategy.live_frame(&self.context(session)))
    }

    /// Commit step for a finished drag.
    ///
    /// Applies the strategy decision to the navigation state, acquires the
    /// settle lock when a snap animation plays, and returns the outcome.
    pub fn commit(&mut self, session: &GestureSession, now: Instant) -> CommitOutcome {
        let delta = session.delta();

        if outward_at_edge(self.nav.index, self.count, delta) {
            self.nav.direction = Direction::Stay;
            self.phase = EnginePhase::Idle;
            debug!(
                target: targets::ENGINE,
                index = self.nav.index,
                delta,
                "boundary no-op"
            );
            return CommitOutcome::BoundaryNoop;
        }

        match self.strategy.commit(&self.context(session)) {
            CommitDecision::Stay { snap } => {
                self.nav.direction = Direction::Stay;
                if snap.is_some() {
                    self.lock.acquire(now);
                    self.phase = EnginePhase::Committing;
                } else {
                    self.phase = EnginePhase::Idle;
                }
                debug!(target: targets::ENGINE, index = self.nav.index, delta, "stayed");
                CommitOutcome::Stayed { snap }
            }
            CommitDecision::Move {
                to,
                direction,
                snap,
            } => {
                let from = self.nav.index;
                self.apply_move(to, direction, snap, now);
                debug!(target: targets::ENGINE, from, to, ?direction, "committed");
                CommitOutcome::Moved {
                    from,
                    to,
                    direction,
                    snap,
                }
            }
        }
    }

    /// Programmatic navigation to `to`, outside any gesture.
    ///
    /// Unlike a gesture commit this may cross several pages at once. Fails
    /// while the settle lock is held or when `to` is out of range; a jump
    /// to the current index is a stay with nothing to settle.
    pub fn jump(&mut self, to: usize, now: Instant) -> Result<CommitOutcome, StateError> {
        if self.lock.is_held(now) {
            return Err(StateError::TransitionInFlight);
        }
        if to >= self.count {
            return Err(StateError::IndexOutOfRange {
                index: to,
                count: self.count,
            });
        }

        let from = self.nav.index;
        if to == from {
            return Ok(CommitOutcome::Stayed { snap: None });
        }

        let direction = if to > from {
            Direction::Forward
        } else {
            Direction::Backward
        };
        let snap = self.strategy.snap_between(from, to, self.extent);
        self.apply_move(to, direction, snap, now);
        debug!(target: targets::ENGINE, from, to, ?direction, "jumped");
        Ok(CommitOutcome::Moved {
            from,
            to,
            direction,
            snap,
        })
    }

    /// Clears the drag phase without committing (cancelled gesture).
    pub fn cancel_drag(&mut self) {
        if self.phase == EnginePhase::Dragging {
            self.phase = EnginePhase::Idle;
        }
    }

    fn apply_move(&mut self, to: usize, direction: Direction, snap: SnapAnimation, now: Instant) {
        self.nav.index = to;
        self.nav.direction = direction;
        if let SnapAnimation::SlideTo { offset } = snap {
            self.resting = offset;
        }
        self.lock.acquire(now);
        self.phase = EnginePhase::Committing;
    }

    fn context(&self, session: &GestureSession) -> DragContext {
        DragContext {
            index: self.nav.index,
            count: self.count,
            extent: self.extent,
            base_offset: session.base_offset(),
            delta: session.delta(),
            drag_follow: self.drag_follow,
            threshold: self.threshold,
        }
    }
}
