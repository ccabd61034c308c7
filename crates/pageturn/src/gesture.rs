//! Gesture session tracking.
//!
//! The tracker records coordinates along the configured axis and classifies
//! the stage of the press/move/release sequence. One session exists at a
//! time, from touch-start to the matching touch-end; it carries the start
//! and latest coordinates plus the base offset captured when the finger
//! went down.
//!
//! The tracker itself is deliberately unaware of locks and page bounds:
//! the controller gates input before feeding it here.

use tracing::trace;

use pageturn_core::logging::targets;

use crate::geometry::{Axis, Point};

/// Stage of the current gesture session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureStage {
    /// No touch has been seen since the last reset.
    #[default]
    Idle,
    /// A finger is down but has not moved yet.
    Pressed,
    /// The finger has moved at least once.
    Dragging,
    /// The last gesture finished; ready for the next session.
    Released,
}

/// Transient per-gesture state, alive from touch-start to touch-end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSession {
    start: f32,
    latest: f32,
    base_offset: f32,
}

impl GestureSession {
    /// Coordinate along the axis where the finger went down.
    pub fn start(&self) -> f32 {
        self.start
    }

    /// Most recent coordinate along the axis.
    pub fn latest(&self) -> f32 {
        self.latest
    }

    /// Visual offset captured when the session opened, used as the drag base.
    pub fn base_offset(&self) -> f32 {
        self.base_offset
    }

    /// Travel along the axis since the session opened.
    pub fn delta(&self) -> f32 {
        self.latest - self.start
    }
}

/// Tracks one gesture at a time along a fixed axis.
#[derive(Debug)]
pub struct GestureTracker {
    axis: Axis,
    stage: GestureStage,
    session: Option<GestureSession>,
}

impl GestureTracker {
    /// Creates a tracker for the configured axis.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            stage: GestureStage::Idle,
            session: None,
        }
    }

    /// The current stage.
    pub fn stage(&self) -> GestureStage {
        self.stage
    }

    /// The active session, if a finger is down.
    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    /// Opens a new session at `point`, capturing `base_offset` as the drag
    /// base. An unfinished previous session is discarded.
    pub fn begin(&mut self, point: Point, base_offset: f32) {
        let coordinate = self.axis.coordinate(point);
        self.session = Some(GestureSession {
            start: coordinate,
            latest: coordinate,
            base_offset,
        });
        self.stage = GestureStage::Pressed;
        trace!(target: targets::GESTURE, start = coordinate, "session opened");
    }

    /// Records a movement and returns the updated session.
    ///
    /// Returns `None` when no session is active; otherwise the stage becomes
    /// [`GestureStage::Dragging`].
    pub fn update(&mut self, point: Point) -> Option<GestureSession> {
        if !matches!(self.stage, GestureStage::Pressed | GestureStage::Dragging) {
            return None;
        }
        let session = self.session.as_mut()?;
        session.latest = self.axis.coordinate(point);
        self.stage = GestureStage::Dragging;
        Some(*session)
    }

    /// Finalizes the latest coordinate and closes the session.
    ///
    /// Returns the completed session; the stage becomes
    /// [`GestureStage::Released`].
    pub fn finish(&mut self, point: Point) -> Option<GestureSession> {
        let mut session = self.session.take()?;
        session.latest = self.axis.coordinate(point);
        self.stage = GestureStage::Released;
        trace!(target: targets::GESTURE, delta = session.delta(), "session closed");
        Some(session)
    }

    /// Abandons the session without completing it.
    pub fn cancel(&mut self) {
        self.session = None;
        self.stage = GestureStage::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_stage_is_idle() {
        let tracker = GestureTracker::new(Axis::Vertical);
        assert_eq!(tracker.stage(), GestureStage::Idle);
        assert!(tracker.session().is_none());
    }

    #[test]
    fn test_press_move_release_sequence() {
        let mut tracker = GestureTracker::new(Axis::Vertical);

        tracker.begin(Point::new(0.0, 500.0), -667.0);
        assert_eq!(tracker.stage(), GestureStage::Pressed);
        assert_eq!(tracker.session().unwrap().base_offset(), -667.0);

        let session = tracker.update(Point::new(0.0, 460.0)).unwrap();
        assert_eq!(tracker.stage(), GestureStage::Dragging);
        assert_eq!(session.delta(), -40.0);

        let session = tracker.finish(Point::new(0.0, 420.0)).unwrap();
        assert_eq!(tracker.stage(), GestureStage::Released);
        assert_eq!(session.delta(), -80.0);
        assert!(tracker.session().is_none());
    }

    #[test]
    fn test_tracks_configured_axis_only() {
        let mut tracker = GestureTracker::new(Axis::Horizontal);

        tracker.begin(Point::new(100.0, 0.0), 0.0);
        // Vertical movement is invisible on a horizontal axis
        let session = tracker.update(Point::new(100.0, 300.0)).unwrap();
        assert_eq!(session.delta(), 0.0);

        let session = tracker.update(Point::new(40.0, 300.0)).unwrap();
        assert_eq!(session.delta(), -60.0);
    }

    #[test]
    fn test_update_without_session_is_noop() {
        let mut tracker = GestureTracker::new(Axis::Vertical);
        assert!(tracker.update(Point::new(0.0, 100.0)).is_none());
        assert_eq!(tracker.stage(), GestureStage::Idle);
    }

    #[test]
    fn test_finish_without_session_is_noop() {
        let mut tracker = GestureTracker::new(Axis::Vertical);
        assert!(tracker.finish(Point::new(0.0, 100.0)).is_none());
    }

    #[test]
    fn test_update_after_release_is_noop() {
        let mut tracker = GestureTracker::new(Axis::Vertical);
        tracker.begin(Point::new(0.0, 500.0), 0.0);
        tracker.update(Point::new(0.0, 400.0));
        tracker.finish(Point::new(0.0, 400.0));

        assert!(tracker.update(Point::new(0.0, 300.0)).is_none());
        assert_eq!(tracker.stage(), GestureStage::Released);
    }

    #[test]
    fn test_cancel_discards_session() {
        let mut tracker = GestureTracker::new(Axis::Vertical);
        tracker.begin(Point::new(0.0, 500.0), 0.0);
        tracker.cancel();

        assert_eq!(tracker.stage(), GestureStage::Idle);
        assert!(tracker.session().is_none());
    }

    #[test]
    fn test_begin_discards_previous_session() {
        let mut tracker = GestureTracker::new(Axis::Vertical);
        tracker.begin(Point::new(0.0, 500.0), 0.0);
        tracker.update(Point::new(0.0, 400.0));

        tracker.begin(Point::new(0.0, 200.0), 0.0);
        assert_eq!(tracker.stage(), GestureStage::Pressed);
        assert_eq!(tracker.session().unwrap().start(), 200.0);
        assert_eq!(tracker.session().unwrap().delta(), 0.0);
    }
}
