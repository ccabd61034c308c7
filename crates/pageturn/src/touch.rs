//! Conversion from winit touch events to controller input.
//!
//! Enabled with the `winit` feature. The bridge tracks the finger that
//! opened the current gesture and routes its events to the controller;
//! additional simultaneous fingers are ignored, since multi-touch gestures
//! are out of scope for a page turner.
//!
//! # Usage
//!
//! ```ignore
//! use pageturn::touch::TouchBridge;
//!
//! let mut bridge = TouchBridge::new();
//!
//! // When receiving a winit touch event:
//! if let Some(reaction) = bridge.feed(&mut controller, &touch)? {
//!     // Apply frames / snap animations from the reaction
//! }
//! ```

use winit::event::{Touch, TouchPhase};

use crate::controller::{EndReaction, MoveReaction, PageController, StartReaction};
use crate::error::Result;
use crate::geometry::Point;

/// Reaction from feeding one platform touch event to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BridgeReaction {
    /// A touch-start was forwarded.
    Start(StartReaction),
    /// A touch-move was forwarded.
    Move(MoveReaction),
    /// A touch-end was forwarded.
    End(EndReaction),
    /// The platform cancelled the touch; the session was abandoned.
    Cancelled,
}

/// Routes winit touch events into a [`PageController`].
#[derive(Debug, Default)]
pub struct TouchBridge {
    /// ID of the finger driving the current session.
    active: Option<u64>,
}

impl TouchBridge {
    /// Creates a bridge with no active finger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a winit touch event.
    ///
    /// Returns `None` when the event belongs to a finger the bridge is not
    /// tracking.
    pub fn feed(
        &mut self,
        controller: &mut PageController,
        touch: &Touch,
    ) -> Result<Option<BridgeReaction>> {
        let point = Point::new(touch.location.x as f32, touch.location.y as f32);
        self.feed_raw(controller, touch.id, touch.phase, point)
    }

    /// Feeds an already-converted touch event.
    pub fn feed_raw(
        &mut self,
        controller: &mut PageController,
        id: u64,
        phase: TouchPhase,
        point: Point,
    ) -> Result<Option<BridgeReaction>> {
        match phase {
            TouchPhase::Started => {
                if self.active.is_some() {
                    return Ok(None);
                }
                let reaction = controller.touch_start(point);
                if reaction == StartReaction::Pressed {
                    self.active = Some(id);
                }
                Ok(Some(BridgeReaction::Start(reaction)))
            }
            TouchPhase::Moved => {
                if self.active != Some(id) {
                    return Ok(None);
                }
                Ok(Some(BridgeReaction::Move(controller.touch_move(point))))
            }
            TouchPhase::Ended => {
                if self.active.take_if(|active| *active == id).is_none() {
                    return Ok(None);
                }
                let reaction = controller.touch_end(point)?;
                Ok(Some(BridgeReaction::End(reaction)))
            }
            TouchPhase::Cancelled => {
                if self.active.take_if(|active| *active == id).is_none() {
                    return Ok(None);
                }
                controller.touch_cancel();
                Ok(Some(BridgeReaction::Cancelled))
            }
        }
    }
}
