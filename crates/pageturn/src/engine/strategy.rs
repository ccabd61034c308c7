//! Style-specific transition behavior.
//!
//! The two transition styles share the same gesture flow but differ in what
//! they move: sliding translates the whole stack, covering raises the
//! adjacent page above the current one like a sheet. Both are modeled as a
//! [`TransitionStrategy`], selected once at configuration time.
//!
//! Strategies are only consulted for gestures the boundary policy already
//! allowed; they may assume the adjacent page in the gesture's direction
//! exists.

use std::fmt;

use crate::engine::Direction;

/// Inputs for one strategy decision, captured from the gesture session and
/// the navigation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragContext {
    /// Current page index.
    pub index: usize,
    /// Total number of pages.
    pub count: usize,
    /// Page extent along the scroll axis.
    pub extent: f32,
    /// Resting offset captured at touch-start.
    pub base_offset: f32,
    /// Latest coordinate minus start coordinate.
    pub delta: f32,
    /// Whether the surface follows the finger during the drag.
    pub drag_follow: bool,
    /// Commit threshold in host pixels.
    pub threshold: f32,
}

/// Live visual instruction emitted while a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragFrame {
    /// Translate the whole stack to `offset` along the configured axis,
    /// with no orthogonal movement.
    Slide {
        /// Target stack translation.
        offset: f32,
    },
    /// Reset every page to the base z-order, then raise page `raised` above
    /// the current one and translate it to `offset` along the axis.
    Cover {
        /// Index of the page being revealed.
        raised: usize,
        /// Translation of the raised page.
        offset: f32,
    },
}

/// Settle animation the host plays after a commit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SnapAnimation {
    /// Animate the stack translation to `offset` along the axis.
    SlideTo {
        /// Resting stack translation of the destination page.
        offset: f32,
    },
    /// Park the partially revealed page back past the edge it came from,
    /// without changing the current page.
    CoverPark {
        /// Index of the page being parked.
        page: usize,
        /// Off-screen resting translation (±extent).
        offset: f32,
    },
    /// Drag-follow cover commit: the entering page animates to the resting
    /// position; the leaving page is hidden behind it when the animation ends.
    CoverSlideIn {
        /// Index of the page becoming current.
        entering: usize,
        /// Index of the page being covered or uncovered.
        leaving: usize,
    },
    /// Cover commit without drag-follow: the host plays its one-shot cover
    /// animation pairing for the entering page over the leaving one.
    CoverAnimate {
        /// Index of the page becoming current.
        entering: usize,
        /// Index of the page being covered or uncovered.
        leaving: usize,
    },
}

/// What a strategy decided for a finished gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommitDecision {
    /// Keep the current page; `snap` settles the surface if anything moved.
    Stay {
        /// Settle animation, absent when nothing moved on screen.
        snap: Option<SnapAnimation>,
    },
    /// Move to the adjacent page `to`.
    Move {
        /// Destination index.
        to: usize,
        /// Committed direction, never [`Direction::Stay`].
        direction: Direction,
        /// Settle animation for the destination.
        snap: SnapAnimation,
    },
}

/// Style-specific drag-following and commit behavior.
pub trait TransitionStrategy: fmt::Debug + Send + Sync {
    /// Live frame while dragging. Called only when drag-follow is enabled
    /// and the boundary policy allowed the movement.
    fn live_frame(&self, ctx: &DragContext) -> DragFrame;

    /// Commit decision for a finished drag. Called only for non-boundary
    /// gestures.
    fn commit(&self, ctx: &DragContext) -> CommitDecision;

    /// Settle animation for a programmatic move from `from` to `to`.
    fn snap_between(&self, from: usize, to: usize, extent: f32) -> SnapAnimation;
}

/// Resting stack translation of page `index` (sliding style).
pub(crate) fn resting_offset(index: usize, extent: f32) -> f32 {
    -(index as f32) * extent
}

/// Sliding style: pages sit side by side and the whole stack follows the
/// finger.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlideStrategy;

impl TransitionStrategy for SlideStrategy {
    fn live_frame(&self, ctx: &DragContext) -> DragFrame {
        DragFrame::Slide {
            offset: ctx.base_offset + ctx.delta,
        }
    }

    fn commit(&self, ctx: &DragContext) -> CommitDecision {
        if ctx.delta.abs() <= ctx.threshold {
            CommitDecision::Stay {
                snap: Some(SnapAnimation::SlideTo {
                    offset: resting_offset(ctx.index, ctx.extent),
                }),
            }
        } else if ctx.delta >= 0.0 {
            let to = ctx.index - 1;
            CommitDecision::Move {
                to,
                direction: Direction::Backward,
                snap: SnapAnimation::SlideTo {
                    offset: resting_offset(to, ctx.extent),
                },
            }
        } else {
            let to = ctx.index + 1;
            CommitDecision::Move {
                to,
                direction: Direction::Forward,
                snap: SnapAnimation::SlideTo {
                    offset: resting_offset(to, ctx.extent),
                },
            }
        }
    }

    fn snap_between(&self, _from: usize, to: usize, extent: f32) -> SnapAnimation {
        SnapAnimation::SlideTo {
            offset: resting_offset(to, extent),
        }
    }
}

/// Covering style: the adjacent page slides in above the current one.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoverStrategy;

impl TransitionStrategy for CoverStrategy {
    fn live_frame(&self, ctx: &DragContext) -> DragFrame {
        if ctx.delta >= 0.0 {
            // Previous page peeks in from before the edge
            DragFrame::Cover {
                raised: ctx.index - 1,
                offset: ctx.delta - ctx.extent,
            }
        } else {
            // Next page peeks in from past the edge
            DragFrame::Cover {
                raised: ctx.index + 1,
                offset: ctx.extent + ctx.delta,
            }
        }
    }

    fn commit(&self, ctx: &DragContext) -> CommitDecision {
        if ctx.delta.abs() <= ctx.threshold {
            if !ctx.drag_follow {
                // Nothing moved on screen, nothing to settle
                return CommitDecision::Stay { snap: None };
            }
            let snap = if ctx.delta >= 0.0 {
                SnapAnimation::CoverPark {
                    page: ctx.index - 1,
                    offset: -ctx.extent,
                }
            } else {
                SnapAnimation::CoverPark {
                    page: ctx.index + 1,
                    offset: ctx.extent,
                }
            };
            return CommitDecision::Stay { snap: Some(snap) };
        }

        let (to, direction) = if ctx.delta >= 0.0 {
            (ctx.index - 1, Direction::Backward)
        } else {
            (ctx.index + 1, Direction::Forward)
        };
        let snap = if ctx.drag_follow {
            SnapAnimation::CoverSlideIn {
                entering: to,
                leaving: ctx.index,
            }
        } else {
            SnapAnimation::CoverAnimate {
                entering: to,
                leaving: ctx.index,
            }
        };
        CommitDecision::Move {
            to,
            direction,
            snap,
        }
    }

    fn snap_between(&self, from: usize, to: usize, _extent: f32) -> SnapAnimation {
        // No drag preceded a programmatic move, so the one-shot pairing applies
        SnapAnimation::CoverAnimate {
            entering: to,
            leaving: from,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(index: usize, delta: f32) -> DragContext {
        DragContext {
            index,
            count: 3,
            extent: 667.0,
            base_offset: resting_offset(index, 667.0),
            delta,
            drag_follow: true,
            threshold: 50.0,
        }
    }

    // =========================================================================
    // Sliding style
    // =========================================================================

    #[test]
    fn test_slide_live_frame_follows_finger() {
        let frame = SlideStrategy.live_frame(&ctx(1, -40.0));
        assert_eq!(frame, DragFrame::Slide { offset: -707.0 });
    }

    #[test]
    fn test_slide_commit_within_threshold_stays() {
        let decision = SlideStrategy.commit(&ctx(1, -50.0));
        assert_eq!(
            decision,
            CommitDecision::Stay {
                snap: Some(SnapAnimation::SlideTo { offset: -667.0 }),
            }
        );
    }

    #[test]
    fn test_slide_commit_forward() {
        let decision = SlideStrategy.commit(&ctx(1, -80.0));
        assert_eq!(
            decision,
            CommitDecision::Move {
                to: 2,
                direction: Direction::Forward,
                snap: SnapAnimation::SlideTo { offset: -1334.0 },
            }
        );
    }

    #[test]
    fn test_slide_commit_backward() {
        let decision = SlideStrategy.commit(&ctx(1, 80.0));
        assert_eq!(
            decision,
            CommitDecision::Move {
                to: 0,
                direction: Direction::Backward,
                snap: SnapAnimation::SlideTo { offset: 0.0 },
            }
        );
    }

    #[test]
    fn test_slide_snap_between() {
        assert_eq!(
            SlideStrategy.snap_between(0, 2, 667.0),
            SnapAnimation::SlideTo { offset: -1334.0 }
        );
    }

    // =========================================================================
    // Covering style
    // =========================================================================

    #[test]
    fn test_cover_live_frame_backward_raises_previous() {
        let frame = CoverStrategy.live_frame(&ctx(1, 30.0));
        assert_eq!(
            frame,
            DragFrame::Cover {
                raised: 0,
                offset: 30.0 - 667.0,
            }
        );
    }

    #[test]
    fn test_cover_live_frame_forward_raises_next() {
        let frame = CoverStrategy.live_frame(&ctx(1, -30.0));
        assert_eq!(
            frame,
            DragFrame::Cover {
                raised: 2,
                offset: 667.0 - 30.0,
            }
        );
    }

    #[test]
    fn test_cover_commit_within_threshold_parks_toward_edge() {
        // Pulled backward a little: the previous page parks before the edge
        let decision = CoverStrategy.commit(&ctx(1, 30.0));
        assert_eq!(
            decision,
            CommitDecision::Stay {
                snap: Some(SnapAnimation::CoverPark { page: 0, offset: -667.0 }),
            }
        );

        // Pulled forward a little: the next page parks past the edge
        let decision = CoverStrategy.commit(&ctx(1, -30.0));
        assert_eq!(
            decision,
            CommitDecision::Stay {
                snap: Some(SnapAnimation::CoverPark { page: 2, offset: 667.0 }),
            }
        );
    }

    #[test]
    fn test_cover_commit_without_drag_follow_small_delta_has_no_snap() {
        let mut context = ctx(1, 30.0);
        context.drag_follow = false;
        assert_eq!(
            CoverStrategy.commit(&context),
            CommitDecision::Stay { snap: None }
        );
    }

    #[test]
    fn test_cover_commit_forward_slides_in() {
        let decision = CoverStrategy.commit(&ctx(1, -80.0));
        assert_eq!(
            decision,
            CommitDecision::Move {
                to: 2,
                direction: Direction::Forward,
                snap: SnapAnimation::CoverSlideIn { entering: 2, leaving: 1 },
            }
        );
    }

    #[test]
    fn test_cover_commit_without_drag_follow_uses_animation_pairing() {
        let mut context = ctx(1, 80.0);
        context.drag_follow = false;
        assert_eq!(
            CoverStrategy.commit(&context),
            CommitDecision::Move {
                to: 0,
                direction: Direction::Backward,
                snap: SnapAnimation::CoverAnimate { entering: 0, leaving: 1 },
            }
        );
    }

    #[test]
    fn test_cover_snap_between() {
        assert_eq!(
            CoverStrategy.snap_between(1, 2, 667.0),
            SnapAnimation::CoverAnimate { entering: 2, leaving: 1 }
        );
    }
}
