//! A touch-gesture page-transition controller for full-screen paged
//! interfaces.
//!
//! Given an ordered stack of full-viewport pages, Pageturn interprets
//! touch-drag gestures and decides which page becomes current, what the
//! surface shows while the finger is down, and which settle animation plays
//! at release. Rendering stays with the embedding host: the controller
//! hands out [`DragFrame`]s, [`SnapAnimation`]s, and entrance-animation
//! playback commands, and the host applies them with its own drawing and
//! animation machinery.
//!
//! # Architecture
//!
//! - [`controller`]: the [`PageController`] input surface, lifecycle, and
//!   signals
//! - [`engine`]: the transition state machine, with the slide/cover
//!   behavior split into [`TransitionStrategy`] implementations
//! - [`gesture`]: per-session touch tracking along the configured axis
//! - [`boundary`]: edge clamping at the first and last page
//! - [`animation`]: timing functions and entrance-animation dispatch
//! - [`overlay`]: indicator, arrow, and loading-gate presentation models
//! - [`touch`] (feature `winit`): conversion from winit touch events
//!
//! # Example
//!
//! ```
//! use pageturn::{
//!     Axis, EndReaction, PageController, PageDescriptor, PagerConfig, Point, Viewport,
//! };
//!
//! let config = PagerConfig::new().with_axis(Axis::Vertical);
//! let pages = vec![PageDescriptor::new(); 3];
//! let mut controller = PageController::new(config, Viewport::new(375.0, 667.0), pages)?;
//! controller.loaded();
//!
//! // An 80 px upward drag turns to the next page
//! controller.touch_start(Point::new(187.0, 500.0));
//! controller.touch_move(Point::new(187.0, 450.0));
//! let reaction = controller.touch_end(Point::new(187.0, 420.0))?;
//!
//! assert!(matches!(reaction, EndReaction::Commit(_)));
//! assert_eq!(controller.current_index(), 1);
//! # Ok::<(), pageturn::PagerError>(())
//! ```

pub mod animation;
pub mod boundary;
pub mod config;
pub mod controller;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod overlay;
pub mod page;
#[cfg(feature = "winit")]
pub mod touch;

pub use animation::{EntranceEffect, EntrancePlayback, EntranceSpec, TimingFunction};
pub use config::{
    DEFAULT_SETTLE_DELAY_MS, DEFAULT_SWIPE_THRESHOLD, PagerConfig, TransitionStyle,
};
pub use controller::{
    EndReaction, MoveReaction, PageChange, PageController, StartReaction,
};
pub use engine::{
    CommitOutcome, Direction, DragFrame, EnginePhase, SnapAnimation, TransitionEngine,
    TransitionStrategy,
};
pub use error::{ConfigurationError, PagerError, Result, StateError};
pub use geometry::{Axis, Orientation, Point, Viewport};
pub use gesture::{GestureStage, GestureTracker};
pub use page::{PageDescriptor, PageId};

// Re-export the signal types hosts connect with
pub use pageturn_core::{ConnectionGuard, ConnectionId, Signal};
