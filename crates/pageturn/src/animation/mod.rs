//! Animation support for page transitions.
//!
//! This module covers the declarative side of the controller's animations:
//!
//! - [`timing`]: stylesheet-style timing functions with a cubic-bezier
//!   evaluator
//! - [`entrance`]: per-page entrance animation declarations and their
//!   resolution into one-shot playback commands

pub mod entrance;
pub mod timing;

pub use entrance::{
    EntranceEffect, EntrancePlayback, EntranceSpec, ResolvedEffect, ResolvedEntrance,
};
pub use timing::TimingFunction;
