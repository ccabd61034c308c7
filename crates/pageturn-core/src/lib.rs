//! Core systems for Pageturn.
//!
//! This crate provides the foundational components of the Pageturn
//! page-transition controller:
//!
//! - **Signal/Slot System**: Type-safe callback registration for controller
//!   notifications
//! - **Logging Integration**: `tracing` target names for filtering Pageturn
//!   diagnostics
//!
//! # Signal/Slot Example
//!
//! ```
//! use pageturn_core::Signal;
//!
//! // Create a signal that notifies when a page index changes
//! let index_changed = Signal::<usize>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = index_changed.connect(|index| {
//!     println!("Now showing page {index}");
//! });
//!
//! // Emit the signal
//! index_changed.emit(2);
//!
//! // Disconnect when done
//! index_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
