//! Logging integration for Pageturn.
//!
//! Pageturn uses the `tracing` crate for instrumentation. The crate never
//! installs a subscriber itself; to see logs, install one in the embedding
//! application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Commit decisions are logged at `debug`, per-move drag frames at `trace`.
//! Use the [`targets`] constants with `tracing` directives to filter by
//! subsystem, e.g. `RUST_LOG=pageturn::engine=debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "pageturn_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "pageturn_core::signal";
    /// Gesture tracking target.
    pub const GESTURE: &str = "pageturn::gesture";
    /// Transition engine target.
    pub const ENGINE: &str = "pageturn::engine";
    /// Controller lifecycle target.
    pub const CONTROLLER: &str = "pageturn::controller";
}
