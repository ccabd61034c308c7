//! Error types for the page-transition controller.
//!
//! All conditions here are local and recoverable; none terminate the host.
//! A gesture pushing outward at the first or last page is deliberately *not*
//! an error: it surfaces as [`CommitOutcome::BoundaryNoop`] so tests can
//! tell an edge rejection from a real commit.
//!
//! [`CommitOutcome::BoundaryNoop`]: crate::engine::CommitOutcome::BoundaryNoop

/// Result type alias for controller operations.
pub type Result<T> = std::result::Result<T, PagerError>;

/// The main error type for controller operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PagerError {
    /// The supplied configuration or declared markup value is invalid.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// An operation arrived in a state that cannot honor it.
    #[error(transparent)]
    State(#[from] StateError),
}

/// Errors raised when resolving the immutable configuration.
///
/// Unsupported values never fall through silently: they surface here at
/// construction and at the string-parsing seams.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// A page stack needs at least one page.
    #[error("a page stack needs at least one page")]
    NoPages,
    /// The viewport has no extent along the scroll axis.
    #[error("viewport extent along the scroll axis must be positive, got {extent}")]
    EmptyViewport {
        /// The offending extent value.
        extent: f32,
    },
    /// Unsupported axis value in declared markup.
    #[error("unknown axis '{0}', expected 'horizontal' or 'vertical'")]
    UnknownAxis(String),
    /// Unsupported transition style value in declared markup.
    #[error("unknown transition style '{0}', expected 'default' or 'cover'")]
    UnknownStyle(String),
    /// Unsupported timing-function value in declared markup.
    #[error("unknown timing function '{0}'")]
    UnknownTimingFunction(String),
}

/// Errors raised when an operation conflicts with the controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// Navigation was attempted while a prior commit is still settling.
    #[error("a page transition is still settling")]
    TransitionInFlight,
    /// A touch-end arrived without a matching touch-start.
    #[error("touch ended without a matching touch start")]
    UnmatchedTouchEnd,
    /// A programmatic navigation target is outside the page range.
    #[error("page index {index} is out of range for {count} pages")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of pages in the stack.
        count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion() {
        let err: PagerError = ConfigurationError::NoPages.into();
        assert!(matches!(err, PagerError::Configuration(_)));

        let err: PagerError = StateError::TransitionInFlight.into();
        assert!(matches!(err, PagerError::State(_)));
    }

    #[test]
    fn test_display_messages() {
        let err = ConfigurationError::UnknownStyle("fade".to_string());
        assert_eq!(
            err.to_string(),
            "unknown transition style 'fade', expected 'default' or 'cover'"
        );

        let err = StateError::IndexOutOfRange { index: 5, count: 3 };
        assert_eq!(err.to_string(), "page index 5 is out of range for 3 pages");
    }
}
