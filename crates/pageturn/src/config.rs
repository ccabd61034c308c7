//! Controller configuration.
//!
//! A [`PagerConfig`] is resolved once and stays fixed for the lifetime of
//! the controller it is bound to. Callbacks are not part of the
//! configuration: the controller exposes signals the host connects to
//! explicitly.

use std::str::FromStr;
use std::time::Duration;

use crate::error::ConfigurationError;
use crate::geometry::Axis;

/// Default commit threshold in host pixels.
///
/// A finished drag whose travel along the axis is at or below this distance
/// settles back on the current page instead of turning it.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

/// Default settle delay in milliseconds.
///
/// After a commit, new gestures are rejected until this interval elapses.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 300;

/// How a committed transition moves pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionStyle {
    /// The whole stack slides; pages sit side by side along the axis.
    #[default]
    Slide,
    /// The adjacent page slides in above the current one like a sheet.
    Cover,
}

impl FromStr for TransitionStyle {
    type Err = ConfigurationError;

    /// Parses the declared style value, `"default"` (sliding) or `"cover"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Slide),
            "cover" => Ok(Self::Cover),
            other => Err(ConfigurationError::UnknownStyle(other.to_string())),
        }
    }
}

/// Immutable configuration for one page controller.
///
/// Built with the builder pattern: vertical axis, sliding style, and
/// drag-follow on by default, with the overlays and pre-loading opt-in.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use pageturn::{Axis, PagerConfig, TransitionStyle};
///
/// let config = PagerConfig::new()
///     .with_axis(Axis::Horizontal)
///     .with_style(TransitionStyle::Cover)
///     .with_indicator(true)
///     .with_settle_delay(Duration::from_millis(250));
///
/// assert_eq!(config.axis(), Axis::Horizontal);
/// assert!(config.drag_follow());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PagerConfig {
    axis: Axis,
    style: TransitionStyle,
    drag_follow: bool,
    preload: bool,
    indicator: bool,
    arrows: bool,
    swipe_threshold: f32,
    settle_delay: Duration,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            style: TransitionStyle::Slide,
            drag_follow: true,
            preload: false,
            indicator: false,
            arrows: false,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
        }
    }
}

impl PagerConfig {
    /// Creates a configuration with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scroll axis.
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Set the transition style.
    pub fn with_style(mut self, style: TransitionStyle) -> Self {
        self.style = style;
        self
    }

    /// Set whether the surface follows the finger during a drag.
    pub fn with_drag_follow(mut self, drag_follow: bool) -> Self {
        self.drag_follow = drag_follow;
        self
    }

    /// Set whether gesture input waits for the host to report readiness.
    pub fn with_preload(mut self, preload: bool) -> Self {
        self.preload = preload;
        self
    }

    /// Set whether the page-dot indicator model is maintained.
    pub fn with_indicator(mut self, indicator: bool) -> Self {
        self.indicator = indicator;
        self
    }

    /// Set whether next-page arrows are shown.
    pub fn with_arrows(mut self, arrows: bool) -> Self {
        self.arrows = arrows;
        self
    }

    /// Set the commit threshold in host pixels.
    pub fn with_swipe_threshold(mut self, threshold: f32) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    /// Set the settle delay after a commit.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// The scroll axis.
    #[inline]
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The transition style.
    #[inline]
    pub fn style(&self) -> TransitionStyle {
        self.style
    }

    /// Whether the surface follows the finger during a drag.
    #[inline]
    pub fn drag_follow(&self) -> bool {
        self.drag_follow
    }

    /// Whether gesture input waits for the host to report readiness.
    #[inline]
    pub fn preload(&self) -> bool {
        self.preload
    }

    /// Whether the page-dot indicator model is maintained.
    #[inline]
    pub fn indicator(&self) -> bool {
        self.indicator
    }

    /// Whether next-page arrows are shown.
    #[inline]
    pub fn arrows(&self) -> bool {
        self.arrows
    }

    /// The commit threshold in host pixels.
    #[inline]
    pub fn swipe_threshold(&self) -> f32 {
        self.swipe_threshold
    }

    /// The settle delay after a commit.
    #[inline]
    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PagerConfig::default();
        assert_eq!(config.axis(), Axis::Vertical);
        assert_eq!(config.style(), TransitionStyle::Slide);
        assert!(config.drag_follow());
        assert!(!config.preload());
        assert!(!config.indicator());
        assert!(!config.arrows());
        assert_eq!(config.swipe_threshold(), 50.0);
        assert_eq!(config.settle_delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_builder_pattern() {
        let config = PagerConfig::new()
            .with_axis(Axis::Horizontal)
            .with_style(TransitionStyle::Cover)
            .with_drag_follow(false)
            .with_preload(true)
            .with_indicator(true)
            .with_arrows(true)
            .with_swipe_threshold(80.0)
            .with_settle_delay(Duration::from_millis(100));

        assert_eq!(config.axis(), Axis::Horizontal);
        assert_eq!(config.style(), TransitionStyle::Cover);
        assert!(!config.drag_follow());
        assert!(config.preload());
        assert!(config.indicator());
        assert!(config.arrows());
        assert_eq!(config.swipe_threshold(), 80.0);
        assert_eq!(config.settle_delay(), Duration::from_millis(100));
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!("default".parse::<TransitionStyle>().unwrap(), TransitionStyle::Slide);
        assert_eq!("cover".parse::<TransitionStyle>().unwrap(), TransitionStyle::Cover);
        assert!(matches!(
            "flip".parse::<TransitionStyle>(),
            Err(ConfigurationError::UnknownStyle(_))
        ));
    }
}
