//! Entrance animation declarations and dispatch.
//!
//! Pages declare entrance animations on their content — the analogue of
//! markup-declared attributes (animation name, duration, timing function,
//! delay). When a page becomes current, each declaration is resolved into a
//! [`ResolvedEntrance`] one-shot restart command the host replays through
//! its own animation system.
//!
//! The special [`EntranceEffect::FollowSlide`] effect has no fixed
//! direction: it resolves to one of four variants depending on the scroll
//! axis and the direction the page turn committed in.

use std::time::Duration;

use crate::engine::Direction;
use crate::geometry::Axis;
use crate::page::Page;
use crate::animation::timing::TimingFunction;

/// Default duration of a declared entrance animation, in milliseconds.
pub const DEFAULT_ENTRANCE_DURATION_MS: u64 = 500;

/// Default delay before a declared entrance animation starts, in milliseconds.
pub const DEFAULT_ENTRANCE_DELAY_MS: u64 = 0;

/// Declared animation effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntranceEffect {
    /// Direction-sensitive slide that follows the page turn.
    FollowSlide,
    /// Any other named keyframe animation, dispatched verbatim.
    Named(String),
}

impl EntranceEffect {
    /// Creates a named effect.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Interprets a declared animation name, recognizing `followSlide`.
    pub fn from_name(name: &str) -> Self {
        if name == "followSlide" {
            Self::FollowSlide
        } else {
            Self::Named(name.to_string())
        }
    }
}

/// One declared entrance animation on a page's content.
#[derive(Debug, Clone, PartialEq)]
pub struct EntranceSpec {
    effect: EntranceEffect,
    duration: Duration,
    timing: TimingFunction,
    delay: Duration,
}

impl EntranceSpec {
    /// Creates a declaration with the default duration (500 ms), timing
    /// function (`ease`), and delay (none).
    pub fn new(effect: EntranceEffect) -> Self {
        Self {
            effect,
            duration: Duration::from_millis(DEFAULT_ENTRANCE_DURATION_MS),
            timing: TimingFunction::Ease,
            delay: Duration::from_millis(DEFAULT_ENTRANCE_DELAY_MS),
        }
    }

    /// Set the animation duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the timing function.
    pub fn with_timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// Set the start delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// The declared effect.
    pub fn effect(&self) -> &EntranceEffect {
        &self.effect
    }

    /// The animation duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The timing function.
    pub fn timing(&self) -> TimingFunction {
        self.timing
    }

    /// The start delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Fully resolved effect, ready for playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedEffect {
    /// `followSlide` on a horizontal forward turn.
    FollowSlideToLeft,
    /// `followSlide` on a horizontal backward turn.
    FollowSlideToRight,
    /// `followSlide` on a vertical forward turn.
    FollowSlideToTop,
    /// `followSlide` on a vertical backward turn.
    FollowSlideToBottom,
    /// A named keyframe animation, unchanged.
    Named(String),
}

/// A one-shot restart command for the host's animation system.
///
/// The host resets any previous run of the animation and starts it again
/// with these parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntrance {
    /// The effect to play.
    pub effect: ResolvedEffect,
    /// Playback duration.
    pub duration: Duration,
    /// Pacing curve.
    pub timing: TimingFunction,
    /// Delay before playback starts.
    pub delay: Duration,
}

/// Playback batch for a page that just became current.
#[derive(Debug, Clone, PartialEq)]
pub struct EntrancePlayback {
    /// Index of the page the animations belong to.
    pub page_index: usize,
    /// Resolved restart commands, in declaration order.
    pub animations: Vec<ResolvedEntrance>,
}

/// Resolves one declaration against the committed turn.
///
/// `followSlide` resolves by (axis, direction); with direction
/// [`Direction::Stay`] it has no turn to follow and yields `None`.
pub fn resolve(spec: &EntranceSpec, axis: Axis, direction: Direction) -> Option<ResolvedEntrance> {
    let effect = match spec.effect() {
        EntranceEffect::Named(name) => ResolvedEffect::Named(name.clone()),
        EntranceEffect::FollowSlide => match (axis, direction) {
            (Axis::Horizontal, Direction::Forward) => ResolvedEffect::FollowSlideToLeft,
            (Axis::Horizontal, Direction::Backward) => ResolvedEffect::FollowSlideToRight,
            (Axis::Vertical, Direction::Forward) => ResolvedEffect::FollowSlideToTop,
            (Axis::Vertical, Direction::Backward) => ResolvedEffect::FollowSlideToBottom,
            (_, Direction::Stay) => return None,
        },
    };

    Some(ResolvedEntrance {
        effect,
        duration: spec.duration(),
        timing: spec.timing(),
        delay: spec.delay(),
    })
}

/// Resolves every declaration on `page` for a committed turn.
pub(crate) fn playback_for(
    page: &Page,
    page_index: usize,
    axis: Axis,
    direction: Direction,
) -> EntrancePlayback {
    EntrancePlayback {
        page_index,
        animations: page
            .entrances()
            .iter()
            .filter_map(|spec| resolve(spec, axis, direction))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let spec = EntranceSpec::new(EntranceEffect::named("fadeIn"));
        assert_eq!(spec.duration(), Duration::from_millis(500));
        assert_eq!(spec.timing(), TimingFunction::Ease);
        assert_eq!(spec.delay(), Duration::ZERO);
    }

    #[test]
    fn test_from_name_recognizes_follow_slide() {
        assert_eq!(EntranceEffect::from_name("followSlide"), EntranceEffect::FollowSlide);
        assert_eq!(
            EntranceEffect::from_name("slideUp"),
            EntranceEffect::Named("slideUp".to_string())
        );
    }

    #[test]
    fn test_named_effect_resolves_verbatim() {
        let spec = EntranceSpec::new(EntranceEffect::named("fadeIn"));
        let resolved = resolve(&spec, Axis::Vertical, Direction::Stay).unwrap();
        assert_eq!(resolved.effect, ResolvedEffect::Named("fadeIn".to_string()));
    }

    #[test]
    fn test_follow_slide_variants() {
        let spec = EntranceSpec::new(EntranceEffect::FollowSlide);

        let cases = [
            (Axis::Horizontal, Direction::Forward, ResolvedEffect::FollowSlideToLeft),
            (Axis::Horizontal, Direction::Backward, ResolvedEffect::FollowSlideToRight),
            (Axis::Vertical, Direction::Forward, ResolvedEffect::FollowSlideToTop),
            (Axis::Vertical, Direction::Backward, ResolvedEffect::FollowSlideToBottom),
        ];

        for (axis, direction, expected) in cases {
            let resolved = resolve(&spec, axis, direction).unwrap();
            assert_eq!(resolved.effect, expected, "{axis:?} {direction:?}");
        }
    }

    #[test]
    fn test_follow_slide_omitted_when_staying() {
        let spec = EntranceSpec::new(EntranceEffect::FollowSlide);
        assert!(resolve(&spec, Axis::Vertical, Direction::Stay).is_none());
        assert!(resolve(&spec, Axis::Horizontal, Direction::Stay).is_none());
    }

    #[test]
    fn test_parameters_carried_through() {
        let spec = EntranceSpec::new(EntranceEffect::named("zoom"))
            .with_duration(Duration::from_millis(800))
            .with_timing(TimingFunction::EaseOut)
            .with_delay(Duration::from_millis(120));

        let resolved = resolve(&spec, Axis::Vertical, Direction::Forward).unwrap();
        assert_eq!(resolved.duration, Duration::from_millis(800));
        assert_eq!(resolved.timing, TimingFunction::EaseOut);
        assert_eq!(resolved.delay, Duration::from_millis(120));
    }
}
