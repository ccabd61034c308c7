//! Stylesheet-style timing functions.
//!
//! Entrance animations declare their pacing the way stylesheet timing
//! functions do: a named curve or an arbitrary cubic bezier. The named
//! curves carry their standard control points, and [`TimingFunction::evaluate`]
//! solves the curve so hosts driving animations themselves can sample it.

use std::str::FromStr;

use crate::error::ConfigurationError;

/// Pacing curve for a declared animation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TimingFunction {
    /// Constant pace.
    Linear,
    /// The standard `ease` curve, `cubic-bezier(0.25, 0.1, 0.25, 1)`.
    #[default]
    Ease,
    /// Starts slow, `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,
    /// Ends slow, `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,
    /// Slow at both ends, `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,
    /// Arbitrary curve with control points (x1, y1) and (x2, y2).
    CubicBezier(f32, f32, f32, f32),
}

impl TimingFunction {
    /// Control points of the curve, or `None` for the identity (linear) case.
    fn control_points(self) -> Option<(f32, f32, f32, f32)> {
        match self {
            Self::Linear => None,
            Self::Ease => Some((0.25, 0.1, 0.25, 1.0)),
            Self::EaseIn => Some((0.42, 0.0, 1.0, 1.0)),
            Self::EaseOut => Some((0.0, 0.0, 0.58, 1.0)),
            Self::EaseInOut => Some((0.42, 0.0, 0.58, 1.0)),
            Self::CubicBezier(x1, y1, x2, y2) => Some((x1, y1, x2, y2)),
        }
    }

    /// Evaluate the curve at progress `t`.
    ///
    /// # Arguments
    ///
    /// * `t` - Progress value from 0.0 to 1.0; values outside are clamped
    ///
    /// # Example
    ///
    /// ```
    /// use pageturn::animation::TimingFunction;
    ///
    /// // Linear: output equals input
    /// assert_eq!(TimingFunction::Linear.evaluate(0.5), 0.5);
    ///
    /// // Ease-in: slower at start
    /// assert!(TimingFunction::EaseIn.evaluate(0.5) < 0.5);
    /// ```
    pub fn evaluate(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self.control_points() {
            None => t,
            Some((x1, y1, x2, y2)) => {
                let s = solve_curve_x(x1, x2, t);
                sample_axis(y1, y2, s)
            }
        }
    }
}

impl FromStr for TimingFunction {
    type Err = ConfigurationError;

    /// Parses a declared timing-function value.
    ///
    /// Accepts the named curves (`linear`, `ease`, `ease-in`, `ease-out`,
    /// `ease-in-out`) and the `cubic-bezier(x1, y1, x2, y2)` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Self::Linear),
            "ease" => Ok(Self::Ease),
            "ease-in" => Ok(Self::EaseIn),
            "ease-out" => Ok(Self::EaseOut),
            "ease-in-out" => Ok(Self::EaseInOut),
            other => {
                parse_cubic_bezier(other)
                    .ok_or_else(|| ConfigurationError::UnknownTimingFunction(other.to_string()))
            }
        }
    }
}

fn parse_cubic_bezier(s: &str) -> Option<TimingFunction> {
    let body = s.strip_prefix("cubic-bezier(")?.strip_suffix(')')?;
    let mut values = body.split(',').map(|v| v.trim().parse::<f32>());

    let x1 = values.next()?.ok()?;
    let y1 = values.next()?.ok()?;
    let x2 = values.next()?.ok()?;
    let y2 = values.next()?.ok()?;
    if values.next().is_some() {
        return None;
    }

    Some(TimingFunction::CubicBezier(x1, y1, x2, y2))
}

// One coordinate of a cubic bezier with endpoints pinned at 0 and 1:
// B(s) = 3(1-s)^2 s p1 + 3(1-s) s^2 p2 + s^3
#[inline]
fn sample_axis(p1: f32, p2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

#[inline]
fn sample_axis_derivative(p1: f32, p2: f32, s: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * p1 + 6.0 * u * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
}

/// Finds the curve parameter whose x-coordinate equals `x`.
///
/// Newton-Raphson first, bisection as the fallback for flat derivatives.
fn solve_curve_x(x1: f32, x2: f32, x: f32) -> f32 {
    let mut s = x;
    for _ in 0..8 {
        let error = sample_axis(x1, x2, s) - x;
        if error.abs() < 1e-5 {
            return s;
        }
        let derivative = sample_axis_derivative(x1, x2, s);
        if derivative.abs() < 1e-6 {
            break;
        }
        s -= error / derivative;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    while hi - lo > 1e-5 {
        if sample_axis(x1, x2, s) < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: &[TimingFunction] = &[
        TimingFunction::Linear,
        TimingFunction::Ease,
        TimingFunction::EaseIn,
        TimingFunction::EaseOut,
        TimingFunction::EaseInOut,
        TimingFunction::CubicBezier(0.3, 0.2, 0.7, 0.9),
    ];

    #[test]
    fn test_endpoints() {
        for curve in CURVES {
            assert!(curve.evaluate(0.0).abs() < 1e-3, "{curve:?} at 0");
            assert!((curve.evaluate(1.0) - 1.0).abs() < 1e-3, "{curve:?} at 1");
        }
    }

    #[test]
    fn test_linear_midpoint() {
        assert_eq!(TimingFunction::Linear.evaluate(0.5), 0.5);
    }

    #[test]
    fn test_ease_in_slower_at_start() {
        assert!(TimingFunction::EaseIn.evaluate(0.25) < 0.25);
    }

    #[test]
    fn test_ease_out_faster_at_start() {
        assert!(TimingFunction::EaseOut.evaluate(0.25) > 0.25);
    }

    #[test]
    fn test_ease_in_out_symmetric_midpoint() {
        assert!((TimingFunction::EaseInOut.evaluate(0.5) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn test_monotonic() {
        for curve in CURVES {
            let mut prev = curve.evaluate(0.0);
            for step in 1..=20 {
                let value = curve.evaluate(step as f32 / 20.0);
                assert!(value >= prev - 1e-4, "{curve:?} not monotonic at {step}");
                prev = value;
            }
        }
    }

    #[test]
    fn test_clamp() {
        assert_eq!(TimingFunction::Linear.evaluate(-0.5), 0.0);
        assert_eq!(TimingFunction::Linear.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_parse_named() {
        assert_eq!("ease".parse::<TimingFunction>().unwrap(), TimingFunction::Ease);
        assert_eq!(
            "ease-in-out".parse::<TimingFunction>().unwrap(),
            TimingFunction::EaseInOut
        );
    }

    #[test]
    fn test_parse_cubic_bezier() {
        assert_eq!(
            "cubic-bezier(0.1, 0.2, 0.3, 0.4)".parse::<TimingFunction>().unwrap(),
            TimingFunction::CubicBezier(0.1, 0.2, 0.3, 0.4)
        );
    }

    #[test]
    fn test_parse_unknown_rejected() {
        assert!(matches!(
            "bounce".parse::<TimingFunction>(),
            Err(ConfigurationError::UnknownTimingFunction(_))
        ));
        assert!(matches!(
            "cubic-bezier(0.1, 0.2)".parse::<TimingFunction>(),
            Err(ConfigurationError::UnknownTimingFunction(_))
        ));
    }
}
