//! Geometry primitives for the paged surface.
//!
//! The controller works in host pixel coordinates. The host reports the
//! viewport once at initialization; page extents are derived from it along
//! the configured [`Axis`].

use std::str::FromStr;

use crate::error::ConfigurationError;

/// A point on the touch surface, in host pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The scroll direction of the page stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Pages sit side by side; gestures move along x.
    Horizontal,
    /// Pages are stacked top to bottom; gestures move along y.
    #[default]
    Vertical,
}

impl Axis {
    /// Returns the coordinate of `point` along this axis.
    pub fn coordinate(self, point: Point) -> f32 {
        match self {
            Self::Horizontal => point.x,
            Self::Vertical => point.y,
        }
    }
}

impl FromStr for Axis {
    type Err = ConfigurationError;

    /// Parses the declared axis value, `"horizontal"` or `"vertical"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(ConfigurationError::UnknownAxis(other.to_string())),
        }
    }
}

/// Viewport dimensions reported by the host at initialization.
///
/// Pages are full-viewport surfaces, so the viewport extent along the scroll
/// axis is also the page extent used for drag and snap arithmetic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Width in host pixels.
    pub width: f32,
    /// Height in host pixels.
    pub height: f32,
}

impl Viewport {
    /// Creates a new viewport.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Page extent along the given scroll axis.
    pub fn extent(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Orientation implied by the viewport proportions.
    pub fn orientation(&self) -> Orientation {
        if self.width > self.height {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        }
    }
}

/// Device orientation reported through the rotation callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Height is the long edge.
    Portrait,
    /// Width is the long edge.
    Landscape,
}

impl Orientation {
    /// Maps a platform rotation angle in degrees to an orientation.
    ///
    /// 0 and 180 degrees are portrait; 90 and −90 are landscape. Other
    /// angles are not produced by device rotation and yield `None`.
    pub fn from_angle(angle: i32) -> Option<Self> {
        match angle {
            0 | 180 => Some(Self::Portrait),
            90 | -90 => Some(Self::Landscape),
            _ => None,
        }
    }
}
