//! Indicator, arrow, and loading-gate presentation models.
//!
//! These are the stateless scaffolding pieces around the gesture core: the
//! host renders them, the controller only keeps the highlight and gating
//! state current.

use crate::geometry::Axis;

/// Page-dot indicator model.
///
/// One dot per page, with the dot of the current page highlighted. The axis
/// is carried so the host can lay the dots out along the matching edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    axis: Axis,
    count: usize,
    highlighted: usize,
}

impl Indicator {
    /// Creates an indicator with the first dot highlighted.
    pub(crate) fn new(axis: Axis, count: usize) -> Self {
        Self {
            axis,
            count,
            highlighted: 0,
        }
    }

    /// The scroll axis the indicator follows.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The number of dots.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The index of the highlighted dot.
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// Moves the highlight; returns `true` if it changed.
    pub(crate) fn set_highlighted(&mut self, index: usize) -> bool {
        if self.highlighted == index {
            return false;
        }
        self.highlighted = index;
        true
    }
}

/// Whether page `index` shows a next-page arrow.
///
/// Every page except the last carries one.
pub fn arrow_visible(index: usize, count: usize) -> bool {
    index + 1 != count
}

/// Pre-loading input gate.
///
/// When pre-loading is configured, gesture input is blocked until the host
/// reports readiness; without pre-loading the gate starts open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingGate {
    engaged: bool,
}

impl LoadingGate {
    pub(crate) fn new(preload: bool) -> Self {
        Self { engaged: preload }
    }

    /// Whether the gate currently blocks gesture input.
    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub(crate) fn release(&mut self) {
        self.engaged = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_starts_on_first_dot() {
        let indicator = Indicator::new(Axis::Vertical, 3);
        assert_eq!(indicator.count(), 3);
        assert_eq!(indicator.highlighted(), 0);
    }

    #[test]
    fn test_indicator_highlight_change_detection() {
        let mut indicator = Indicator::new(Axis::Horizontal, 3);
        assert!(indicator.set_highlighted(2));
        assert_eq!(indicator.highlighted(), 2);
        assert!(!indicator.set_highlighted(2));
    }

    #[test]
    fn test_arrow_on_every_page_but_last() {
        assert!(arrow_visible(0, 3));
        assert!(arrow_visible(1, 3));
        assert!(!arrow_visible(2, 3));
        assert!(!arrow_visible(0, 1));
    }

    #[test]
    fn test_loading_gate() {
        let mut gate = LoadingGate::new(true);
        assert!(gate.is_engaged());
        gate.release();
        assert!(!gate.is_engaged());

        let gate = LoadingGate::new(false);
        assert!(!gate.is_engaged());
    }
}
