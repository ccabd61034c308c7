//! Edge clamping for drags at the first and last page.
//!
//! A non-negative delta pulls toward the previous page, a negative delta
//! toward the next one. The policy is a pure function of the index, the
//! page count, and the delta sign — the axis never changes the decision,
//! and the same gate applies to both transition styles, to the live drag,
//! and to the commit step.

/// Returns `true` when a gesture with the given travel points outward from
/// the first or last page.
///
/// Outward gestures must not produce a live drag frame, and their commit
/// resolves to a boundary no-op instead of leaving the page range. A zero
/// delta counts as outward at both edges.
pub fn outward_at_edge(index: usize, count: usize, delta: f32) -> bool {
    (delta >= 0.0 && index == 0) || (delta <= 0.0 && index + 1 == count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backward_at_first_page_is_outward() {
        assert!(outward_at_edge(0, 3, 80.0));
        assert!(outward_at_edge(0, 3, 1.0));
    }

    #[test]
    fn test_forward_at_last_page_is_outward() {
        assert!(outward_at_edge(2, 3, -80.0));
        assert!(outward_at_edge(2, 3, -1.0));
    }

    #[test]
    fn test_inward_gestures_pass() {
        assert!(!outward_at_edge(0, 3, -80.0));
        assert!(!outward_at_edge(2, 3, 80.0));
        assert!(!outward_at_edge(1, 3, 80.0));
        assert!(!outward_at_edge(1, 3, -80.0));
    }

    #[test]
    fn test_zero_delta_outward_at_both_edges() {
        assert!(outward_at_edge(0, 3, 0.0));
        assert!(outward_at_edge(2, 3, 0.0));
        assert!(!outward_at_edge(1, 3, 0.0));
    }

    #[test]
    fn test_single_page_always_outward() {
        assert!(outward_at_edge(0, 1, 80.0));
        assert!(outward_at_edge(0, 1, -80.0));
        assert!(outward_at_edge(0, 1, 0.0));
    }
}
