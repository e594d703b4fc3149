//! Capture-tracking cost statistics.
//!
//! Derived from the transition table alone, not from any run. They tell how
//! much of an automaton's work is capture bookkeeping rather than
//! classification.

use crate::transition::LazyCaptureGroupTransition;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransitionStats {
    pub lazy_transitions: usize,
    pub partial_transitions: usize,
    /// Partial transitions that permute the result order.
    pub reordering: usize,
    /// Array copies summed over all partial transitions.
    pub array_copies: usize,
}

impl TransitionStats {
    pub fn collect(transitions: &[LazyCaptureGroupTransition]) -> Self {
        let mut stats = Self {
            lazy_transitions: transitions.len(),
            ..Self::default()
        };
        for pt in transitions.iter().flat_map(|t| &t.partial_transitions) {
            stats.partial_transitions += 1;
            if pt.reorders_results() {
                stats.reordering += 1;
            }
            stats.array_copies += pt.array_copies.len();
        }
        stats
    }

    /// Fraction of partial transitions that reorder results.
    pub fn reorder_ratio(&self) -> f64 {
        ratio(self.reordering, self.partial_transitions)
    }

    /// Average number of array copies per partial transition.
    pub fn array_copy_ratio(&self) -> f64 {
        ratio(self.array_copies, self.partial_transitions)
    }
}

fn ratio(n: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    n as f64 / total as f64
}
