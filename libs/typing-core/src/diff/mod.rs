//! Bounded diff functions for autocorrect.
//!
//! Every function takes `(start, goal, limit)` and stops working as soon as
//! the cost is known to exceed `limit`, reporting [`DiffResult::AtLeast`]
//! instead of an exact count.

pub mod edit;
pub mod swaps;

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

pub use edit::{final_diff, minimum_mewtations};
pub use swaps::sphinx_swaps;

/// Cost returned by a diff function.
///
/// `AtLeast` orders after every `Exact` value, so a search that gave up
/// never beats one that finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DiffResult {
    /// The exact number of operations.
    Exact(usize),
    /// The search was abandoned; the true cost is at least this value.
    AtLeast(usize),
}

impl DiffResult {
    /// Result for a search that went past `limit`.
    pub fn exceeded(limit: usize) -> Self {
        Self::AtLeast(limit.saturating_add(1))
    }

    /// Whether this is an exact cost no greater than `limit`.
    pub fn is_within(&self, limit: usize) -> bool {
        matches!(self, Self::Exact(cost) if *cost <= limit)
    }

    /// The exact cost or the known lower bound.
    pub fn value(&self) -> usize {
        match self {
            Self::Exact(cost) | Self::AtLeast(cost) => *cost,
        }
    }
}

impl Ord for DiffResult {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Exact(a), Self::Exact(b)) => a.cmp(b),
            (Self::Exact(_), Self::AtLeast(_)) => Ordering::Less,
            (Self::AtLeast(_), Self::Exact(_)) => Ordering::Greater,
            (Self::AtLeast(a), Self::AtLeast(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for DiffResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_beats_at_least() {
        assert!(DiffResult::Exact(9) < DiffResult::AtLeast(3));
        assert!(DiffResult::AtLeast(3) > DiffResult::Exact(0));
        assert!(DiffResult::Exact(1) < DiffResult::Exact(2));
        assert!(DiffResult::AtLeast(2) < DiffResult::AtLeast(4));
    }

    #[test]
    fn exceeded_is_never_within() {
        let result = DiffResult::exceeded(4);
        assert_eq!(result, DiffResult::AtLeast(5));
        assert_eq!(result.value(), 5);
        assert!(!result.is_within(4));
        assert!(!result.is_within(100));
        assert_eq!(DiffResult::exceeded(usize::MAX), DiffResult::AtLeast(usize::MAX));
    }

    #[test]
    fn exact_within_limit() {
        assert!(DiffResult::Exact(2).is_within(2));
        assert!(!DiffResult::Exact(3).is_within(2));
    }

    #[test]
    fn min_prefers_exact() {
        let results = [
            DiffResult::AtLeast(3),
            DiffResult::Exact(2),
            DiffResult::AtLeast(3),
        ];
        assert_eq!(results.iter().min(), Some(&DiffResult::Exact(2)));
    }

    #[test]
    fn serializes_tagged() {
        let json = serde_json::to_value(DiffResult::AtLeast(3)).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "at_least", "value": 3 }));
    }
}
