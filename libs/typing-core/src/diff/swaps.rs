//! Substitution-only distance.

use super::DiffResult;

/// Count the positions where `start` and `goal` differ, plus the difference
/// in their lengths.
///
/// Gives up with [`DiffResult::AtLeast`] once the substitutions alone
/// exceed `limit`.
pub fn sphinx_swaps(start: &str, goal: &str, limit: usize) -> DiffResult {
    let mut swaps = 0;

    for (a, b) in start.chars().zip(goal.chars()) {
        if a != b {
            swaps += 1;
            if swaps > limit {
                return DiffResult::exceeded(limit);
            }
        }
    }

    let length_penalty = start.chars().count().abs_diff(goal.chars().count());
    DiffResult::Exact(swaps + length_penalty)
}
