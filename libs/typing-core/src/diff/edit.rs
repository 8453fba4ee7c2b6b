//! Edit distances with early exit.

use super::DiffResult;

/// Edit distance using inserts, deletes and substitutions, each costing 1.
pub fn minimum_mewtations(start: &str, goal: &str, limit: usize) -> DiffResult {
    bounded_distance(start, goal, limit, false)
}

/// Edit distance that also counts swapping two adjacent characters as a
/// single edit (optimal string alignment).
pub fn final_diff(start: &str, goal: &str, limit: usize) -> DiffResult {
    bounded_distance(start, goal, limit, true)
}

fn bounded_distance(start: &str, goal: &str, limit: usize, transpositions: bool) -> DiffResult {
    if start == goal {
        return DiffResult::Exact(0);
    }

    let a: Vec<char> = start.chars().collect();
    let b: Vec<char> = goal.chars().collect();

    if a.is_empty() || b.is_empty() {
        let distance = a.len().max(b.len());
        return if distance > limit {
            DiffResult::exceeded(limit)
        } else {
            DiffResult::Exact(distance)
        };
    }
    if a.len().abs_diff(b.len()) > limit {
        return DiffResult::exceeded(limit);
    }

    let n = b.len();

    // Three rolling rows; the oldest is only read for transpositions.
    let mut before_prev = vec![0; n + 1];
    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        let mut row_min = i;

        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);

            let mut best = (prev[j] + 1) // deletion
                .min(curr[j - 1] + 1) // insertion
                .min(prev[j - 1] + cost); // substitution

            if transpositions && i > 1 && j > 1 && a[i - 1] == b[j - 2] && a[i - 2] == b[j - 1] {
                best = best.min(before_prev[j - 2] + 1);
            }

            curr[j] = best;
            row_min = row_min.min(best);
        }

        // Row minima never decrease, so no later cell can get back under the limit.
        if row_min > limit {
            return DiffResult::exceeded(limit);
        }

        std::mem::swap(&mut before_prev, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[n];
    if distance > limit {
        DiffResult::exceeded(limit)
    } else {
        DiffResult::Exact(distance)
    }
}
