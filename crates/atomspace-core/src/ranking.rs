//! Tie-averaged ranking.
//!
//! Input is an ordered sequence of `(key, weight)` pairs, where the weight
//! is the number of positions the key occupies (typically a count of
//! observations). Ranks start at 1. Adjacent entries of equal weight form a
//! tie group; every key in the group receives the mean rank of the span the
//! group covers.
//!
//! ```
//! use atomspace_core::ranking;
//!
//! let ranks = ranking([("a", 1.0), ("b", 2.0)]);
//! assert_eq!(ranks["a"], 1.0);
//! assert_eq!(ranks["b"], 2.5);
//! ```

use std::collections::BTreeMap;

/// Rank an ordered `(key, weight)` sequence.
///
/// A group starting at rank `start` and spanning `span` positions (the sum
/// of its weights) gets rank `(2 * start + span - 1) / 2`. A key appearing
/// twice keeps the rank it was assigned last.
pub fn ranking<K, I>(entries: I) -> BTreeMap<K, f64>
where
    K: Ord,
    I: IntoIterator<Item = (K, f64)>,
{
    let mut ranks = BTreeMap::new();
    let mut start = 1.0;
    let mut group: Vec<K> = Vec::new();
    let mut group_weight = 0.0;
    let mut span = 0.0;

    for (key, weight) in entries {
        if !group.is_empty() && weight != group_weight {
            start = assign_group(&mut ranks, &mut group, start, span);
            span = 0.0;
        }
        group_weight = weight;
        span += weight;
        group.push(key);
    }
    if !group.is_empty() {
        assign_group(&mut ranks, &mut group, start, span);
    }

    ranks
}

/// Assign the mean rank to every key in `group`; returns the next start.
fn assign_group<K: Ord>(
    ranks: &mut BTreeMap<K, f64>,
    group: &mut Vec<K>,
    start: f64,
    span: f64,
) -> f64 {
    let rank = (2.0 * start + span - 1.0) / 2.0;
    for key in group.drain(..) {
        ranks.insert(key, rank);
    }
    start + span
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_three_way_tie() {
        let ranks = ranking([("a", 1.0), ("b", 1.0), ("c", 1.0)]);
        assert_eq!(ranks.len(), 3);
        assert_eq!(ranks["a"], 2.0);
        assert_eq!(ranks["b"], 2.0);
        assert_eq!(ranks["c"], 2.0);
    }

    #[test]
    fn test_two_way_tie() {
        let ranks = ranking([("a", 1.0), ("b", 1.0)]);
        assert_eq!(ranks["a"], 1.5);
        assert_eq!(ranks["b"], 1.5);
    }

    #[test]
    fn test_unequal_weights() {
        let ranks = ranking([("a", 1.0), ("b", 2.0)]);
        assert_eq!(ranks["a"], 1.0);
        assert_eq!(ranks["b"], 2.5);
    }

    #[test]
    fn test_single_heavy_entry() {
        // One key covering positions 1..=3.
        let ranks = ranking([("x", 3.0)]);
        assert_eq!(ranks["x"], 2.0);
    }

    #[test]
    fn test_groups_split_on_weight_change() {
        let ranks = ranking([("a", 2.0), ("b", 2.0), ("c", 1.0), ("d", 3.0)]);
        // a,b span 1..=4, c is 5, d spans 6..=8
        assert_eq!(ranks["a"], 2.5);
        assert_eq!(ranks["b"], 2.5);
        assert_eq!(ranks["c"], 5.0);
        assert_eq!(ranks["d"], 7.0);
    }

    #[test]
    fn test_empty_input() {
        let ranks = ranking(Vec::<(u32, f64)>::new());
        assert!(ranks.is_empty());
    }

    proptest! {
        #[test]
        fn test_weighted_rank_sum(weights in prop::collection::vec(1u32..5, 1..40)) {
            let entries: Vec<(usize, f64)> = weights
                .iter()
                .enumerate()
                .map(|(i, w)| (i, f64::from(*w)))
                .collect();
            let total: f64 = entries.iter().map(|(_, w)| w).sum();

            let ranks = ranking(entries.clone());
            let weighted: f64 = entries.iter().map(|(k, w)| ranks[k] * w).sum();

            prop_assert!((weighted - total * (total + 1.0) / 2.0).abs() < 1e-6);
        }

        #[test]
        fn test_ranks_within_bounds(weights in prop::collection::vec(1u32..5, 1..40)) {
            let total: f64 = weights.iter().map(|w| f64::from(*w)).sum();
            let ranks = ranking(weights.iter().enumerate().map(|(i, w)| (i, f64::from(*w))));

            for rank in ranks.values() {
                prop_assert!(*rank >= 1.0 && *rank <= total);
            }
        }
    }
}
