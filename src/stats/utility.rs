//! Shared aggregation helpers.

use std::collections::BTreeMap;

use crate::stats::types::CategoryCount;

/// Most frequent value, or `None` for empty input.
///
/// Ties are broken deterministically: the smallest value wins (counting is
/// done in a `BTreeMap`, and a later value only replaces the current best on
/// a strictly greater count).
pub fn mode<T: Ord>(values: impl IntoIterator<Item = T>) -> Option<T> {
    let mut counts: BTreeMap<T, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts {
        match &best {
            Some((_, best_count)) if count <= *best_count => {}
            _ => best = Some((value, count)),
        }
    }
    best.map(|(value, _)| value)
}

/// Counts occurrences per distinct value, ordered by descending count.
/// Equal counts are ordered by ascending value so the output is stable.
pub fn value_counts(values: impl IntoIterator<Item = String>) -> Vec<CategoryCount> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }

    let mut out: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(value, count)| CategoryCount { value, count })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_empty() {
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn test_mode_picks_most_frequent() {
        assert_eq!(mode(vec![3, 1, 3, 2, 3, 1]), Some(3));
    }

    #[test]
    fn test_mode_tie_break_smallest_value() {
        assert_eq!(mode(vec![5, 2, 5, 2]), Some(2));
        assert_eq!(
            mode(vec!["b".to_string(), "a".to_string()]),
            Some("a".to_string())
        );
    }

    #[test]
    fn test_value_counts_ordering() {
        let counts = value_counts(
            ["x", "y", "y", "z", "z"]
                .into_iter()
                .map(str::to_string),
        );
        let pairs: Vec<(&str, usize)> = counts
            .iter()
            .map(|c| (c.value.as_str(), c.count))
            .collect();
        // Descending count, ties ascending by value.
        assert_eq!(pairs, vec![("y", 2), ("z", 2), ("x", 1)]);
    }

    #[test]
    fn test_value_counts_empty() {
        assert!(value_counts(Vec::new()).is_empty());
    }
}
