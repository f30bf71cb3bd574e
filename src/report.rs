//! Aggregate queries over sales.

use std::collections::HashMap;
use std::hash::Hash;

/// The most frequent key and its count.
///
/// Ties go to the key that appeared first. Returns `None` for empty input.
pub fn most_frequent<K, I>(keys: I) -> Option<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    // key -> (count, first-seen index)
    let mut counts: HashMap<K, (usize, usize)> = HashMap::new();
    for (idx, key) in keys.into_iter().enumerate() {
        counts.entry(key).or_insert((0, idx)).0 += 1;
    }

    counts
        .into_iter()
        .min_by(|(_, (ca, fa)), (_, (cb, fb))| cb.cmp(ca).then(fa.cmp(fb)))
        .map(|(key, (count, _))| (key, count))
}

/// Sum of `value` over the items.
pub fn total<T>(items: &[&T], value: impl Fn(&T) -> f64) -> f64 {
    items.iter().map(|item| value(*item)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_frequent_tie_goes_to_first_seen() {
        let sales = ["A", "B", "A", "B"];
        assert_eq!(most_frequent(sales), Some(("A", 2)));

        let sales = ["B", "A", "A", "B"];
        assert_eq!(most_frequent(sales), Some(("B", 2)));
    }

    #[test]
    fn test_most_frequent_clear_winner() {
        let sales = ["A", "B", "B", "C", "B"];
        assert_eq!(most_frequent(sales), Some(("B", 3)));
    }

    #[test]
    fn test_most_frequent_empty() {
        assert_eq!(most_frequent(Vec::<String>::new()), None);
    }

    #[test]
    fn test_total() {
        let prices = [10.0, 2.5];
        let refs: Vec<&f64> = prices.iter().collect();
        assert_eq!(total(&refs, |p| *p), 12.5);
    }
}
