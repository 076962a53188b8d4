use std::collections::HashMap;
use std::hash::Hash;

/// Running sums keyed by `K`, remembering the order keys first appeared in.
#[derive(Debug, Clone)]
pub struct Grouped<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, f64)>,
}

impl<K> Default for Grouped<K> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> Grouped<K> {
    pub fn add(&mut self, key: K, value: f64) {
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 += value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<f64> {
        self.index.get(key).map(|&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum across every key.
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, sum)| sum).sum()
    }

    /// `(key, sum)` pairs in first-seen order, or by descending sum when
    /// `sort` is set. The sort is stable, so equal sums keep first-seen order.
    pub fn into_buckets(self, sort: bool) -> Vec<(K, f64)> {
        let mut entries = self.entries;
        if sort {
            entries.sort_by(|a, b| b.1.total_cmp(&a.1));
        }
        entries
    }
}

impl<K: Eq + Hash + Clone> FromIterator<(K, f64)> for Grouped<K> {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut grouped = Grouped::default();
        for (key, value) in iter {
            grouped.add(key, value);
        }
        grouped
    }
}

/// Sums `value` per `key`. Keys compare by equality, so strings, integers and
/// calendar indices all work.
pub fn group_and_sum<K, I>(records: I) -> Grouped<K>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = (K, f64)>,
{
    records.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_per_key() {
        let grouped = group_and_sum([("a", 2.0), ("b", 1.0), ("a", 5.0)]);
        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped.get(&"a"), Some(7.0));
        assert_eq!(grouped.get(&"b"), Some(1.0));
        assert_eq!(grouped.get(&"c"), None);
        assert_eq!(grouped.total(), 8.0);
    }

    #[test]
    fn numeric_keys() {
        let grouped = group_and_sum([(2024, 1.5), (2023, 1.0), (2024, 0.5)]);
        assert_eq!(
            grouped.into_buckets(false),
            vec![(2024, 2.0), (2023, 1.0)]
        );
    }

    #[test]
    fn unsorted_buckets_keep_first_seen_order() {
        let grouped = group_and_sum([("b", 1.0), ("a", 9.0), ("c", 3.0), ("b", 1.0)]);
        let keys: Vec<_> = grouped.into_buckets(false).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn sorted_buckets_descend_and_break_ties_by_first_seen() {
        let grouped = group_and_sum([
            ("x", 2.0),
            ("y", 5.0),
            ("z", 2.0),
            ("w", 7.0),
        ]);
        assert_eq!(
            grouped.into_buckets(true),
            vec![("w", 7.0), ("y", 5.0), ("x", 2.0), ("z", 2.0)]
        );
    }

    #[test]
    fn regrouping_buckets_is_idempotent() {
        let grouped = group_and_sum([
            ("run".to_string(), 30.0),
            ("lift".to_string(), 45.0),
            ("run".to_string(), 20.0),
        ]);
        let total = grouped.total();
        let again = group_and_sum(grouped.clone().into_buckets(true));
        assert_eq!(again.total(), total);
        assert_eq!(again.get(&"run".to_string()), Some(50.0));
        assert_eq!(again.get(&"lift".to_string()), Some(45.0));

        let once_more = group_and_sum(again.into_buckets(false));
        assert_eq!(once_more.get(&"run".to_string()), grouped.get(&"run".to_string()));
    }

    #[test]
    fn empty_input() {
        let grouped: Grouped<String> = group_and_sum(Vec::new());
        assert!(grouped.is_empty());
        assert_eq!(grouped.total(), 0.0);
        assert!(grouped.into_buckets(true).is_empty());
    }
}
