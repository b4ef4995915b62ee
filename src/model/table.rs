// FeatureTable — the one counted-mapping abstraction behind all five
// feature domains.
//
// A table maps a feature value (word, stem, n-gram, or a length) to how many
// times it occurred in the corpus. Counts are strictly positive: a key is
// either absent or has seen at least one occurrence. Tables only ever grow —
// ingestion increments or inserts, nothing decrements.

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// A frequency table over one feature domain.
///
/// Serializes transparently as the underlying map, so the persisted form is
/// a plain JSON object of key → count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureTable<K>
where
    K: Eq + Hash,
{
    counts: HashMap<K, u64>,
}

impl<K> FeatureTable<K>
where
    K: Eq + Hash,
{
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Record one more occurrence of `key`.
    pub fn increment(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// The count for `key`, if it has ever been seen.
    pub fn get(&self, key: &K) -> Option<u64> {
        self.counts.get(key).copied()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts — the size of the observed sample.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> {
        self.counts.iter().map(|(k, &c)| (k, c))
    }
}

impl<K> FromIterator<K> for FeatureTable<K>
where
    K: Eq + Hash,
{
    /// Build a table by counting a stream of feature values.
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.increment(key);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_inserts_then_counts() {
        let mut table = FeatureTable::new();
        table.increment("a");
        table.increment("b");
        table.increment("a");
        assert_eq!(table.get(&"a"), Some(2));
        assert_eq!(table.get(&"b"), Some(1));
        assert_eq!(table.get(&"c"), None);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn empty_table() {
        let table: FeatureTable<String> = FeatureTable::new();
        assert!(table.is_empty());
        assert_eq!(table.total(), 0);
    }

    #[test]
    fn from_iterator_counts_duplicates() {
        let table: FeatureTable<&str> = ["x", "y", "x", "x"].into_iter().collect();
        assert_eq!(table.get(&"x"), Some(3));
        assert_eq!(table.get(&"y"), Some(1));
    }

    #[test]
    fn integer_keys_roundtrip_through_json() {
        // Length tables are integer-keyed; serde_json renders those keys as
        // strings and must parse them back losslessly.
        let table: FeatureTable<usize> = [3, 5, 3].into_iter().collect();
        let json = serde_json::to_string(&table).unwrap();
        let back: FeatureTable<usize> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
