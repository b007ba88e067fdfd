use std::collections::HashMap;
use std::hash::Hash;

/// Support counts keyed by item or itemset, with default-zero reads.
///
/// A table is filled during one counting pass and treated as read-only
/// once the level that produced it is published.
#[derive(Debug, Clone)]
pub struct SupportTable<K> {
    counts: HashMap<K, usize>,
}

impl<K> SupportTable<K> {
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(key, &count)| (key, count))
    }
}

impl<K: Hash + Eq> SupportTable<K> {
    pub fn new() -> Self {
        Self { counts: HashMap::new() }
    }

    /// Increment-or-insert.
    pub fn increment(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
    }

    /// Support of `key`, zero if it was never counted.
    pub fn get(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Adds every count of `other` into `self`.
    ///
    /// Summation is commutative and associative, so partial tables from
    /// disjoint transaction shards merge to the same result in any order.
    pub fn merge(self, other: Self) -> Self {
        let (mut into, from) = if self.counts.len() >= other.counts.len() {
            (self.counts, other.counts)
        } else {
            (other.counts, self.counts)
        };
        for (key, count) in from {
            *into.entry(key).or_insert(0) += count;
        }
        Self { counts: into }
    }
}

impl<K: Hash + Eq + Ord + Clone> SupportTable<K> {
    /// Keys whose support reaches `min_support`, in ascending key order.
    pub fn frequent(&self, min_support: usize) -> Vec<K> {
        let mut keys: Vec<K> = self
            .counts
            .iter()
            .filter_map(|(key, &count)| (count >= min_support).then(|| key.clone()))
            .collect();
        keys.sort_unstable();
        keys
    }
}

impl<K: Hash + Eq> PartialEq for SupportTable<K> {
    fn eq(&self, other: &Self) -> bool {
        self.counts == other.counts
    }
}

impl<K: Hash + Eq> Eq for SupportTable<K> {}

impl<K: Hash + Eq> Default for SupportTable<K> {
    fn default() -> Self {
        Self::new()
    }
}
