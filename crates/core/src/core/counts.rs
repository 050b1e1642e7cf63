//! Insertion-ordered frequency counting.
//!
//! `Counts` is the mapping used for both word-level and pair-level counts. It
//! iterates in first-seen order, which the merge step relies on to break ties
//! between equally frequent pairs.

use ahash::AHashMap;
use std::borrow::Borrow;
use std::hash::Hash;

/// Frequency counter that remembers the order in which keys were first seen.
///
/// Keys live in a dense `Vec` of `(key, count)` entries; an `AHashMap` from key
/// to entry index gives constant-time lookups.
#[derive(Debug, Clone)]
pub struct Counts<K> {
    /// Key -> position in `entries`
    index: AHashMap<K, usize>,
    /// Entries in first-seen order
    entries: Vec<(K, u64)>,
}

impl<K: Eq + Hash + Clone> Counts<K> {
    /// Create a new empty counter.
    pub fn new() -> Self {
        Self {
            index: AHashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Create a new counter with capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: AHashMap::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Build a counter from `(key, count)` entries.
    ///
    /// Repeated keys accumulate; the first occurrence fixes the position.
    pub fn from_entries(entries: impl IntoIterator<Item = (K, u64)>) -> Self {
        let mut counts = Self::new();
        for (key, n) in entries {
            counts.add_n(key, n);
        }
        counts
    }

    /// Record one occurrence of `key`.
    #[inline]
    pub fn add(&mut self, key: K) {
        self.add_n(key, 1);
    }

    /// Record `n` occurrences of `key`.
    ///
    /// A key seen for the first time is appended to the iteration order, even
    /// when `n` is zero.
    pub fn add_n(&mut self, key: K, n: u64) {
        if let Some(&pos) = self.index.get(&key) {
            self.entries[pos].1 += n;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, n));
        }
    }

    /// Get the count recorded for `key`.
    #[inline]
    pub fn get<Q>(&self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).map(|&pos| self.entries[pos].1)
    }

    /// Check whether `key` has been counted.
    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }
}

impl<K> Counts<K> {
    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, count)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> + '_ {
        self.entries.iter().map(|(key, n)| (key, *n))
    }

    /// Iterate over keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Entries in first-seen order.
    #[inline]
    pub fn entries(&self) -> &[(K, u64)] {
        &self.entries
    }

    /// Consume the counter, returning its entries in first-seen order.
    pub fn into_entries(self) -> Vec<(K, u64)> {
        self.entries
    }
}

impl<K: Eq + Hash + Clone> Default for Counts<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Equality is order-sensitive: same entries, same first-seen order.
impl<K: PartialEq> PartialEq for Counts<K> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Eq> Eq for Counts<K> {}

impl<K: Eq + Hash + Clone> FromIterator<K> for Counts<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counts = Self::new();
        counts.extend(iter);
        counts
    }
}

impl<K: Eq + Hash + Clone> Extend<K> for Counts<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

/// Count occurrences of each distinct item, in first-seen order.
pub fn count<I>(items: I) -> Counts<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    items.into_iter().collect()
}
