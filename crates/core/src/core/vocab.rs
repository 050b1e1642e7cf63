//! Ranked vocabulary.
//!
//! This module turns a token-count mapping into a list ordered by frequency,
//! most frequent first.

use crate::core::counts::Counts;
use crate::core::subword::Symbol;
use serde::{Deserialize, Serialize};
use std::hash::Hash;

/// Rank counted items by count, descending.
///
/// The sort is stable, so items with equal counts keep their first-seen order.
pub fn rank<K: Clone>(counts: &Counts<K>) -> Vec<(K, u64)> {
    let mut ranked = counts.entries().to_vec();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// A token and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabEntry {
    pub token: Symbol,
    pub count: u64,
}

/// Word-level vocabulary ordered by descending frequency.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    entries: Vec<VocabEntry>,
}

impl Vocabulary {
    /// Create a new empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank a token-count mapping into a vocabulary.
    pub fn from_counts<K>(counts: &Counts<K>) -> Self
    where
        K: AsRef<str> + Clone + Eq + Hash,
    {
        let entries = rank(counts)
            .into_iter()
            .map(|(token, count)| VocabEntry {
                token: Symbol::new(token.as_ref()),
                count,
            })
            .collect();

        Self { entries }
    }

    /// All entries, most frequent first.
    #[inline]
    pub fn entries(&self) -> &[VocabEntry] {
        &self.entries
    }

    /// The `n` most frequent entries (fewer if the vocabulary is smaller).
    pub fn top(&self, n: usize) -> &[VocabEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    /// Get the count recorded for `token`.
    pub fn count_of(&self, token: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|entry| entry.token == token)
            .map(|entry| entry.count)
    }

    /// Iterate over entries, most frequent first.
    pub fn iter(&self) -> std::slice::Iter<'_, VocabEntry> {
        self.entries.iter()
    }

    /// Get the number of distinct tokens.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the vocabulary is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a VocabEntry;
    type IntoIter = std::slice::Iter<'a, VocabEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::counts::count;

    #[test]
    fn test_rank_single_entry() {
        let counts = Counts::from_entries([("apple", 1)]);
        assert_eq!(rank(&counts), vec![("apple", 1)]);
    }

    #[test]
    fn test_rank_multiple_entries() {
        let counts = Counts::from_entries([("the", 2), ("cat", 1), ("in", 1), ("hat", 1)]);
        assert_eq!(
            rank(&counts),
            vec![("the", 2), ("cat", 1), ("in", 1), ("hat", 1)]
        );
    }

    #[test]
    fn test_rank_moves_later_maximum_first() {
        let counts = Counts::from_entries([("says", 1), ("world", 3), ("the", 2)]);
        assert_eq!(
            rank(&counts),
            vec![("world", 3), ("the", 2), ("says", 1)]
        );
    }

    #[test]
    fn test_rank_all_ties_keeps_input_order() {
        let counts = count(["d", "c", "b", "a"]);
        let ranked: Vec<_> = rank(&counts).into_iter().map(|(k, _)| k).collect();
        assert_eq!(ranked, vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn test_rank_is_sorted_permutation() {
        let counts = count(["x", "y", "y", "z", "z", "z", "w"]);
        let ranked = rank(&counts);

        assert_eq!(ranked.len(), counts.len());
        assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
        for (key, n) in counts.iter() {
            assert!(ranked.contains(&(*key, n)));
        }
    }

    #[test]
    fn test_rank_empty() {
        let counts: Counts<String> = Counts::new();
        assert!(rank(&counts).is_empty());
    }

    #[test]
    fn test_vocabulary_from_counts() {
        let counts = count(["the", "world", "the", "world", "says"]);
        let vocab = Vocabulary::from_counts(&counts);

        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.entries()[0].token, "the");
        assert_eq!(vocab.count_of("world"), Some(2));
        assert_eq!(vocab.count_of("hello"), None);
        assert_eq!(vocab.top(1).len(), 1);
        assert_eq!(vocab.top(10).len(), 3);
    }
}
