//! Pair counting for BPE merge steps.
//!
//! This module counts adjacent symbol pairs across subword sequences. Counts
//! keep first-seen order so that the merge step can break ties
//! deterministically.

use subword_core::{Pair, PairCounts, SubwordSequence};

/// Counter for adjacent symbol pair frequencies.
///
/// Sequences are scanned left to right, one after another, in the order they
/// are added.
#[derive(Debug, Clone, Default)]
pub struct PairCounter {
    /// Pair -> frequency count, in first-seen order
    pair_counts: PairCounts,
    /// Number of sequences scanned so far
    sequences: usize,
}

impl PairCounter {
    /// Create a new pair counter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every adjacent pair of one sequence.
    ///
    /// A sequence of `n` symbols contributes `n - 1` observations.
    pub fn add_sequence(&mut self, sequence: &SubwordSequence) {
        for (left, right) in sequence.pairs() {
            let pair: Pair = (left.clone(), right.clone());
            self.pair_counts.add(pair);
        }
        self.sequences += 1;
    }

    /// Add several sequences in order.
    pub fn add_sequences<'a>(&mut self, sequences: impl IntoIterator<Item = &'a SubwordSequence>) {
        for sequence in sequences {
            self.add_sequence(sequence);
        }
    }

    /// Get the number of sequences scanned.
    pub fn sequence_count(&self) -> usize {
        self.sequences
    }

    /// Get the total number of pair observations.
    pub fn total_pairs(&self) -> u64 {
        self.pair_counts.total()
    }

    /// Get a reference to the counts gathered so far.
    pub fn pair_counts(&self) -> &PairCounts {
        &self.pair_counts
    }

    /// Consume the counter, returning the pair counts.
    pub fn into_pair_counts(self) -> PairCounts {
        self.pair_counts
    }

    /// Clear all data from the counter.
    pub fn clear(&mut self) {
        self.pair_counts = PairCounts::new();
        self.sequences = 0;
    }
}

/// Count adjacent symbol pairs across all sequences.
pub fn count_pairs(sequences: &[SubwordSequence]) -> PairCounts {
    let mut counter = PairCounter::new();
    counter.add_sequences(sequences);
    log::trace!(
        "counted {} distinct pairs over {} sequences",
        counter.pair_counts().len(),
        counter.sequence_count()
    );
    counter.into_pair_counts()
}

#[cfg(test)]
mod tests {
    use super::*;
    use subword_core::{split_to_subwords, Symbol};

    fn pair(left: &str, right: &str) -> Pair {
        (Symbol::new(left), Symbol::new(right))
    }

    fn seq(symbols: &[&str]) -> SubwordSequence {
        SubwordSequence::from_strs(symbols).unwrap()
    }

    #[test]
    fn test_count_pairs_empty_input() {
        assert!(count_pairs(&[]).is_empty());
    }

    #[test]
    fn test_count_pairs_single_pair() {
        let pairs = count_pairs(&[seq(&["a", "</w>"])]);
        assert_eq!(pairs, PairCounts::from_entries([(pair("a", "</w>"), 1)]));
    }

    #[test]
    fn test_count_pairs_single_token_multiple_pairs() {
        let pairs = count_pairs(&[seq(&["c", "a", "t", "</w>"])]);
        let expected = PairCounts::from_entries([
            (pair("c", "a"), 1),
            (pair("a", "t"), 1),
            (pair("t", "</w>"), 1),
        ]);
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_count_pairs_pipeline_example() {
        let pairs = count_pairs(&split_to_subwords(&["the", "hat"]));
        let expected = PairCounts::from_entries([
            (pair("t", "h"), 1),
            (pair("h", "e"), 1),
            (pair("e", "</w>"), 1),
            (pair("h", "a"), 1),
            (pair("a", "t"), 1),
            (pair("t", "</w>"), 1),
        ]);
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_count_pairs_two_tokens_accumulate() {
        let pairs = count_pairs(&[seq(&["c", "a", "t", "</w>"]), seq(&["c", "a", "r", "</w>"])]);
        assert_eq!(pairs.get(&pair("c", "a")), Some(2));
        assert_eq!(pairs.get(&pair("a", "t")), Some(1));
        assert_eq!(pairs.get(&pair("a", "r")), Some(1));
        assert_eq!(pairs.get(&pair("t", "</w>")), Some(1));
        assert_eq!(pairs.get(&pair("r", "</w>")), Some(1));
    }

    #[test]
    fn test_count_pairs_cat_car_caravan() {
        let pairs = count_pairs(&split_to_subwords(&["cat", "car", "caravan"]));
        let expected = PairCounts::from_entries([
            (pair("c", "a"), 3),
            (pair("a", "t"), 1),
            (pair("t", "</w>"), 1),
            (pair("a", "r"), 2),
            (pair("r", "</w>"), 1),
            (pair("r", "a"), 1),
            (pair("a", "v"), 1),
            (pair("v", "a"), 1),
            (pair("a", "n"), 1),
            (pair("n", "</w>"), 1),
        ]);
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_observations_per_sequence() {
        let sequences = split_to_subwords(&["a", "hello", "caravan"]);
        let mut counter = PairCounter::new();
        counter.add_sequences(&sequences);

        let expected: usize = sequences.iter().map(|s| s.len() - 1).sum();
        assert_eq!(counter.total_pairs(), expected as u64);
        assert_eq!(counter.sequence_count(), 3);
    }

    #[test]
    fn test_single_symbol_sequence_has_no_pairs() {
        assert!(count_pairs(&[seq(&["low</w>"])]).is_empty());

        let mut counter = PairCounter::new();
        counter.add_sequences(&[seq(&["low</w>"]), seq(&["lo", "w</w>"])]);
        assert_eq!(counter.total_pairs(), 1);
        assert_eq!(counter.sequence_count(), 2);
        assert_eq!(
            counter.into_pair_counts(),
            PairCounts::from_entries([(pair("lo", "w</w>"), 1)])
        );
    }

    #[test]
    fn test_clear() {
        let mut counter = PairCounter::new();
        counter.add_sequence(&SubwordSequence::from_word("ab"));
        counter.clear();

        assert!(counter.pair_counts().is_empty());
        assert_eq!(counter.sequence_count(), 0);
    }
}
