//! Main tokenizer implementation.
//!
//! This module provides the high-level `Tokenizer` struct that ties together
//! pre-tokenization, counting, ranking and the BPE merge step.

use crate::pre_tokenizer::{Normalizer, Splitter};
use std::hash::Hash;
use subword_core::{
    count, rank, split_to_subwords, Counts, PairCounts, Result, SubwordSequence, Vocabulary,
};
use subword_training::{count_pairs, validate_pair_counts, MergeConfig, MergeOutcome, PairMerger};

/// Configuration for building a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerConfig {
    /// Merge step configuration
    pub merge: MergeConfig,
}

/// Builder for creating a tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    config: TokenizerConfig,
}

impl TokenizerBuilder {
    /// Create a new tokenizer builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite sequences in parallel during merge steps.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.merge.parallel = parallel;
        self
    }

    /// Set the minimum number of sequences for the parallel path.
    pub fn min_parallel_sequences(mut self, n: usize) -> Self {
        self.config.merge.min_parallel_sequences = n;
        self
    }

    /// Build the tokenizer.
    pub fn build(self) -> Result<Tokenizer> {
        Tokenizer::new(self.config)
    }
}

/// Main tokenizer struct.
///
/// Every method is a pure function of its arguments; the tokenizer itself
/// only carries configuration.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Text normalizer
    normalizer: Normalizer,
    /// Whitespace splitter
    splitter: Splitter,
    /// Merge step
    merger: PairMerger,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            normalizer: Normalizer::new(),
            splitter: Splitter::whitespace(),
            merger: PairMerger::default(),
        }
    }
}

impl Tokenizer {
    /// Create a new tokenizer with the given configuration.
    pub fn new(config: TokenizerConfig) -> Result<Self> {
        Ok(Self {
            merger: PairMerger::new(config.merge)?,
            ..Self::default()
        })
    }

    /// Create a tokenizer builder.
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::new()
    }

    /// Get the merge configuration.
    pub fn merge_config(&self) -> &MergeConfig {
        self.merger.config()
    }

    /// Normalize text and split it into word tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.splitter.split(&self.normalizer.normalize(text))
    }

    /// Count occurrences of each token in first-seen order.
    ///
    /// Stateless; same as the free function [`count`].
    pub fn count<T, I>(&self, tokens: I) -> Counts<T>
    where
        I: IntoIterator<Item = T>,
        T: Eq + Hash + Clone,
    {
        count(tokens)
    }

    /// Rank token counts by descending count.
    ///
    /// Stateless; same as the free function [`rank`].
    pub fn rank<K: Clone>(&self, counts: &Counts<K>) -> Vec<(K, u64)> {
        rank(counts)
    }

    /// Build the ranked vocabulary of `text`.
    pub fn vocabulary(&self, text: &str) -> Vocabulary {
        let tokens = self.tokenize(text);
        Vocabulary::from_counts(&count(tokens))
    }

    /// Split word tokens into subword sequences.
    pub fn split_to_subwords<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<SubwordSequence> {
        split_to_subwords(tokens)
    }

    /// Count adjacent symbol pairs.
    pub fn count_pairs(&self, sequences: &[SubwordSequence]) -> PairCounts {
        count_pairs(sequences)
    }

    /// Apply one merge step with the most frequent pair.
    pub fn merge_best_pair(
        &self,
        sequences: &[SubwordSequence],
        pair_counts: &PairCounts,
    ) -> Vec<SubwordSequence> {
        self.merger.merge_best_pair(sequences, pair_counts).sequences
    }

    /// Apply one merge step with caller-supplied pair counts.
    ///
    /// Fails if a counted pair never occurs in `sequences`.
    pub fn merge_best_pair_checked(
        &self,
        sequences: &[SubwordSequence],
        pair_counts: &PairCounts,
    ) -> Result<MergeOutcome> {
        validate_pair_counts(sequences, pair_counts)?;
        Ok(self.merger.merge_best_pair(sequences, pair_counts))
    }

    /// Tokenize `text`, split it into subwords and apply one merge step.
    pub fn merge_step(&self, text: &str) -> MergeOutcome {
        let tokens = self.tokenize(text);
        let sequences = split_to_subwords(&tokens);
        let pair_counts = count_pairs(&sequences);
        self.merger.merge_best_pair(&sequences, &pair_counts)
    }
}
