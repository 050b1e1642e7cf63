//! The BPE merge step.
//!
//! One merge step picks the most frequent pair from a pair-count mapping and
//! fuses every non-overlapping occurrence of it in every subword sequence.
//! Selection happens once per call, before any sequence is rewritten, so the
//! per-sequence rewrite can run in parallel.

use ahash::AHashSet;
use serde::{Deserialize, Serialize};
use subword_core::{Pair, PairCounts, Result, SubwordSequence, TokenizerError};

/// Configuration for merge steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeConfig {
    /// Whether to rewrite sequences on the rayon thread pool
    pub parallel: bool,
    /// Minimum number of sequences before the parallel path is taken
    pub min_parallel_sequences: usize,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            min_parallel_sequences: 1024,
        }
    }
}

impl MergeConfig {
    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.min_parallel_sequences == 0 {
            return Err(TokenizerError::InvalidConfig(
                "min_parallel_sequences must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Result of one merge step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeOutcome {
    /// The pair that was fused and its count, or `None` if there were no pairs
    pub merged: Option<(Pair, u64)>,
    /// The rewritten sequences
    pub sequences: Vec<SubwordSequence>,
}

/// Select the pair to merge.
///
/// Scans in iteration order and keeps the first pair with the strictly
/// greatest count, so ties go to the pair seen first. Returns `None` for an
/// empty mapping.
pub fn select_best_pair(pair_counts: &PairCounts) -> Option<(&Pair, u64)> {
    let mut best: Option<(&Pair, u64)> = None;

    for (pair, count) in pair_counts.iter() {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((pair, count)),
        }
    }

    best
}

/// Fuse every non-overlapping occurrence of `pair` in every sequence.
pub fn merge_pair(sequences: &[SubwordSequence], pair: &Pair) -> Vec<SubwordSequence> {
    PairMerger::default().merge_pair(sequences, pair)
}

/// Apply one merge step with the most frequent pair.
///
/// With an empty `pair_counts` the result is a copy of `sequences`.
pub fn merge_best_pair(
    sequences: &[SubwordSequence],
    pair_counts: &PairCounts,
) -> Vec<SubwordSequence> {
    PairMerger::default()
        .merge_best_pair(sequences, pair_counts)
        .sequences
}

/// Check that every counted pair occurs in at least one sequence.
///
/// Counts produced by `count_pairs` always pass; this guards counts that
/// arrive from outside the library.
pub fn validate_pair_counts(sequences: &[SubwordSequence], pair_counts: &PairCounts) -> Result<()> {
    let observed: AHashSet<(&str, &str)> = sequences
        .iter()
        .flat_map(|s| s.pairs())
        .map(|(left, right)| (left.as_str(), right.as_str()))
        .collect();

    for (left, right) in pair_counts.keys() {
        if !observed.contains(&(left.as_str(), right.as_str())) {
            return Err(TokenizerError::UnknownPair {
                left: left.to_string(),
                right: right.to_string(),
            });
        }
    }
    Ok(())
}

/// Applies merge steps according to a [`MergeConfig`].
#[derive(Debug, Clone, Default)]
pub struct PairMerger {
    config: MergeConfig,
}

impl PairMerger {
    /// Create a new merger with the given configuration.
    pub fn new(config: MergeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Get the configuration.
    pub fn config(&self) -> &MergeConfig {
        &self.config
    }

    /// Apply one merge step with the most frequent pair in `pair_counts`.
    pub fn merge_best_pair(
        &self,
        sequences: &[SubwordSequence],
        pair_counts: &PairCounts,
    ) -> MergeOutcome {
        let Some((pair, count)) = select_best_pair(pair_counts) else {
            log::debug!("no pairs to merge, copying {} sequences", sequences.len());
            return MergeOutcome {
                merged: None,
                sequences: sequences.to_vec(),
            };
        };

        log::debug!(
            "merging ({}, {}) with count {} across {} sequences",
            pair.0,
            pair.1,
            count,
            sequences.len()
        );

        MergeOutcome {
            merged: Some((pair.clone(), count)),
            sequences: self.merge_pair(sequences, pair),
        }
    }

    /// Fuse every non-overlapping occurrence of `pair` in every sequence.
    pub fn merge_pair(&self, sequences: &[SubwordSequence], pair: &Pair) -> Vec<SubwordSequence> {
        let (left, right) = (pair.0.as_str(), pair.1.as_str());

        if self.config.parallel && sequences.len() >= self.config.min_parallel_sequences {
            use rayon::prelude::*;

            log::trace!("rewriting {} sequences in parallel", sequences.len());
            sequences
                .par_iter()
                .map(|sequence| sequence.merge_pair(left, right))
                .collect()
        } else {
            sequences
                .iter()
                .map(|sequence| sequence.merge_pair(left, right))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::counter::count_pairs;
    use subword_core::{split_to_subwords, Symbol};

    fn pair(left: &str, right: &str) -> Pair {
        (Symbol::new(left), Symbol::new(right))
    }

    fn seq(symbols: &[&str]) -> SubwordSequence {
        SubwordSequence::from_strs(symbols).unwrap()
    }

    #[test]
    fn test_select_best_pair_first_tie_wins() {
        let counts = PairCounts::from_entries([(pair("a", "b"), 2), (pair("b", "c"), 2)]);
        assert_eq!(select_best_pair(&counts), Some((&pair("a", "b"), 2)));
    }

    #[test]
    fn test_select_best_pair_later_maximum_wins() {
        let counts = PairCounts::from_entries([
            (pair("a", "b"), 1),
            (pair("b", "c"), 3),
            (pair("c", "d"), 3),
        ]);
        assert_eq!(select_best_pair(&counts), Some((&pair("b", "c"), 3)));
    }

    #[test]
    fn test_select_best_pair_zero_counts() {
        let counts = PairCounts::from_entries([(pair("a", "b"), 0), (pair("b", "c"), 0)]);
        assert_eq!(select_best_pair(&counts), Some((&pair("a", "b"), 0)));
    }

    #[test]
    fn test_select_best_pair_empty() {
        assert_eq!(select_best_pair(&PairCounts::new()), None);
    }

    #[test]
    fn test_merge_non_overlapping() {
        let sequences = vec![seq(&["a", "a", "a", "</w>"])];
        let counts = PairCounts::from_entries([(pair("a", "a"), 2), (pair("a", "</w>"), 1)]);

        let merged = merge_best_pair(&sequences, &counts);
        assert_eq!(merged, vec![seq(&["aa", "a", "</w>"])]);
    }

    #[test]
    fn test_merge_tie_break() {
        let sequences = vec![seq(&["a", "b", "c", "</w>"])];
        let counts = PairCounts::from_entries([(pair("a", "b"), 2), (pair("b", "c"), 2)]);

        let merged = merge_best_pair(&sequences, &counts);
        assert_eq!(merged, vec![seq(&["ab", "c", "</w>"])]);
    }

    #[test]
    fn test_merge_empty_inputs() {
        assert!(merge_best_pair(&[], &PairCounts::new()).is_empty());
    }

    #[test]
    fn test_merge_without_pairs_copies_input() {
        let sequences = split_to_subwords(&["cat", "a"]);
        let merged = merge_best_pair(&sequences, &PairCounts::new());
        assert_eq!(merged, sequences);
    }

    #[test]
    fn test_merge_applies_to_every_sequence() {
        let sequences = split_to_subwords(&["cat", "car", "caravan"]);
        let counts = count_pairs(&sequences);

        let merged = merge_best_pair(&sequences, &counts);
        assert_eq!(
            merged,
            vec![
                seq(&["ca", "t", "</w>"]),
                seq(&["ca", "r", "</w>"]),
                seq(&["ca", "r", "a", "v", "a", "n", "</w>"]),
            ]
        );
        // The number of sequences never changes.
        assert_eq!(merged.len(), sequences.len());
    }

    #[test]
    fn test_merge_loop_recounts() {
        let mut sequences = split_to_subwords(&["low", "low", "lower"]);

        for _ in 0..3 {
            let counts = count_pairs(&sequences);
            sequences = merge_best_pair(&sequences, &counts);
        }

        assert_eq!(sequences[0], seq(&["low</w>"]));
        assert_eq!(sequences[2], seq(&["low", "e", "r", "</w>"]));
    }

    #[test]
    fn test_merge_outcome_reports_pair() {
        let sequences = split_to_subwords(&["the", "the"]);
        let counts = count_pairs(&sequences);

        let outcome = PairMerger::default().merge_best_pair(&sequences, &counts);
        assert_eq!(outcome.merged, Some((pair("t", "h"), 2)));

        let outcome = PairMerger::default().merge_best_pair(&sequences, &PairCounts::new());
        assert_eq!(outcome.merged, None);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let words: Vec<String> = (0..64).map(|i| format!("abab{}ab", i % 7)).collect();
        let sequences = split_to_subwords(&words);
        let counts = count_pairs(&sequences);

        let parallel = PairMerger::new(MergeConfig {
            parallel: true,
            min_parallel_sequences: 1,
        })
        .unwrap();

        assert_eq!(
            parallel.merge_best_pair(&sequences, &counts).sequences,
            merge_best_pair(&sequences, &counts)
        );
    }

    #[test]
    fn test_invalid_config() {
        let result = PairMerger::new(MergeConfig {
            parallel: true,
            min_parallel_sequences: 0,
        });
        assert!(matches!(result, Err(TokenizerError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_pair_counts_large_corpus() {
        let mut words: Vec<String> = vec!["aa".to_string(); 20_000];
        words.extend((0..2_000u32).filter_map(|i| {
            let a = char::from_u32(0x4e00 + 2 * i)?;
            let b = char::from_u32(0x4e01 + 2 * i)?;
            Some(format!("{a}{b}"))
        }));
        let sequences = split_to_subwords(&words);
        let counts = count_pairs(&sequences);

        assert!(counts.len() > 4_000);
        assert!(validate_pair_counts(&sequences, &counts).is_ok());

        let mut foreign = counts.clone();
        foreign.add(pair("a", "b"));
        assert!(matches!(
            validate_pair_counts(&sequences, &foreign),
            Err(TokenizerError::UnknownPair { .. })
        ));
    }

    #[test]
    fn test_validate_pair_counts() {
        let sequences = vec![seq(&["a", "b", "c", "</w>"])];

        let known = PairCounts::from_entries([(pair("a", "b"), 2), (pair("b", "c"), 2)]);
        assert!(validate_pair_counts(&sequences, &known).is_ok());

        let unknown = PairCounts::from_entries([(pair("c", "a"), 1)]);
        assert!(matches!(
            validate_pair_counts(&sequences, &unknown),
            Err(TokenizerError::UnknownPair { .. })
        ));
    }
}
