//! Merge-step infrastructure for BPE.
//!
//! This module provides pair counting and the merge step. A caller that wants
//! several merges alternates `count_pairs` and `merge_best_pair`.

pub mod counter;
pub mod merger;

pub use counter::{count_pairs, PairCounter};
pub use merger::{
    merge_best_pair, merge_pair, select_best_pair, validate_pair_counts, MergeConfig,
    MergeOutcome, PairMerger,
};
