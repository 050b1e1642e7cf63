//! Subword-training - BPE pair counting and merge steps
//!
//! This crate provides the core of the BPE algorithm: counting adjacent symbol
//! pairs and fusing the most frequent one.
//!
//! # Features
//!
//! - Insertion-ordered pair counts for deterministic tie-breaking
//! - Non-overlapping, left-to-right merge application
//! - Optional parallel rewriting of sequences via rayon
//!
//! # Example
//!
//! ```rust
//! use subword_core::split_to_subwords;
//! use subword_training::{count_pairs, merge_best_pair};
//!
//! let mut sequences = split_to_subwords(&["cat", "car"]);
//! let counts = count_pairs(&sequences);
//! sequences = merge_best_pair(&sequences, &counts);
//!
//! assert_eq!(sequences[0].to_string(), "ca t </w>");
//! ```

pub use subword_core::{Result, TokenizerError};

pub mod training;
pub use training::{
    count_pairs, merge_best_pair, merge_pair, select_best_pair, validate_pair_counts,
    MergeConfig, MergeOutcome, PairCounter, PairMerger,
};
