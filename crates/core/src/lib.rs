//! Subword-core - Core data structures for BPE subword tokenization
//!
//! This crate provides the fundamental types shared by the rest of the
//! workspace: symbols and subword sequences, the insertion-ordered frequency
//! counter used for both word and pair counts, and the vocabulary ranker.
//!
//! # Example
//!
//! ```rust
//! use subword_core::{count, rank, split_to_subwords};
//!
//! let counts = count(["the", "cat", "the"]);
//! assert_eq!(rank(&counts), vec![("the", 2), ("cat", 1)]);
//!
//! let subwords = split_to_subwords(&["cat"]);
//! assert_eq!(subwords[0].to_string(), "c a t </w>");
//! ```

pub mod error;
pub use error::{Result, TokenizerError};

pub mod core;
pub use self::core::{
    count, rank, split_to_subwords, Counts, Pair, PairCounts, SubwordSequence, Symbol,
    VocabEntry, Vocabulary, END_OF_WORD,
};
