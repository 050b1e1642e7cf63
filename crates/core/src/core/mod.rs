//! Core BPE data structures.
//!
//! This module contains the ordered frequency counter, the vocabulary ranker
//! and the subword sequence type the merge algorithm operates on.

pub mod counts;
pub mod subword;
pub mod vocab;

pub use counts::{count, Counts};
pub use subword::{split_to_subwords, Pair, PairCounts, SubwordSequence, Symbol, END_OF_WORD};
pub use vocab::{rank, VocabEntry, Vocabulary};
