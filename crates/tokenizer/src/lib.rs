//! Subword-tokenizer - High-level tokenizer API
//!
//! This crate provides a user-friendly interface to the subword tokenizer,
//! integrating pre-tokenization, frequency counting, vocabulary ranking and
//! the BPE merge step into a single API.
//!
//! # Example
//!
//! ```rust
//! use subword_tokenizer::Tokenizer;
//!
//! let tokenizer = Tokenizer::builder().build()?;
//!
//! let tokens = tokenizer.tokenize("The cat, the hat.");
//! assert_eq!(tokens, vec!["the", "cat", "the", "hat"]);
//!
//! let subwords = tokenizer.split_to_subwords(&tokens);
//! let pairs = tokenizer.count_pairs(&subwords);
//! let merged = tokenizer.merge_best_pair(&subwords, &pairs);
//! assert_eq!(merged[0].to_string(), "th e </w>");
//! # Ok::<(), subword_tokenizer::TokenizerError>(())
//! ```

// Re-export core types
pub use subword_core::{
    count, rank, split_to_subwords, Counts, Pair, PairCounts, Result, SubwordSequence, Symbol,
    TokenizerError, VocabEntry, Vocabulary, END_OF_WORD,
};
pub use subword_training::{
    count_pairs, merge_best_pair, select_best_pair, MergeConfig, MergeOutcome,
};

// Tokenizer API
pub mod tokenizer;
pub use tokenizer::{Tokenizer, TokenizerBuilder, TokenizerConfig};

// Input handling
pub mod io;
pub use io::TextLoader;

// Pre-tokenization
pub mod pre_tokenizer;
pub use pre_tokenizer::{tokenize, Normalizer, Splitter, PUNCTUATION};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
