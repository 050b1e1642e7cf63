//! Pre-tokenization pipeline.
//!
//! This module turns raw text into word tokens: normalization followed by
//! whitespace splitting.

pub mod normalize;
pub mod split;

pub use normalize::{Normalizer, PUNCTUATION};
pub use split::Splitter;

/// Normalize `text` and split it into word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    Splitter::whitespace().split(&Normalizer::new().normalize(text))
}
