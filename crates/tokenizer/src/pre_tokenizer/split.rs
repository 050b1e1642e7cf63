//! Text splitting for pre-tokenization.
//!
//! Splits normalized text into word tokens on runs of whitespace.

/// Whitespace splitter for pre-tokenization.
#[derive(Debug, Clone, Copy, Default)]
pub struct Splitter;

impl Splitter {
    /// Create a whitespace splitter.
    pub fn whitespace() -> Self {
        Self
    }

    /// Split text into tokens, discarding empty fragments.
    pub fn split(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(|s| s.to_string()).collect()
    }
}
