//! Text normalization for pre-tokenization.
//!
//! Lowercases text and deletes a fixed set of punctuation characters.
//! Punctuation is removed outright rather than replaced by a space, so
//! `hello(world)` normalizes to `helloworld`.

/// Punctuation characters deleted during normalization.
pub const PUNCTUATION: [char; 9] = ['.', ',', '!', '?', ';', ':', '"', '(', ')'];

/// Lowercasing, punctuation-stripping normalizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Check if `c` is deleted by normalization.
    #[inline]
    pub fn is_punctuation(c: char) -> bool {
        PUNCTUATION.contains(&c)
    }

    /// Normalize text.
    pub fn normalize(&self, text: &str) -> String {
        text.to_lowercase()
            .chars()
            .filter(|&c| !Self::is_punctuation(c))
            .collect()
    }
}
