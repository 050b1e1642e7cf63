//! Symbols and subword sequences.
//!
//! A word enters the merge algorithm as one symbol per character followed by
//! the end-of-word marker. Merges replace adjacent symbols with their
//! concatenation, so the last symbol of a sequence always ends with the
//! marker, either on its own or fused onto preceding characters.

use crate::core::counts::Counts;
use crate::error::{Result, TokenizerError};
use compact_str::{CompactString, ToCompactString};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Reserved symbol appended to every word.
pub const END_OF_WORD: &str = "</w>";

/// A string fragment at some merge stage.
pub type Symbol = CompactString;

/// An ordered pair of adjacent symbols.
pub type Pair = (Symbol, Symbol);

/// Pair frequencies in first-seen order.
pub type PairCounts = Counts<Pair>;

/// The symbols of one word, terminated by [`END_OF_WORD`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct SubwordSequence {
    symbols: Vec<Symbol>,
}

impl SubwordSequence {
    /// Split a word into single-character symbols plus the end-of-word marker.
    pub fn from_word(word: &str) -> Self {
        let mut symbols: Vec<Symbol> = Vec::with_capacity(word.chars().count() + 1);
        symbols.extend(word.chars().map(|c| c.to_compact_string()));
        symbols.push(Symbol::const_new(END_OF_WORD));
        Self { symbols }
    }

    /// Build a sequence from symbols produced elsewhere.
    ///
    /// The list must be non-empty and its last symbol must end with
    /// [`END_OF_WORD`].
    pub fn new(symbols: Vec<Symbol>) -> Result<Self> {
        match symbols.last() {
            None => Err(TokenizerError::EmptySequence),
            Some(last) if !last.ends_with(END_OF_WORD) => Err(TokenizerError::MissingEndOfWord {
                marker: END_OF_WORD,
                found: last.to_string(),
            }),
            Some(_) => Ok(Self { symbols }),
        }
    }

    /// Build a sequence from string slices.
    pub fn from_strs<S: AsRef<str>>(symbols: &[S]) -> Result<Self> {
        Self::new(symbols.iter().map(|s| Symbol::new(s.as_ref())).collect())
    }

    /// The symbols of this sequence.
    #[inline]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Consume the sequence, returning its symbols.
    pub fn into_symbols(self) -> Vec<Symbol> {
        self.symbols
    }

    /// Adjacent `(left, right)` symbol pairs, left to right.
    pub fn pairs(&self) -> impl Iterator<Item = (&Symbol, &Symbol)> + '_ {
        self.symbols.windows(2).map(|w| (&w[0], &w[1]))
    }

    /// Check whether `left` is immediately followed by `right` anywhere.
    pub fn contains_pair(&self, left: &str, right: &str) -> bool {
        self.pairs().any(|(a, b)| a == left && b == right)
    }

    /// Fuse every non-overlapping `(left, right)` occurrence, scanning left
    /// to right. Returns a new sequence; `self` is unchanged.
    ///
    /// After a fusion the scan resumes after both consumed symbols, so
    /// `a a a` with `(a, a)` becomes `aa a`.
    pub fn merge_pair(&self, left: &str, right: &str) -> Self {
        let symbols = &self.symbols;
        let mut merged = Vec::with_capacity(symbols.len());
        let mut i = 0;

        while i < symbols.len() {
            if i + 1 < symbols.len() && symbols[i] == left && symbols[i + 1] == right {
                let mut fused = CompactString::with_capacity(left.len() + right.len());
                fused.push_str(left);
                fused.push_str(right);
                merged.push(fused);
                i += 2;
            } else {
                merged.push(symbols[i].clone());
                i += 1;
            }
        }

        Self { symbols: merged }
    }
}

impl Deref for SubwordSequence {
    type Target = [Symbol];

    fn deref(&self) -> &Self::Target {
        &self.symbols
    }
}

impl TryFrom<Vec<Symbol>> for SubwordSequence {
    type Error = TokenizerError;

    fn try_from(symbols: Vec<Symbol>) -> Result<Self> {
        Self::new(symbols)
    }
}

impl From<SubwordSequence> for Vec<Symbol> {
    fn from(sequence: SubwordSequence) -> Self {
        sequence.symbols
    }
}

impl fmt::Display for SubwordSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(symbol)?;
        }
        Ok(())
    }
}

/// Split each word token into its subword sequence, preserving order.
pub fn split_to_subwords<S: AsRef<str>>(tokens: &[S]) -> Vec<SubwordSequence> {
    tokens
        .iter()
        .map(|token| SubwordSequence::from_word(token.as_ref()))
        .collect()
}
