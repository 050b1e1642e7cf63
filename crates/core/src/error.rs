//! Error types for the subword tokenizer library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tokenizer library.
///
/// The tokenization and merge operations themselves are total; these variants
/// cover values that enter the library from outside (files, hand-built
/// sequences, caller-supplied pair counts, builder settings).
#[derive(Error, Debug)]
pub enum TokenizerError {
    /// A subword sequence was built from an empty symbol list
    #[error("Subword sequence must contain at least the end-of-word marker")]
    EmptySequence,

    /// The last symbol of a subword sequence does not carry the end-of-word marker
    #[error("Subword sequence must end with `{marker}`, found `{found}`")]
    MissingEndOfWord { marker: &'static str, found: String },

    /// A pair count refers to symbols that are never adjacent in the sequences
    #[error("Pair ({left:?}, {right:?}) does not occur in any subword sequence")]
    UnknownPair { left: String, right: String },

    /// I/O error with file context
    #[error("I/O error for {path}: {err}")]
    Io {
        path: PathBuf,
        #[source]
        err: std::io::Error,
    },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type alias for tokenizer operations.
pub type Result<T> = std::result::Result<T, TokenizerError>;
