//! Input handling.
//!
//! This module reads the raw text the tokenizer consumes.

pub mod load;

pub use load::{TextLoader, STDIN_SOURCE};
