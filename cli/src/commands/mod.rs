//! CLI commands for the subword tokenizer.

pub mod benchmark;
pub mod merge;
pub mod tokenize;
pub mod vocab;

pub use benchmark::BenchmarkCommand;
pub use merge::MergeCommand;
pub use tokenize::TokenizeCommand;
pub use vocab::VocabCommand;
