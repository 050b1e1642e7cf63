//! Python bindings for the subword tokenizer
//!
//! This module exposes a `Tokeniser` class backed by the Rust implementation.

use pyo3::prelude::*;

mod error;
mod tokeniser;

use error::TokeniserError;
use tokeniser::PyTokeniser;

/// subword: minimal BPE subword tokenizer in Rust
#[pymodule]
fn subword(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyTokeniser>()?;
    m.add("TokeniserError", m.py().get_type_bound::<TokeniserError>())?;

    // Add version info
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
