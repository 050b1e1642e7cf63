//! Error handling for Python bindings

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::{create_exception, PyErr};
use subword_tokenizer::TokenizerError as RustTokenizerError;

// Custom Python exception for tokenizer errors
create_exception!(
    subword,
    TokeniserError,
    PyRuntimeError,
    "Error raised by the subword tokeniser"
);

/// Convert a Rust TokenizerError to a Python exception
pub trait IntoPyErr {
    fn into_py_err(self) -> PyErr;
}

impl IntoPyErr for RustTokenizerError {
    fn into_py_err(self) -> PyErr {
        match self {
            RustTokenizerError::EmptySequence
            | RustTokenizerError::MissingEndOfWord { .. }
            | RustTokenizerError::UnknownPair { .. } => PyValueError::new_err(self.to_string()),
            _ => TokeniserError::new_err(self.to_string()),
        }
    }
}
