//! PyO3 wrapper for the Tokenizer struct
//!
//! Method names follow the Python-side vocabulary (`tokenise`,
//! `count_tokens`, ...). Dicts are filled in first-seen order, which Python
//! dicts preserve.

use pyo3::prelude::*;
use pyo3::types::PyDict;
use subword_tokenizer::{Counts, PairCounts, SubwordSequence, Symbol, Tokenizer, END_OF_WORD};

// Import the trait for error conversion
use crate::error::IntoPyErr;

/// Python wrapper for the subword Tokenizer
#[pyclass(name = "Tokeniser")]
pub struct PyTokeniser {
    inner: Tokenizer,
}

fn to_sequences(subword_tokens: &[Vec<String>]) -> PyResult<Vec<SubwordSequence>> {
    subword_tokens
        .iter()
        .map(|symbols| SubwordSequence::from_strs(symbols.as_slice()).map_err(|e| e.into_py_err()))
        .collect()
}

fn from_sequences(sequences: &[SubwordSequence]) -> Vec<Vec<String>> {
    sequences
        .iter()
        .map(|sequence| sequence.iter().map(|s| s.to_string()).collect())
        .collect()
}

#[pymethods]
impl PyTokeniser {
    /// The end-of-word marker appended to every word
    #[classattr]
    const END_OF_WORD_SYMBOL: &'static str = END_OF_WORD;

    #[new]
    #[pyo3(signature = (parallel=false))]
    fn new(parallel: bool) -> PyResult<Self> {
        let inner = Tokenizer::builder()
            .parallel(parallel)
            .build()
            .map_err(|e| e.into_py_err())?;
        Ok(PyTokeniser { inner })
    }

    /// Lowercase, strip punctuation and split on whitespace
    fn tokenise(&self, text: &str) -> Vec<String> {
        self.inner.tokenize(text)
    }

    /// Count each token, in first-seen order
    fn count_tokens<'py>(&self, py: Python<'py>, tokens: Vec<String>) -> PyResult<Bound<'py, PyDict>> {
        let dict = PyDict::new_bound(py);
        for (token, n) in self.inner.count(tokens).iter() {
            dict.set_item(token.as_str(), n)?;
        }
        Ok(dict)
    }

    /// Sort a token-count dict into (token, count) tuples, most frequent first
    fn sort_vocab(&self, token_counts: &Bound<'_, PyDict>) -> PyResult<Vec<(String, u64)>> {
        let mut counts: Counts<String> = Counts::with_capacity(token_counts.len());
        for (token, n) in token_counts.iter() {
            counts.add_n(token.extract()?, n.extract()?);
        }
        Ok(self.inner.rank(&counts))
    }

    /// Split each token into characters followed by the end-of-word marker
    fn split_into_subwords(&self, tokens: Vec<String>) -> Vec<Vec<String>> {
        from_sequences(&self.inner.split_to_subwords(&tokens))
    }

    /// Count adjacent symbol pairs across all subword tokens
    ///
    /// Every subword token must be non-empty and end with `END_OF_WORD_SYMBOL`
    /// (possibly fused, e.g. `"t</w>"`); otherwise `ValueError` is raised.
    fn count_symbol_pairs<'py>(
        &self,
        py: Python<'py>,
        subword_tokens: Vec<Vec<String>>,
    ) -> PyResult<Bound<'py, PyDict>> {
        let sequences = to_sequences(&subword_tokens)?;
        let dict = PyDict::new_bound(py);
        for ((left, right), n) in self.inner.count_pairs(&sequences).iter() {
            dict.set_item((left.as_str(), right.as_str()), n)?;
        }
        Ok(dict)
    }

    /// Merge every non-overlapping occurrence of the most frequent pair
    ///
    /// Raises `ValueError` if a subword token is empty or does not end with
    /// `END_OF_WORD_SYMBOL`, or if `pair_counts` names a pair that never
    /// occurs in `subword_tokens`.
    fn merge_most_frequent_pair(
        &self,
        subword_tokens: Vec<Vec<String>>,
        pair_counts: &Bound<'_, PyDict>,
    ) -> PyResult<Vec<Vec<String>>> {
        let sequences = to_sequences(&subword_tokens)?;

        let mut counts = PairCounts::with_capacity(pair_counts.len());
        for (pair, n) in pair_counts.iter() {
            let (left, right): (String, String) = pair.extract()?;
            counts.add_n((Symbol::from(left), Symbol::from(right)), n.extract()?);
        }

        let outcome = self
            .inner
            .merge_best_pair_checked(&sequences, &counts)
            .map_err(|e| e.into_py_err())?;
        Ok(from_sequences(&outcome.sequences))
    }

    /// Get a string representation
    fn __repr__(&self) -> String {
        format!("Tokeniser(parallel={})", self.inner.merge_config().parallel)
    }
}
