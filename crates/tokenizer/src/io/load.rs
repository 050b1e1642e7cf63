//! Loading raw text for tokenization.
//!
//! Reads corpora from files or standard input. Nothing is ever written back;
//! the tokenizer keeps no on-disk model.

use std::io::Read;
use std::path::{Path, PathBuf};
use subword_core::{Result, TokenizerError};

/// Source name that selects standard input.
pub const STDIN_SOURCE: &str = "-";

/// Text loader - reads the raw text handed to the tokenizer.
pub struct TextLoader;

impl TextLoader {
    /// Read a UTF-8 text file.
    pub fn load(path: &Path) -> Result<String> {
        let text = std::fs::read_to_string(path).map_err(|err| TokenizerError::Io {
            path: path.to_path_buf(),
            err,
        })?;

        log::debug!("read {} bytes from {}", text.len(), path.display());
        Ok(text)
    }

    /// Read all of standard input.
    pub fn load_stdin() -> Result<String> {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|err| TokenizerError::Io {
                path: PathBuf::from("<stdin>"),
                err,
            })?;

        log::debug!("read {} bytes from stdin", buffer.len());
        Ok(buffer)
    }

    /// Read from `source`, treating [`STDIN_SOURCE`] as standard input.
    pub fn load_source(source: &str) -> Result<String> {
        if source == STDIN_SOURCE {
            Self::load_stdin()
        } else {
            Self::load(Path::new(source))
        }
    }
}
