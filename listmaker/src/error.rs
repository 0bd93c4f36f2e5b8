//! Error taxonomy for list operations and interactive input.
//!
//! Invalid user input never shows up here: the input reader rejects it,
//! prints a diagnostic and asks again.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ListError {
    /// The list file to open does not exist.
    #[error("list file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Reading, deleting or writing a list file failed.
    #[error("list file io failed for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A 1-based delete index outside `1..=len`.
    #[error("index {index} out of range [1-{len}]")]
    IndexOutOfRange { index: usize, len: usize },

    /// Input stream closed while a prompt was waiting for an answer.
    #[error("end of input")]
    EndOfInput,

    /// A console input pattern failed to compile.
    #[error("invalid input pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Reading the console or writing prompts and diagnostics failed.
    #[error("console io failed: {0}")]
    Console(#[from] io::Error),
}

impl ListError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type ListResult<T> = Result<T, ListError>;
