//! Error types for loading and indexing the summarization dataset.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong between the raw JSONL file and a
/// ready-to-batch dataset. None of these are recovered from: the load
/// either succeeds completely or returns one of these.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A reserved token such as `[PAD]` is absent from the vocabulary.
    #[error("special token '{0}' is missing from the vocabulary")]
    MissingSpecialToken(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Line numbers are 1-based, matching what an editor shows.
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    #[error("index {index} out of range for dataset of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;
