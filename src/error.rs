use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReduceError {
    /// Propagated I/O error while reading a word list.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP failure fetching a remote word list.
    #[error("fetch error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Nothing usable survived normalization.
    #[error("word list has no valid words after skipping {0} header lines")]
    EmptyDictionary(usize),

    /// A worker was handed a word list other than the one the driver expected.
    #[error("word list hash mismatch: expected {expected}, got {actual}")]
    HashMismatch { expected: String, actual: String },
}
