//! Finds nine-letter words that shrink one letter at a time, through valid
//! words only, down to "A" or "I".

pub mod dictionary;
pub mod error;
pub mod protocol;
pub mod reduce;
pub mod source;

pub use dictionary::Dictionary;
pub use error::ReduceError;
pub use reduce::{
    candidates, find_matches, find_matches_parallel, is_reducible, is_terminal, reduction_chain,
    remove_at,
};
pub use source::{load, Source, DEFAULT_HEADER_LINES, DEFAULT_WORD_LIST_URL};

/// Length of the words the search starts from.
pub const CANDIDATE_LEN: usize = 9;

/// The only valid one-letter words.
pub const TERMINALS: [&str; 2] = ["A", "I"];
