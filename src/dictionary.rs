use std::collections::HashSet;
use std::io::BufRead;

use sha2::{Digest, Sha256};

use crate::error::ReduceError;

/// Immutable set of valid words, uppercase, length >= 2.
///
/// The one-letter terminals are deliberately not stored here; see
/// [`crate::is_terminal`].
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

fn normalize(raw: &str) -> Option<String> {
    let w = raw.trim();
    if w.len() < 2 || !w.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(w.to_ascii_uppercase())
}

impl Dictionary {
    /// Builds a dictionary, dropping entries that are not plain words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| normalize(w.as_ref()))
            .collect();
        Self { words }
    }

    /// Reads one word per line after skipping `header_lines` lines.
    pub fn from_reader<R: BufRead>(reader: R, header_lines: usize) -> Result<Self, ReduceError> {
        let mut words = HashSet::new();
        let mut seen = 0usize;
        for line in reader.lines().skip(header_lines) {
            let line = line?;
            seen += 1;
            if let Some(w) = normalize(&line) {
                words.insert(w);
            }
        }
        log::debug!("read {} lines, kept {} words", seen, words.len());
        Ok(Self { words })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    pub fn words_of_len(&self, len: usize) -> impl Iterator<Item = &str> {
        self.iter().filter(move |w| w.len() == len)
    }

    /// Hex SHA-256 of the sorted word list. Independent of insertion order.
    pub fn fingerprint(&self) -> String {
        let mut sorted: Vec<&str> = self.iter().collect();
        sorted.sort_unstable();
        let mut hasher = Sha256::new();
        for w in sorted {
            hasher.update(w.as_bytes());
            hasher.update(b"\n");
        }
        hex::encode(hasher.finalize())
    }
}
