use std::convert::Infallible;
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, Cursor};
use std::path::PathBuf;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use crate::dictionary::Dictionary;
use crate::error::ReduceError;

pub const DEFAULT_WORD_LIST_URL: &str =
    "https://raw.githubusercontent.com/nikiiv/JavaCodingTestOne/master/scrabble-words.txt";

/// The scrabble list opens with a title line and a blank line.
pub const DEFAULT_HEADER_LINES: usize = 2;

const FETCH_ATTEMPTS: usize = 5;

/// Where a word list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
    Stdin,
}

impl FromStr for Source {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "-" {
            Source::Stdin
        } else if s.starts_with("http://") || s.starts_with("https://") {
            Source::Url(s.to_string())
        } else {
            Source::File(PathBuf::from(s))
        })
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Url(url) => f.write_str(url),
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Stdin => f.write_str("-"),
        }
    }
}

pub fn retry_with_backoff<F, T, E>(mut f: F, max_attempts: usize) -> Result<T, E>
where
    F: FnMut() -> Result<T, E>,
    E: fmt::Display,
{
    let mut attempt = 1;
    loop {
        match f() {
            Ok(result) => return Ok(result),
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(e) => {
                // 50ms, 100ms, 200ms, 400ms, ...
                let delay = Duration::from_millis(50 * (1 << (attempt - 1)));
                log::warn!("attempt {attempt}/{max_attempts} failed: {e}; retrying in {delay:?}");
                thread::sleep(delay);
                attempt += 1;
            }
        }
    }
}

fn fetch(url: &str) -> Result<String, reqwest::Error> {
    retry_with_backoff(
        || reqwest::blocking::get(url)?.error_for_status()?.text(),
        FETCH_ATTEMPTS,
    )
}

/// Loads and normalizes a word list. An empty result is an error so the
/// search never runs against a truncated or blank download.
pub fn load(source: &Source, header_lines: usize) -> Result<Dictionary, ReduceError> {
    log::info!("loading word list from {source}");
    let dictionary = match source {
        Source::Url(url) => {
            let body = fetch(url)?;
            Dictionary::from_reader(Cursor::new(body), header_lines)?
        }
        Source::File(path) => {
            let file = File::open(path)?;
            Dictionary::from_reader(BufReader::new(file), header_lines)?
        }
        Source::Stdin => Dictionary::from_reader(io::stdin().lock(), header_lines)?,
    };
    if dictionary.is_empty() {
        return Err(ReduceError::EmptyDictionary(header_lines));
    }
    log::info!("loaded {} words", dictionary.len());
    Ok(dictionary)
}
