//! The recursive reducibility check and the search over the dictionary.
//!
//! A word reduces when deleting one of its letters yields a valid word that
//! itself reduces, bottoming out at one of [`TERMINALS`]. Deletion positions
//! are tried in ascending order and the first success wins, so the chain
//! returned by [`reduction_chain`] is reproducible for a given dictionary.

use rayon::prelude::*;

use crate::dictionary::Dictionary;
use crate::{CANDIDATE_LEN, TERMINALS};

pub fn is_terminal(word: &str) -> bool {
    TERMINALS.contains(&word)
}

fn is_valid_step(dictionary: &Dictionary, word: &str) -> bool {
    is_terminal(word) || dictionary.contains(word)
}

/// `word` with the character at `index` deleted. Out-of-range indexes leave it unchanged.
pub fn remove_at(word: &str, index: usize) -> String {
    word.chars()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, c)| c)
        .collect()
}

// Deletion never introduces letters, so a word without A or I can't end on a terminal.
fn may_reduce(word: &str) -> bool {
    word.contains('A') || word.contains('I')
}

/// True iff a reduction chain exists from `word` down to "A" or "I".
///
/// An empty word is never reducible.
pub fn is_reducible(dictionary: &Dictionary, word: &str) -> bool {
    let len = word.chars().count();
    match len {
        0 => false,
        1 => is_terminal(word),
        _ => (0..len).any(|i| {
            let next = remove_at(word, i);
            is_valid_step(dictionary, &next) && is_reducible(dictionary, &next)
        }),
    }
}

/// The first chain found by ascending-index descent, `word` first and the
/// terminal last, or `None` when `word` is not reducible.
pub fn reduction_chain(dictionary: &Dictionary, word: &str) -> Option<Vec<String>> {
    let len = word.chars().count();
    match len {
        0 => None,
        1 => is_terminal(word).then(|| vec![word.to_string()]),
        _ => (0..len).find_map(|i| {
            let next = remove_at(word, i);
            if !is_valid_step(dictionary, &next) {
                return None;
            }
            let mut chain = reduction_chain(dictionary, &next)?;
            chain.insert(0, word.to_string());
            Some(chain)
        }),
    }
}

/// Nine-letter dictionary words that pass the A/I pre-filter, sorted.
pub fn candidates(dictionary: &Dictionary) -> Vec<&str> {
    let mut out: Vec<&str> = dictionary
        .words_of_len(CANDIDATE_LEN)
        .filter(|w| may_reduce(w))
        .collect();
    out.sort_unstable();
    out
}

/// Every reducible nine-letter word, in lexicographic order.
pub fn find_matches(dictionary: &Dictionary) -> Vec<String> {
    let cands = candidates(dictionary);
    log::debug!("checking {} candidates", cands.len());
    let matches: Vec<String> = cands
        .into_iter()
        .filter(|w| is_reducible(dictionary, w))
        .map(str::to_owned)
        .collect();
    log::debug!("{} matches", matches.len());
    matches
}

/// Same result as [`find_matches`], with candidates checked on the rayon pool.
pub fn find_matches_parallel(dictionary: &Dictionary) -> Vec<String> {
    let cands = candidates(dictionary);
    log::debug!(
        "checking {} candidates on {} threads",
        cands.len(),
        rayon::current_num_threads()
    );
    let matches: Vec<String> = cands
        .par_iter()
        .filter(|w| is_reducible(dictionary, w))
        .map(|w| (*w).to_owned())
        .collect();
    log::debug!("{} matches", matches.len());
    matches
}
