use reduce_helper::{
    candidates, find_matches, find_matches_parallel, is_reducible, reduction_chain, remove_at,
    Dictionary,
};

fn startling() -> Dictionary {
    Dictionary::from_words([
        "STARTLING", "STARTING", "STARING", "STRING", "STING", "SING", "SIN", "IN", "I",
    ])
}

#[test]
fn single_letters() {
    let dict = Dictionary::default();
    assert!(is_reducible(&dict, "A"));
    assert!(is_reducible(&dict, "I"));
    for c in 'B'..='Z' {
        if c == 'I' {
            continue;
        }
        assert!(!is_reducible(&dict, &c.to_string()), "{c} should not reduce");
    }
}

#[test]
fn empty_word_is_not_reducible() {
    let dict = startling();
    assert!(!is_reducible(&dict, ""));
    assert_eq!(reduction_chain(&dict, ""), None);
}

#[test]
fn startling_reduces_to_i() {
    let dict = startling();
    assert!(is_reducible(&dict, "STARTLING"));
    let chain = reduction_chain(&dict, "STARTLING").unwrap();
    assert_eq!(
        chain,
        vec!["STARTLING", "STARTING", "STARING", "STRING", "STING", "SING", "SIN", "IN", "I"]
    );
}

#[test]
fn missing_eight_letter_word_breaks_the_chain() {
    let dict = Dictionary::from_words([
        "STARTLING", "STARING", "STRING", "STING", "SING", "SIN", "IN",
    ]);
    assert!(!is_reducible(&dict, "STARTLING"));
    assert!(find_matches(&dict).is_empty());
}

#[test]
fn empty_dictionary_has_no_matches() {
    let dict = Dictionary::default();
    assert!(find_matches(&dict).is_empty());
    assert!(find_matches_parallel(&dict).is_empty());
}

#[test]
fn dead_end_branch_is_skipped() {
    // Deleting the leading S gives TARTLING, which is valid but goes nowhere.
    let dict = Dictionary::from_words([
        "STARTLING", "TARTLING", "STARTING", "STARING", "STRING", "STING", "SING", "SIN", "IN",
    ]);
    assert!(!is_reducible(&dict, "TARTLING"));
    assert!(is_reducible(&dict, "STARTLING"));
    let chain = reduction_chain(&dict, "STARTLING").unwrap();
    assert_eq!(chain[1], "STARTING");
}

#[test]
fn words_without_a_or_i_are_never_candidates() {
    let dict = Dictionary::from_words(["STRUMPETS", "STRUMPET", "STARTLING"]);
    assert_eq!(candidates(&dict), vec!["STARTLING"]);
    assert!(!is_reducible(&dict, "STRUMPETS"));
}

#[test]
fn only_nine_letter_words_match() {
    // SPARKLING -> SPARKING -> SPARING -> SPRING -> SPRIG -> PRIG -> PIG -> PI -> I
    let mut words = vec![
        "SPARKLING", "SPARKING", "SPARING", "SPRING", "SPRIG", "PRIG", "PIG", "PI",
    ];
    words.extend([
        "STARTLING", "STARTING", "STARING", "STRING", "STING", "SING", "SIN", "IN",
    ]);
    let dict = Dictionary::from_words(words);
    assert_eq!(find_matches(&dict), vec!["SPARKLING", "STARTLING"]);
}

#[test]
fn parallel_search_agrees() {
    let dict = Dictionary::from_words([
        "SPARKLING", "SPARKING", "SPARING", "SPRING", "SPRIG", "PRIG", "PIG", "PI",
        "STARTLING", "STARTING", "STARING", "STRING", "STING", "SING", "SIN", "IN",
        "TRAMPOLES", "CLEANSING", "CLEANING",
    ]);
    assert_eq!(find_matches_parallel(&dict), find_matches(&dict));
}

#[test]
fn chain_steps_are_single_deletions() {
    let dict = startling();
    let chain = reduction_chain(&dict, "STARTLING").unwrap();
    for pair in chain.windows(2) {
        let (long, short) = (&pair[0], &pair[1]);
        assert_eq!(long.len(), short.len() + 1);
        assert!((0..long.len()).any(|i| remove_at(long, i) == *short));
    }
}
