//! End-to-end scenarios over the four-row fruit table.

use crate::common::{assert_starts_with, fruit_engine};

#[test]
fn phrase_match_comes_first() {
    // "a" contains "apple pie" literally; the rest follow by fuzzy score.
    assert_eq!(fruit_engine().search("apple pie"), ["a", "b", "c", "d"]);
}

#[test]
fn typo_is_corrected() {
    let results = fruit_engine().search("appel");
    assert_starts_with(&results, &["a", "b"]);
    assert!(results.contains(&"d".to_string()));
    assert!(!results.contains(&"c".to_string()));
}

#[test]
fn empty_query_returns_rows_in_order() {
    let engine = fruit_engine();
    assert_eq!(engine.search(""), ["a", "b", "c", "d"]);
    assert_eq!(engine.search(" \t "), ["a", "b", "c", "d"]);
}

#[test]
fn unmatched_query_returns_nothing() {
    let engine = fruit_engine();
    assert!(engine.search("zzzz").is_empty());
    assert!(engine.fuzzy_search("qqqq xxxx").is_empty());
}

#[test]
fn punctuation_and_case_are_ignored_by_fuzzy_search() {
    let engine = fruit_engine();
    assert_eq!(engine.fuzzy_search("APPLE, (pie)"), engine.fuzzy_search("apple pie"));
}

#[test]
fn search_is_deterministic() {
    let engine = fruit_engine();
    let first = engine.search("pie north");
    for _ in 0..5 {
        assert_eq!(engine.search("pie north"), first);
    }
}
