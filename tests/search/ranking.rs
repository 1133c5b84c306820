//! Score arithmetic and tie-breaking.

use crate::common::{fruit_engine, fruit_engine_with, strings, text_engine};
use rowsearch::SearchConfig;

#[test]
fn single_word_weights() {
    let scores = fruit_engine().fuzzy_search_scores("apple");
    // base 10 + original 5 + exact 1 for "apple"; base only for "pineapple".
    assert_eq!(scores.get("a"), 16);
    assert_eq!(scores.get("b"), 16);
    assert_eq!(scores.get("d"), 10);
    assert!(!scores.contains_key("c"));
}

#[test]
fn combined_words_outrank_single_words() {
    let scores = fruit_engine().fuzzy_search_scores("apple pie");
    // 16 + 16, then 20 * 32 for matching both, then 20 * 32 again for the
    // adjacent phrase in its query_col.
    assert_eq!(scores.get("a"), 1312);
    assert_eq!(scores.get("b"), 16);
    assert_eq!(scores.get("c"), 16);
}

#[test]
fn word_order_does_not_change_scores() {
    let engine = fruit_engine();
    assert_eq!(
        engine.fuzzy_search_scores("pie apple"),
        engine.fuzzy_search_scores("apple pie")
    );
}

#[test]
fn ties_keep_row_order() {
    let engine = text_engine(&[
        ("z".into(), "red apple".into()),
        ("y".into(), "green apple".into()),
        ("x".into(), "apple".into()),
    ]);
    assert_eq!(engine.fuzzy_search("apple"), strings(&["z", "y", "x"]));
}

#[test]
fn repeated_words_score_higher() {
    let engine = text_engine(&[
        ("once".into(), "pie".into()),
        ("twice".into(), "pie and pie".into()),
    ]);
    assert_eq!(engine.fuzzy_search("pie"), strings(&["twice", "once"]));
}

#[test]
fn weights_come_from_config() {
    let config = SearchConfig {
        base_weight: 1,
        original_word_boost: 0,
        exact_word_boost: 0,
        ..SearchConfig::default()
    };
    let scores = fruit_engine_with(config).fuzzy_search_scores("apple");
    assert_eq!(scores.get("a"), 1);
    assert_eq!(scores.get("d"), 1);
}

#[test]
fn long_queries_are_capped() {
    let config = SearchConfig {
        max_query_words: 1,
        ..SearchConfig::default()
    };
    let engine = fruit_engine_with(config);
    // Only "banana" survives; "apple" is dropped.
    assert_eq!(engine.fuzzy_search("banana apple"), strings(&["c"]));
}

#[test]
fn repeated_word_tuple_counts_every_matching_order() {
    let engine = text_engine(&[
        ("x".into(), "apple apple".into()),
        ("y".into(), "apple".into()),
    ]);
    // "appel" corrects to "apple", giving the tuple ("apple", "apple").
    // x: 2 * 16 for the word, then 20 * 64 for matching both positions,
    // then 20 * 64 for each of the two identical orders found in query_col.
    // y: 16, then 20 * 32, and no phrase.
    let scores = engine.fuzzy_search_scores("appel apple");
    assert_eq!(scores.get("x"), 3872);
    assert_eq!(scores.get("y"), 656);
    assert_eq!(engine.fuzzy_search("appel apple"), strings(&["x", "y"]));
}

#[test]
fn ranking_a_score_bag_matches_fuzzy_search() {
    let engine = fruit_engine();
    let scores = engine.fuzzy_search_scores("apple pie");
    assert_eq!(engine.rank_scores(&scores), engine.fuzzy_search("apple pie"));
    assert_eq!(engine.rank_scores(&scores), strings(&["a", "b", "c", "d"]));
}
