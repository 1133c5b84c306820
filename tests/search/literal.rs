//! Literal substring search.

use crate::common::{fruit_engine, fruit_row};

#[test]
fn substring_any_column_case_insensitive() {
    let engine = fruit_engine();
    assert_eq!(engine.literal_search("APPLE"), ["a", "b", "d"]);
    assert_eq!(engine.literal_search("uth"), ["c"]);
}

#[test]
fn text_is_not_cleaned() {
    let mut engine = fruit_engine();
    engine.add_identifier(&fruit_row("e", "Pie, North-West", "west")).unwrap();
    assert_eq!(engine.literal_search("pie, north"), ["e"]);
    assert!(engine.literal_search("pie north-west").is_empty());
}

#[test]
fn cells_are_matched_separately() {
    assert!(fruit_engine().literal_search("pie north").is_empty());
}

#[test]
fn identifiers_are_not_searched() {
    let engine = fruit_engine();
    assert_eq!(engine.row("c").unwrap()["id"], "c");
    assert!(engine.literal_search("c").is_empty());
}
