//! Spelling alternatives through the engine.

use crate::common::{fruit_engine, text_engine};

#[test]
fn exact_words_have_no_alternatives() {
    let checked = fruit_engine().spell_check("apple pie");
    assert_eq!(checked.len(), 2);
    assert!(checked.iter().all(|(_, alternatives)| alternatives.is_empty()));
}

#[test]
fn typos_get_indexed_words() {
    let checked = fruit_engine().spell_check("appel nroth");
    assert_eq!(checked[0], ("appel".to_string(), vec!["apple".to_string()]));
    assert_eq!(checked[1], ("nroth".to_string(), vec!["north".to_string()]));
}

#[test]
fn query_words_are_cleaned_before_checking() {
    let checked = fruit_engine().spell_check("  APPEL, ");
    assert_eq!(checked, vec![("appel".to_string(), vec!["apple".to_string()])]);
}

#[test]
fn frequent_alternatives_come_first() {
    let engine = text_engine(&[
        ("1".into(), "cart".into()),
        ("2".into(), "tart".into()),
        ("3".into(), "tart".into()),
    ]);
    let checked = engine.spell_check("dart");
    assert_eq!(checked[0].1, ["tart", "cart"]);
}

#[test]
fn alternatives_are_capped() {
    let rows: Vec<(String, String)> = "bat cat eat fat gat hat kat lat mat nat oat pat rat sat"
        .split(' ')
        .enumerate()
        .map(|(i, word)| (i.to_string(), word.to_string()))
        .collect();
    let engine = text_engine(&rows);
    let checked = engine.spell_check("vat");
    assert_eq!(checked[0].1.len(), engine.config().matches_max);
}
