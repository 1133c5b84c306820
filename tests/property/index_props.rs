//! Index invariants under random mutation sequences.
//!
//! After every operation the four maps must stay transposes of each other,
//! hold no zero counts, share one vocabulary, and agree with each row's
//! `query_col`.

use proptest::prelude::*;
use rowsearch::{SearchEngine, Table};

use crate::common::{assert_engine_well_formed, text_engine};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Small vocabulary so rows share words and q-grams.
fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "apple", "pie", "tart", "north", "south", "banana", "pineapple", "a", "pi",
        ])
        .prop_map(str::to_string),
        prop::string::string_regex("[a-e]{1,6}").unwrap(),
    ]
}

/// Row text with occasional punctuation and case noise.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (word_strategy(), prop::sample::select(vec!["", ",", ".", "(", "-"]), any::<bool>()),
        0..6,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(word, punct, upper)| {
                let word = if upper { word.to_uppercase() } else { word };
                if punct == "(" {
                    format!("({word}")
                } else {
                    format!("{word}{punct}")
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    })
}

fn rows_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(text_strategy(), 0..8).prop_map(|texts| {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| (format!("r{i}"), text))
            .collect()
    })
}

#[derive(Debug, Clone)]
enum Op {
    Add(String),
    Remove(usize),
    Change(usize, String),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        text_strategy().prop_map(Op::Add),
        any::<usize>().prop_map(Op::Remove),
        (any::<usize>(), text_strategy()).prop_map(|(i, t)| Op::Change(i, t)),
    ]
}

fn single_row(id: &str, text: &str) -> Table {
    Table::from_rows(["id", "text"], [[id, text]]).unwrap()
}

fn apply(engine: &mut SearchEngine, op: &Op, next_id: &mut usize) {
    let ids = engine.identifiers();
    match op {
        Op::Add(text) => {
            let id = format!("n{next_id}");
            *next_id += 1;
            engine.add_identifier(&single_row(&id, text)).unwrap();
        }
        Op::Remove(i) if !ids.is_empty() => {
            engine.remove_identifier(&ids[i % ids.len()]).unwrap();
        }
        Op::Change(i, text) if !ids.is_empty() => {
            let patch = Table::from_rows(["text"], [[text.as_str()]]).unwrap();
            engine.change_identifier(&ids[i % ids.len()], &patch).unwrap();
        }
        _ => {}
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: invariants hold after construction and every mutation.
    #[test]
    fn prop_invariants_hold_under_mutation(
        rows in rows_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..12),
    ) {
        let mut engine = text_engine(&rows);
        assert_engine_well_formed(&engine);

        let mut next_id = 0;
        for op in &ops {
            apply(&mut engine, op, &mut next_id);
            assert_engine_well_formed(&engine);
        }
    }

    /// Property: adding a row and removing it restores the index exactly.
    #[test]
    fn prop_add_remove_roundtrip(rows in rows_strategy(), text in text_strategy()) {
        let mut engine = text_engine(&rows);
        let before = engine.index().clone();
        let ids_before = engine.identifiers();

        engine.add_identifier(&single_row("fresh", &text)).unwrap();
        engine.remove_identifier("fresh").unwrap();

        prop_assert_eq!(engine.index(), &before);
        prop_assert_eq!(engine.identifiers(), ids_before);
    }

    /// Property: an empty query lists every identifier in row order.
    #[test]
    fn prop_empty_search_is_row_order(
        rows in rows_strategy(),
        ops in prop::collection::vec(op_strategy(), 0..6),
    ) {
        let mut engine = text_engine(&rows);
        let mut next_id = 0;
        for op in &ops {
            apply(&mut engine, op, &mut next_id);
        }
        prop_assert_eq!(engine.search(""), engine.identifiers());
    }

    /// Property: search returns each identifier at most once, all of them known.
    #[test]
    fn prop_search_results_are_distinct_rows(
        rows in rows_strategy(),
        query in text_strategy(),
    ) {
        let engine = text_engine(&rows);
        let results = engine.search(&query);
        let mut seen = std::collections::HashSet::new();
        for id in &results {
            prop_assert!(seen.insert(id.clone()), "duplicate {}", id);
            prop_assert!(engine.row(id).is_some());
        }
    }

    /// Property: every indexed word is findable, and finds its own rows.
    #[test]
    fn prop_indexed_words_are_found(rows in rows_strategy()) {
        let engine = text_engine(&rows);
        for word in engine.index().words() {
            prop_assert!(engine.word_in_index(word).unwrap());
            let results = engine.fuzzy_search(word);
            for id in engine.index().postings(word).unwrap().keys() {
                prop_assert!(results.contains(id), "{} missing for '{}'", id, word);
            }
        }
    }
}
