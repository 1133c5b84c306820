//! Shared test utilities and fixtures.

#![allow(dead_code)]

use rowsearch::{SearchConfig, SearchEngine, Table};

// ============================================================================
// FIXTURES
// ============================================================================

/// The four-row fruit table: `(id, name, location)`.
pub const FRUIT_ROWS: [[&str; 3]; 4] = [
    ["a", "apple pie", "north"],
    ["b", "apple tart", "north"],
    ["c", "banana pie", "south"],
    ["d", "pineapple", "north"],
];

pub fn fruit_table() -> Table {
    Table::from_rows(["id", "name", "location"], FRUIT_ROWS).expect("fruit table")
}

/// Engine over the fruit table, searching `name` and `location`.
pub fn fruit_engine() -> SearchEngine {
    SearchEngine::new(&fruit_table(), "id", &["name", "location"]).expect("fruit engine")
}

pub fn fruit_engine_with(config: SearchConfig) -> SearchEngine {
    SearchEngine::with_config(&fruit_table(), "id", &["name", "location"], config)
        .expect("fruit engine")
}

/// Single-row table with the fruit schema.
pub fn fruit_row(id: &str, name: &str, location: &str) -> Table {
    Table::from_rows(["id", "name", "location"], [[id, name, location]]).expect("fruit row")
}

/// Engine over `(id, text)` rows with a single `text` column.
pub fn text_engine(rows: &[(String, String)]) -> SearchEngine {
    let table = Table::from_rows(
        ["id", "text"],
        rows.iter().map(|(id, text)| [id.clone(), text.clone()]),
    )
    .expect("text table");
    SearchEngine::new(&table, "id", &[]).expect("text engine")
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert every index and row invariant holds.
pub fn assert_engine_well_formed(engine: &SearchEngine) {
    if let Err(violation) = engine.verify() {
        panic!("engine invariant violated: {violation}");
    }
}

/// Assert `ids` starts with `prefix`.
pub fn assert_starts_with(ids: &[String], prefix: &[&str]) {
    assert!(
        ids.len() >= prefix.len() && ids.iter().zip(prefix).all(|(id, want)| id == want),
        "expected results to start with {prefix:?}, got {ids:?}"
    );
}

pub fn strings(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}
