// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Literal search: case-insensitive substring over the original cells.
//!
//! No cleaning, no tokenization. `"pie, n"` only matches a cell that contains
//! exactly that text (ignoring case). Use this when the user pastes a code or
//! a fragment of a value; use the fuzzy path for everything else.

use crate::table::RowTable;

/// Identifiers whose searchable cells contain `text`, ignoring case.
///
/// With `restrict`, only those identifiers are tested and the result follows
/// their order; unknown identifiers are skipped. Otherwise every row is tested
/// in insertion order. Empty `text` matches every tested row.
pub fn literal_search(rows: &RowTable, text: &str, restrict: Option<&[String]>) -> Vec<String> {
    let needle = text.to_lowercase();
    match restrict {
        Some(ids) => ids
            .iter()
            .filter_map(|id| rows.get(id))
            .filter(|row| rows.any_searchable_contains(row, &needle))
            .map(|row| row.id.clone())
            .collect(),
        None => rows
            .iter()
            .filter(|row| rows.any_searchable_contains(row, &needle))
            .map(|row| row.id.clone())
            .collect(),
    }
}
