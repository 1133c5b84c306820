// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts between the row store and the index.
//!
//! `SearchIndex::verify` checks the index against itself. The checks here tie
//! it to the rows it was built from:
//!
//! 1. **ROW_TOKENS**: `identifier_to_word[id]` is exactly the token multiset of
//!    row `id`'s `query_col` (absent when the row has no words)
//! 2. **NO_ORPHANS**: every indexed identifier is a stored row
//!
//! `verify_rows` returns the first violation. `check_engine_consistent` runs
//! everything under `debug_assert!` and is a no-op in release builds.
//!
//! # Usage
//!
//! ```ignore
//! // After every mutation, in debug builds:
//! check_engine_consistent(&rows, &index);
//! ```

use crate::error::InvariantError;
use crate::index::SearchIndex;
use crate::table::RowTable;
use crate::util::counter::Counter;
use crate::util::normalize::split_words;

/// Check that the index agrees with the stored rows.
pub fn verify_rows(rows: &RowTable, index: &SearchIndex) -> Result<(), InvariantError> {
    for row in rows.iter() {
        let expected: Counter<String> =
            Counter::from_keys(split_words(&row.query_col).map(str::to_string));
        let matches = match index.words_of(&row.id) {
            Some(indexed) => *indexed == expected,
            None => expected.is_empty(),
        };
        if !matches {
            return Err(InvariantError::RowTokensMismatch { id: row.id.clone() });
        }
    }

    if let Some(orphan) = index.identifiers().find(|id| !rows.contains(id)) {
        return Err(InvariantError::OrphanIdentifier {
            id: orphan.to_string(),
        });
    }
    Ok(())
}

/// Check every index and row invariant.
///
/// # Panics (debug builds only)
/// Panics with the first violation found.
#[inline]
pub fn check_engine_consistent(rows: &RowTable, index: &SearchIndex) {
    if cfg!(debug_assertions) {
        let result = index.verify().and_then(|()| verify_rows(rows, index));
        debug_assert!(
            result.is_ok(),
            "Contract violation: {}",
            result.err().map(|e| e.to_string()).unwrap_or_default()
        );
    }
}
