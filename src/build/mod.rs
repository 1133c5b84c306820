// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Applying a validated batch of rows to the row store and the index.
//!
//! Validation happens in [`RowTable::prepare`]; once a batch gets here nothing
//! can fail, so a mutation either fully lands or never starts.

pub mod parallel;

pub use parallel::clean_texts;

use tracing::debug;

use crate::config::SearchConfig;
use crate::index::SearchIndex;
use crate::table::{PendingBatch, RowTable};

/// Clean the batch's searchable text, index it and store the rows.
pub(crate) fn apply_batch(
    rows: &mut RowTable,
    index: &mut SearchIndex,
    batch: PendingBatch,
    config: &SearchConfig,
) {
    let raw: Vec<String> = batch.rows.iter().map(|(_, _, raw)| raw.clone()).collect();
    let cleaned = clean_texts(&raw, config.parallel_chunk_rows);

    index.update(
        batch
            .rows
            .iter()
            .map(|(id, _, _)| id.clone())
            .zip(cleaned.iter().cloned()),
    );
    debug!(
        rows = batch.rows.len(),
        new_columns = batch.new_columns.len(),
        words = index.word_count(),
        "applied batch"
    );
    rows.commit(batch, cleaned);
}
