// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel text cleaning.
//!
//! Cleaning is regex-heavy and independent per row, so large batches are split
//! into chunks of `chunk_rows` and cleaned on the rayon pool. Chunk results are
//! concatenated in order, so the output lines up with the input row for row.
//! Small batches, single-threaded pools and builds without the `parallel`
//! feature take the sequential path; both paths produce identical output.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use crate::util::normalize::clean_text;

/// Clean every raw text, preserving order.
pub fn clean_texts(raw: &[String], chunk_rows: usize) -> Vec<String> {
    let chunk_rows = chunk_rows.max(1);

    #[cfg(feature = "parallel")]
    {
        if rayon::current_num_threads() > 1 && raw.len() >= 2 * chunk_rows {
            debug!(
                rows = raw.len(),
                chunks = raw.len().div_ceil(chunk_rows),
                threads = rayon::current_num_threads(),
                "cleaning rows in parallel"
            );
            let chunks: Vec<Vec<String>> = raw
                .par_chunks(chunk_rows)
                .map(|chunk| chunk.iter().map(|text| clean_text(text)).collect())
                .collect();
            return chunks.into_iter().flatten().collect();
        }
    }

    debug!(rows = raw.len(), "cleaning rows");
    raw.iter().map(|text| clean_text(text)).collect()
}
