// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain-text output for the rowsearch CLI.
//!
//! Output is meant for pipelines: one record per line, tab-separated fields,
//! no color and no decoration.

use std::fmt::Write;

use rowsearch::{Counter, IndexStats, SearchEngine, SpellCheck};

/// One identifier per line.
pub fn format_ids(ids: &[String]) -> String {
    ids.iter().fold(String::new(), |mut out, id| {
        let _ = writeln!(out, "{id}");
        out
    })
}

/// `id<TAB>score` per line, in ranked order.
pub fn format_scores(ranked: &[String], scores: &Counter<String>) -> String {
    ranked.iter().fold(String::new(), |mut out, id| {
        let _ = writeln!(out, "{id}\t{}", scores.get(id.as_str()));
        out
    })
}

/// `word<TAB>alt1,alt2,...` per query word; words without alternatives show `-`.
pub fn format_spell_check(checked: &SpellCheck) -> String {
    checked
        .iter()
        .fold(String::new(), |mut out, (word, alternatives)| {
            let alternatives = if alternatives.is_empty() {
                "-".to_string()
            } else {
                alternatives.join(",")
            };
            let _ = writeln!(out, "{word}\t{alternatives}");
            out
        })
}

/// `key<TAB>value` per statistic.
pub fn format_stats(engine: &SearchEngine, stats: &IndexStats) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "rows\t{}", stats.rows);
    let _ = writeln!(out, "columns\t{}", engine.columns().join(","));
    let _ = writeln!(out, "searchable\t{}", engine.searchable_columns().join(","));
    let _ = writeln!(out, "words\t{}", stats.words);
    let _ = writeln!(out, "qgrams\t{}", stats.qgrams);
    let _ = writeln!(out, "size\t{}", engine.size_of_index());
    out
}
