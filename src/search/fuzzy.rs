// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Multi-word fuzzy ranking.
//!
//! Single-word scores come first (see `single`). Then, for every query tuple of
//! two or more words, identifiers matching all of its words get a bonus of
//! `base_weight * len * (sum of their single-word scores)`, and the same bonus
//! again for each word order that appears verbatim in the row's `query_col`.
//! Orders are counted per permutation, so a tuple with a repeated word earns
//! the phrase bonus once for each of its identical orders.
//! A record containing `"apple pie"` therefore beats one containing `"apple"`
//! and `"pie"` apart, which beats one containing only `"apple"`.

use std::cmp::Reverse;
use std::collections::HashSet;

use itertools::Itertools;
use tracing::debug;

use crate::config::SearchConfig;
use crate::fuzzy::spellcheck::spell_check;
use crate::index::SearchIndex;
use crate::search::query::{build_queries, query_words, Query};
use crate::search::single::{search_size_1, WordScores};
use crate::table::RowTable;
use crate::util::counter::Counter;

/// Accumulated score per identifier for `text`. Empty when nothing matches.
pub fn fuzzy_scores(
    index: &SearchIndex,
    rows: &RowTable,
    text: &str,
    config: &SearchConfig,
) -> Counter<String> {
    let words = query_words(text.trim(), config);
    if words.is_empty() {
        return Counter::new();
    }

    let checked = spell_check(index, &words, config);
    let queries = build_queries(&checked);
    let original_words: HashSet<String> = words.iter().cloned().collect();

    let singles: Vec<&str> = queries
        .iter()
        .filter(|q| q.len() == 1)
        .map(|q| q[0].as_str())
        .collect();
    let mut scores = search_size_1(index, &singles, &original_words, config);

    let longest = queries.iter().map(Vec::len).max().unwrap_or(0);
    debug!(
        words = words.len(),
        queries = queries.len(),
        matched_words = scores.len(),
        "planned fuzzy query"
    );

    for size in 2..=longest {
        for query in queries.iter().filter(|q| q.len() == size) {
            if let Some(bonus) = combined_bonus(&scores, rows, query, config) {
                scores.entry(query.join(" ")).or_default().merge(bonus);
            }
        }
    }

    let mut total = Counter::new();
    for (_, counter) in scores {
        total.merge(counter);
    }
    total
}

/// Identifiers ordered by descending score, ties in row order.
pub fn rank(scores: &Counter<String>, rows: &RowTable) -> Vec<String> {
    let mut ranked: Vec<(&String, u64)> = scores.iter().map(|(id, &score)| (id, score)).collect();
    ranked.sort_by_key(|&(id, score)| (Reverse(score), rows.position(id).unwrap_or(usize::MAX)));
    ranked.into_iter().map(|(id, _)| id.clone()).collect()
}

/// Bonus for identifiers that match every word of `query`, or `None` when no
/// identifier does.
fn combined_bonus(
    scores: &WordScores,
    rows: &RowTable,
    query: &Query,
    config: &SearchConfig,
) -> Option<Counter<String>> {
    let per_word: Vec<&Counter<String>> = query
        .iter()
        .map(|word| scores.get(word.as_str()))
        .collect::<Option<_>>()?;

    // Iterate the smallest posting set, probe the rest.
    let (smallest, _) = per_word.iter().enumerate().min_by_key(|(_, c)| c.len())?;
    let shared: Vec<(&String, u64)> = per_word[smallest]
        .keys()
        .filter(|id| per_word.iter().all(|c| c.contains_key(id.as_str())))
        .map(|id| (id, per_word.iter().map(|c| c.get(id.as_str())).sum()))
        .collect();
    if shared.is_empty() {
        return None;
    }

    let weight = config.base_weight * query.len() as u64;
    let phrases: Vec<String> = query
        .iter()
        .permutations(query.len())
        .map(|order| order.into_iter().join(" "))
        .collect();

    let mut bonus = Counter::new();
    for (id, summed) in shared {
        let step = weight * summed;
        let adjacent = rows.get(id).map_or(0, |row| {
            phrases
                .iter()
                .filter(|phrase| row.query_col.contains(phrase.as_str()))
                .count() as u64
        });
        bonus.add(id.clone(), step * (1 + adjacent));
    }
    Some(bonus)
}
