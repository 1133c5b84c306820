// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Single-word scoring.
//!
//! A query word matches every indexed word that contains it as a substring,
//! so `"apple"` finds `"pineapple"` too. Each match contributes
//! `weight * occurrences` to every identifier in that word's posting list:
//!
//! ```text
//! weight = base_weight
//!        + original_word_boost   if the indexed word was typed by the user
//!        + exact_word_boost      if the indexed word equals the query word
//! ```

use std::collections::{HashMap, HashSet};

use crate::config::SearchConfig;
use crate::index::SearchIndex;
use crate::util::counter::Counter;

/// Per-query-word scores: `query word -> identifier -> score`.
pub type WordScores = HashMap<String, Counter<String>>;

/// Score length-1 queries against the vocabulary.
///
/// `original_words` are the cleaned words the user typed, before spelling
/// alternatives were added. Query words that match nothing get no entry.
pub fn search_size_1(
    index: &SearchIndex,
    query_words: &[&str],
    original_words: &HashSet<String>,
    config: &SearchConfig,
) -> WordScores {
    let mut matched: HashMap<&str, Vec<&str>> = HashMap::new();
    for indexed in index.words() {
        for &query_word in query_words {
            if indexed.contains(query_word) {
                matched.entry(query_word).or_default().push(indexed);
            }
        }
    }

    let mut scores = WordScores::new();
    for (query_word, indexed_words) in matched {
        let counter = scores.entry(query_word.to_string()).or_default();
        for indexed in indexed_words {
            let mut weight = config.base_weight;
            if original_words.contains(indexed) {
                weight += config.original_word_boost;
            }
            if indexed == query_word {
                weight += config.exact_word_boost;
            }
            if let Some(postings) = index.postings(indexed) {
                for (id, &count) in postings {
                    counter.add(id.clone(), weight * count);
                }
            }
        }
    }
    scores
}
