// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query planning: words in, word tuples out.
//!
//! A query of `n` distinct words expands to every order-preserving
//! combination of them (`2^n - 1` tuples), and each tuple again with any one
//! position swapped for a spelling alternative. The ranker scores length-1
//! tuples directly against the vocabulary and uses longer tuples to reward
//! records that contain several query words at once.

use std::collections::HashSet;

use itertools::Itertools;
use tracing::debug;

use crate::config::SearchConfig;
use crate::fuzzy::spellcheck::SpellCheck;
use crate::util::normalize::{clean_text, split_words};

/// A candidate query: an ordered tuple of words.
pub type Query = Vec<String>;

/// Distinct cleaned words of `text`, in order of first appearance.
///
/// At most `max_query_words` are kept; expansion is exponential in this.
pub fn query_words(text: &str, config: &SearchConfig) -> Vec<String> {
    let cleaned = clean_text(text);
    let mut seen: HashSet<&str> = HashSet::new();
    let mut words: Vec<String> = split_words(&cleaned)
        .filter(|w| seen.insert(w))
        .map(str::to_string)
        .collect();

    if words.len() > config.max_query_words {
        debug!(
            kept = config.max_query_words,
            dropped = words.len() - config.max_query_words,
            "truncating long query"
        );
        words.truncate(config.max_query_words);
    }
    words
}

/// Expand checked words into candidate queries.
///
/// Every non-empty, order-preserving combination of the words, plus each
/// combination with one position replaced by one of that word's
/// alternatives. Duplicates are dropped, first occurrence wins.
pub fn build_queries(checked: &SpellCheck) -> Vec<Query> {
    let mut seen: HashSet<Query> = HashSet::new();
    let mut queries: Vec<Query> = Vec::new();
    let mut push = |query: Query| {
        if seen.insert(query.clone()) {
            queries.push(query);
        }
    };

    for size in 1..=checked.len() {
        for combination in checked.iter().combinations(size) {
            let base: Query = combination.iter().map(|(word, _)| word.clone()).collect();
            push(base.clone());

            for (position, (_, alternatives)) in combination.iter().enumerate() {
                for alternative in alternatives {
                    let mut variant = base.clone();
                    variant[position] = alternative.clone();
                    push(variant);
                }
            }
        }
    }

    queries
}
