// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Q-grams and q-gram candidate generation.
//!
//! Spell correction needs a cheap way to shrink the vocabulary before running
//! edit distance. Two words within a couple of edits share most of their
//! bigrams, so we score every word by how many of the query's bigrams it
//! contains and keep only the strong ones.

use std::collections::HashSet;

use crate::config::{SearchConfig, QGRAM_SIZE};
use crate::index::SearchIndex;
use crate::util::counter::Counter;

/// Positional list of `QGRAM_SIZE`-char windows over `word`.
///
/// Words of at most `QGRAM_SIZE` chars yield a single q-gram: the word itself.
pub fn qgrams(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() <= QGRAM_SIZE {
        return vec![word.to_string()];
    }
    chars
        .windows(QGRAM_SIZE)
        .map(|window| window.iter().collect())
        .collect()
}

/// Bag of q-grams for one word (positions dropped).
pub fn qgram_counter(word: &str) -> Counter<String> {
    Counter::from_keys(qgrams(word))
}

/// Words sharing enough q-grams with `word`, best first.
///
/// A candidate's score is the sum of its frequencies for each distinct query
/// q-gram it contains. With `max_q` the best score and `n` the number of
/// distinct query q-grams, candidates must reach
/// `min(max(max_q * ratio, max(n / 2, 1)), max_q)`.
/// Ties are ordered by word so results are deterministic.
pub fn find_candidates(
    index: &SearchIndex,
    word: &str,
    config: &SearchConfig,
) -> Vec<(String, u64)> {
    let query: HashSet<String> = qgrams(word).into_iter().collect();

    let mut scores: Counter<&str> = Counter::new();
    for gram in &query {
        if let Some(words) = index.words_with_qgram(gram) {
            for (candidate, &n) in words {
                scores.add(candidate.as_str(), n);
            }
        }
    }
    if scores.is_empty() {
        return Vec::new();
    }

    let max_q = scores.max_count() as f64;
    let n = query.len() as f64;
    let min_q = (max_q * config.qgram_score_ratio)
        .max((n * 0.5).max(1.0))
        .min(max_q);

    let mut candidates: Vec<(String, u64)> = scores
        .into_iter()
        .filter(|&(_, score)| score as f64 >= min_q)
        .map(|(candidate, score)| (candidate.to_string(), score))
        .collect();
    candidates.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    candidates.truncate(config.candidate_limit);
    candidates
}
