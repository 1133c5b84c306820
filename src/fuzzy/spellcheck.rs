// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Spelling alternatives for query words.
//!
//! For each query word, the q-gram finder proposes candidates and OSA distance
//! sorts them into tiers. Distance-1 words are the first tier, most frequent
//! first. Only when that tier is thin (fewer than `matches_min`) do we reach
//! for distance-2+ words, and then never past `matches_max` in total.
//!
//! The acceptance cutoff grows with word length:
//! `dont_accept = round(clamp(len * 0.66, 1, 4))`, so a 3-letter word tolerates
//! one edit and a 7-letter word tolerates three.

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::config::{SearchConfig, DEFAULT_CUTOFF_RETURN};
use crate::fuzzy::osa_distance;
use crate::index::qgram::find_candidates;
use crate::index::SearchIndex;

/// Query words paired with their spelling alternatives, in query order.
pub type SpellCheck = Vec<(String, Vec<String>)>;

/// Distance at and above which a candidate is rejected.
pub fn acceptance_cutoff(word: &str) -> usize {
    let len = word.chars().count() as f64;
    (len * 0.66).min(4.0).max(1.0).round() as usize
}

/// Alternatives for each word, keeping the order of `words`.
pub fn spell_check(index: &SearchIndex, words: &[String], config: &SearchConfig) -> SpellCheck {
    words
        .iter()
        .map(|word| (word.clone(), alternatives(index, word, config)))
        .collect()
}

/// Indexed words close to `word`, best first.
///
/// Words no longer than `skip_len` and words already in the index get none.
pub fn alternatives(index: &SearchIndex, word: &str, config: &SearchConfig) -> Vec<String> {
    if word.chars().count() <= config.skip_len || index.contains_word(word) {
        return Vec::new();
    }

    let dont_accept = acceptance_cutoff(word);
    let mut first_tier: Vec<(String, u64)> = Vec::new();
    let mut farther: BTreeMap<usize, Vec<(String, u64)>> = BTreeMap::new();

    for (candidate, _) in find_candidates(index, word, config) {
        let distance = osa_distance(word, &candidate, dont_accept, DEFAULT_CUTOFF_RETURN);
        if distance == 0 || distance >= dont_accept {
            continue;
        }
        let occurrences = index.occurrences(&candidate);
        if distance <= 1 {
            first_tier.push((candidate, occurrences));
        } else {
            farther.entry(distance).or_default().push((candidate, occurrences));
        }
    }

    first_tier.sort_by(by_frequency);
    let mut result: Vec<String> = first_tier
        .into_iter()
        .take(config.matches_max)
        .map(|(w, _)| w)
        .collect();

    'tiers: for (_, mut tier) in farther {
        tier.sort_by(by_frequency);
        for (_, group) in &tier.into_iter().chunk_by(|(_, occurrences)| *occurrences) {
            if result.len() >= config.matches_min {
                break 'tiers;
            }
            let group: Vec<String> = group.map(|(w, _)| w).collect();
            let room = config.matches_max.saturating_sub(result.len());
            if group.len() > room {
                result.extend(group.into_iter().take(room));
                break 'tiers;
            }
            result.extend(group);
        }
    }

    result
}

/// Most frequent first, then alphabetical.
fn by_frequency(a: &(String, u64), b: &(String, u64)) -> std::cmp::Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}
