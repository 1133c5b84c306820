// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking and spell-check tuning.
//!
//! The defaults below are what the ranking tests are written against. A
//! single-word match is worth `base_weight`, plus `original_word_boost` when
//! the matched word is one the user actually typed, plus `exact_word_boost`
//! when it equals the query word. Multi-word queries multiply the base weight
//! by the number of words, so a record matching all of them (and matching them
//! adjacently) pulls far ahead of records matching one.
//!
//! # Constants
//!
//! | Setting               | Default | Used by                     |
//! |-----------------------|---------|-----------------------------|
//! | `base_weight`         | 10      | single and multi-word score |
//! | `original_word_boost` | 5       | single-word score           |
//! | `exact_word_boost`    | 1       | single-word score           |
//! | `skip_len`            | 1       | spell check                 |
//! | `matches_min`         | 3       | spell check                 |
//! | `matches_max`         | 10      | spell check                 |
//! | `candidate_limit`     | 2500    | q-gram candidate finder     |
//! | `qgram_score_ratio`   | 0.32    | q-gram candidate finder     |
//! | `max_query_words`     | 6       | query expansion             |
//! | `parallel_chunk_rows` | 2500    | parallel cleaning           |

use serde::{Deserialize, Serialize};

/// Window size for q-grams. Baked into the stored index, so not configurable.
pub const QGRAM_SIZE: usize = 2;

/// Name of the derived, cleaned concatenation of searchable columns.
pub const QUERY_COLUMN: &str = "query_col";

/// Value the OSA distance returns when it gives up early.
pub const DEFAULT_CUTOFF_RETURN: usize = 1000;

/// Tunable parameters for ranking and spell correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Score for any successful single-word match.
    pub base_weight: u64,
    /// Added when the matched word is one of the unmodified query words.
    pub original_word_boost: u64,
    /// Added when the matched word equals the query word exactly.
    pub exact_word_boost: u64,
    /// Query words this short (in chars) get no spelling alternatives.
    pub skip_len: usize,
    /// Below this many first-tier alternatives, farther tiers are consulted.
    pub matches_min: usize,
    /// Upper bound on alternatives per word once farther tiers are used.
    pub matches_max: usize,
    /// Candidates kept by the q-gram finder before edit distance runs.
    pub candidate_limit: usize,
    /// Fraction of the best q-gram score a candidate must reach.
    pub qgram_score_ratio: f64,
    /// Distinct query words kept; extra words are dropped.
    pub max_query_words: usize,
    /// Rows per chunk when cleaning runs in parallel.
    pub parallel_chunk_rows: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_weight: 10,
            original_word_boost: 5,
            exact_word_boost: 1,
            skip_len: 1,
            matches_min: 3,
            matches_max: 10,
            candidate_limit: 2500,
            qgram_score_ratio: 0.32,
            max_query_words: 6,
            parallel_chunk_rows: 2500,
        }
    }
}

impl SearchConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
