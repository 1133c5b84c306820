// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The four-way index: identifiers, words, and q-grams.
//!
//! ```text
//!   identifier_to_word   id    -> word  -> count
//!   word_to_identifier   word  -> id    -> count     (posting lists)
//!   word_to_qgram        word  -> qgram -> count
//!   qgram_to_word        qgram -> word  -> count
//! ```
//!
//! The first two are transposes of each other, as are the last two. Words are
//! tokens of a row's cleaned `query_col`; q-grams are bigrams of words.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTINGS_SYMMETRIC**: `identifier_to_word[id][w] == word_to_identifier[w][id]`
//! 2. **QGRAMS_SYMMETRIC**: `word_to_qgram[w][g] == qgram_to_word[g][w]`
//! 3. **NO_ZEROS**: no zero counts and no empty inner counters
//! 4. **SAME_VOCABULARY**: keys of `word_to_qgram` == keys of `word_to_identifier`
//!
//! `verify` checks all four. Row-level agreement with `query_col` is checked
//! by `contracts::verify_rows`, since the index does not hold the rows.

pub mod qgram;

use std::collections::HashMap;

use crate::error::InvariantError;
use crate::util::counter::{merge_nested, reverse_nested, Counter, NestedCounter};
use crate::util::normalize::split_words;

use qgram::qgram_counter;

/// Word, posting, and q-gram maps for one engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchIndex {
    identifier_to_word: NestedCounter,
    word_to_identifier: NestedCounter,
    word_to_qgram: NestedCounter,
    qgram_to_word: NestedCounter,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index a batch of `(identifier, cleaned query_col)` pairs.
    ///
    /// Identifiers must not already be indexed; the row table enforces that
    /// before we get here. Rows whose text has no words leave no entry.
    pub fn update<I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut id_to_word = NestedCounter::new();
        for (id, cleaned) in rows {
            debug_assert!(
                !self.identifier_to_word.contains_key(&id),
                "identifier '{}' indexed twice",
                id
            );
            let words: Counter<String> = Counter::from_keys(split_words(&cleaned).map(str::to_string));
            id_to_word.insert(id, words);
        }

        let word_to_id = reverse_nested(&id_to_word);

        let mut word_to_qgram = NestedCounter::new();
        for word in word_to_id.keys() {
            if !self.word_to_qgram.contains_key(word) {
                word_to_qgram.insert(word.clone(), qgram_counter(word));
            }
        }
        let qgram_to_word = reverse_nested(&word_to_qgram);

        merge_nested(&mut self.identifier_to_word, id_to_word);
        merge_nested(&mut self.word_to_identifier, word_to_id);
        merge_nested(&mut self.word_to_qgram, word_to_qgram);
        merge_nested(&mut self.qgram_to_word, qgram_to_word);
    }

    /// Remove one identifier and any words only it used.
    ///
    /// Returns `false` if the identifier was not indexed.
    pub fn remove_identifier(&mut self, id: &str) -> bool {
        let Some(words) = self.identifier_to_word.remove(id) else {
            return false;
        };

        for word in words.keys() {
            let sole_owner = self
                .word_to_identifier
                .get(word)
                .is_some_and(|postings| postings.len() == 1);

            if sole_owner {
                self.word_to_identifier.remove(word);
                if let Some(grams) = self.word_to_qgram.remove(word) {
                    for gram in grams.keys() {
                        if let Some(members) = self.qgram_to_word.get_mut(gram) {
                            members.remove(word);
                            if members.is_empty() {
                                self.qgram_to_word.remove(gram);
                            }
                        }
                    }
                }
            } else if let Some(postings) = self.word_to_identifier.get_mut(word) {
                postings.remove(id);
            }
        }
        true
    }

    /// Exact word lookup.
    #[inline]
    pub fn contains_word(&self, word: &str) -> bool {
        self.word_to_identifier.contains_key(word)
    }

    /// Posting list: identifiers containing `word`, with occurrence counts.
    #[inline]
    pub fn postings(&self, word: &str) -> Option<&Counter<String>> {
        self.word_to_identifier.get(word)
    }

    /// Words of one identifier's `query_col`, with counts.
    #[inline]
    pub fn words_of(&self, id: &str) -> Option<&Counter<String>> {
        self.identifier_to_word.get(id)
    }

    #[inline]
    pub fn qgrams_of(&self, word: &str) -> Option<&Counter<String>> {
        self.word_to_qgram.get(word)
    }

    #[inline]
    pub fn words_with_qgram(&self, qgram: &str) -> Option<&Counter<String>> {
        self.qgram_to_word.get(qgram)
    }

    /// Total occurrences of `word` across all rows.
    pub fn occurrences(&self, word: &str) -> u64 {
        self.postings(word).map_or(0, Counter::total)
    }

    /// Distinct indexed words, in no particular order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.word_to_identifier.keys().map(String::as_str)
    }

    /// Indexed identifiers, in no particular order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.identifier_to_word.keys().map(String::as_str)
    }

    pub fn identifier_count(&self) -> usize {
        self.identifier_to_word.len()
    }

    pub fn word_count(&self) -> usize {
        self.word_to_identifier.len()
    }

    pub fn qgram_count(&self) -> usize {
        self.qgram_to_word.len()
    }

    /// Rough heap footprint of all four maps.
    pub fn estimated_bytes(&self) -> usize {
        [
            &self.identifier_to_word,
            &self.word_to_identifier,
            &self.word_to_qgram,
            &self.qgram_to_word,
        ]
        .into_iter()
        .map(nested_bytes)
        .sum()
    }

    /// Check invariants 1-4.
    pub fn verify(&self) -> Result<(), InvariantError> {
        check_transposed(
            &self.identifier_to_word,
            &self.word_to_identifier,
            ("identifier_to_word", "word_to_identifier"),
            |id, word, forward, inverted| InvariantError::PostingMismatch {
                id: id.to_string(),
                word: word.to_string(),
                forward,
                inverted,
            },
        )?;
        check_transposed(
            &self.word_to_qgram,
            &self.qgram_to_word,
            ("word_to_qgram", "qgram_to_word"),
            |word, qgram, forward, inverted| InvariantError::QgramMismatch {
                word: word.to_string(),
                qgram: qgram.to_string(),
                forward,
                inverted,
            },
        )?;

        for word in self.word_to_identifier.keys() {
            if !self.word_to_qgram.contains_key(word) {
                return Err(InvariantError::VocabularyMismatch {
                    word: word.clone(),
                    present_in: "word_to_identifier",
                    missing_from: "word_to_qgram",
                });
            }
        }
        for word in self.word_to_qgram.keys() {
            if !self.word_to_identifier.contains_key(word) {
                return Err(InvariantError::VocabularyMismatch {
                    word: word.clone(),
                    present_in: "word_to_qgram",
                    missing_from: "word_to_identifier",
                });
            }
        }
        Ok(())
    }
}

/// `forward[a][b]` must equal `inverted[b][a]` in both directions, with no
/// zero counts or empty inner counters on either side.
fn check_transposed(
    forward: &NestedCounter,
    inverted: &NestedCounter,
    names: (&'static str, &'static str),
    mismatch: impl Fn(&str, &str, u64, u64) -> InvariantError,
) -> Result<(), InvariantError> {
    check_no_zeros(forward, names.0)?;
    check_no_zeros(inverted, names.1)?;

    for (outer, inner) in forward {
        for (key, &n) in inner {
            let back = inverted.get(key).map_or(0, |c| c.get(outer.as_str()));
            if back != n {
                return Err(mismatch(outer, key, n, back));
            }
        }
    }
    for (outer, inner) in inverted {
        for (key, &n) in inner {
            let there = forward.get(key).map_or(0, |c| c.get(outer.as_str()));
            if there != n {
                return Err(mismatch(key, outer, there, n));
            }
        }
    }
    Ok(())
}

fn check_no_zeros(map: &NestedCounter, name: &'static str) -> Result<(), InvariantError> {
    for (outer, inner) in map {
        if inner.is_empty() {
            return Err(InvariantError::EmptyCounter {
                map: name,
                key: outer.clone(),
            });
        }
        for (key, &n) in inner {
            if n == 0 {
                return Err(InvariantError::ZeroCount {
                    map: name,
                    outer: outer.clone(),
                    inner: key.clone(),
                });
            }
        }
    }
    Ok(())
}

fn nested_bytes(map: &HashMap<String, Counter<String>>) -> usize {
    const STRING: usize = std::mem::size_of::<String>();
    const SLOT: usize = STRING + std::mem::size_of::<u64>();
    map.iter()
        .map(|(key, inner)| {
            STRING
                + key.len()
                + std::mem::size_of::<Counter<String>>()
                + inner.iter().map(|(k, _)| SLOT + k.len()).sum::<usize>()
        })
        .sum()
}
