// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! `SearchError` covers every precondition a caller can violate. All of them are
//! raised before the engine touches its state, so a failed call leaves the row
//! table and all four indexes exactly as they were.
//!
//! `InvariantError` is the other half: it reports structural corruption found by
//! `SearchIndex::verify`. Seeing one means a bug in this crate, not bad input.

use thiserror::Error;

/// Convenience alias used across the public API.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised synchronously by engine operations.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Identifier column missing, reserved column supplied, unknown searchable
    /// column, ragged row, or a whitespace-bearing word passed to `word_in_index`.
    #[error("Schema error: {message}")]
    Schema { message: String },

    /// An identifier already present in the table (or repeated within a batch).
    #[error("Duplicate identifier: {id}")]
    DuplicateIdentifier { id: String },

    #[error("Unknown identifier: {id}")]
    UnknownIdentifier { id: String },

    /// A `change_identifier` patch with the wrong shape.
    #[error("Invalid patch: {message}")]
    InvalidPatch { message: String },

    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: Option<serde_json::Error>,
    },
}

impl SearchError {
    pub(crate) fn schema(message: impl Into<String>) -> Self {
        SearchError::Schema {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_patch(message: impl Into<String>) -> Self {
        SearchError::InvalidPatch {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Json {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

/// A broken index invariant, found by `SearchIndex::verify`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// `identifier_to_word[id][word]` disagrees with `word_to_identifier[word][id]`.
    #[error("posting mismatch for id '{id}', word '{word}': forward={forward}, inverted={inverted}")]
    PostingMismatch {
        id: String,
        word: String,
        forward: u64,
        inverted: u64,
    },

    /// `word_to_qgram[word][qgram]` disagrees with `qgram_to_word[qgram][word]`.
    #[error("q-gram mismatch for word '{word}', q-gram '{qgram}': forward={forward}, inverted={inverted}")]
    QgramMismatch {
        word: String,
        qgram: String,
        forward: u64,
        inverted: u64,
    },

    #[error("zero count stored in {map} under '{outer}' / '{inner}'")]
    ZeroCount {
        map: &'static str,
        outer: String,
        inner: String,
    },

    #[error("empty inner counter stored in {map} under '{key}'")]
    EmptyCounter { map: &'static str, key: String },

    /// A word has postings but no q-grams, or the other way around.
    #[error("word '{word}' present in {present_in} but missing from {missing_from}")]
    VocabularyMismatch {
        word: String,
        present_in: &'static str,
        missing_from: &'static str,
    },

    /// `identifier_to_word[id]` does not match the tokens of the row's `query_col`.
    #[error("row '{id}' tokens do not match its indexed words")]
    RowTokensMismatch { id: String },

    #[error("identifier '{id}' indexed but not present in the row table")]
    OrphanIdentifier { id: String },
}
