// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text cleaning for indexing and queries.
//!
//! Lowercase, then three passes:
//!
//! 1. Drop punctuation runs that end a word (`"pie," -> "pie"`).
//! 2. Turn punctuation runs that start a word into a space (`"(north" -> " north"`).
//! 3. Collapse whitespace and trim.
//!
//! Punctuation inside a word is left alone, so `"co2-eq"` stays one token.
//! No accent folding happens here; `"café"` and `"cafe"` are different words.
//!
//! The `regex` crate has no lookaround, so the boundary whitespace is captured
//! and written back instead of asserted.

use regex::Regex;
use std::sync::LazyLock;

/// Punctuation run followed by whitespace or end of text.
static TRAILING_PUNCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[,."'`)\]}\\/\-−_:;+…]+(\s|$)"#).expect("trailing punctuation pattern")
});

/// Punctuation run preceded by whitespace or start of text.
static LEADING_PUNCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(^|\s)[,."'`(\[{\\/\-−_:;+]+"#).expect("leading punctuation pattern")
});

/// Clean text for indexing or querying.
///
/// The output has single spaces between tokens and no leading or trailing
/// whitespace, and `clean_text(clean_text(s)) == clean_text(s)`.
///
/// ```ignore
/// assert_eq!(clean_text("Apple-Pie, (North)"), "apple-pie north");
/// ```
pub fn clean_text(value: &str) -> String {
    let lowered = value.to_lowercase();
    let trailing = TRAILING_PUNCT.replace_all(&lowered, "$1");
    let leading = LEADING_PUNCT.replace_all(&trailing, "$1 ");
    leading.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split cleaned text into words. Empty text has no words.
#[inline]
pub fn split_words(cleaned: &str) -> impl Iterator<Item = &str> {
    cleaned.split(' ').filter(|w| !w.is_empty())
}
