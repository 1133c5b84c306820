// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! `distance` holds the OSA distance itself. `spellcheck` combines it with the
//! q-gram candidate finder to propose indexed words close to each query word.

mod distance;
pub mod spellcheck;

pub use distance::*;
