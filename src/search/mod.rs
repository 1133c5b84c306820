// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search paths.
//!
//! - `literal`: substring match over original cell values
//! - `query` + `single` + `fuzzy`: cleaned, spell-checked, weighted ranking

pub mod fuzzy;
pub mod literal;
pub mod query;
pub mod single;

pub use fuzzy::{fuzzy_scores, rank};
pub use literal::literal_search;
