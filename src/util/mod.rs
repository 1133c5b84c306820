// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared helpers: text cleaning and counting.

pub mod counter;
pub mod normalize;

pub use counter::Counter;
pub use normalize::clean_text;
