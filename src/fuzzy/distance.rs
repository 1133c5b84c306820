// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Optimal string alignment distance with an early-exit cutoff.
//!
//! OSA is Levenshtein plus adjacent transpositions, with the restriction that
//! no substring is edited twice. `"coal"` vs `"cola"` is one edit, not two.
//!
//! Two early exits keep spell-check cheap when most candidates are far away:
//! 1. `|len(a) - len(b)|` is a lower bound on the distance.
//! 2. Once every cell of a DP row is `>= cutoff`, no later row can go lower.
//!
//! Only three DP rows are kept (the transposition step looks two rows back).

use crate::config::DEFAULT_CUTOFF_RETURN;

/// OSA distance between `a` and `b`, counted in chars.
///
/// With `cutoff > 0`, returns `cutoff_return` as soon as the distance is known
/// to be `>= cutoff`. With `cutoff == 0` the exact distance is returned.
pub fn osa_distance(a: &str, b: &str, cutoff: usize, cutoff_return: usize) -> usize {
    if a == b {
        return 0;
    }

    let mut s1: Vec<char> = a.chars().collect();
    let mut s2: Vec<char> = b.chars().collect();

    if cutoff > 0 && s1.len().abs_diff(s2.len()) >= cutoff {
        return cutoff_return;
    }
    if s1.is_empty() {
        return s2.len();
    }
    if s2.is_empty() {
        return s1.len();
    }
    // Longer string first keeps the row-minimum exit sound.
    if cutoff > 0 && s1.len() < s2.len() {
        std::mem::swap(&mut s1, &mut s2);
    }

    let width = s2.len();
    let mut two_back: Vec<usize> = vec![0; width + 1];
    let mut prev: Vec<usize> = (0..=width).collect();
    let mut curr: Vec<usize> = vec![0; width + 1];

    for i in 1..=s1.len() {
        curr[0] = i;
        let mut row_min = curr[0];

        for j in 1..=width {
            let cost = usize::from(s1[i - 1] != s2[j - 1]);
            let mut d = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            if i > 1 && j > 1 && s1[i - 1] == s2[j - 2] && s1[i - 2] == s2[j - 1] {
                d = d.min(two_back[j - 2] + 1);
            }
            curr[j] = d;
            row_min = row_min.min(d);
        }

        if cutoff > 0 && row_min >= cutoff {
            return cutoff_return;
        }

        std::mem::swap(&mut two_back, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[width]
}

/// Exact OSA distance, no cutoff.
#[inline]
pub fn osa(a: &str, b: &str) -> usize {
    osa_distance(a, b, 0, DEFAULT_CUTOFF_RETURN)
}
