// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A bag of keys with positive counts.
//!
//! All four indexes are `key -> Counter` maps, and index maintenance is just
//! counter algebra: merging a delta adds pointwise, reversing a map swaps the
//! outer and inner keys, and removal drops keys whose count would hit zero.
//!
//! # Invariant
//!
//! No stored count is zero. `add` ignores zero increments and `remove`
//! deletes the key outright, so equality of two counters is equality of the
//! multisets they represent.

use std::borrow::Borrow;
use std::collections::hash_map::{self, Entry};
use std::collections::HashMap;
use std::hash::Hash;

/// Multiset keyed by `K`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter<K: Eq + Hash> {
    counts: HashMap<K, u64>,
}

impl<K: Eq + Hash> Default for Counter<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> Counter<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count occurrences of each key.
    pub fn from_keys<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut counter = Counter::new();
        for key in keys {
            counter.add(key, 1);
        }
        counter
    }

    /// Add `n` to the count of `key`.
    #[inline]
    pub fn add(&mut self, key: K, n: u64) {
        if n > 0 {
            *self.counts.entry(key).or_insert(0) += n;
        }
    }

    #[inline]
    pub fn get<Q>(&self, key: &Q) -> u64
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or(0)
    }

    #[inline]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.contains_key(key)
    }

    /// Drop `key` entirely, returning its count.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<u64>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.counts.remove(key)
    }

    /// Pointwise addition of `other` into `self`.
    pub fn merge(&mut self, other: Counter<K>) {
        for (key, n) in other.counts {
            self.add(key, n);
        }
    }

    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, K, u64> {
        self.counts.iter()
    }

    pub fn keys(&self) -> hash_map::Keys<'_, K, u64> {
        self.counts.keys()
    }

    /// Largest count, or 0 for an empty counter.
    pub fn max_count(&self) -> u64 {
        self.counts.values().copied().max().unwrap_or(0)
    }
}

impl<K: Eq + Hash> FromIterator<(K, u64)> for Counter<K> {
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        let mut counter = Counter::new();
        for (key, n) in iter {
            counter.add(key, n);
        }
        counter
    }
}

impl<K: Eq + Hash> IntoIterator for Counter<K> {
    type Item = (K, u64);
    type IntoIter = hash_map::IntoIter<K, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl<'a, K: Eq + Hash> IntoIterator for &'a Counter<K> {
    type Item = (&'a K, &'a u64);
    type IntoIter = hash_map::Iter<'a, K, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

/// `outer -> inner -> count`: the shape of every index in this crate.
pub type NestedCounter = HashMap<String, Counter<String>>;

/// Merge `delta` into `target`: shared outer keys add their inner counters
/// pointwise, new outer keys are inserted as-is.
pub fn merge_nested(target: &mut NestedCounter, delta: NestedCounter) {
    for (key, inner) in delta {
        match target.entry(key) {
            Entry::Occupied(mut slot) => slot.get_mut().merge(inner),
            Entry::Vacant(slot) => {
                if !inner.is_empty() {
                    slot.insert(inner);
                }
            }
        }
    }
}

/// Swap outer and inner keys: `a -> b -> n` becomes `b -> a -> n`.
pub fn reverse_nested(map: &NestedCounter) -> NestedCounter {
    let mut reversed = NestedCounter::new();
    for (outer, inner) in map {
        for (key, &n) in inner {
            reversed
                .entry(key.clone())
                .or_default()
                .add(outer.clone(), n);
        }
    }
    reversed
}
