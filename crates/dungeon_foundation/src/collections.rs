//! Counter collections.
//!
//! [`CounterMap`] is a thin wrapper around the `im` crate's ordered map.
//! Cloning is O(1), so a statistics snapshot can be taken without copying,
//! and iteration order is the key order, never insertion order.

use std::fmt;
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer};

/// A mapping from key to a non-negative counter.
///
/// Absent keys read as zero. Equality ignores the order in which keys were
/// incremented.
#[derive(Clone)]
pub struct CounterMap<K>(im::OrdMap<K, u32>)
where
    K: Ord + Clone;

impl<K: Ord + Clone> CounterMap<K> {
    /// Creates an empty counter map.
    #[must_use]
    pub fn new() -> Self {
        Self(im::OrdMap::new())
    }

    /// Returns the counter for `key`, or zero.
    #[must_use]
    pub fn get(&self, key: &K) -> u32 {
        self.0.get(key).copied().unwrap_or(0)
    }

    /// Returns true if `key` has a non-zero counter.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.0.contains_key(key)
    }

    /// Increments the counter for `key` by one.
    pub fn increment(&mut self, key: K) {
        self.increment_by(key, 1);
    }

    /// Increments the counter for `key` by `amount`, saturating at `u32::MAX`.
    pub fn increment_by(&mut self, key: K, amount: u32) {
        if amount == 0 {
            return;
        }
        let current = self.get(&key);
        self.0.insert(key, current.saturating_add(amount));
    }

    /// Returns the number of keys with a counter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no key has a counter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the sum of all counters.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.0.values().map(|&count| u64::from(count)).sum()
    }

    /// Returns an iterator over keys and counters, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u32)> {
        self.0.iter().map(|(key, &count)| (key, count))
    }

    /// Returns an iterator over the keys, in key order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.0.keys()
    }
}

impl<K: Ord + Clone> Default for CounterMap<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + Clone + fmt::Debug> fmt::Debug for CounterMap<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<K: Ord + Clone> PartialEq for CounterMap<K> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<K: Ord + Clone> Eq for CounterMap<K> {}

impl<K: Ord + Clone> FromIterator<(K, u32)> for CounterMap<K> {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, amount) in iter {
            map.increment_by(key, amount);
        }
        map
    }
}

impl<K: Ord + Clone> Extend<(K, u32)> for CounterMap<K> {
    fn extend<I: IntoIterator<Item = (K, u32)>>(&mut self, iter: I) {
        for (key, amount) in iter {
            self.increment_by(key, amount);
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K> Deserialize<'de> for CounterMap<K>
where
    K: Ord + Clone + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = std::collections::BTreeMap::<K, u32>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}
