//! Fixed-capacity history buffer.
//!
//! Remembers only the last N entries (recent commands, recent events).
//! Once full, each insertion overwrites the oldest slot in place and
//! advances a rotation offset; no element is ever shifted.

use crate::error::{Error, Result};

/// A bounded, overwrite-oldest sequence.
#[derive(Clone, Debug)]
pub struct BoundedHistory<T> {
    /// Stored entries in physical order.
    items: Vec<T>,
    /// Maximum number of entries.
    capacity: usize,
    /// Physical index of the logically oldest entry.
    zero_index: usize,
}

impl<T> BoundedHistory<T> {
    /// Creates an empty history holding at most `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns an invalid argument error if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid_argument("capacity must be positive"));
        }
        Ok(Self {
            items: Vec::with_capacity(capacity),
            capacity,
            zero_index: 0,
        })
    }

    /// Adds an entry, evicting the oldest one if the history is full.
    pub fn add(&mut self, item: T) {
        if self.is_full() {
            self.items[self.zero_index] = item;
            self.zero_index = (self.zero_index + 1) % self.capacity;
        } else {
            self.items.push(item);
        }
    }

    /// Returns the entry at logical `index` (0 is the oldest).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.items.len() {
            return None;
        }
        self.items.get((index + self.zero_index) % self.capacity)
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|index| self.get(index))
    }

    /// Returns the number of stored entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if nothing has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns true if the history holds `capacity` entries.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Returns the maximum number of entries.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns an iterator from the oldest entry to the newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let (newer, older) = self.items.split_at(self.zero_index);
        older.iter().chain(newer.iter())
    }
}
