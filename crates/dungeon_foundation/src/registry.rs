//! Frozen content registries.
//!
//! A [`RegistryBuilder`] collects entries during one load pass and is
//! consumed by [`RegistryBuilder::freeze`]. The resulting [`Registry`] has
//! no mutating methods, so writes after freezing do not compile. Entries
//! live behind `Arc` in a persistent `im` map: cloning a registry is O(1)
//! and the registry can be shared across threads for reads.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::id::Id;

/// Content that carries its own id.
pub trait Identified {
    /// The id keying this entry.
    fn id(&self) -> &Id;
}

/// Collects entries for one registry.
pub struct RegistryBuilder<T> {
    label: &'static str,
    entries: im::OrdMap<Id, Arc<T>>,
}

impl<T: Identified> RegistryBuilder<T> {
    /// Creates an empty builder; `label` names the registry in errors.
    #[must_use]
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            entries: im::OrdMap::new(),
        }
    }

    /// Adds an entry.
    ///
    /// # Errors
    ///
    /// Returns a duplicate id error if an entry with the same id exists.
    pub fn insert(&mut self, entry: T) -> Result<()> {
        let id = entry.id().clone();
        if self.entries.contains_key(&id) {
            return Err(Error::duplicate_id(self.label, id));
        }
        self.entries.insert(id, Arc::new(entry));
        Ok(())
    }

    /// Returns true if an entry with `id` was added.
    #[must_use]
    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        Q: Ord + ?Sized,
        Id: Borrow<Q>,
    {
        self.entries.contains_key(id)
    }

    /// Returns the number of entries added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entry was added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freezes the builder into a read-only registry.
    #[must_use]
    pub fn freeze(self) -> Registry<T> {
        Registry {
            label: self.label,
            entries: self.entries,
        }
    }
}

/// A read-only registry keyed by [`Id`].
pub struct Registry<T> {
    label: &'static str,
    entries: im::OrdMap<Id, Arc<T>>,
}

impl<T> Registry<T> {
    /// Returns the registry label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn get<Q>(&self, id: &Q) -> Option<&T>
    where
        Q: Ord + ?Sized,
        Id: Borrow<Q>,
    {
        self.entries.get(id).map(|entry| entry.as_ref())
    }

    /// Looks up an entry by id, returning a shared handle.
    #[must_use]
    pub fn get_shared<Q>(&self, id: &Q) -> Option<Arc<T>>
    where
        Q: Ord + ?Sized,
        Id: Borrow<Q>,
    {
        self.entries.get(id).cloned()
    }

    /// Returns true if an entry with `id` exists.
    #[must_use]
    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        Q: Ord + ?Sized,
        Id: Borrow<Q>,
    {
        self.entries.contains_key(id)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&Id, &T)> {
        self.entries.iter().map(|(id, entry)| (id, entry.as_ref()))
    }

    /// Returns an iterator over entries in id order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.values().map(|entry| entry.as_ref())
    }
}

impl<T> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            label: self.label,
            entries: self.entries.clone(),
        }
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("label", &self.label)
            .field("len", &self.entries.len())
            .finish()
    }
}
