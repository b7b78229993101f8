// SPDX-License-Identifier: MIT
//
// In-process CRUD table.
//
// A plain map with create/read/update/delete semantics. Unlike the
// storage contract, update and delete of an absent id are errors here,
// not no-ops; the two layers intentionally disagree on that policy.

use std::collections::HashMap;

use thiserror::Error;

/// Errors from the in-process CRUD table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    /// The target id is not present in the table.
    #[error("item not found: {0}")]
    NotFound(String),
}

/// An in-process table of items keyed by string id.
///
/// Items are stored by value and read back by reference — no copy, no
/// serialization. Synchronous: this is a plain collection wrapper, not
/// a storage engine.
///
/// # Example
///
/// ```rust
/// use unikv::InMemoryTable;
///
/// let mut users = InMemoryTable::new();
/// users.create("1", "Alice".to_string());
/// assert_eq!(users.read("1"), Some(&"Alice".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryTable<T> {
    data: HashMap<String, T>,
}

impl<T> InMemoryTable<T> {
    /// Create a new, empty table.
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }

    /// Insert `item` under `id`, overwriting any existing item.
    pub fn create(&mut self, id: impl Into<String>, item: T) {
        self.data.insert(id.into(), item);
    }

    /// Return a reference to the item stored under `id`, if any.
    pub fn read(&self, id: &str) -> Option<&T> {
        self.data.get(id)
    }

    /// Replace the item stored under `id`.
    ///
    /// Fails with [`TableError::NotFound`] if `id` is absent.
    pub fn update(&mut self, id: &str, item: T) -> Result<(), TableError> {
        match self.data.get_mut(id) {
            Some(slot) => {
                *slot = item;
                Ok(())
            }
            None => Err(TableError::NotFound(id.to_string())),
        }
    }

    /// Remove the item stored under `id`.
    ///
    /// Fails with [`TableError::NotFound`] if `id` is absent.
    pub fn delete(&mut self, id: &str) -> Result<(), TableError> {
        if self.data.remove(id).is_none() {
            return Err(TableError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Return the number of items in the table.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Return true if the table holds no items.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T> Default for InMemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
