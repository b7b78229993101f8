// SPDX-License-Identifier: MIT
//
// Serialized string-store engine for UniKV.
//
// Adapts the storage contract onto a synchronous, string-only key-value
// store supplied by the caller. Values are serialized to JSON text on
// write and parsed back on read. The store itself is an injected
// capability so the adapter can be exercised without the ambient,
// origin-wide store it was designed around.

use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::engine::StorageEngine;
use crate::error::StorageError;

/// Minimal capability contract for a synchronous, string-only store.
///
/// Models stores like a browser origin's local storage: text in, text
/// out, shared with every other writer in the process.
pub trait StringStore: Send + Sync {
    /// Return the text stored under `key`, if any.
    fn get_string(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, overwriting any previous text.
    fn set_string(&self, key: &str, value: &str);

    /// Remove the text stored under `key`. No-op if absent.
    fn remove_string(&self, key: &str);

    /// Remove every key in the store, including keys written by others.
    fn clear_all(&self);
}

impl<S: StringStore + ?Sized> StringStore for Arc<S> {
    fn get_string(&self, key: &str) -> Option<String> {
        (**self).get_string(key)
    }

    fn set_string(&self, key: &str, value: &str) {
        (**self).set_string(key, value)
    }

    fn remove_string(&self, key: &str) {
        (**self).remove_string(key)
    }

    fn clear_all(&self) {
        (**self).clear_all()
    }
}

/// An in-process [`StringStore`] backed by a `HashMap`.
///
/// Stands in for the ambient store in tests and demos. Synchronous by
/// design, matching the store it models.
#[derive(Debug, Default)]
pub struct MemoryStringStore {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStringStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the number of keys currently stored.
    pub fn len(&self) -> usize {
        self.data.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Return true if the store contains no keys.
    pub fn is_empty(&self) -> bool {
        self.data.read().unwrap_or_else(|e| e.into_inner()).is_empty()
    }
}

impl StringStore for MemoryStringStore {
    fn get_string(&self, key: &str) -> Option<String> {
        let map = self.data.read().unwrap_or_else(|e| e.into_inner());
        map.get(key).cloned()
    }

    fn set_string(&self, key: &str, value: &str) {
        let mut map = self.data.write().unwrap_or_else(|e| e.into_inner());
        map.insert(key.to_string(), value.to_string());
    }

    fn remove_string(&self, key: &str) {
        let mut map = self.data.write().unwrap_or_else(|e| e.into_inner());
        map.remove(key);
    }

    fn clear_all(&self) {
        let mut map = self.data.write().unwrap_or_else(|e| e.into_inner());
        map.clear();
    }
}

/// A storage engine over a synchronous, string-only store.
///
/// Every `set_item` serializes the value to JSON text before writing;
/// every `get_item` parses the stored text back. Malformed stored text
/// surfaces as a [`StorageError::Serialization`] failure from `get_item`.
///
/// `clear` wipes the entire underlying store, not just keys written
/// through this engine. Callers sharing the store with other writers
/// must account for that.
///
/// # Example
///
/// ```rust
/// use unikv_storage::persistent::{MemoryStringStore, PersistentKVEngine};
/// use unikv_storage::engine::StorageEngine;
///
/// # tokio_test::block_on(async {
/// let engine = PersistentKVEngine::new(MemoryStringStore::new());
/// engine.set_item("count", 42u32).await.unwrap();
/// assert_eq!(engine.get_item("count").await.unwrap(), Some(42));
/// # });
/// ```
#[derive(Debug)]
pub struct PersistentKVEngine<T, S> {
    /// The injected string store.
    store: S,
    _value: PhantomData<fn() -> T>,
}

impl<T, S: StringStore> PersistentKVEngine<T, S> {
    /// Create an engine over the given string store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            _value: PhantomData,
        }
    }

    /// Return a reference to the underlying string store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[async_trait]
impl<T, S> StorageEngine<T> for PersistentKVEngine<T, S>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
    S: StringStore,
{
    async fn set_item(&self, key: &str, value: T) -> Result<(), StorageError> {
        let text = serde_json::to_string(&value)?;
        self.store.set_string(key, &text);
        Ok(())
    }

    async fn get_item(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.store.get_string(key) {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.store.remove_string(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        // Unscoped: removes every key in the store, not only ours.
        self.store.clear_all();
        Ok(())
    }

    fn name(&self) -> &str {
        "persistent-kv"
    }
}
