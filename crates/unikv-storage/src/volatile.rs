// SPDX-License-Identifier: MIT
//
// In-memory storage engine for UniKV.
//
// Uses a `HashMap` wrapped in a tokio `RwLock` for thread-safe key-value
// storage. Values are held by clone, never serialized. Intended for
// testing, development, and ephemeral caches.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::engine::StorageEngine;
use crate::error::StorageError;

/// An in-memory storage engine backed by a `HashMap`.
///
/// All data lives in process memory and is lost on drop. No operation
/// can fail. Thread-safe via `Arc<RwLock<...>>`, making it suitable for
/// concurrent tokio tasks; `Clone` produces a handle onto the same map.
///
/// Stored values are cloned in and out of the map. Callers must not rely
/// on deep-copy semantics beyond what the value type's `Clone` provides.
///
/// # Example
///
/// ```rust
/// use unikv_storage::volatile::VolatileEngine;
/// use unikv_storage::engine::StorageEngine;
///
/// # tokio_test::block_on(async {
/// let engine = VolatileEngine::new();
/// engine.set_item("hello", "world".to_string()).await.unwrap();
/// let val = engine.get_item("hello").await.unwrap();
/// assert_eq!(val, Some("world".to_string()));
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct VolatileEngine<T> {
    /// The underlying map, protected by a read-write lock.
    data: Arc<RwLock<HashMap<String, T>>>,
}

impl<T> VolatileEngine<T> {
    /// Create a new, empty in-memory engine.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Return the number of keys currently stored.
    pub async fn len(&self) -> usize {
        self.data.read().await.len()
    }

    /// Return true if the engine contains no keys.
    pub async fn is_empty(&self) -> bool {
        self.data.read().await.is_empty()
    }
}

impl<T> Default for VolatileEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> StorageEngine<T> for VolatileEngine<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn set_item(&self, key: &str, value: T) -> Result<(), StorageError> {
        let mut map = self.data.write().await;
        map.insert(key.to_string(), value);
        Ok(())
    }

    async fn get_item(&self, key: &str) -> Result<Option<T>, StorageError> {
        let map = self.data.read().await;
        Ok(map.get(key).cloned())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut map = self.data.write().await;
        // Absent keys are a silent no-op.
        map.remove(key);
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let mut map = self.data.write().await;
        map.clear();
        Ok(())
    }

    fn name(&self) -> &str {
        "volatile"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_basic_round_trip() {
        let engine = VolatileEngine::new();

        // Initially empty.
        assert!(engine.is_empty().await);
        assert_eq!(engine.get_item("key1").await.unwrap(), None);

        // Set and get.
        engine.set_item("key1", "value1".to_string()).await.unwrap();
        assert_eq!(
            engine.get_item("key1").await.unwrap(),
            Some("value1".to_string())
        );
        assert_eq!(engine.len().await, 1);

        // Overwrite.
        engine.set_item("key1", "updated".to_string()).await.unwrap();
        assert_eq!(
            engine.get_item("key1").await.unwrap(),
            Some("updated".to_string())
        );
        assert_eq!(engine.len().await, 1);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let engine = VolatileEngine::new();

        engine.set_item("key", 42u32).await.unwrap();
        engine.remove_item("key").await.unwrap();
        assert_eq!(engine.get_item("key").await.unwrap(), None);

        // Removing a key that was never set succeeds with no effect.
        engine.remove_item("never-set").await.unwrap();
        assert!(engine.is_empty().await);
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let engine = VolatileEngine::new();

        engine.set_item("key1", "value1".to_string()).await.unwrap();
        engine.set_item("key2", "value2".to_string()).await.unwrap();

        engine.clear().await.unwrap();
        assert!(engine.is_empty().await);
        assert_eq!(engine.get_item("key1").await.unwrap(), None);
        assert_eq!(engine.get_item("key2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_values_stored_by_clone_not_serialized() {
        // A type that serde knows nothing about still round-trips.
        #[derive(Debug, Clone, PartialEq)]
        struct Opaque(Vec<u8>);

        let engine = VolatileEngine::new();
        engine.set_item("blob", Opaque(vec![1, 2, 3])).await.unwrap();
        assert_eq!(
            engine.get_item("blob").await.unwrap(),
            Some(Opaque(vec![1, 2, 3]))
        );
    }

    #[tokio::test]
    async fn test_clone_shares_state() {
        let engine = VolatileEngine::new();
        let clone = engine.clone();

        engine.set_item("shared", "data".to_string()).await.unwrap();
        assert_eq!(
            clone.get_item("shared").await.unwrap(),
            Some("data".to_string())
        );
    }

    #[tokio::test]
    async fn test_name() {
        let engine: VolatileEngine<String> = VolatileEngine::new();
        assert_eq!(engine.name(), "volatile");
    }
}
