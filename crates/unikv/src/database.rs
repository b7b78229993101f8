// SPDX-License-Identifier: MIT
//
// Backend-agnostic database facade.

use unikv_storage::{StorageEngine, StorageError};

/// A database facade over exactly one [`StorageEngine`].
///
/// The engine is injected at construction and fixed for the facade's
/// lifetime; there is no engine swapping. Each method forwards verbatim
/// to the engine's contract method (`set` → `set_item`, `get` →
/// `get_item`, `delete` → `remove_item`, `clear` → `clear`), propagating
/// failures unchanged. The facade adds no behavior of its own — it
/// exists to give callers a stable name set that does not change when
/// the backend does.
///
/// # Example
///
/// ```rust
/// use unikv::{UniversalDatabase, VolatileEngine};
///
/// # tokio_test::block_on(async {
/// let db = UniversalDatabase::new(VolatileEngine::new());
/// db.set("key1", "value1".to_string()).await.unwrap();
/// assert_eq!(db.get("key1").await.unwrap(), Some("value1".to_string()));
/// # });
/// ```
pub struct UniversalDatabase<T>
where
    T: Send + 'static,
{
    engine: Box<dyn StorageEngine<T>>,
}

impl<T> UniversalDatabase<T>
where
    T: Send + 'static,
{
    /// Create a database over the given engine.
    pub fn new<E>(engine: E) -> Self
    where
        E: StorageEngine<T> + 'static,
    {
        Self {
            engine: Box::new(engine),
        }
    }

    /// Store `value` under `key`, overwriting any previous value.
    pub async fn set(&self, key: &str, value: T) -> Result<(), StorageError> {
        self.engine.set_item(key, value).await
    }

    /// Retrieve the value stored under `key`, or `None` if absent.
    pub async fn get(&self, key: &str) -> Result<Option<T>, StorageError> {
        self.engine.get_item(key).await
    }

    /// Remove the value stored under `key`. No-op if absent.
    pub async fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.engine.remove_item(key).await
    }

    /// Remove all entries.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.engine.clear().await
    }

    /// The name of the engine behind this database.
    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }
}

impl<T> std::fmt::Debug for UniversalDatabase<T>
where
    T: Send + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UniversalDatabase")
            .field("engine", &self.engine.name())
            .finish()
    }
}
