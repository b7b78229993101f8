// SPDX-License-Identifier: MIT
//
// Transactional object-store engine for UniKV.
//
// Adapts the storage contract onto redb (pure Rust, B-tree, ACID,
// single-file database). Each operation walks the same four stages:
//
// 1. Open: acquire a fresh database handle; if the named collection is
//    missing, an upgrade step creates it before the handle is ready.
// 2. Transact: begin one transaction scoped to the collection —
//    read-only for get, read-write for set/remove/clear.
// 3. Act: issue the single underlying action inside the transaction.
// 4. Settle: mutations return only once the transaction has committed;
//    reads return as soon as the lookup yields its result.
//
// Handles are never cached across calls, so every operation pays the
// open cost. redb calls block, so each stage runs on the tokio blocking
// pool.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use redb::{Database, ReadableDatabase, TableDefinition, TableError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::engine::StorageEngine;
use crate::error::StorageError;

/// A storage engine over a named collection in a redb database file.
///
/// Constructed from a database path and a collection (table) name. Both
/// are passed through to redb unvalidated; a path or name the store
/// rejects surfaces as a [`StorageError::Backend`] failure on first use.
///
/// Every call opens its own handle and runs exactly one transaction.
/// Two concurrent calls race at redb's discretion (the second open of
/// the same file is refused while the first handle is live). Acceptable
/// for a thin adapter, not for high-throughput use.
///
/// # Example
///
/// ```rust,no_run
/// use unikv_storage::transactional::TransactionalStoreEngine;
/// use unikv_storage::engine::StorageEngine;
///
/// # tokio_test::block_on(async {
/// let engine = TransactionalStoreEngine::new("/tmp/unikv.redb", "store");
/// engine.set_item("greeting", "hello".to_string()).await.unwrap();
/// let val = engine.get_item("greeting").await.unwrap();
/// assert_eq!(val, Some("hello".to_string()));
/// # });
/// ```
pub struct TransactionalStoreEngine<T> {
    /// Path of the database file.
    path: PathBuf,
    /// Name of the collection (redb table) within the database.
    collection: String,
    _value: PhantomData<fn() -> T>,
}

impl<T> TransactionalStoreEngine<T> {
    /// Create an engine for `collection` within the database at `path`.
    ///
    /// Nothing is opened or created until the first operation runs.
    pub fn new(path: impl AsRef<Path>, collection: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            collection: collection.into(),
            _value: PhantomData,
        }
    }

    /// Return the filesystem path of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Return the name of the collection this engine operates on.
    pub fn collection(&self) -> &str {
        &self.collection
    }
}

impl<T> std::fmt::Debug for TransactionalStoreEngine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionalStoreEngine")
            .field("path", &self.path)
            .field("collection", &self.collection)
            .finish()
    }
}

/// Build the redb table definition for a collection name.
fn collection_def(name: &str) -> TableDefinition<'_, &'static str, &'static [u8]> {
    TableDefinition::new(name)
}

/// Open a fresh handle to the database, creating the collection if this
/// open finds it missing.
///
/// The upgrade step runs before the handle is handed to the calling
/// operation, so a ready handle always has the collection in place.
fn open(path: &Path, collection: &str) -> Result<Database, StorageError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let db = Database::create(path)?;

    let missing = {
        let txn = db.begin_read()?;
        match txn.open_table(collection_def(collection)) {
            Ok(_) => false,
            Err(TableError::TableDoesNotExist(_)) => true,
            Err(err) => return Err(err.into()),
        }
    };

    if missing {
        debug!(collection, path = %path.display(), "creating collection on first open");
        let txn = db.begin_write()?;
        txn.open_table(collection_def(collection))?;
        txn.commit()?;
    }

    Ok(db)
}

#[async_trait]
impl<T> StorageEngine<T> for TransactionalStoreEngine<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn set_item(&self, key: &str, value: T) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(&value)?;
        let path = self.path.clone();
        let collection = self.collection.clone();
        let key = key.to_string();

        tokio::task::spawn_blocking(move || -> Result<(), StorageError> {
            let db = open(&path, &collection)?;
            let txn = db.begin_write()?;
            {
                let mut table = txn.open_table(collection_def(&collection))?;
                table.insert(key.as_str(), bytes.as_slice())?;
            }
            // Success is reported only once the transaction has
            // committed, never merely because the insert call returned.
            txn.commit()?;
            Ok(())
        })
        .await?
    }

    async fn get_item(&self, key: &str) -> Result<Option<T>, StorageError> {
        let path = self.path.clone();
        let collection = self.collection.clone();
        let key = key.to_string();

        let bytes = tokio::task::spawn_blocking(
            move || -> Result<Option<Vec<u8>>, StorageError> {
                let db = open(&path, &collection)?;
                let txn = db.begin_read()?;
                let table = txn.open_table(collection_def(&collection))?;
                match table.get(key.as_str())? {
                    Some(guard) => Ok(Some(guard.value().to_vec())),
                    None => Ok(None),
                }
            },
        )
        .await??;

        match bytes {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path.clone();
        let collection = self.collection.clone();
        let key = key.to_string();

        tokio::task::spawn_blocking(move || -> Result<(), StorageError> {
            let db = open(&path, &collection)?;
            let txn = db.begin_write()?;
            {
                let mut table = txn.open_table(collection_def(&collection))?;
                // Removing an absent key commits an empty transaction.
                table.remove(key.as_str())?;
            }
            txn.commit()?;
            Ok(())
        })
        .await?
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let path = self.path.clone();
        let collection = self.collection.clone();

        tokio::task::spawn_blocking(move || -> Result<(), StorageError> {
            let db = open(&path, &collection)?;
            let txn = db.begin_write()?;
            // Dropping the table clears every entry; the next open's
            // upgrade step recreates the collection.
            txn.delete_table(collection_def(&collection))?;
            txn.commit()?;
            Ok(())
        })
        .await?
    }

    fn name(&self) -> &str {
        "transactional-store"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// Create an engine over a fresh database file in a temp directory.
    ///
    /// The directory must outlive the engine; redb holds the file open
    /// for the duration of each operation.
    fn temp_engine<T>() -> (TransactionalStoreEngine<T>, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let engine = TransactionalStoreEngine::new(dir.path().join("myDB.redb"), "store");
        (engine, dir)
    }

    #[tokio::test]
    async fn test_round_trip_and_clear() {
        let (engine, _dir) = temp_engine::<String>();

        // Get on a fresh database returns None.
        assert_eq!(engine.get_item("key3").await.unwrap(), None);

        engine.set_item("key3", "value3".to_string()).await.unwrap();
        assert_eq!(
            engine.get_item("key3").await.unwrap(),
            Some("value3".to_string())
        );

        engine.clear().await.unwrap();
        assert_eq!(engine.get_item("key3").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_overwrite() {
        let (engine, _dir) = temp_engine::<u64>();

        engine.set_item("counter", 1).await.unwrap();
        engine.set_item("counter", 2).await.unwrap();
        assert_eq!(engine.get_item("counter").await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let (engine, _dir) = temp_engine::<String>();

        engine.set_item("key", "val".to_string()).await.unwrap();
        engine.remove_item("key").await.unwrap();
        assert_eq!(engine.get_item("key").await.unwrap(), None);

        // Absent key: still Ok.
        engine.remove_item("key").await.unwrap();
        engine.remove_item("never-set").await.unwrap();
    }

    #[tokio::test]
    async fn test_set_is_durable_once_complete() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("durability.redb");

        // set_item resolves only after its transaction commits, so a
        // second, independently opened handle must already observe the
        // write.
        let writer: TransactionalStoreEngine<String> =
            TransactionalStoreEngine::new(&path, "store");
        writer.set_item("key", "committed".to_string()).await.unwrap();
        drop(writer);

        let reader: TransactionalStoreEngine<String> =
            TransactionalStoreEngine::new(&path, "store");
        assert_eq!(
            reader.get_item("key").await.unwrap(),
            Some("committed".to_string())
        );
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shared.redb");

        let users: TransactionalStoreEngine<String> =
            TransactionalStoreEngine::new(&path, "users");
        let posts: TransactionalStoreEngine<String> =
            TransactionalStoreEngine::new(&path, "posts");

        users.set_item("id", "alice".to_string()).await.unwrap();
        posts.set_item("id", "hello-world".to_string()).await.unwrap();

        assert_eq!(users.get_item("id").await.unwrap(), Some("alice".to_string()));
        assert_eq!(
            posts.get_item("id").await.unwrap(),
            Some("hello-world".to_string())
        );

        // Clearing one collection leaves the other intact.
        users.clear().await.unwrap();
        assert_eq!(users.get_item("id").await.unwrap(), None);
        assert_eq!(
            posts.get_item("id").await.unwrap(),
            Some("hello-world".to_string())
        );
    }

    #[tokio::test]
    async fn test_clear_on_fresh_database() {
        let (engine, _dir) = temp_engine::<String>();

        // Clearing before anything was written still succeeds.
        engine.clear().await.unwrap();
        assert_eq!(engine.get_item("anything").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_structured_values() {
        use serde::Deserialize;

        #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
        struct Event {
            kind: String,
            payload: Vec<u32>,
        }

        let (engine, _dir) = temp_engine::<Event>();

        let event = Event {
            kind: "login".to_string(),
            payload: vec![1, 2, 3],
        };
        engine.set_item("e1", event.clone()).await.unwrap();
        assert_eq!(engine.get_item("e1").await.unwrap(), Some(event));
    }

    #[tokio::test]
    async fn test_accessors() {
        let (engine, dir) = temp_engine::<String>();
        assert_eq!(engine.collection(), "store");
        assert!(engine.path().starts_with(dir.path()));
        assert_eq!(engine.name(), "transactional-store");
    }
}
