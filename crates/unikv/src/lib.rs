// SPDX-License-Identifier: MIT
//! UniKV
//!
//! Uniform key-value access over heterogeneous storage backends.
//! One contract — set, get, delete, clear — over whichever engine fits:
//! an in-memory map, a serialized string store, or a transactional
//! object store. [`UniversalDatabase`] holds the chosen engine behind a
//! stable, backend-agnostic surface; [`InMemoryTable`] is a separate,
//! synchronous CRUD wrapper for plain in-process collections.

mod database;
mod table;

pub use database::UniversalDatabase;
pub use table::{InMemoryTable, TableError};

// Re-export the engines and contract types so consumers need only one
// dependency.
pub use unikv_storage::{
    MemoryStringStore, PersistentKVEngine, StorageEngine, StorageError, StringStore,
    TransactionalStoreEngine, VolatileEngine,
};
