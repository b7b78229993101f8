// SPDX-License-Identifier: MIT
//
// UniKV Storage Engine Abstraction
//
// This crate provides a pluggable key-value storage interface. The core
// `StorageEngine` trait defines the contract that all engines implement,
// letting callers swap storage backends without changing application
// logic.
//
// # Modules
//
// - [`engine`] -- The `StorageEngine` trait defining the key-value contract.
// - [`error`] -- The `StorageError` enum covering all engine failure modes.
// - [`volatile`] -- An in-memory `HashMap`-based engine for ephemeral data.
// - [`persistent`] -- A JSON-text engine over an injected synchronous
//   string store, plus the `StringStore` capability it consumes.
// - [`transactional`] -- The redb-backed engine running one transaction
//   per operation against a named collection.
//
// # Example
//
// ```rust
// use unikv_storage::engine::StorageEngine;
// use unikv_storage::volatile::VolatileEngine;
//
// # tokio_test::block_on(async {
// let engine = VolatileEngine::new();
// engine.set_item("greeting", "hello".to_string()).await.unwrap();
// assert_eq!(
//     engine.get_item("greeting").await.unwrap(),
//     Some("hello".to_string()),
// );
// # });
// ```

pub mod engine;
pub mod error;
pub mod persistent;
pub mod transactional;
pub mod volatile;

// Re-export the most commonly used types at the crate root for convenience.
pub use engine::StorageEngine;
pub use error::StorageError;
pub use persistent::{MemoryStringStore, PersistentKVEngine, StringStore};
pub use transactional::TransactionalStoreEngine;
pub use volatile::VolatileEngine;
