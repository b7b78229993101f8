// SPDX-License-Identifier: MIT
//
// Core storage engine trait for UniKV.
//
// Defines the `StorageEngine` contract that every storage adapter must
// satisfy. The trait provides a four-method key-value interface keyed by
// strings and generic over the stored value type. Engines are expected to
// be thread-safe (`Send + Sync`) and fully asynchronous.

use async_trait::async_trait;

use crate::error::StorageError;

/// A pluggable key-value storage engine.
///
/// Each engine instance owns its own set of entries. How a value is
/// represented at rest (cloned in memory, serialized to text, serialized
/// into a transactional store) is the engine's business; callers see only
/// the uniform contract below.
///
/// No method fails synchronously. Every failure, including ones detected
/// before the first suspension point, surfaces through the returned
/// future's `Err` channel.
///
/// Implementations must be safe to share across threads and tokio tasks.
#[async_trait]
pub trait StorageEngine<T>: Send + Sync
where
    T: Send + 'static,
{
    /// Store `value` under `key`, overwriting any previous value.
    async fn set_item(&self, key: &str, value: T) -> Result<(), StorageError>;

    /// Retrieve the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist, rather than an error.
    async fn get_item(&self, key: &str) -> Result<Option<T>, StorageError>;

    /// Remove the value stored under `key`.
    ///
    /// Removing a key that was never set is a successful no-op.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    /// Remove all entries from this engine.
    async fn clear(&self) -> Result<(), StorageError>;

    /// A human-readable name for this engine, used in logging.
    fn name(&self) -> &str;
}
