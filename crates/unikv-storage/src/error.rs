// SPDX-License-Identifier: MIT
//
// Storage error types for the UniKV engine abstraction.
//
// A single `StorageError` enum covers every failure mode an engine may
// hit: I/O errors, value serialization failures, and errors surfaced by
// the underlying store. Backend errors are carried unchanged as the error
// source; this layer performs no retries and no translation.

use thiserror::Error;

/// Errors that can occur when a storage engine touches its backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error in the underlying storage layer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to serialize or deserialize a stored value.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The underlying store failed an open, transaction, or action.
    ///
    /// The backend's own error is preserved as the source of this one.
    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl From<redb::DatabaseError> for StorageError {
    fn from(err: redb::DatabaseError) -> Self {
        StorageError::Backend(Box::new(err))
    }
}

impl From<redb::TransactionError> for StorageError {
    fn from(err: redb::TransactionError) -> Self {
        StorageError::Backend(Box::new(err))
    }
}

impl From<redb::TableError> for StorageError {
    fn from(err: redb::TableError) -> Self {
        StorageError::Backend(Box::new(err))
    }
}

impl From<redb::StorageError> for StorageError {
    fn from(err: redb::StorageError) -> Self {
        StorageError::Backend(Box::new(err))
    }
}

impl From<redb::CommitError> for StorageError {
    fn from(err: redb::CommitError) -> Self {
        StorageError::Backend(Box::new(err))
    }
}

impl From<tokio::task::JoinError> for StorageError {
    fn from(err: tokio::task::JoinError) -> Self {
        StorageError::Backend(Box::new(err))
    }
}
