// SPDX-License-Identifier: MIT
//! Walks each engine through the same set/get/clear sequence behind
//! `UniversalDatabase`.
//!
//! Run with `cargo run --example demo`.

use serde::{Deserialize, Serialize};
use tracing::info;
use unikv::{
    MemoryStringStore, PersistentKVEngine, TransactionalStoreEngine, UniversalDatabase,
    VolatileEngine,
};

#[derive(Debug, Serialize, Deserialize)]
struct Profile {
    name: String,
    age: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // In-memory engine: values held by clone, gone on drop.
    let memory_db: UniversalDatabase<String> = UniversalDatabase::new(VolatileEngine::new());
    memory_db.set("key1", "value1".to_string()).await?;
    let value = memory_db.get("key1").await?;
    info!(engine = memory_db.engine_name(), ?value, "key1");
    memory_db.clear().await?;

    // String-store engine: values serialized to JSON text.
    let kv_db: UniversalDatabase<Profile> =
        UniversalDatabase::new(PersistentKVEngine::new(MemoryStringStore::new()));
    kv_db
        .set(
            "key2",
            Profile {
                name: "John Doe".to_string(),
                age: 25,
            },
        )
        .await?;
    let value = kv_db.get("key2").await?;
    info!(engine = kv_db.engine_name(), ?value, "key2");
    kv_db.clear().await?;

    // Transactional engine: one redb transaction per operation.
    let dir = tempfile::tempdir()?;
    let txn_db: UniversalDatabase<String> = UniversalDatabase::new(
        TransactionalStoreEngine::new(dir.path().join("myDB.redb"), "store"),
    );
    txn_db.set("key3", "value3".to_string()).await?;
    let value = txn_db.get("key3").await?;
    info!(engine = txn_db.engine_name(), ?value, "key3");
    txn_db.clear().await?;

    Ok(())
}
