//! Key-value store abstraction
//!
//! The persister writes through [`KeyValueStore`] instead of reaching for a
//! global handle, so callers choose where the data lands. Two implementations
//! ship with the crate:
//! - [`Database`] - SQLite-backed, durable across restarts
//! - [`MemoryStore`] - in-process map, useful for tests and embedding

use crate::{Database, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

/// String key-value storage
///
/// `set` overwrites unconditionally. Durability is up to the implementation.
///
/// # Examples
///
/// ```
/// use cache_users::{KeyValueStore, MemoryStore};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = MemoryStore::new();
/// store.set("users", "[]").await?;
/// assert_eq!(store.get("users").await?.as_deref(), Some("[]"));
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Store `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Read the value under `key`
    async fn get(&self, key: &str) -> Result<Option<String>>;
}

#[async_trait]
impl KeyValueStore for Database {
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_value(key, value).await
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        self.get_value(key).await
    }
}

/// In-memory [`KeyValueStore`]
///
/// Also counts writes, which lets callers check how often a key was set.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
    writes: AtomicUsize,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls made so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }
}
