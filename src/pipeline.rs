//! Fetch, filter, persist orchestration

use crate::Result;
use crate::config::Config;
use crate::db::Database;
use crate::fetcher::{HttpUserSource, UserSource, fetch_users};
use crate::filter::filter_valid_users;
use crate::persister::store_users;
use crate::store::KeyValueStore;
use std::sync::Arc;

/// Run one fetch, filter, persist cycle
///
/// Fetch and filter errors propagate unchanged. Nothing is written unless
/// both succeed.
pub async fn cache_users(source: &dyn UserSource, store: &dyn KeyValueStore) -> Result<()> {
    tracing::debug!("caching users");

    let users = fetch_users(source).await?;
    let valid = filter_valid_users(users)?;
    store_users(store, &valid).await?;

    tracing::info!(count = valid.len(), "cached valid users");
    Ok(())
}

/// Configured user cache: an HTTP source and a store wired together
///
/// Runs are independent. Concurrent `run` calls are not serialized and
/// race on the `users` key.
pub struct UserCache {
    source: Arc<dyn UserSource>,
    store: Arc<dyn KeyValueStore>,
}

impl UserCache {
    /// Build a cache from configuration
    ///
    /// Validates `config`, builds the HTTP source, and opens the SQLite
    /// database at `persistence.database_path`.
    pub async fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let source = HttpUserSource::new(&config.api)?;
        let db = Database::new(&config.persistence.database_path).await?;

        Ok(Self::with_parts(Arc::new(source), Arc::new(db)))
    }

    /// Build a cache from existing collaborators
    pub fn with_parts(source: Arc<dyn UserSource>, store: Arc<dyn KeyValueStore>) -> Self {
        Self { source, store }
    }

    /// Run one cycle
    pub async fn run(&self) -> Result<()> {
        cache_users(self.source.as_ref(), self.store.as_ref()).await
    }

    /// The store users are written to
    pub fn store(&self) -> &Arc<dyn KeyValueStore> {
        &self.store
    }
}
