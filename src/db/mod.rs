//! Database layer for cache-users
//!
//! Handles SQLite persistence for the key-value table the pipeline writes into.
//!
//! ## Submodules
//!
//! Methods on [`Database`] are organized by domain:
//! - [`migrations`] - Database lifecycle, schema migrations
//! - [`kv`] - Key-value reads and upserts

use sqlx::sqlite::SqlitePool;

mod kv;
mod migrations;

/// Database handle for cache-users
pub struct Database {
    pool: SqlitePool,
}
