//! # cache-users
//!
//! Fetches user records from a remote HTTP endpoint, keeps the valid ones
//! (`status == 1`), and writes the result to a key-value store under the
//! `users` key.
//!
//! The pipeline is three steps wrapped in one call:
//! - [`fetcher`] - one `GET /users`, with every transport failure mapped to
//!   [`Error::FetchFailure`]
//! - [`filter`] - keeps valid users, stops at the first `null` entry with
//!   [`Error::DirtyData`]
//! - [`persister`] - serializes to JSON and overwrites the `users` key
//!
//! [`pipeline::cache_users`] runs them in order. [`UserCache`] wires the
//! HTTP source and the SQLite store from a [`Config`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use cache_users::{Config, UserCache};
//! use cache_users::config::ApiConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config {
//!         api: ApiConfig {
//!             base_url: "https://api.example.com".to_string(),
//!             ..Default::default()
//!         },
//!         ..Default::default()
//!     };
//!
//!     let cache = UserCache::new(config).await?;
//!     cache.run().await?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// Configuration types
pub mod config;
/// Database persistence layer
pub mod db;
/// Error types
pub mod error;
/// Remote user source
pub mod fetcher;
/// Valid-user filtering
pub mod filter;
/// Writing users to the store
pub mod persister;
/// Fetch, filter, persist orchestration
pub mod pipeline;
/// Key-value store abstraction
pub mod store;
/// Core types
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use db::Database;
pub use error::{DatabaseError, Error, Result};
pub use fetcher::{HttpUserSource, UserSource, fetch_users};
pub use filter::filter_valid_users;
pub use persister::{USERS_KEY, store_users};
pub use pipeline::{UserCache, cache_users};
pub use store::{KeyValueStore, MemoryStore};
pub use types::User;
