//! Error types for cache-users
//!
//! The pipeline has two domain failures, [`Error::FetchFailure`] and
//! [`Error::DirtyData`]. Both carry only a message. The remaining variants
//! cover the storage and configuration layers underneath.

use thiserror::Error;

/// Result type alias for cache-users operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for cache-users
#[derive(Debug, Error)]
pub enum Error {
    /// The remote user list could not be fetched
    ///
    /// Every lower-level transport error maps to this variant. The original
    /// cause is not kept.
    #[error("api error")]
    FetchFailure,

    /// A null entry was found where a user record was expected
    #[error("has dirty data,index at {index}")]
    DirtyData {
        /// Zero-based position of the first null entry
        index: usize,
    },

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "base_url")
        key: Option<String>,
    },

    /// Database operation failed
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    /// SQLx database error
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Database-related errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to connect to database
    #[error("failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to run migrations
    #[error("failed to run migrations: {0}")]
    MigrationFailed(String),

    /// Query failed
    #[error("query failed: {0}")]
    QueryFailed(String),
}

impl Error {
    /// Machine-readable error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::FetchFailure => "fetch_failure",
            Error::DirtyData { .. } => "dirty_data",
            Error::Config { .. } => "config_error",
            Error::Database(_) => "database_error",
            Error::Sqlx(_) => "database_error",
            Error::Serialization(_) => "serialization_error",
        }
    }
}
