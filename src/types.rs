//! Core types for cache-users

use serde::{Deserialize, Serialize};

/// A user record as returned by the remote `/users` endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: i64,
    /// Display name
    pub name: String,
    /// Status flag (1 = valid/active, anything else = invalid)
    pub status: i64,
}

impl User {
    /// Status value that marks a user as valid
    pub const VALID_STATUS: i64 = 1;

    /// Create a new user record
    pub fn new(id: i64, name: impl Into<String>, status: i64) -> Self {
        Self {
            id,
            name: name.into(),
            status,
        }
    }

    /// Whether this user's status marks it as valid
    pub fn is_valid(&self) -> bool {
        self.status == Self::VALID_STATUS
    }
}
