//! Configuration types for cache-users

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, time::Duration};

/// Main configuration for [`UserCache`](crate::UserCache)
///
/// - [`api`](ApiConfig) - where the user list is fetched from
/// - [`persistence`](PersistenceConfig) - where the filtered list is stored
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Remote user endpoint settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Local storage settings
    #[serde(default)]
    pub persistence: PersistenceConfig,
}

impl Config {
    /// Check that the configuration can be used to build a [`UserCache`](crate::UserCache)
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.api.base_url).map_err(|e| Error::Config {
            message: format!("invalid base URL '{}': {}", self.api.base_url, e),
            key: Some("base_url".to_string()),
        })?;

        if !self.api.users_path.starts_with('/') {
            return Err(Error::Config {
                message: format!(
                    "users path '{}' must start with '/'",
                    self.api.users_path
                ),
                key: Some("users_path".to_string()),
            });
        }

        Ok(())
    }
}

/// Remote user endpoint configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API (default: "http://localhost:3000")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Resource path of the user list (default: "/users")
    #[serde(default = "default_users_path")]
    pub users_path: String,

    /// Request timeout handed to the HTTP client (default: 30 seconds)
    #[serde(default = "default_timeout", with = "duration_serde")]
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            users_path: default_users_path(),
            timeout: default_timeout(),
        }
    }
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Database path (default: "./cache-users.db")
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_users_path() -> String {
    "/users".to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_database_path() -> PathBuf {
    PathBuf::from("./cache-users.db")
}

// Duration serialization helper (whole seconds)
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
