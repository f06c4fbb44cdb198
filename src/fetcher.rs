//! Remote user source
//!
//! [`UserSource`] is the seam between the pipeline and the network.
//! [`HttpUserSource`] is the reqwest-backed implementation: one `GET` per
//! call, a `null` or empty body becomes an empty list, and every transport
//! failure becomes [`Error::FetchFailure`].

use crate::config::ApiConfig;
use crate::types::User;
use crate::{Error, Result};
use async_trait::async_trait;
use std::fmt::Display;

/// Source of raw user entries
///
/// Entries are `Option<User>` because the remote list may contain `null`s.
/// Rejecting them is the filter's job, not the source's.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch the full user list
    async fn fetch_users(&self) -> Result<Vec<Option<User>>>;
}

/// Fetch users from `source`
pub async fn fetch_users(source: &dyn UserSource) -> Result<Vec<Option<User>>> {
    let users = source.fetch_users().await?;
    tracing::debug!(count = users.len(), "fetched user entries");
    Ok(users)
}

/// [`UserSource`] that reads the user list over HTTP
pub struct HttpUserSource {
    client: reqwest::Client,
    url: String,
}

impl HttpUserSource {
    /// Build a source from API configuration
    ///
    /// The request URL is `base_url` followed by `users_path`.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Config {
                message: format!("Failed to create HTTP client: {}", e),
                key: None,
            })?;

        Ok(Self::with_client(
            client,
            &config.base_url,
            &config.users_path,
        ))
    }

    /// Build a source around an existing client
    pub fn with_client(client: reqwest::Client, base_url: &str, users_path: &str) -> Self {
        let url = format!("{}{}", base_url.trim_end_matches('/'), users_path);
        Self { client, url }
    }

    /// Full request URL
    pub fn url(&self) -> &str {
        &self.url
    }

    // The cause is only logged; callers see a uniform FetchFailure.
    fn fetch_failure(&self, cause: impl Display) -> Error {
        tracing::debug!(url = %self.url, error = %cause, "user fetch failed");
        Error::FetchFailure
    }
}

#[async_trait]
impl UserSource for HttpUserSource {
    async fn fetch_users(&self) -> Result<Vec<Option<User>>> {
        tracing::debug!(url = %self.url, "fetching users");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| self.fetch_failure(e))?;

        let body = response.text().await.map_err(|e| self.fetch_failure(e))?;

        decode_users(&body).map_err(|e| self.fetch_failure(e))
    }
}

/// Decode a `/users` response body
///
/// An empty body and JSON `null` both mean "no users".
fn decode_users(body: &str) -> std::result::Result<Vec<Option<User>>, serde_json::Error> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }

    let users: Option<Vec<Option<User>>> = serde_json::from_str(body)?;
    Ok(users.unwrap_or_default())
}
