//! Writing users to the store

use crate::Result;
use crate::store::KeyValueStore;
use crate::types::User;

/// Key the filtered user list is stored under
pub const USERS_KEY: &str = "users";

/// Serialize `users` to JSON and write it under [`USERS_KEY`]
///
/// Overwrites any previous value. Store errors are returned as-is.
pub async fn store_users(store: &dyn KeyValueStore, users: &[User]) -> Result<()> {
    let json = serde_json::to_string(users)?;
    store.set(USERS_KEY, &json).await
}
