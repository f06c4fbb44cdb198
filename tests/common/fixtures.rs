//! Mock API and store fixtures

use cache_users::config::{ApiConfig, PersistenceConfig};
use cache_users::{Config, KeyValueStore, USERS_KEY, User};
use serde_json::Value;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Three users, all valid
pub fn all_valid_users() -> Value {
    serde_json::json!([
        { "id": 1, "name": "1", "status": 1 },
        { "id": 2, "name": "2", "status": 1 },
        { "id": 3, "name": "3", "status": 1 }
    ])
}

/// One valid user followed by two with status 2
pub fn mixed_status_users() -> Value {
    serde_json::json!([
        { "id": 1, "name": "1", "status": 1 },
        { "id": 2, "name": "2", "status": 2 },
        { "id": 3, "name": "3", "status": 2 }
    ])
}

/// Start a mock API whose `GET /users` returns `template` exactly once
pub async fn mock_users_api(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(template)
        .expect(1)
        .mount(&server)
        .await;
    server
}

/// Config pointing at `server`, with the database inside a fresh temp dir
pub fn config_for(server: &MockServer) -> (Config, TempDir) {
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let config = Config {
        api: ApiConfig {
            base_url: server.uri(),
            ..Default::default()
        },
        persistence: PersistenceConfig {
            database_path: temp_dir.path().join("cache-users.db"),
        },
    };
    (config, temp_dir)
}

/// Decode whatever is stored under the `users` key
pub async fn stored_users(store: &dyn KeyValueStore) -> Option<Vec<User>> {
    store
        .get(USERS_KEY)
        .await
        .expect("store read failed")
        .map(|json| serde_json::from_str(&json).expect("stored value is not a user list"))
}
