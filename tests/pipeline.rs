//! End-to-end runs against a mock `/users` API, persisting to SQLite or memory

mod common;

use cache_users::{
    Database, Error, HttpUserSource, KeyValueStore, MemoryStore, USERS_KEY, User, UserCache,
    cache_users,
};
use common::*;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn all_valid_users_are_persisted_unchanged() {
    let server = mock_users_api(ResponseTemplate::new(200).set_body_json(all_valid_users())).await;
    let (config, _temp_dir) = config_for(&server);

    let cache = UserCache::new(config).await.unwrap();
    cache.run().await.unwrap();

    assert_eq!(
        stored_users(cache.store().as_ref()).await,
        Some(vec![
            User::new(1, "1", 1),
            User::new(2, "2", 1),
            User::new(3, "3", 1),
        ])
    );
}

#[tokio::test]
async fn only_status_one_users_are_persisted() {
    let server =
        mock_users_api(ResponseTemplate::new(200).set_body_json(mixed_status_users())).await;
    let (config, _temp_dir) = config_for(&server);

    let cache = UserCache::new(config).await.unwrap();
    cache.run().await.unwrap();

    assert_eq!(
        stored_users(cache.store().as_ref()).await,
        Some(vec![User::new(1, "1", 1)])
    );
}

#[tokio::test]
async fn api_failure_rejects_and_writes_nothing() {
    let server = mock_users_api(ResponseTemplate::new(500)).await;
    let (config, _temp_dir) = config_for(&server);

    let cache = UserCache::new(config).await.unwrap();
    let err = cache.run().await.unwrap_err();

    assert!(matches!(err, Error::FetchFailure));
    assert_eq!(err.to_string(), "api error");
    assert!(cache.store().get(USERS_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn null_payload_persists_empty_array() {
    let server = mock_users_api(ResponseTemplate::new(200).set_body_string("null")).await;
    let (config, _temp_dir) = config_for(&server);

    let cache = UserCache::new(config).await.unwrap();
    cache.run().await.unwrap();

    assert_eq!(
        cache.store().get(USERS_KEY).await.unwrap().as_deref(),
        Some("[]")
    );
}

#[tokio::test]
async fn dirty_data_rejects_and_writes_nothing() {
    let body = serde_json::json!([{ "id": 1, "name": "1", "status": 1 }, null]);
    let server = mock_users_api(ResponseTemplate::new(200).set_body_json(body)).await;
    let (config, _temp_dir) = config_for(&server);

    let cache = UserCache::new(config).await.unwrap();
    let err = cache.run().await.unwrap_err();

    assert_eq!(err.to_string(), "has dirty data,index at 1");
    assert!(cache.store().get(USERS_KEY).await.unwrap().is_none());
}

#[tokio::test]
async fn failed_run_keeps_previous_value() {
    let server = mock_users_api(ResponseTemplate::new(503)).await;
    let (config, _temp_dir) = config_for(&server);

    let db = Database::new(&config.persistence.database_path)
        .await
        .unwrap();
    db.set_value(USERS_KEY, r#"[{"id":4,"name":"old","status":1}]"#)
        .await
        .unwrap();

    let source = HttpUserSource::new(&config.api).unwrap();
    let err = cache_users(&source, &db).await.unwrap_err();

    assert!(matches!(err, Error::FetchFailure));
    assert_eq!(
        stored_users(&db).await,
        Some(vec![User::new(4, "old", 1)])
    );

    db.close().await;
}

#[tokio::test]
async fn second_run_overwrites_first() {
    let server =
        mock_users_api(ResponseTemplate::new(200).set_body_json(mixed_status_users())).await;
    let (config, _temp_dir) = config_for(&server);

    let db = Database::new(&config.persistence.database_path)
        .await
        .unwrap();
    db.set_value(USERS_KEY, "stale").await.unwrap();

    let source = HttpUserSource::new(&config.api).unwrap();
    cache_users(&source, &db).await.unwrap();

    assert_eq!(stored_users(&db).await, Some(vec![User::new(1, "1", 1)]));

    db.close().await;
}

#[tokio::test]
async fn memory_store_is_written_exactly_once() {
    let server = mock_users_api(ResponseTemplate::new(200).set_body_json(all_valid_users())).await;
    let (config, _temp_dir) = config_for(&server);

    let source = HttpUserSource::new(&config.api).unwrap();
    let store = MemoryStore::new();
    cache_users(&source, &store).await.unwrap();

    assert_eq!(store.write_count(), 1);
    let stored = store.get(USERS_KEY).await.unwrap().unwrap();
    assert_eq!(
        stored,
        r#"[{"id":1,"name":"1","status":1},{"id":2,"name":"2","status":1},{"id":3,"name":"3","status":1}]"#
    );
}
