//! Tests for link_db (use in-memory DB helper from db).

use crate::link_db::{open_memory, InsertOutcome};
use crate::store::StoreError;

#[tokio::test]
async fn insert_then_find_by_code_and_address() {
    let db = open_memory().await.unwrap();
    let outcome = db
        .insert_link("abcDEF123", "https://example.com/a")
        .await
        .unwrap();
    let record = match outcome {
        InsertOutcome::Inserted(record) => record,
        other => panic!("expected Inserted, got {other:?}"),
    };
    assert_eq!(record.code, "abcDEF123");
    assert_eq!(record.created_at, record.updated_at);

    let by_code = db.find_by_code("abcDEF123").await.unwrap().unwrap();
    assert_eq!(by_code, record);
    let by_address = db
        .find_by_address("https://example.com/a")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_address, record);

    assert!(db.find_by_code("zzzzzzzzz").await.unwrap().is_none());
    assert!(db
        .find_by_address("https://example.com/b")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn duplicate_code_is_reported_not_overwritten() {
    let db = open_memory().await.unwrap();
    db.insert_link("aaaaaaaaa", "https://example.com/first")
        .await
        .unwrap();
    let second = db
        .insert_link("aaaaaaaaa", "https://example.com/second")
        .await
        .unwrap();
    assert_eq!(second, InsertOutcome::CodeTaken);

    let kept = db.find_by_code("aaaaaaaaa").await.unwrap().unwrap();
    assert_eq!(kept.address, "https://example.com/first");
}

#[tokio::test]
async fn address_lookup_is_exact_and_returns_oldest() {
    let db = open_memory().await.unwrap();
    db.insert_link("first0001", "https://example.com/x")
        .await
        .unwrap();
    db.insert_link("second002", "https://example.com/x")
        .await
        .unwrap();

    let hit = db
        .find_by_address("https://example.com/x")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(hit.code, "first0001");
    assert!(db
        .find_by_address("https://EXAMPLE.com/x")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn list_links_newest_first() {
    let db = open_memory().await.unwrap();
    assert!(db.list_links().await.unwrap().is_empty());
    db.insert_link("one000001", "https://a.example/one")
        .await
        .unwrap();
    db.insert_link("two000002", "https://b.example/two")
        .await
        .unwrap();

    let links = db.list_links().await.unwrap();
    assert_eq!(links.len(), 2);
    assert_eq!(links[0].code, "two000002");
    assert_eq!(links[1].code, "one000001");
}

#[tokio::test]
async fn wrong_length_code_violates_schema_check() {
    let db = open_memory().await.unwrap();
    let err = db.insert_link("short", "https://example.com/").await;
    assert!(matches!(err, Err(StoreError::Unavailable(_))));
}

#[tokio::test]
async fn closed_pool_surfaces_store_unavailable() {
    let db = open_memory().await.unwrap();
    db.close().await;
    let err = db.find_by_code("abcdefghi").await.unwrap_err();
    assert_eq!(err.to_string(), "link store unavailable");
    assert!(std::error::Error::source(&err).is_some());
}
