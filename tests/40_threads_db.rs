mod common;

use anyhow::Result;
use reqwest::StatusCode;
use sqlx::postgres::PgPoolOptions;

use parley_api::client::{ApiClient, ClientError};
use parley_api::db::store::ThreadStore;

// End-to-end coverage of the database-dependent properties. These tests
// need a real Postgres instance; point PARLEY_TEST_DATABASE_URL at one to
// enable them (migrations are applied automatically).

const ABSENT_ID: i64 = 9_999_999_999;

fn test_database_url() -> Option<String> {
    std::env::var("PARLEY_TEST_DATABASE_URL").ok()
}

fn assert_not_found(err: ClientError) {
    match err {
        ClientError::Api { status, .. } => assert_eq!(status, StatusCode::NOT_FOUND),
        other => panic!("expected 404 Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn compound_create_links_message_to_thread() -> Result<()> {
    let Some(db_url) = test_database_url() else {
        eprintln!("skipping: PARLEY_TEST_DATABASE_URL not set");
        return Ok(());
    };
    let server = common::spawn_db_server(&db_url).await?;
    let client = ApiClient::new(server.base_url.clone(), Some(common::valid_token()));

    let created = client.create_thread("  Hi  ", "Hello").await?;

    // Title is stored trimmed; the first message is a user message linked
    // to the new thread
    assert_eq!(created.thread.title, "Hi");
    assert_eq!(created.message.thread_id, created.thread.id);
    assert_eq!(created.message.kind, "user");
    assert_eq!(created.message.content, "Hello");

    let fetched = client.get_thread(created.thread.id).await?;
    assert_eq!(fetched.title, "Hi");
    Ok(())
}

#[tokio::test]
async fn absent_thread_id_is_404_for_get_patch_delete() -> Result<()> {
    let Some(db_url) = test_database_url() else {
        eprintln!("skipping: PARLEY_TEST_DATABASE_URL not set");
        return Ok(());
    };
    let server = common::spawn_db_server(&db_url).await?;
    let client = ApiClient::new(server.base_url.clone(), Some(common::valid_token()));

    assert_not_found(client.get_thread(ABSENT_ID).await.unwrap_err());
    assert_not_found(client.rename_thread(ABSENT_ID, "New title").await.unwrap_err());
    assert_not_found(client.delete_thread(ABSENT_ID).await.unwrap_err());
    Ok(())
}

#[tokio::test]
async fn deleting_a_thread_cascades_to_its_messages() -> Result<()> {
    let Some(db_url) = test_database_url() else {
        eprintln!("skipping: PARLEY_TEST_DATABASE_URL not set");
        return Ok(());
    };
    let server = common::spawn_db_server(&db_url).await?;
    let client = ApiClient::new(server.base_url.clone(), Some(common::valid_token()));

    let created = client.create_thread("Cascade", "first").await?;
    let thread_id = created.thread.id;
    client.post_message(thread_id, "bot", "second").await?;
    client.post_message(thread_id, "user", "third").await?;

    let messages = client.list_messages(thread_id).await?;
    assert_eq!(messages.len(), 3);

    let deleted = client.delete_thread(thread_id).await?;
    assert_eq!(deleted.deleted_id, thread_id);

    // Verify at the store level that no message rows survived the cascade
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&db_url)
        .await?;
    let store = ThreadStore::new(pool);
    assert!(store.get_thread(thread_id).await?.is_none());
    assert!(store.list_messages(thread_id).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn store_reports_absent_ids() -> Result<()> {
    let Some(db_url) = test_database_url() else {
        eprintln!("skipping: PARLEY_TEST_DATABASE_URL not set");
        return Ok(());
    };
    // The store talks straight to the pool; no server needed
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&db_url)
        .await?;
    parley_api::db::run_migrations(&pool).await?;
    let store = ThreadStore::new(pool);

    assert!(store.get_thread(ABSENT_ID).await?.is_none());
    assert!(store.update_title(ABSENT_ID, "nope").await?.is_none());
    assert!(!store.delete_thread(ABSENT_ID).await?);
    Ok(())
}

#[tokio::test]
async fn messages_are_listed_oldest_first() -> Result<()> {
    let Some(db_url) = test_database_url() else {
        eprintln!("skipping: PARLEY_TEST_DATABASE_URL not set");
        return Ok(());
    };
    let server = common::spawn_db_server(&db_url).await?;
    let client = ApiClient::new(server.base_url.clone(), Some(common::valid_token()));

    let created = client.create_thread("Ordering", "first").await?;
    let thread_id = created.thread.id;
    client.post_message(thread_id, "bot", "second").await?;

    let messages = client.list_messages(thread_id).await?;
    let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, vec!["first", "second"]);
    Ok(())
}
