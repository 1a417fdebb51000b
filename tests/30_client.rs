mod common;

use anyhow::Result;
use reqwest::StatusCode;

use parley_api::client::{ApiClient, ClientError};

#[tokio::test]
async fn expired_token_becomes_session_expired() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = ApiClient::new(server.base_url.clone(), Some(common::expired_token()));

    let err = client.list_threads().await.unwrap_err();
    match err {
        ClientError::SessionExpired { return_to } => assert_eq!(return_to, "/api/threads"),
        other => panic!("expected SessionExpired, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn anonymous_request_becomes_session_expired_with_return_target() -> Result<()> {
    let server = common::ensure_server().await?;
    // No cached token: the request goes out without an Authorization header
    let client = ApiClient::new(server.base_url.clone(), None);

    let err = client.get_thread(7).await.unwrap_err();
    match err {
        ClientError::SessionExpired { return_to } => assert_eq!(return_to, "/api/threads/7"),
        other => panic!("expected SessionExpired, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn server_errors_surface_the_displayable_message() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = ApiClient::new(server.base_url.clone(), Some(common::valid_token()));

    // The shared server has no reachable database, so an authenticated list
    // fails server-side with a generic 500
    let err = client.list_threads().await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert!(!message.is_empty());
        }
        other => panic!("expected Api error, got {:?}", other),
    }
    Ok(())
}

#[tokio::test]
async fn validation_errors_surface_field_specific_message() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = ApiClient::new(server.base_url.clone(), Some(common::valid_token()));

    let err = client.create_thread("   ", "Hello").await.unwrap_err();
    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(message.contains("title"), "message was: {}", message);
        }
        other => panic!("expected Api error, got {:?}", other),
    }
    Ok(())
}
