use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;

use super::required_trimmed;
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateThreadRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RenameThreadRequest {
    pub title: Option<String>,
}

/// GET /api/threads - List threads, newest first
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let threads = state.store.list_threads().await?;
    Ok(Json(threads))
}

/// GET /api/threads/:id - Fetch a single thread
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let thread = state
        .store
        .get_thread(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("thread {id} not found")))?;

    Ok(Json(thread))
}

/// POST /api/threads - Create a thread together with its first user message
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateThreadRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let title = required_trimmed("title", body.title.as_deref())?;
    let content = required_trimmed("content", body.content.as_deref())?;

    let (thread, message) = state
        .store
        .create_thread_with_message(&title, &content)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "thread": thread, "message": message })),
    ))
}

/// PATCH /api/threads/:id - Rename a thread
pub async fn rename(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<RenameThreadRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let title = required_trimmed("title", body.title.as_deref())?;

    let thread = state
        .store
        .update_title(id, &title)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("thread {id} not found")))?;

    Ok(Json(thread))
}

/// DELETE /api/threads/:id - Delete a thread and, via cascade, its messages
pub async fn destroy(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = state.store.delete_thread(id).await?;
    if !deleted {
        return Err(ApiError::not_found(format!("thread {id} not found")));
    }

    Ok(Json(json!({
        "message": "thread deleted",
        "deletedId": id,
    })))
}
