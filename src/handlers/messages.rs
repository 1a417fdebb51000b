use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use super::required_trimmed;
use crate::db::models::{is_valid_kind, MESSAGE_KINDS};
use crate::error::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub content: Option<String>,
}

/// GET /api/threads/:id/messages - List a thread's messages, oldest first.
/// An unknown thread id yields an empty array, not a 404.
pub async fn list(
    State(state): State<AppState>,
    Path(thread_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let messages = state.store.list_messages(thread_id).await?;
    Ok(Json(messages))
}

/// POST /api/threads/:id/messages - Append a message to a thread
pub async fn create(
    State(state): State<AppState>,
    Path(thread_id): Path<i64>,
    Json(body): Json<CreateMessageRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let kind = required_trimmed("type", body.kind.as_deref())?;
    if !is_valid_kind(&kind) {
        return Err(ApiError::validation(
            "type",
            format!("type must be one of: {}", MESSAGE_KINDS.join(", ")),
        ));
    }

    let content = required_trimmed("content", body.content.as_deref())?;

    let message = state
        .store
        .insert_message(thread_id, &kind, &content)
        .await?;

    Ok((StatusCode::CREATED, Json(message)))
}
