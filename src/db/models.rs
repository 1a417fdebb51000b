use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A conversation container. Deleting a thread cascades to its messages.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Thread {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// One utterance within a thread, authored by `user` or `bot`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Message {
    pub id: i64,
    pub thread_id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

pub const MESSAGE_KINDS: &[&str] = &["user", "bot"];

pub fn is_valid_kind(kind: &str) -> bool {
    MESSAGE_KINDS.contains(&kind)
}
