//! HTTP client for the Parley API, the console counterpart of a browser
//! fetch wrapper: it attaches the cached bearer token when one exists and
//! turns 401 responses into a `SessionExpired` error carrying the request
//! path as the re-login return target.

use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::db::models::{Message, Thread};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("session expired while requesting {return_to}")]
    SessionExpired { return_to: String },

    #[error("{message}")]
    Api { status: StatusCode, message: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Response body of the compound thread creation endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedThread {
    pub thread: Thread,
    pub message: Message,
}

/// Response body of thread deletion.
#[derive(Debug, Clone, Deserialize)]
pub struct DeletedThread {
    pub message: String,
    #[serde(rename = "deletedId")]
    pub deleted_id: i64,
}

pub struct ApiClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
            token,
        }
    }

    pub async fn list_threads(&self) -> Result<Vec<Thread>, ClientError> {
        self.request(Method::GET, "/api/threads", None).await
    }

    pub async fn get_thread(&self, id: i64) -> Result<Thread, ClientError> {
        self.request(Method::GET, &format!("/api/threads/{id}"), None)
            .await
    }

    pub async fn list_messages(&self, thread_id: i64) -> Result<Vec<Message>, ClientError> {
        self.request(Method::GET, &format!("/api/threads/{thread_id}/messages"), None)
            .await
    }

    pub async fn post_message(
        &self,
        thread_id: i64,
        kind: &str,
        content: &str,
    ) -> Result<Message, ClientError> {
        self.request(
            Method::POST,
            &format!("/api/threads/{thread_id}/messages"),
            Some(json!({ "type": kind, "content": content })),
        )
        .await
    }

    pub async fn create_thread(
        &self,
        title: &str,
        content: &str,
    ) -> Result<CreatedThread, ClientError> {
        self.request(
            Method::POST,
            "/api/threads",
            Some(json!({ "title": title, "content": content })),
        )
        .await
    }

    pub async fn rename_thread(&self, id: i64, title: &str) -> Result<Thread, ClientError> {
        self.request(
            Method::PATCH,
            &format!("/api/threads/{id}"),
            Some(json!({ "title": title })),
        )
        .await
    }

    pub async fn delete_thread(&self, id: i64) -> Result<DeletedThread, ClientError> {
        self.request(Method::DELETE, &format!("/api/threads/{id}"), None)
            .await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, &url);

        // Unauthenticated calls degrade silently to no header; the server
        // decides what they may do.
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::SessionExpired {
                return_to: path.to_string(),
            });
        }

        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
                .unwrap_or_else(|| format!("request failed with status {status}"));
            return Err(ClientError::Api { status, message });
        }

        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = ApiClient::new("http://localhost:3000/", None);
        assert_eq!(client.base_url, "http://localhost:3000");

        let client = ApiClient::new("http://localhost:3000", Some("tok".into()));
        assert_eq!(client.base_url, "http://localhost:3000");
    }

    #[test]
    fn session_expired_names_the_return_target() {
        let err = ClientError::SessionExpired {
            return_to: "/api/threads/7".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "session expired while requesting /api/threads/7"
        );
    }
}
