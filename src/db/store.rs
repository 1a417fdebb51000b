use sqlx::PgPool;

use crate::db::models::{Message, Thread};

const THREAD_COLUMNS: &str = "id, title, created_at";
const MESSAGE_COLUMNS: &str = "id, thread_id, \"type\", content, created_at";

/// Query layer over the threads and messages tables. Holds a pool clone;
/// cheap to clone, one instance lives in AppState.
#[derive(Clone)]
pub struct ThreadStore {
    pool: PgPool,
}

impl ThreadStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_threads(&self) -> Result<Vec<Thread>, sqlx::Error> {
        let sql = format!(
            "SELECT {THREAD_COLUMNS} FROM threads ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Thread>(&sql).fetch_all(&self.pool).await
    }

    pub async fn get_thread(&self, id: i64) -> Result<Option<Thread>, sqlx::Error> {
        let sql = format!("SELECT {THREAD_COLUMNS} FROM threads WHERE id = $1");
        sqlx::query_as::<_, Thread>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Returns None when the thread does not exist.
    pub async fn update_title(&self, id: i64, title: &str) -> Result<Option<Thread>, sqlx::Error> {
        let sql = format!(
            "UPDATE threads SET title = $2 WHERE id = $1 RETURNING {THREAD_COLUMNS}"
        );
        sqlx::query_as::<_, Thread>(&sql)
            .bind(id)
            .bind(title)
            .fetch_optional(&self.pool)
            .await
    }

    /// Returns false when the thread does not exist. Messages go with the
    /// thread via ON DELETE CASCADE.
    pub async fn delete_thread(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM threads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn list_messages(&self, thread_id: i64) -> Result<Vec<Message>, sqlx::Error> {
        let sql = format!(
            "SELECT {MESSAGE_COLUMNS} FROM messages WHERE thread_id = $1 ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Message>(&sql)
            .bind(thread_id)
            .fetch_all(&self.pool)
            .await
    }

    pub async fn insert_message(
        &self,
        thread_id: i64,
        kind: &str,
        content: &str,
    ) -> Result<Message, sqlx::Error> {
        let sql = format!(
            "INSERT INTO messages (thread_id, \"type\", content) VALUES ($1, $2, $3) RETURNING {MESSAGE_COLUMNS}"
        );
        sqlx::query_as::<_, Message>(&sql)
            .bind(thread_id)
            .bind(kind)
            .bind(content)
            .fetch_one(&self.pool)
            .await
    }

    /// Compound create: thread plus its first user message in one
    /// transaction, so a failed second insert never leaves an orphaned
    /// empty thread behind.
    pub async fn create_thread_with_message(
        &self,
        title: &str,
        content: &str,
    ) -> Result<(Thread, Message), sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let sql = format!("INSERT INTO threads (title) VALUES ($1) RETURNING {THREAD_COLUMNS}");
        let thread = sqlx::query_as::<_, Thread>(&sql)
            .bind(title)
            .fetch_one(&mut *tx)
            .await?;

        let sql = format!(
            "INSERT INTO messages (thread_id, \"type\", content) VALUES ($1, 'user', $2) RETURNING {MESSAGE_COLUMNS}"
        );
        let message = sqlx::query_as::<_, Message>(&sql)
            .bind(thread.id)
            .bind(content)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok((thread, message))
    }
}
