pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::db::store::ThreadStore;

/// Shared application state, constructed once in main and injected into
/// every handler. Nothing else in the process holds the pool.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub pool: PgPool,
    pub store: ThreadStore,
}

impl AppState {
    pub fn new(config: AppConfig, pool: PgPool) -> Self {
        Self {
            store: ThreadStore::new(pool.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
