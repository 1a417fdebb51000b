use anyhow::Context;
use sqlx::postgres::PgPoolOptions;

use crate::db;

/// Apply pending migrations against DATABASE_URL. Kept out of server
/// startup so deploys control when schema changes land.
pub async fn handle() -> anyhow::Result<()> {
    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set to run migrations")?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
        .context("failed to connect to database")?;

    db::run_migrations(&pool).await.context("migration failed")?;

    println!("Migrations applied.");
    Ok(())
}
