use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::config::AppConfig;

pub type DbPool = SqlitePool;

/// Application state holding the database connection pool
pub struct AppState {
  pub db: DbPool,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("Database error: {0}")]
  Database(#[from] sqlx::Error),

  #[error("Migration failed: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),
}

/// Open the connection pool and run migrations
pub async fn initialize_db(config: &AppConfig) -> Result<DbPool, StoreError> {
  // Each pooled connection to `sqlite::memory:` would be its own database
  let max_connections = if config.is_in_memory() {
    1
  } else {
    config.max_connections
  };

  info!(path = %config.db_path, max_connections, "Initializing database");

  let pool = SqlitePoolOptions::new()
    .max_connections(max_connections)
    .connect(&config.database_url())
    .await?;

  sqlx::migrate!("./migrations").run(&pool).await?;

  info!("Database initialized");

  Ok(pool)
}
