use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

use crate::error::Result;

pub type DbPool = SqlitePool;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open (creating if needed) the database at `path` and run migrations
pub async fn open(path: &Path, max_connections: u32) -> Result<DbPool> {
  info!(path = %path.display(), "Initializing database");

  let options = SqliteConnectOptions::new()
    .filename(path)
    .create_if_missing(true);

  let pool = SqlitePoolOptions::new()
    .max_connections(max_connections)
    .connect_with(options)
    .await?;

  MIGRATOR.run(&pool).await?;

  info!("Database initialized successfully");
  Ok(pool)
}

/// Connect to a database URL such as `sqlite::memory:` and run migrations
pub async fn connect(url: &str, max_connections: u32) -> Result<DbPool> {
  let options = SqliteConnectOptions::from_str(url)?;

  let pool = SqlitePoolOptions::new()
    .max_connections(max_connections)
    .connect_with(options)
    .await?;

  MIGRATOR.run(&pool).await?;
  Ok(pool)
}
