use skate_log_core::db::{self, DbPool};
use std::fs;
use std::path::PathBuf;
use tauri::Manager;

use crate::config::AppConfig;

/// Application state holding the database connection pool
pub struct AppState {
  pub db: DbPool,
}

/// Get the path to the database file
/// Stored in the platform app data dir, e.g.
/// ~/Library/Application Support/com.skatelog.app/skate-log.db
fn get_db_path<R: tauri::Runtime>(
  app: &tauri::AppHandle<R>,
  config: &AppConfig,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
  if let Some(path) = &config.db_path {
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent)?;
    }
    return Ok(path.clone());
  }

  let data_dir = app
    .path()
    .app_data_dir()
    .map_err(|e| format!("Failed to get app data dir: {}", e))?;

  // Create directory if it doesn't exist
  fs::create_dir_all(&data_dir)?;

  Ok(data_dir.join("skate-log.db"))
}

/// Initialize the database connection pool and run migrations
pub async fn initialize_db<R: tauri::Runtime>(
  app: &tauri::AppHandle<R>,
  config: &AppConfig,
) -> Result<DbPool, Box<dyn std::error::Error>> {
  let db_path = get_db_path(app, config)?;
  let pool = db::open(&db_path, config.max_connections).await?;
  Ok(pool)
}
