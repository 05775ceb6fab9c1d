use chrono::Utc;
use serde::Serialize;
use skate_log_core::entries::{self as store, parse_date, Entry, Fields};
use skate_log_core::transfer::{self, ImportSummary};
use skate_log_core::{Tracker, TrackerError};
use std::sync::Arc;
use tauri::State;
use tracing::info;

use super::today;
use crate::db::AppState;

/// ---------------------------------------------------------------------------
/// Entry Commands
/// ---------------------------------------------------------------------------

#[tauri::command]
pub async fn get_entries(
  state: State<'_, Arc<AppState>>,
  tracker: Tracker,
) -> Result<Vec<Entry>, TrackerError> {
  store::list_entries(&state.db, tracker).await
}

#[tauri::command]
pub async fn save_entry(
  state: State<'_, Arc<AppState>>,
  tracker: Tracker,
  date: String,
  fields: Fields,
) -> Result<Entry, TrackerError> {
  let date = parse_date(&date)?;
  store::insert_entry(&state.db, tracker, date, fields).await
}

#[tauri::command]
pub async fn delete_entry(
  state: State<'_, Arc<AppState>>,
  id: i64,
) -> Result<(), TrackerError> {
  store::delete_entry(&state.db, id).await
}

/// Remove every entry of one tracker. Returns the number removed.
#[tauri::command]
pub async fn clear_entries(
  state: State<'_, Arc<AppState>>,
  tracker: Tracker,
) -> Result<u64, TrackerError> {
  let removed = store::clear_entries(&state.db, tracker).await?;
  info!(tracker = %tracker, removed, "Cleared tracker data");
  Ok(removed)
}

/// ---------------------------------------------------------------------------
/// Backup Commands
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct ExportFile {
  pub file_name: String,
  pub contents: String,
  pub entry_count: usize,
}

#[tauri::command]
pub async fn export_entries(
  state: State<'_, Arc<AppState>>,
  tracker: Tracker,
) -> Result<ExportFile, TrackerError> {
  let entries = store::list_entries(&state.db, tracker).await?;
  if entries.is_empty() {
    return Err(TrackerError::NotFound(format!("no {} entries to export", tracker)));
  }

  Ok(ExportFile {
    file_name: transfer::export_file_name(tracker, today()),
    contents: transfer::export_entries(&entries, Utc::now())?,
    entry_count: entries.len(),
  })
}

#[tauri::command]
pub async fn import_entries(
  state: State<'_, Arc<AppState>>,
  tracker: Tracker,
  json: String,
) -> Result<ImportSummary, TrackerError> {
  transfer::import_entries(&state.db, tracker, &json).await
}
