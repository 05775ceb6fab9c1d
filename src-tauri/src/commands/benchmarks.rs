use skate_log_core::benchmarks::{chart_series, personal_bests, ChartSeries, PersonalBest};
use skate_log_core::entries::list_entries;
use skate_log_core::{Tracker, TrackerError};
use std::sync::Arc;
use tauri::State;

use crate::db::AppState;

#[tauri::command]
pub async fn get_personal_bests(
  state: State<'_, Arc<AppState>>,
  tracker: Tracker,
) -> Result<Vec<PersonalBest>, TrackerError> {
  let entries = list_entries(&state.db, tracker).await?;
  Ok(personal_bests(tracker, &entries))
}

#[tauri::command]
pub async fn get_chart_series(
  state: State<'_, Arc<AppState>>,
  tracker: Tracker,
) -> Result<Vec<ChartSeries>, TrackerError> {
  let entries = list_entries(&state.db, tracker).await?;
  Ok(chart_series(tracker, &entries))
}
