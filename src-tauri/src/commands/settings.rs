use skate_log_core::settings::{self as store, NutritionSettings};
use skate_log_core::TrackerError;
use std::sync::Arc;
use tauri::State;

use crate::db::AppState;

/// ---------------------------------------------------------------------------
/// Nutrition Settings Commands
/// ---------------------------------------------------------------------------

#[tauri::command]
pub async fn get_nutrition_settings(
  state: State<'_, Arc<AppState>>,
) -> Result<NutritionSettings, TrackerError> {
  store::load_settings(&state.db).await
}

#[tauri::command]
pub async fn update_nutrition_settings(
  state: State<'_, Arc<AppState>>,
  settings: NutritionSettings,
) -> Result<NutritionSettings, TrackerError> {
  store::save_settings(&state.db, &settings).await?;
  Ok(settings)
}

/// Import the settings object saved by the browser version of the tracker
#[tauri::command]
pub async fn import_legacy_settings(
  state: State<'_, Arc<AppState>>,
  json: String,
) -> Result<NutritionSettings, TrackerError> {
  store::import_legacy_settings(&state.db, &json).await
}
