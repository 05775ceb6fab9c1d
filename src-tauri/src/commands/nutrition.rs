use chrono::NaiveDate;
use skate_log_core::entries::{latest_weight_observation, list_entries};
use skate_log_core::nutrition::intake::{daily_intake, day_report, DayReport};
use skate_log_core::nutrition::{nutrition_overview, nutrition_targets, NutritionOverview, NutritionTargets};
use skate_log_core::settings::load_settings;
use skate_log_core::{Tracker, TrackerError};
use sqlx::SqlitePool;
use std::sync::Arc;
use tauri::State;
use tracing::debug;

use super::{parse_optional_date, today};
use crate::db::AppState;

/// ---------------------------------------------------------------------------
/// Nutrition Target Commands
/// ---------------------------------------------------------------------------

/// Targets for a `YYYY-MM-DD` date, or the rest-day baseline without one.
/// `None` until settings and a weight are saved.
#[tauri::command]
pub async fn get_nutrition_targets(
  state: State<'_, Arc<AppState>>,
  date: Option<String>,
) -> Result<Option<NutritionTargets>, TrackerError> {
  let date = parse_optional_date(date)?;
  targets_for(&state.db, date).await
}

#[tauri::command]
pub async fn get_nutrition_overview(
  state: State<'_, Arc<AppState>>,
) -> Result<NutritionOverview, TrackerError> {
  overview_for(&state.db, today()).await
}

/// Logged meals per day, newest first, each measured against that day's targets
#[tauri::command]
pub async fn get_daily_reports(
  state: State<'_, Arc<AppState>>,
) -> Result<Vec<DayReport>, TrackerError> {
  daily_reports(&state.db).await
}

async fn targets_for(pool: &SqlitePool, date: Option<NaiveDate>) -> Result<Option<NutritionTargets>, TrackerError> {
  let settings = load_settings(pool).await?;
  let weight = latest_weight_observation(pool).await?;

  let targets = nutrition_targets(&settings, weight.as_ref(), date);
  debug!(?date, available = targets.is_some(), "Computed nutrition targets");
  Ok(targets)
}

async fn overview_for(pool: &SqlitePool, today: NaiveDate) -> Result<NutritionOverview, TrackerError> {
  let settings = load_settings(pool).await?;
  let weight = latest_weight_observation(pool).await?;
  Ok(nutrition_overview(&settings, weight.as_ref(), today))
}

async fn daily_reports(pool: &SqlitePool) -> Result<Vec<DayReport>, TrackerError> {
  let settings = load_settings(pool).await?;
  let weight = latest_weight_observation(pool).await?;
  let entries = list_entries(pool, Tracker::Nutrition).await?;

  let reports = daily_intake(&entries)
    .into_iter()
    .map(|intake| {
      let targets = nutrition_targets(&settings, weight.as_ref(), Some(intake.date));
      day_report(intake, targets)
    })
    .collect();

  Ok(reports)
}
