//! Test utilities for command handlers
//!
//! - In-memory database behind an `AppState`
//! - Seeders and mock factories

use serde_json::Value;
use skate_log_core::entries::{insert_entry, Entry, Fields};
use skate_log_core::nutrition::{Goal, Sex, TrainingPhase};
use skate_log_core::settings::{save_settings, NutritionSettings};
use skate_log_core::Tracker;
use sqlx::SqlitePool;
use std::sync::Arc;
use tauri::test::MockRuntime;
use tauri::{App, Manager};

use crate::db::AppState;

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// In-memory database with migrations applied.
/// A single connection, since each connection would get its own database.
pub async fn setup_test_db() -> SqlitePool {
  skate_log_core::db::connect("sqlite::memory:", 1)
    .await
    .expect("Failed to create in-memory database")
}

pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// Mock app managing an `AppState` over `pool`
pub fn mock_app_with(pool: &SqlitePool) -> App<MockRuntime> {
  let state = Arc::new(AppState { db: pool.clone() });
  let app = tauri::test::mock_app();
  app.manage(state);
  app
}

/// Save complete nutrition settings
pub async fn seed_test_settings(pool: &SqlitePool) -> NutritionSettings {
  let settings = mock_nutrition_settings();
  save_settings(pool, &settings)
    .await
    .expect("Failed to seed settings");
  settings
}

/// Log a weight in the off-ice tracker
pub async fn seed_test_weight(pool: &SqlitePool, day: &str, pounds: f64) -> Entry {
  seed_test_entry(pool, Tracker::OffIce, day, serde_json::json!({ "weight": pounds, "weightUnit": "lbs" })).await
}

pub async fn seed_test_entry(pool: &SqlitePool, tracker: Tracker, day: &str, fields: Value) -> Entry {
  let date = chrono::NaiveDate::parse_from_str(day, "%Y-%m-%d").expect("test dates are YYYY-MM-DD");
  insert_entry(pool, tracker, date, mock_fields(fields))
    .await
    .expect("Failed to insert test entry")
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

pub fn mock_nutrition_settings() -> NutritionSettings {
  NutritionSettings {
    age: Some(25),
    sex: Some(Sex::Male),
    height_feet: Some(5),
    height_inches: Some(10),
    training_phase: Some(TrainingPhase::Power),
    on_ice_sessions_per_week: Some(1),
    goal: Some(Goal::MaintainWeight),
  }
}

pub fn mock_fields(value: Value) -> Fields {
  match value {
    Value::Object(map) => map,
    other => panic!("expected a JSON object, got {}", other),
  }
}
