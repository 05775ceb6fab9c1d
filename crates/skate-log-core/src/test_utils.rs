//! Shared fixtures for the core crate's tests
//!
//! - `setup_test_db`: migrated single-connection `sqlite::memory:` pool
//! - `seed_test_entry`, `mock_entry`, `mock_fields`: entries with fixed ids
//! - `mock_nutrition_settings`: a complete female profile
//! - `assert_approx_eq!` for float results

use chrono::NaiveDate;
use serde_json::Value;
use sqlx::SqlitePool;

use crate::entries::{Entry, Fields};
use crate::nutrition::{Goal, Sex, TrainingPhase};
use crate::settings::NutritionSettings;
use crate::trackers::Tracker;

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing
/// Runs all migrations and returns a ready-to-use pool
///
/// Uses max_connections(1) to prevent multiple pool connections from creating
/// isolated in-memory databases, which would cause intermittent test failures
pub async fn setup_test_db() -> SqlitePool {
  crate::db::connect("sqlite::memory:", 1)
    .await
    .expect("Failed to create in-memory database")
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// Insert an entry with a fixed id
pub async fn seed_test_entry(pool: &SqlitePool, id: i64, tracker: Tracker, day: &str, fields: Value) -> Entry {
  let entry = mock_entry(id, tracker, day, fields);
  crate::entries::store_entry(pool, &entry)
    .await
    .expect("Failed to insert test entry");
  entry
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

/// 30-year-old female, 5'6", phase 2, two ice sessions, maintaining
pub fn mock_nutrition_settings() -> NutritionSettings {
  NutritionSettings {
    age: Some(30),
    sex: Some(Sex::Female),
    height_feet: Some(5),
    height_inches: Some(6),
    training_phase: Some(TrainingPhase::Build),
    on_ice_sessions_per_week: Some(2),
    goal: Some(Goal::MaintainWeight),
  }
}

pub fn mock_entry(id: i64, tracker: Tracker, day: &str, fields: Value) -> Entry {
  Entry {
    id,
    tracker,
    date: date(day),
    fields: mock_fields(fields),
  }
}

pub fn mock_fields(value: Value) -> Fields {
  match value {
    Value::Object(map) => map,
    other => panic!("expected a JSON object, got {}", other),
  }
}

/// ---------------------------------------------------------------------------
/// Time Helpers
/// ---------------------------------------------------------------------------

pub fn date(day: &str) -> NaiveDate {
  NaiveDate::parse_from_str(day, "%Y-%m-%d").expect("test dates are YYYY-MM-DD")
}

/// ---------------------------------------------------------------------------
/// Test Macros
/// ---------------------------------------------------------------------------

/// Assert two floats are approximately equal within a tolerance
#[macro_export]
macro_rules! assert_approx_eq {
  ($left:expr, $right:expr, $tolerance:expr) => {
    let diff = ($left - $right).abs();
    assert!(
      diff < $tolerance,
      "Values not approximately equal: {} vs {} (diff: {}, tolerance: {})",
      $left,
      $right,
      diff,
      $tolerance
    );
  };
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name IN ('entries', 'nutrition_settings')",
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert_eq!(tables.len(), 2);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_entry_is_listed() {
    let pool = setup_test_db().await;

    let seeded = seed_test_entry(&pool, 7, Tracker::OnIce, "2025-06-01", json!({"iceTime": 45})).await;
    let listed = crate::entries::list_entries(&pool, Tracker::OnIce).await.unwrap();

    assert_eq!(listed, vec![seeded]);

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_mock_factories_create_valid_data() {
    assert!(mock_nutrition_settings().profile().is_some());

    let entry = mock_entry(1, Tracker::Nutrition, "2025-06-01", json!({"calories": 400}));
    assert_eq!(entry.number("calories"), Some(400.0));
    assert_eq!(entry.date, date("2025-06-01"));
  }
}
