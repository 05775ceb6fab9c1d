//! Stored nutrition profile

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::{Result, TrackerError};
use crate::nutrition::schedule::leading_number;
use crate::nutrition::{Goal, Profile, Sex, TrainingPhase};

/// ---------------------------------------------------------------------------
/// Nutrition Settings
/// ---------------------------------------------------------------------------

/// Profile as the user saved it. Every field may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionSettings {
  pub age: Option<i64>,
  pub sex: Option<Sex>,
  pub height_feet: Option<i64>,
  pub height_inches: Option<i64>,
  pub training_phase: Option<TrainingPhase>,
  pub on_ice_sessions_per_week: Option<i64>,
  pub goal: Option<Goal>,
}

impl NutritionSettings {
  /// Complete profile, or `None` while age, sex, height or goal is missing.
  /// Saved values are taken as they are, zero or negative included.
  pub fn profile(&self) -> Option<Profile> {
    Some(Profile {
      age: self.age?,
      sex: self.sex?,
      height_feet: self.height_feet?,
      height_inches: self.height_inches.unwrap_or(0),
      phase: self.training_phase,
      on_ice_sessions_per_week: self.on_ice_sessions_per_week.unwrap_or(0),
      goal: self.goal?,
    })
  }

  /// Settings object exported by the browser tracker, where every value is
  /// the text of a form control:
  ///
  /// ```json
  /// { "age": "21", "sex": "Female", "heightFt": "5", "heightIn": "6",
  ///   "trainingPhase": "Phase 2 — Basics 3–4 (Edges & Crossovers)",
  ///   "onIceDays": "4+", "goal": "Gain muscle" }
  /// ```
  pub fn from_legacy_json(json: &str) -> Result<Self> {
    let value: Value = serde_json::from_str(json)?;
    let object = value
      .as_object()
      .ok_or_else(|| TrackerError::Import("settings must be a JSON object".to_string()))?;

    let text = |key: &str| -> Option<String> {
      match object.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
      }
    };
    let integer = |key: &str| text(key).and_then(|s| leading_integer(&s));

    Ok(Self {
      age: integer("age"),
      // The browser form only distinguishes "Male"; anything else was female
      sex: text("sex").map(|s| Sex::from_label(&s).unwrap_or(Sex::Female)),
      height_feet: integer("heightFt"),
      height_inches: integer("heightIn"),
      training_phase: text("trainingPhase").and_then(|s| TrainingPhase::from_label(&s)),
      on_ice_sessions_per_week: integer("onIceDays"),
      goal: text("goal").map(|s| Goal::from_label(&s)),
    })
  }
}

/// Integer prefix of a form value: "4+" is 4, "0 (not on ice yet)" is 0
fn leading_integer(text: &str) -> Option<i64> {
  let trimmed = text.trim_start();
  if !trimmed.starts_with(|c: char| c.is_ascii_digit()) {
    return None;
  }
  leading_number(trimmed).map(i64::from)
}

/// ---------------------------------------------------------------------------
/// Storage
/// ---------------------------------------------------------------------------

type SettingsRow = (
  Option<i64>,
  Option<String>,
  Option<i64>,
  Option<i64>,
  Option<i64>,
  Option<i64>,
  Option<String>,
);

pub async fn load_settings(pool: &SqlitePool) -> Result<NutritionSettings> {
  let row: Option<SettingsRow> = sqlx::query_as(
    r#"
    SELECT age, sex, height_feet, height_inches, training_phase,
           on_ice_sessions_per_week, goal
    FROM nutrition_settings
    WHERE id = 1
    "#,
  )
  .fetch_optional(pool)
  .await?;

  let Some((age, sex, height_feet, height_inches, phase, on_ice, goal)) = row else {
    return Ok(NutritionSettings::default());
  };

  Ok(NutritionSettings {
    age,
    sex: sex.as_deref().and_then(Sex::from_label),
    height_feet,
    height_inches,
    training_phase: phase
      .and_then(|p| u32::try_from(p).ok())
      .and_then(TrainingPhase::from_number),
    on_ice_sessions_per_week: on_ice,
    goal: goal.as_deref().map(Goal::from_label),
  })
}

pub async fn save_settings(pool: &SqlitePool, settings: &NutritionSettings) -> Result<()> {
  sqlx::query(
    r#"
    INSERT INTO nutrition_settings (
      id, age, sex, height_feet, height_inches, training_phase,
      on_ice_sessions_per_week, goal
    )
    VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7)
    ON CONFLICT(id) DO UPDATE SET
      age = excluded.age,
      sex = excluded.sex,
      height_feet = excluded.height_feet,
      height_inches = excluded.height_inches,
      training_phase = excluded.training_phase,
      on_ice_sessions_per_week = excluded.on_ice_sessions_per_week,
      goal = excluded.goal,
      updated_at = CURRENT_TIMESTAMP
    "#,
  )
  .bind(settings.age)
  .bind(settings.sex.map(sex_label))
  .bind(settings.height_feet)
  .bind(settings.height_inches)
  .bind(settings.training_phase.map(|p| i64::from(p.number())))
  .bind(settings.on_ice_sessions_per_week)
  .bind(settings.goal.map(goal_label))
  .execute(pool)
  .await?;

  debug!(?settings, "Saved nutrition settings");
  Ok(())
}

/// Parse and store a legacy settings export
pub async fn import_legacy_settings(pool: &SqlitePool, json: &str) -> Result<NutritionSettings> {
  let settings = NutritionSettings::from_legacy_json(json)?;
  save_settings(pool, &settings).await?;
  info!(complete = settings.profile().is_some(), "Imported legacy nutrition settings");
  Ok(settings)
}

fn sex_label(sex: Sex) -> &'static str {
  match sex {
    Sex::Female => "female",
    Sex::Male => "male",
  }
}

fn goal_label(goal: Goal) -> &'static str {
  match goal {
    Goal::LoseWeight => "lose_weight",
    Goal::MaintainWeight => "maintain_weight",
    Goal::GainMuscle => "gain_muscle",
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::nutrition::{nutrition_targets, WeightObservation, WeightUnit};
  use crate::test_utils::*;

  #[test]
  fn test_profile_requires_core_fields() {
    let complete = mock_nutrition_settings();
    assert!(complete.profile().is_some());

    for strip in 0..4 {
      let mut settings = complete;
      match strip {
        0 => settings.age = None,
        1 => settings.sex = None,
        2 => settings.height_feet = None,
        _ => settings.goal = None,
      }
      assert!(settings.profile().is_none(), "field {} should be required", strip);
    }
  }

  #[test]
  fn test_profile_defaults_optional_fields() {
    let mut settings = mock_nutrition_settings();
    settings.height_inches = None;
    settings.on_ice_sessions_per_week = None;
    settings.training_phase = None;

    let profile = settings.profile().unwrap();
    assert_eq!(profile.height_inches, 0);
    assert_eq!(profile.on_ice_sessions_per_week, 0);
    assert_eq!(profile.phase, None);
  }

  #[test]
  fn test_zero_and_negative_values_still_produce_targets() {
    let weight = WeightObservation {
      value: 140.0,
      unit: WeightUnit::Lbs,
    };

    for (age, feet) in [(0, 5), (30, 0), (0, 0), (-5, 5)] {
      let mut settings = mock_nutrition_settings();
      settings.age = Some(age);
      settings.height_feet = Some(feet);

      let profile = settings.profile().unwrap();
      assert_eq!((profile.age, profile.height_feet), (age, feet));
      assert!(
        nutrition_targets(&settings, Some(&weight), None).is_some(),
        "age {} and {} ft should still give targets",
        age,
        feet
      );
    }
  }

  #[test]
  fn test_from_legacy_json_unknown_sex_is_female() {
    let settings = NutritionSettings::from_legacy_json(r#"{"sex": "Other"}"#).unwrap();
    assert_eq!(settings.sex, Some(Sex::Female));

    let male = NutritionSettings::from_legacy_json(r#"{"sex": "Male"}"#).unwrap();
    assert_eq!(male.sex, Some(Sex::Male));

    let blank = NutritionSettings::from_legacy_json(r#"{"sex": ""}"#).unwrap();
    assert_eq!(blank.sex, None);
  }

  #[test]
  fn test_from_legacy_json() {
    let json = r#"{
      "age": "21",
      "sex": "Female",
      "heightFt": "5",
      "heightIn": "",
      "trainingPhase": "Phase 3 — Basics 5–6 (Backward Skating & Jumps)",
      "onIceDays": "4+",
      "goal": "Gain muscle"
    }"#;

    let settings = NutritionSettings::from_legacy_json(json).unwrap();

    assert_eq!(settings.age, Some(21));
    assert_eq!(settings.sex, Some(Sex::Female));
    assert_eq!(settings.height_feet, Some(5));
    assert_eq!(settings.height_inches, None);
    assert_eq!(settings.training_phase, Some(TrainingPhase::Power));
    assert_eq!(settings.on_ice_sessions_per_week, Some(4));
    assert_eq!(settings.goal, Some(Goal::GainMuscle));
  }

  #[test]
  fn test_from_legacy_json_not_started() {
    let json = r#"{"trainingPhase": "Not started yet", "onIceDays": "0 (not on ice yet)", "age": 30}"#;

    let settings = NutritionSettings::from_legacy_json(json).unwrap();

    assert_eq!(settings.training_phase, None);
    assert_eq!(settings.on_ice_sessions_per_week, Some(0));
    assert_eq!(settings.age, Some(30));
    assert!(settings.profile().is_none());
  }

  #[test]
  fn test_from_legacy_json_rejects_non_objects() {
    assert!(matches!(
      NutritionSettings::from_legacy_json("[1, 2]"),
      Err(TrackerError::Import(_))
    ));
    assert!(matches!(
      NutritionSettings::from_legacy_json("{not json"),
      Err(TrackerError::Serialization(_))
    ));
  }

  #[test]
  fn test_leading_integer() {
    assert_eq!(leading_integer("4+"), Some(4));
    assert_eq!(leading_integer(" 12 years"), Some(12));
    assert_eq!(leading_integer("about 3"), None);
    assert_eq!(leading_integer(""), None);
  }

  #[tokio::test]
  async fn test_load_defaults_when_empty() {
    let pool = setup_test_db().await;

    let settings = load_settings(&pool).await.unwrap();
    assert_eq!(settings, NutritionSettings::default());

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_save_and_load_settings() {
    let pool = setup_test_db().await;
    let settings = mock_nutrition_settings();

    save_settings(&pool, &settings).await.unwrap();
    assert_eq!(load_settings(&pool).await.unwrap(), settings);

    // Second save overwrites the single row
    let mut updated = settings;
    updated.goal = Some(Goal::LoseWeight);
    updated.training_phase = None;
    save_settings(&pool, &updated).await.unwrap();

    assert_eq!(load_settings(&pool).await.unwrap(), updated);
    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM nutrition_settings")
      .fetch_one(&pool)
      .await
      .unwrap();
    assert_eq!(rows, 1);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_import_legacy_settings() {
    let pool = setup_test_db().await;

    let json = r#"{"age":"30","sex":"Male","heightFt":"6","heightIn":"1","trainingPhase":"Phase 1 — Basics 1–2 (Foundation)","onIceDays":"2","goal":"Lose weight"}"#;
    let imported = import_legacy_settings(&pool, json).await.unwrap();

    assert_eq!(load_settings(&pool).await.unwrap(), imported);
    assert_eq!(imported.training_phase, Some(TrainingPhase::Foundation));
    assert!(imported.profile().is_some());

    teardown_test_db(pool).await;
  }
}
