//! Day burn: calories the plan prescribes for a calendar date

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::round_half_up;
use super::schedule::{
  ice_session_days, ActivityType, TrainingPhase, ICE_MET, ICE_SESSION_ICON, ICE_SESSION_LABEL,
  ICE_SESSION_MINUTES,
};

/// ---------------------------------------------------------------------------
/// Dominant Type
/// ---------------------------------------------------------------------------

/// The activity category that characterizes a day's prescribed load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DominantType {
  Strength,
  Cardio,
  Flexibility,
  #[default]
  Rest,
  Mixed,
}

impl From<ActivityType> for DominantType {
  fn from(activity: ActivityType) -> Self {
    match activity {
      ActivityType::Strength => Self::Strength,
      ActivityType::Cardio => Self::Cardio,
      ActivityType::Flexibility => Self::Flexibility,
      ActivityType::Rest => Self::Rest,
    }
  }
}

impl DominantType {
  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Strength => "strength",
      Self::Cardio => "cardio",
      Self::Flexibility => "flexibility",
      Self::Rest => "rest",
      Self::Mixed => "mixed",
    }
  }

  pub fn day_label(&self) -> &'static str {
    match self {
      Self::Strength => "💪 Strength day",
      Self::Cardio => "🏃 Cardio day",
      Self::Flexibility => "🧘 Flexibility day",
      Self::Rest => "😴 Rest day",
      Self::Mixed => "⚡ Mixed training day",
    }
  }

  /// Classify a day from the activity types recorded for it.
  /// Repeats of one type still count as a single type.
  pub fn classify(types: &[ActivityType]) -> Self {
    let mut distinct: Vec<ActivityType> = Vec::with_capacity(types.len());
    for activity in types {
      if !distinct.contains(activity) {
        distinct.push(*activity);
      }
    }

    match distinct.as_slice() {
      [] => Self::Rest,
      [single] => Self::from(*single),
      _ => Self::Mixed,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Burn Result
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionSource {
  #[serde(rename = "off-ice plan")]
  OffIcePlan,
  #[serde(rename = "on-ice plan")]
  OnIcePlan,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
  pub icon: String,
  pub label: String,
  pub minutes: u32,
  pub calories_burned: i64,
  pub source: SessionSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BurnResult {
  pub extra_calories: i64,
  pub session_summary: Vec<SessionSummary>,
  pub dominant_type: DominantType,
}

/// Calories burned at `met` for `minutes` by a body of `weight_kg`
pub fn session_calories(met: f64, weight_kg: f64, minutes: u32) -> i64 {
  let hours = f64::from(minutes) / 60.0;
  round_half_up(met * weight_kg * hours) as i64
}

/// Prescribed extra calories for `date`.
///
/// Off-ice work comes from the phase schedule (`None` phase contributes
/// nothing). On-ice work is added when the weekday is among the first
/// `on_ice_sessions_per_week` ice days.
pub fn compute_day_burn(
  date: NaiveDate,
  weight_kg: f64,
  phase: Option<TrainingPhase>,
  on_ice_sessions_per_week: i64,
) -> BurnResult {
  let weekday = date.weekday();

  let mut extra_calories = 0;
  let mut session_summary = Vec::new();
  let mut types = Vec::new();

  // Off-ice prescribed session
  if let Some(session) = phase.map(|p| p.session(weekday)) {
    if session.is_training() {
      let burned = session_calories(session.met, weight_kg, session.duration_minutes);
      extra_calories += burned;
      types.push(session.activity);
      session_summary.push(SessionSummary {
        icon: session.activity.icon().to_string(),
        label: session.label.to_string(),
        minutes: session.duration_minutes,
        calories_burned: burned,
        source: SessionSource::OffIcePlan,
      });
    }
  }

  // On-ice session
  if ice_session_days(on_ice_sessions_per_week).contains(&weekday) {
    let burned = session_calories(ICE_MET, weight_kg, ICE_SESSION_MINUTES);
    extra_calories += burned;
    types.push(ActivityType::Cardio);
    session_summary.push(SessionSummary {
      icon: ICE_SESSION_ICON.to_string(),
      label: ICE_SESSION_LABEL.to_string(),
      minutes: ICE_SESSION_MINUTES,
      calories_burned: burned,
      source: SessionSource::OnIcePlan,
    });
  }

  BurnResult {
    extra_calories,
    session_summary,
    dominant_type: DominantType::classify(&types),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // 2025-06-01 is a Sunday
  fn day(offset: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1 + offset).unwrap()
  }

  const SUNDAY: u32 = 0;
  const MONDAY: u32 = 1;
  const WEDNESDAY: u32 = 3;
  const FRIDAY: u32 = 5;
  const SATURDAY: u32 = 6;

  const WEIGHT_KG: f64 = 140.0 / 2.20462;

  #[test]
  fn test_power_phase_monday_strength() {
    let burn = compute_day_burn(day(MONDAY), WEIGHT_KG, Some(TrainingPhase::Power), 0);

    assert_eq!(burn.extra_calories, 320);
    assert_eq!(burn.dominant_type, DominantType::Strength);
    assert_eq!(burn.session_summary.len(), 1);

    let session = &burn.session_summary[0];
    assert_eq!(session.label, "Lower body power");
    assert_eq!(session.minutes, 55);
    assert_eq!(session.calories_burned, 320);
    assert_eq!(session.source, SessionSource::OffIcePlan);
    assert_eq!(session.icon, "🏋️");
  }

  #[test]
  fn test_rest_day_without_ice_is_empty() {
    let burn = compute_day_burn(day(SATURDAY), WEIGHT_KG, Some(TrainingPhase::Foundation), 0);

    assert_eq!(burn.extra_calories, 0);
    assert!(burn.session_summary.is_empty());
    assert_eq!(burn.dominant_type, DominantType::Rest);
  }

  #[test]
  fn test_monday_always_gets_ice_session() {
    let phases = [
      None,
      Some(TrainingPhase::Foundation),
      Some(TrainingPhase::Build),
      Some(TrainingPhase::Power),
      Some(TrainingPhase::Performance),
    ];
    for phase in phases {
      for sessions in 1..=6 {
        let burn = compute_day_burn(day(MONDAY), WEIGHT_KG, phase, sessions);
        assert!(
          burn
            .session_summary
            .iter()
            .any(|s| s.source == SessionSource::OnIcePlan),
          "phase {:?} with {} sessions should skate on Monday",
          phase,
          sessions
        );
      }
    }
  }

  #[test]
  fn test_two_ice_sessions_skip_friday() {
    let burn = compute_day_burn(day(FRIDAY), WEIGHT_KG, Some(TrainingPhase::Build), 2);

    assert_eq!(burn.session_summary.len(), 1);
    assert_eq!(burn.session_summary[0].label, "Jump prep & power");
    assert_eq!(burn.dominant_type, DominantType::Cardio);
  }

  #[test]
  fn test_three_ice_sessions_include_friday_and_stay_cardio() {
    let burn = compute_day_burn(day(FRIDAY), WEIGHT_KG, Some(TrainingPhase::Build), 3);

    assert_eq!(burn.session_summary.len(), 2);
    assert_eq!(burn.session_summary[1].source, SessionSource::OnIcePlan);
    assert_eq!(burn.session_summary[1].minutes, 50);
    assert_eq!(burn.dominant_type, DominantType::Cardio);

    let off_ice = session_calories(5.5, WEIGHT_KG, 50);
    let on_ice = session_calories(7.0, WEIGHT_KG, 50);
    assert_eq!(burn.extra_calories, off_ice + on_ice);
  }

  #[test]
  fn test_strength_plus_ice_is_mixed() {
    let burn = compute_day_burn(day(MONDAY), WEIGHT_KG, Some(TrainingPhase::Build), 1);

    assert_eq!(burn.session_summary.len(), 2);
    assert_eq!(burn.dominant_type, DominantType::Mixed);
  }

  #[test]
  fn test_unknown_phase_keeps_ice_only() {
    let burn = compute_day_burn(day(WEDNESDAY), WEIGHT_KG, None, 2);

    assert_eq!(burn.session_summary.len(), 1);
    assert_eq!(burn.session_summary[0].label, "On-ice session");
    assert_eq!(burn.session_summary[0].icon, "⛸");
    assert_eq!(burn.dominant_type, DominantType::Cardio);
    assert_eq!(burn.extra_calories, session_calories(7.0, WEIGHT_KG, 50));
  }

  #[test]
  fn test_unknown_phase_without_ice_is_rest() {
    let burn = compute_day_burn(day(SUNDAY), WEIGHT_KG, None, 4);
    assert_eq!(burn, BurnResult::default());
  }

  #[test]
  fn test_flexibility_icon() {
    let burn = compute_day_burn(day(SATURDAY), WEIGHT_KG, Some(TrainingPhase::Power), 0);
    assert_eq!(burn.dominant_type, DominantType::Flexibility);
    assert_eq!(burn.session_summary[0].icon, "🧘");
  }

  #[test]
  fn test_classify() {
    use crate::nutrition::schedule::ActivityType::*;
    assert_eq!(DominantType::classify(&[]), DominantType::Rest);
    assert_eq!(DominantType::classify(&[Strength]), DominantType::Strength);
    assert_eq!(DominantType::classify(&[Cardio, Cardio]), DominantType::Cardio);
    assert_eq!(DominantType::classify(&[Flexibility, Cardio]), DominantType::Mixed);
  }

  #[test]
  fn test_source_serializes_as_plan_name() {
    let json = serde_json::to_string(&SessionSource::OnIcePlan).unwrap();
    assert_eq!(json, "\"on-ice plan\"");
  }
}
