//! Nutrition target engine
//!
//! Day-specific calorie and macro targets from the prescribed training plan.
//! Everything here is a pure function of the profile, the latest weight and
//! the calendar date; nothing is cached or persisted.

pub mod baseline;
pub mod burn;
pub mod intake;
pub mod macros;
pub mod schedule;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::settings::NutritionSettings;

pub use baseline::{resolve_baseline, Baseline, Profile, Sex, WeightObservation, WeightUnit};
pub use burn::{compute_day_burn, BurnResult, DominantType, SessionSource, SessionSummary};
pub use macros::{compute_macros, Goal, MacroSplit, MacroTargets};
pub use schedule::{ActivityType, DaySchedule, TrainingPhase};

/// Round to the nearest integer, ties toward positive infinity
pub fn round_half_up(x: f64) -> f64 {
  let floor = x.floor();
  if x - floor >= 0.5 {
    floor + 1.0
  } else {
    floor
  }
}

/// ---------------------------------------------------------------------------
/// Targets
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
  pub target_calories: i64,
  pub protein: i64,
  pub carbs: i64,
  pub fats: i64,
  pub extra_calories: i64,
  pub session_summary: Vec<SessionSummary>,
  pub dominant_type: DominantType,
}

impl NutritionTargets {
  fn new(macros: MacroTargets, burn: BurnResult) -> Self {
    Self {
      target_calories: macros.target_calories,
      protein: macros.protein_grams,
      carbs: macros.carb_grams,
      fats: macros.fat_grams,
      extra_calories: burn.extra_calories,
      session_summary: burn.session_summary,
      dominant_type: burn.dominant_type,
    }
  }
}

/// Why targets cannot be computed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
  /// Age, sex, height or goal has not been saved
  MissingSettings,
  /// No tracker has a positive weight logged
  MissingWeight,
}

pub fn unavailable_reason(
  settings: &NutritionSettings,
  weight: Option<&WeightObservation>,
) -> Option<UnavailableReason> {
  if settings.profile().is_none() {
    Some(UnavailableReason::MissingSettings)
  } else if weight.is_none() {
    Some(UnavailableReason::MissingWeight)
  } else {
    None
  }
}

/// Targets for `date`, or the rest-day baseline when `date` is `None`.
///
/// `None` when the profile is incomplete or there is no weight observation.
/// Safe to call once per rendered row.
pub fn nutrition_targets(
  settings: &NutritionSettings,
  weight: Option<&WeightObservation>,
  date: Option<NaiveDate>,
) -> Option<NutritionTargets> {
  let profile = settings.profile()?;
  let baseline = resolve_baseline(&profile, weight)?;
  Some(targets_for(&profile, &baseline, date))
}

fn targets_for(profile: &Profile, baseline: &Baseline, date: Option<NaiveDate>) -> NutritionTargets {
  let burn = match date {
    Some(date) => compute_day_burn(
      date,
      baseline.weight_kg,
      profile.phase,
      profile.on_ice_sessions_per_week,
    ),
    None => BurnResult::default(),
  };

  let macros = compute_macros(
    baseline.base_tdee,
    burn.extra_calories,
    baseline.weight_lbs,
    profile.goal,
    burn.dominant_type,
  );

  NutritionTargets::new(macros, burn)
}

/// ---------------------------------------------------------------------------
/// Weekly Outlook
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayOutlook {
  pub date: NaiveDate,
  pub is_today: bool,
  pub day_label: String,
  pub targets: NutritionTargets,
}

/// Targets for the seven days ending at `today`, oldest first
pub fn week_outlook(
  settings: &NutritionSettings,
  weight: Option<&WeightObservation>,
  today: NaiveDate,
) -> Option<Vec<DayOutlook>> {
  let profile = settings.profile()?;
  let baseline = resolve_baseline(&profile, weight)?;
  Some(outlook_for(&profile, &baseline, today))
}

fn outlook_for(profile: &Profile, baseline: &Baseline, today: NaiveDate) -> Vec<DayOutlook> {
  (0..7)
    .rev()
    .map(|days_ago| {
      let date = today - Duration::days(days_ago);
      let targets = targets_for(profile, baseline, Some(date));
      DayOutlook {
        date,
        is_today: days_ago == 0,
        day_label: targets.dominant_type.day_label().to_string(),
        targets,
      }
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Overview
/// ---------------------------------------------------------------------------

/// Everything the macro calculator view shows at once
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionOverview {
  pub unavailable: Option<UnavailableReason>,
  pub baseline: Option<Baseline>,
  pub base_targets: Option<NutritionTargets>,
  pub today: Option<DayOutlook>,
  pub week: Vec<DayOutlook>,
}

pub fn nutrition_overview(
  settings: &NutritionSettings,
  weight: Option<&WeightObservation>,
  today: NaiveDate,
) -> NutritionOverview {
  let resolved = settings
    .profile()
    .and_then(|profile| resolve_baseline(&profile, weight).map(|baseline| (profile, baseline)));

  let Some((profile, baseline)) = resolved else {
    return NutritionOverview {
      unavailable: unavailable_reason(settings, weight),
      baseline: None,
      base_targets: None,
      today: None,
      week: Vec::new(),
    };
  };

  let week = outlook_for(&profile, &baseline, today);

  NutritionOverview {
    unavailable: None,
    baseline: Some(baseline),
    base_targets: Some(targets_for(&profile, &baseline, None)),
    today: week.last().cloned(),
    week,
  }
}
