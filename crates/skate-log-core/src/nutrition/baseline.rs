//! Baseline metabolism: Mifflin-St Jeor BMR and a lightly-active TDEE
//!
//! Mifflin, M.D., et al. (1990). A new predictive equation for resting energy
//! expenditure. *American Journal of Clinical Nutrition*, 51(2), 241-247.

use serde::{Deserialize, Serialize};

use super::macros::Goal;
use super::schedule::TrainingPhase;

pub const LBS_PER_KG: f64 = 2.20462;
pub const CM_PER_INCH: f64 = 2.54;

/// Fixed "lightly active" multiplier. Training burn is added per day on top,
/// so a higher multiplier would count it twice.
pub const BASE_ACTIVITY_MULTIPLIER: f64 = 1.375;

/// ---------------------------------------------------------------------------
/// Body Stats
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
  Female,
  Male,
}

impl Sex {
  pub fn from_label(label: &str) -> Option<Self> {
    match label.trim().to_lowercase().as_str() {
      "female" => Some(Self::Female),
      "male" => Some(Self::Male),
      _ => None,
    }
  }

  fn bmr_constant(&self) -> f64 {
    match self {
      Self::Male => 5.0,
      Self::Female => -161.0,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
  #[default]
  Lbs,
  Kg,
}

impl WeightUnit {
  /// "kg" means kilograms; anything else is pounds
  pub fn from_label(label: &str) -> Self {
    if label.trim().eq_ignore_ascii_case("kg") {
      Self::Kg
    } else {
      Self::Lbs
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightObservation {
  pub value: f64,
  pub unit: WeightUnit,
}

impl WeightObservation {
  pub fn pounds(&self) -> f64 {
    match self.unit {
      WeightUnit::Lbs => self.value,
      WeightUnit::Kg => self.value * LBS_PER_KG,
    }
  }

  pub fn kilograms(&self) -> f64 {
    self.pounds() / LBS_PER_KG
  }
}

/// Complete nutrition profile. Built from stored settings only when every
/// required field is present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Profile {
  pub age: i64,
  pub sex: Sex,
  pub height_feet: i64,
  pub height_inches: i64,
  pub phase: Option<TrainingPhase>,
  pub on_ice_sessions_per_week: i64,
  pub goal: Goal,
}

impl Profile {
  pub fn height_cm(&self) -> f64 {
    let inches = self.height_feet * 12 + self.height_inches;
    inches as f64 * CM_PER_INCH
  }
}

/// ---------------------------------------------------------------------------
/// Baseline
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
  pub weight_lbs: f64,
  pub weight_kg: f64,
  pub bmr: f64,
  pub base_tdee: f64,
}

/// Mifflin-St Jeor: 10·kg + 6.25·cm − 5·age + (5 male | −161 female)
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: i64, sex: Sex) -> f64 {
  (10.0 * weight_kg) + (6.25 * height_cm) - (5.0 * age as f64) + sex.bmr_constant()
}

/// Baseline metabolism for `profile`, or `None` without a weight observation.
/// Non-positive body stats are passed through unchecked.
pub fn resolve_baseline(profile: &Profile, weight: Option<&WeightObservation>) -> Option<Baseline> {
  let weight = weight?;
  let weight_lbs = weight.pounds();
  let weight_kg = weight_lbs / LBS_PER_KG;

  let bmr = mifflin_st_jeor(weight_kg, profile.height_cm(), profile.age, profile.sex);

  Some(Baseline {
    weight_lbs,
    weight_kg,
    bmr,
    base_tdee: bmr * BASE_ACTIVITY_MULTIPLIER,
  })
}
