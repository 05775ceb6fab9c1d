//! Macro targets: goal baseline plus training bonus
//!
//! Baseline carbs are the calorie residual after protein and fat. Bonus
//! calories from training are split per dominant type and added on top.

use serde::{Deserialize, Serialize};

use super::burn::DominantType;
use super::round_half_up;

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARB: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// ---------------------------------------------------------------------------
/// Goal
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
  LoseWeight,
  #[default]
  MaintainWeight,
  GainMuscle,
}

impl Goal {
  /// Settings labels ("Lose weight", "Gain muscle"); anything else maintains
  pub fn from_label(label: &str) -> Self {
    match label.trim().to_lowercase().as_str() {
      "lose weight" | "lose_weight" => Self::LoseWeight,
      "gain muscle" | "gain_muscle" => Self::GainMuscle,
      _ => Self::MaintainWeight,
    }
  }

  pub fn calorie_adjustment(&self) -> f64 {
    match self {
      Self::LoseWeight => -500.0,
      Self::MaintainWeight => 0.0,
      Self::GainMuscle => 300.0,
    }
  }

  /// Grams of protein per pound of body weight
  pub fn protein_per_lb(&self) -> f64 {
    match self {
      Self::LoseWeight => 1.0,
      Self::MaintainWeight => 0.8,
      Self::GainMuscle => 1.2,
    }
  }

  /// Grams of fat per pound of body weight
  pub fn fat_per_lb(&self) -> f64 {
    match self {
      Self::LoseWeight | Self::MaintainWeight => 0.35,
      Self::GainMuscle => 0.40,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Macro Split
/// ---------------------------------------------------------------------------

/// Fractions of bonus calories going to protein / carbs / fat
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroSplit {
  pub protein_pct: f64,
  pub carbs_pct: f64,
  pub fats_pct: f64,
}

impl MacroSplit {
  // Strength leans protein; cardio and ice lean carbs.
  pub const STRENGTH: Self = Self::new(0.35, 0.45, 0.20);
  pub const CARDIO: Self = Self::new(0.20, 0.60, 0.20);
  pub const FLEXIBILITY: Self = Self::new(0.25, 0.55, 0.20);
  pub const REST: Self = Self::new(0.25, 0.50, 0.25);
  pub const MIXED: Self = Self::new(0.28, 0.52, 0.20);

  const fn new(protein_pct: f64, carbs_pct: f64, fats_pct: f64) -> Self {
    Self {
      protein_pct,
      carbs_pct,
      fats_pct,
    }
  }

  pub fn for_type(dominant: DominantType) -> Self {
    match dominant {
      DominantType::Strength => Self::STRENGTH,
      DominantType::Cardio => Self::CARDIO,
      DominantType::Flexibility => Self::FLEXIBILITY,
      DominantType::Rest => Self::REST,
      DominantType::Mixed => Self::MIXED,
    }
  }

  /// Lookup by type name; unknown names get the mixed split
  pub fn for_name(name: &str) -> Self {
    match name {
      "strength" => Self::STRENGTH,
      "cardio" => Self::CARDIO,
      "flexibility" => Self::FLEXIBILITY,
      "rest" => Self::REST,
      _ => Self::MIXED,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Macro Targets
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroTargets {
  pub target_calories: i64,
  pub protein_grams: i64,
  pub carb_grams: i64,
  pub fat_grams: i64,
}

impl MacroTargets {
  /// Calories implied by the gram targets
  pub fn macro_calories(&self) -> f64 {
    self.protein_grams as f64 * KCAL_PER_GRAM_PROTEIN
      + self.carb_grams as f64 * KCAL_PER_GRAM_CARB
      + self.fat_grams as f64 * KCAL_PER_GRAM_FAT
  }
}

/// Daily macro targets for `goal`, with `extra_calories` of training burn
/// distributed by the split for `dominant`.
///
/// Carbs are not clamped: extreme inputs can produce a negative residual.
pub fn compute_macros(
  base_tdee: f64,
  extra_calories: i64,
  weight_lbs: f64,
  goal: Goal,
  dominant: DominantType,
) -> MacroTargets {
  let base_calories = base_tdee + goal.calorie_adjustment();
  let protein = round_half_up(weight_lbs * goal.protein_per_lb());
  let fats = round_half_up(weight_lbs * goal.fat_per_lb());
  let carbs = round_half_up(
    (base_calories - protein * KCAL_PER_GRAM_PROTEIN - fats * KCAL_PER_GRAM_FAT) / KCAL_PER_GRAM_CARB,
  );

  if extra_calories <= 0 {
    return MacroTargets {
      target_calories: round_half_up(base_calories) as i64,
      protein_grams: protein as i64,
      carb_grams: carbs as i64,
      fat_grams: fats as i64,
    };
  }

  let extra = extra_calories as f64;
  let split = MacroSplit::for_type(dominant);

  MacroTargets {
    target_calories: round_half_up(base_calories + extra) as i64,
    protein_grams: (protein + round_half_up(extra * split.protein_pct / KCAL_PER_GRAM_PROTEIN)) as i64,
    carb_grams: (carbs + round_half_up(extra * split.carbs_pct / KCAL_PER_GRAM_CARB)) as i64,
    fat_grams: (fats + round_half_up(extra * split.fats_pct / KCAL_PER_GRAM_FAT)) as i64,
  }
}
