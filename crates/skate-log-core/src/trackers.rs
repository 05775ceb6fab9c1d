//! Tracker definitions: benchmarks and charts per log

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tracker {
  #[serde(rename = "officeice")]
  OffIce,
  #[serde(rename = "onice")]
  OnIce,
  #[serde(rename = "nutrition")]
  Nutrition,
}

impl Tracker {
  /// Display order, also the order the latest weight is searched in
  pub const ALL: [Tracker; 3] = [Tracker::OffIce, Tracker::OnIce, Tracker::Nutrition];

  pub fn id(&self) -> &'static str {
    match self {
      Self::OffIce => "officeice",
      Self::OnIce => "onice",
      Self::Nutrition => "nutrition",
    }
  }

  pub fn label(&self) -> &'static str {
    match self {
      Self::OffIce => "🏋️ Off-Ice Training",
      Self::OnIce => "⛸ On-Ice Sessions",
      Self::Nutrition => "🥗 Nutrition",
    }
  }

  /// Nutrition entries are meals; benchmarks and charts use daily totals
  pub fn aggregates_daily(&self) -> bool {
    matches!(self, Self::Nutrition)
  }

  pub fn benchmarks(&self) -> &'static [BenchmarkDef] {
    match self {
      Self::OffIce => &OFF_ICE_BENCHMARKS,
      Self::OnIce => &ON_ICE_BENCHMARKS,
      Self::Nutrition => &NUTRITION_BENCHMARKS,
    }
  }

  pub fn charts(&self) -> &'static [ChartDef] {
    match self {
      Self::OffIce => &OFF_ICE_CHARTS,
      Self::OnIce => &ON_ICE_CHARTS,
      Self::Nutrition => &NUTRITION_CHARTS,
    }
  }
}

impl fmt::Display for Tracker {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.id())
  }
}

impl FromStr for Tracker {
  type Err = TrackerError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::ALL
      .into_iter()
      .find(|t| t.id() == s)
      .ok_or_else(|| TrackerError::InvalidInput(format!("unknown tracker '{}'", s)))
  }
}

/// ---------------------------------------------------------------------------
/// Benchmarks
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BenchmarkKind {
  /// Largest value ever logged for `key`
  Max,
  /// Mean of the non-zero daily totals of `key`
  DailyAverage,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BenchmarkDef {
  pub id: &'static str,
  pub key: &'static str,
  pub label: &'static str,
  pub unit: &'static str,
  pub kind: BenchmarkKind,
}

const fn best(key: &'static str, label: &'static str, unit: &'static str) -> BenchmarkDef {
  BenchmarkDef {
    id: key,
    key,
    label,
    unit,
    kind: BenchmarkKind::Max,
  }
}

static OFF_ICE_BENCHMARKS: [BenchmarkDef; 6] = [
  best("singlelegEC", "Balance — Eyes Closed", "seconds"),
  best("wallsit", "Wall Sit", "seconds"),
  best("plank", "Plank Hold", "seconds"),
  best("spiralHold", "Spiral Hold", "seconds"),
  best("landingHold", "Landing Position", "seconds"),
  best("oneFootSpin", "Spin Balance", "seconds"),
];

static ON_ICE_BENCHMARKS: [BenchmarkDef; 6] = [
  best("oneFootGlideR", "Best Glide — Right", "seconds"),
  best("oneFootGlideL", "Best Glide — Left", "seconds"),
  best("twoFootSpin", "Two-Foot Spin", "revolutions"),
  best("oneFootSpin", "One-Foot Spin", "revolutions"),
  best("uprightSpin", "Upright Spin", "revolutions"),
  best("iceTime", "Longest Session", "minutes"),
];

static NUTRITION_BENCHMARKS: [BenchmarkDef; 2] = [
  BenchmarkDef {
    id: "avgCalories",
    key: "calories",
    label: "Avg Daily Calories",
    unit: "kcal",
    kind: BenchmarkKind::DailyAverage,
  },
  BenchmarkDef {
    id: "avgProtein",
    key: "protein",
    label: "Avg Protein",
    unit: "g",
    kind: BenchmarkKind::DailyAverage,
  },
];

/// ---------------------------------------------------------------------------
/// Charts
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartField {
  pub key: &'static str,
  pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartDef {
  pub id: &'static str,
  pub title: &'static str,
  pub fields: &'static [ChartField],
}

const fn field(key: &'static str, label: &'static str) -> ChartField {
  ChartField { key, label }
}

static OFF_ICE_CHARTS: [ChartDef; 4] = [
  ChartDef {
    id: "weight",
    title: "Weight Over Time",
    fields: &[field("weight", "Weight")],
  },
  ChartDef {
    id: "balance",
    title: "Balance Progress",
    fields: &[
      field("singlelegEO", "Balance eyes open (s)"),
      field("singlelegEC", "Balance eyes closed (s)"),
      field("edgeSim", "Edge lean hold (s)"),
    ],
  },
  ChartDef {
    id: "strength",
    title: "Strength & Core Progress",
    fields: &[
      field("wallsit", "Wall sit (s)"),
      field("plank", "Plank (s)"),
      field("gluteBridge", "Glute bridge (s)"),
      field("squatReps", "Squats (reps)"),
    ],
  },
  ChartDef {
    id: "skating",
    title: "Skating Skills Progress",
    fields: &[
      field("spiralHold", "Spiral hold (s)"),
      field("landingHold", "Landing hold (s)"),
      field("oneFootSpin", "Spin balance (s)"),
      field("waltzJumpSim", "Waltz jump (reps)"),
    ],
  },
];

static ON_ICE_CHARTS: [ChartDef; 3] = [
  ChartDef {
    id: "onice-glide",
    title: "One-Foot Glide Progress",
    fields: &[
      field("oneFootGlideR", "Right foot (s)"),
      field("oneFootGlideL", "Left foot (s)"),
    ],
  },
  ChartDef {
    id: "onice-spins",
    title: "Spin Revolutions Over Time",
    fields: &[
      field("twoFootSpin", "Two-foot spin"),
      field("oneFootSpin", "One-foot spin"),
      field("uprightSpin", "Upright spin"),
    ],
  },
  ChartDef {
    id: "onice-confidence",
    title: "Confidence & Session Rating",
    fields: &[
      field("confidence", "Confidence (1–10)"),
      field("rating", "Session rating"),
    ],
  },
];

static NUTRITION_CHARTS: [ChartDef; 2] = [
  ChartDef {
    id: "cals",
    title: "Calorie Intake Over Time",
    fields: &[field("calories", "Calories")],
  },
  ChartDef {
    id: "macros",
    title: "Macronutrient Balance",
    fields: &[
      field("protein", "Protein (g)"),
      field("carbs", "Carbs (g)"),
      field("fats", "Fats (g)"),
    ],
  },
];
