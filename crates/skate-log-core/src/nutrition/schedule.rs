//! Prescribed off-ice training plan
//!
//! One row per phase and day of week. The plan, not the log, drives nutrition
//! targets, so a day has targets before anything is logged for it.
//!
//! MET values follow the Compendium of Physical Activities (Ainsworth et al.
//! 2011). Recreational-to-vigorous figure skating sits at ~7.0.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// ---------------------------------------------------------------------------
/// Activity Type
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
  Strength,
  Cardio,
  Flexibility,
  Rest,
}

impl ActivityType {
  pub fn icon(&self) -> &'static str {
    match self {
      ActivityType::Strength => "🏋️",
      ActivityType::Cardio => "🏃",
      ActivityType::Flexibility | ActivityType::Rest => "🧘",
    }
  }
}

/// ---------------------------------------------------------------------------
/// Day Schedule
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DaySchedule {
  pub met: f64,
  pub label: &'static str,
  pub activity: ActivityType,
  pub duration_minutes: u32,
}

impl DaySchedule {
  const fn new(met: f64, label: &'static str, activity: ActivityType, duration_minutes: u32) -> Self {
    Self {
      met,
      label,
      activity,
      duration_minutes,
    }
  }

  /// Rest rows carry a MET but never count toward burned calories
  pub fn is_training(&self) -> bool {
    self.activity != ActivityType::Rest && self.duration_minutes > 0
  }
}

use self::ActivityType::{Cardio, Flexibility, Rest, Strength};

// Rows are indexed Sunday = 0 .. Saturday = 6.

// Phase 1 (Basics 1-2): foundation. Gentle strength, flexibility, balance.
static PHASE_1: [DaySchedule; 7] = [
  DaySchedule::new(1.3, "Rest", Rest, 0),
  DaySchedule::new(4.5, "Lower body & balance", Strength, 45),
  DaySchedule::new(4.0, "Core & posture", Strength, 45),
  DaySchedule::new(3.0, "Flexibility & mobility", Flexibility, 40),
  DaySchedule::new(3.5, "Arms & posture", Strength, 40),
  DaySchedule::new(4.5, "Full-body simulation", Cardio, 45),
  DaySchedule::new(1.3, "Rest / light walk", Rest, 0),
];

// Phase 2 (Basics 3-4): build. Single-leg strength, edge work, cardio added.
static PHASE_2: [DaySchedule; 7] = [
  DaySchedule::new(1.3, "Rest", Rest, 0),
  DaySchedule::new(5.0, "Single-leg strength", Strength, 50),
  DaySchedule::new(4.5, "Core stability", Strength, 45),
  DaySchedule::new(3.5, "Deep flexibility", Flexibility, 40),
  DaySchedule::new(4.0, "Upper body & arms", Strength, 45),
  DaySchedule::new(5.5, "Jump prep & power", Cardio, 50),
  DaySchedule::new(1.3, "Rest / active recovery", Rest, 0),
];

// Phase 3 (Basics 5-6): power. Plyometrics, longer cardio.
static PHASE_3: [DaySchedule; 7] = [
  DaySchedule::new(1.3, "Rest", Rest, 0),
  DaySchedule::new(5.5, "Lower body power", Strength, 55),
  DaySchedule::new(5.0, "Core power & rotation", Strength, 50),
  DaySchedule::new(6.0, "Cardio & endurance", Cardio, 55),
  DaySchedule::new(4.5, "Upper body & posture", Strength, 50),
  DaySchedule::new(5.5, "Skating elements", Cardio, 55),
  DaySchedule::new(2.5, "Light yoga / recovery", Flexibility, 30),
];

// Phase 4 (Basics 7-8): performance. Peak intensity, mock programs.
static PHASE_4: [DaySchedule; 7] = [
  DaySchedule::new(1.3, "Rest", Rest, 0),
  DaySchedule::new(6.0, "Peak lower body", Strength, 60),
  DaySchedule::new(5.5, "Core mastery", Strength, 55),
  DaySchedule::new(6.5, "Cardio + mock program", Cardio, 65),
  DaySchedule::new(5.0, "Full upper body", Strength, 55),
  DaySchedule::new(6.0, "Skating readiness day", Cardio, 60),
  DaySchedule::new(2.5, "Active recovery / yoga", Flexibility, 30),
];

/// ---------------------------------------------------------------------------
/// On-Ice Plan
/// ---------------------------------------------------------------------------

pub const ICE_MET: f64 = 7.0;

/// Assumed average session length
pub const ICE_SESSION_MINUTES: u32 = 50;

pub const ICE_SESSION_LABEL: &str = "On-ice session";
pub const ICE_SESSION_ICON: &str = "⛸";

/// Sessions fill these days in order, so they never land on a rest day
pub static ICE_SESSION_DAYS: [Weekday; 4] = [Weekday::Mon, Weekday::Wed, Weekday::Fri, Weekday::Thu];

/// The first `sessions_per_week` ice days, saturating at four
pub fn ice_session_days(sessions_per_week: i64) -> &'static [Weekday] {
  let count = sessions_per_week.clamp(0, ICE_SESSION_DAYS.len() as i64) as usize;
  &ICE_SESSION_DAYS[..count]
}

/// ---------------------------------------------------------------------------
/// Training Phase
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TrainingPhase {
  Foundation,
  Build,
  Power,
  Performance,
}

impl TrainingPhase {
  pub fn from_number(number: u32) -> Option<Self> {
    match number {
      1 => Some(Self::Foundation),
      2 => Some(Self::Build),
      3 => Some(Self::Power),
      4 => Some(Self::Performance),
      _ => None,
    }
  }

  /// Phase named by the first number embedded in a settings label,
  /// e.g. "Phase 3 — Basics 5–6". Labels without a known phase give `None`.
  pub fn from_label(label: &str) -> Option<Self> {
    leading_number(label).and_then(Self::from_number)
  }

  pub fn number(&self) -> u8 {
    match self {
      Self::Foundation => 1,
      Self::Build => 2,
      Self::Power => 3,
      Self::Performance => 4,
    }
  }

  pub fn week(&self) -> &'static [DaySchedule; 7] {
    match self {
      Self::Foundation => &PHASE_1,
      Self::Build => &PHASE_2,
      Self::Power => &PHASE_3,
      Self::Performance => &PHASE_4,
    }
  }

  pub fn session(&self, weekday: Weekday) -> &'static DaySchedule {
    &self.week()[weekday.num_days_from_sunday() as usize]
  }
}

impl TryFrom<u8> for TrainingPhase {
  type Error = String;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Self::from_number(u32::from(value)).ok_or_else(|| format!("Unknown training phase: {}", value))
  }
}

impl From<TrainingPhase> for u8 {
  fn from(phase: TrainingPhase) -> Self {
    phase.number()
  }
}

/// First run of ASCII digits in `text`, if it fits in a u32
pub fn leading_number(text: &str) -> Option<u32> {
  let start = text.find(|c: char| c.is_ascii_digit())?;
  let digits: String = text[start..].chars().take_while(|c| c.is_ascii_digit()).collect();
  digits.parse().ok()
}
