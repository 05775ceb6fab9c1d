//! Logged intake versus the day's targets

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{round_half_up, NutritionTargets};
use crate::entries::Entry;

/// ---------------------------------------------------------------------------
/// Daily Intake
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyIntake {
  pub date: NaiveDate,
  pub meal_count: usize,
  pub calories: f64,
  pub protein: f64,
  pub carbs: f64,
  pub fats: f64,
  pub water: f64,
  pub entry_ids: Vec<i64>,
}

impl DailyIntake {
  fn empty(date: NaiveDate) -> Self {
    Self {
      date,
      meal_count: 0,
      calories: 0.0,
      protein: 0.0,
      carbs: 0.0,
      fats: 0.0,
      water: 0.0,
      entry_ids: Vec::new(),
    }
  }

  fn add(&mut self, entry: &Entry) {
    self.meal_count += 1;
    self.calories += entry.number("calories").unwrap_or(0.0);
    self.protein += entry.number("protein").unwrap_or(0.0);
    self.carbs += entry.number("carbs").unwrap_or(0.0);
    self.fats += entry.number("fats").unwrap_or(0.0);
    self.water += entry.number("water").unwrap_or(0.0);
    self.entry_ids.push(entry.id);
  }
}

/// Sum meal entries per date, newest date first
pub fn daily_intake(entries: &[Entry]) -> Vec<DailyIntake> {
  let mut days: Vec<DailyIntake> = Vec::new();

  for entry in entries {
    match days.iter_mut().find(|d| d.date == entry.date) {
      Some(day) => day.add(entry),
      None => {
        let mut day = DailyIntake::empty(entry.date);
        day.add(entry);
        days.push(day);
      }
    }
  }

  days.sort_by(|a, b| b.date.cmp(&a.date));
  days
}

/// ---------------------------------------------------------------------------
/// Progress
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetStatus {
  /// 90-110% of target
  OnTarget,
  /// 70-130% of target
  Near,
  Off,
}

impl TargetStatus {
  pub fn from_percent(percent: i64) -> Self {
    if (90..=110).contains(&percent) {
      Self::OnTarget
    } else if (70..=130).contains(&percent) {
      Self::Near
    } else {
      Self::Off
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroProgress {
  pub actual: i64,
  pub target: i64,
  pub percent: i64,
  pub status: TargetStatus,
}

/// `None` when there is no target to measure against
pub fn macro_progress(actual: f64, target: i64) -> Option<MacroProgress> {
  if target == 0 {
    return None;
  }
  let percent = round_half_up(actual / target as f64 * 100.0) as i64;
  Some(MacroProgress {
    actual: round_half_up(actual) as i64,
    target,
    percent,
    status: TargetStatus::from_percent(percent),
  })
}

/// ---------------------------------------------------------------------------
/// Day Report
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayReport {
  pub intake: DailyIntake,
  pub targets: Option<NutritionTargets>,
  pub calories: Option<MacroProgress>,
  pub protein: Option<MacroProgress>,
  pub carbs: Option<MacroProgress>,
  pub fats: Option<MacroProgress>,
}

pub fn day_report(intake: DailyIntake, targets: Option<NutritionTargets>) -> DayReport {
  let progress = |actual: f64, target: fn(&NutritionTargets) -> i64| {
    targets.as_ref().and_then(|t| macro_progress(actual, target(t)))
  };

  DayReport {
    calories: progress(intake.calories, |t| t.target_calories),
    protein: progress(intake.protein, |t| t.protein),
    carbs: progress(intake.carbs, |t| t.carbs),
    fats: progress(intake.fats, |t| t.fats),
    intake,
    targets,
  }
}
