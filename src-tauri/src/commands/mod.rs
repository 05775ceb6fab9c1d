pub mod benchmarks;
pub mod entries;
pub mod nutrition;
pub mod settings;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use skate_log_core::entries::parse_date;
use skate_log_core::trackers::{BenchmarkDef, ChartDef};
use skate_log_core::{Tracker, TrackerError};

/// Calendar date on this machine
pub(crate) fn today() -> NaiveDate {
  Local::now().date_naive()
}

pub(crate) fn parse_optional_date(date: Option<String>) -> Result<Option<NaiveDate>, TrackerError> {
  date.as_deref().map(parse_date).transpose()
}

/// ---------------------------------------------------------------------------
/// Tracker Definitions
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct TrackerInfo {
  pub id: Tracker,
  pub label: &'static str,
  pub benchmarks: &'static [BenchmarkDef],
  pub charts: &'static [ChartDef],
}

#[tauri::command]
pub fn get_trackers() -> Vec<TrackerInfo> {
  Tracker::ALL
    .into_iter()
    .map(|tracker| TrackerInfo {
      id: tracker,
      label: tracker.label(),
      benchmarks: tracker.benchmarks(),
      charts: tracker.charts(),
    })
    .collect()
}
