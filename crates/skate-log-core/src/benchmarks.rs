//! Personal bests and chart series derived from a tracker's entries

use chrono::NaiveDate;
use serde::Serialize;

use crate::entries::Entry;
use crate::nutrition::intake::{daily_intake, DailyIntake};
use crate::nutrition::round_half_up;
use crate::trackers::{BenchmarkDef, BenchmarkKind, ChartDef, Tracker};

/// One dated row of numbers: a logged entry, or a day's meal totals
#[derive(Debug, Clone, PartialEq)]
struct Sample {
  date: NaiveDate,
  values: Vec<(&'static str, f64)>,
}

impl Sample {
  fn get(&self, key: &str) -> Option<f64> {
    self.values.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
  }

  fn from_entry(entry: &Entry, keys: &[&'static str]) -> Self {
    Self {
      date: entry.date,
      values: keys
        .iter()
        .filter_map(|key| entry.number(key).map(|v| (*key, v)))
        .collect(),
    }
  }

  fn from_day(day: &DailyIntake) -> Self {
    Self {
      date: day.date,
      values: vec![
        ("calories", day.calories),
        ("protein", day.protein),
        ("carbs", day.carbs),
        ("fats", day.fats),
        ("water", day.water),
      ],
    }
  }
}

/// Chronological samples for `tracker`. Entries arrive newest first.
fn samples(tracker: Tracker, entries: &[Entry]) -> Vec<Sample> {
  let mut samples: Vec<Sample> = if tracker.aggregates_daily() {
    daily_intake(entries).iter().map(Sample::from_day).collect()
  } else {
    let keys: Vec<&'static str> = tracker
      .benchmarks()
      .iter()
      .map(|b| b.key)
      .chain(tracker.charts().iter().flat_map(|c| c.fields.iter().map(|f| f.key)))
      .collect();
    entries.iter().map(|e| Sample::from_entry(e, &keys)).collect()
  };

  samples.reverse();
  samples
}

/// ---------------------------------------------------------------------------
/// Personal Bests
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalBest {
  pub id: &'static str,
  pub label: &'static str,
  pub unit: &'static str,
  /// Rounded best, `None` until something positive is logged
  pub value: Option<i64>,
}

fn best_value(def: &BenchmarkDef, samples: &[Sample]) -> Option<f64> {
  let positive = samples.iter().filter_map(|s| s.get(def.key)).filter(|v| *v > 0.0);

  match def.kind {
    BenchmarkKind::Max => positive.fold(None, |best: Option<f64>, v| Some(best.map_or(v, |b| b.max(v)))),
    BenchmarkKind::DailyAverage => {
      let (sum, count) = positive.fold((0.0, 0_u32), |(sum, count), v| (sum + v, count + 1));
      (count > 0).then(|| sum / f64::from(count))
    }
  }
}

pub fn personal_bests(tracker: Tracker, entries: &[Entry]) -> Vec<PersonalBest> {
  let samples = samples(tracker, entries);

  tracker
    .benchmarks()
    .iter()
    .map(|def| PersonalBest {
      id: def.id,
      label: def.label,
      unit: def.unit,
      value: best_value(def, &samples).map(|v| round_half_up(v) as i64),
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Chart Series
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
  pub date: NaiveDate,
  pub value: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
  pub key: &'static str,
  pub label: &'static str,
  pub points: Vec<ChartPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
  pub id: &'static str,
  pub title: &'static str,
  /// Empty when nothing has been logged for any field
  pub series: Vec<Series>,
}

fn chart(def: &ChartDef, samples: &[Sample]) -> ChartSeries {
  let series = def
    .fields
    .iter()
    .map(|field| Series {
      key: field.key,
      label: field.label,
      points: samples
        .iter()
        .filter_map(|s| {
          let value = s.get(field.key).filter(|v| *v != 0.0)?;
          Some(ChartPoint {
            date: s.date,
            value: round_half_up(value) as i64,
          })
        })
        .collect(),
    })
    .filter(|s| !s.points.is_empty())
    .collect();

  ChartSeries {
    id: def.id,
    title: def.title,
    series,
  }
}

pub fn chart_series(tracker: Tracker, entries: &[Entry]) -> Vec<ChartSeries> {
  let samples = samples(tracker, entries);
  tracker.charts().iter().map(|def| chart(def, &samples)).collect()
}
