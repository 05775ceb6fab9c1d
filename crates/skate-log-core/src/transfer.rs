//! JSON backup files: export one tracker, merge an import into it

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use std::collections::HashSet;
use tracing::{info, warn};

use crate::entries::{existing_ids, parse_date, store_entry, Entry, Fields};
use crate::error::{Result, TrackerError};
use crate::trackers::Tracker;

pub const EXPORT_VERSION: u32 = 1;

/// Export payload: `{ "exportedAt", "version", "entries": [{ "id", "date", ...fields }] }`
pub fn export_entries(entries: &[Entry], now: DateTime<Utc>) -> Result<String> {
  let flattened: Vec<Value> = entries
    .iter()
    .map(|entry| {
      let mut object = Fields::new();
      object.insert("id".to_string(), json!(entry.id));
      object.insert("date".to_string(), json!(entry.date.format("%Y-%m-%d").to_string()));
      for (key, value) in &entry.fields {
        object.entry(key.clone()).or_insert_with(|| value.clone());
      }
      Value::Object(object)
    })
    .collect();

  let payload = json!({
    "exportedAt": now.to_rfc3339_opts(SecondsFormat::Millis, true),
    "version": EXPORT_VERSION,
    "entries": flattened,
  });

  Ok(serde_json::to_string_pretty(&payload)?)
}

/// Suggested file name for an export made on `today`
pub fn export_file_name(tracker: Tracker, today: NaiveDate) -> String {
  format!("skating-{}-{}.json", tracker.id(), today.format("%Y-%m-%d"))
}

/// ---------------------------------------------------------------------------
/// Import
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ImportRecord {
  pub id: i64,
  pub date: NaiveDate,
  pub fields: Fields,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ImportSummary {
  /// New entries stored
  pub added: usize,
  /// Valid records whose id was already stored
  pub skipped: usize,
  /// Records without a usable id or date
  pub invalid: usize,
}

fn record_id(value: &Value) -> Option<i64> {
  let id = match value {
    Value::Number(n) => n.as_i64(),
    Value::String(s) => s.trim().parse().ok(),
    _ => None,
  }?;
  (id != 0).then_some(id)
}

fn parse_record(value: &Value) -> Option<ImportRecord> {
  let object = value.as_object()?;
  let id = object.get("id").and_then(record_id)?;
  let date = parse_date(object.get("date")?.as_str()?).ok()?;

  let mut fields = object.clone();
  fields.remove("id");
  fields.remove("date");

  Some(ImportRecord { id, date, fields })
}

/// Records of an export file, or a bare array of them.
/// Returns the valid records and how many were rejected.
pub fn parse_import(json: &str) -> Result<(Vec<ImportRecord>, usize)> {
  let parsed: Value = serde_json::from_str(json)?;

  let incoming = match &parsed {
    Value::Array(items) => items,
    Value::Object(object) => match object.get("entries") {
      Some(Value::Array(items)) => items,
      _ => return Err(TrackerError::Import("Unrecognised format".to_string())),
    },
    _ => return Err(TrackerError::Import("Unrecognised format".to_string())),
  };

  let records: Vec<ImportRecord> = incoming.iter().filter_map(parse_record).collect();
  let invalid = incoming.len() - records.len();

  if records.is_empty() {
    return Err(TrackerError::Import("No valid entries found".to_string()));
  }
  if invalid > 0 {
    warn!(invalid, "Skipping import records without a valid id and date");
  }

  Ok((records, invalid))
}

/// Merge an import file into `tracker`. Ids already stored are kept as they are.
pub async fn import_entries(pool: &SqlitePool, tracker: Tracker, json: &str) -> Result<ImportSummary> {
  let (records, invalid) = parse_import(json)?;
  let mut seen: HashSet<i64> = existing_ids(pool).await?.into_iter().collect();

  let mut summary = ImportSummary {
    invalid,
    ..Default::default()
  };

  let mut tx = pool.begin().await?;
  for record in records {
    if !seen.insert(record.id) {
      summary.skipped += 1;
      continue;
    }

    let entry = Entry {
      id: record.id,
      tracker,
      date: record.date,
      fields: record.fields,
    };
    store_entry(&mut *tx, &entry).await?;
    summary.added += 1;
  }
  tx.commit().await?;

  info!(
    tracker = %tracker,
    added = summary.added,
    skipped = summary.skipped,
    invalid = summary.invalid,
    "Imported entries"
  );
  Ok(summary)
}
