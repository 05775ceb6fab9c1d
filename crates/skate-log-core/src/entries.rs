//! Logged entries, one table for all trackers

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::{SqliteExecutor, SqlitePool};
use tracing::debug;

use crate::error::{Result, TrackerError};
use crate::nutrition::{WeightObservation, WeightUnit};
use crate::trackers::Tracker;

pub type Fields = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
  pub id: i64,
  pub tracker: Tracker,
  pub date: NaiveDate,
  pub fields: Fields,
}

impl Entry {
  /// Numeric value of a form field. Accepts JSON numbers and numeric strings.
  pub fn number(&self, key: &str) -> Option<f64> {
    self.fields.get(key).and_then(field_number)
  }

  pub fn text(&self, key: &str) -> Option<&str> {
    self.fields.get(key).and_then(Value::as_str)
  }

  /// Positive body weight logged with this entry, if any
  pub fn weight(&self) -> Option<WeightObservation> {
    let value = self.number("weight").filter(|w| *w > 0.0)?;
    let unit = self.text("weightUnit").map(WeightUnit::from_label).unwrap_or_default();
    Some(WeightObservation { value, unit })
  }
}

/// Finite number from a JSON number or a trimmed numeric string
pub fn field_number(value: &Value) -> Option<f64> {
  let number = match value {
    Value::Number(n) => n.as_f64(),
    Value::String(s) => s.trim().parse::<f64>().ok(),
    _ => None,
  }?;
  number.is_finite().then_some(number)
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(text: &str) -> Result<NaiveDate> {
  NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
    .map_err(|_| TrackerError::InvalidInput(format!("invalid date '{}', expected YYYY-MM-DD", text)))
}

/// ---------------------------------------------------------------------------
/// Storage
/// ---------------------------------------------------------------------------

#[derive(sqlx::FromRow)]
struct EntryRow {
  id: i64,
  tracker: String,
  date: NaiveDate,
  fields_json: String,
}

impl TryFrom<EntryRow> for Entry {
  type Error = TrackerError;

  fn try_from(row: EntryRow) -> Result<Self> {
    Ok(Entry {
      id: row.id,
      tracker: row.tracker.parse()?,
      date: row.date,
      fields: serde_json::from_str(&row.fields_json)?,
    })
  }
}

/// Store a new entry. `id` and `date` keys inside `fields` are dropped.
///
/// The id is the current time in milliseconds, bumped past the largest stored
/// id. It is picked by the INSERT itself, so concurrent saves never share one.
pub async fn insert_entry(
  pool: &SqlitePool,
  tracker: Tracker,
  date: NaiveDate,
  mut fields: Fields,
) -> Result<Entry> {
  fields.remove("id");
  fields.remove("date");

  let id: i64 = sqlx::query_scalar(
    r#"
    INSERT INTO entries (id, tracker, date, fields_json)
    VALUES (MAX(?1, COALESCE((SELECT MAX(id) FROM entries), 0) + 1), ?2, ?3, ?4)
    RETURNING id
    "#,
  )
  .bind(Utc::now().timestamp_millis())
  .bind(tracker.id())
  .bind(date)
  .bind(serde_json::to_string(&fields)?)
  .fetch_one(pool)
  .await?;

  let entry = Entry {
    id,
    tracker,
    date,
    fields,
  };

  debug!(id = entry.id, tracker = %tracker, date = %date, "Saved entry");
  Ok(entry)
}

/// Insert `entry` as-is, keeping its id
pub(crate) async fn store_entry<'e, E>(executor: E, entry: &Entry) -> Result<()>
where
  E: SqliteExecutor<'e>,
{
  sqlx::query(
    r#"
    INSERT INTO entries (id, tracker, date, fields_json)
    VALUES (?1, ?2, ?3, ?4)
    "#,
  )
  .bind(entry.id)
  .bind(entry.tracker.id())
  .bind(entry.date)
  .bind(serde_json::to_string(&entry.fields)?)
  .execute(executor)
  .await?;

  Ok(())
}

/// Entries of one tracker, newest date first
pub async fn list_entries(pool: &SqlitePool, tracker: Tracker) -> Result<Vec<Entry>> {
  let rows = sqlx::query_as::<_, EntryRow>(
    r#"
    SELECT id, tracker, date, fields_json
    FROM entries
    WHERE tracker = ?1
    ORDER BY date DESC, id DESC
    "#,
  )
  .bind(tracker.id())
  .fetch_all(pool)
  .await?;

  rows.into_iter().map(Entry::try_from).collect()
}

/// Ids already stored, any tracker
pub(crate) async fn existing_ids(pool: &SqlitePool) -> Result<Vec<i64>> {
  let ids = sqlx::query_scalar("SELECT id FROM entries").fetch_all(pool).await?;
  Ok(ids)
}

pub async fn delete_entry(pool: &SqlitePool, id: i64) -> Result<()> {
  let result = sqlx::query("DELETE FROM entries WHERE id = ?1")
    .bind(id)
    .execute(pool)
    .await?;

  if result.rows_affected() == 0 {
    return Err(TrackerError::NotFound(format!("entry {}", id)));
  }

  debug!(id, "Deleted entry");
  Ok(())
}

/// Remove every entry of `tracker`, returning how many were removed
pub async fn clear_entries(pool: &SqlitePool, tracker: Tracker) -> Result<u64> {
  let result = sqlx::query("DELETE FROM entries WHERE tracker = ?1")
    .bind(tracker.id())
    .execute(pool)
    .await?;

  debug!(tracker = %tracker, removed = result.rows_affected(), "Cleared entries");
  Ok(result.rows_affected())
}

/// Most recent positive weight, searching trackers in their fixed order
pub async fn latest_weight_observation(pool: &SqlitePool) -> Result<Option<WeightObservation>> {
  for tracker in Tracker::ALL {
    let entries = list_entries(pool, tracker).await?;
    if let Some(weight) = entries.iter().find_map(Entry::weight) {
      return Ok(Some(weight));
    }
  }
  Ok(None)
}
