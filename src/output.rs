/// The JSON output artifact.
///
/// Serialized form is an ordered list of per-day objects: the `Date` key
/// first (YYYY-MM-DD), then one `"HH:00"` key per generated hour mapped
/// to its 1-decimal height. Only generated hours appear — a partial first
/// or last day serializes with fewer keys.
///
/// The artifact is written in one shot after the whole pipeline has
/// succeeded, so a fatal parse error never leaves a truncated file behind.

use chrono::NaiveDate;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::{DailyRecord, TideError};

impl Serialize for DailyRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.hours.len()))?;
        map.serialize_entry("Date", &self.date.format("%Y-%m-%d").to_string())?;
        for (&hour, &height) in &self.hours {
            map.serialize_entry(&format!("{:02}:00", hour), &height)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// Writing
// ---------------------------------------------------------------------------

/// Writes the full record sequence as pretty-printed JSON.
///
/// The buffered writer is flushed before returning — an out-of-space or
/// failing device must surface as an `Io` error here, not vanish in the
/// writer's drop, or the converter would report success over a truncated
/// artifact.
pub fn write_records(path: &Path, records: &[DailyRecord]) -> Result<(), TideError> {
    let io_error = |e: &dyn std::fmt::Display| TideError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let file = File::create(path).map_err(|e| io_error(&e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| io_error(&e))?;
    writer.flush().map_err(|e| io_error(&e))
}

// ---------------------------------------------------------------------------
// Reading (renderer side)
// ---------------------------------------------------------------------------

/// Reads a previously written artifact back into `DailyRecord`s.
///
/// Used by the monthly renderer, which consumes the artifact as plain
/// tabular input. Malformed structure is a `Json` error; a missing file
/// is an `Io` error.
pub fn read_records(path: &Path) -> Result<Vec<DailyRecord>, TideError> {
    let file = File::open(path).map_err(|e| TideError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let value: serde_json::Value =
        serde_json::from_reader(file).map_err(|e| TideError::Json {
            message: e.to_string(),
        })?;

    let entries = value.as_array().ok_or(TideError::Json {
        message: "expected a top-level JSON array of daily records".to_string(),
    })?;

    entries.iter().map(record_from_value).collect()
}

fn record_from_value(value: &serde_json::Value) -> Result<DailyRecord, TideError> {
    let object = value.as_object().ok_or(TideError::Json {
        message: "daily record entry is not an object".to_string(),
    })?;

    let date_str = object
        .get("Date")
        .and_then(|v| v.as_str())
        .ok_or(TideError::Json {
            message: "daily record entry has no 'Date' string".to_string(),
        })?;

    let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| TideError::Json {
        message: format!("invalid record date '{}'", date_str),
    })?;

    let mut record = DailyRecord::new(date);
    for (key, entry) in object {
        if key == "Date" {
            continue;
        }
        let hour = parse_hour_key(key).ok_or(TideError::Json {
            message: format!("{}: unexpected key '{}'", date_str, key),
        })?;
        let height = entry.as_f64().ok_or(TideError::Json {
            message: format!("{} {}: height is not a number", date_str, key),
        })?;
        record.hours.insert(hour, height);
    }

    Ok(record)
}

/// Accepts `"HH:00"` keys for hours 0..=23.
fn parse_hour_key(key: &str) -> Option<u32> {
    let (hour_part, minute_part) = key.split_once(':')?;
    if minute_part != "00" || hour_part.len() != 2 {
        return None;
    }
    let hour: u32 = hour_part.parse().ok()?;
    (hour < 24).then_some(hour)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
