/// CSV extrema loader.
///
/// Reads per-day tide extrema rows and flattens them into a single
/// time-sorted sequence. Each row carries a `Date` plus up to four
/// `Time{i}`/`Height{i}` pairs; most days have two to four tides, so
/// partially filled rows are normal, not an error.
///
/// Rows whose `Date` begins with the `EXAMPLE` marker are documentation
/// rows kept alongside real data and are skipped entirely.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use csv::StringRecord;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::model::{Extremum, TideError};

/// Rows whose date field starts with this marker are skipped
/// (case-sensitive prefix match).
pub const EXAMPLE_ROW_PREFIX: &str = "EXAMPLE";

/// Maximum number of extrema slots per input row.
const SLOTS_PER_ROW: usize = 4;

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Loads and sorts all extrema from a CSV file.
///
/// A missing or unreadable file is an `Io` error; malformed content is a
/// `Parse` error carrying the offending line number. Zero extrema is a
/// valid result — downstream generation handles it by producing no days.
pub fn load_extrema(path: &Path) -> Result<Vec<Extremum>, TideError> {
    let file = File::open(path).map_err(|e| TideError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_extrema(file)
}

/// Parses extrema from any CSV reader and returns them sorted by time
/// ascending. The sort is stable, so extrema sharing a timestamp keep
/// their input order.
pub fn parse_extrema<R: Read>(input: R) -> Result<Vec<Extremum>, TideError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| csv_error_to_parse(&e))?
        .clone();

    let date_idx = find_column(&headers, "Date").ok_or(TideError::Parse {
        line: 1,
        message: "missing required 'Date' column".to_string(),
    })?;

    // Column indices for Time1/Height1 .. Time4/Height4. A column that is
    // absent from the header behaves like an empty slot on every row.
    let slot_columns: Vec<(Option<usize>, Option<usize>)> = (1..=SLOTS_PER_ROW)
        .map(|i| {
            (
                find_column(&headers, &format!("Time{}", i)),
                find_column(&headers, &format!("Height{}", i)),
            )
        })
        .collect();

    let mut extrema = Vec::new();

    for result in reader.records() {
        let record = result.map_err(|e| csv_error_to_parse(&e))?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let date_field = record.get(date_idx).unwrap_or("").trim();
        if date_field.starts_with(EXAMPLE_ROW_PREFIX) {
            continue;
        }

        let date = parse_date(date_field, line)?;

        for &(time_idx, height_idx) in &slot_columns {
            let time_field = field_at(&record, time_idx);
            let height_field = field_at(&record, height_idx);

            // A slot counts only when both sub-fields are present.
            if time_field.is_empty() || height_field.is_empty() {
                continue;
            }

            let time = parse_time_hhmm(time_field, line)?;
            let height_m = parse_height(height_field, line)?;

            extrema.push(Extremum {
                time: NaiveDateTime::new(date, time),
                height_m,
            });
        }
    }

    extrema.sort_by_key(|e| e.time);
    Ok(extrema)
}

// ---------------------------------------------------------------------------
// Field parsing
// ---------------------------------------------------------------------------

fn parse_date(field: &str, line: u64) -> Result<NaiveDate, TideError> {
    NaiveDate::parse_from_str(field, "%Y-%m-%d").map_err(|_| TideError::Parse {
        line,
        message: format!("invalid date '{}', expected YYYY-MM-DD", field),
    })
}

/// Parses a 4-digit 24-hour clock string (`HHMM`).
fn parse_time_hhmm(field: &str, line: u64) -> Result<NaiveTime, TideError> {
    if field.len() != 4 || !field.chars().all(|c| c.is_ascii_digit()) {
        return Err(TideError::Parse {
            line,
            message: format!("invalid time '{}', expected 4-digit HHMM", field),
        });
    }

    // Unwraps cannot fail: both substrings are all-digit and length 2.
    let hour: u32 = field[..2].parse().unwrap();
    let minute: u32 = field[2..].parse().unwrap();

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(TideError::Parse {
        line,
        message: format!("time '{}' is not a valid clock time", field),
    })
}

fn parse_height(field: &str, line: u64) -> Result<f64, TideError> {
    field.parse::<f64>().map_err(|_| TideError::Parse {
        line,
        message: format!("invalid height '{}', expected decimal meters", field),
    })
}

fn find_column(headers: &StringRecord, name: &str) -> Option<usize> {
    headers.iter().position(|h| h.trim() == name)
}

fn field_at<'r>(record: &'r StringRecord, idx: Option<usize>) -> &'r str {
    idx.and_then(|i| record.get(i)).unwrap_or("").trim()
}

fn csv_error_to_parse(err: &csv::Error) -> TideError {
    let line = match err.position() {
        Some(pos) => pos.line(),
        None => 0,
    };
    TideError::Parse {
        line,
        message: err.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
