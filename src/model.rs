/// Core data types for the tide table generator.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no logic, no I/O, and no external dependencies beyond chrono —
/// only types.

use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

// ---------------------------------------------------------------------------
// Extremum
// ---------------------------------------------------------------------------

/// A single recorded tide extremum (local high or low water).
///
/// Corresponds to one `Time{i}`/`Height{i}` slot of an input CSV row.
/// Times carry minute resolution; heights are meters above chart datum.
#[derive(Debug, Clone, PartialEq)]
pub struct Extremum {
    pub time: NaiveDateTime,
    pub height_m: f64,
}

// ---------------------------------------------------------------------------
// Daily record
// ---------------------------------------------------------------------------

/// One calendar day of reconstructed hourly tide heights.
///
/// `hours` maps hour-of-day (0..=23) to height in meters, rounded to one
/// decimal. A record is complete when all 24 hours are present; the partial
/// first and last day of a range may carry fewer (hours before the first
/// extremum or after the last one are never generated).
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub hours: BTreeMap<u32, f64>,
}

impl DailyRecord {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            hours: BTreeMap::new(),
        }
    }

    /// True when all 24 hourly samples are present.
    pub fn is_complete(&self) -> bool {
        self.hours.len() == 24
    }
}

// ---------------------------------------------------------------------------
// Plausible height range
// ---------------------------------------------------------------------------

/// Site-tunable bounds for plausible tide heights, in meters.
///
/// Heights outside this range are flagged by the validator but never
/// rejected — the bounds are diagnostic, not a hard constraint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlausibleRange {
    pub min_m: f64,
    pub max_m: f64,
}

impl PlausibleRange {
    pub fn contains(&self, height_m: f64) -> bool {
        self.min_m <= height_m && height_m <= self.max_m
    }
}

impl Default for PlausibleRange {
    fn default() -> Self {
        Self {
            min_m: -0.5,
            max_m: 4.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when loading extrema or handling the output artifact.
#[derive(Debug, PartialEq)]
pub enum TideError {
    /// A file could not be opened, read, or written. Reported distinctly
    /// from parse errors so a missing input is not mistaken for bad data.
    Io { path: String, message: String },
    /// Malformed date, time, or height in the input. Fatal — aborts the
    /// whole run with the offending row's line number.
    Parse { line: u64, message: String },
    /// The JSON output artifact could not be deserialized by the renderer.
    Json { message: String },
    /// The TOML configuration file was present but malformed.
    Config { message: String },
}

impl std::fmt::Display for TideError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TideError::Io { path, message } => write!(f, "I/O error for {}: {}", path, message),
            TideError::Parse { line, message } => {
                write!(f, "Parse error at line {}: {}", line, message)
            }
            TideError::Json { message } => write!(f, "JSON error: {}", message),
            TideError::Config { message } => write!(f, "Config error: {}", message),
        }
    }
}

impl std::error::Error for TideError {}
