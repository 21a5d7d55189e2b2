//! Output validation for generated tide tables.
//!
//! Validation is purely diagnostic: it flags incomplete days and
//! implausible heights as human-readable findings but never mutates or
//! discards data. The pipeline emits its output even when findings are
//! present — a partial first day is expected, and an odd height is
//! worth a look, not a rejection.

use chrono::NaiveDate;

use crate::model::{DailyRecord, PlausibleRange};

// ---------------------------------------------------------------------------
// Findings
// ---------------------------------------------------------------------------

/// What a validation finding is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingKind {
    /// The day carries fewer (or more) than 24 hourly samples.
    IncompleteDay,
    /// A height falls outside the configured plausible range.
    ImplausibleHeight,
}

/// A single non-fatal diagnostic about one generated day.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFinding {
    pub date: NaiveDate,
    pub kind: FindingKind,
    pub message: String,
}

impl std::fmt::Display for ValidationFinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.date, self.message)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Checks every record for completeness and height plausibility.
///
/// Findings come back in record order, completeness first per day, so the
/// report reads in the same order as the output artifact.
pub fn validate_records(records: &[DailyRecord], range: &PlausibleRange) -> Vec<ValidationFinding> {
    let mut findings = Vec::new();

    for record in records {
        if !record.is_complete() {
            findings.push(ValidationFinding {
                date: record.date,
                kind: FindingKind::IncompleteDay,
                message: format!("only {}/24 hours present", record.hours.len()),
            });
        }

        for (&hour, &height) in &record.hours {
            if !range.contains(height) {
                findings.push(ValidationFinding {
                    date: record.date,
                    kind: FindingKind::ImplausibleHeight,
                    message: format!(
                        "{:02}:00: unusual tide height {}m (plausible {}..{}m)",
                        hour, height, range.min_m, range.max_m
                    ),
                });
            }
        }
    }

    findings
}

/// Prints a validation summary to the console, truncating long finding
/// lists the way the converter's progress report does.
pub fn print_summary(findings: &[ValidationFinding]) {
    if findings.is_empty() {
        println!("✅ Validation passed!");
        return;
    }

    println!("⚠️  Found {} validation finding(s):", findings.len());
    for finding in findings.iter().take(10) {
        println!("   - {}", finding);
    }
    if findings.len() > 10 {
        println!("   ... and {} more", findings.len() - 10);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
