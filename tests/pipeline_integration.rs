//! End-to-end pipeline tests: CSV extrema in, validated JSON artifact and
//! rendered monthly pages out. These exercise the same load → generate →
//! validate → write sequence the converter binary runs, against real files
//! in a scratch directory.

use std::fs;
use std::path::PathBuf;

use tidetab::analysis::hourly::generate_hourly;
use tidetab::ingest::csv_extrema::{load_extrema, parse_extrema};
use tidetab::model::{PlausibleRange, TideError};
use tidetab::output::{read_records, write_records};
use tidetab::render::render_pages;
use tidetab::validate::{validate_records, FindingKind};

const HEADER: &str = "Date,Time1,Height1,Time2,Height2,Time3,Height3,Time4,Height4";

/// Scratch file that cleans up after itself.
struct ScratchFile(PathBuf);

impl ScratchFile {
    fn new(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!("tidetab_it_{}", name));
        fs::write(&path, contents).expect("scratch file should be writable");
        ScratchFile(path)
    }

    fn empty(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!("tidetab_it_{}", name));
        fs::remove_file(&path).ok();
        ScratchFile(path)
    }
}

impl Drop for ScratchFile {
    fn drop(&mut self) {
        fs::remove_file(&self.0).ok();
    }
}

#[test]
fn test_full_pipeline_from_csv_to_rendered_pages() {
    let csv = ScratchFile::new(
        "full.csv",
        &format!(
            "{}\n\
             EXAMPLE 2025-01-01,0107,1.1,0746,2.7,1400,1.1,2018,2.6\n\
             2025-12-01,0107,1.1,0746,2.7,1400,1.1,2018,2.6\n\
             2025-12-02,0151,1.0,0836,2.8,1448,1.0,2102,2.7\n",
            HEADER
        ),
    );
    let artifact = ScratchFile::empty("full.json");

    let extrema = load_extrema(&csv.0).expect("CSV should load");
    assert_eq!(extrema.len(), 8, "example row skipped, two real rows kept");

    let records = generate_hourly(&extrema);
    assert_eq!(records.len(), 2);
    assert!(records[0].date < records[1].date);

    // Interior hours are interpolated; the 08:00 tick on day one falls on
    // the falling limb from 2.7 at 07:46 and stays near the high water.
    assert_eq!(records[0].hours[&8], 2.7);

    let findings = validate_records(&records, &PlausibleRange::default());
    // Both days are edge days of the range, so both are flagged short.
    assert!(findings
        .iter()
        .any(|f| f.kind == FindingKind::IncompleteDay));

    write_records(&artifact.0, &records).expect("artifact should write");
    let restored = read_records(&artifact.0).expect("artifact should read back");
    assert_eq!(restored, records);

    let pages = render_pages(&restored, "TANJONG PAGAR");
    assert!(pages.contains("TANJONG PAGAR"));
    assert!(pages.contains("DECEMBER 2025"));
    assert_eq!(
        pages.matches('\u{c}').count(),
        0,
        "single month renders as a single page"
    );
}

#[test]
fn test_malformed_time_aborts_before_any_output_is_written() {
    let csv = ScratchFile::new(
        "badtime.csv",
        &format!("{}\n2025-12-01,25AB,1.1,,,,,,\n", HEADER),
    );
    let artifact = ScratchFile::empty("badtime.json");

    // Mirror the converter's ordering: parse fully before writing.
    let result = load_extrema(&csv.0);
    let err = result.expect_err("25AB is not a valid HHMM time");
    assert!(matches!(err, TideError::Parse { .. }), "got {:?}", err);

    assert!(
        !artifact.0.exists(),
        "a fatal parse error must leave no output artifact behind"
    );
}

#[test]
fn test_empty_input_produces_empty_artifact_without_error() {
    let csv = ScratchFile::new("empty.csv", &format!("{}\n", HEADER));
    let artifact = ScratchFile::empty("empty.json");

    let extrema = load_extrema(&csv.0).expect("header-only CSV is valid");
    assert!(extrema.is_empty());

    let records = generate_hourly(&extrema);
    assert!(records.is_empty(), "zero extrema yield zero daily records");

    let findings = validate_records(&records, &PlausibleRange::default());
    assert!(findings.is_empty());

    write_records(&artifact.0, &records).expect("empty artifact should still write");
    assert_eq!(read_records(&artifact.0).unwrap(), Vec::new());
}

#[test]
fn test_implausible_height_is_flagged_but_kept_in_output() {
    // A 10.0 m extremum is far outside the default plausible range.
    let csv = ScratchFile::new(
        "implausible.csv",
        &format!(
            "{}\n\
             2025-12-01,0600,1.0,1200,10.0,1800,1.0,,\n",
            HEADER
        ),
    );
    let artifact = ScratchFile::empty("implausible.json");

    let extrema = load_extrema(&csv.0).expect("loader accepts any magnitude");
    let records = generate_hourly(&extrema);

    let findings = validate_records(&records, &PlausibleRange::default());
    assert!(
        findings
            .iter()
            .any(|f| f.kind == FindingKind::ImplausibleHeight),
        "10.0m should be flagged, findings: {:?}",
        findings
    );

    // Validation never blocks or strips output.
    write_records(&artifact.0, &records).expect("output still written with findings");
    let restored = read_records(&artifact.0).unwrap();
    assert_eq!(restored[0].hours[&12], 10.0);
}

#[test]
fn test_rows_out_of_order_still_yield_sorted_unique_dates() {
    let input = format!(
        "{}\n\
         2025-12-03,0600,1.2,1800,2.4,,,,\n\
         2025-12-01,0600,1.0,1800,2.0,,,,\n\
         2025-12-02,0600,1.1,1800,2.2,,,,\n",
        HEADER
    );
    let extrema = parse_extrema(input.as_bytes()).expect("should parse");
    let records = generate_hourly(&extrema);

    let dates: Vec<_> = records.iter().map(|r| r.date).collect();
    let mut expected = dates.clone();
    expected.sort();
    expected.dedup();
    assert_eq!(dates, expected, "dates must be ascending and unique");
    assert_eq!(dates.len(), 3);
}

#[test]
fn test_month_boundary_splits_rendered_pages() {
    let input = format!(
        "{}\n\
         2025-12-31,0600,1.0,1800,2.0,,,,\n\
         2026-01-01,0600,1.1,1800,2.1,,,,\n",
        HEADER
    );
    let extrema = parse_extrema(input.as_bytes()).expect("should parse");
    let records = generate_hourly(&extrema);
    assert_eq!(records.len(), 2);

    let pages = render_pages(&records, "SEMBAWANG");
    assert_eq!(pages.matches('\u{c}').count(), 1, "two months, two pages");
    assert!(pages.contains("DECEMBER 2025"));
    assert!(pages.contains("JANUARY 2026"));
    assert!(pages.contains("SEMBAWANG"));
}
