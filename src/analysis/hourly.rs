/// Hourly tide reconstruction.
///
/// Walks the globally sorted extrema and samples the interpolated tide
/// curve at every hour tick between the first extremum's day start and
/// the last extremum's final hour, grouping results by calendar day.
///
/// Ticks that fall before the first extremum or after the last one have
/// no bracketing pair and produce no sample; the validator surfaces the
/// resulting short first/last days as incomplete-day findings.

use chrono::{Duration, NaiveDateTime, Timelike};
use std::collections::BTreeMap;

use crate::analysis::interpolate::height_between;
use crate::model::{DailyRecord, Extremum};

/// Generates one `DailyRecord` per calendar day covered by the extrema,
/// sorted by date ascending.
///
/// An empty extrema sequence yields an empty result. Heights are rounded
/// to one decimal before being recorded.
pub fn generate_hourly(extrema: &[Extremum]) -> Vec<DailyRecord> {
    let (first, last) = match (extrema.first(), extrema.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Vec::new(),
    };

    let range_start = day_start(first.time);
    let range_end = day_start(last.time) + Duration::hours(23);

    // Ordered map keyed by structured date — emission order falls out of
    // the BTreeMap, with no string-prefix grouping.
    let mut days: BTreeMap<chrono::NaiveDate, DailyRecord> = BTreeMap::new();

    let mut tick = range_start;
    while tick <= range_end {
        if let Some(height) = sample_at(extrema, tick) {
            days.entry(tick.date())
                .or_insert_with(|| DailyRecord::new(tick.date()))
                .hours
                .insert(tick.hour(), round_1dp(height));
        }
        tick = tick + Duration::hours(1);
    }

    days.into_values().collect()
}

/// Interpolated height at `tick`, or `None` when no consecutive extrema
/// pair brackets it.
fn sample_at(extrema: &[Extremum], tick: NaiveDateTime) -> Option<f64> {
    extrema.windows(2).find_map(|pair| {
        let (left, right) = (&pair[0], &pair[1]);
        if left.time <= tick && tick <= right.time {
            Some(height_between(
                tick,
                left.time,
                left.height_m,
                right.time,
                right.height_m,
            ))
        } else {
            None
        }
    })
}

fn day_start(t: NaiveDateTime) -> NaiveDateTime {
    t.date().and_hms_opt(0, 0, 0).unwrap()
}

fn round_1dp(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn extremum(date: (i32, u32, u32), hour: u32, minute: u32, height_m: f64) -> Extremum {
        Extremum {
            time: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
                .unwrap()
                .and_hms_opt(hour, minute, 0)
                .unwrap(),
            height_m,
        }
    }

    fn dec(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 12, day).unwrap()
    }

    /// The four-extrema reference day from the Singapore tide tables:
    /// (0107, 1.1) (0746, 2.7) (1400, 1.1) (2018, 2.6).
    fn reference_day() -> Vec<Extremum> {
        vec![
            extremum((2025, 12, 1), 1, 7, 1.1),
            extremum((2025, 12, 1), 7, 46, 2.7),
            extremum((2025, 12, 1), 14, 0, 1.1),
            extremum((2025, 12, 1), 20, 18, 2.6),
        ]
    }

    #[test]
    fn test_empty_extrema_yield_zero_records() {
        assert!(generate_hourly(&[]).is_empty());
    }

    #[test]
    fn test_reference_day_samples_bracketed_hours_only() {
        let records = generate_hourly(&reference_day());
        assert_eq!(records.len(), 1);

        let day = &records[0];
        assert_eq!(day.date, dec(1));
        // Ticks 00–01 precede the 01:07 extremum and 21–23 follow the
        // 20:18 extremum, so 19 of 24 hours are bracketed.
        assert_eq!(day.hours.len(), 19);
        assert!(!day.hours.contains_key(&0));
        assert!(!day.hours.contains_key(&1));
        assert!(day.hours.contains_key(&2));
        assert!(day.hours.contains_key(&20));
        assert!(!day.hours.contains_key(&21));
    }

    #[test]
    fn test_reference_day_0800_matches_half_sine_formula() {
        // t0=07:46 h0=2.7, t1=14:00 h1=1.1, x=14/374 → 2.6945, rounds to 2.7.
        let records = generate_hourly(&reference_day());
        assert_eq!(records[0].hours[&8], 2.7);
    }

    #[test]
    fn test_tick_landing_on_extremum_takes_its_height_exactly() {
        let records = generate_hourly(&reference_day());
        assert_eq!(records[0].hours[&14], 1.1, "14:00 coincides with a low water");
    }

    #[test]
    fn test_heights_rounded_to_one_decimal() {
        let records = generate_hourly(&reference_day());
        for (&hour, &height) in &records[0].hours {
            let scaled = height * 10.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-9,
                "hour {} height {} not rounded to 1 decimal",
                hour,
                height
            );
        }
    }

    #[test]
    fn test_interior_day_is_complete() {
        // Extrema straddle day 2 on both sides, so all 24 of its ticks
        // are bracketed.
        let extrema = vec![
            extremum((2025, 12, 1), 20, 0, 1.0),
            extremum((2025, 12, 2), 6, 0, 3.0),
            extremum((2025, 12, 2), 18, 0, 0.8),
            extremum((2025, 12, 3), 4, 0, 2.5),
        ];
        let records = generate_hourly(&extrema);
        assert_eq!(records.len(), 3);

        let middle = &records[1];
        assert_eq!(middle.date, dec(2));
        assert!(middle.is_complete(), "interior day should have all 24 hours");
        assert_eq!(middle.hours[&6], 3.0);
        assert_eq!(middle.hours[&18], 0.8);
    }

    #[test]
    fn test_records_sorted_by_date_without_duplicates() {
        let extrema = vec![
            extremum((2025, 12, 1), 12, 0, 1.0),
            extremum((2025, 12, 4), 12, 0, 2.0),
        ];
        let records = generate_hourly(&extrema);
        let dates: Vec<_> = records.iter().map(|r| r.date).collect();

        let mut sorted = dates.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(dates, sorted, "records must be date-ascending with no duplicates");
        assert_eq!(dates, vec![dec(1), dec(2), dec(3), dec(4)]);
    }

    #[test]
    fn test_single_extremum_produces_no_samples() {
        // One extremum forms no bracketing pair, so every tick is dropped
        // and no day is emitted.
        let records = generate_hourly(&[extremum((2025, 12, 1), 12, 0, 1.5)]);
        assert!(records.is_empty());
    }

    #[test]
    fn test_duplicate_timestamp_extrema_do_not_produce_nan() {
        let extrema = vec![
            extremum((2025, 12, 1), 6, 0, 1.5),
            extremum((2025, 12, 1), 6, 0, 1.8),
            extremum((2025, 12, 1), 18, 0, 0.5),
        ];
        let records = generate_hourly(&extrema);
        assert_eq!(records.len(), 1);
        for (&hour, &height) in &records[0].hours {
            assert!(height.is_finite(), "hour {} produced non-finite {}", hour, height);
        }
        // 06:00 is bracketed first by the degenerate pair, which yields
        // its left height.
        assert_eq!(records[0].hours[&6], 1.5);
    }

    #[test]
    fn test_range_spans_partial_first_and_last_days() {
        let extrema = vec![
            extremum((2025, 12, 1), 22, 0, 1.0),
            extremum((2025, 12, 2), 4, 0, 3.0),
        ];
        let records = generate_hourly(&extrema);
        assert_eq!(records.len(), 2);
        // Day 1: only 22:00 and 23:00 are bracketed.
        assert_eq!(records[0].hours.len(), 2);
        // Day 2: 00:00 through 04:00.
        assert_eq!(records[1].hours.len(), 5);
    }
}
