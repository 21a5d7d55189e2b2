/// Printable monthly tide pages.
///
/// Consumes the generated daily records as plain tabular input and lays
/// them out one page per year-month: a header with the location label and
/// month title, then a 25-column grid — day number plus the 24 hourly
/// heights. Multi-month inputs get one page each, joined by form feeds
/// so the output prints one month per sheet.

use chrono::Datelike;
use std::collections::BTreeMap;

use crate::model::DailyRecord;

/// Column width of one hourly cell, wide enough for "-0.5" and "10.0".
const CELL_WIDTH: usize = 5;

// ---------------------------------------------------------------------------
// Month grouping
// ---------------------------------------------------------------------------

/// Groups records by (year, month), preserving date order within each
/// month. Input records are already date-ascending, so the grouping is a
/// single ordered pass.
pub fn group_by_month(records: &[DailyRecord]) -> BTreeMap<(i32, u32), Vec<&DailyRecord>> {
    let mut months: BTreeMap<(i32, u32), Vec<&DailyRecord>> = BTreeMap::new();
    for record in records {
        months
            .entry((record.date.year(), record.date.month()))
            .or_default()
            .push(record);
    }
    months
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "JANUARY",
        2 => "FEBRUARY",
        3 => "MARCH",
        4 => "APRIL",
        5 => "MAY",
        6 => "JUNE",
        7 => "JULY",
        8 => "AUGUST",
        9 => "SEPTEMBER",
        10 => "OCTOBER",
        11 => "NOVEMBER",
        12 => "DECEMBER",
        _ => "UNKNOWN",
    }
}

// ---------------------------------------------------------------------------
// Page rendering
// ---------------------------------------------------------------------------

/// Renders one month's grid as a printable text page.
pub fn render_month_page(
    year: i32,
    month: u32,
    days: &[&DailyRecord],
    location: &str,
) -> String {
    let mut page = String::new();

    page.push_str(&format!("{}\n", location));
    page.push_str(&format!("HOURLY TIDE TABLES — {} {}\n", month_name(month), year));
    page.push_str("Heights in meters above chart datum\n\n");

    // Header row: Day, then hours 00-23.
    page.push_str(&format!("{:>3}", "Day"));
    for hour in 0..24 {
        page.push_str(&format!("{:>width$}", format!("{:02}", hour), width = CELL_WIDTH));
    }
    page.push('\n');

    for day in days {
        page.push_str(&format!("{:>3}", day.date.day()));
        for hour in 0..24 {
            match day.hours.get(&hour) {
                Some(height) => {
                    page.push_str(&format!("{:>width$}", format!("{:.1}", height), width = CELL_WIDTH))
                }
                // Ungenerated hours of a partial day stay blank.
                None => page.push_str(&" ".repeat(CELL_WIDTH)),
            }
        }
        page.push('\n');
    }

    page
}

/// Renders every month as its own page, separated by form feeds.
pub fn render_pages(records: &[DailyRecord], location: &str) -> String {
    let months = group_by_month(records);
    let pages: Vec<String> = months
        .iter()
        .map(|(&(year, month), days)| render_month_page(year, month, days, location))
        .collect();
    pages.join("\u{c}\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
