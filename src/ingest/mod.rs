/// Input parsing for the tide table generator.
///
/// Submodules:
/// - `csv_extrema` — reads per-day extrema rows from CSV into a globally
///   time-sorted extremum sequence.

pub mod csv_extrema;
