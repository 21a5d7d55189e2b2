/// Tide curve reconstruction for the tide table generator.
///
/// Submodules:
/// - `interpolate` — half-sine interpolation between consecutive extrema.
/// - `hourly` — walks the sorted extrema and samples the reconstructed
///   curve at fixed hourly ticks, grouped by calendar day.

pub mod hourly;
pub mod interpolate;
