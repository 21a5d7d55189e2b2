/// tidetab — hourly tide table generator.
///
/// Converts sparse per-day tide extrema (up to four high/low waters) into
/// dense hourly height tables via half-sine interpolation, validates the
/// result, and renders printable monthly pages.
///
/// Pipeline: `ingest` → `analysis` → `validate` → `output` → `render`.

pub mod analysis;
pub mod config;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod output;
pub mod render;
pub mod validate;
