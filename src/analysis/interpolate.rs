/// Half-sine interpolation between tide extrema.
///
/// The tide does not rise linearly: it moves slowly near high and low
/// water and fastest at mid-tide. A shifted sine gives that S-curve
/// without any harmonic data — zero slope at both extrema, symmetric
/// about the midpoint.

use chrono::NaiveDateTime;

/// Ease-in-ease-out S-curve on `[0, 1]`.
///
/// `s(0) = 0`, `s(1) = 1`, `s(0.5) = 0.5`, zero derivative at both ends.
fn half_sine(x: f64) -> f64 {
    0.5 * (1.0 + (std::f64::consts::PI * x - std::f64::consts::FRAC_PI_2).sin())
}

/// Interpolated tide height at `t` between extrema `(t0, h0)` and `(t1, h1)`.
///
/// Queries at or outside the endpoints clamp to the endpoint height.
/// Duplicate-timestamp extrema (`t0 == t1`) return `h0` rather than
/// dividing by zero — the bracketing pair carries no interval to ease over.
pub fn height_between(
    t: NaiveDateTime,
    t0: NaiveDateTime,
    h0: f64,
    t1: NaiveDateTime,
    h1: f64,
) -> f64 {
    if t0 == t1 || t <= t0 {
        return h0;
    }
    if t >= t1 {
        return h1;
    }

    let elapsed = (t - t0).num_seconds() as f64;
    let interval = (t1 - t0).num_seconds() as f64;
    let x = elapsed / interval;

    h0 + (h1 - h0) * half_sine(x)
}
