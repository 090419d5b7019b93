//! Single-approach fallback.
//!
//! With only one observed approach there is nothing to allocate between
//! phases, so the green time grows linearly with demand instead.

/// Base green time (seconds).
const BASE_GREEN: f64 = 10.0;
/// Extra seconds per queued vehicle.
const SECONDS_PER_VEHICLE: f64 = 2.0;

/// Green time for a lone approach: `max(10, trunc(10 + 2 × count))`.
///
/// Negative or NaN counts yield the 10 s floor.
pub fn single_approach_green(count: f64) -> i64 {
    let raw = (BASE_GREEN + SECONDS_PER_VEHICLE * count).trunc();
    if raw.is_nan() {
        return BASE_GREEN as i64;
    }
    (raw as i64).max(BASE_GREEN as i64)
}
