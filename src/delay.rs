//! Per-phase delay estimation (fitness function).
//!
//! Estimates the delay cost of one phase from its green time, the shared
//! cycle time, and its congestion ratio. Lower is better.
//!
//! # Model
//!
//! ```text
//! a  = (1 - g/C)^2
//! p  = max(0.1, 1 - (g/C) * x)
//! d1 = 0.38 * C * a / p        // uniform waiting term
//! d2 = 173 * x^2               // congestion penalty
//! d  = d1 + d2
//! ```
//!
//! # Reference
//! Webster (1958), "Traffic Signal Settings", Road Research Technical Paper 39

/// Scale factor of the uniform waiting term.
const UNIFORM_DELAY_FACTOR: f64 = 0.38;
/// Weight of the congestion penalty term.
const CONGESTION_PENALTY: f64 = 173.0;
/// Floor of the saturation denominator.
const MIN_SATURATION_DENOM: f64 = 0.1;

/// Estimated delay for one phase.
///
/// Returns exactly `0.0` when `cycle_time <= 0` or `capacity <= 0`.
/// Defined for any `green`, including values outside the configured bounds.
pub fn delay(cycle_time: f64, green: f64, congestion: f64, capacity: f64) -> f64 {
    if cycle_time <= 0.0 || capacity <= 0.0 {
        return 0.0;
    }
    let share = green / cycle_time;
    let a = (1.0 - share).powi(2);
    let p = (1.0 - share * congestion).max(MIN_SATURATION_DENOM);
    let uniform = (UNIFORM_DELAY_FACTOR * cycle_time * a) / p;
    let penalty = CONGESTION_PENALTY * congestion.powi(2);
    uniform + penalty
}

/// Total delay of a green-time assignment: sum of [`delay`] over phases.
///
/// `greens`, `congestion`, and `capacities` are zipped phase by phase.
pub fn total_delay(cycle_time: f64, greens: &[u32], congestion: &[f64], capacities: &[f64]) -> f64 {
    greens
        .iter()
        .zip(congestion)
        .zip(capacities)
        .map(|((&g, &x), &c)| delay(cycle_time, f64::from(g), x, c))
        .sum()
}
