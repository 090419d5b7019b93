//! Per-phase traffic demand and congestion.
//!
//! Converts raw vehicle counts observed on each approach into a
//! normalized congestion ratio against a fixed road capacity.
//!
//! # Formula
//!
//! ```text
//! ratio_i = clamp((capacity_i - count_i) / capacity_i, 0.05, 1.0)
//! ```

use serde::{Deserialize, Serialize};

/// Lower bound of the congestion ratio.
pub const MIN_CONGESTION: f64 = 0.05;
/// Upper bound of the congestion ratio.
pub const MAX_CONGESTION: f64 = 1.0;

/// Replacement value for non-positive (or NaN) vehicle counts.
pub const FALLBACK_COUNT: f64 = 1.0;

/// Replaces non-positive counts with [`FALLBACK_COUNT`].
///
/// NaN is treated as non-positive.
pub fn sanitize_count(count: f64) -> f64 {
    if count > 0.0 {
        count
    } else {
        FALLBACK_COUNT
    }
}

/// Sanitizes a whole count vector. See [`sanitize_count`].
pub fn sanitize_counts(counts: &[f64]) -> Vec<f64> {
    counts.iter().copied().map(sanitize_count).collect()
}

/// Congestion ratio for a single phase.
pub fn congestion_ratio(count: f64, capacity: f64) -> f64 {
    ((capacity - count) / capacity).clamp(MIN_CONGESTION, MAX_CONGESTION)
}

/// Derives per-phase congestion ratios from vehicle counts.
///
/// Computed once per optimization run; the resulting vectors are read-only
/// for the rest of the run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CongestionModel {
    /// Road capacity per phase (vehicles).
    capacities: Vec<f64>,
    /// Congestion ratio per phase, in [0.05, 1.0].
    ratios: Vec<f64>,
}

impl CongestionModel {
    /// Builds the model with the same capacity on every phase.
    ///
    /// Counts are sanitized before use.
    pub fn uniform(counts: &[f64], capacity: f64) -> Self {
        Self::with_capacities(counts, &vec![capacity; counts.len()])
    }

    /// Builds the model with an explicit capacity per phase.
    ///
    /// `capacities` is zipped with `counts`; extra entries on either side are ignored.
    pub fn with_capacities(counts: &[f64], capacities: &[f64]) -> Self {
        let (capacities, ratios) = counts
            .iter()
            .zip(capacities)
            .map(|(&count, &capacity)| (capacity, congestion_ratio(sanitize_count(count), capacity)))
            .unzip();
        Self { capacities, ratios }
    }

    /// Congestion ratio per phase.
    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }

    /// Capacity per phase.
    pub fn capacities(&self) -> &[f64] {
        &self.capacities
    }

    /// Number of phases.
    pub fn num_phases(&self) -> usize {
        self.ratios.len()
    }
}
