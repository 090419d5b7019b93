//! Input validation for timing optimization.
//!
//! Checks configuration and input integrity before any sampling starts.
//! Detects:
//! - Out-of-range parameters (sizes, bounds, rates)
//! - Infeasible green-time budgets (`green_min × num_phases > cycle_time`)
//! - Count vectors whose length does not match the phase count

use crate::config::OptimizerConfig;
use crate::error::OptimizeError;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{kind:?}: {message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A parameter is outside its allowed range.
    InvalidParameter,
    /// Green-time bounds are empty or inverted.
    InvalidBounds,
    /// A probability is outside [0, 1].
    InvalidRate,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the optimizer configuration.
///
/// Checks:
/// 1. `pop_size ≥ 1`
/// 2. `num_phases ≥ 1`
/// 3. `green_min < green_max`
/// 4. `cycle_time > 0`
/// 5. `capacity` finite and positive
/// 6. `mutation_rate` and `pinv` in [0, 1]
/// 7. `max_init_attempts ≥ pop_size`
///
/// Feasibility of the green-time budget is checked separately by
/// [`check_feasible`].
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &OptimizerConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.pop_size == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidParameter,
            "pop_size must be at least 1",
        ));
    }

    if config.num_phases == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidParameter,
            "num_phases must be at least 1",
        ));
    }

    if config.green_min >= config.green_max {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBounds,
            format!(
                "green_min ({}) must be smaller than green_max ({})",
                config.green_min, config.green_max
            ),
        ));
    }

    if config.cycle_time == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidParameter,
            "cycle_time must be positive",
        ));
    }

    if !config.capacity.is_finite() || config.capacity <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidParameter,
            format!("capacity must be finite and positive, got {}", config.capacity),
        ));
    }

    for (name, rate) in [("mutation_rate", config.mutation_rate), ("pinv", config.pinv)] {
        if !(0.0..=1.0).contains(&rate) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidRate,
                format!("{name} must be in [0, 1], got {rate}"),
            ));
        }
    }

    if config.max_init_attempts < config.pop_size {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidParameter,
            format!(
                "max_init_attempts ({}) must be at least pop_size ({})",
                config.max_init_attempts, config.pop_size
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks that at least one candidate can satisfy the cycle budget.
///
/// The cheapest candidate puts `green_min` on every phase; if that already
/// exceeds `cycle_time`, rejection sampling could never terminate.
pub fn check_feasible(config: &OptimizerConfig) -> Result<(), OptimizeError> {
    let minimum = u64::from(config.green_min).saturating_mul(config.num_phases as u64);
    if minimum > u64::from(config.cycle_time) {
        return Err(OptimizeError::infeasible(
            config.green_min,
            config.num_phases,
            config.cycle_time,
        ));
    }
    Ok(())
}

/// Checks that one count was supplied per phase.
pub fn check_counts(counts: &[f64], num_phases: usize) -> Result<(), OptimizeError> {
    if counts.len() != num_phases {
        return Err(OptimizeError::malformed_input(num_phases, counts.len()));
    }
    Ok(())
}

/// Runs every pre-flight check in order: parameters, feasibility, input.
pub fn validate_input(config: &OptimizerConfig, counts: &[f64]) -> Result<(), OptimizeError> {
    validate_config(config)?;
    check_feasible(config)?;
    check_counts(counts, config.num_phases)
}
