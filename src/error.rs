//! Optimization errors.

use crate::validation::ValidationError;

/// Errors that can occur during a timing optimization run.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptimizeError {
    #[error("InvalidConfiguration: {}", join_messages(.0))]
    InvalidConfiguration(Vec<ValidationError>),
    #[error(
        "InfeasibleConfiguration: green_min={green_min} x num_phases={num_phases} exceeds cycle_time={cycle_time}"
    )]
    InfeasibleConfiguration {
        green_min: u32,
        num_phases: usize,
        cycle_time: u32,
    },
    #[error("MalformedInput: expected {expected} phase counts, got {actual}")]
    MalformedInput { expected: usize, actual: usize },
    #[error(
        "SamplingExhausted: accepted {accepted} of {required} candidates after {attempts} draws"
    )]
    SamplingExhausted {
        accepted: usize,
        required: usize,
        attempts: usize,
    },
}

impl OptimizeError {
    pub(crate) fn infeasible(green_min: u32, num_phases: usize, cycle_time: u32) -> Self {
        Self::InfeasibleConfiguration {
            green_min,
            num_phases,
            cycle_time,
        }
    }

    pub(crate) fn malformed_input(expected: usize, actual: usize) -> Self {
        Self::MalformedInput { expected, actual }
    }
}

impl From<Vec<ValidationError>> for OptimizeError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidConfiguration(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_display_infeasible() {
        let err = OptimizeError::infeasible(50, 4, 120);
        let msg = err.to_string();
        assert!(msg.starts_with("InfeasibleConfiguration"));
        assert!(msg.contains("green_min=50"));
    }

    #[test]
    fn test_display_joins_validation_messages() {
        let err = OptimizeError::from(vec![
            ValidationError::new(ValidationErrorKind::InvalidParameter, "a"),
            ValidationError::new(ValidationErrorKind::InvalidParameter, "b"),
        ]);
        assert_eq!(err.to_string(), "InvalidConfiguration: a; b");
    }
}
