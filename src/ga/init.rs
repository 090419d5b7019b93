//! Initial population by bounded rejection sampling.

use rand::Rng;
use tracing::warn;

use super::TimingProblem;
use crate::error::OptimizeError;
use crate::models::Population;

/// Draws feasible candidates until `pop_size` are accepted.
///
/// Each draw samples every gene from `[green_min, green_max)`; draws whose
/// total exceeds the cycle budget are rejected. At most `max_attempts`
/// draws are made.
///
/// The caller is expected to have run
/// [`check_feasible`](crate::validation::check_feasible) first; this
/// function only bounds the work.
///
/// # Errors
/// [`OptimizeError::SamplingExhausted`] if the draw budget runs out.
pub fn initialize_population<R: Rng>(
    problem: &TimingProblem,
    pop_size: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<Population, OptimizeError> {
    let mut members = Vec::with_capacity(pop_size);
    let mut attempts = 0;

    while members.len() < pop_size {
        if attempts >= max_attempts {
            warn!(
                accepted = members.len(),
                required = pop_size,
                attempts,
                "initial sampling exhausted"
            );
            return Err(OptimizeError::SamplingExhausted {
                accepted: members.len(),
                required: pop_size,
                attempts,
            });
        }
        attempts += 1;

        let candidate = problem.random_candidate(rng);
        if problem.is_feasible(&candidate) {
            members.push(problem.score(candidate));
        }
    }

    Ok(Population::from_members(members))
}
