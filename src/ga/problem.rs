//! Signal timing GA problem definition.
//!
//! Bundles everything that stays fixed during a run (green-time bounds,
//! cycle budget, congestion vector) and exposes the operations the GA
//! needs: sampling, feasibility, scoring, and recombination.

use rand::Rng;

use super::operators::{clip_genes, mutate_genes, single_point_crossover};
use crate::config::OptimizerConfig;
use crate::delay::total_delay;
use crate::models::{Candidate, CongestionModel, ScoredCandidate};

/// GA problem for green-time allocation.
///
/// Built once per run. The congestion model is read-only afterwards.
///
/// # Example
/// ```
/// use u_signal::config::OptimizerConfig;
/// use u_signal::ga::TimingProblem;
/// use u_signal::models::{Candidate, CongestionModel};
///
/// let config = OptimizerConfig::default();
/// let congestion = CongestionModel::uniform(&[5.0, 5.0, 5.0, 5.0], config.capacity);
/// let problem = TimingProblem::new(&config, congestion);
///
/// let scored = problem.score(Candidate::new(vec![30, 30, 30, 30]));
/// assert!(scored.score() > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct TimingProblem {
    /// Minimum green time (inclusive).
    pub green_min: u32,
    /// Maximum green time (exclusive when sampling, inclusive when clipping).
    pub green_max: u32,
    /// Cycle budget (seconds).
    pub cycle_time: u32,
    /// Per-gene mutation probability; `None` disables mutation.
    pub mutation_rate: Option<f64>,
    congestion: CongestionModel,
}

impl TimingProblem {
    /// Creates the problem from the run configuration and congestion model.
    pub fn new(config: &OptimizerConfig, congestion: CongestionModel) -> Self {
        let mutation_rate = config
            .mutation_enabled
            .then(|| config.mutation_rate.clamp(0.0, 1.0));
        Self {
            green_min: config.green_min,
            green_max: config.green_max,
            cycle_time: config.cycle_time,
            mutation_rate,
            congestion,
        }
    }

    /// Number of genes per candidate.
    pub fn num_phases(&self) -> usize {
        self.congestion.num_phases()
    }

    /// The congestion model for this run.
    pub fn congestion(&self) -> &CongestionModel {
        &self.congestion
    }

    /// Draws each gene uniformly from `[green_min, green_max)`.
    ///
    /// The result may exceed the cycle budget; see [`is_feasible`](Self::is_feasible).
    pub fn random_candidate<R: Rng>(&self, rng: &mut R) -> Candidate {
        let genes = (0..self.num_phases())
            .map(|_| rng.random_range(self.green_min..self.green_max))
            .collect();
        Candidate::new(genes)
    }

    /// Whether the candidate's total green time fits in the cycle.
    pub fn is_feasible(&self, candidate: &Candidate) -> bool {
        candidate.fits_cycle(self.cycle_time)
    }

    /// Total delay of a candidate.
    pub fn evaluate(&self, candidate: &Candidate) -> f64 {
        total_delay(
            f64::from(self.cycle_time),
            candidate.genes(),
            self.congestion.ratios(),
            self.congestion.capacities(),
        )
    }

    /// Scores a candidate.
    pub fn score(&self, candidate: Candidate) -> ScoredCandidate {
        let score = self.evaluate(&candidate);
        ScoredCandidate::new(candidate, score)
    }

    /// Produces one child from two parents.
    ///
    /// Single-point crossover, clip into `[green_min, green_max]`, then
    /// optional mutation. Feasibility is not checked here.
    pub fn breed<R: Rng>(&self, p1: &Candidate, p2: &Candidate, rng: &mut R) -> Candidate {
        let mut genes = single_point_crossover(p1.genes(), p2.genes(), rng);
        clip_genes(&mut genes, self.green_min, self.green_max);
        if let Some(rate) = self.mutation_rate {
            mutate_genes(&mut genes, rate, self.green_min, self.green_max, rng);
        }
        Candidate::new(genes)
    }
}
