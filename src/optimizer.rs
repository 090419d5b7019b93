//! Signal timing optimizer.
//!
//! Runs the full pipeline for one intersection:
//!
//! ```text
//! counts → sanitize → CongestionModel → initial population → Evolver → TimingPlan
//! ```
//!
//! # Example
//! ```
//! use u_signal::config::OptimizerConfig;
//! use u_signal::optimizer::SignalOptimizer;
//!
//! let optimizer = SignalOptimizer::new(OptimizerConfig::default().with_seed(42));
//! let plan = optimizer.optimize(&[5.0, 12.0, 3.0, 8.0]).unwrap();
//! assert_eq!(plan.len(), 4);
//! assert!(plan.total_green() <= 120);
//! ```

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{info, instrument, warn};

use crate::config::OptimizerConfig;
use crate::error::OptimizeError;
use crate::ga::{EvolutionReport, Evolver, TimingProblem, initialize_population};
use crate::models::{CongestionModel, TimingPlan, sanitize_counts};
use crate::validation::validate_input;

/// Optimization result with search diagnostics.
#[derive(Debug, Clone)]
pub struct OptimizationOutcome {
    /// Green time per phase.
    pub plan: TimingPlan,
    /// Total delay of the chosen plan.
    pub score: f64,
    /// Congestion ratio per phase used for the run.
    pub congestion: Vec<f64>,
    /// Evolution history and final population.
    pub report: EvolutionReport,
}

/// Green-time optimizer for a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct SignalOptimizer {
    config: OptimizerConfig,
}

impl SignalOptimizer {
    /// Creates an optimizer.
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Optimizes green times for the given per-phase vehicle counts.
    ///
    /// Seeds from `config.seed` when set, otherwise from the OS.
    pub fn optimize(&self, counts: &[f64]) -> Result<TimingPlan, OptimizeError> {
        let mut rng = self.make_rng();
        self.optimize_with_rng(counts, &mut rng)
    }

    /// Same as [`optimize`](Self::optimize) with a caller-supplied RNG.
    pub fn optimize_with_rng<R: Rng>(
        &self,
        counts: &[f64],
        rng: &mut R,
    ) -> Result<TimingPlan, OptimizeError> {
        self.run(counts, rng).map(|outcome| outcome.plan)
    }

    /// Runs the optimizer and returns the plan with diagnostics.
    #[instrument(level = "info", skip(self, counts, rng), fields(phases = counts.len()))]
    pub fn run<R: Rng>(
        &self,
        counts: &[f64],
        rng: &mut R,
    ) -> Result<OptimizationOutcome, OptimizeError> {
        let config = &self.config;
        validate_input(config, counts)?;

        let sanitized = sanitize_counts(counts);
        let replaced = counts.iter().zip(&sanitized).filter(|(a, b)| a != b).count();
        if replaced > 0 {
            warn!(replaced, "non-positive vehicle counts replaced");
        }

        let congestion = CongestionModel::uniform(&sanitized, config.capacity);
        let ratios = congestion.ratios().to_vec();
        let problem = TimingProblem::new(config, congestion);

        let initial = initialize_population(&problem, config.pop_size, config.max_init_attempts, rng)?;
        info!(
            pop_size = config.pop_size,
            max_iter = config.max_iter,
            initial_best = ?initial.best().map(|b| b.score()),
            "initial population ready"
        );

        let report = Evolver::new(&problem, config.pop_size, config.max_iter)
            .run(initial, rng)
            // empty only if pop_size == 0, which validation rejects
            .ok_or(OptimizeError::SamplingExhausted {
                accepted: 0,
                required: config.pop_size,
                attempts: 0,
            })?;

        let plan = TimingPlan::from_candidate(report.best.candidate());
        let score = report.best.score();
        info!(score, generations = report.generations, "optimization complete");

        Ok(OptimizationOutcome {
            plan,
            score,
            congestion: ratios,
            report,
        })
    }

    fn make_rng(&self) -> SmallRng {
        match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        }
    }
}

/// Optimizes with the reference configuration (4 phases, 120 s cycle).
///
/// Unseeded; results vary between calls.
pub fn optimize_traffic(counts: &[f64]) -> Result<TimingPlan, OptimizeError> {
    SignalOptimizer::default().optimize(counts)
}
