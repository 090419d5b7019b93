//! Optimizer configuration.
//!
//! [`OptimizerConfig`] holds every parameter that controls a run: GA sizes,
//! green-time bounds, the cycle budget, and road capacity.
//!
//! # Defaults
//!
//! ```
//! use u_signal::config::OptimizerConfig;
//!
//! let config = OptimizerConfig::default();
//! assert_eq!(config.pop_size, 120);
//! assert_eq!(config.num_phases, 4);
//! assert_eq!(config.cycle_time, 120);
//! ```
//!
//! # Builder Pattern
//!
//! ```
//! use u_signal::config::OptimizerConfig;
//!
//! let config = OptimizerConfig::default()
//!     .with_pop_size(60)
//!     .with_max_iter(30)
//!     .with_green_bounds(8, 50)
//!     .with_seed(7);
//! assert_eq!(config.seed, Some(7));
//! ```

use serde::{Deserialize, Serialize};

use crate::validation::{ValidationResult, validate_config};

/// Configuration for a signal timing optimization run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Number of candidates kept in every generation.
    pub pop_size: usize,

    /// Number of signal phases (genes per candidate).
    pub num_phases: usize,

    /// Number of generations. The only termination condition.
    pub max_iter: usize,

    /// Minimum green time per phase (seconds, inclusive).
    pub green_min: u32,

    /// Maximum green time per phase (seconds).
    ///
    /// Exclusive when sampling new genes, inclusive when clipping
    /// crossover offspring.
    pub green_max: u32,

    /// Cycle length (seconds). Green times of a candidate must sum to at most this.
    pub cycle_time: u32,

    /// Road capacity per phase (vehicles).
    pub capacity: f64,

    /// Per-gene mutation probability. Only used when `mutation_enabled` is set.
    pub mutation_rate: f64,

    /// Enables the gene mutation step after crossover.
    ///
    /// Off by default: the reference behaviour applies crossover only.
    pub mutation_enabled: bool,

    /// Inversion probability. Accepted for compatibility; not used by any operator.
    pub pinv: f64,

    /// Selection pressure. Accepted for compatibility; not used by any operator.
    pub beta: f64,

    /// Upper bound on candidate draws during population initialization.
    pub max_init_attempts: usize,

    /// Random seed for reproducibility. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            pop_size: 120,
            num_phases: 4,
            max_iter: 15,
            green_min: 10,
            green_max: 45,
            cycle_time: 120,
            capacity: 20.0,
            mutation_rate: 0.02,
            mutation_enabled: false,
            pinv: 0.2,
            beta: 6.0,
            max_init_attempts: 120 * 10_000,
            seed: None,
        }
    }
}

impl OptimizerConfig {
    /// Sets the population size.
    ///
    /// Also rescales `max_init_attempts` to `n * 10_000`.
    pub fn with_pop_size(mut self, n: usize) -> Self {
        self.pop_size = n;
        self.max_init_attempts = n.saturating_mul(10_000);
        self
    }

    /// Sets the number of phases.
    pub fn with_num_phases(mut self, n: usize) -> Self {
        self.num_phases = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_iter(mut self, n: usize) -> Self {
        self.max_iter = n;
        self
    }

    /// Sets the green-time bounds.
    pub fn with_green_bounds(mut self, min: u32, max: u32) -> Self {
        self.green_min = min;
        self.green_max = max;
        self
    }

    /// Sets the cycle time (seconds).
    pub fn with_cycle_time(mut self, seconds: u32) -> Self {
        self.cycle_time = seconds;
        self
    }

    /// Sets the per-phase road capacity.
    pub fn with_capacity(mut self, capacity: f64) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Enables or disables gene mutation.
    pub fn with_mutation(mut self, enabled: bool) -> Self {
        self.mutation_enabled = enabled;
        self
    }

    /// Sets the inversion probability.
    pub fn with_pinv(mut self, pinv: f64) -> Self {
        self.pinv = pinv.clamp(0.0, 1.0);
        self
    }

    /// Sets the selection pressure.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the initialization draw budget.
    pub fn with_max_init_attempts(mut self, attempts: usize) -> Self {
        self.max_init_attempts = attempts;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cycle time as `f64`, for the delay model.
    pub fn cycle_time_secs(&self) -> f64 {
        f64::from(self.cycle_time)
    }

    /// Validates all parameters, collecting every problem found.
    pub fn validate(&self) -> ValidationResult {
        validate_config(self)
    }
}
