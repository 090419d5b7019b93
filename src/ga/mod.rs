//! GA-based green-time optimization.
//!
//! Implements the evolutionary search over green-time assignments.
//!
//! # Encoding
//!
//! One integer gene per phase: the phase's green time in seconds. A
//! chromosome is feasible when every gene is in bounds and the genes sum
//! to at most the cycle time. Infeasible offspring are rejected, not repaired.
//!
//! # Submodules
//!
//! - [`operators`]: crossover, clipping, and mutation on raw gene slices
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"

mod evolver;
mod init;
pub mod operators;
mod problem;

pub use evolver::{EvolutionReport, Evolver};
pub use init::initialize_population;
pub use problem::TimingProblem;
