//! Traffic signal timing optimization for the U-Engine ecosystem.
//!
//! Allocates green time across the phases of one intersection so that the
//! estimated total vehicle delay is minimized, given a vehicle count per
//! approach and a shared cycle time.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `CongestionModel`, `Candidate`,
//!   `ScoredCandidate`, `Population`, `TimingPlan`
//! - **`delay`**: Per-phase delay estimate (the GA fitness function)
//! - **`ga`**: Population initialization, operators, and the generational loop
//! - **`optimizer`**: End-to-end run from counts to a timing plan
//! - **`config`** / **`validation`** / **`error`**: Parameters and pre-flight checks
//! - **`heuristic`**: Single-approach fallback
//!
//! # Architecture
//!
//! Vehicle counting (video, detection) and request handling live outside
//! this crate; it consumes a count vector and returns a plan. Every
//! stochastic step takes an explicit `Rng`, so seeded runs are reproducible.
//!
//! # References
//!
//! - Webster (1958), "Traffic Signal Settings"
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"

pub mod config;
pub mod delay;
pub mod error;
pub mod ga;
pub mod heuristic;
pub mod models;
pub mod optimizer;
pub mod validation;

pub use config::OptimizerConfig;
pub use error::OptimizeError;
pub use optimizer::{OptimizationOutcome, SignalOptimizer, optimize_traffic};
