//! Signal timing domain models.
//!
//! Provides the data types shared by the optimizer: traffic demand per
//! phase, candidate green-time assignments, and the final timing plan.
//!
//! # Domain Mappings
//!
//! | u-signal | Traffic engineering | GA terminology |
//! |----------|--------------------|----------------|
//! | Phase | Signal approach | Gene position |
//! | Candidate | Timing plan proposal | Chromosome |
//! | ScoredCandidate | Evaluated proposal | Individual |
//! | Population | Proposal pool | Population |

mod candidate;
mod phase;
mod plan;

pub use candidate::{Candidate, Population, ScoredCandidate};
pub use phase::{
    CongestionModel, FALLBACK_COUNT, MAX_CONGESTION, MIN_CONGESTION, congestion_ratio,
    sanitize_count, sanitize_counts,
};
pub use plan::{PhaseTiming, TimingPlan, phase_id};
