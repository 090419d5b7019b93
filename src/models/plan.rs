//! Optimizer output: green time per named phase.
//!
//! Phases are named `"L1".."Ln"` in gene order. A plan serializes as a
//! JSON object in phase order:
//!
//! ```json
//! {"L1": {"green": 32}, "L2": {"green": 27}, "L3": {"green": 30}, "L4": {"green": 29}}
//! ```

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::Candidate;
use crate::config::OptimizerConfig;

/// Phase identifier for a zero-based gene index (`0 → "L1"`).
pub fn phase_id(index: usize) -> String {
    format!("L{}", index + 1)
}

/// Timing for a single phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseTiming {
    /// Green time (seconds).
    pub green: i64,
}

/// Green-time plan for all phases of one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingPlan {
    phases: Vec<(String, PhaseTiming)>,
}

impl TimingPlan {
    /// Maps each gene to its phase id, in order.
    pub fn from_candidate(candidate: &Candidate) -> Self {
        let phases = candidate
            .genes()
            .iter()
            .enumerate()
            .map(|(i, &g)| (phase_id(i), PhaseTiming { green: i64::from(g) }))
            .collect();
        Self { phases }
    }

    /// Timing for a phase id.
    pub fn get(&self, phase: &str) -> Option<&PhaseTiming> {
        self.phases
            .iter()
            .find(|(id, _)| id == phase)
            .map(|(_, timing)| timing)
    }

    /// Green time for a phase id.
    pub fn green(&self, phase: &str) -> Option<i64> {
        self.get(phase).map(|t| t.green)
    }

    /// Phases in order.
    pub fn phases(&self) -> impl Iterator<Item = (&str, &PhaseTiming)> {
        self.phases.iter().map(|(id, t)| (id.as_str(), t))
    }

    /// Number of phases.
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Returns true if the plan has no phases.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Sum of green times.
    pub fn total_green(&self) -> i64 {
        self.phases.iter().map(|(_, t)| t.green).sum()
    }

    /// Checks the plan against the configuration.
    ///
    /// Verifies phase count, per-phase bounds (`[green_min, green_max]`,
    /// inclusive) and that the total fits in the cycle. Returns a
    /// description of every violation found.
    pub fn check(&self, config: &OptimizerConfig) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        if self.phases.len() != config.num_phases {
            problems.push(format!(
                "expected {} phases, plan has {}",
                config.num_phases,
                self.phases.len()
            ));
        }

        let lower = i64::from(config.green_min);
        let upper = i64::from(config.green_max);
        for (id, timing) in &self.phases {
            if timing.green < lower || timing.green > upper {
                problems.push(format!(
                    "phase {id}: green {} outside [{lower}, {upper}]",
                    timing.green
                ));
            }
        }

        let total = self.total_green();
        if total > i64::from(config.cycle_time) {
            problems.push(format!(
                "total green {total} exceeds cycle time {}",
                config.cycle_time
            ));
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}

impl Serialize for TimingPlan {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.phases.len()))?;
        for (id, timing) in &self.phases {
            map.serialize_entry(id, timing)?;
        }
        map.end()
    }
}
