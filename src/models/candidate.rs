//! Candidate timing plans and the GA population.
//!
//! A [`Candidate`] is one green-time assignment (seconds per phase).
//! A [`ScoredCandidate`] pairs it with its total delay, and a
//! [`Population`] keeps a fixed number of them sorted by score.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Green-time assignment: one gene (seconds) per phase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    genes: Vec<u32>,
}

impl Candidate {
    /// Creates a candidate from per-phase green times.
    pub fn new(genes: Vec<u32>) -> Self {
        Self { genes }
    }

    /// Green time per phase (seconds).
    pub fn genes(&self) -> &[u32] {
        &self.genes
    }

    /// Number of phases.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Returns true if the candidate has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Sum of all green times.
    pub fn total_green(&self) -> u64 {
        self.genes.iter().map(|&g| u64::from(g)).sum()
    }

    /// Whether the total green time fits in the cycle.
    pub fn fits_cycle(&self, cycle_time: u32) -> bool {
        self.total_green() <= u64::from(cycle_time)
    }

    /// Whether every gene lies in `[lower, upper]` (inclusive).
    pub fn within_bounds(&self, lower: u32, upper: u32) -> bool {
        self.genes.iter().all(|g| (lower..=upper).contains(g))
    }
}

/// A candidate with its total delay score. Lower score = better.
///
/// Immutable once built; ordering is by score only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    candidate: Candidate,
    score: f64,
}

impl ScoredCandidate {
    /// Pairs a candidate with its score.
    pub fn new(candidate: Candidate, score: f64) -> Self {
        Self { candidate, score }
    }

    /// The underlying candidate.
    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    /// Green time per phase.
    pub fn genes(&self) -> &[u32] {
        self.candidate.genes()
    }

    /// Total delay score.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Total order on scores (NaN sorts last).
    pub fn cmp_score(&self, other: &Self) -> Ordering {
        self.score.total_cmp(&other.score)
    }

    /// Consumes self, returning the candidate.
    pub fn into_candidate(self) -> Candidate {
        self.candidate
    }
}

/// Fixed-size collection of scored candidates, sorted ascending by score.
///
/// Ties keep insertion order (stable sort), so earlier members win.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Population {
    members: Vec<ScoredCandidate>,
}

impl Population {
    /// Builds a population and sorts it by score.
    pub fn from_members(mut members: Vec<ScoredCandidate>) -> Self {
        members.sort_by(ScoredCandidate::cmp_score);
        Self { members }
    }

    /// Returns a new population made of `self` followed by `offspring`,
    /// sorted by score and truncated to `size`.
    pub fn merge_truncate(&self, offspring: Vec<ScoredCandidate>, size: usize) -> Self {
        let mut members = Vec::with_capacity(self.members.len() + offspring.len());
        members.extend(self.members.iter().cloned());
        members.extend(offspring);
        members.sort_by(ScoredCandidate::cmp_score);
        members.truncate(size);
        Self { members }
    }

    /// Members, best first.
    pub fn members(&self) -> &[ScoredCandidate] {
        &self.members
    }

    /// Best (lowest-score) member.
    pub fn best(&self) -> Option<&ScoredCandidate> {
        self.members.first()
    }

    /// Member at `index`.
    pub fn get(&self, index: usize) -> Option<&ScoredCandidate> {
        self.members.get(index)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the population is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether members are in ascending score order.
    pub fn is_sorted(&self) -> bool {
        self.members
            .windows(2)
            .all(|w| w[0].cmp_score(&w[1]) != Ordering::Greater)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(genes: &[u32], score: f64) -> ScoredCandidate {
        ScoredCandidate::new(Candidate::new(genes.to_vec()), score)
    }

    #[test]
    fn test_candidate_totals() {
        let c = Candidate::new(vec![30, 30, 30, 30]);
        assert_eq!(c.len(), 4);
        assert_eq!(c.total_green(), 120);
        assert!(c.fits_cycle(120));
        assert!(!c.fits_cycle(119));
        assert!(c.within_bounds(10, 45));
        assert!(!c.within_bounds(31, 45));
    }

    #[test]
    fn test_population_sorted_on_build() {
        let pop = Population::from_members(vec![
            scored(&[1], 3.0),
            scored(&[2], 1.0),
            scored(&[3], 2.0),
        ]);
        assert!(pop.is_sorted());
        assert_eq!(pop.best().unwrap().genes(), &[2]);
    }

    #[test]
    fn test_merge_truncate_keeps_best() {
        let pop = Population::from_members(vec![scored(&[1], 5.0), scored(&[2], 10.0)]);
        let next = pop.merge_truncate(vec![scored(&[3], 7.0), scored(&[4], 1.0)], 2);
        assert_eq!(next.len(), 2);
        assert_eq!(next.get(0).unwrap().genes(), &[4]);
        assert_eq!(next.get(1).unwrap().genes(), &[1]);
        // Original untouched
        assert_eq!(pop.best().unwrap().genes(), &[1]);
    }

    #[test]
    fn test_ties_prefer_earlier_members() {
        let pop = Population::from_members(vec![scored(&[1], 4.0), scored(&[2], 4.0)]);
        let next = pop.merge_truncate(vec![scored(&[3], 4.0)], 2);
        assert_eq!(next.get(0).unwrap().genes(), &[1]);
        assert_eq!(next.get(1).unwrap().genes(), &[2]);
    }

    #[test]
    fn test_nan_sorts_last() {
        let pop = Population::from_members(vec![scored(&[1], f64::NAN), scored(&[2], 1.0)]);
        assert_eq!(pop.best().unwrap().genes(), &[2]);
    }
}
