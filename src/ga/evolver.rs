//! Generational loop with elitist truncation selection.
//!
//! # Algorithm
//!
//! Per generation:
//! 1. Draw `pop_size` parent pairs uniformly, with replacement.
//! 2. Breed one child per pair (single-point crossover + clip).
//! 3. Drop children that exceed the cycle budget.
//! 4. Merge parents and children, stable-sort by score, keep the best `pop_size`.
//!
//! Runs for exactly `max_iter` generations.

use rand::Rng;
use tracing::debug;

use super::TimingProblem;
use crate::models::{Population, ScoredCandidate};

/// Outcome of an evolution run.
#[derive(Debug, Clone)]
pub struct EvolutionReport {
    /// Final population, best first.
    pub population: Population,
    /// Best candidate after the last generation.
    pub best: ScoredCandidate,
    /// Best score per generation; index 0 is the initial population.
    pub best_history: Vec<f64>,
    /// Accepted (feasible) offspring per generation.
    pub accepted_history: Vec<usize>,
    /// Number of generations run.
    pub generations: usize,
}

/// Evolves a population for a fixed number of generations.
#[derive(Debug, Clone, Copy)]
pub struct Evolver<'a> {
    problem: &'a TimingProblem,
    pop_size: usize,
    max_iter: usize,
}

impl<'a> Evolver<'a> {
    /// Creates an evolver.
    pub fn new(problem: &'a TimingProblem, pop_size: usize, max_iter: usize) -> Self {
        Self {
            problem,
            pop_size,
            max_iter,
        }
    }

    /// Produces the feasible, scored offspring of one generation.
    pub fn offspring<R: Rng>(&self, population: &Population, rng: &mut R) -> Vec<ScoredCandidate> {
        let members = population.members();
        if members.is_empty() {
            return Vec::new();
        }

        let mut children = Vec::with_capacity(self.pop_size);
        for _ in 0..self.pop_size {
            let p1 = members[rng.random_range(0..members.len())].candidate();
            let p2 = members[rng.random_range(0..members.len())].candidate();
            let child = self.problem.breed(p1, p2, rng);
            if self.problem.is_feasible(&child) {
                children.push(self.problem.score(child));
            }
        }
        children
    }

    /// Runs one generation and returns the next population.
    ///
    /// Returns the new population and the number of accepted offspring.
    pub fn step<R: Rng>(&self, population: &Population, rng: &mut R) -> (Population, usize) {
        let children = self.offspring(population, rng);
        let accepted = children.len();
        (population.merge_truncate(children, self.pop_size), accepted)
    }

    /// Runs `max_iter` generations from `initial`.
    ///
    /// Returns `None` if `initial` is empty.
    pub fn run<R: Rng>(&self, initial: Population, rng: &mut R) -> Option<EvolutionReport> {
        let mut population = initial;
        let mut best_history = Vec::with_capacity(self.max_iter + 1);
        let mut accepted_history = Vec::with_capacity(self.max_iter);
        best_history.push(population.best()?.score());

        for generation in 1..=self.max_iter {
            let (next, accepted) = self.step(&population, rng);
            population = next;
            let best = population.best()?.score();
            debug!(generation, best, accepted, "generation complete");
            best_history.push(best);
            accepted_history.push(accepted);
        }

        let best = population.best()?.clone();
        Some(EvolutionReport {
            population,
            best,
            best_history,
            accepted_history,
            generations: self.max_iter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OptimizerConfig;
    use crate::ga::initialize_population;
    use crate::models::{Candidate, CongestionModel};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn make_problem(config: &OptimizerConfig) -> TimingProblem {
        let congestion = CongestionModel::uniform(&[5.0, 15.0, 2.0, 9.0], config.capacity);
        TimingProblem::new(config, congestion)
    }

    fn initial(problem: &TimingProblem, rng: &mut SmallRng) -> Population {
        initialize_population(problem, 120, 1_000_000, rng).unwrap()
    }

    #[test]
    fn test_population_size_constant() {
        let config = OptimizerConfig::default();
        let problem = make_problem(&config);
        let mut rng = SmallRng::seed_from_u64(42);
        let evolver = Evolver::new(&problem, 120, 15);

        let mut pop = initial(&problem, &mut rng);
        for _ in 0..15 {
            let (next, _) = evolver.step(&pop, &mut rng);
            assert_eq!(next.len(), 120);
            assert!(next.is_sorted());
            pop = next;
        }
    }

    #[test]
    fn test_best_is_monotone() {
        let config = OptimizerConfig::default();
        let problem = make_problem(&config);
        let mut rng = SmallRng::seed_from_u64(42);
        let pop = initial(&problem, &mut rng);

        let report = Evolver::new(&problem, 120, 15).run(pop, &mut rng).unwrap();
        assert_eq!(report.generations, 15);
        assert_eq!(report.best_history.len(), 16);
        assert_eq!(report.accepted_history.len(), 15);
        for w in report.best_history.windows(2) {
            assert!(w[1] <= w[0]);
        }
        assert_eq!(report.best.score(), *report.best_history.last().unwrap());
    }

    #[test]
    fn test_offspring_feasible_and_clipped() {
        let config = OptimizerConfig::default();
        let problem = make_problem(&config);
        let mut rng = SmallRng::seed_from_u64(3);
        let pop = initial(&problem, &mut rng);

        let children = Evolver::new(&problem, 120, 1).offspring(&pop, &mut rng);
        assert!(children.len() <= 120);
        for c in &children {
            assert!(c.candidate().fits_cycle(120));
            assert!(c.candidate().within_bounds(10, 45));
        }
    }

    #[test]
    fn test_over_budget_offspring_dropped() {
        let config = OptimizerConfig::default().with_cycle_time(100);
        let problem = make_problem(&config);
        let mut rng = SmallRng::seed_from_u64(42);
        let pop = Population::from_members(vec![
            problem.score(Candidate::new(vec![10, 10, 40, 40])),
            problem.score(Candidate::new(vec![40, 40, 10, 10])),
        ]);

        let evolver = Evolver::new(&problem, 2, 1);
        let children = evolver.offspring(&pop, &mut rng);
        // Children sum to 40, 70, 100, 130 or 160 depending on order and cut
        assert!(children.iter().all(|c| c.candidate().total_green() <= 100));

        let (next, _) = evolver.step(&pop, &mut rng);
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn test_zero_generations() {
        let config = OptimizerConfig::default();
        let problem = make_problem(&config);
        let mut rng = SmallRng::seed_from_u64(42);
        let pop = initial(&problem, &mut rng);
        let first = pop.best().unwrap().clone();

        let report = Evolver::new(&problem, 120, 0).run(pop, &mut rng).unwrap();
        assert_eq!(report.best, first);
        assert_eq!(report.best_history.len(), 1);
    }

    #[test]
    fn test_empty_population() {
        let config = OptimizerConfig::default();
        let problem = make_problem(&config);
        let mut rng = SmallRng::seed_from_u64(42);
        assert!(Evolver::new(&problem, 10, 5).run(Population::default(), &mut rng).is_none());
    }
}
