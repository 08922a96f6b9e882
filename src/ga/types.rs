//! Core trait definitions for the GA engine.
//!
//! [`GaProblem`] is the contract between the generic evolutionary loop and
//! a domain-specific problem. The engine owns the loop, the probability
//! gates and parent selection; the problem owns the encoding.

use crate::random::RandomSource;

/// Fitness value. Higher is better.
///
/// Scores may be negative: the timetabling problem scores a candidate as
/// the negated number of conflicts, so 0 is the optimum.
pub type Fitness = i64;

/// Defines a GA optimization problem.
///
/// Users implement this trait to plug their encoding into
/// [`GaRunner`](super::GaRunner). It covers:
///
/// 1. **Initialization**: how to create random individuals
/// 2. **Evaluation**: how to compute fitness
/// 3. **Crossover**: how to recombine two parents into one child
/// 4. **Mutation**: how to perturb a child
///
/// Operators return new values; an individual is never modified once it
/// has been placed in a population.
///
/// All randomness must come from the `rng` argument so that a run is
/// reproducible from its draw sequence.
pub trait GaProblem {
    /// The individual (solution) type for this problem.
    type Individual: Clone;

    /// Creates a random individual.
    fn create_individual<R: RandomSource>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual. Higher is better.
    fn evaluate(&self, individual: &Self::Individual) -> Fitness;

    /// Recombines two parents into one child.
    ///
    /// Called only when the crossover gate fires. The default
    /// implementation clones `parent1`.
    fn crossover<R: RandomSource>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Self::Individual {
        parent1.clone()
    }

    /// Returns a perturbed copy of `individual`.
    ///
    /// Called at most once per offspring, only when the mutation gate
    /// fires. The default implementation returns an unchanged clone.
    fn mutate<R: RandomSource>(&self, individual: &Self::Individual, _rng: &mut R) -> Self::Individual {
        individual.clone()
    }

    /// Called after each generation has been scored, with that generation's
    /// best fitness. The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: Fitness) {}
}
