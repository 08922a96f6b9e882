//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.

use super::config::GaConfig;
use super::selection::RouletteWheel;
use super::types::{Fitness, GaProblem};
use crate::error::ConfigError;
use crate::random::{create_rng, time_seed, RandomSource};
use std::cmp::Reverse;
use tracing::{debug, info};

/// Fitness summary of one scored generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index. `0` is the initial population; the final
    /// population has index `config.generations`.
    pub generation: usize,
    /// Highest fitness in the generation.
    pub best: Fitness,
    /// Lowest fitness in the generation.
    pub worst: Fitness,
    /// Mean fitness.
    pub mean: f64,
}

impl GenerationStats {
    fn from_scores(generation: usize, scores: &[Fitness]) -> Self {
        let best = scores.iter().copied().max().unwrap_or_default();
        let worst = scores.iter().copied().min().unwrap_or_default();
        let mean = scores.iter().map(|&f| f as f64).sum::<f64>() / scores.len().max(1) as f64;
        Self {
            generation,
            best,
            worst,
            mean,
        }
    }
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I> {
    /// The best individual of the final population.
    pub best: I,

    /// Fitness of `best`.
    pub best_fitness: Fitness,

    /// Number of generations executed.
    pub generations: usize,

    /// Seed of the randomness source, when the runner created it.
    pub seed: Option<u64>,

    /// Statistics of every scored population: the initial one, each
    /// intermediate one, and the final one (`generations + 1` entries).
    pub history: Vec<GenerationStats>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with a randomness source seeded from `config.seed`, or
    /// from the wall clock when no seed is set.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(time_seed);
        let mut rng = create_rng(seed);
        let mut result = Self::run_with_source(problem, config, &mut rng)?;
        result.seed = Some(seed);
        Ok(result)
    }

    /// Runs the GA, drawing all randomness from `rng`.
    ///
    /// The configuration is validated before the first draw.
    pub fn run_with_source<P: GaProblem, R: RandomSource>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        config.validate()?;
        info!(
            population_size = config.population_size,
            generations = config.generations,
            crossover_rate = config.crossover_rate,
            mutation_rate = config.mutation_rate,
            elite_count = config.elite_count,
            seed = ?config.seed,
            "starting evolution"
        );

        // 1. Initialize population
        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect();

        let mut history = Vec::with_capacity(config.generations + 1);

        // 2. Evolutionary loop
        for generation in 0..config.generations {
            let scores = evaluate_population(problem, &population);
            let stats = record(generation, &scores, &mut history);
            problem.on_generation(generation, stats.best);

            population = next_generation(problem, config, &population, &scores, rng);
        }

        // 3. Pick the winner from the final population
        let scores = evaluate_population(problem, &population);
        record(config.generations, &scores, &mut history);

        let best_idx = find_best(&scores);
        let best_fitness = scores[best_idx];
        info!(best_fitness, generations = config.generations, "evolution finished");

        Ok(GaResult {
            best: population.swap_remove(best_idx),
            best_fitness,
            generations: config.generations,
            seed: None,
            history,
        })
    }
}

/// Breeds a full replacement population.
///
/// Per offspring the draws are: two parent spins, the crossover gate (and
/// whatever the crossover draws), the mutation gate (and whatever the
/// mutation draws).
fn next_generation<P: GaProblem, R: RandomSource>(
    problem: &P,
    config: &GaConfig,
    population: &[P::Individual],
    scores: &[Fitness],
    rng: &mut R,
) -> Vec<P::Individual> {
    let mut next_gen: Vec<P::Individual> = Vec::with_capacity(config.population_size);

    // Elite preservation (disabled when elite_count == 0)
    if config.elite_count > 0 {
        let mut order: Vec<usize> = (0..population.len()).collect();
        order.sort_by_key(|&i| Reverse(scores[i]));
        next_gen.extend(
            order
                .iter()
                .take(config.elite_count)
                .map(|&i| population[i].clone()),
        );
    }

    let wheel = RouletteWheel::new(scores);
    while next_gen.len() < config.population_size {
        // Selection
        let p1 = &population[wheel.spin(rng)];
        let p2 = &population[wheel.spin(rng)];

        // Crossover
        let child = if rng.chance(config.crossover_rate) {
            problem.crossover(p1, p2, rng)
        } else {
            p1.clone()
        };

        // Mutation
        let child = if rng.chance(config.mutation_rate) {
            problem.mutate(&child, rng)
        } else {
            child
        };

        next_gen.push(child);
    }

    next_gen
}

/// Evaluate all individuals in the population.
fn evaluate_population<P: GaProblem>(problem: &P, population: &[P::Individual]) -> Vec<Fitness> {
    population.iter().map(|ind| problem.evaluate(ind)).collect()
}

fn record(generation: usize, scores: &[Fitness], history: &mut Vec<GenerationStats>) -> GenerationStats {
    let stats = GenerationStats::from_scores(generation, scores);
    debug!(
        generation,
        best = stats.best,
        worst = stats.worst,
        mean = stats.mean,
        "generation scored"
    );
    history.push(stats);
    stats
}

/// Index of the highest score; ties go to the first occurrence.
fn find_best(scores: &[Fitness]) -> usize {
    // `Iterator::max_by_key` would return the last maximum.
    let mut best = 0;
    for (i, &f) in scores.iter().enumerate().skip(1) {
        if f > scores[best] {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceSource;
    use std::cell::Cell;

    // ---- OneMax problem: maximize number of true bits ----

    struct OneMaxProblem {
        n: usize,
        calls: Cell<usize>,
    }

    impl OneMaxProblem {
        fn new(n: usize) -> Self {
            Self {
                n,
                calls: Cell::new(0),
            }
        }
    }

    impl GaProblem for OneMaxProblem {
        type Individual = Vec<bool>;

        fn create_individual<R: RandomSource>(&self, rng: &mut R) -> Vec<bool> {
            (0..self.n).map(|_| rng.uniform(0, 1) == 1).collect()
        }

        fn evaluate(&self, ind: &Vec<bool>) -> Fitness {
            ind.iter().filter(|&&b| b).count() as Fitness
        }

        fn crossover<R: RandomSource>(&self, p1: &Vec<bool>, p2: &Vec<bool>, rng: &mut R) -> Vec<bool> {
            let point = rng.index(self.n);
            p1[..point].iter().chain(&p2[point..]).copied().collect()
        }

        fn mutate<R: RandomSource>(&self, ind: &Vec<bool>, rng: &mut R) -> Vec<bool> {
            let mut child = ind.clone();
            let idx = rng.index(self.n);
            child[idx] = !child[idx];
            child
        }

        fn on_generation(&self, _generation: usize, _best_fitness: Fitness) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    fn config() -> GaConfig {
        GaConfig::default()
            .with_population_size(30)
            .with_generations(60)
            .with_seed(42)
    }

    #[test]
    fn test_onemax_improves() {
        let problem = OneMaxProblem::new(20);
        let result = GaRunner::run(&problem, &config().with_mutation_rate(0.3)).unwrap();

        let first = result.history[0];
        let last = result.history[result.history.len() - 1];
        assert!(
            last.mean > first.mean,
            "mean fitness should rise under selection: {} -> {}",
            first.mean,
            last.mean
        );
        assert!(
            result.best_fitness >= 12,
            "expected fitness >= 12 for 20-bit OneMax, got {}",
            result.best_fitness
        );
        assert_eq!(result.best_fitness, problem.evaluate(&result.best));
    }

    #[test]
    fn test_runs_exact_generation_count() {
        let problem = OneMaxProblem::new(8);
        let result = GaRunner::run(&problem, &config()).unwrap();

        assert_eq!(result.generations, 60);
        assert_eq!(result.history.len(), 61);
        assert_eq!(problem.calls.get(), 60);
        for (i, stats) in result.history.iter().enumerate() {
            assert_eq!(stats.generation, i);
            assert!(stats.worst <= stats.best);
            assert!(stats.worst as f64 <= stats.mean && stats.mean <= stats.best as f64);
        }
    }

    #[test]
    fn test_no_early_exit_at_optimum() {
        // A 1-bit problem hits the optimum almost immediately.
        let problem = OneMaxProblem::new(1);
        let result = GaRunner::run(&problem, &config().with_generations(25)).unwrap();
        assert_eq!(result.history.len(), 26);
    }

    #[test]
    fn test_reports_seed() {
        let problem = OneMaxProblem::new(4);
        let result = GaRunner::run(&problem, &config().with_seed(9)).unwrap();
        assert_eq!(result.seed, Some(9));
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let problem = OneMaxProblem::new(12);
        let a = GaRunner::run(&problem, &config()).unwrap();
        let b = GaRunner::run(&problem, &config()).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.history, b.history);
    }

    #[test]
    fn test_invalid_config_draws_nothing() {
        let problem = OneMaxProblem::new(4);
        let mut src = SequenceSource::new(vec![0]);
        let err = GaRunner::run_with_source(&problem, &config().with_population_size(0), &mut src)
            .unwrap_err();
        assert_eq!(err, ConfigError::PopulationEmpty);
        assert_eq!(src.draws(), 0);
    }

    #[test]
    fn test_elitism_is_monotone() {
        let problem = OneMaxProblem::new(16);
        let result = GaRunner::run(&problem, &config().with_elite_count(1)).unwrap();

        for window in result.history.windows(2) {
            assert!(
                window[1].best >= window[0].best,
                "best fitness regressed with elitism: {} -> {}",
                window[0].best,
                window[1].best
            );
        }
    }

    #[test]
    fn test_draw_order_per_offspring() {
        // Population of 1, 1 bit, both gates closed:
        // init (1 draw) + per generation: 2 spins + 2 gates.
        let problem = OneMaxProblem::new(1);
        let config = GaConfig::default()
            .with_population_size(1)
            .with_generations(3)
            .with_crossover_rate(0.0)
            .with_mutation_rate(0.0);
        let mut src = SequenceSource::new(vec![0]);
        GaRunner::run_with_source(&problem, &config, &mut src).unwrap();
        assert_eq!(src.draws(), 1 + 3 * 4);
    }

    #[test]
    fn test_find_best_is_stable() {
        assert_eq!(find_best(&[-3, -1, -1, -2]), 1);
        assert_eq!(find_best(&[0, 0, 0]), 0);
        assert_eq!(find_best(&[-5]), 0);
    }

    #[test]
    fn test_generation_stats() {
        let stats = GenerationStats::from_scores(4, &[0, -2, -4]);
        assert_eq!(stats.generation, 4);
        assert_eq!(stats.best, 0);
        assert_eq!(stats.worst, -4);
        assert!((stats.mean + 2.0).abs() < 1e-12);
    }

    // ---- Default crossover/mutate (clone) ----

    struct ConstantProblem;

    impl GaProblem for ConstantProblem {
        type Individual = usize;

        fn create_individual<R: RandomSource>(&self, rng: &mut R) -> usize {
            rng.uniform(0, 100)
        }

        fn evaluate(&self, ind: &usize) -> Fitness {
            -(*ind as Fitness)
        }
    }

    #[test]
    fn test_default_operators() {
        let result = GaRunner::run(&ConstantProblem, &config().with_generations(10)).unwrap();
        assert_eq!(result.generations, 10);
        assert!(result.best_fitness <= 0);
    }
}
