//! Parent selection.
//!
//! Fitness-proportionate (roulette wheel) selection with a non-negative
//! weight shift, so that negative fitness values can be weighted.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Fitness;
use crate::random::RandomSource;

/// Roulette wheel over one generation's scores.
///
/// Each individual gets weight `fitness - min_fitness + 1`, so every
/// individual has weight at least 1 and the best individual the largest
/// weight. A spin draws `r` uniformly from `[0, total_weight]` (inclusive)
/// and returns the first index whose running total is `>= r`.
///
/// Built once per generation, spun twice per offspring.
///
/// # Examples
///
/// ```
/// use u_timetable::ga::RouletteWheel;
///
/// let wheel = RouletteWheel::new(&[0, -1, -5]);
/// assert_eq!(wheel.weights(), vec![6, 5, 1]);
/// assert_eq!(wheel.total_weight(), 12);
/// ```
#[derive(Debug, Clone)]
pub struct RouletteWheel {
    cumulative: Vec<u64>,
}

impl RouletteWheel {
    /// Builds the wheel from fitness scores.
    ///
    /// # Panics
    /// Panics if `scores` is empty.
    pub fn new(scores: &[Fitness]) -> Self {
        assert!(!scores.is_empty(), "cannot select from empty population");

        let min = scores.iter().copied().min().unwrap_or_default();
        let mut running = 0u64;
        let cumulative = scores
            .iter()
            .map(|&f| {
                running += f.abs_diff(min) + 1;
                running
            })
            .collect();

        Self { cumulative }
    }

    /// Sum of all weights.
    pub fn total_weight(&self) -> u64 {
        self.cumulative.last().copied().unwrap_or_default()
    }

    /// Per-individual weights, in population order.
    pub fn weights(&self) -> Vec<u64> {
        let mut prev = 0;
        self.cumulative
            .iter()
            .map(|&c| {
                let w = c - prev;
                prev = c;
                w
            })
            .collect()
    }

    /// Selects a parent index.
    pub fn spin<R: RandomSource>(&self, rng: &mut R) -> usize {
        let r = rng.uniform(0, self.total_weight() as usize) as u64;
        self.pick(r)
    }

    /// Returns the first index whose running total reaches `r`, or the last
    /// index if none does.
    fn pick(&self, r: u64) -> usize {
        self.cumulative
            .iter()
            .position(|&c| c >= r)
            .unwrap_or(self.cumulative.len() - 1)
    }
}
