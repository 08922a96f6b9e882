//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::ConfigError;

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, generation count, operator rates and
/// seeding. Termination is purely count-based: the loop always runs
/// exactly `generations` times.
///
/// # Defaults
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 500);
/// assert_eq!(config.elite_count, 0);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_timetable::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_crossover_rate(0.9)
///     .with_mutation_rate(0.2)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in the population. Constant across generations.
    pub population_size: usize,

    /// Number of generations to run.
    pub generations: usize,

    /// Probability of recombining the two selected parents (0.0–1.0).
    ///
    /// When crossover is not applied, the child is a copy of the first parent.
    pub crossover_rate: f64,

    /// Probability of mutating an offspring (0.0–1.0).
    ///
    /// The gate is evaluated once per offspring, not once per gene.
    pub mutation_rate: f64,

    /// Number of best individuals copied unchanged into the next generation.
    ///
    /// 0 (the default) disables elitism: the whole population is replaced
    /// by offspring and the best fitness may regress between generations.
    pub elite_count: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` derives a seed from the wall clock.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            elite_count: 0,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the number of elites (0 to disable).
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::PopulationEmpty);
        }
        if self.generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        if self.elite_count >= self.population_size {
            return Err(ConfigError::TooManyElites {
                elite_count: self.elite_count,
                population_size: self.population_size,
            });
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange { name, value })
    }
}
