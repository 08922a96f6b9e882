//! Error types.
//!
//! Configuration is validated once, before the first generation is
//! produced. Nothing inside the evolutionary loop can fail.

use thiserror::Error;

/// A configuration parameter is out of its valid domain.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// `population_size` is zero.
    #[error("population_size must be at least 1")]
    PopulationEmpty,

    /// `generations` is zero.
    #[error("generations must be at least 1")]
    NoGenerations,

    /// A probability is not finite or lies outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    /// A problem dimension (subjects, time slots, rooms, teachers) is zero.
    #[error("{name} must be at least 1")]
    EmptyBound { name: &'static str },

    /// Elites would fill the whole population, leaving no room for offspring.
    #[error("elite_count ({elite_count}) must be smaller than population_size ({population_size})")]
    TooManyElites {
        elite_count: usize,
        population_size: usize,
    },
}

/// A chromosome could not be built from the given assignments.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChromosomeError {
    /// The assignment at `index` belongs to a different subject.
    #[error("assignment at position {index} has subject_id {subject_id}")]
    SubjectMismatch { index: usize, subject_id: usize },
}
