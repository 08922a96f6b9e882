//! Genetic Algorithm engine.
//!
//! A generic GA loop built on a trait-based problem abstraction. Users
//! define their problem by implementing [`GaProblem`], which specifies how
//! to create, evaluate, crossover, and mutate individuals.
//!
//! # Core Traits
//!
//! - [`GaProblem`]: Problem definition: initialization, evaluation, operators
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, generations, rates)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final optimization result with per-generation statistics
//! - [`RouletteWheel`]: Shifted fitness-proportionate parent selection
//!
//! # Loop
//!
//! Every generation is wholly replaced by offspring (optionally after
//! copying `elite_count` elites). Each offspring is produced by two
//! roulette spins, single crossover gated by `crossover_rate`, and a
//! single mutation gate per offspring with probability `mutation_rate`.
//! The run always lasts exactly `generations` generations.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::RouletteWheel;
pub use types::{Fitness, GaProblem};
