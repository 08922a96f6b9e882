//! Genetic-algorithm class timetabling.
//!
//! Searches for a low-conflict assignment of subjects to
//! (teacher, time slot, room) triples with an evolutionary heuristic:
//!
//! - **GA engine** ([`ga`]): generic generational loop with shifted
//!   roulette-wheel selection, gated crossover and per-offspring mutation.
//! - **Timetabling** ([`timetable`]): the encoding, conflict-count fitness
//!   and the domain crossover/mutation operators.
//! - **Randomness** ([`random`]): the injected draw source every operator
//!   consumes, so a run is reproducible from its seed or draw sequence.
//!
//! # Architecture
//!
//! The engine knows nothing about timetables; the timetable module plugs
//! in through [`ga::GaProblem`]. The search is single-threaded and runs
//! for a fixed number of generations.

pub mod error;
pub mod ga;
pub mod random;
pub mod timetable;

pub use error::{ChromosomeError, ConfigError};
