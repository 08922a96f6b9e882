//! Class timetabling.
//!
//! Assigns every subject a (teacher, time slot, room) triple so that as
//! few pairs of subjects as possible clash. Two subjects clash when they
//! share a time slot and also a teacher or a room.
//!
//! # Key Types
//!
//! - [`Assignment`]: one gene, the placement of one subject
//! - [`Chromosome`]: one candidate timetable, one assignment per subject
//! - [`ProblemBounds`]: number of subjects, slots, rooms, teachers
//! - [`TimetableProblem`]: the [`GaProblem`](crate::ga::GaProblem) binding
//!
//! # Example
//!
//! ```
//! use u_timetable::ga::GaConfig;
//! use u_timetable::timetable::{solve, ProblemBounds};
//!
//! let bounds = ProblemBounds::default();
//! let config = GaConfig::default().with_generations(50).with_seed(7);
//! let result = solve(&bounds, &config).unwrap();
//! assert!(result.best_fitness <= 0);
//! assert_eq!(result.best.len(), bounds.num_subjects);
//! ```

mod bounds;
pub mod fitness;
mod model;
pub mod operators;
mod problem;

pub use bounds::ProblemBounds;
pub use fitness::{Clash, Conflict};
pub use model::{Assignment, Chromosome};
pub use problem::TimetableProblem;

use crate::error::ConfigError;
use crate::ga::{GaConfig, GaResult, GaRunner};

/// Validates both configurations, then runs the search.
pub fn solve(bounds: &ProblemBounds, config: &GaConfig) -> Result<GaResult<Chromosome>, ConfigError> {
    let problem = TimetableProblem::new(*bounds)?;
    GaRunner::run(&problem, config)
}
