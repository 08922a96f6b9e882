//! Timetable construction and genetic operators.
//!
//! # Construction
//!
//! - [`random_assignment`]: uniform teacher, slot and room for one subject
//! - [`random_chromosome`]: one random assignment per subject
//!
//! # Crossover
//!
//! - [`single_point_crossover`]: prefix from one parent, suffix from the other
//!
//! # Mutation
//!
//! - [`reschedule`]: move one subject to another slot and room, keeping
//!   its teacher

use super::bounds::ProblemBounds;
use super::model::{Assignment, Chromosome};
use crate::random::RandomSource;

// ============================================================================
// Construction
// ============================================================================

/// Creates a random assignment for `subject_id`.
///
/// Draws teacher, slot and room in that order, each uniform over
/// `[0, bound - 1]`.
pub fn random_assignment<R: RandomSource>(
    bounds: &ProblemBounds,
    subject_id: usize,
    rng: &mut R,
) -> Assignment {
    let teacher_id = rng.index(bounds.num_teachers);
    let time_slot = rng.index(bounds.num_timeslots);
    let room_id = rng.index(bounds.num_rooms);
    Assignment::new(subject_id, teacher_id, time_slot, room_id)
}

/// Creates a random chromosome with one assignment per subject.
pub fn random_chromosome<R: RandomSource>(bounds: &ProblemBounds, rng: &mut R) -> Chromosome {
    let genes = (0..bounds.num_subjects)
        .map(|subject_id| random_assignment(bounds, subject_id, rng))
        .collect();
    Chromosome::from_ordered(genes)
}

// ============================================================================
// Crossover
// ============================================================================

/// Single-point crossover.
///
/// The child takes positions `[0, point)` from `parent_a` and
/// `[point, n)` from `parent_b`. `point == 0` yields a copy of
/// `parent_b`; `point == n` a copy of `parent_a`.
///
/// # Panics
/// Panics if the parents have different lengths or `point > n`.
pub fn single_point_crossover(parent_a: &Chromosome, parent_b: &Chromosome, point: usize) -> Chromosome {
    let n = parent_a.len();
    assert_eq!(n, parent_b.len(), "parents must have equal length");
    assert!(point <= n, "crossover point {point} out of range for length {n}");

    let genes = parent_a.assignments()[..point]
        .iter()
        .chain(&parent_b.assignments()[point..])
        .copied()
        .collect();
    Chromosome::from_ordered(genes)
}

// ============================================================================
// Mutation
// ============================================================================

/// Returns a copy of `chromosome` with `subject_id` moved to `time_slot`
/// and `room_id`. Teacher and subject id are unchanged.
///
/// # Panics
/// Panics if `subject_id` is not in the chromosome.
pub fn reschedule(chromosome: &Chromosome, subject_id: usize, time_slot: usize, room_id: usize) -> Chromosome {
    assert!(
        subject_id < chromosome.len(),
        "subject {subject_id} out of range for length {}",
        chromosome.len()
    );
    let mut genes = chromosome.assignments().to_vec();
    genes[subject_id].time_slot = time_slot;
    genes[subject_id].room_id = room_id;
    Chromosome::from_ordered(genes)
}

// ============================================================================
// Tests
// ============================================================================
