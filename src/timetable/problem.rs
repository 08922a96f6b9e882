//! Timetabling as a [`GaProblem`].

use super::bounds::ProblemBounds;
use super::fitness::fitness;
use super::model::Chromosome;
use super::operators::{random_chromosome, reschedule, single_point_crossover};
use crate::error::ConfigError;
use crate::ga::{Fitness, GaProblem};
use crate::random::RandomSource;

/// Binds the timetable encoding and operators to the GA engine.
///
/// - initialization: [`random_chromosome`]
/// - evaluation: negated conflict count
/// - crossover: single point drawn uniformly from `[0, n - 1]`
/// - mutation: one uniformly chosen subject gets a new slot and room
#[derive(Debug, Clone)]
pub struct TimetableProblem {
    bounds: ProblemBounds,
}

impl TimetableProblem {
    /// Creates the problem after validating `bounds`.
    pub fn new(bounds: ProblemBounds) -> Result<Self, ConfigError> {
        bounds.validate()?;
        Ok(Self { bounds })
    }

    pub fn bounds(&self) -> &ProblemBounds {
        &self.bounds
    }
}

impl GaProblem for TimetableProblem {
    type Individual = Chromosome;

    fn create_individual<R: RandomSource>(&self, rng: &mut R) -> Chromosome {
        random_chromosome(&self.bounds, rng)
    }

    fn evaluate(&self, individual: &Chromosome) -> Fitness {
        fitness(individual)
    }

    fn crossover<R: RandomSource>(&self, parent1: &Chromosome, parent2: &Chromosome, rng: &mut R) -> Chromosome {
        let point = rng.index(self.bounds.num_subjects);
        single_point_crossover(parent1, parent2, point)
    }

    fn mutate<R: RandomSource>(&self, individual: &Chromosome, rng: &mut R) -> Chromosome {
        let subject_id = rng.index(self.bounds.num_subjects);
        let time_slot = rng.index(self.bounds.num_timeslots);
        let room_id = rng.index(self.bounds.num_rooms);
        reschedule(individual, subject_id, time_slot, room_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SequenceSource;
    use crate::timetable::Assignment;

    fn problem() -> TimetableProblem {
        TimetableProblem::new(ProblemBounds::default().with_subjects(3)).unwrap()
    }

    #[test]
    fn test_new_validates_bounds() {
        let err = TimetableProblem::new(ProblemBounds::default().with_teachers(0)).unwrap_err();
        assert_eq!(err, ConfigError::EmptyBound { name: "num_teachers" });
    }

    #[test]
    fn test_crossover_draws_point() {
        let p = problem();
        let mut rng = crate::random::create_rng(3);
        let a = p.create_individual(&mut rng);
        let b = p.create_individual(&mut rng);

        let mut src = SequenceSource::new(vec![2]);
        let child = p.crossover(&a, &b, &mut src);
        assert_eq!(src.draws(), 1);
        assert_eq!(child.get(0), a.get(0));
        assert_eq!(child.get(1), a.get(1));
        assert_eq!(child.get(2), b.get(2));
    }

    #[test]
    fn test_mutate_draw_order() {
        let p = problem();
        let c = Chromosome::new(vec![
            Assignment::new(0, 0, 0, 0),
            Assignment::new(1, 1, 1, 1),
            Assignment::new(2, 2, 2, 2),
        ])
        .unwrap();
        // subject 1, slot 30, room 4
        let mut src = SequenceSource::new(vec![1, 30, 4]);
        let m = p.mutate(&c, &mut src);
        assert_eq!(m.get(1), Some(&Assignment::new(1, 1, 30, 4)));
        assert_eq!(src.draws(), 3);
    }

    #[test]
    fn test_evaluate_is_negated_conflicts() {
        let p = problem();
        let c = Chromosome::new(vec![
            Assignment::new(0, 0, 5, 0),
            Assignment::new(1, 0, 5, 1),
            Assignment::new(2, 1, 5, 1),
        ])
        .unwrap();
        assert_eq!(p.evaluate(&c), -2);
    }
}
