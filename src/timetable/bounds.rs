//! Problem dimensions.

use super::model::Assignment;
use crate::error::ConfigError;

/// Sizes of the timetabling problem.
///
/// Every gene field is drawn from `[0, bound - 1]` of its dimension.
///
/// ```
/// use u_timetable::timetable::ProblemBounds;
///
/// let bounds = ProblemBounds::default().with_subjects(8).with_rooms(3);
/// assert_eq!(bounds.num_timeslots, 36);
/// assert!(bounds.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProblemBounds {
    /// Number of subjects; also the chromosome length.
    pub num_subjects: usize,
    /// Number of time slots.
    pub num_timeslots: usize,
    /// Number of rooms.
    pub num_rooms: usize,
    /// Number of teachers.
    pub num_teachers: usize,
}

impl Default for ProblemBounds {
    fn default() -> Self {
        Self {
            num_subjects: 5,
            num_timeslots: 36,
            num_rooms: 5,
            num_teachers: 5,
        }
    }
}

impl ProblemBounds {
    /// Sets the number of subjects.
    pub fn with_subjects(mut self, n: usize) -> Self {
        self.num_subjects = n;
        self
    }

    /// Sets the number of time slots.
    pub fn with_timeslots(mut self, n: usize) -> Self {
        self.num_timeslots = n;
        self
    }

    /// Sets the number of rooms.
    pub fn with_rooms(mut self, n: usize) -> Self {
        self.num_rooms = n;
        self
    }

    /// Sets the number of teachers.
    pub fn with_teachers(mut self, n: usize) -> Self {
        self.num_teachers = n;
        self
    }

    /// Rejects any zero dimension.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dims = [
            ("num_subjects", self.num_subjects),
            ("num_timeslots", self.num_timeslots),
            ("num_rooms", self.num_rooms),
            ("num_teachers", self.num_teachers),
        ];
        match dims.into_iter().find(|&(_, n)| n == 0) {
            Some((name, _)) => Err(ConfigError::EmptyBound { name }),
            None => Ok(()),
        }
    }

    /// Whether every field of `assignment` lies within these bounds.
    pub fn contains(&self, assignment: &Assignment) -> bool {
        assignment.subject_id < self.num_subjects
            && assignment.teacher_id < self.num_teachers
            && assignment.time_slot < self.num_timeslots
            && assignment.room_id < self.num_rooms
    }
}
