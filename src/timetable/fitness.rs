//! Conflict-based fitness.
//!
//! A conflict is an unordered pair of assignments that share a time slot
//! and also share a teacher, a room, or both. Each pair counts once no
//! matter how many resources clash. Fitness is the negated conflict
//! count, so 0 is a conflict-free timetable.
//!
//! The pairwise scan is O(n²) in the number of subjects.

use super::model::{Assignment, Chromosome};
use crate::ga::Fitness;

/// Which resources a conflicting pair shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clash {
    Teacher,
    Room,
    TeacherAndRoom,
}

/// A conflicting pair of subjects, lower subject id first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conflict {
    pub first: usize,
    pub second: usize,
    pub time_slot: usize,
    pub clash: Clash,
}

/// Number of conflicting pairs.
pub fn conflict_count(chromosome: &Chromosome) -> usize {
    let genes = chromosome.assignments();
    genes
        .iter()
        .enumerate()
        .map(|(i, a)| genes[i + 1..].iter().filter(|b| a.conflicts_with(b)).count())
        .sum()
}

/// Fitness of a chromosome: `-(conflict count)`. Always `<= 0`.
pub fn fitness(chromosome: &Chromosome) -> Fitness {
    -(conflict_count(chromosome) as Fitness)
}

/// Lists every conflicting pair, ordered by first then second subject.
pub fn conflicts(chromosome: &Chromosome) -> Vec<Conflict> {
    let genes = chromosome.assignments();
    let mut out = Vec::new();
    for (i, a) in genes.iter().enumerate() {
        for b in &genes[i + 1..] {
            if let Some(clash) = clash(a, b) {
                out.push(Conflict {
                    first: a.subject_id,
                    second: b.subject_id,
                    time_slot: a.time_slot,
                    clash,
                });
            }
        }
    }
    out
}

fn clash(a: &Assignment, b: &Assignment) -> Option<Clash> {
    if a.time_slot != b.time_slot {
        return None;
    }
    match (a.teacher_id == b.teacher_id, a.room_id == b.room_id) {
        (true, true) => Some(Clash::TeacherAndRoom),
        (true, false) => Some(Clash::Teacher),
        (false, true) => Some(Clash::Room),
        (false, false) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chromosome(genes: &[(usize, usize, usize)]) -> Chromosome {
        Chromosome::new(
            genes
                .iter()
                .enumerate()
                .map(|(i, &(t, s, r))| Assignment::new(i, t, s, r))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_conflict_free() {
        let c = chromosome(&[(0, 0, 0), (0, 1, 0), (1, 0, 1)]);
        assert_eq!(conflict_count(&c), 0);
        assert_eq!(fitness(&c), 0);
        assert!(conflicts(&c).is_empty());
    }

    #[test]
    fn test_teacher_clash() {
        let c = chromosome(&[(2, 3, 0), (2, 3, 1)]);
        assert_eq!(fitness(&c), -1);
        assert_eq!(
            conflicts(&c),
            vec![Conflict {
                first: 0,
                second: 1,
                time_slot: 3,
                clash: Clash::Teacher
            }]
        );
    }

    #[test]
    fn test_room_clash() {
        let c = chromosome(&[(0, 3, 4), (1, 3, 4)]);
        assert_eq!(fitness(&c), -1);
        assert_eq!(conflicts(&c)[0].clash, Clash::Room);
    }

    #[test]
    fn test_double_clash_counts_once() {
        let c = chromosome(&[(1, 3, 4), (1, 3, 4)]);
        assert_eq!(fitness(&c), -1);
        assert_eq!(conflicts(&c)[0].clash, Clash::TeacherAndRoom);
    }

    #[test]
    fn test_every_pair_counts() {
        // Three subjects in the same slot and room: 3 pairs.
        let c = chromosome(&[(0, 0, 0), (1, 0, 0), (2, 0, 0)]);
        assert_eq!(fitness(&c), -3);
        let pairs: Vec<(usize, usize)> = conflicts(&c).iter().map(|k| (k.first, k.second)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn test_different_slots_never_clash() {
        let c = chromosome(&[(0, 0, 0), (0, 1, 0), (0, 2, 0), (0, 3, 0)]);
        assert_eq!(fitness(&c), 0);
    }

    #[test]
    fn test_single_subject() {
        let c = chromosome(&[(0, 0, 0)]);
        assert_eq!(fitness(&c), 0);
    }

    #[test]
    fn test_count_matches_listing() {
        let c = chromosome(&[(0, 1, 0), (0, 1, 1), (1, 1, 1), (2, 2, 2), (2, 2, 0)]);
        assert_eq!(conflict_count(&c), conflicts(&c).len());
        // (0,1) teacher, (1,2) room, (3,4) teacher
        assert_eq!(fitness(&c), -3);
    }
}
