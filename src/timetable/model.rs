//! Candidate encoding.
//!
//! # Encoding
//!
//! A [`Chromosome`] holds one [`Assignment`] (gene) per subject. The gene
//! for subject `i` sits at position `i`; the constructor enforces this, so
//! [`Chromosome::get`] can look a subject up directly.

use crate::error::ChromosomeError;
use std::fmt;

/// Placement of one subject: who teaches it, when, and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    /// Identity of the subject. Never changes after creation.
    pub subject_id: usize,
    pub teacher_id: usize,
    pub time_slot: usize,
    pub room_id: usize,
}

impl Assignment {
    pub fn new(subject_id: usize, teacher_id: usize, time_slot: usize, room_id: usize) -> Self {
        Self {
            subject_id,
            teacher_id,
            time_slot,
            room_id,
        }
    }

    /// Whether the two assignments clash: same slot, and same teacher or
    /// same room.
    pub fn conflicts_with(&self, other: &Assignment) -> bool {
        self.time_slot == other.time_slot
            && (self.teacher_id == other.teacher_id || self.room_id == other.room_id)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Subject {} - Teacher {} - Slot {} - Room {}",
            self.subject_id, self.teacher_id, self.time_slot, self.room_id
        )
    }
}

/// One complete candidate timetable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<Assignment>", into = "Vec<Assignment>"))]
pub struct Chromosome {
    genes: Vec<Assignment>,
}

impl Chromosome {
    /// Builds a chromosome, checking that position `i` holds subject `i`.
    pub fn new(genes: Vec<Assignment>) -> Result<Self, ChromosomeError> {
        if let Some((index, gene)) = genes
            .iter()
            .enumerate()
            .find(|(i, gene)| gene.subject_id != *i)
        {
            return Err(ChromosomeError::SubjectMismatch {
                index,
                subject_id: gene.subject_id,
            });
        }
        Ok(Self { genes })
    }

    /// Builds a chromosome from genes already known to be in subject order.
    pub(crate) fn from_ordered(genes: Vec<Assignment>) -> Self {
        debug_assert!(genes.iter().enumerate().all(|(i, g)| g.subject_id == i));
        Self { genes }
    }

    /// The assignment of `subject_id`, if the subject exists.
    pub fn get(&self, subject_id: usize) -> Option<&Assignment> {
        self.genes.get(subject_id)
    }

    /// All assignments, in subject order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.genes
    }

    /// Number of subjects.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Assignment> {
        self.genes.iter()
    }
}

impl<'a> IntoIterator for &'a Chromosome {
    type Item = &'a Assignment;
    type IntoIter = std::slice::Iter<'a, Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.iter()
    }
}

impl TryFrom<Vec<Assignment>> for Chromosome {
    type Error = ChromosomeError;

    fn try_from(genes: Vec<Assignment>) -> Result<Self, Self::Error> {
        Self::new(genes)
    }
}

impl From<Chromosome> for Vec<Assignment> {
    fn from(c: Chromosome) -> Self {
        c.genes
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gene in &self.genes {
            writeln!(f, "{gene}")?;
        }
        Ok(())
    }
}
