//! Randomness provider.
//!
//! Every random draw in the search goes through [`RandomSource`], a single
//! capability: a uniform integer over an inclusive range. The source is
//! created once per run and passed explicitly into every operator, so the
//! order of draws fully determines a run.
//!
//! - [`RngSource`] adapts any [`rand::Rng`] (production uses [`StdRng`]).
//! - [`SequenceSource`] replays a fixed list of values, for tests and for
//!   reproducing a run draw by draw.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// Resolution of probability gates: `chance(rate)` fires when a draw in
/// `[0, GATE_RESOLUTION - 1]` falls below `round(rate * GATE_RESOLUTION)`.
pub const GATE_RESOLUTION: usize = 10_000;

/// Source of uniform integer draws.
pub trait RandomSource {
    /// Returns a uniform integer in `[low, high]` (both inclusive).
    ///
    /// # Panics
    /// Implementations may panic if `low > high`.
    fn uniform(&mut self, low: usize, high: usize) -> usize;

    /// Returns a uniform index in `[0, len - 1]`.
    ///
    /// # Panics
    /// Panics if `len == 0`.
    fn index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot draw an index from an empty range");
        self.uniform(0, len - 1)
    }

    /// Returns `true` with probability `rate`.
    ///
    /// Always consumes exactly one draw, so the draw sequence does not
    /// depend on the rate.
    fn chance(&mut self, rate: f64) -> bool {
        let threshold = (rate.clamp(0.0, 1.0) * GATE_RESOLUTION as f64).round() as usize;
        self.uniform(0, GATE_RESOLUTION - 1) < threshold
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn uniform(&mut self, low: usize, high: usize) -> usize {
        (**self).uniform(low, high)
    }
}

/// [`RandomSource`] backed by a [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }

    /// Returns the wrapped generator.
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform(&mut self, low: usize, high: usize) -> usize {
        self.0.random_range(low..=high)
    }
}

/// Creates a seeded, reproducible source.
pub fn create_rng(seed: u64) -> RngSource<StdRng> {
    RngSource::new(StdRng::seed_from_u64(seed))
}

/// Derives a seed from the wall clock.
pub fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

/// Deterministic source that replays a fixed sequence of raw values.
///
/// Each draw takes the next value `v` (cycling back to the start when the
/// sequence is exhausted) and maps it into the requested range as
/// `low + v % (high - low + 1)`. Values already inside the range are
/// therefore returned unchanged.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<usize>,
    cursor: usize,
    draws: usize,
}

impl SequenceSource {
    /// Creates a source over `values`.
    ///
    /// # Panics
    /// Panics if `values` is empty.
    pub fn new(values: Vec<usize>) -> Self {
        assert!(!values.is_empty(), "sequence must not be empty");
        Self {
            values,
            cursor: 0,
            draws: 0,
        }
    }

    /// Total number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RandomSource for SequenceSource {
    fn uniform(&mut self, low: usize, high: usize) -> usize {
        assert!(low <= high, "empty range [{low}, {high}]");
        let v = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        self.draws += 1;
        low + v % (high - low + 1)
    }
}
