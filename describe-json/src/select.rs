//! Example index selection for collapsed arrays.
//!
//! When an over-long array collapses to its `[label, example]` form with
//! randomization enabled, the transform asks an [`IndexSource`] which element
//! to keep. The trait exists so callers (and tests) can substitute a
//! deterministic source for real randomness.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// A strategy for picking an example index from a non-empty array.
pub trait IndexSource {
    /// Returns an index in `0..len`. Callers guarantee `len >= 1`.
    fn index(&mut self, len: usize) -> usize;
}

/// Uniform selection from the thread-local random number generator.
///
/// This is the default source used by [`Describer::new`](crate::Describer::new).
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRngSource;

impl IndexSource for ThreadRngSource {
    fn index(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Uniform selection from a seeded generator, for reproducible runs.
#[derive(Clone, Debug)]
pub struct SeededSource(StdRng);

impl SeededSource {
    /// Constructs a source whose selections are fully determined by `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl IndexSource for SeededSource {
    fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}
