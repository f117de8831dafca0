//! Seedable pseudorandom generator for pattern generation.
//!
//! Generation never reaches for a global random source. Callers construct an
//! [`Rng`] from a seed and pass it in explicitly, so the same seed replays
//! the exact same stream (and the exact same pattern). Not cryptographically
//! secure, and doesn't need to be.

/// A pseudorandom number generator owned by the caller.
#[derive(Debug)]
pub struct Rng(oorandom::Rand64);

impl Rng {
    /// Pass the same seed to get the same stream back again. Good for
    /// reproducing generator output in tests.
    pub fn with_seed(seed: u128) -> Self {
        Self(oorandom::Rand64::new(seed))
    }

    /// Next value in `range`, uniformly distributed.
    pub fn rand_range(&mut self, range: std::ops::Range<u64>) -> u64 {
        self.0.rand_range(range)
    }

    /// Pick one element of a non-empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.rand_range(0..items.len() as u64) as usize]
    }
}
