//! Deterministic world RNG.
//!
//! The simulation is single-threaded and tick-driven, so one RNG owned by
//! the world covers every random decision (prowler movement plans, citizen
//! transformation weighting, drop chances).  The same seed always produces
//! an identical run for identical inputs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seed-driven RNG wrapper around `SmallRng`.
#[derive(Clone, Debug)]
pub struct WorldRng(SmallRng);

impl WorldRng {
    pub fn new(seed: u64) -> Self {
        WorldRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
