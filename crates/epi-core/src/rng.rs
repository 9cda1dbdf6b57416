//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! A single `SimRng` seeded from the run's configured seed drives every
//! stochastic decision, and the engine draws from it in a fixed order:
//! population generation (positions, mover sample, occupation shuffle),
//! the patient-zero pick, then per day the death sample, the hospitalization
//! sample, movement offsets in ascending mover order, and transmission gate
//! draws in ascending candidate order.  Same seed, same parameters — same
//! outbreak, bit for bit.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The simulation's single source of randomness.
///
/// The engine is single-threaded, so one stream suffices; embedders that
/// step the simulation manually must route any extra randomness through
/// their own RNG to keep the engine's draw order intact.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Borrow the underlying `SmallRng` where a raw `rand` API is needed
    /// (`rng.inner().sample(...)`, etc.)
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Uniform draw from `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Bernoulli draw; `p` is clamped into [0, 1] first.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// In-place Fisher-Yates shuffle of `slice`.
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    /// Sample `amount` distinct indices from `0..len` without replacement.
    ///
    /// # Panics
    /// Panics if `amount > len`; callers guard their sample sizes first.
    pub fn sample_indices(&mut self, len: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.0, len, amount).into_vec()
    }
}
