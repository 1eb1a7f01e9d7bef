//! Injectable random sources
//!
//! The collection never reaches for a global RNG: placement randomness goes
//! through `RandomSource` so runs are reproducible and tests deterministic.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// A source of uniformly distributed values
pub trait RandomSource {
    /// Uniform value in `[min, max]`. Returns `min` when the range is empty.
    fn uniform(&mut self, min: f32, max: f32) -> f32;
}

/// Seeded PCG source (reproducible for a given seed)
#[derive(Debug, Clone)]
pub struct PcgRandom {
    seed: u64,
    rng: Pcg32,
}

impl PcgRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Serializable seed record, enough to replay this source from the start
    pub fn state(&self) -> RngState {
        RngState { seed: self.seed }
    }
}

impl RandomSource for PcgRandom {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        if !(min < max) || !min.is_finite() || !max.is_finite() {
            return min;
        }
        if !(max - min).is_finite() {
            // Span overflows f32; interpolate without forming it
            let t: f32 = self.rng.random();
            return (min + t * max - t * min).clamp(min, max);
        }
        self.rng.random_range(min..=max)
    }
}

/// Always yields the middle of the range
#[derive(Debug, Clone, Copy, Default)]
pub struct MidpointRandom;

impl RandomSource for MidpointRandom {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        (min + max) / 2.0
    }
}

/// RNG seed wrapper for serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn to_random(&self) -> PcgRandom {
        PcgRandom::new(self.seed)
    }
}
