//! Seeded random source
//!
//! Every random draw in the simulation goes through here so a seed fully
//! determines a run. Separate streams keep cosmetic effects from shifting the
//! level layout.

use rand::Rng;
use rand_pcg::Pcg32;

/// Stream used for level generation
pub const LEVEL_STREAM: u64 = 0;
/// Stream used for particles and other cosmetics
pub const EFFECTS_STREAM: u64 = 1;

/// Deterministic random number source
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: Pcg32,
}

impl RandomSource {
    pub fn new(seed: u64, stream: u64) -> Self {
        Self {
            rng: Pcg32::new(seed, stream),
        }
    }

    /// Uniform in [0, 1)
    pub fn unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Uniform in [lo, hi); `lo` when the range is empty
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        if hi > lo {
            self.rng.random_range(lo..hi)
        } else {
            lo
        }
    }

    /// Uniform integer in [lo, hi]; `lo` when hi < lo
    pub fn range_inclusive_u32(&mut self, lo: u32, hi: u32) -> u32 {
        if hi > lo {
            self.rng.random_range(lo..=hi)
        } else {
            lo
        }
    }

    /// +1.0 or -1.0 with equal probability
    pub fn sign(&mut self) -> f32 {
        if self.rng.random_bool(0.5) { 1.0 } else { -1.0 }
    }
}
