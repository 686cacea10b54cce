//! Random-access seeded streams.
//!
//! Generation code never advances a shared RNG. Each draw is addressed by a
//! `(seed, step)` pair, so a star's position only depends on the steps it
//! reads and never on how many other draws happened before it.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const PRIME_X: u64 = 0x9E37_79B9_7F4A_7C15;
const PRIME_Y: u64 = 0xC2B2_AE3D_27D4_EB4F;
const PRIME_Z: u64 = 0x1656_67B1_9E37_79F9;

/// Hash integer sector coordinates into a stream seed.
///
/// Each axis is multiplied by its own odd constant before mixing, so swapping
/// axes or moving to an adjacent sector yields an unrelated seed.
pub fn hash_sector(x: i64, y: i64, z: i64) -> u64 {
    let mixed = (x as u64).wrapping_mul(PRIME_X)
        ^ (y as u64).wrapping_mul(PRIME_Y)
        ^ (z as u64).wrapping_mul(PRIME_Z);
    avalanche(mixed)
}

/// 64-bit finalizer (splitmix64).
fn avalanche(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

/// Deterministic stream of uniform draws indexed by step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededStream {
    seed: u64,
}

impl SeededStream {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Stream keyed off integer sector coordinates.
    pub fn for_sector(x: i64, y: i64, z: i64) -> Self {
        Self::new(hash_sector(x, y, z))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform draw in `[0, 1)` for the given step.
    pub fn sample(&self, step: u64) -> f64 {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        rng.set_stream(step);
        rng.random::<f64>()
    }

    /// Draw in `[-1, 1)` symmetric around zero for the given step.
    pub fn centered(&self, step: u64) -> f64 {
        self.sample(step) * 2.0 - 1.0
    }
}
