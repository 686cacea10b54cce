//! Star density fields.
//!
//! The sector generator multiplies the density at a sector by the configured
//! star scalar to get its expected star count. Callers reshape the galaxy by
//! injecting a different [`DensityField`]; generation logic never changes.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::config::GalaxyConfig;

/// Scalar star density as a function of galactic position (light years).
///
/// Implementations must be pure: the same input always yields the same value.
/// Negative and NaN results are treated as zero by the generator.
pub trait DensityField: Send + Sync {
    fn density(&self, x: f64, y: f64, z: f64) -> f64;
}

impl<F> DensityField for F
where
    F: Fn(f64, f64, f64) -> f64 + Send + Sync,
{
    fn density(&self, x: f64, y: f64, z: f64) -> f64 {
        self(x, y, z)
    }
}

/// Evaluate a field; anything negative or non-finite reads as empty space.
pub(crate) fn sample_density(field: &dyn DensityField, x: f64, y: f64, z: f64) -> f64 {
    let value = field.density(x, y, z);
    if !value.is_finite() || value < 0.0 {
        0.0
    } else {
        value
    }
}

/// Same density everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformDensity(pub f64);

impl DensityField for UniformDensity {
    fn density(&self, _x: f64, _y: f64, _z: f64) -> f64 {
        self.0
    }
}

/// Filament-like density built from seeded lattice noise.
///
/// The field is `(1 - |noise(p * frequency)|)^exponent`, which peaks along the
/// zero set of the noise and falls off sharply elsewhere.
#[derive(Debug, Clone)]
pub struct NoiseDensity {
    permutation: [u8; 256],
    frequency: f64,
    exponent: f64,
}

impl NoiseDensity {
    pub fn new(seed: u64, frequency: f64, exponent: f64) -> Self {
        let mut permutation = [0u8; 256];
        for (slot, value) in permutation.iter_mut().zip(0u8..=255) {
            *slot = value;
        }
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        permutation.shuffle(&mut rng);

        Self {
            permutation,
            frequency,
            exponent,
        }
    }

    pub fn from_config(config: &GalaxyConfig) -> Self {
        Self::new(
            config.universe_seed,
            config.density_frequency,
            config.density_exponent,
        )
    }

    fn lattice(&self, x: i64, y: i64, z: i64) -> f64 {
        let p = &self.permutation;
        let a = p[(x & 255) as usize] as usize;
        let b = p[(a + (y & 255) as usize) & 255] as usize;
        let c = p[(b + (z & 255) as usize) & 255];
        c as f64 / 127.5 - 1.0
    }

    /// Value noise in `[-1, 1]`.
    pub fn noise(&self, x: f64, y: f64, z: f64) -> f64 {
        let (x0, y0, z0) = (x.floor(), y.floor(), z.floor());
        let (ix, iy, iz) = (x0 as i64, y0 as i64, z0 as i64);
        let (u, v, w) = (fade(x - x0), fade(y - y0), fade(z - z0));

        let corner = |dx: i64, dy: i64, dz: i64| self.lattice(ix + dx, iy + dy, iz + dz);

        let x00 = lerp(corner(0, 0, 0), corner(1, 0, 0), u);
        let x10 = lerp(corner(0, 1, 0), corner(1, 1, 0), u);
        let x01 = lerp(corner(0, 0, 1), corner(1, 0, 1), u);
        let x11 = lerp(corner(0, 1, 1), corner(1, 1, 1), u);

        lerp(lerp(x00, x10, v), lerp(x01, x11, v), w)
    }
}

impl DensityField for NoiseDensity {
    fn density(&self, x: f64, y: f64, z: f64) -> f64 {
        let f = self.frequency;
        let n = self.noise(x * f, y * f, z * f).clamp(-1.0, 1.0);
        (1.0 - n.abs()).powf(self.exponent)
    }
}

fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}
