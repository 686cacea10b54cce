//! Galaxy configuration.
//!
//! A [`GalaxyConfig`] is an explicit, read-only description of how the galaxy is
//! generated. Every generator call receives it by reference, so two galaxies
//! built from equal configurations produce identical sectors regardless of
//! call order.
//!
//! Configurations can be loaded from JSON and then adjusted with environment
//! variables:
//!
//! - `STARSECTOR_UNIVERSE_SEED` - seed of the default density noise
//! - `STARSECTOR_SECTOR_SIZE` - edge length of a sector in light years
//! - `STARSECTOR_STARS_PER_SECTOR` - density scalar applied to every sector

use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Default edge length of a sector in light years.
pub const DEFAULT_SECTOR_SIZE: f64 = 20.0;

/// Default scalar converting density into an expected star count.
pub const DEFAULT_STARS_PER_SECTOR: f64 = 40.0;

/// Default jump range in light years.
pub const DEFAULT_JUMP_RANGE: f64 = 10.0;

/// Default radius of the human bubble around the galactic origin.
pub const DEFAULT_HUMAN_BUBBLE_RADIUS: f64 = 100.0;

const ENV_UNIVERSE_SEED: &str = "STARSECTOR_UNIVERSE_SEED";
const ENV_SECTOR_SIZE: &str = "STARSECTOR_SECTOR_SIZE";
const ENV_STARS_PER_SECTOR: &str = "STARSECTOR_STARS_PER_SECTOR";

/// Parameters shared by every sector of a galaxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalaxyConfig {
    /// Edge length of a sector in light years.
    pub sector_size: f64,
    /// Scalar converting the density at a sector into an expected star count.
    pub stars_per_sector: f64,
    /// Seed of the default noise density field.
    pub universe_seed: u64,
    /// Spatial frequency of the default noise density (per light year).
    pub density_frequency: f64,
    /// Sharpness of the default noise density.
    pub density_exponent: f64,
    /// Radius of the human bubble around the galactic origin (light years).
    pub human_bubble_radius: f64,
    /// Jump range used when a caller does not provide one (light years).
    pub default_jump_range: f64,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            sector_size: DEFAULT_SECTOR_SIZE,
            stars_per_sector: DEFAULT_STARS_PER_SECTOR,
            universe_seed: 0,
            density_frequency: 0.01,
            density_exponent: 8.0,
            human_bubble_radius: DEFAULT_HUMAN_BUBBLE_RADIUS,
            default_jump_range: DEFAULT_JUMP_RANGE,
        }
    }
}

impl GalaxyConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading galaxy configuration");

        let contents = fs::read_to_string(path).map_err(|e| Error::ConfigLoad {
            path: path.to_path_buf(),
            message: format!("failed to read file: {}", e),
        })?;

        let config: Self = serde_json::from_str(&contents).map_err(|e| Error::ConfigLoad {
            path: path.to_path_buf(),
            message: format!("invalid JSON: {}", e),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply `STARSECTOR_*` environment overrides on top of this configuration.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Some(seed) = env_override::<u64>(ENV_UNIVERSE_SEED)? {
            self.universe_seed = seed;
        }
        if let Some(size) = env_override::<f64>(ENV_SECTOR_SIZE)? {
            self.sector_size = size;
        }
        if let Some(scalar) = env_override::<f64>(ENV_STARS_PER_SECTOR)? {
            self.stars_per_sector = scalar;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check that every parameter is usable by the generator.
    pub fn validate(&self) -> Result<()> {
        if !self.sector_size.is_finite() || self.sector_size <= 0.0 {
            return Err(invalid(format!(
                "sector_size must be a positive number, got {}",
                self.sector_size
            )));
        }
        if !self.stars_per_sector.is_finite() || self.stars_per_sector < 0.0 {
            return Err(invalid(format!(
                "stars_per_sector must be non-negative, got {}",
                self.stars_per_sector
            )));
        }
        if !self.density_frequency.is_finite() || !self.density_exponent.is_finite() {
            return Err(invalid("density parameters must be finite".to_string()));
        }
        if self.density_exponent < 0.0 {
            return Err(invalid(format!(
                "density_exponent must be non-negative, got {}",
                self.density_exponent
            )));
        }
        if !self.human_bubble_radius.is_finite() || self.human_bubble_radius < 0.0 {
            return Err(invalid(format!(
                "human_bubble_radius must be non-negative, got {}",
                self.human_bubble_radius
            )));
        }
        if !self.default_jump_range.is_finite() || self.default_jump_range <= 0.0 {
            return Err(invalid(format!(
                "default_jump_range must be positive, got {}",
                self.default_jump_range
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidConfig { message }
}

fn env_override<T: FromStr>(name: &str) -> Result<Option<T>> {
    let Ok(raw) = env::var(name) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<T>().map(Some).map_err(|_| Error::InvalidConfig {
        message: format!("{} has an invalid value '{}'", name, trimmed),
    })
}
