//! Deterministic star sector generation.
//!
//! A sector's content is a pure function of its integer coordinates, the
//! galaxy configuration, and the injected density field:
//!
//! 1. A [`SeededStream`] is keyed off the sector coordinates.
//! 2. The density at the sector centre times `stars_per_sector` times the
//!    stream's draw at step 0 gives the expected star count. It is used
//!    directly as the loop bound, so a sector holds `ceil(expected)` stars.
//! 3. Star `i` reads the centered draws at steps `10i+1`, `10i+2`, `10i+3` and
//!    halves them into a local offset. No star reads another star's steps.

use tracing::trace;

use crate::config::GalaxyConfig;
use crate::coordinates::{galactic_position, GalacticPosition, LocalOffset, SectorCoordinates};
use crate::density::{sample_density, DensityField};
use crate::rng::SeededStream;

/// Stream steps reserved per star.
const STEPS_PER_STAR: u64 = 10;

/// Scale of a centered draw into a local offset.
const LOCAL_OFFSET_SCALE: f64 = 0.5;

/// The generated systems of one sector.
#[derive(Debug, Clone, PartialEq)]
pub struct StarSector {
    coordinates: SectorCoordinates,
    expected_star_count: f64,
    local_positions: Vec<LocalOffset>,
}

impl StarSector {
    /// Generate the sector at `coordinates`.
    pub fn generate(
        coordinates: SectorCoordinates,
        config: &GalaxyConfig,
        density: &dyn DensityField,
    ) -> Self {
        let stream = SeededStream::for_sector(coordinates.x, coordinates.y, coordinates.z);
        let center = coordinates.center(config.sector_size);
        let local_density = sample_density(density, center.x, center.y, center.z);
        let expected_star_count = config.stars_per_sector * local_density * stream.sample(0);
        // An overflowing product would never bound the loop below.
        let expected_star_count = if expected_star_count.is_finite() {
            expected_star_count
        } else {
            0.0
        };

        let mut local_positions = Vec::new();
        let mut index: u64 = 0;
        while (index as f64) < expected_star_count {
            local_positions.push(star_offset(&stream, index));
            index += 1;
        }

        trace!(
            sector = %coordinates,
            density = local_density,
            stars = local_positions.len(),
            "generated star sector"
        );

        Self {
            coordinates,
            expected_star_count,
            local_positions,
        }
    }

    pub fn coordinates(&self) -> SectorCoordinates {
        self.coordinates
    }

    /// Non-integer star count the loop bound was derived from.
    pub fn expected_star_count(&self) -> f64 {
        self.expected_star_count
    }

    pub fn star_count(&self) -> usize {
        self.local_positions.len()
    }

    pub fn local_positions(&self) -> &[LocalOffset] {
        &self.local_positions
    }

    pub fn local_position(&self, index: usize) -> Option<LocalOffset> {
        self.local_positions.get(index).copied()
    }

    /// Galactic positions of every generated star, in index order.
    pub fn galactic_positions(&self, sector_size: f64) -> Vec<GalacticPosition> {
        self.local_positions
            .iter()
            .map(|local| galactic_position(self.coordinates, *local, sector_size))
            .collect()
    }
}

fn star_offset(stream: &SeededStream, index: u64) -> LocalOffset {
    let base = STEPS_PER_STAR * index;
    LocalOffset::new(
        stream.centered(base + 1) * LOCAL_OFFSET_SCALE,
        stream.centered(base + 2) * LOCAL_OFFSET_SCALE,
        stream.centered(base + 3) * LOCAL_OFFSET_SCALE,
    )
}
