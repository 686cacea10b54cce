//! Address and coordinate types for star systems.
//!
//! A [`SystemAddress`] (sector plus index) is the canonical, storage-stable
//! identifier of a star system. [`StarSystemCoordinates`] carries the same
//! system in serialization-friendly form, with the local offset produced by
//! the generator spelled out. [`GalacticPosition`] is the real-valued point
//! used for every distance computation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::rng::SeededStream;

/// Scale applied to the noise-derived address hash.
pub const SEED_HALF_RANGE: f64 = 1e4;

/// Hashes read steps counting down from here; star generation counts up from 0.
const HASH_STEP_BASE: u64 = u64::MAX;

/// Integer coordinates of a sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SectorCoordinates {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl SectorCoordinates {
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Sector whose cube contains `position`. Sectors are centred on
    /// `coords * sector_size`, so this rounds to the nearest centre.
    pub fn containing(position: &GalacticPosition, sector_size: f64) -> Self {
        Self {
            x: (position.x / sector_size).round() as i64,
            y: (position.y / sector_size).round() as i64,
            z: (position.z / sector_size).round() as i64,
        }
    }

    /// Galactic position of the sector centre.
    pub fn center(&self, sector_size: f64) -> GalacticPosition {
        GalacticPosition::new(
            self.x as f64 * sector_size,
            self.y as f64 * sector_size,
            self.z as f64 * sector_size,
        )
    }

    pub fn offset(&self, dx: i64, dy: i64, dz: i64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

impl fmt::Display for SectorCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.x, self.y, self.z)
    }
}

/// Canonical identifier of a star system: its sector and its index within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SystemAddress {
    pub sector_x: i64,
    pub sector_y: i64,
    pub sector_z: i64,
    pub index: u32,
}

impl SystemAddress {
    pub const fn new(sector_x: i64, sector_y: i64, sector_z: i64, index: u32) -> Self {
        Self {
            sector_x,
            sector_y,
            sector_z,
            index,
        }
    }

    pub fn in_sector(sector: SectorCoordinates, index: u32) -> Self {
        Self::new(sector.x, sector.y, sector.z, index)
    }

    pub fn sector(&self) -> SectorCoordinates {
        SectorCoordinates::new(self.sector_x, self.sector_y, self.sector_z)
    }

    /// Noise-derived integer hash of this address.
    ///
    /// Not unique: distinct addresses may share a hash. Use it as a seed for
    /// downstream generation, never as the sole key of a map.
    pub fn hash(&self) -> i64 {
        let stream = SeededStream::for_sector(self.sector_x, self.sector_y, self.sector_z);
        (stream.centered(HASH_STEP_BASE - u64::from(self.index)) * SEED_HALF_RANGE) as i64
    }
}

impl fmt::Display for SystemAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}",
            self.sector_x, self.sector_y, self.sector_z, self.index
        )
    }
}

impl FromStr for SystemAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidAddress {
            input: s.to_string(),
        };

        let parts: Vec<&str> = s.trim().split(':').collect();
        let [x, y, z, index] = parts.as_slice() else {
            return Err(invalid());
        };

        Ok(Self {
            sector_x: x.trim().parse().map_err(|_| invalid())?,
            sector_y: y.trim().parse().map_err(|_| invalid())?,
            sector_z: z.trim().parse().map_err(|_| invalid())?,
            index: index.trim().parse().map_err(|_| invalid())?,
        })
    }
}

/// Fractional position of a system inside its sector, each axis in `[-0.5, 0.5]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalOffset {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl LocalOffset {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Whether every axis is finite and within `[-0.5, 0.5]`.
    pub fn is_within_sector(&self) -> bool {
        [self.x, self.y, self.z]
            .iter()
            .all(|axis| (-0.5..=0.5).contains(axis))
    }
}

/// Serialization-friendly system coordinates.
///
/// Local fields must be values produced by the generator (or a registered
/// custom system); arbitrary offsets do not resolve back to an address.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarSystemCoordinates {
    pub sector_x: i64,
    pub sector_y: i64,
    pub sector_z: i64,
    pub local_x: f64,
    pub local_y: f64,
    pub local_z: f64,
}

impl StarSystemCoordinates {
    pub fn new(sector: SectorCoordinates, local: LocalOffset) -> Self {
        Self {
            sector_x: sector.x,
            sector_y: sector.y,
            sector_z: sector.z,
            local_x: local.x,
            local_y: local.y,
            local_z: local.z,
        }
    }

    pub fn sector(&self) -> SectorCoordinates {
        SectorCoordinates::new(self.sector_x, self.sector_y, self.sector_z)
    }

    pub fn local_offset(&self) -> LocalOffset {
        LocalOffset::new(self.local_x, self.local_y, self.local_z)
    }

    /// `(sector + local) * sector_size` on each axis.
    pub fn galactic_position(&self, sector_size: f64) -> GalacticPosition {
        galactic_position(self.sector(), self.local_offset(), sector_size)
    }
}

/// Combine a sector and a local offset into a galactic position.
pub fn galactic_position(
    sector: SectorCoordinates,
    local: LocalOffset,
    sector_size: f64,
) -> GalacticPosition {
    GalacticPosition::new(
        (sector.x as f64 + local.x) * sector_size,
        (sector.y as f64 + local.y) * sector_size,
        (sector.z as f64 + local.z) * sector_size,
    )
}

/// Cartesian position in light years.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GalacticPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl GalacticPosition {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Calculate the Euclidean distance to another position.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Distance to the galactic origin.
    pub fn length(&self) -> f64 {
        self.distance_to(&Self::default())
    }
}
