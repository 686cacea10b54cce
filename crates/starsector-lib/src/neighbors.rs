//! Radius queries over the implicit, infinite star field.
//!
//! A query enumerates the cube of sectors that could hold a system within
//! range, regenerates each one, and keeps the systems whose exact distance to
//! the origin is within the radius. Both endpoints of a pair recompute the
//! same positions, so the relation is symmetric.

use serde::Serialize;

use crate::coordinates::{GalacticPosition, StarSystemCoordinates, SystemAddress};
use crate::error::Result;
use crate::galaxy::Galaxy;

/// A system found within range of a query origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StellarNeighbor {
    pub address: SystemAddress,
    pub coordinates: StarSystemCoordinates,
    pub position: GalacticPosition,
    /// Straight-line distance to the origin in light years.
    pub distance: f64,
}

/// Every system within `radius` of `origin`, the origin itself excluded.
///
/// The origin is the system whose address `origin` resolves to; when the
/// coordinates match no system, nothing is excluded. Results are ordered by
/// sector (x outermost, then y, then z) and by index within a sector. A
/// non-positive or non-finite radius yields nothing.
pub fn neighbor_systems(
    galaxy: &Galaxy,
    origin: &StarSystemCoordinates,
    radius: f64,
) -> Vec<StellarNeighbor> {
    let origin_address = galaxy.coordinates_to_address(origin);
    collect_neighbors(galaxy, origin_address, origin, radius)
}

/// Radius query around a system whose address is already known.
pub(crate) fn collect_neighbors(
    galaxy: &Galaxy,
    origin_address: Option<SystemAddress>,
    origin: &StarSystemCoordinates,
    radius: f64,
) -> Vec<StellarNeighbor> {
    if !radius.is_finite() || radius <= 0.0 {
        return Vec::new();
    }

    let sector_size = galaxy.sector_size();
    let origin_position = origin.galactic_position(sector_size);
    let origin_sector = origin.sector();
    let sector_radius = (radius / sector_size).ceil() as i64;

    let mut neighbors = Vec::new();
    for dx in -sector_radius..=sector_radius {
        for dy in -sector_radius..=sector_radius {
            for dz in -sector_radius..=sector_radius {
                let sector = galaxy.sector(origin_sector.offset(dx, dy, dz));
                for (address, coordinates) in sector.systems() {
                    if Some(address) == origin_address {
                        continue;
                    }

                    let position = coordinates.galactic_position(sector_size);
                    let distance = position.distance_to(&origin_position);
                    if distance <= radius {
                        neighbors.push(StellarNeighbor {
                            address,
                            coordinates,
                            position,
                            distance,
                        });
                    }
                }
            }
        }
    }

    neighbors
}

impl Galaxy {
    /// Every system within `radius` of the system at `origin`.
    pub fn neighbors(&self, origin: &SystemAddress, radius: f64) -> Result<Vec<StellarNeighbor>> {
        let coordinates = self.address_to_coordinates(origin)?;
        Ok(collect_neighbors(self, Some(*origin), &coordinates, radius))
    }
}
