//! Galaxy facade: sector listing and address conversion.
//!
//! Generation is authoritative. [`Galaxy::address_to_coordinates`] reads the
//! generated offset at an index, while [`Galaxy::coordinates_to_address`] is a
//! best-effort reverse lookup that only succeeds on an exact floating-point
//! match against the regenerated sector.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::config::GalaxyConfig;
use crate::coordinates::{
    galactic_position, GalacticPosition, LocalOffset, SectorCoordinates, StarSystemCoordinates,
    SystemAddress,
};
use crate::density::{DensityField, NoiseDensity};
use crate::error::{Error, Result};
use crate::sector::StarSector;

/// A hand-authored system placed into a sector after the generated ones.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomSystem {
    pub name: String,
    pub coordinates: StarSystemCoordinates,
}

/// Every system of one sector: generated stars first, then custom systems in
/// registration order. A system's address index is its position in this list.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorSystems {
    coordinates: SectorCoordinates,
    generated_count: usize,
    local_positions: Vec<LocalOffset>,
}

impl SectorSystems {
    pub fn coordinates(&self) -> SectorCoordinates {
        self.coordinates
    }

    pub fn len(&self) -> usize {
        self.local_positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.local_positions.is_empty()
    }

    /// Number of systems produced by the generator (custom systems excluded).
    pub fn generated_count(&self) -> usize {
        self.generated_count
    }

    pub fn local_positions(&self) -> &[LocalOffset] {
        &self.local_positions
    }

    /// Iterate `(address, coordinates)` pairs in index order.
    pub fn systems(&self) -> impl Iterator<Item = (SystemAddress, StarSystemCoordinates)> + '_ {
        self.local_positions
            .iter()
            .enumerate()
            .map(move |(index, local)| {
                (
                    SystemAddress::in_sector(self.coordinates, index as u32),
                    StarSystemCoordinates::new(self.coordinates, *local),
                )
            })
    }
}

/// Procedural galaxy: configuration, density field, and custom systems.
pub struct Galaxy {
    config: GalaxyConfig,
    density: Box<dyn DensityField>,
    custom_systems: HashMap<SectorCoordinates, Vec<CustomSystem>>,
}

impl Galaxy {
    /// Build a galaxy using the noise density described by `config`.
    pub fn new(config: GalaxyConfig) -> Result<Self> {
        let density = NoiseDensity::from_config(&config);
        Self::with_density(config, density)
    }

    /// Build a galaxy with a caller-supplied density field.
    pub fn with_density(config: GalaxyConfig, density: impl DensityField + 'static) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            density: Box::new(density),
            custom_systems: HashMap::new(),
        })
    }

    pub fn config(&self) -> &GalaxyConfig {
        &self.config
    }

    pub fn sector_size(&self) -> f64 {
        self.config.sector_size
    }

    /// Run the generator for one sector, ignoring custom systems.
    pub fn generate_sector(&self, coordinates: SectorCoordinates) -> StarSector {
        StarSector::generate(coordinates, &self.config, self.density.as_ref())
    }

    /// All systems of a sector, generated then custom.
    pub fn sector(&self, coordinates: SectorCoordinates) -> SectorSystems {
        let generated = self.generate_sector(coordinates);
        let generated_count = generated.star_count();
        let mut local_positions = generated.local_positions().to_vec();

        if let Some(customs) = self.custom_systems.get(&coordinates) {
            local_positions.extend(customs.iter().map(|custom| custom.coordinates.local_offset()));
        }

        SectorSystems {
            coordinates,
            generated_count,
            local_positions,
        }
    }

    /// Register a hand-authored system and return the address it resolves to.
    ///
    /// The local offset must be finite and inside `[-0.5, 0.5]` on every axis,
    /// and no other system may already sit at exactly the same coordinates.
    pub fn register_custom_system(
        &mut self,
        name: impl Into<String>,
        coordinates: StarSystemCoordinates,
    ) -> Result<SystemAddress> {
        let local = coordinates.local_offset();
        if !local.is_within_sector() {
            return Err(Error::InvalidLocalOffset {
                x: local.x,
                y: local.y,
                z: local.z,
            });
        }
        if let Some(existing) = self.coordinates_to_address(&coordinates) {
            return Err(Error::DuplicateSystem { existing });
        }

        let sector = coordinates.sector();
        let generated_count = self.generate_sector(sector).star_count();
        let customs = self.custom_systems.entry(sector).or_default();
        customs.push(CustomSystem {
            name: name.into(),
            coordinates,
        });

        let address = SystemAddress::in_sector(sector, (generated_count + customs.len() - 1) as u32);
        debug!(%address, "registered custom system");
        Ok(address)
    }

    /// Name of the custom system at `address`, if it is one.
    pub fn custom_system_name(&self, address: &SystemAddress) -> Option<&str> {
        let generated_count = self.generate_sector(address.sector()).star_count();
        let offset = (address.index as usize).checked_sub(generated_count)?;
        self.custom_systems
            .get(&address.sector())
            .and_then(|customs| customs.get(offset))
            .map(|custom| custom.name.as_str())
    }

    /// Resolve an address into coordinates.
    ///
    /// Fails with [`Error::StarIndexOutOfRange`] when the index is not below
    /// the sector's system count.
    pub fn address_to_coordinates(&self, address: &SystemAddress) -> Result<StarSystemCoordinates> {
        let sector = self.sector(address.sector());
        let local = sector
            .local_positions()
            .get(address.index as usize)
            .copied()
            .ok_or(Error::StarIndexOutOfRange {
                address: *address,
                star_count: sector.len(),
            })?;
        Ok(StarSystemCoordinates::new(sector.coordinates(), local))
    }

    /// Find the address whose generated offset exactly equals the given one.
    pub fn coordinates_to_address(&self, coordinates: &StarSystemCoordinates) -> Option<SystemAddress> {
        let target = coordinates.local_offset();
        let sector = self.sector(coordinates.sector());
        sector
            .local_positions()
            .iter()
            .position(|local| local.x == target.x && local.y == target.y && local.z == target.z)
            .map(|index| SystemAddress::in_sector(coordinates.sector(), index as u32))
    }

    /// Galactic position of the system at `address`.
    pub fn galactic_position(&self, address: &SystemAddress) -> Result<GalacticPosition> {
        let coordinates = self.address_to_coordinates(address)?;
        Ok(galactic_position(
            coordinates.sector(),
            coordinates.local_offset(),
            self.config.sector_size,
        ))
    }

    /// Whether the system lies within the human bubble around the origin.
    pub fn is_in_human_bubble(&self, coordinates: &StarSystemCoordinates) -> bool {
        coordinates
            .galactic_position(self.config.sector_size)
            .length()
            < self.config.human_bubble_radius
    }
}

impl fmt::Debug for Galaxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Galaxy")
            .field("config", &self.config)
            .field(
                "custom_systems",
                &self.custom_systems.values().map(Vec::len).sum::<usize>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::UniformDensity;

    fn empty_galaxy() -> Galaxy {
        Galaxy::with_density(GalaxyConfig::default(), UniformDensity(0.0)).expect("valid config")
    }

    #[test]
    fn out_of_range_index_is_an_error() {
        let galaxy = empty_galaxy();
        let error = galaxy
            .address_to_coordinates(&SystemAddress::new(0, 0, 0, 0))
            .expect_err("empty sector");
        assert!(matches!(
            error,
            Error::StarIndexOutOfRange { star_count: 0, .. }
        ));
    }

    #[test]
    fn custom_systems_follow_generated_ones() {
        let mut galaxy = empty_galaxy();
        let coordinates = StarSystemCoordinates::new(
            SectorCoordinates::new(0, 0, 0),
            LocalOffset::new(0.0, 0.0, 0.0),
        );
        let address = galaxy
            .register_custom_system("Sol", coordinates)
            .expect("valid custom system");

        assert_eq!(address, SystemAddress::new(0, 0, 0, 0));
        assert_eq!(galaxy.custom_system_name(&address), Some("Sol"));
        assert_eq!(galaxy.coordinates_to_address(&coordinates), Some(address));
        assert!(galaxy.is_in_human_bubble(&coordinates));
    }

    #[test]
    fn inexact_offsets_do_not_resolve() {
        let mut galaxy = empty_galaxy();
        let sector = SectorCoordinates::new(2, 0, 0);
        galaxy
            .register_custom_system(
                "Anchor",
                StarSystemCoordinates::new(sector, LocalOffset::new(0.1, 0.2, 0.3)),
            )
            .expect("valid custom system");
        let nudged = StarSystemCoordinates::new(sector, LocalOffset::new(0.1, 0.2, 0.300001));
        assert_eq!(galaxy.coordinates_to_address(&nudged), None);
    }

    #[test]
    fn duplicate_coordinates_are_rejected() {
        let mut galaxy = empty_galaxy();
        let coordinates = StarSystemCoordinates::new(
            SectorCoordinates::new(0, 0, 0),
            LocalOffset::new(0.1, 0.1, 0.1),
        );
        let first = galaxy
            .register_custom_system("First", coordinates)
            .expect("valid custom system");

        let error = galaxy
            .register_custom_system("Second", coordinates)
            .expect_err("same coordinates");
        assert!(matches!(error, Error::DuplicateSystem { existing } if existing == first));
        assert_eq!(galaxy.sector(SectorCoordinates::new(0, 0, 0)).len(), 1);
    }

    #[test]
    fn duplicate_of_a_generated_star_is_rejected() {
        let mut galaxy =
            Galaxy::with_density(GalaxyConfig::default(), UniformDensity(1.0)).expect("valid config");
        let (address, coordinates) = (0..64)
            .find_map(|x| galaxy.sector(SectorCoordinates::new(x, 0, 0)).systems().next())
            .expect("a populated sector");

        let error = galaxy
            .register_custom_system("Shadow", coordinates)
            .expect_err("collides with a generated star");
        assert!(matches!(error, Error::DuplicateSystem { existing } if existing == address));
    }

    #[test]
    fn offsets_outside_the_sector_are_rejected() {
        let mut galaxy = empty_galaxy();
        for local in [
            LocalOffset::new(1.9, 0.0, 0.0),
            LocalOffset::new(0.0, -0.75, 0.0),
            LocalOffset::new(0.0, 0.0, f64::NAN),
            LocalOffset::new(f64::NEG_INFINITY, 0.0, 0.0),
        ] {
            let coordinates = StarSystemCoordinates::new(SectorCoordinates::new(0, 0, 0), local);
            let error = galaxy
                .register_custom_system("Stray", coordinates)
                .expect_err("offset outside the sector");
            assert!(matches!(error, Error::InvalidLocalOffset { .. }));
        }
        assert!(galaxy.sector(SectorCoordinates::new(0, 0, 0)).is_empty());
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = GalaxyConfig {
            sector_size: -1.0,
            ..GalaxyConfig::default()
        };
        assert!(Galaxy::new(config).is_err());
    }
}
