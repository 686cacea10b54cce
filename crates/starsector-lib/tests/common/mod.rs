#![allow(dead_code)]

use starsector_lib::{
    Galaxy, GalaxyConfig, LocalOffset, SectorCoordinates, StarSystemCoordinates, SystemAddress,
    UniformDensity,
};

/// Sector size used by the synthetic galaxies below.
pub const SECTOR_SIZE: f64 = 5.0;

/// Galaxy with no generated stars; tests populate it with custom systems.
pub fn empty_galaxy() -> Galaxy {
    let config = GalaxyConfig {
        sector_size: SECTOR_SIZE,
        ..GalaxyConfig::default()
    };
    Galaxy::with_density(config, UniformDensity(0.0)).expect("valid config")
}

/// Register a system at the given sector and local offset.
pub fn place(
    galaxy: &mut Galaxy,
    name: &str,
    sector: (i64, i64, i64),
    local: (f64, f64, f64),
) -> SystemAddress {
    galaxy.register_custom_system(
        name,
        StarSystemCoordinates::new(
            SectorCoordinates::new(sector.0, sector.1, sector.2),
            LocalOffset::new(local.0, local.1, local.2),
        ),
    )
    .expect("valid custom system")
}

/// Sector (0,0,0) holds a start and two off-axis systems; an intermediate in
/// (1,0,0) and the target in (2,0,0) sit on the x axis, 5 ly apart.
pub struct Corridor {
    pub galaxy: Galaxy,
    pub start: SystemAddress,
    pub above: SystemAddress,
    pub below: SystemAddress,
    pub intermediate: SystemAddress,
    pub target: SystemAddress,
}

pub fn corridor() -> Corridor {
    let mut galaxy = empty_galaxy();
    let start = place(&mut galaxy, "Start", (0, 0, 0), (0.0, 0.0, 0.0));
    let above = place(&mut galaxy, "Above", (0, 0, 0), (0.0, 0.4, 0.0));
    let below = place(&mut galaxy, "Below", (0, 0, 0), (0.0, -0.4, 0.0));
    let intermediate = place(&mut galaxy, "Relay", (1, 0, 0), (0.0, 0.0, 0.0));
    let target = place(&mut galaxy, "Target", (2, 0, 0), (0.0, 0.0, 0.0));
    Corridor {
        galaxy,
        start,
        above,
        below,
        intermediate,
        target,
    }
}

/// Dense galaxy with a uniform density, for property tests over generated stars.
pub fn uniform_galaxy() -> Galaxy {
    Galaxy::with_density(GalaxyConfig::default(), UniformDensity(1.0)).expect("valid config")
}
