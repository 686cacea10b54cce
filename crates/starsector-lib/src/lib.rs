//! Star sector library entry points.
//!
//! This crate addresses, generates, and routes between procedurally defined
//! star systems without ever materializing the galaxy. Systems are identified
//! by a sector and an index; sectors are regenerated on demand from their
//! integer coordinates, and the incremental pathfinder expands the implicit
//! jump graph one system at a time. Higher-level consumers (CLI, game hosts)
//! should only depend on the items exported here.

#![deny(warnings)]

pub mod config;
pub mod coordinates;
pub mod density;
pub mod error;
pub mod galaxy;
pub mod neighbors;
pub mod pathfinder;
pub mod rng;
pub mod routing;
pub mod sector;

pub use config::GalaxyConfig;
pub use coordinates::{
    GalacticPosition, LocalOffset, SectorCoordinates, StarSystemCoordinates, SystemAddress,
};
pub use density::{DensityField, NoiseDensity, UniformDensity};
pub use error::{Error, Result};
pub use galaxy::{CustomSystem, Galaxy, SectorSystems};
pub use neighbors::{neighbor_systems, StellarNeighbor};
pub use pathfinder::{SearchNode, SearchStatus, StellarPathfinder};
pub use routing::{plan_route, RoutePlan, RouteRequest};
pub use sector::StarSector;
