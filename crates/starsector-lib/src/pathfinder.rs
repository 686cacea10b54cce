//! Incremental A* search between star systems.
//!
//! The graph is never materialised: a system's edges are the systems returned
//! by a radius query of `jump_range` around it, generated when the system is
//! expanded. One call to [`StellarPathfinder::update`] performs exactly one
//! A* iteration so a host can spread a search over many frames and abandon it
//! by simply not calling `update` again.
//!
//! # Example
//!
//! ```no_run
//! use starsector_lib::{Galaxy, GalaxyConfig, SearchStatus, StellarPathfinder, SystemAddress};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let galaxy = Galaxy::new(GalaxyConfig::default())?;
//! let mut pathfinder = StellarPathfinder::new(&galaxy);
//! pathfinder.init(SystemAddress::new(0, 0, 0, 0), SystemAddress::new(3, 0, 0, 0), 10.0)?;
//!
//! while pathfinder.update()? == SearchStatus::Searching {
//!     // interleave other per-frame work here
//! }
//! if pathfinder.has_found_path() {
//!     println!("{} hops", pathfinder.path()?.len() - 1);
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::{HashMap, HashSet, VecDeque};

use serde::Serialize;
use tracing::{debug, trace};

use crate::coordinates::{GalacticPosition, StarSystemCoordinates, SystemAddress};
use crate::error::{Error, Result};
use crate::galaxy::Galaxy;
use crate::neighbors::collect_neighbors;

/// Where a search stands after the latest `update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// Frontier still has systems to expand.
    Searching,
    /// The target was expanded; [`StellarPathfinder::path`] is available.
    Found,
    /// The frontier emptied without reaching the target.
    Exhausted,
}

/// A system on the frontier or in the closed set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchNode {
    pub address: SystemAddress,
    pub coordinates: StarSystemCoordinates,
    pub position: GalacticPosition,
    /// Best known cumulative distance from the start.
    pub g: f64,
    /// Straight-line distance to the target.
    pub h: f64,
}

impl SearchNode {
    pub fn estimate(&self) -> f64 {
        self.g + self.h
    }
}

#[derive(Debug, Clone, Copy)]
struct Endpoint {
    address: SystemAddress,
    coordinates: StarSystemCoordinates,
    position: GalacticPosition,
}

/// Resumable A* search over the star field of one [`Galaxy`].
///
/// Closed set and predecessor map are keyed by the full address, so distinct
/// systems never alias even when their [`SystemAddress::hash`] collides.
#[derive(Debug)]
pub struct StellarPathfinder<'g> {
    galaxy: &'g Galaxy,
    start: Option<Endpoint>,
    target: Option<Endpoint>,
    jump_range: f64,
    open: VecDeque<SearchNode>,
    closed: HashSet<SystemAddress>,
    predecessors: HashMap<SystemAddress, SystemAddress>,
    seeded: bool,
    status: SearchStatus,
    iterations: usize,
    last_explored: Option<SearchNode>,
}

impl<'g> StellarPathfinder<'g> {
    pub fn new(galaxy: &'g Galaxy) -> Self {
        Self {
            galaxy,
            start: None,
            target: None,
            jump_range: galaxy.config().default_jump_range,
            open: VecDeque::new(),
            closed: HashSet::new(),
            predecessors: HashMap::new(),
            seeded: false,
            status: SearchStatus::Searching,
            iterations: 0,
            last_explored: None,
        }
    }

    /// Start a new search, discarding any previous state.
    ///
    /// Fails if either address does not exist in the galaxy.
    pub fn init(
        &mut self,
        start: SystemAddress,
        target: SystemAddress,
        jump_range: f64,
    ) -> Result<()> {
        let start = self.endpoint(start)?;
        let target = self.endpoint(target)?;

        self.open.clear();
        self.closed.clear();
        self.predecessors.clear();
        self.seeded = false;
        self.status = SearchStatus::Searching;
        self.iterations = 0;
        self.last_explored = None;
        self.start = Some(start);
        self.target = Some(target);
        self.jump_range = jump_range;

        debug!(
            start = %start.address,
            target = %target.address,
            jump_range,
            straight_line = start.position.distance_to(&target.position),
            "initialized stellar pathfinder"
        );
        Ok(())
    }

    fn endpoint(&self, address: SystemAddress) -> Result<Endpoint> {
        let coordinates = self.galaxy.address_to_coordinates(&address)?;
        Ok(Endpoint {
            address,
            coordinates,
            position: coordinates.galactic_position(self.galaxy.sector_size()),
        })
    }

    fn endpoints(&self) -> Result<(Endpoint, Endpoint)> {
        match (self.start, self.target) {
            (Some(start), Some(target)) => Ok((start, target)),
            _ => Err(Error::PathfinderNotInitialized),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.start.is_some() && self.target.is_some()
    }

    /// Run one A* iteration.
    ///
    /// Once the search is `Found` or `Exhausted` further calls do nothing and
    /// return the same status.
    pub fn update(&mut self) -> Result<SearchStatus> {
        let (start, target) = self.endpoints()?;
        if self.status != SearchStatus::Searching {
            return Ok(self.status);
        }

        if !self.seeded {
            self.seeded = true;
            self.open.push_back(SearchNode {
                address: start.address,
                coordinates: start.coordinates,
                position: start.position,
                g: 0.0,
                h: start.position.distance_to(&target.position),
            });
        }

        let Some(current) = self.open.pop_front() else {
            return Ok(self.exhaust());
        };

        self.closed.insert(current.address);
        self.iterations += 1;
        self.last_explored = Some(current);

        trace!(
            iteration = self.iterations,
            node = %current.address,
            g = current.g,
            h = current.h,
            "expanding system"
        );

        if current.address == target.address {
            self.status = SearchStatus::Found;
            debug!(
                iterations = self.iterations,
                distance = current.g,
                "stellar path found"
            );
            return Ok(self.status);
        }

        let neighbors = collect_neighbors(
            self.galaxy,
            Some(current.address),
            &current.coordinates,
            self.jump_range,
        );
        for neighbor in neighbors {
            if self.closed.contains(&neighbor.address) {
                continue;
            }

            let g = current.g + neighbor.distance;
            let h = neighbor.position.distance_to(&target.position);

            if let Some(open) = self
                .open
                .iter_mut()
                .find(|node| node.address == neighbor.address)
            {
                if g < open.g {
                    open.g = g;
                    open.h = h;
                    self.predecessors.insert(neighbor.address, current.address);
                }
            } else {
                self.open.push_back(SearchNode {
                    address: neighbor.address,
                    coordinates: neighbor.coordinates,
                    position: neighbor.position,
                    g,
                    h,
                });
                self.predecessors.insert(neighbor.address, current.address);
            }
        }

        // Stable sort: equal estimates keep their frontier order.
        self.open
            .make_contiguous()
            .sort_by(|a, b| a.estimate().total_cmp(&b.estimate()));

        if self.open.is_empty() {
            return Ok(self.exhaust());
        }
        Ok(self.status)
    }

    fn exhaust(&mut self) -> SearchStatus {
        self.status = SearchStatus::Exhausted;
        debug!(
            iterations = self.iterations,
            "stellar search exhausted without reaching the target"
        );
        self.status
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn has_found_path(&self) -> bool {
        self.status == SearchStatus::Found
    }

    /// Systems from start to target, both included.
    pub fn path(&self) -> Result<Vec<SystemAddress>> {
        let (start, target) = self.endpoints()?;
        if !self.has_found_path() {
            return Err(Error::PathNotFound {
                start: start.address,
                target: target.address,
            });
        }

        let mut path = vec![target.address];
        let mut current = target.address;
        while current != start.address {
            if path.len() > self.closed.len() {
                return Err(Error::BrokenPathChain { address: current });
            }
            current = *self
                .predecessors
                .get(&current)
                .ok_or(Error::BrokenPathChain { address: current })?;
            path.push(current);
        }

        path.reverse();
        Ok(path)
    }

    /// Cumulative distance of the found path.
    pub fn path_distance(&self) -> Option<f64> {
        if self.has_found_path() {
            self.last_explored.map(|node| node.g)
        } else {
            None
        }
    }

    /// Number of systems moved to the closed set since `init`.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Rough progress in `[0, 1]`: distance from the start to the last
    /// expanded system over the start-to-target distance.
    ///
    /// Not monotonic; it moves backward when the frontier explores away from
    /// the target.
    pub fn progress(&self) -> f64 {
        let (Ok((start, target)), Some(last)) = (self.endpoints(), self.last_explored) else {
            return 0.0;
        };

        let total = start.position.distance_to(&target.position);
        if total <= 0.0 {
            return 1.0;
        }
        (start.position.distance_to(&last.position) / total).clamp(0.0, 1.0)
    }

    pub fn last_explored(&self) -> Option<&SearchNode> {
        self.last_explored.as_ref()
    }

    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    pub fn closed_len(&self) -> usize {
        self.closed.len()
    }

    pub fn jump_range(&self) -> f64 {
        self.jump_range
    }

    pub fn start(&self) -> Option<SystemAddress> {
        self.start.map(|endpoint| endpoint.address)
    }

    pub fn target(&self) -> Option<SystemAddress> {
        self.target.map(|endpoint| endpoint.address)
    }
}
