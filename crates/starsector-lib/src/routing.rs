//! Blocking route planning on top of the incremental pathfinder.
//!
//! Hosts that can afford to wait use [`plan_route`]; hosts that need to
//! interleave work drive a [`StellarPathfinder`] themselves.

use serde::Serialize;
use tracing::{info, warn};

use crate::coordinates::SystemAddress;
use crate::error::{Error, Result};
use crate::galaxy::Galaxy;
use crate::pathfinder::{SearchStatus, StellarPathfinder};

/// Default cap on pathfinder iterations for a single route.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// High-level route planning request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    pub start: SystemAddress,
    pub target: SystemAddress,
    /// Maximum length of a single hop in light years.
    pub jump_range: f64,
    /// Iterations allowed before giving up.
    pub max_iterations: usize,
}

impl RouteRequest {
    /// Request using the galaxy's default jump range.
    pub fn new(galaxy: &Galaxy, start: SystemAddress, target: SystemAddress) -> Self {
        Self {
            start,
            target,
            jump_range: galaxy.config().default_jump_range,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    pub fn with_jump_range(mut self, jump_range: f64) -> Self {
        self.jump_range = jump_range;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub start: SystemAddress,
    pub target: SystemAddress,
    pub jump_range: f64,
    pub steps: Vec<SystemAddress>,
    /// Sum of hop lengths in light years.
    pub total_distance: f64,
    /// Systems expanded by the search.
    pub iterations: usize,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Drive a pathfinder to completion and return the route it found.
pub fn plan_route(galaxy: &Galaxy, request: &RouteRequest) -> Result<RoutePlan> {
    let mut pathfinder = StellarPathfinder::new(galaxy);
    pathfinder.init(request.start, request.target, request.jump_range)?;

    loop {
        match pathfinder.update()? {
            SearchStatus::Found => break,
            SearchStatus::Exhausted => {
                warn!(
                    start = %request.start,
                    target = %request.target,
                    jump_range = request.jump_range,
                    explored = pathfinder.iterations(),
                    "target unreachable within jump range"
                );
                return Err(Error::RouteUnreachable {
                    start: request.start,
                    target: request.target,
                    explored: pathfinder.iterations(),
                });
            }
            SearchStatus::Searching if pathfinder.iterations() >= request.max_iterations => {
                return Err(Error::IterationBudgetExhausted {
                    start: request.start,
                    target: request.target,
                    iterations: pathfinder.iterations(),
                });
            }
            SearchStatus::Searching => {}
        }
    }

    let steps = pathfinder.path()?;
    let total_distance = pathfinder.path_distance().unwrap_or_default();

    info!(
        start = %request.start,
        target = %request.target,
        hops = steps.len().saturating_sub(1),
        distance = total_distance,
        iterations = pathfinder.iterations(),
        "route planned"
    );

    Ok(RoutePlan {
        start: request.start,
        target: request.target,
        jump_range: request.jump_range,
        steps,
        total_distance,
        iterations: pathfinder.iterations(),
    })
}
