use std::path::PathBuf;

use thiserror::Error;

use crate::coordinates::SystemAddress;

/// Convenient result alias for the star sector library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when an address points past the systems of its sector.
    #[error("star index {} is out of range for sector {}:{}:{} ({star_count} systems)", .address.index, .address.sector_x, .address.sector_y, .address.sector_z)]
    StarIndexOutOfRange {
        address: SystemAddress,
        star_count: usize,
    },

    /// Raised when the pathfinder is driven before `init` was called.
    #[error("pathfinder has not been initialized")]
    PathfinderNotInitialized,

    /// Raised when a path is requested before the search reached the target.
    #[error("no path found between {start} and {target}")]
    PathNotFound {
        start: SystemAddress,
        target: SystemAddress,
    },

    /// Raised when the predecessor chain cannot be walked back to the start.
    #[error("predecessor chain is broken at {address}")]
    BrokenPathChain { address: SystemAddress },

    /// Raised when the routing facade runs out of iterations.
    #[error("route search between {start} and {target} gave up after {iterations} iterations")]
    IterationBudgetExhausted {
        start: SystemAddress,
        target: SystemAddress,
        iterations: usize,
    },

    /// Raised when every reachable system was explored without finding the target.
    #[error("{target} is unreachable from {start} ({explored} systems explored)")]
    RouteUnreachable {
        start: SystemAddress,
        target: SystemAddress,
        explored: usize,
    },

    /// Raised when a galaxy configuration fails validation.
    #[error("invalid galaxy configuration: {message}")]
    InvalidConfig { message: String },

    /// Raised when a configuration file cannot be read or parsed.
    #[error("failed to load galaxy configuration from {path}: {message}")]
    ConfigLoad { path: PathBuf, message: String },

    /// Raised when a custom system's local offset is not finite or leaves `[-0.5, 0.5]`.
    #[error("local offset ({x}, {y}, {z}) must be finite and within [-0.5, 0.5] on every axis")]
    InvalidLocalOffset { x: f64, y: f64, z: f64 },

    /// Raised when a custom system would sit exactly on an existing system.
    #[error("a system already exists at these coordinates ({existing})")]
    DuplicateSystem { existing: SystemAddress },

    /// Raised when a textual system address cannot be parsed.
    #[error("invalid system address '{input}'; expected sector_x:sector_y:sector_z:index")]
    InvalidAddress { input: String },

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON errors.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
