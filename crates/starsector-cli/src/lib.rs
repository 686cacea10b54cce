//! Star sector CLI library.
//!
//! This crate provides the command handlers, galaxy loading, and output
//! formatting behind the `starsector` binary.

pub mod commands;
pub mod context;
pub mod output;
