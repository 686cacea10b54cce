//! `neighbors` subcommand: systems within a radius of an address.

use anyhow::{Context, Result};
use clap::Args;

use starsector_lib::{Galaxy, SystemAddress};

use crate::commands::emit;
use crate::output::{render_neighbors_text, NeighborsReport, OutputFormat};

#[derive(Args, Debug, Clone)]
pub struct NeighborsArgs {
    /// Origin system address.
    #[arg(allow_hyphen_values = true)]
    pub address: SystemAddress,
    /// Search radius in light years; defaults to the configured jump range.
    #[arg(long)]
    pub radius: Option<f64>,
}

pub fn run(galaxy: &Galaxy, args: &NeighborsArgs, format: OutputFormat) -> Result<()> {
    let radius = args.radius.unwrap_or(galaxy.config().default_jump_range);
    let neighbors = galaxy
        .neighbors(&args.address, radius)
        .with_context(|| format!("failed to query neighbors of {}", args.address))?;

    let report = NeighborsReport {
        origin: args.address,
        radius,
        neighbors,
    };
    emit(format, &report, render_neighbors_text)
}
