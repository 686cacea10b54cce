//! `resolve` subcommand: find the address of exact coordinates.

use anyhow::{bail, Result};
use clap::Args;

use starsector_lib::{Galaxy, LocalOffset, SectorCoordinates, StarSystemCoordinates};

use crate::commands::{emit, parse_local, parse_sector};
use crate::output::{render_resolve_text, OutputFormat, ResolveReport};

#[derive(Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Sector as `x,y,z`.
    #[arg(long, value_parser = parse_sector, allow_hyphen_values = true)]
    pub sector: SectorCoordinates,
    /// Local offset inside the sector as `lx,ly,lz`.
    #[arg(long, value_parser = parse_local, allow_hyphen_values = true)]
    pub local: LocalOffset,
}

/// Matching is exact; a system is only found when every component is equal.
pub fn run(galaxy: &Galaxy, args: &ResolveArgs, format: OutputFormat) -> Result<()> {
    let coordinates = StarSystemCoordinates::new(args.sector, args.local);
    let report = ResolveReport {
        coordinates,
        address: galaxy.coordinates_to_address(&coordinates),
    };
    emit(format, &report, render_resolve_text)?;

    if report.address.is_none() {
        bail!("no system at sector {} with that local offset", args.sector);
    }
    Ok(())
}
