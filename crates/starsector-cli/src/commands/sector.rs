//! `sector` subcommand: list the systems of one sector.

use anyhow::Result;
use clap::Args;

use starsector_lib::{Galaxy, SectorCoordinates};

use crate::commands::emit;
use crate::output::{render_sector_text, OutputFormat, SectorReport, SystemReport};

#[derive(Args, Debug, Clone)]
pub struct SectorArgs {
    /// Sector X coordinate.
    #[arg(long, allow_hyphen_values = true)]
    pub x: i64,
    /// Sector Y coordinate.
    #[arg(long, allow_hyphen_values = true)]
    pub y: i64,
    /// Sector Z coordinate.
    #[arg(long, allow_hyphen_values = true)]
    pub z: i64,
}

pub fn build_report(galaxy: &Galaxy, coordinates: SectorCoordinates) -> SectorReport {
    let expected_star_count = galaxy.generate_sector(coordinates).expected_star_count();
    let systems = galaxy
        .sector(coordinates)
        .systems()
        .map(|(address, coordinates)| SystemReport {
            address,
            name: galaxy.custom_system_name(&address).map(str::to_string),
            coordinates,
            galactic_position: coordinates.galactic_position(galaxy.sector_size()),
            in_human_bubble: galaxy.is_in_human_bubble(&coordinates),
        })
        .collect();

    SectorReport {
        coordinates,
        expected_star_count,
        systems,
    }
}

pub fn run(galaxy: &Galaxy, args: &SectorArgs, format: OutputFormat) -> Result<()> {
    let report = build_report(galaxy, SectorCoordinates::new(args.x, args.y, args.z));
    emit(format, &report, render_sector_text)
}
