//! `locate` subcommand: expand an address into coordinates.

use anyhow::{Context, Result};
use clap::Args;

use starsector_lib::{Galaxy, SystemAddress};

use crate::commands::emit;
use crate::output::{render_system_text, OutputFormat, SystemReport};

#[derive(Args, Debug, Clone)]
pub struct LocateArgs {
    /// System address as `sector_x:sector_y:sector_z:index`.
    #[arg(allow_hyphen_values = true)]
    pub address: SystemAddress,
}

pub fn run(galaxy: &Galaxy, args: &LocateArgs, format: OutputFormat) -> Result<()> {
    let address = args.address;
    let coordinates = galaxy
        .address_to_coordinates(&address)
        .with_context(|| format!("failed to locate system {address}"))?;

    let report = SystemReport {
        address,
        name: galaxy.custom_system_name(&address).map(str::to_string),
        coordinates,
        galactic_position: coordinates.galactic_position(galaxy.sector_size()),
        in_human_bubble: galaxy.is_in_human_bubble(&coordinates),
    };
    emit(format, &report, render_system_text)
}
