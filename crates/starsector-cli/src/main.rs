use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use starsector_cli::commands::{locate, neighbors, resolve, route, sector};
use starsector_cli::context::{load_galaxy, GalaxyOptions};
use starsector_cli::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Procedural star sector explorer and route planner")]
struct Cli {
    /// JSON galaxy configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the universe seed.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the star systems generated in a sector.
    Sector(sector::SectorArgs),
    /// Show the coordinates of a system address.
    Locate(locate::LocateArgs),
    /// Find the system at exact sector and local coordinates.
    Resolve(resolve::ResolveArgs),
    /// List systems within a radius of a system.
    Neighbors(neighbors::NeighborsArgs),
    /// Plan a jump route between two systems.
    Route(route::RouteArgs),
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let galaxy = load_galaxy(&GalaxyOptions {
        config: cli.config,
        seed: cli.seed,
    })?;

    match &cli.command {
        Command::Sector(args) => sector::run(&galaxy, args, cli.format),
        Command::Locate(args) => locate::run(&galaxy, args, cli.format),
        Command::Resolve(args) => resolve::run(&galaxy, args, cli.format),
        Command::Neighbors(args) => neighbors::run(&galaxy, args, cli.format),
        Command::Route(args) => route::run(&galaxy, args, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
