//! Galaxy construction from command-line options.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use starsector_lib::{Galaxy, GalaxyConfig};

/// Options shared by every subcommand that shape the galaxy.
#[derive(Debug, Clone, Default)]
pub struct GalaxyOptions {
    /// JSON configuration file; defaults apply when absent.
    pub config: Option<PathBuf>,
    /// Universe seed override, applied after the file and the environment.
    pub seed: Option<u64>,
}

/// Resolve the effective configuration.
///
/// Precedence, lowest first: built-in defaults or the config file,
/// `STARSECTOR_*` environment variables, then `--seed`.
pub fn resolve_config(options: &GalaxyOptions) -> Result<GalaxyConfig> {
    let config = match &options.config {
        Some(path) => GalaxyConfig::from_path(path)?,
        None => GalaxyConfig::default(),
    };

    let mut config = config
        .with_env_overrides()
        .context("failed to apply environment overrides")?;

    if let Some(seed) = options.seed {
        config.universe_seed = seed;
    }

    debug!(
        sector_size = config.sector_size,
        stars_per_sector = config.stars_per_sector,
        universe_seed = config.universe_seed,
        "resolved galaxy configuration"
    );

    Ok(config)
}

/// Build the galaxy the subcommands operate on.
pub fn load_galaxy(options: &GalaxyOptions) -> Result<Galaxy> {
    let config = resolve_config(options)?;
    Galaxy::new(config).context("failed to construct galaxy")
}
