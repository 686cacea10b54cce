//! `route` subcommand: plan a route between two systems.

use anyhow::{Context, Result};
use clap::Args;

use starsector_lib::{plan_route, Galaxy, RouteRequest, SystemAddress};

use crate::output::{render_json, render_route_text, OutputFormat};

/// Arguments for the route command.
#[derive(Args, Debug, Clone)]
pub struct RouteArgs {
    /// Starting system address.
    #[arg(long = "from", allow_hyphen_values = true)]
    pub from: SystemAddress,
    /// Destination system address.
    #[arg(long = "to", allow_hyphen_values = true)]
    pub to: SystemAddress,
    /// Maximum jump distance in light years; defaults to the configured jump range.
    #[arg(long)]
    pub jump_range: Option<f64>,
    /// Give up after this many explored systems.
    #[arg(long)]
    pub max_iterations: Option<usize>,
}

impl RouteArgs {
    /// Convert CLI args to a library RouteRequest.
    pub fn to_request(&self, galaxy: &Galaxy) -> RouteRequest {
        let mut request = RouteRequest::new(galaxy, self.from, self.to);
        if let Some(jump_range) = self.jump_range {
            request = request.with_jump_range(jump_range);
        }
        if let Some(max_iterations) = self.max_iterations {
            request = request.with_max_iterations(max_iterations);
        }
        request
    }
}

pub fn run(galaxy: &Galaxy, args: &RouteArgs, format: OutputFormat) -> Result<()> {
    let request = args.to_request(galaxy);
    let plan = plan_route(galaxy, &request)
        .with_context(|| format!("failed to plan route from {} to {}", args.from, args.to))?;

    match format {
        OutputFormat::Json => println!("{}", render_json(&plan)?),
        OutputFormat::Text => {
            let positions = plan
                .steps
                .iter()
                .map(|step| galaxy.galactic_position(step))
                .collect::<starsector_lib::Result<Vec<_>>>()?;
            let hops: Vec<f64> = positions
                .windows(2)
                .map(|pair| pair[0].distance_to(&pair[1]))
                .collect();
            print!("{}", render_route_text(&plan, &hops));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use starsector_lib::GalaxyConfig;

    #[test]
    fn overrides_apply_on_top_of_galaxy_defaults() {
        let galaxy = Galaxy::new(GalaxyConfig::default()).expect("valid config");
        let from = SystemAddress::new(0, 0, 0, 0);
        let to = SystemAddress::new(1, 0, 0, 0);

        let args = RouteArgs {
            from,
            to,
            jump_range: None,
            max_iterations: None,
        };
        let request = args.to_request(&galaxy);
        assert_eq!(request.jump_range, galaxy.config().default_jump_range);

        let args = RouteArgs {
            jump_range: Some(42.0),
            max_iterations: Some(7),
            ..args
        };
        let request = args.to_request(&galaxy);
        assert_eq!(request.jump_range, 42.0);
        assert_eq!(request.max_iterations, 7);
    }
}
