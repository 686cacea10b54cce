//! Handlers for the CLI subcommands.
//!
//! Each module owns one subcommand: its clap arguments and a `run` function
//! that queries the galaxy and prints a report. `main.rs` only parses and
//! dispatches.

pub mod locate;
pub mod neighbors;
pub mod resolve;
pub mod route;
pub mod sector;

use anyhow::Result;
use serde::Serialize;

use starsector_lib::{LocalOffset, SectorCoordinates};

use crate::output::{render_json, OutputFormat};

/// Print `report` as JSON or through `render_text`.
pub(crate) fn emit<T: Serialize>(
    format: OutputFormat,
    report: &T,
    render_text: impl FnOnce(&T) -> String,
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", render_json(report)?),
        OutputFormat::Text => print!("{}", render_text(report)),
    }
    Ok(())
}

fn parse_triple<T: std::str::FromStr>(input: &str) -> Result<(T, T, T), String> {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected three comma-separated values, got '{input}'"));
    };
    let parse = |value: &str| {
        value
            .parse::<T>()
            .map_err(|_| format!("'{value}' is not a valid number"))
    };
    Ok((parse(x)?, parse(y)?, parse(z)?))
}

/// Clap value parser for `x,y,z` sector coordinates.
pub fn parse_sector(input: &str) -> Result<SectorCoordinates, String> {
    let (x, y, z) = parse_triple::<i64>(input)?;
    Ok(SectorCoordinates::new(x, y, z))
}

/// Clap value parser for `lx,ly,lz` local offsets.
pub fn parse_local(input: &str) -> Result<LocalOffset, String> {
    let (x, y, z) = parse_triple::<f64>(input)?;
    if [x, y, z].iter().any(|value| !value.is_finite()) {
        return Err(format!("local offset '{input}' must be finite"));
    }
    Ok(LocalOffset::new(x, y, z))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_negative_sectors() {
        assert_eq!(
            parse_sector("-3, 0,12").expect("valid"),
            SectorCoordinates::new(-3, 0, 12)
        );
    }

    #[test]
    fn rejects_wrong_arity_and_garbage() {
        assert!(parse_sector("1,2").is_err());
        assert!(parse_sector("1,2,3,4").is_err());
        assert!(parse_sector("1,two,3").is_err());
        assert!(parse_local("0.1,NaN,0.2").is_err());
    }

    #[test]
    fn parses_local_offsets() {
        assert_eq!(
            parse_local("0.25,-0.5,0").expect("valid"),
            LocalOffset::new(0.25, -0.5, 0.0)
        );
    }
}
