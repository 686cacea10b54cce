//! Output formatting for command results.
//!
//! Every command produces a serializable report. `json` prints it verbatim;
//! `text` renders a compact human-friendly view.

use std::fmt::Write as _;

use clap::ValueEnum;
use serde::Serialize;

use starsector_lib::{
    GalacticPosition, RoutePlan, SectorCoordinates, StarSystemCoordinates, StellarNeighbor,
    SystemAddress,
};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A single star system as reported by `sector` and `locate`.
#[derive(Debug, Clone, Serialize)]
pub struct SystemReport {
    pub address: SystemAddress,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub coordinates: StarSystemCoordinates,
    pub galactic_position: GalacticPosition,
    pub in_human_bubble: bool,
}

/// Contents of one sector.
#[derive(Debug, Clone, Serialize)]
pub struct SectorReport {
    pub coordinates: SectorCoordinates,
    pub expected_star_count: f64,
    pub systems: Vec<SystemReport>,
}

/// Result of a radius query.
#[derive(Debug, Clone, Serialize)]
pub struct NeighborsReport {
    pub origin: SystemAddress,
    pub radius: f64,
    pub neighbors: Vec<StellarNeighbor>,
}

/// Result of resolving exact coordinates back to an address.
#[derive(Debug, Clone, Serialize)]
pub struct ResolveReport {
    pub coordinates: StarSystemCoordinates,
    pub address: Option<SystemAddress>,
}

/// Serialize a report as pretty JSON.
pub fn render_json<T: Serialize>(report: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

fn format_position(position: &GalacticPosition) -> String {
    format!("({:.3}, {:.3}, {:.3})", position.x, position.y, position.z)
}

fn format_local(coordinates: &StarSystemCoordinates) -> String {
    format!(
        "{:.4},{:.4},{:.4}",
        coordinates.local_x, coordinates.local_y, coordinates.local_z
    )
}

fn system_line(system: &SystemReport) -> String {
    let mut line = format!(
        "{} local {} at {} ly",
        system.address,
        format_local(&system.coordinates),
        format_position(&system.galactic_position)
    );
    if let Some(name) = &system.name {
        let _ = write!(line, " [{name}]");
    }
    if system.in_human_bubble {
        line.push_str(" (human bubble)");
    }
    line
}

pub fn render_system_text(system: &SystemReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "System {}", system.address);
    if let Some(name) = &system.name {
        let _ = writeln!(out, "  name: {name}");
    }
    let _ = writeln!(out, "  sector: {}", system.address.sector());
    let _ = writeln!(out, "  local: {}", format_local(&system.coordinates));
    let _ = writeln!(
        out,
        "  galactic: {} ly",
        format_position(&system.galactic_position)
    );
    let _ = writeln!(out, "  human bubble: {}", yes_no(system.in_human_bubble));
    out
}

pub fn render_sector_text(report: &SectorReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Sector {}: {} systems (expected {:.2})",
        report.coordinates,
        report.systems.len(),
        report.expected_star_count
    );
    for system in &report.systems {
        let _ = writeln!(out, "- {}", system_line(system));
    }
    out
}

pub fn render_resolve_text(report: &ResolveReport) -> String {
    match report.address {
        Some(address) => format!("{address}\n"),
        None => format!(
            "No system at sector {} local {}\n",
            report.coordinates.sector(),
            format_local(&report.coordinates)
        ),
    }
}

pub fn render_neighbors_text(report: &NeighborsReport) -> String {
    let mut out = String::new();
    if report.neighbors.is_empty() {
        let _ = writeln!(
            out,
            "No systems within {:.2} ly of {}",
            report.radius, report.origin
        );
        return out;
    }

    let _ = writeln!(
        out,
        "{} systems within {:.2} ly of {}:",
        report.neighbors.len(),
        report.radius,
        report.origin
    );
    for neighbor in &report.neighbors {
        let _ = writeln!(out, "- {} ({:.3} ly)", neighbor.address, neighbor.distance);
    }
    out
}

pub fn render_route_text(plan: &RoutePlan, hop_distances: &[f64]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Route from {} to {} ({} hops, {:.3} ly, jump range {:.2} ly, {} iterations):",
        plan.start,
        plan.target,
        plan.hop_count(),
        plan.total_distance,
        plan.jump_range,
        plan.iterations
    );
    for (position, step) in plan.steps.iter().enumerate() {
        match position.checked_sub(1).and_then(|hop| hop_distances.get(hop)) {
            Some(distance) => {
                let _ = writeln!(out, "- {step} (+{distance:.3} ly)");
            }
            None => {
                let _ = writeln!(out, "- {step}");
            }
        }
    }
    out
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
