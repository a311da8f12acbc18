//! Shared helpers for the example front ends.
//!
//! The examples stand in for a user interface: they load a [`Scenario`],
//! hand it to `gravion-physics`, and format the returned records.

use std::{fs, io, path::Path};

use gravion_physics::{OperatingPoint, PowerResult, SafetyResult, Scenario, ValidationEntry};
use thiserror::Error;
use uom::si::{
    acceleration::meter_per_second_squared, angular_velocity::revolution_per_minute,
    electric_field::volt_per_meter, electric_potential::volt, electrical_resistance::ohm,
    ratio::ratio,
};

/// Errors that may occur when loading a scenario file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse scenario: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Reads and parses a TOML scenario file.
///
/// # Errors
///
/// Returns a [`LoadError`] if the file cannot be read or is not a valid scenario.
pub fn load_scenario(path: impl AsRef<Path>) -> Result<Scenario, LoadError> {
    let text = fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}

/// Formats a value in scientific notation with a unit suffix.
#[must_use]
pub fn sci(value: f64, unit: &str) -> String {
    format!("{value:.4e} {unit}")
}

/// Renders a power result as aligned `label: value` lines.
#[must_use]
pub fn render_power(result: &PowerResult) -> String {
    let rows = [
        ("max ω²", sci(result.max_omega_squared.value, "rad²/s²")),
        (
            "max acceleration",
            sci(result.max_acceleration.get::<meter_per_second_squared>(), "m/s²"),
        ),
        (
            "electric field",
            sci(result.electric_field.get::<volt_per_meter>(), "V/m"),
        ),
        ("output voltage", sci(result.output_voltage.get::<volt>(), "V")),
        ("resistance", sci(result.resistance.get::<ohm>(), "Ω")),
        (
            "volume fraction",
            format!("{:.4}", result.volume_fraction.get::<ratio>()),
        ),
        ("liquid power", sci(result.power_density_liquid.value, "W/m³")),
        (
            "combined power",
            sci(result.power_density_combined.value, "W/m³"),
        ),
    ];
    render_rows(&rows)
}

/// Renders an operating point, including its safety verdict.
#[must_use]
pub fn render_operating_point(point: &OperatingPoint) -> String {
    let rows = [
        (
            "speed",
            format!("{:.0} rpm", point.angular_velocity.get::<revolution_per_minute>()),
        ),
        (
            "acceleration",
            sci(point.acceleration.get::<meter_per_second_squared>(), "m/s²"),
        ),
        (
            "electric field",
            sci(point.electric_field.get::<volt_per_meter>(), "V/m"),
        ),
        (
            "combined power",
            sci(point.power_density_combined.value, "W/m³"),
        ),
    ];
    let mut out = render_rows(&rows);
    out.push_str(&render_safety(&point.safety));
    out
}

/// Renders a safety assessment.
#[must_use]
pub fn render_safety(safety: &SafetyResult) -> String {
    let rows = [
        (
            "speed limit",
            format!("{:.0} rpm", safety.max_safe_speed.get::<revolution_per_minute>()),
        ),
        ("safety factor", format!("{:.3}", safety.safety_factor)),
        ("warning level", safety.warning_level.to_string()),
    ];
    render_rows(&rows)
}

/// Renders one validation entry as computed/expected/deviation columns.
#[must_use]
pub fn render_validation(entry: &ValidationEntry) -> String {
    const LABELS: [&str; 5] = ["ω²", "acceleration", "field", "liquid power", "combined"];

    let computed = entry.computed.columns();
    let expected = entry.expected.columns();
    let deviation = entry.computed.relative_deviation(&entry.expected).columns();

    LABELS
        .into_iter()
        .enumerate()
        .map(|(i, label)| {
            format!(
                "  {label:<14}{:>14.5e}{:>14.5e}{:>11.2e}\n",
                computed[i], expected[i], deviation[i],
            )
        })
        .collect()
}

fn render_rows(rows: &[(&str, String)]) -> String {
    rows.iter()
        .map(|(label, value)| format!("  {label:<18}{value}\n"))
        .collect()
}
