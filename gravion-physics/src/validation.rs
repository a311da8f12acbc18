//! Reproduction of the published reference table.
//!
//! The table lists, for each structure preset, the speed limit and electrical
//! output of an HI electrolyte (I⁻/H⁺ at 0.85 S/m). [`validate_table`] reruns
//! those rows and pairs them with the published values. It does not judge the
//! agreement; callers decide what tolerance is acceptable.

use std::collections::BTreeMap;

use uom::si::{acceleration::meter_per_second_squared, electric_field::volt_per_meter};

use crate::{
    CalculationError, MassSource, PowerResult, StructurePreset,
    power::{conductivity, power_density_for},
    species::IonSpecies,
};

/// Anion used by every reference row.
pub const REFERENCE_ANION: IonSpecies = IonSpecies::Iodide;

/// Cation used by every reference row.
pub const REFERENCE_CATION: IonSpecies = IonSpecies::Hydrogen;

/// Electrolyte conductivity used by every reference row, S/m.
pub const REFERENCE_CONDUCTIVITY: f64 = 0.85;

/// One row of the reference table, in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TableRow {
    /// Maximum ω², rad²/s².
    pub omega_squared: f64,
    /// Centrifugal acceleration at `r3`, m/s².
    pub acceleration: f64,
    /// Electric field, V/m.
    pub electric_field: f64,
    /// Liquid-only power density, W/m³.
    pub power_density_liquid: f64,
    /// Combined power density, W/m³.
    pub power_density_combined: f64,
}

impl TableRow {
    /// Extracts the tabulated columns from a power calculation.
    #[must_use]
    pub fn from_result(result: &PowerResult) -> Self {
        Self {
            omega_squared: result.max_omega_squared.value,
            acceleration: result.max_acceleration.get::<meter_per_second_squared>(),
            electric_field: result.electric_field.get::<volt_per_meter>(),
            power_density_liquid: result.power_density_liquid.value,
            power_density_combined: result.power_density_combined.value,
        }
    }

    /// Returns `|self − expected| / |expected|` column by column.
    #[must_use]
    pub fn relative_deviation(&self, expected: &Self) -> Self {
        let rel = |computed: f64, expected: f64| ((computed - expected) / expected).abs();
        Self {
            omega_squared: rel(self.omega_squared, expected.omega_squared),
            acceleration: rel(self.acceleration, expected.acceleration),
            electric_field: rel(self.electric_field, expected.electric_field),
            power_density_liquid: rel(self.power_density_liquid, expected.power_density_liquid),
            power_density_combined: rel(
                self.power_density_combined,
                expected.power_density_combined,
            ),
        }
    }

    /// The columns in table order.
    #[must_use]
    pub fn columns(&self) -> [f64; 5] {
        [
            self.omega_squared,
            self.acceleration,
            self.electric_field,
            self.power_density_liquid,
            self.power_density_combined,
        ]
    }
}

/// Returns the published row for a preset.
#[must_use]
pub fn expected_row(preset: StructurePreset) -> TableRow {
    match preset {
        StructurePreset::Small => TableRow {
            omega_squared: 9.189e9,
            acceleration: 4.5945e7,
            electric_field: 29.97,
            power_density_liquid: 190.9,
            power_density_combined: 72.23,
        },
        StructurePreset::Medium => TableRow {
            omega_squared: 5.743e8,
            acceleration: 1.1486e7,
            electric_field: 7.494,
            power_density_liquid: 11.93,
            power_density_combined: 4.514,
        },
        StructurePreset::Large => TableRow {
            omega_squared: 3.589e7,
            acceleration: 2.8716e6,
            electric_field: 1.8734,
            power_density_liquid: 0.7458,
            power_density_combined: 0.2821,
        },
    }
}

/// A computed row alongside the published one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationEntry {
    pub computed: TableRow,
    pub expected: TableRow,
    pub mass_source: MassSource,
}

impl ValidationEntry {
    /// Returns the largest relative deviation across all columns.
    #[must_use]
    pub fn max_relative_deviation(&self) -> f64 {
        self.computed
            .relative_deviation(&self.expected)
            .columns()
            .into_iter()
            .fold(0.0, f64::max)
    }
}

/// Recomputes every reference row using one mass table.
///
/// # Errors
///
/// Propagates any [`CalculationError`] from the underlying calculation.
pub fn validate_table(
    source: MassSource,
) -> Result<BTreeMap<StructurePreset, ValidationEntry>, CalculationError> {
    let sigma = conductivity(REFERENCE_CONDUCTIVITY)?;

    Ok(StructurePreset::ALL
        .into_iter()
        .map(|preset| {
            let result = power_density_for(
                source,
                REFERENCE_ANION,
                REFERENCE_CATION,
                &preset.geometry(),
                sigma,
            );
            let entry = ValidationEntry {
                computed: TableRow::from_result(&result),
                expected: expected_row(preset),
                mass_source: source,
            };
            (preset, entry)
        })
        .collect())
}

/// Recomputes every reference row with both mass tables.
///
/// # Errors
///
/// Propagates any [`CalculationError`] from the underlying calculation.
pub fn validate_all()
-> Result<BTreeMap<MassSource, BTreeMap<StructurePreset, ValidationEntry>>, CalculationError> {
    MassSource::ALL
        .into_iter()
        .map(|source| validate_table(source).map(|table| (source, table)))
        .collect()
}
