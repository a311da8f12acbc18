//! Physical constants, material properties and calibration factors.
//!
//! Everything here is fixed for the life of the process. Ion masses live in
//! [`species`](crate::species) and structure presets in
//! [`geometry`](crate::geometry).

use uom::si::{
    f64::{MassDensity, Pressure},
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
};

/// Boltzmann constant (J/K).
pub const BOLTZMANN_CONSTANT: f64 = 1.380_649e-23;

/// Elementary charge (C).
pub const ELEMENTARY_CHARGE: f64 = 1.602_176_634e-19;

/// Structural-efficiency factor applied to the liquid cross-section fraction.
///
/// Fitted to the published reference table; it has no first-principles
/// derivation and is treated as a calibration constant.
pub const STRUCTURAL_EFFICIENCY: f64 = 0.762;

/// The fundamental constants read by the formulas.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PhysicalConstants {
    /// Boltzmann constant (J/K).
    pub boltzmann: f64,
    /// Elementary charge (C).
    pub elementary_charge: f64,
}

/// The CODATA 2018 exact values.
pub const PHYSICAL_CONSTANTS: PhysicalConstants = PhysicalConstants {
    boltzmann: BOLTZMANN_CONSTANT,
    elementary_charge: ELEMENTARY_CHARGE,
};

/// Mechanical properties of the rotating vessel and its electrolyte fill.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaterialProperties {
    /// Yield strength of the vessel wall.
    pub yield_strength: Pressure,
    /// Density of the vessel wall.
    pub solid_density: MassDensity,
    /// Density of the electrolyte.
    pub liquid_density: MassDensity,
}

impl MaterialProperties {
    /// High-strength steel wall filled with an aqueous electrolyte.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            yield_strength: Pressure::new::<pascal>(2.0e9),
            solid_density: MassDensity::new::<kilogram_per_cubic_meter>(7850.0),
            liquid_density: MassDensity::new::<kilogram_per_cubic_meter>(1000.0),
        }
    }
}

impl Default for MaterialProperties {
    fn default() -> Self {
        Self::reference()
    }
}
