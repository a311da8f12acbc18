//! Caller-facing calculation requests, deserializable from config files.
//!
//! A [`Scenario`] holds raw, unvalidated values exactly as a user typed them.
//! [`Scenario::evaluate`] resolves species tags and preset names and validates
//! every number before running any formula.
//!
//! ```toml
//! mass_source = "paper"
//! anion = "I-"
//! cation = "H+"
//! structure = "SMALL"
//! conductivity = 0.85
//! rpm = 500000.0
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    CalculationError, MassSource, OperatingPoint, PowerResult, StructureGeometry,
    power::{conductivity, power_density, power_density_at_speed},
    safety::rpm,
};

/// The structure a scenario runs on: a preset name or explicit dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StructureSpec {
    /// A preset name such as `"SMALL"`.
    Preset(String),
    /// Explicit dimensions in meters.
    Custom { r1: f64, r2: f64, r3: f64, d: f64 },
}

impl StructureSpec {
    /// Resolves the spec into a validated geometry.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::UnknownStructure`] for an unknown preset
    /// name, or [`CalculationError::InvalidGeometry`] for bad dimensions.
    pub fn resolve(&self) -> Result<StructureGeometry, CalculationError> {
        match self {
            Self::Preset(name) => StructureGeometry::preset(name),
            Self::Custom { r1, r2, r3, d } => {
                Ok(StructureGeometry::from_meters(*r1, *r2, *r3, *d)?)
            }
        }
    }
}

impl Default for StructureSpec {
    fn default() -> Self {
        Self::Preset("SMALL".to_string())
    }
}

/// A full calculation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    #[serde(default)]
    pub mass_source: MassSource,
    pub anion: String,
    pub cation: String,
    #[serde(default)]
    pub structure: StructureSpec,
    /// Electrolyte conductivity, S/m.
    pub conductivity: f64,
    /// Operating speed, rpm.
    pub rpm: f64,
}

/// Everything computed for a [`Scenario`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioReport {
    /// Output at the structural speed limit.
    pub at_limit: PowerResult,
    /// Output at the requested speed, with its safety assessment.
    pub at_speed: OperatingPoint,
}

impl Scenario {
    /// Validates the scenario and runs both the limit and operating-point
    /// calculations.
    ///
    /// # Errors
    ///
    /// Returns the first [`CalculationError`] found: unknown tags or preset
    /// names, invalid geometry, or an out-of-domain conductivity or speed.
    pub fn evaluate(&self) -> Result<ScenarioReport, CalculationError> {
        let geometry = self.structure.resolve()?;
        let sigma = conductivity(self.conductivity)?;
        let speed = rpm(self.rpm)?;

        let at_limit = power_density(
            self.mass_source,
            &self.anion,
            &self.cation,
            &geometry,
            sigma,
        )?;
        let at_speed = power_density_at_speed(
            self.mass_source,
            &self.anion,
            &self.cation,
            &geometry,
            sigma,
            speed,
        )?;

        Ok(ScenarioReport { at_limit, at_speed })
    }
}
