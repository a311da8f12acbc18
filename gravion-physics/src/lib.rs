//! Closed-form calculations for gravity-ion thermoelectric generators.
//!
//! A vessel of electrolyte spun at high speed separates unlike-mass ions and
//! develops an electric field. This crate evaluates that field, the voltage
//! and power it can deliver, and the structural speed limit of the vessel.
//!
//! - [`constants`]: physical constants, materials and calibration factors.
//! - [`species`]: ion species and the two ion-mass tables.
//! - [`geometry`]: vessel dimensions and named presets.
//! - [`formulas`]: the individual closed-form formulas.
//! - [`power`]: power density at the speed limit or a chosen speed.
//! - [`safety`]: warning levels for an operating speed.
//! - [`systems`]: comparison across candidate electrolytes.
//! - [`validation`]: reproduction of the published reference table.
//!
//! Every calculation is a pure function. The ion-mass table is chosen per
//! call with [`MassSource`].
//!
//! ```
//! use gravion_physics::{MassSource, StructurePreset, conductivity, power_density};
//!
//! let result = power_density(
//!     MassSource::Paper,
//!     "I-",
//!     "H+",
//!     &StructurePreset::Small.geometry(),
//!     conductivity(0.85)?,
//! )?;
//! assert!(result.power_density_combined.value > 72.0);
//! # Ok::<(), gravion_physics::CalculationError>(())
//! ```

mod error;

pub mod constants;
pub mod formulas;
pub mod geometry;
pub mod power;
pub mod safety;
#[cfg(feature = "serde")]
pub mod scenario;
pub mod species;
pub mod systems;
pub mod validation;

pub use error::{CalculationError, GeometryError};
pub use formulas::{
    angular_velocity_from_rpm, boltzmann_ratio, centrifugal_acceleration, electric_field,
    max_angular_velocity, max_omega_squared, max_omega_squared_for, max_rpm, voltage_difference,
};
pub use geometry::{StructureGeometry, StructurePreset};
pub use power::{
    Conductivity, OperatingPoint, PowerResult, conductivity, power_density,
    power_density_at_speed, power_density_for,
};
pub use safety::{Rpm, SafetyResult, WarningLevel, classify_warning, evaluate_safety, rpm};
#[cfg(feature = "serde")]
pub use scenario::{Scenario, ScenarioReport, StructureSpec};
pub use species::{IonSpecies, MassSource};
pub use systems::{
    ELECTROLYTE_SYSTEMS, ElectrolyteSystem, SystemPerformance, best_system, compare_systems,
};
pub use validation::{TableRow, ValidationEntry, validate_all, validate_table};
