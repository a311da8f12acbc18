//! Closed-form formulas for ion fields and structural speed limits.
//!
//! Each function evaluates in SI and wraps its result as a `uom` quantity.
//! Results are not clamped: `exp` may underflow to zero or overflow to
//! infinity for extreme inputs.

use std::f64::consts::PI;

use gravion_core::{
    constraint::StrictlyPositive,
    units::{AngularVelocitySquared, angular_velocity_squared},
};
use uom::si::{
    acceleration::meter_per_second_squared,
    angular_velocity::{radian_per_second, revolution_per_minute},
    electric_field::volt_per_meter,
    f64::{
        Acceleration, AngularVelocity, ElectricField, ElectricPotential, Length, Mass, Ratio,
        ThermodynamicTemperature,
    },
    length::meter,
    mass::kilogram,
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

use crate::{
    CalculationError, StructureGeometry,
    constants::{MaterialProperties, PHYSICAL_CONSTANTS},
};

/// Computes the Boltzmann concentration ratio `exp(−m·a·h / (k·T))`.
///
/// A negative height measures "below" rather than "above" the reference
/// point and yields a ratio greater than one.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidInput`] if the temperature is not
/// strictly positive.
pub fn boltzmann_ratio(
    mass: Mass,
    acceleration: Acceleration,
    height: Length,
    temperature: ThermodynamicTemperature,
) -> Result<Ratio, CalculationError> {
    let t = StrictlyPositive::new(temperature.get::<kelvin>())
        .map_err(CalculationError::invalid_input("temperature"))?
        .into_inner();

    let m = mass.get::<kilogram>();
    let a = acceleration.get::<meter_per_second_squared>();
    let h = height.get::<meter>();

    Ok(Ratio::new::<ratio>(
        (-m * a * h / (PHYSICAL_CONSTANTS.boltzmann * t)).exp(),
    ))
}

/// Computes the field induced by two unlike-mass ions under acceleration,
/// `(m_heavy − m_light)·a / (2e)`.
///
/// Swapping the masses flips the sign of the field.
#[must_use]
pub fn electric_field(
    heavy_mass: Mass,
    light_mass: Mass,
    acceleration: Acceleration,
) -> ElectricField {
    let dm = heavy_mass.get::<kilogram>() - light_mass.get::<kilogram>();
    let a = acceleration.get::<meter_per_second_squared>();

    ElectricField::new::<volt_per_meter>(dm * a / (2.0 * PHYSICAL_CONSTANTS.elementary_charge))
}

/// Computes the potential difference across `height`, `E·h`.
#[must_use]
pub fn voltage_difference(
    heavy_mass: Mass,
    light_mass: Mass,
    acceleration: Acceleration,
    height: Length,
) -> ElectricPotential {
    electric_field(heavy_mass, light_mass, acceleration) * height
}

/// Converts a rotational speed in revolutions per minute to an angular velocity.
#[must_use]
pub fn angular_velocity_from_rpm(rpm: f64) -> AngularVelocity {
    AngularVelocity::new::<revolution_per_minute>(rpm)
}

/// Computes the centrifugal acceleration `ω²·r`.
#[must_use]
pub fn centrifugal_acceleration(speed: AngularVelocity, radius: Length) -> Acceleration {
    let omega = speed.get::<radian_per_second>();
    Acceleration::new::<meter_per_second_squared>(omega * omega * radius.get::<meter>())
}

/// Computes the stress-limited maximum ω² for a vessel of reference materials.
///
/// See [`max_omega_squared_for`].
#[must_use]
pub fn max_omega_squared(geometry: &StructureGeometry) -> AngularVelocitySquared {
    max_omega_squared_for(geometry, &MaterialProperties::reference())
}

/// Computes the stress-limited maximum ω² for a vessel of the given materials.
///
/// Sums an annular hoop term and an axial disk term, both limited by the
/// wall's yield strength `Y` and loaded by the spinning wall and liquid:
///
/// ```text
/// ω₁² = (r2² − r1²)·Y / [r3²·(ρs·(r2² − r1²) + ρl·r1²)]
/// ω₂² = Y·(r3 − r1)·d / [π·r3²·(ρs·(r2² − r1²) + ρl·r1²)]
/// ```
///
/// The sum is floored at zero, which only matters when `r3 < r1` makes the
/// disk term negative.
#[must_use]
pub fn max_omega_squared_for(
    geometry: &StructureGeometry,
    material: &MaterialProperties,
) -> AngularVelocitySquared {
    let [r1, r2, r3, d] = geometry.meters();
    let y = material.yield_strength.get::<pascal>();
    let rho_s = material.solid_density.get::<kilogram_per_cubic_meter>();
    let rho_l = material.liquid_density.get::<kilogram_per_cubic_meter>();

    let wall_area = r2 * r2 - r1 * r1;
    let loading = rho_s * wall_area + rho_l * r1 * r1;

    let hoop = wall_area * y / (r3 * r3 * loading);
    let disk = y * (r3 - r1) * d / (PI * r3 * r3 * loading);

    angular_velocity_squared((hoop + disk).max(0.0))
}

/// Computes the maximum safe angular velocity for a vessel of reference materials.
#[must_use]
pub fn max_angular_velocity(geometry: &StructureGeometry) -> AngularVelocity {
    AngularVelocity::new::<radian_per_second>(max_omega_squared(geometry).value.sqrt())
}

/// Returns the maximum safe speed in revolutions per minute.
#[must_use]
pub fn max_rpm(geometry: &StructureGeometry) -> f64 {
    max_angular_velocity(geometry).get::<revolution_per_minute>()
}
