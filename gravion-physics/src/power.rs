//! Electrical output of a spinning electrolyte-filled vessel.
//!
//! Power density is normalized per unit structure volume: the potential is
//! taken across a unit height (1 m) and the resistance is that of a unit
//! cube of electrolyte. The height here is a normalization, not the physical
//! height used with [`voltage_difference`](crate::voltage_difference).

use gravion_core::{
    constraint::{Constrained, StrictlyPositive},
    units::{self, AngularVelocitySquared, PowerDensity},
};
use uom::si::{
    electric_potential::volt,
    electrical_conductivity::siemens_per_meter,
    electrical_resistance::ohm,
    f64::{
        Acceleration, AngularVelocity, ElectricField, ElectricPotential, ElectricalConductivity,
        ElectricalResistance, Length, Mass, Ratio,
    },
    length::meter,
    ratio::ratio,
};

use crate::{
    CalculationError, MassSource, SafetyResult, StructureGeometry,
    constants::STRUCTURAL_EFFICIENCY,
    error::reject_infinite,
    formulas::{
        angular_velocity_from_rpm, centrifugal_acceleration, electric_field, max_omega_squared,
    },
    safety::{Rpm, evaluate_safety},
    species::IonSpecies,
};

/// Electrolyte conductivity, guaranteed strictly positive.
pub type Conductivity = Constrained<ElectricalConductivity, StrictlyPositive>;

/// Creates a [`Conductivity`] from a value in S/m.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidInput`] if the value is infinite or not
/// strictly positive.
pub fn conductivity(siemens: f64) -> Result<Conductivity, CalculationError> {
    reject_infinite(siemens)
        .and_then(|siemens| {
            StrictlyPositive::new(ElectricalConductivity::new::<siemens_per_meter>(siemens))
        })
        .map_err(CalculationError::invalid_input("conductivity"))
}

/// Result of a power density calculation at the structural speed limit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PowerResult {
    /// Open-circuit potential across the unit height.
    pub voltage_difference: ElectricPotential,
    /// Potential delivered to a matched load (half of open-circuit).
    pub output_voltage: ElectricPotential,
    pub electric_field: ElectricField,
    /// Power per unit electrolyte volume.
    pub power_density_liquid: PowerDensity,
    /// Power per unit total (wall plus electrolyte) volume.
    pub power_density_combined: PowerDensity,
    /// Resistance of a unit cube of electrolyte.
    pub resistance: ElectricalResistance,
    pub conductivity: ElectricalConductivity,
    pub anion_mass: Mass,
    pub cation_mass: Mass,
    /// Centrifugal acceleration at `r3` at the maximum safe speed.
    pub max_acceleration: Acceleration,
    pub max_omega_squared: AngularVelocitySquared,
    pub structure: StructureGeometry,
    /// Liquid share of the cross-section, scaled by [`STRUCTURAL_EFFICIENCY`].
    pub volume_fraction: Ratio,
}

/// Electrical output at a chosen operating speed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OperatingPoint {
    pub angular_velocity: AngularVelocity,
    /// Centrifugal acceleration at `r3`.
    pub acceleration: Acceleration,
    pub electric_field: ElectricField,
    pub output_voltage: ElectricPotential,
    pub power_density_liquid: PowerDensity,
    pub power_density_combined: PowerDensity,
    pub safety: SafetyResult,
}

/// The quantities shared by every power evaluation.
struct ElectricalOutput {
    electric_field: ElectricField,
    voltage_difference: ElectricPotential,
    output_voltage: ElectricPotential,
    resistance: ElectricalResistance,
    power_density_liquid: PowerDensity,
    power_density_combined: PowerDensity,
    volume_fraction: Ratio,
}

impl ElectricalOutput {
    fn evaluate(
        anion_mass: Mass,
        cation_mass: Mass,
        acceleration: Acceleration,
        geometry: &StructureGeometry,
        conductivity: Conductivity,
    ) -> Self {
        let electric_field = electric_field(anion_mass, cation_mass, acceleration);
        let voltage_difference = electric_field * Length::new::<meter>(1.0);
        let output_voltage = voltage_difference / 2.0;

        let resistance = ElectricalResistance::new::<ohm>(
            1.0 / conductivity.as_ref().get::<siemens_per_meter>(),
        );

        let v_out = output_voltage.get::<volt>();
        let liquid = v_out * v_out / resistance.get::<ohm>();

        let volume_fraction = Ratio::new::<ratio>(
            geometry.liquid_area_fraction().get::<ratio>() * STRUCTURAL_EFFICIENCY,
        );
        let combined = liquid * volume_fraction.get::<ratio>();

        Self {
            electric_field,
            voltage_difference,
            output_voltage,
            resistance,
            power_density_liquid: units::power_density(liquid),
            power_density_combined: units::power_density(combined),
            volume_fraction,
        }
    }
}

/// Computes the power density at the structural speed limit for species tags.
///
/// The anion is treated as the heavy ion and the cation as the light one.
///
/// # Errors
///
/// Returns [`CalculationError::UnknownSpecies`] if either tag is not in the
/// mass table.
pub fn power_density(
    source: MassSource,
    anion: &str,
    cation: &str,
    geometry: &StructureGeometry,
    conductivity: Conductivity,
) -> Result<PowerResult, CalculationError> {
    let anion: IonSpecies = anion.parse()?;
    let cation: IonSpecies = cation.parse()?;
    Ok(power_density_for(source, anion, cation, geometry, conductivity))
}

/// Computes the power density at the structural speed limit.
#[must_use]
pub fn power_density_for(
    source: MassSource,
    anion: IonSpecies,
    cation: IonSpecies,
    geometry: &StructureGeometry,
    conductivity: Conductivity,
) -> PowerResult {
    let anion_mass = source.mass(anion);
    let cation_mass = source.mass(cation);

    let max_omega_squared = max_omega_squared(geometry);
    let max_acceleration: Acceleration = max_omega_squared * geometry.axis_distance();

    let output = ElectricalOutput::evaluate(
        anion_mass,
        cation_mass,
        max_acceleration,
        geometry,
        conductivity,
    );

    PowerResult {
        voltage_difference: output.voltage_difference,
        output_voltage: output.output_voltage,
        electric_field: output.electric_field,
        power_density_liquid: output.power_density_liquid,
        power_density_combined: output.power_density_combined,
        resistance: output.resistance,
        conductivity: conductivity.into_inner(),
        anion_mass,
        cation_mass,
        max_acceleration,
        max_omega_squared,
        structure: *geometry,
        volume_fraction: output.volume_fraction,
    }
}

/// Computes the electrical output when spinning at `speed` rather than the limit.
///
/// The returned safety assessment reports how close `speed` is to the limit.
///
/// # Errors
///
/// Returns [`CalculationError::UnknownSpecies`] if either tag is not in the
/// mass table.
pub fn power_density_at_speed(
    source: MassSource,
    anion: &str,
    cation: &str,
    geometry: &StructureGeometry,
    conductivity: Conductivity,
    speed: Rpm,
) -> Result<OperatingPoint, CalculationError> {
    let anion_mass = source.lookup(anion)?;
    let cation_mass = source.lookup(cation)?;

    let angular_velocity = angular_velocity_from_rpm(speed.into_inner());
    let acceleration = centrifugal_acceleration(angular_velocity, geometry.axis_distance());
    let output =
        ElectricalOutput::evaluate(anion_mass, cation_mass, acceleration, geometry, conductivity);

    Ok(OperatingPoint {
        angular_velocity,
        acceleration,
        electric_field: output.electric_field,
        output_voltage: output.output_voltage,
        power_density_liquid: output.power_density_liquid,
        power_density_combined: output.power_density_combined,
        safety: evaluate_safety(speed, geometry),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use gravion_core::constraint::ConstraintError;
    use uom::si::{acceleration::meter_per_second_squared, electric_field::volt_per_meter};

    use crate::{StructurePreset, WarningLevel, max_rpm, safety::rpm};

    fn small() -> StructureGeometry {
        StructurePreset::Small.geometry()
    }

    #[test]
    fn small_preset_matches_reference_row() -> Result<(), CalculationError> {
        let result = power_density(MassSource::Paper, "I-", "H+", &small(), conductivity(0.85)?)?;

        assert_relative_eq!(result.max_omega_squared.value, 9.189e9, max_relative = 1e-3);
        assert_relative_eq!(
            result.electric_field.get::<volt_per_meter>(),
            29.97,
            max_relative = 1e-3
        );
        assert_relative_eq!(result.power_density_combined.value, 72.23, max_relative = 1e-3);
        Ok(())
    }

    #[test]
    fn result_is_internally_consistent() -> Result<(), CalculationError> {
        let result = power_density(
            MassSource::Reference,
            "I-",
            "K+",
            &small(),
            conductivity(0.6)?,
        )?;

        assert_relative_eq!(
            result.output_voltage.get::<volt>(),
            result.voltage_difference.get::<volt>() / 2.0
        );
        assert_relative_eq!(result.resistance.get::<ohm>(), 1.0 / 0.6, max_relative = 1e-12);
        assert_relative_eq!(
            result.max_acceleration.get::<meter_per_second_squared>(),
            result.max_omega_squared.value * 0.005,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.power_density_combined.value,
            result.power_density_liquid.value * result.volume_fraction.get::<ratio>(),
            max_relative = 1e-12
        );
        assert_eq!(result.anion_mass, MassSource::Reference.mass(IonSpecies::Iodide));
        assert_eq!(result.structure, small());
        Ok(())
    }

    #[test]
    fn unknown_species_fails() -> Result<(), CalculationError> {
        let sigma = conductivity(0.85)?;
        assert_eq!(
            power_density(MassSource::Paper, "Xx-", "H+", &small(), sigma),
            Err(CalculationError::UnknownSpecies { tag: "Xx-".into() })
        );
        assert!(power_density(MassSource::Paper, "I-", "Na+", &small(), sigma).is_err());
        Ok(())
    }

    #[test]
    fn conductivity_must_be_positive_and_finite() {
        assert!(matches!(
            conductivity(f64::INFINITY),
            Err(CalculationError::InvalidInput {
                parameter: "conductivity",
                source: ConstraintError::NotFinite,
            })
        ));
        for bad in [0.0, -0.85, f64::NAN] {
            assert!(matches!(
                conductivity(bad),
                Err(CalculationError::InvalidInput {
                    parameter: "conductivity",
                    ..
                })
            ));
        }
    }

    #[test]
    fn operating_point_at_the_limit_matches_max_result() -> Result<(), CalculationError> {
        let geometry = small();
        let sigma = conductivity(0.85)?;
        let max = power_density(MassSource::Paper, "I-", "H+", &geometry, sigma)?;
        let limit = rpm(max_rpm(&geometry))?;

        let point = power_density_at_speed(MassSource::Paper, "I-", "H+", &geometry, sigma, limit)?;

        assert_relative_eq!(
            point.power_density_combined.value,
            max.power_density_combined.value,
            max_relative = 1e-9
        );
        assert_relative_eq!(point.safety.safety_factor, 1.0, max_relative = 1e-9);
        Ok(())
    }

    #[test]
    fn half_speed_quarters_the_field() -> Result<(), CalculationError> {
        let geometry = small();
        let sigma = conductivity(0.85)?;
        let at = |speed: f64| -> Result<OperatingPoint, CalculationError> {
            power_density_at_speed(MassSource::Paper, "I-", "H+", &geometry, sigma, rpm(speed)?)
        };
        let full = at(400_000.0)?;
        let half = at(200_000.0)?;

        assert_relative_eq!(
            half.electric_field.get::<volt_per_meter>(),
            full.electric_field.get::<volt_per_meter>() / 4.0,
            max_relative = 1e-12
        );
        assert_eq!(half.safety.warning_level, WarningLevel::Safe);
        Ok(())
    }

    #[test]
    fn operating_point_reports_unknown_species() -> Result<(), CalculationError> {
        let result = power_density_at_speed(
            MassSource::Paper,
            "I-",
            "Na+",
            &small(),
            conductivity(0.85)?,
            rpm(1_000.0)?,
        );
        assert_eq!(
            result,
            Err(CalculationError::UnknownSpecies { tag: "Na+".into() })
        );
        Ok(())
    }
}
