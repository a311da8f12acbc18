//! End-to-end reproduction of the published reference rows.

use approx::assert_relative_eq;
use gravion_physics::{
    CalculationError, MassSource, StructurePreset, TableRow, conductivity, evaluate_safety,
    max_rpm, power_density, rpm, validate_all, validate_table,
};
use uom::si::{angular_velocity::revolution_per_minute, electric_field::volt_per_meter};

/// (preset, ω², electric field, combined power density) as published.
const PUBLISHED: [(StructurePreset, f64, f64, f64); 3] = [
    (StructurePreset::Small, 9.189e9, 29.97, 72.23),
    (StructurePreset::Medium, 5.743e8, 7.494, 4.514),
    (StructurePreset::Large, 3.589e7, 1.8734, 0.2821),
];

#[test]
fn paper_masses_reproduce_published_rows() -> Result<(), CalculationError> {
    for (preset, omega_squared, field, combined) in PUBLISHED {
        let result = power_density(
            MassSource::Paper,
            "I-",
            "H+",
            &preset.geometry(),
            conductivity(0.85)?,
        )?;

        assert_relative_eq!(result.max_omega_squared.value, omega_squared, max_relative = 1e-3);
        assert_relative_eq!(
            result.electric_field.get::<volt_per_meter>(),
            field,
            max_relative = 1e-3
        );
        assert_relative_eq!(
            result.power_density_combined.value,
            combined,
            max_relative = 1e-3
        );
    }
    Ok(())
}

#[test]
fn validator_rows_match_direct_calculation() -> Result<(), CalculationError> {
    let table = validate_table(MassSource::Paper)?;

    for (preset, omega_squared, field, combined) in PUBLISHED {
        let entry = &table[&preset];
        assert_eq!(entry.mass_source, MassSource::Paper);
        assert_eq!(entry.expected.omega_squared, omega_squared);
        assert_eq!(entry.expected.electric_field, field);
        assert_eq!(entry.expected.power_density_combined, combined);

        let direct = power_density(
            MassSource::Paper,
            "I-",
            "H+",
            &preset.geometry(),
            conductivity(0.85)?,
        )?;
        assert_eq!(entry.computed, TableRow::from_result(&direct));
    }
    Ok(())
}

#[test]
fn both_mass_sources_are_reported() -> Result<(), CalculationError> {
    let all = validate_all()?;

    assert_eq!(all.len(), 2);
    for (source, table) in &all {
        assert_eq!(table.len(), 3);
        for entry in table.values() {
            assert_eq!(entry.mass_source, *source);
            assert!(entry.max_relative_deviation() < 1e-3);
        }
    }

    // The tables differ only through the ion masses.
    let reference = &all[&MassSource::Reference][&StructurePreset::Small];
    let paper = &all[&MassSource::Paper][&StructurePreset::Small];
    assert_eq!(reference.computed.omega_squared, paper.computed.omega_squared);
    assert_ne!(reference.computed.electric_field, paper.computed.electric_field);
    Ok(())
}

#[test]
fn unknown_species_never_yields_a_number() -> Result<(), CalculationError> {
    let result = power_density(
        MassSource::Paper,
        "Xx-",
        "H+",
        &StructurePreset::Small.geometry(),
        conductivity(0.85)?,
    );
    assert_eq!(
        result,
        Err(CalculationError::UnknownSpecies { tag: "Xx-".into() })
    );
    Ok(())
}

#[test]
fn larger_vessels_spin_slower() -> Result<(), CalculationError> {
    let idle = rpm(0.0)?;
    let limits: Vec<f64> = StructurePreset::ALL
        .into_iter()
        .map(|preset| evaluate_safety(idle, &preset.geometry()))
        .map(|safety| safety.max_safe_speed.get::<revolution_per_minute>())
        .collect();

    for (preset, limit) in StructurePreset::ALL.into_iter().zip(&limits) {
        assert_relative_eq!(max_rpm(&preset.geometry()), *limit, max_relative = 1e-12);
    }

    assert!(limits.windows(2).all(|pair| pair[0] > pair[1]));
    // Each preset is four times larger, so the limit drops fourfold.
    assert_relative_eq!(limits[0] / limits[1], 4.0, max_relative = 1e-9);
    Ok(())
}
