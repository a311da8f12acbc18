//! Property-based tests for the formula invariants.

use approx::relative_eq;
use gravion_physics::{
    MassSource, StructureGeometry, StructurePreset, boltzmann_ratio, conductivity,
    electric_field, max_omega_squared, power_density, voltage_difference,
};
use proptest::prelude::*;
use uom::si::{
    acceleration::meter_per_second_squared,
    electric_field::volt_per_meter,
    electric_potential::volt,
    f64::{Acceleration, Length, Mass, ThermodynamicTemperature},
    length::meter,
    mass::kilogram,
    ratio::ratio,
    thermodynamic_temperature::kelvin,
};

fn kg(value: f64) -> Mass {
    Mass::new::<kilogram>(value)
}

fn accel(value: f64) -> Acceleration {
    Acceleration::new::<meter_per_second_squared>(value)
}

// ── Electric field and voltage ───────────────────────────────────────

proptest! {
    /// Swapping heavy and light masses negates the field.
    #[test]
    fn field_is_antisymmetric(
        a in 1.0e-27f64..1.0e-24,
        b in 1.0e-27f64..1.0e-24,
        acc in -1.0e9f64..1.0e9,
    ) {
        let forward = electric_field(kg(a), kg(b), accel(acc)).get::<volt_per_meter>();
        let reverse = electric_field(kg(b), kg(a), accel(acc)).get::<volt_per_meter>();
        prop_assert_eq!(forward, -reverse);
    }

    /// Voltage follows the field's sign for positive heights and flips for negative ones.
    #[test]
    fn voltage_sign_tracks_field(
        heavy in 1.0e-26f64..1.0e-24,
        light in 1.0e-27f64..1.0e-26,
        acc in 1.0f64..1.0e9,
        h in 1.0e-4f64..10.0,
    ) {
        let field = electric_field(kg(heavy), kg(light), accel(acc)).get::<volt_per_meter>();
        let up = voltage_difference(kg(heavy), kg(light), accel(acc), Length::new::<meter>(h));
        let down = voltage_difference(kg(heavy), kg(light), accel(acc), Length::new::<meter>(-h));

        prop_assert!(field > 0.0);
        prop_assert!(up.get::<volt>() > 0.0);
        prop_assert!(down.get::<volt>() < 0.0);
    }
}

// ── Boltzmann distribution ───────────────────────────────────────────

proptest! {
    /// The ratio lies in (0, 1] for positive inputs.
    #[test]
    fn boltzmann_ratio_is_bounded(
        m in 1.0e-27f64..1.0e-24,
        g in 1.0e-3f64..1.0e8,
        h in 1.0e-6f64..1.0,
        t in 1.0f64..2000.0,
    ) {
        let r = boltzmann_ratio(
            kg(m),
            accel(g),
            Length::new::<meter>(h),
            ThermodynamicTemperature::new::<kelvin>(t),
        ).unwrap().get::<ratio>();

        prop_assert!(r > 0.0 || m * g * h / (1.380_649e-23 * t) > 700.0);
        prop_assert!(r <= 1.0);
    }

    /// Zero acceleration leaves the concentration unchanged.
    #[test]
    fn boltzmann_ratio_is_one_without_acceleration(
        m in 1.0e-27f64..1.0e-24,
        h in -1.0f64..1.0,
        t in 1.0f64..2000.0,
    ) {
        let r = boltzmann_ratio(
            kg(m),
            accel(0.0),
            Length::new::<meter>(h),
            ThermodynamicTemperature::new::<kelvin>(t),
        ).unwrap();
        prop_assert_eq!(r.get::<ratio>(), 1.0);
    }
}

// ── Structural limit ─────────────────────────────────────────────────

proptest! {
    /// Valid geometries never report a negative ω².
    #[test]
    fn omega_squared_is_non_negative(
        r1 in 1.0e-4f64..1.0,
        extra in 1.0e-5f64..1.0,
        r3 in 1.0e-4f64..2.0,
        d in 1.0e-5f64..0.1,
    ) {
        let geometry = StructureGeometry::from_meters(r1, r1 + extra, r3, d).unwrap();
        prop_assert!(max_omega_squared(&geometry).value >= 0.0);
    }

    /// Invalid geometries are rejected before any formula runs.
    #[test]
    fn outer_radius_at_or_inside_inner_is_rejected(
        r1 in 1.0e-4f64..1.0,
        shrink in 0.0f64..1.0,
    ) {
        let r2 = r1 * (1.0 - shrink);
        prop_assert!(StructureGeometry::from_meters(r1, r2, 0.01, 0.001).is_err());
    }
}

// ── Power density ────────────────────────────────────────────────────

proptest! {
    /// Higher conductivity lowers the unit-cube resistance, so power
    /// density rises. Resistance itself falls strictly.
    #[test]
    fn conductivity_drives_resistance_and_power(
        low in 0.01f64..10.0,
        step in 0.01f64..10.0,
    ) {
        let geometry = StructurePreset::Medium.geometry();
        let at = |sigma: f64| {
            power_density(MassSource::Paper, "I-", "H+", &geometry, conductivity(sigma).unwrap())
                .unwrap()
        };
        let a = at(low);
        let b = at(low + step);

        prop_assert!(b.resistance < a.resistance);
        prop_assert!(b.power_density_liquid > a.power_density_liquid);
        prop_assert!(relative_eq!(
            b.power_density_liquid.value / a.power_density_liquid.value,
            (low + step) / low,
            max_relative = 1e-9
        ));
    }
}
