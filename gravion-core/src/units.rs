//! Quantity aliases missing from `uom`'s SI system.
//!
//! Each alias is a plain `uom` quantity, so it participates in dimensional
//! arithmetic like any built-in type. Constructors take SI values.

use uom::{
    si::{
        ISQ, Quantity, SI,
        f64::{Frequency, Power, Time, Volume},
        frequency::hertz,
        power::watt,
        time::second,
        volume::cubic_meter,
    },
    typenum::{N1, N2, N3, P1, Z0},
};

/// Squared angular velocity, rad²/s² (dimensionally s⁻²) in SI.
///
/// The structural speed limit is naturally expressed as ω², since both stress
/// terms scale with it linearly.
pub type AngularVelocitySquared = Quantity<ISQ<Z0, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Volumetric power density, W/m³ in SI.
pub type PowerDensity = Quantity<ISQ<N1, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Creates an [`AngularVelocitySquared`] from a value in rad²/s².
#[must_use]
pub fn angular_velocity_squared(rad2_per_s2: f64) -> AngularVelocitySquared {
    Frequency::new::<hertz>(rad2_per_s2) / Time::new::<second>(1.0)
}

/// Creates a [`PowerDensity`] from a value in W/m³.
#[must_use]
pub fn power_density(watt_per_cubic_meter: f64) -> PowerDensity {
    Power::new::<watt>(watt_per_cubic_meter) / Volume::new::<cubic_meter>(1.0)
}
