//! Classifies an operating speed against the structural speed limit.

use std::fmt;

use gravion_core::constraint::{Constrained, NonNegative};
use uom::si::{angular_velocity::radian_per_second, f64::AngularVelocity};

use crate::{
    CalculationError, StructureGeometry,
    error::reject_infinite,
    formulas::{angular_velocity_from_rpm, max_angular_velocity},
};

/// Operating speed in revolutions per minute, guaranteed non-negative.
pub type Rpm = Constrained<f64, NonNegative>;

/// Creates an [`Rpm`] from a caller-supplied speed.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidInput`] if the speed is negative,
/// infinite, or NaN.
pub fn rpm(value: f64) -> Result<Rpm, CalculationError> {
    reject_infinite(value)
        .and_then(NonNegative::new)
        .map_err(CalculationError::invalid_input("rpm"))
}

/// Discrete warning bands for a safety factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum WarningLevel {
    /// Safety factor in `[0, 0.6]`.
    Safe,
    /// Safety factor in `(0.6, 0.8]`.
    Caution,
    /// Safety factor in `(0.8, 1.0]`.
    Warning,
    /// Safety factor above `1.0`, infinite, or NaN.
    Danger,
}

impl WarningLevel {
    /// Returns the lowercase label, such as `"caution"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::Caution => "caution",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for WarningLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a safety factor onto a [`WarningLevel`].
///
/// Thresholds are checked in ascending order and each band includes its upper
/// bound, so `0.6` is still safe and `1.0` is a warning rather than danger.
#[must_use]
pub fn classify_warning(safety_factor: f64) -> WarningLevel {
    if safety_factor <= 0.6 {
        WarningLevel::Safe
    } else if safety_factor <= 0.8 {
        WarningLevel::Caution
    } else if safety_factor <= 1.0 {
        WarningLevel::Warning
    } else {
        WarningLevel::Danger
    }
}

/// Result of checking an operating speed against a structure's limit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SafetyResult {
    pub current_speed: AngularVelocity,
    pub max_safe_speed: AngularVelocity,
    /// `ω / ω_max`, or `f64::INFINITY` when the limit is zero.
    pub safety_factor: f64,
    pub within_limits: bool,
    pub warning_level: WarningLevel,
}

/// Checks an operating speed against the structure's speed limit.
///
/// A structure whose limit is zero cannot spin safely at all; its safety
/// factor is reported as infinite and classified as [`WarningLevel::Danger`].
#[must_use]
pub fn evaluate_safety(speed: Rpm, geometry: &StructureGeometry) -> SafetyResult {
    let current_speed = angular_velocity_from_rpm(speed.into_inner());
    let max_safe_speed = max_angular_velocity(geometry);

    let max_omega = max_safe_speed.get::<radian_per_second>();
    let safety_factor = if max_omega > 0.0 {
        current_speed.get::<radian_per_second>() / max_omega
    } else {
        f64::INFINITY
    };

    SafetyResult {
        current_speed,
        max_safe_speed,
        safety_factor,
        within_limits: safety_factor <= 1.0,
        warning_level: classify_warning(safety_factor),
    }
}
