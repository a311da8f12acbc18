//! Annular rotating-vessel geometry and its named presets.

use std::{f64::consts::PI, fmt, str::FromStr};

use gravion_core::constraint::StrictlyPositive;
use uom::si::{
    f64::{Length, Ratio},
    length::meter,
    ratio::ratio,
};

use crate::{CalculationError, GeometryError};

/// The dimensions of an annular vessel spun about an axis.
///
/// - `r1`: inner radius (the liquid-filled bore)
/// - `r2`: outer radius of the wall
/// - `r3`: distance from the rotation axis
/// - `d`: wall thickness along the axis
///
/// Construction guarantees every dimension is strictly positive and `r2 > r1`,
/// so the structural formulas never see a degenerate vessel.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StructureGeometry {
    r1: Length,
    r2: Length,
    r3: Length,
    d: Length,
}

impl StructureGeometry {
    /// Creates a validated geometry.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] if any dimension is infinite or not strictly
    /// positive, or if the outer radius does not exceed the inner radius.
    pub fn new(
        inner_radius: Length,
        outer_radius: Length,
        axis_distance: Length,
        wall_thickness: Length,
    ) -> Result<Self, GeometryError> {
        let positive = |dimension: &'static str, value: Length| {
            if value.value.is_infinite() {
                return Err(GeometryError::NonFinite { dimension });
            }
            StrictlyPositive::new(value)
                .map(|value| value.into_inner())
                .map_err(|source| GeometryError::NonPositive { dimension, source })
        };

        let r1 = positive("r1", inner_radius)?;
        let r2 = positive("r2", outer_radius)?;
        let r3 = positive("r3", axis_distance)?;
        let d = positive("d", wall_thickness)?;

        if r2 <= r1 {
            return Err(GeometryError::OuterNotBeyondInner { r1, r2 });
        }

        Ok(Self { r1, r2, r3, d })
    }

    /// Creates a validated geometry from dimensions in meters.
    ///
    /// # Errors
    ///
    /// See [`StructureGeometry::new`].
    pub fn from_meters(r1: f64, r2: f64, r3: f64, d: f64) -> Result<Self, GeometryError> {
        Self::new(
            Length::new::<meter>(r1),
            Length::new::<meter>(r2),
            Length::new::<meter>(r3),
            Length::new::<meter>(d),
        )
    }

    /// Returns the geometry of a named preset, such as `"SMALL"`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::UnknownStructure`] for an unrecognized name.
    pub fn preset(name: &str) -> Result<Self, CalculationError> {
        Ok(name.parse::<StructurePreset>()?.geometry())
    }

    /// Inner radius `r1`.
    #[must_use]
    pub fn inner_radius(&self) -> Length {
        self.r1
    }

    /// Outer radius `r2`.
    #[must_use]
    pub fn outer_radius(&self) -> Length {
        self.r2
    }

    /// Distance from the rotation axis `r3`.
    #[must_use]
    pub fn axis_distance(&self) -> Length {
        self.r3
    }

    /// Wall thickness `d`.
    #[must_use]
    pub fn wall_thickness(&self) -> Length {
        self.d
    }

    /// Fraction of the cross-section occupied by liquid, `π·r1² / π·r2²`.
    #[must_use]
    pub fn liquid_area_fraction(&self) -> Ratio {
        let r1 = self.r1.get::<meter>();
        let r2 = self.r2.get::<meter>();
        Ratio::new::<ratio>((PI * r1 * r1) / (PI * r2 * r2))
    }

    /// Dimensions in meters as `[r1, r2, r3, d]`.
    pub(crate) fn meters(&self) -> [f64; 4] {
        [self.r1, self.r2, self.r3, self.d].map(|length| length.get::<meter>())
    }
}

impl Default for StructureGeometry {
    fn default() -> Self {
        StructurePreset::default().geometry()
    }
}

/// Named vessel sizes from the reference table.
///
/// Each step up scales every dimension by four.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum StructurePreset {
    #[default]
    Small,
    Medium,
    Large,
}

impl StructurePreset {
    /// All presets in table order.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Returns the preset's table name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Small => "SMALL",
            Self::Medium => "MEDIUM",
            Self::Large => "LARGE",
        }
    }

    /// Returns the preset's dimensions.
    #[must_use]
    pub fn geometry(self) -> StructureGeometry {
        // [r1, r2, r3, d] in meters.
        let [r1, r2, r3, d] = match self {
            Self::Small => [0.0031, 0.0044, 0.005, 0.000_24],
            Self::Medium => [0.0124, 0.0176, 0.02, 0.000_96],
            Self::Large => [0.0496, 0.0704, 0.08, 0.003_84],
        };

        StructureGeometry {
            r1: Length::new::<meter>(r1),
            r2: Length::new::<meter>(r2),
            r3: Length::new::<meter>(r3),
            d: Length::new::<meter>(d),
        }
    }
}

impl fmt::Display for StructurePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StructurePreset {
    type Err = CalculationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| CalculationError::UnknownStructure {
                name: name.to_string(),
            })
    }
}
