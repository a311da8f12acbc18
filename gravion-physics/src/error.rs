use gravion_core::constraint::ConstraintError;
use thiserror::Error;
use uom::si::f64::Length;

/// Errors that may occur when evaluating a gravity-ion calculation.
///
/// Every variant names the offending input so a caller can surface it
/// directly. Calculations never substitute defaults for unknown keys.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CalculationError {
    /// The ion tag is not present in the selected mass table.
    #[error("unknown ion species `{tag}`")]
    UnknownSpecies { tag: String },

    /// The name does not match any structure preset.
    #[error("unknown structure preset `{name}`")]
    UnknownStructure { name: String },

    /// The structure dimensions do not describe a physical annular vessel.
    #[error("invalid structure geometry: {0}")]
    InvalidGeometry(#[from] GeometryError),

    /// A scalar input is outside the domain of the formula it feeds.
    #[error("invalid {parameter}: {source}")]
    InvalidInput {
        parameter: &'static str,
        #[source]
        source: ConstraintError,
    },
}

impl CalculationError {
    pub(crate) fn invalid_input(parameter: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidInput { parameter, source }
    }
}

/// Rejects infinite values, leaving NaN for the sign constraints to report.
pub(crate) fn reject_infinite(value: f64) -> Result<f64, ConstraintError> {
    if value.is_infinite() {
        Err(ConstraintError::NotFinite)
    } else {
        Ok(value)
    }
}

/// Errors raised while validating a [`StructureGeometry`](crate::StructureGeometry).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// A dimension is zero, negative, or NaN.
    #[error("dimension `{dimension}` must be strictly positive: {source}")]
    NonPositive {
        dimension: &'static str,
        #[source]
        source: ConstraintError,
    },

    /// A dimension is infinite.
    #[error("dimension `{dimension}` must be finite")]
    NonFinite { dimension: &'static str },

    /// The outer radius does not exceed the inner radius.
    #[error("outer radius must exceed inner radius (r1={r1:?}, r2={r2:?})")]
    OuterNotBeyondInner { r1: Length, r2: Length },
}
