use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, sign_of};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Works with any type that implements [`PartialOrd`] and [`Zero`], including
/// `f64` and `uom` quantities such as `Power`.
///
/// # Example
///
/// ```
/// use gravion_core::constraint::NonNegative;
///
/// let rpm = NonNegative::new(12_000.0).unwrap();
/// assert_eq!(rpm.into_inner(), 12_000.0);
///
/// assert!(NonNegative::new(-1.0).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Fails if the value is negative or not comparable (NaN).
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match sign_of(value) {
            Some(std::cmp::Ordering::Less) => Err(ConstraintError::Negative),
            Some(_) => Ok(()),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
