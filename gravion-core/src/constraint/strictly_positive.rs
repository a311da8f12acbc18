use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, sign_of};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// # Example
///
/// ```
/// use gravion_core::constraint::{ConstraintError, StrictlyPositive};
///
/// assert!(StrictlyPositive::new(0.005).is_ok());
/// assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is positive.
    ///
    /// # Errors
    ///
    /// Fails if the value is zero, negative, or not comparable (NaN).
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match sign_of(value) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
