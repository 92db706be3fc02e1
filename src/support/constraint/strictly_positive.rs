use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is greater than zero.
///
/// Geometric inputs such as substrate thickness and drum diameter must be
/// strictly positive to be physically meaningful.
///
/// # Examples
///
/// ```
/// use wet_end_models::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Length, length::meter};
///
/// let diameter = StrictlyPositive::new(Length::new::<meter>(3.0)).unwrap();
/// assert_eq!(diameter.as_ref().get::<meter>(), 3.0);
///
/// assert!(StrictlyPositive::new(Length::new::<meter>(0.0)).is_err());
/// assert!(StrictlyPositive::new(-1.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Length, length::millimeter};

    #[test]
    fn thickness() {
        assert!(StrictlyPositive::new(Length::new::<millimeter>(0.5)).is_ok());
        assert_eq!(
            StrictlyPositive::new(Length::new::<millimeter>(0.0)).unwrap_err(),
            ConstraintError::Zero
        );
        assert_eq!(
            StrictlyPositive::new(Length::new::<millimeter>(-1.0)).unwrap_err(),
            ConstraintError::Negative
        );
    }

    #[test]
    fn nan_is_rejected() {
        assert_eq!(
            StrictlyPositive::new(f64::NAN).unwrap_err(),
            ConstraintError::NotANumber
        );
    }
}
