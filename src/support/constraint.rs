//! Numeric constraints for process parameters.
//!
//! The wet-end core accepts any numeric input.
//! Code that wants guarantees (the boundary validation layer) wraps values
//! in [`Constrained<T, C>`],
//! where `C` is a zero-sized marker implementing [`Constraint<T>`]:
//!
//! - [`NonNegative`]: zero or greater (offers, drum speed, goods weight)
//! - [`StrictlyPositive`]: greater than zero (substrate thickness, drum diameter)
//!
//! Closed operating ranges that are only known at runtime are checked by
//! [`OperatingRange`], which reports violations with the same [`ConstraintError`].

mod non_negative;
mod strictly_positive;

use std::{cmp::Ordering, marker::PhantomData};

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A numeric invariant checked once, at construction.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a constraint or operating range is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use wet_end_models::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::millimeter};
///
/// let thickness = Length::new::<millimeter>(1.6);
/// let checked = Constrained::<_, StrictlyPositive>::new(thickness).unwrap();
/// assert_eq!(checked.into_inner(), thickness);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// A closed interval `[min, max]` of accepted values.
///
/// ```
/// use wet_end_models::support::constraint::{ConstraintError, OperatingRange};
///
/// let ph = OperatingRange::new(4.0, 8.0);
/// assert_eq!(ph.check(5.7), Ok(5.7));
/// assert_eq!(ph.check(8.5), Err(ConstraintError::AboveMaximum));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> OperatingRange<T> {
    /// Creates a range accepting `min ≤ x ≤ max`.
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Returns `value` if it lies in the range.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than `min`.
    /// - [`ConstraintError::AboveMaximum`] if greater than `max`.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn check(&self, value: T) -> ConstraintResult<T> {
        match (value.partial_cmp(&self.min), value.partial_cmp(&self.max)) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(value),
        }
    }
}
