//! Numeric constraints checked once at construction.
//!
//! Inputs to the HST model arrive as raw numbers or [`uom`] quantities.
//! Wrapping a value in [`Constrained<T, C>`] records that it passed the check
//! for marker `C`, so downstream stages can rely on it without re-validating.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: greater than zero (speeds, displacements, powers)
//! - [`NonNegative`]: zero or greater (charge pressures, clearances)
//!
//! Both markers reject `NaN`.
//! Custom constraints implement [`Constraint<T>`] on a zero-sized marker.

mod non_negative;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A numeric invariant checked at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// The reason a value failed a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A value known to satisfy constraint `C`.
///
/// # Example
///
/// ```
/// use hst_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let pistons = Constrained::<u32, StrictlyPositive>::new(9).unwrap();
/// assert_eq!(pistons.into_inner(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C` and wraps it.
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
