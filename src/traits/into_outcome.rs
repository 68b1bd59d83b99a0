//! Extension traits for lifting `Result` and `Option` values into [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use core::fmt;
//! use outcome_rail::traits::{IntoOutcome, OptionOutcomeExt};
//!
//! let from_result = Ok::<i32, fmt::Error>(3).into_outcome();
//! assert!(from_result.is_success());
//!
//! let from_option = None::<i32>.ok_or_failed(|| fmt::Error);
//! assert!(from_option.is_failure());
//! ```

use core::error::Error;

use crate::types::Outcome;

/// Converts a `Result` into an [`Outcome`] without losing either side.
pub trait IntoOutcome<V, E> {
    /// `Ok(v)` becomes `Succeeded(Some(v))` and `Err(e)` becomes `Failed(e)`.
    fn into_outcome(self) -> Outcome<V, E>;
}

impl<V, E: Error> IntoOutcome<V, E> for Result<V, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<V, E> {
        Outcome::from_result(self)
    }
}

/// Converts an `Option` into an [`Outcome`], supplying an error for `None`.
pub trait OptionOutcomeExt<V> {
    /// Same as [`Outcome::from_option`]; `supplier` runs only for `None`.
    fn ok_or_failed<E, S>(self, supplier: S) -> Outcome<V, E>
    where
        E: Error,
        S: FnOnce() -> E;
}

impl<V> OptionOutcomeExt<V> for Option<V> {
    #[inline]
    fn ok_or_failed<E, S>(self, supplier: S) -> Outcome<V, E>
    where
        E: Error,
        S: FnOnce() -> E,
    {
        Outcome::from_option(self, supplier)
    }
}
