//! Conversion helpers between [`Outcome`] and `Result`.
//!
//! These adapters make it straightforward to adopt `Outcome` at the edges of an
//! existing `Result`-based codebase, and to hand an outcome back to code that
//! expects a `Result`.
//!
//! # Examples
//!
//! ```
//! use core::fmt;
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let outcome = result_to_outcome(Ok::<i32, fmt::Error>(42));
//! assert!(outcome.is_success());
//!
//! let back = outcome_to_result(Outcome::<i32, fmt::Error>::failed(fmt::Error));
//! assert_eq!(back, Err(fmt::Error));
//! ```

use core::error::Error;

use crate::types::Outcome;

impl<V, E: Error> Outcome<V, E> {
    /// Wraps a `Result`: `Ok(v)` becomes `Succeeded(Some(v))`, `Err(e)` becomes `Failed(e)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::fmt;
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::from_result(Err::<i32, _>(fmt::Error));
    /// assert_eq!(o, Outcome::Failed(fmt::Error));
    /// ```
    #[inline]
    pub fn from_result(result: Result<V, E>) -> Self {
        match result {
            Ok(value) => Self::succeeded(value),
            Err(error) => Self::Failed(error),
        }
    }

    /// Converts into a `Result`, keeping the held error.
    ///
    /// The value slot is returned as is, so `Succeeded(None)` becomes `Ok(None)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::fmt;
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, fmt::Error>::succeeded(1).into_result(), Ok(Some(1)));
    /// assert_eq!(Outcome::<i32, fmt::Error>::Succeeded(None).into_result(), Ok(None));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<Option<V>, E> {
        match self {
            Self::Succeeded(value) => Ok(value),
            Self::Failed(error) => Err(error),
        }
    }
}

impl<V, E: Error> From<Result<V, E>> for Outcome<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        Self::from_result(result)
    }
}

impl<V, E: Error> From<Outcome<V, E>> for Result<Option<V>, E> {
    #[inline]
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.into_result()
    }
}

/// Converts an `Outcome` into a `Result`, treating a missing value as `Ok(None)`.
#[inline]
pub fn outcome_to_result<V, E: Error>(outcome: Outcome<V, E>) -> Result<Option<V>, E> {
    outcome.into_result()
}

/// Converts a `Result` into an `Outcome`.
#[inline]
pub fn result_to_outcome<V, E: Error>(result: Result<V, E>) -> Outcome<V, E> {
    Outcome::from_result(result)
}

/// Converts an `Outcome` into a `Result`, substituting a default error when succeeded without a value.
///
/// # Examples
///
/// ```
/// use core::fmt;
/// use outcome_rail::convert::outcome_to_result_or;
/// use outcome_rail::Outcome;
///
/// let empty = Outcome::<i32, fmt::Error>::Succeeded(None);
/// assert_eq!(outcome_to_result_or(empty, || fmt::Error), Err(fmt::Error));
/// ```
#[inline]
pub fn outcome_to_result_or<V, E, S>(outcome: Outcome<V, E>, absent: S) -> Result<V, E>
where
    E: Error,
    S: FnOnce() -> E,
{
    match outcome {
        Outcome::Succeeded(Some(value)) => Ok(value),
        Outcome::Succeeded(None) => Err(absent()),
        Outcome::Failed(error) => Err(error),
    }
}
