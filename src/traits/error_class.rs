//! Failure classification for [`Outcome::of`](crate::Outcome::of).
//!
//! An [`ErrorClass`] looks at a failure raised by a producer and either catches it,
//! yielding the error stored in `Outcome::Failed`, or hands it back untouched so it
//! keeps propagating. Four classes are provided:
//!
//! | Class | Built with | Catches |
//! |-------|------------|---------|
//! | [`OfType<E>`] | [`of_type`] | boxed trait objects whose concrete type is `E` |
//! | [`When<P>`] | [`when`] | failures satisfying a predicate |
//! | [`Narrow<F>`] | [`narrow`] | failures a conversion function accepts |
//! | [`Always`] | `Always` | every failure |
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{narrow, ErrorClass};
//! use std::num::{IntErrorKind, ParseIntError};
//!
//! let empty_only = narrow(|e: ParseIntError| {
//!     if *e.kind() == IntErrorKind::Empty {
//!         Ok(e)
//!     } else {
//!         Err(e)
//!     }
//! });
//!
//! let invalid = "x".parse::<u8>().unwrap_err();
//! assert!(empty_only.catch(invalid).is_err());
//! ```

use core::error::Error;
use core::fmt;
use core::marker::PhantomData;

use crate::types::alloc_type::Box;

/// Decides whether a producer failure of type `X` becomes a value-domain failure.
///
/// Implementors return `Ok(caught)` to capture the failure, or `Err(error)` with the
/// original failure to let it propagate.
pub trait ErrorClass<X> {
    /// The error stored in `Outcome::Failed` when a failure is caught.
    type Caught: Error;

    /// Classifies `error`, consuming the class.
    fn catch(self, error: X) -> Result<Self::Caught, X>;
}

/// Catches boxed trait objects whose concrete type is `E`, by downcasting.
///
/// Any other concrete type is handed back in its original box.
pub struct OfType<E> {
    _kind: PhantomData<fn() -> E>,
}

/// Builds an [`OfType`] class for the concrete error type `E`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{of_type, Outcome};
/// use std::error::Error;
/// use std::num::ParseIntError;
///
/// let parse = || -> Result<i32, Box<dyn Error + Send + Sync>> { Ok("x".parse::<i32>()?) };
/// let outcome = Outcome::of(parse, of_type::<ParseIntError>()).unwrap();
/// assert!(outcome.is_failure());
///
/// let parse = || -> Result<i32, Box<dyn Error + Send + Sync>> { Ok("x".parse::<i32>()?) };
/// let escaped = Outcome::of(parse, of_type::<std::fmt::Error>());
/// assert!(escaped.is_err());
/// ```
#[must_use]
#[inline]
pub fn of_type<E: Error + 'static>() -> OfType<E> {
    OfType { _kind: PhantomData }
}

impl<E> Clone for OfType<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for OfType<E> {}

impl<E> fmt::Debug for OfType<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OfType").field(&core::any::type_name::<E>()).finish()
    }
}

impl<E: Error + 'static> ErrorClass<Box<dyn Error + 'static>> for OfType<E> {
    type Caught = E;

    #[inline]
    fn catch(self, error: Box<dyn Error + 'static>) -> Result<E, Box<dyn Error + 'static>> {
        error.downcast::<E>().map(|caught| *caught)
    }
}

impl<E: Error + 'static> ErrorClass<Box<dyn Error + Send + Sync + 'static>> for OfType<E> {
    type Caught = E;

    #[inline]
    fn catch(
        self,
        error: Box<dyn Error + Send + Sync + 'static>,
    ) -> Result<E, Box<dyn Error + Send + Sync + 'static>> {
        error.downcast::<E>().map(|caught| *caught)
    }
}

/// Catches failures for which the predicate holds, keeping their type.
#[derive(Clone, Copy, Debug)]
pub struct When<P> {
    predicate: P,
}

/// Builds a [`When`] class from a predicate.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::{when, ErrorClass};
/// use std::fmt;
///
/// assert!(when(|_: &fmt::Error| true).catch(fmt::Error).is_ok());
/// assert!(when(|_: &fmt::Error| false).catch(fmt::Error).is_err());
/// ```
#[must_use]
#[inline]
pub fn when<P>(predicate: P) -> When<P> {
    When { predicate }
}

impl<X, P> ErrorClass<X> for When<P>
where
    X: Error,
    P: FnOnce(&X) -> bool,
{
    type Caught = X;

    #[inline]
    fn catch(self, error: X) -> Result<X, X> {
        if (self.predicate)(&error) {
            Ok(error)
        } else {
            Err(error)
        }
    }
}

/// Catches failures that a conversion function narrows into a caught error type.
#[derive(Clone, Copy, Debug)]
pub struct Narrow<F> {
    convert: F,
}

/// Builds a [`Narrow`] class; `convert` returns `Ok(caught)` or gives the failure back.
#[must_use]
#[inline]
pub fn narrow<F>(convert: F) -> Narrow<F> {
    Narrow { convert }
}

impl<X, E, F> ErrorClass<X> for Narrow<F>
where
    E: Error,
    F: FnOnce(X) -> Result<E, X>,
{
    type Caught = E;

    #[inline]
    fn catch(self, error: X) -> Result<E, X> {
        (self.convert)(error)
    }
}

/// Catches every failure unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Always;

impl<X: Error> ErrorClass<X> for Always {
    type Caught = X;

    #[inline]
    fn catch(self, error: X) -> Result<X, X> {
        Ok(error)
    }
}

/// Builds a [`When`] class catching [`std::io::Error`]s of the given kind.
///
/// Requires the `std` feature.
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::{io_kind, ErrorClass};
/// use std::io;
///
/// let not_found = io::Error::from(io::ErrorKind::NotFound);
/// assert!(io_kind(io::ErrorKind::NotFound).catch(not_found).is_ok());
/// ```
#[cfg(feature = "std")]
#[must_use]
#[inline]
pub fn io_kind(kind: std::io::ErrorKind) -> When<impl FnOnce(&std::io::Error) -> bool> {
    when(move |error: &std::io::Error| error.kind() == kind)
}
