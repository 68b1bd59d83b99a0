use core::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::traits::ErrorClass;

/// The outcome of an operation that either succeeded with a value or failed with an error.
///
/// `Outcome<V, E>` treats failure as ordinary data: a `Failed` outcome flows through
/// combinators exactly like a `Succeeded` one, and nothing is raised until a caller
/// explicitly asks for it at a boundary (see [`Outcome::or_else_throw`]).
///
/// The value slot of `Succeeded` is an explicit `Option`, so a succeeded outcome may
/// hold no value at all. Such an outcome keeps its `Succeeded` tag but is *not* reported
/// by [`is_success`](Outcome::is_success); see that method for details.
///
/// # Serde Support
///
/// `Outcome` implements `Serialize` and `Deserialize` when `V` and `E` do.
///
/// # Type Parameters
///
/// * `V` - The success value type
/// * `E` - The error type; operations require `E: core::error::Error`
///
/// # Variants
///
/// * `Succeeded(Option<V>)` - A succeeded operation and its (possibly absent) value
/// * `Failed(E)` - A failed operation and its error
///
/// # Examples
///
/// ```
/// use core::fmt;
/// use outcome_rail::Outcome;
///
/// let ok = Outcome::<i32, fmt::Error>::succeeded(5).map_value(|x| x + 1);
/// assert_eq!(ok, Outcome::Succeeded(Some(6)));
///
/// let failed = Outcome::<i32, fmt::Error>::failed(fmt::Error).map_value(|x| x + 1);
/// assert!(failed.is_failure());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<V, E> {
    Succeeded(Option<V>),
    Failed(E),
}

impl<V, E: Error> Outcome<V, E> {
    /// Creates a succeeded outcome holding `value`.
    ///
    /// A succeeded outcome without a value is spelled `Outcome::Succeeded(None)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::fmt;
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, fmt::Error>::succeeded(42);
    /// assert_eq!(o.value(), Some(&42));
    /// ```
    #[inline]
    pub fn succeeded(value: V) -> Self {
        Self::Succeeded(Some(value))
    }

    /// Creates a failed outcome holding `error`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::fmt;
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, fmt::Error>::failed(fmt::Error);
    /// assert_eq!(o.error(), Some(&fmt::Error));
    /// ```
    #[inline]
    pub fn failed(error: E) -> Self {
        Self::Failed(error)
    }

    /// Runs `producer` and captures its failure if `class` recognises it.
    ///
    /// * `Ok(value)` from the producer becomes `Succeeded(Some(value))`.
    /// * `Err(x)` that `class` catches becomes `Failed(caught)`.
    /// * `Err(x)` that `class` rejects is handed back as `Err(x)`, unchanged, so the
    ///   caller can keep propagating it with `?`.
    ///
    /// The producer runs exactly once, synchronously, on the calling thread.
    ///
    /// # Arguments
    ///
    /// * `producer` - The fallible computation to run
    /// * `class` - Decides which producer failures are captured
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{of_type, when, Outcome};
    /// use std::num::ParseIntError;
    ///
    /// let parsed = Outcome::of(|| "12".parse::<i32>(), when(|_: &ParseIntError| true));
    /// assert_eq!(parsed, Ok(Outcome::Succeeded(Some(12))));
    ///
    /// let boxed = || -> Result<i32, Box<dyn std::error::Error + Send + Sync>> {
    ///     Ok("x".parse::<i32>()?)
    /// };
    /// let caught = Outcome::of(boxed, of_type::<ParseIntError>()).unwrap();
    /// assert!(caught.is_failure());
    /// ```
    pub fn of<X, P, C>(producer: P, class: C) -> Result<Self, X>
    where
        P: FnOnce() -> Result<V, X>,
        C: ErrorClass<X, Caught = E>,
    {
        match producer() {
            Ok(value) => Ok(Self::succeeded(value)),
            Err(failure) => match class.catch(failure) {
                Ok(error) => {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(error = %error, "producer failure captured as Failed");
                    Ok(Self::Failed(error))
                }
                Err(failure) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("producer failure outside the requested class, propagating");
                    Err(failure)
                }
            },
        }
    }

    /// Wraps a possibly absent value, substituting a default error when it is missing.
    ///
    /// `supplier` is called only when `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::fmt;
    /// use outcome_rail::Outcome;
    ///
    /// let present = Outcome::from_option(Some(5), || fmt::Error);
    /// assert_eq!(present, Outcome::Succeeded(Some(5)));
    ///
    /// let missing = Outcome::<i32, _>::from_option(None, || fmt::Error);
    /// assert_eq!(missing, Outcome::Failed(fmt::Error));
    /// ```
    #[inline]
    pub fn from_option<S>(value: Option<V>, supplier: S) -> Self
    where
        S: FnOnce() -> E,
    {
        match value {
            Some(value) => Self::succeeded(value),
            None => Self::Failed(supplier()),
        }
    }

    /// Returns the held value, or `None` if failed or no value was held.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Succeeded(value) => value.as_ref(),
            Self::Failed(_) => None,
        }
    }

    /// Returns the held error, or `None` if succeeded.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Succeeded(_) => None,
            Self::Failed(error) => Some(error),
        }
    }

    /// Returns `true` if the outcome succeeded **and** holds a value.
    ///
    /// `Succeeded(None)` reports `false` here while also reporting `false` from
    /// [`is_failure`](Outcome::is_failure): the two predicates are not complements.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::fmt;
    /// use outcome_rail::Outcome;
    ///
    /// assert!(Outcome::<i32, fmt::Error>::succeeded(1).is_success());
    ///
    /// let empty = Outcome::<i32, fmt::Error>::Succeeded(None);
    /// assert!(!empty.is_success());
    /// assert!(!empty.is_failure());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded(Some(_)))
    }

    /// Returns `true` if the outcome failed.
    #[must_use]
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Borrows the payload, producing an `Outcome<&V, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Self::Succeeded(value) => Outcome::Succeeded(value.as_ref()),
            Self::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Extracts the held value slot; `None` when failed. Never panics.
    #[must_use]
    #[inline]
    pub fn get(self) -> Option<V> {
        match self {
            Self::Succeeded(value) => value,
            Self::Failed(_) => None,
        }
    }

    /// Extracts the held error; `None` when succeeded.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Succeeded(_) => None,
            Self::Failed(error) => Some(error),
        }
    }

    /// Returns the held value slot if succeeded, otherwise `Some(fallback)`.
    ///
    /// Dispatches on the variant tag only, so `Succeeded(None)` yields `None` rather
    /// than the fallback.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::fmt;
    /// use outcome_rail::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, fmt::Error>::succeeded(1).or_else(2), Some(1));
    /// assert_eq!(Outcome::<i32, fmt::Error>::failed(fmt::Error).or_else(2), Some(2));
    /// assert_eq!(Outcome::<i32, fmt::Error>::Succeeded(None).or_else(2), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn or_else(self, fallback: V) -> Option<V> {
        match self {
            Self::Succeeded(value) => value,
            Self::Failed(_) => Some(fallback),
        }
    }

    /// Like [`or_else`](Outcome::or_else), but computes the fallback only when failed.
    #[must_use]
    #[inline]
    pub fn or_else_get<F>(self, fallback: F) -> Option<V>
    where
        F: FnOnce() -> V,
    {
        match self {
            Self::Succeeded(value) => value,
            Self::Failed(_) => Some(fallback()),
        }
    }

    /// Converts a failed outcome back into a propagating failure.
    ///
    /// On `Succeeded` the held value slot is returned and `error` is never called. On
    /// `Failed` the held error is dropped, `error` is called once, and its result is
    /// returned as `Err` for `?`-style propagation. Use
    /// [`into_result`](Outcome::into_result) to keep the held error instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::fmt;
    /// use outcome_rail::Outcome;
    ///
    /// fn load(o: Outcome<u8, fmt::Error>) -> Result<u8, &'static str> {
    ///     let value = o.or_else_throw(|| "load failed")?;
    ///     Ok(value.unwrap_or_default())
    /// }
    ///
    /// assert_eq!(load(Outcome::succeeded(7)), Ok(7));
    /// assert_eq!(load(Outcome::failed(fmt::Error)), Err("load failed"));
    /// ```
    pub fn or_else_throw<X, F>(self, error: F) -> Result<Option<V>, X>
    where
        F: FnOnce() -> X,
    {
        match self {
            Self::Succeeded(value) => Ok(value),
            Self::Failed(_held) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_held, "raising failed outcome");
                Err(error())
            }
        }
    }

    /// Maps the held value slot, leaving failures untouched.
    ///
    /// Dispatches on the variant tag only: `f` runs for every `Succeeded`, receiving
    /// the slot as is (`None` for an absent value), and its result becomes the new
    /// slot. See [`map_value`](Outcome::map_value) for mapping present values only.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::fmt;
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, fmt::Error>::succeeded(5).map(|v| v.map(|x| x + 1));
    /// assert_eq!(o, Outcome::Succeeded(Some(6)));
    ///
    /// let filled = Outcome::<i32, fmt::Error>::Succeeded(None).map(|v| Some(v.unwrap_or(0)));
    /// assert!(filled.is_success());
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(Option<V>) -> Option<U>,
    {
        match self {
            Self::Succeeded(value) => Outcome::Succeeded(f(value)),
            Self::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Maps a present value, leaving failures and absent values untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::fmt;
    /// use outcome_rail::Outcome;
    ///
    /// let o = Outcome::<i32, fmt::Error>::succeeded(1).map_value(|v| v.to_string());
    /// assert_eq!(o.get().as_deref(), Some("1"));
    /// ```
    #[inline]
    pub fn map_value<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(V) -> U,
    {
        self.map(|value| value.map(f))
    }

    /// Chains a computation that produces its own outcome.
    ///
    /// `f` runs for every `Succeeded`, receiving the held slot, and its outcome is
    /// returned as is. A failure passes through without calling `f`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::fmt;
    /// use outcome_rail::Outcome;
    ///
    /// fn half(x: Option<i32>) -> Outcome<i32, fmt::Error> {
    ///     match x {
    ///         Some(x) if x % 2 == 0 => Outcome::succeeded(x / 2),
    ///         _ => Outcome::failed(fmt::Error),
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::succeeded(8).flat_map(half).get(), Some(4));
    /// assert!(Outcome::succeeded(3).flat_map(half).is_failure());
    /// assert!(Outcome::Succeeded(None).flat_map(half).is_failure());
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(Option<V>) -> Outcome<U, E>,
    {
        match self {
            Self::Succeeded(value) => f(value),
            Self::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Maps the held error, leaving a succeeded outcome untouched.
    #[inline]
    pub fn map_error<X, F>(self, f: F) -> Outcome<V, X>
    where
        X: Error,
        F: FnOnce(E) -> X,
    {
        match self {
            Self::Succeeded(value) => Outcome::Succeeded(value),
            Self::Failed(error) => Outcome::Failed(f(error)),
        }
    }

    /// Recovers from, or re-classifies, a failure with a computation producing its own outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::fmt;
    /// use outcome_rail::Outcome;
    ///
    /// let recovered = Outcome::<i32, fmt::Error>::failed(fmt::Error)
    ///     .flat_map_error(|_| Outcome::<i32, fmt::Error>::succeeded(0));
    /// assert_eq!(recovered.get(), Some(0));
    /// ```
    #[inline]
    pub fn flat_map_error<X, F>(self, f: F) -> Outcome<V, X>
    where
        X: Error,
        F: FnOnce(E) -> Outcome<V, X>,
    {
        match self {
            Self::Succeeded(value) => Outcome::Succeeded(value),
            Self::Failed(error) => f(error),
        }
    }

    /// Maps whichever side the variant carries in a single dispatch.
    ///
    /// Exactly one closure runs. Equivalent to `map(on_value).map_error(on_error)`.
    #[inline]
    pub fn transform<U, X, F, G>(self, on_value: F, on_error: G) -> Outcome<U, X>
    where
        X: Error,
        F: FnOnce(Option<V>) -> Option<U>,
        G: FnOnce(E) -> X,
    {
        match self {
            Self::Succeeded(value) => Outcome::Succeeded(on_value(value)),
            Self::Failed(error) => Outcome::Failed(on_error(error)),
        }
    }

    /// Replaces the outcome with the one produced for whichever side the variant carries.
    ///
    /// Exactly one closure runs. Equivalent to
    /// `flat_map(on_value).flat_map_error(on_error)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::fmt;
    /// use outcome_rail::Outcome;
    ///
    /// let require = |o: Outcome<i32, fmt::Error>| {
    ///     o.lift(
    ///         |v| v.map_or_else(|| Outcome::failed(fmt::Error), Outcome::succeeded),
    ///         |e| Outcome::<i32, fmt::Error>::failed(e),
    ///     )
    /// };
    ///
    /// assert!(require(Outcome::succeeded(1)).is_success());
    /// assert!(require(Outcome::Succeeded(None)).is_failure());
    /// ```
    #[inline]
    pub fn lift<U, X, F, G>(self, on_value: F, on_error: G) -> Outcome<U, X>
    where
        X: Error,
        F: FnOnce(Option<V>) -> Outcome<U, X>,
        G: FnOnce(E) -> Outcome<U, X>,
    {
        match self {
            Self::Succeeded(value) => on_value(value),
            Self::Failed(error) => on_error(error),
        }
    }

    /// Collapses the outcome into a single value.
    ///
    /// `on_value` receives the held value slot verbatim, including absence, so
    /// exactly one of the two closures runs for every outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::fmt;
    /// use outcome_rail::Outcome;
    ///
    /// let render = |o: Outcome<i32, fmt::Error>| {
    ///     o.fold(|v| v.map_or_else(String::new, |v| v.to_string()), |_| "fallback".to_string())
    /// };
    ///
    /// assert_eq!(render(Outcome::succeeded(1)), "1");
    /// assert_eq!(render(Outcome::failed(fmt::Error)), "fallback");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, on_value: F, on_error: G) -> U
    where
        F: FnOnce(Option<V>) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Self::Succeeded(value) => on_value(value),
            Self::Failed(error) => on_error(error),
        }
    }

    /// Returns `true` if the outcome succeeded and `predicate` accepts the held slot.
    ///
    /// Always `false` for a failure, without calling `predicate`.
    ///
    /// # Examples
    ///
    /// ```
    /// use core::fmt;
    /// use outcome_rail::Outcome;
    ///
    /// assert!(Outcome::<i32, fmt::Error>::succeeded(1).any(|v| v == Some(&1)));
    /// assert!(Outcome::<i32, fmt::Error>::Succeeded(None).any(|v| v.is_none()));
    /// assert!(!Outcome::<i32, fmt::Error>::failed(fmt::Error).any(|_| true));
    /// ```
    #[must_use]
    #[inline]
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(Option<&V>) -> bool,
    {
        match self {
            Self::Succeeded(value) => predicate(value.as_ref()),
            Self::Failed(_) => false,
        }
    }
}
