//! A success-or-failure [`Outcome`] type whose failures travel as values.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining Combinators
//!
//! ```
//! use core::fmt;
//! use outcome_rail::Outcome;
//!
//! let doubled = Outcome::<i32, fmt::Error>::succeeded(21)
//!     .map_value(|x| x * 2)
//!     .flat_map(|x| match x {
//!         Some(x) if x > 0 => Outcome::succeeded(x),
//!         _ => Outcome::failed(fmt::Error),
//!     });
//!
//! assert_eq!(doubled.get(), Some(42));
//! ```
//!
//! ## Capturing Only Some Failures
//!
//! ```
//! use outcome_rail::{of_type, BoxedError, Outcome};
//! use std::num::ParseIntError;
//!
//! fn parse(raw: &str) -> Result<i64, BoxedError> {
//!     Ok(raw.parse::<i64>()?)
//! }
//!
//! let captured = Outcome::of(|| parse("nope"), of_type::<ParseIntError>()).unwrap();
//! assert!(captured.is_failure());
//! ```
//!
//! ## Crossing Back Into `Result`
//!
//! ```
//! use core::fmt;
//! use outcome_rail::Outcome;
//!
//! let failed = Outcome::<i32, fmt::Error>::failed(fmt::Error);
//! assert_eq!(failed.or_else_throw(|| "unavailable"), Err("unavailable"));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Outcome and Result
pub mod convert;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Failure classification and extension traits
pub mod traits;
/// The Outcome type
pub mod types;

pub use traits::*;
pub use types::{BoxedError, Outcome};
