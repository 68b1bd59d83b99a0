//! Core traits for building and classifying outcomes.
//!
//! - [`ErrorClass`]: decides which producer failures [`Outcome::of`](crate::Outcome::of)
//!   captures and which it lets propagate
//! - [`IntoOutcome`]: lifts a `Result` into an `Outcome`
//! - [`OptionOutcomeExt`]: lifts an `Option` into an `Outcome` with a default error
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{when, IntoOutcome};
//! use outcome_rail::Outcome;
//! use std::num::ParseIntError;
//!
//! let direct = "7".parse::<i32>().into_outcome();
//! let guarded = Outcome::of(|| "7".parse::<i32>(), when(|_: &ParseIntError| true));
//! assert_eq!(Ok(direct), guarded);
//! ```

pub mod error_class;
pub mod into_outcome;

#[cfg(feature = "std")]
pub use error_class::io_kind;
pub use error_class::{narrow, of_type, when, Always, ErrorClass, Narrow, OfType, When};
pub use into_outcome::{IntoOutcome, OptionOutcomeExt};
