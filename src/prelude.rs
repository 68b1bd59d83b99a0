//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Types**: [`Outcome`], [`BoxedError`]
//! - **Traits**: [`ErrorClass`], [`IntoOutcome`], [`OptionOutcomeExt`]
//! - **Classes**: [`of_type`], [`when`], [`narrow`], [`Always`]
//!
//! # Examples
//!
//! ```
//! use outcome_rail::prelude::*;
//! use std::num::ParseIntError;
//!
//! fn port(raw: &str) -> Result<Outcome<u16, ParseIntError>, BoxedError> {
//!     let parse = || -> Result<u16, BoxedError> { Ok(raw.parse::<u16>()?) };
//!     Outcome::of(parse, of_type::<ParseIntError>())
//! }
//!
//! assert_eq!(port("8080").unwrap().get(), Some(8080));
//! assert!(port("http").unwrap().is_failure());
//! ```

pub use crate::traits::{
    narrow, of_type, when, Always, ErrorClass, IntoOutcome, OptionOutcomeExt,
};
pub use crate::types::{BoxedError, Outcome};
