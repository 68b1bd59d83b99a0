//! The [`Outcome`] type and its supporting aliases.
//!
//! # Examples
//!
//! ```
//! use core::fmt;
//! use outcome_rail::Outcome;
//!
//! let label = Outcome::<u32, fmt::Error>::succeeded(3)
//!     .map_value(|n| n * 2)
//!     .fold(|v| v.unwrap_or_default().to_string(), |_| "none".to_string());
//!
//! assert_eq!(label, "6");
//! ```
pub mod alloc_type;
pub mod outcome;

pub use outcome::*;

/// Boxed trait-object failure, the usual producer error for [`of_type`](crate::of_type) classes.
pub type BoxedError = alloc_type::Box<dyn core::error::Error + Send + Sync + 'static>;
