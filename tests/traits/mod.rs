pub mod error_class;
pub mod into_outcome;
