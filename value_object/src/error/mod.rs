//! Error types produced by value-object conversions.

mod constructors;
mod types;

pub use types::ValueObjectError;

/// Result alias used throughout the crate.
pub type ValueObjectResult<T> = Result<T, ValueObjectError>;
