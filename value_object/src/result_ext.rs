//! Extensions for attaching context to `ValueObjectResult` concisely.
//!
//! These helpers reduce repetitive `.map_err(|e| e.within(…))` and
//! `.map_err(ValueObjectError::from)` patterns at field boundaries.
//!
//! - Use [`ValueObjectResultExt::within_field`] to prefix the field path of
//!   any field-level error raised by a nested conversion.
//! - Use [`IntoValueObjectResult::into_value_object`] for error types that
//!   implement `Into<ValueObjectError>` (e.g., `serde_json::Error`).
//!
//! # Examples
//!
//! ```
//! use value_object::{IntoValueObjectResult, ValueObjectResult};
//!
//! fn parse(text: &str) -> ValueObjectResult<serde_json::Value> {
//!     serde_json::from_str(text).into_value_object()
//! }
//! assert!(parse("{").is_err());
//! ```

use crate::{ValueObjectError, ValueObjectResult};

/// Field-path extension for results produced by field conversions.
pub trait ValueObjectResultExt<T> {
    /// Prefix the error's field path with `field`.
    ///
    /// # Errors
    ///
    /// Propagates the original error with its path extended.
    fn within_field(self, field: &str) -> ValueObjectResult<T>;
}

impl<T> ValueObjectResultExt<T> for ValueObjectResult<T> {
    fn within_field(self, field: &str) -> ValueObjectResult<T> {
        self.map_err(|err| err.within(field))
    }
}

/// Generic extension for mapping any `Result<T, E>` with
/// `E: Into<ValueObjectError>` into a `ValueObjectResult<T>`.
pub trait IntoValueObjectResult<T, E> {
    /// Convert `Result<T, E>` into `ValueObjectResult<T>` using
    /// `Into<ValueObjectError>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion.
    fn into_value_object(self) -> ValueObjectResult<T>;
}

impl<T, E> IntoValueObjectResult<T, E> for Result<T, E>
where
    E: Into<ValueObjectError>,
{
    fn into_value_object(self) -> ValueObjectResult<T> {
        self.map_err(Into::into)
    }
}
