//! Primary error enum for value-object conversions.

use thiserror::Error;

/// Errors raised while building, hydrating or merging value objects.
///
/// Field-level variants carry a dotted `field` path (`loan.amount`,
/// `addresses.home.street`). The path is empty when the error was raised by a
/// bare [`crate::Field`] outside of any value object.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ValueObjectError {
    /// A stored value did not match the strict format of its field.
    #[error("malformed stored value{}: expected {expected}, found {found}", at(.field))]
    MalformedValue {
        /// Dotted path of the offending field.
        field: String,
        /// Description of the accepted storage shape.
        expected: &'static str,
        /// Description of what was found instead.
        found: String,
    },

    /// A raw value handed to a field was of the wrong kind.
    #[error("unexpected raw value{}: expected {expected}, found {found}", at(.field))]
    UnexpectedValue {
        /// Dotted path of the offending field.
        field: String,
        /// Description of the accepted raw shape.
        expected: &'static str,
        /// Kind of value found instead.
        found: String,
    },

    /// Two value objects of different types met in a merge or nested field.
    #[error("type mismatch{}: expected '{expected}' value object, found '{found}'", at(.field))]
    TypeMismatch {
        /// Dotted path of the nested field, empty for a top-level update.
        field: String,
        /// Name of the expected value-object type.
        expected: String,
        /// Name of the value-object type that was supplied.
        found: String,
    },

    /// Lookup of an attribute that the value-object type does not declare.
    #[error("'{type_name}' object has no attribute '{attribute}'")]
    UnknownAttribute {
        /// Name of the value-object type.
        type_name: String,
        /// Attribute that was requested.
        attribute: String,
    },

    /// A value-object type declaration was rejected by the builder.
    #[error("invalid definition for '{type_name}': {message}")]
    InvalidDefinition {
        /// Name of the value-object type being built.
        type_name: String,
        /// Human-readable explanation of the problem.
        message: String,
    },

    /// A session document could not be encoded or decoded as JSON.
    #[error("session document JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn at(field: &str) -> String {
    if field.is_empty() {
        String::new()
    } else {
        format!(" for '{field}'")
    }
}
