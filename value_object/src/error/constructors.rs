//! Constructors and path helpers for `ValueObjectError`.

use super::ValueObjectError;

impl ValueObjectError {
    /// Construct a [`ValueObjectError::MalformedValue`] with an empty path.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_object::ValueObjectError;
    /// let err = ValueObjectError::malformed("date text (YYYY-MM-DD)", "\"yesterday\"");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "malformed stored value: expected date text (YYYY-MM-DD), found \"yesterday\"",
    /// );
    /// ```
    #[must_use]
    pub fn malformed(expected: &'static str, found: impl Into<String>) -> Self {
        Self::MalformedValue {
            field: String::new(),
            expected,
            found: found.into(),
        }
    }

    /// Construct a [`ValueObjectError::UnexpectedValue`] with an empty path.
    #[must_use]
    pub fn unexpected(expected: &'static str, found: impl Into<String>) -> Self {
        Self::UnexpectedValue {
            field: String::new(),
            expected,
            found: found.into(),
        }
    }

    /// Construct a [`ValueObjectError::TypeMismatch`] with an empty path.
    #[must_use]
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            field: String::new(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Construct a [`ValueObjectError::InvalidDefinition`].
    #[must_use]
    pub fn invalid_definition(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDefinition {
            type_name: type_name.into(),
            message: message.into(),
        }
    }

    /// Prefix the field path of a field-level error with `parent`.
    ///
    /// Errors without a field path are returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_object::ValueObjectError;
    /// let err = ValueObjectError::unexpected("date", "text")
    ///     .within("street")
    ///     .within("home")
    ///     .within("addresses");
    /// assert_eq!(err.field(), Some("addresses.home.street"));
    /// ```
    #[must_use]
    pub fn within(self, parent: &str) -> Self {
        match self {
            Self::MalformedValue {
                field,
                expected,
                found,
            } => Self::MalformedValue {
                field: join_path(parent, &field),
                expected,
                found,
            },
            Self::UnexpectedValue {
                field,
                expected,
                found,
            } => Self::UnexpectedValue {
                field: join_path(parent, &field),
                expected,
                found,
            },
            Self::TypeMismatch {
                field,
                expected,
                found,
            } => Self::TypeMismatch {
                field: join_path(parent, &field),
                expected,
                found,
            },
            other => other,
        }
    }

    /// Returns the dotted field path for field-level errors.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MalformedValue { field, .. }
            | Self::UnexpectedValue { field, .. }
            | Self::TypeMismatch { field, .. } => Some(field),
            _ => None,
        }
    }
}

fn join_path(parent: &str, child: &str) -> String {
    if child.is_empty() {
        parent.to_owned()
    } else {
        format!("{parent}.{child}")
    }
}
