//! Field definitions: the typed converters behind every value-object slot.
//!
//! A [`Field`] moves one slot between four states: raw input, the internal
//! [`Value`], the storage form written by `dehydrate`, and the public form
//! produced for client-facing output. It also knows how to merge two internal
//! values of its own kind.

pub(crate) mod codec;
mod convert;
mod kind;
mod merge;
mod visibility;

pub use kind::{FieldKind, TextEncoding};
pub use visibility::Visibility;

use crate::{Value, ValueObjectType};

/// Declaration of a single value-object slot.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    key: Option<String>,
    visibility: Visibility,
    kind: FieldKind,
}

impl Field {
    /// Declare a field of the given kind, public, keyed by its attribute name.
    #[must_use]
    pub const fn new(kind: FieldKind) -> Self {
        Self {
            key: None,
            visibility: Visibility::Public,
            kind,
        }
    }

    /// JSON-compatible field stored as-is.
    #[must_use]
    pub const fn primitive() -> Self {
        Self::new(FieldKind::Primitive)
    }

    /// Byte-string field stored as UTF-8 text.
    #[must_use]
    pub const fn bytes() -> Self {
        Self::bytes_with_encoding(TextEncoding::Utf8)
    }

    /// Byte-string field stored as text in `encoding`.
    #[must_use]
    pub const fn bytes_with_encoding(encoding: TextEncoding) -> Self {
        Self::new(FieldKind::Bytes { encoding })
    }

    /// Date field stored as `YYYY-MM-DD`.
    #[must_use]
    pub const fn date() -> Self {
        Self::new(FieldKind::Date)
    }

    /// UTC datetime field stored as `YYYY-MM-DD HH:MM:SS`.
    #[must_use]
    pub const fn datetime() -> Self {
        Self::new(FieldKind::Datetime)
    }

    /// Exact decimal field stored as fixed-point text.
    #[must_use]
    pub const fn decimal() -> Self {
        Self::new(FieldKind::Decimal)
    }

    /// Keyed collection whose entries are all declared by `sub_field`.
    ///
    /// The sub-field's own key is ignored; entries are keyed by the
    /// collection's mapping keys.
    #[must_use]
    pub fn collection(sub_field: Self) -> Self {
        Self::new(FieldKind::Collection(Box::new(sub_field)))
    }

    /// Nested value object of type `vo_type`.
    #[must_use]
    pub const fn nested(vo_type: ValueObjectType) -> Self {
        Self::new(FieldKind::Nested(vo_type))
    }

    /// Read and write the field under `key` instead of its attribute name.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Replace the field's visibility policy.
    #[must_use]
    pub fn with_visibility(mut self, visibility: impl Into<Visibility>) -> Self {
        self.visibility = visibility.into();
        self
    }

    /// Hide the field from public output.
    #[must_use]
    pub fn private(self) -> Self {
        self.with_visibility(Visibility::Private)
    }

    /// Expose only the listed entries (collections) or fields (nested).
    #[must_use]
    pub fn public_only<I, S>(self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_visibility(Visibility::only(keys))
    }

    /// Change the text encoding of a bytes field, or of the entries of a
    /// collection of bytes. Other kinds are unchanged.
    #[must_use]
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.set_encoding(encoding);
        self
    }

    fn set_encoding(&mut self, encoding: TextEncoding) {
        match &mut self.kind {
            FieldKind::Bytes { encoding: current } => *current = encoding,
            FieldKind::Collection(entry) => entry.set_encoding(encoding),
            FieldKind::Primitive
            | FieldKind::Date
            | FieldKind::Datetime
            | FieldKind::Decimal
            | FieldKind::Nested(_) => {}
        }
    }

    /// The explicit key, if one was declared.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The field's visibility policy.
    #[must_use]
    pub const fn visibility(&self) -> &Visibility {
        &self.visibility
    }

    /// The field's kind.
    #[must_use]
    pub const fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Whether the field appears in its parent's public output by default.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.visibility.is_visible()
    }

    /// The internal value a null raw entry turns into.
    ///
    /// Collections default to an empty mapping and nested fields to an
    /// instance whose own fields are all at their defaults; scalars stay null.
    #[must_use]
    pub fn default_value(&self) -> Value {
        match &self.kind {
            FieldKind::Collection(_) => Value::Map(crate::RawMap::new()),
            FieldKind::Nested(vo_type) => Value::Object(vo_type.construct_empty()),
            FieldKind::Primitive
            | FieldKind::Bytes { .. }
            | FieldKind::Date
            | FieldKind::Datetime
            | FieldKind::Decimal => Value::Null,
        }
    }
}
