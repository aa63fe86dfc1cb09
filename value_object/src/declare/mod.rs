//! Static declarations of value-object types.
//!
//! [`ValueObjectSchema`] ties a Rust type to its [`ValueObjectType`], and the
//! marker types in this module name field kinds at the type level so that
//! `#[derive(ValueObject)]` can build the schema from a struct:
//!
//! ```
//! use value_object::declare::{Collection, Date, Nested, Primitive};
//! use value_object::{ValueObject, ValueObjectSchema};
//!
//! #[derive(ValueObject)]
//! struct Address {
//!     street: Primitive,
//! }
//!
//! #[derive(ValueObject)]
//! #[value_object(name = "Applicant")]
//! struct Applicant {
//!     name: Primitive,
//!     #[value_object(key = "dob")]
//!     date_of_birth: Date,
//!     addresses: Collection<Nested<Address>>,
//! }
//!
//! let vo_type = Applicant::value_object_type();
//! assert_eq!(vo_type.name(), "Applicant");
//! assert_eq!(vo_type.key_of("date_of_birth"), Some("dob"));
//! ```

use std::marker::PhantomData;

use crate::{
    Field, FieldKind, RawMap, StoredMap, TextEncoding, ValueObject, ValueObjectResult,
    ValueObjectType,
};

/// A Rust type with a fixed value-object schema.
pub trait ValueObjectSchema {
    /// The schema shared by every instance of this type.
    fn value_object_type() -> ValueObjectType;

    /// Construct an instance from a raw mapping.
    ///
    /// # Errors
    ///
    /// See [`ValueObjectType::construct`].
    fn construct(raw: RawMap) -> ValueObjectResult<ValueObject> {
        Self::value_object_type().construct(raw)
    }

    /// Turn a stored mapping into a raw mapping.
    ///
    /// # Errors
    ///
    /// See [`ValueObjectType::hydrate_values`].
    fn hydrate_values(stored: &StoredMap) -> ValueObjectResult<RawMap> {
        Self::value_object_type().hydrate_values(stored)
    }

    /// Hydrate a stored mapping and construct an instance from it.
    ///
    /// # Errors
    ///
    /// See [`ValueObjectType::hydrate`].
    fn hydrate(stored: &StoredMap) -> ValueObjectResult<ValueObject> {
        Self::value_object_type().hydrate(stored)
    }
}

/// A type-level name for a field kind.
pub trait DeclareField {
    /// The kind declared by this marker.
    fn declare() -> FieldKind;
}

/// Marker for [`FieldKind::Primitive`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Primitive;

/// Marker for [`FieldKind::Bytes`]; the encoding is set by attribute.
#[derive(Clone, Copy, Debug, Default)]
pub struct Bytes;

/// Marker for [`FieldKind::Date`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Date;

/// Marker for [`FieldKind::Datetime`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Datetime;

/// Marker for [`FieldKind::Decimal`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Decimal;

/// Marker for [`FieldKind::Collection`] of `T` entries.
#[derive(Debug, Default)]
pub struct Collection<T = Primitive>(PhantomData<T>);

/// Marker for [`FieldKind::Nested`] objects of schema `T`.
#[derive(Debug, Default)]
pub struct Nested<T>(PhantomData<T>);

impl DeclareField for Primitive {
    fn declare() -> FieldKind {
        FieldKind::Primitive
    }
}

impl DeclareField for Bytes {
    fn declare() -> FieldKind {
        FieldKind::Bytes {
            encoding: TextEncoding::default(),
        }
    }
}

impl DeclareField for Date {
    fn declare() -> FieldKind {
        FieldKind::Date
    }
}

impl DeclareField for Datetime {
    fn declare() -> FieldKind {
        FieldKind::Datetime
    }
}

impl DeclareField for Decimal {
    fn declare() -> FieldKind {
        FieldKind::Decimal
    }
}

impl<T: DeclareField> DeclareField for Collection<T> {
    fn declare() -> FieldKind {
        FieldKind::Collection(Box::new(Field::new(T::declare())))
    }
}

impl<T: ValueObjectSchema> DeclareField for Nested<T> {
    fn declare() -> FieldKind {
        FieldKind::Nested(T::value_object_type())
    }
}
