//! Sample value-object types used across the integration suites.
//!
//! Each constructor builds its schema with [`ValueObjectType::builder`], so
//! the runtime API is exercised independently of `#[derive(ValueObject)]`.

use anyhow::Result;
use value_object::{Field, ValueObjectType};

/// Three primitives, one of them stored under a camel-case key.
///
/// # Errors
///
/// Returns an error if the schema is rejected.
pub fn simple() -> Result<ValueObjectType> {
    Ok(ValueObjectType::builder("Simple")
        .field("name", Field::primitive())
        .field("age", Field::primitive())
        .field("favorite_color", Field::primitive().with_key("favoriteColor"))
        .build()?)
}

/// One field of each scalar kind with its own storage format.
///
/// # Errors
///
/// Returns an error if the schema is rejected.
pub fn typed() -> Result<ValueObjectType> {
    Ok(ValueObjectType::builder("Typed")
        .field("bytes", Field::bytes())
        .field("date", Field::date())
        .field("datetime", Field::datetime())
        .field("decimal", Field::decimal())
        .build()?)
}

/// A collection of primitives and a collection of dates.
///
/// # Errors
///
/// Returns an error if the schema is rejected.
pub fn complex() -> Result<ValueObjectType> {
    Ok(ValueObjectType::builder("Complex")
        .field(
            "simple",
            Field::collection(Field::primitive()).with_key("simpleCollection"),
        )
        .field(
            "dates",
            Field::collection(Field::date()).with_key("dateCollection"),
        )
        .build()?)
}

/// A loan with a single primitive amount.
///
/// # Errors
///
/// Returns an error if the schema is rejected.
pub fn loan() -> Result<ValueObjectType> {
    Ok(ValueObjectType::builder("Loan")
        .field("amount", Field::primitive())
        .build()?)
}

/// A street address.
///
/// # Errors
///
/// Returns an error if the schema is rejected.
pub fn address() -> Result<ValueObjectType> {
    Ok(ValueObjectType::builder("Address")
        .field("street", Field::primitive())
        .build()?)
}

/// An applicant holding a nested [`loan`] and a collection of [`address`]es.
///
/// # Errors
///
/// Returns an error if any schema is rejected.
pub fn applicant() -> Result<ValueObjectType> {
    Ok(ValueObjectType::builder("Applicant")
        .field("name", Field::primitive())
        .field("loan", Field::nested(loan()?))
        .field("addresses", Field::collection(Field::nested(address()?)))
        .build()?)
}

/// Two public primitives and a private one.
///
/// # Errors
///
/// Returns an error if the schema is rejected.
pub fn partial_simple() -> Result<ValueObjectType> {
    Ok(ValueObjectType::builder("PartialVisibilitySimple")
        .field("public1", Field::primitive())
        .field("public2", Field::primitive())
        .field("private", Field::primitive().private())
        .build()?)
}

/// Public, private and key-restricted variants of collections and nested
/// [`partial_simple`] objects.
///
/// # Errors
///
/// Returns an error if any schema is rejected.
pub fn partial_complex() -> Result<ValueObjectType> {
    let nested = partial_simple()?;
    Ok(ValueObjectType::builder("PartialVisibilityComplex")
        .field(
            "public_collection",
            Field::collection(Field::primitive()).with_key("publicCollection"),
        )
        .field(
            "private_collection",
            Field::collection(Field::primitive())
                .with_key("privateCollection")
                .private(),
        )
        .field(
            "partial_collection",
            Field::collection(Field::primitive())
                .with_key("partialCollection")
                .public_only(["alpha", "charlie", "delta"]),
        )
        .field(
            "public_nested",
            Field::nested(nested.clone()).with_key("publicNested"),
        )
        .field(
            "private_nested",
            Field::nested(nested.clone())
                .with_key("privateNested")
                .private(),
        )
        .field(
            "partial_nested",
            Field::nested(nested)
                .with_key("partialNested")
                .public_only(["public1", "private", "foo"]),
        )
        .build()?)
}
