//! Procedural macros for `value_object`.
//!
//! `#[derive(ValueObject)]` turns a struct whose fields are `value_object`
//! declaration markers (`Primitive`, `Date`, `Collection<Nested<T>>`, ...)
//! into an implementation of `ValueObjectSchema`. Field keys default to the
//! field names and can be overridden per field with `key = "..."` or for the
//! whole struct with `rename_all = "..."`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive `value_object::ValueObjectSchema` for a struct of field markers.
///
/// Struct attributes: `name = "..."`, `crate = "..."`, `rename_all = "..."`.
/// Field attributes: `key = "..."`, `public = true|false`,
/// `public("key", ...)` (collections and nested fields only) and
/// `encoding = "..."` (`Bytes` and `Collection<Bytes>` fields only).
///
/// Collection entries are otherwise declared with default settings, so
/// entry-level visibility inside a `Collection<Nested<T>>` needs a schema
/// built with `ValueObjectType::builder`.
#[proc_macro_derive(ValueObject, attributes(value_object))]
pub fn derive_value_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::derive_value_object(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
