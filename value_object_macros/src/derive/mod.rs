//! Implementation of `#[derive(ValueObject)]`.
//!
//! Parsing validates the struct and its `#[value_object(...)]` attributes;
//! generation emits the `ValueObjectSchema` impl.

pub(crate) mod crate_path;
mod generate;
mod parse;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Expand the derive for `input`.
pub(crate) fn derive_value_object(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    Ok(generate::value_object_impl(&parsed))
}
