//! Code generation for the `ValueObjectSchema` implementation.
//!
//! The generated impl builds the schema once, caches it in a
//! `std::sync::OnceLock`, and hands out cheap clones.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::crate_path;
use super::parse::{FieldSpec, ParsedInput, PublicAttr};

/// Generate the `Field` expression for one declared field.
pub(crate) fn field_tokens(krate: &TokenStream, spec: &FieldSpec) -> TokenStream {
    let ty = &spec.ty;
    let mut tokens = quote! {
        #krate::Field::new(<#ty as #krate::DeclareField>::declare())
    };
    if spec.key != spec.attribute {
        let key = &spec.key;
        tokens = quote! { #tokens.with_key(#key) };
    }
    match &spec.attrs.public {
        Some((PublicAttr::Flag(false), _)) => {
            tokens = quote! { #tokens.private() };
        }
        Some((PublicAttr::Only(keys), _)) => {
            tokens = quote! { #tokens.public_only([#(#keys),*]) };
        }
        Some((PublicAttr::Flag(true), _)) | None => {}
    }
    if let Some((encoding, _)) = spec.attrs.encoding {
        let variant = format_ident!("{}", encoding.variant());
        tokens = quote! { #tokens.with_encoding(#krate::TextEncoding::#variant) };
    }
    tokens
}

/// Generate the `ValueObjectSchema` impl for a parsed struct.
pub(crate) fn value_object_impl(parsed: &ParsedInput) -> TokenStream {
    let krate = crate_path::resolve(parsed.crate_path.as_ref());
    let ident = &parsed.ident;
    let name = &parsed.name;
    let entries = parsed.fields.iter().map(|spec| {
        let attribute = &spec.attribute;
        let field = field_tokens(&krate, spec);
        quote! { (#attribute, #field) }
    });
    quote! {
        impl #krate::ValueObjectSchema for #ident {
            fn value_object_type() -> #krate::ValueObjectType {
                static VALUE_OBJECT_TYPE: ::std::sync::OnceLock<#krate::ValueObjectType> =
                    ::std::sync::OnceLock::new();
                VALUE_OBJECT_TYPE
                    .get_or_init(|| {
                        #krate::ValueObjectType::from_declared_fields(
                            #name,
                            ::std::vec![#(#entries),*],
                        )
                    })
                    .clone()
            }
        }
    }
}

#[cfg(test)]
mod tests;
