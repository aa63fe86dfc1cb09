//! Input parsing for the `ValueObject` derive macro.
//!
//! This module gathers the struct identifier, fields, and attribute metadata
//! in one pass and validates the declaration so macro expansion can fail
//! fast with useful errors.

use std::collections::HashSet;

use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, GenericArgument, PathArguments, Type};

use super::{FieldAttrs, PublicAttr, parse_field_attrs, parse_struct_attrs};

/// A validated struct ready for code generation.
pub(crate) struct ParsedInput {
    pub ident: syn::Ident,
    /// Type name reported by the generated schema.
    pub name: String,
    pub crate_path: Option<syn::Path>,
    pub fields: Vec<FieldSpec>,
}

/// One declared field.
pub(crate) struct FieldSpec {
    /// Attribute name: the field ident without any raw prefix.
    pub attribute: String,
    /// Storage key after `key` and `rename_all` are applied.
    pub key: String,
    pub ty: Type,
    pub attrs: FieldAttrs,
}

/// Gathers information from the user-provided struct.
///
/// Rejects enums, unions, tuple and unit structs, generic structs, repeated
/// keys, key restrictions on fields without entries and encodings on
/// fields that hold no bytes.
pub(crate) fn parse_input(input: &DeriveInput) -> Result<ParsedInput, syn::Error> {
    let ident = input.ident.clone();
    let struct_attrs = parse_struct_attrs(&input.attrs)?;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "ValueObject cannot be derived for generic structs",
        ));
    }
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    data.struct_token,
                    "ValueObject requires named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                ident,
                "ValueObject can only be derived for structs",
            ));
        }
    };

    let mut keys = HashSet::new();
    let mut fields = Vec::with_capacity(named.len());
    for field in named {
        let Some(field_ident) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "ValueObject requires named fields"));
        };
        let attrs = parse_field_attrs(&field.attrs)?;
        validate_field_attrs(&field.ty, &attrs)?;
        let attribute = field_ident.unraw().to_string();
        let key = match (&attrs.key, struct_attrs.rename_all) {
            (Some(explicit), _) => explicit.value(),
            (None, Some(rule)) => rule.apply(&attribute),
            (None, None) => attribute.clone(),
        };
        if !keys.insert(key.clone()) {
            return Err(syn::Error::new_spanned(
                field_ident,
                format!("duplicate value object key '{key}'"),
            ));
        }
        fields.push(FieldSpec {
            attribute,
            key,
            ty: field.ty.clone(),
            attrs,
        });
    }

    let name = struct_attrs
        .name
        .as_ref()
        .map_or_else(|| ident.unraw().to_string(), syn::LitStr::value);
    Ok(ParsedInput {
        ident,
        name,
        crate_path: struct_attrs.crate_path,
        fields,
    })
}

/// Name of the marker type at the end of the field's type path.
pub(crate) fn marker_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(path) if path.qself.is_none() => path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string()),
        Type::Group(group) => marker_name(&group.elem),
        Type::Paren(paren) => marker_name(&paren.elem),
        _ => None,
    }
}

/// Marker name of the first type argument, such as `Bytes` in
/// `Collection<Bytes>`.
pub(crate) fn entry_marker_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Path(path) if path.qself.is_none() => {
            let PathArguments::AngleBracketed(args) = &path.path.segments.last()?.arguments else {
                return None;
            };
            args.args.iter().find_map(|arg| match arg {
                GenericArgument::Type(entry) => marker_name(entry),
                _ => None,
            })
        }
        Type::Group(group) => entry_marker_name(&group.elem),
        Type::Paren(paren) => entry_marker_name(&paren.elem),
        _ => None,
    }
}

fn validate_field_attrs(ty: &Type, attrs: &FieldAttrs) -> syn::Result<()> {
    let marker = marker_name(ty);
    if let Some((PublicAttr::Only(_), span)) = &attrs.public {
        if !matches!(marker.as_deref(), Some("Collection" | "Nested")) {
            return Err(syn::Error::new(
                *span,
                "`public(...)` requires a `Collection` or `Nested` field; use `public = false` \
to hide other fields",
            ));
        }
    }
    if let Some((_, span)) = &attrs.encoding {
        let holds_bytes = match marker.as_deref() {
            Some("Bytes") => true,
            Some("Collection") => entry_marker_name(ty).as_deref() == Some("Bytes"),
            _ => false,
        };
        if !holds_bytes {
            return Err(syn::Error::new(
                *span,
                "`encoding` requires a `Bytes` or `Collection<Bytes>` field",
            ));
        }
    }
    Ok(())
}
