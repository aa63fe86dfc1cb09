//! Parsing utilities for the `ValueObject` derive macro.
//!
//! Every `#[value_object(...)]` key is checked: unknown keys, repeated keys
//! and malformed values are reported as spanned compile errors.

use proc_macro2::Span;
use syn::{Attribute, LitStr, Token};

mod input;
mod literals;
mod rename;
#[cfg(test)]
mod tests;

pub(crate) use input::{FieldSpec, ParsedInput, parse_input};
use literals::{lit_bool, lit_str, lit_str_list};
pub(crate) use rename::RenameRule;

/// Struct-level attributes recognised by `#[derive(ValueObject)]`.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    /// Type name reported by the schema; defaults to the struct ident.
    pub name: Option<LitStr>,
    /// Overrides the generated crate path for dependency aliasing.
    ///
    /// When set via `#[value_object(crate = "my_alias")]`, generated code
    /// references types through `my_alias::` instead of `value_object::`.
    pub crate_path: Option<syn::Path>,
    pub rename_all: Option<RenameRule>,
}

/// Public visibility declared on a field.
#[derive(Clone)]
pub(crate) enum PublicAttr {
    Flag(bool),
    Only(Vec<LitStr>),
}

/// Text encodings accepted by `encoding = "..."`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Encoding {
    Utf8,
    Latin1,
    Ascii,
}

impl Encoding {
    fn parse(value: &LitStr) -> syn::Result<Self> {
        // Mirrors `TextEncoding::from_label` in value_object.
        match value.value().trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(Self::Latin1),
            "ascii" | "us-ascii" => Ok(Self::Ascii),
            other => Err(syn::Error::new(
                value.span(),
                format!(
                    "unsupported encoding '{other}'; expected one of \"utf-8\", \"latin-1\" \
or \"ascii\""
                ),
            )),
        }
    }

    /// Name of the matching `TextEncoding` variant.
    pub(crate) const fn variant(self) -> &'static str {
        match self {
            Self::Utf8 => "Utf8",
            Self::Latin1 => "Latin1",
            Self::Ascii => "Ascii",
        }
    }
}

/// Field-level attributes recognised by `#[derive(ValueObject)]`.
///
/// - `key` overrides the storage key (otherwise the attribute name, after
///   any `rename_all` rule).
/// - `public = false` hides the field; `public("a", "b")` restricts a
///   collection or nested field to the listed keys.
/// - `encoding` selects the text encoding of a `Bytes` field.
#[derive(Default, Clone)]
pub(crate) struct FieldAttrs {
    pub key: Option<LitStr>,
    pub public: Option<(PublicAttr, Span)>,
    pub encoding: Option<(Encoding, Span)>,
}

/// Iterate all `#[value_object(...)]` attributes once and apply a callback.
fn parse_value_object<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&syn::meta::ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("value_object")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn ensure_unset<T>(
    slot: Option<&T>,
    meta: &syn::meta::ParseNestedMeta,
    key: &str,
) -> syn::Result<()> {
    if slot.is_some() {
        return Err(meta.error(format!("duplicate `{key}` attribute")));
    }
    Ok(())
}

/// Extracts `#[value_object(...)]` metadata applied to a struct.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> Result<StructAttrs, syn::Error> {
    let mut out = StructAttrs::default();
    parse_value_object(attrs, |meta| {
        if meta.path.is_ident("name") {
            ensure_unset(out.name.as_ref(), meta, "name")?;
            out.name = Some(lit_str(meta, "name")?);
        } else if meta.path.is_ident("crate") {
            ensure_unset(out.crate_path.as_ref(), meta, "crate")?;
            let lit = lit_str(meta, "crate")?;
            let path: syn::Path =
                syn::parse_str(&lit.value()).map_err(|e| syn::Error::new(lit.span(), e))?;
            out.crate_path = Some(path);
        } else if meta.path.is_ident("rename_all") {
            ensure_unset(out.rename_all.as_ref(), meta, "rename_all")?;
            out.rename_all = Some(RenameRule::parse(&lit_str(meta, "rename_all")?)?);
        } else {
            return Err(meta.error(
                "unsupported value_object struct attribute; expected `name`, `crate` or \
`rename_all`",
            ));
        }
        Ok(())
    })?;
    Ok(out)
}

/// Extracts `#[value_object(...)]` metadata applied to a field.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttrs, syn::Error> {
    let mut out = FieldAttrs::default();
    parse_value_object(attrs, |meta| {
        let span = meta.path.require_ident()?.span();
        if meta.path.is_ident("key") {
            ensure_unset(out.key.as_ref(), meta, "key")?;
            out.key = Some(lit_str(meta, "key")?);
        } else if meta.path.is_ident("public") {
            ensure_unset(out.public.as_ref(), meta, "public")?;
            let public = if meta.input.peek(Token![=]) {
                PublicAttr::Flag(lit_bool(meta, "public")?)
            } else if meta.input.peek(syn::token::Paren) {
                PublicAttr::Only(lit_str_list(meta)?)
            } else {
                return Err(meta.error("expected `public = true|false` or `public(\"key\", ...)`"));
            };
            out.public = Some((public, span));
        } else if meta.path.is_ident("encoding") {
            ensure_unset(out.encoding.as_ref(), meta, "encoding")?;
            let encoding = Encoding::parse(&lit_str(meta, "encoding")?)?;
            out.encoding = Some((encoding, span));
        } else {
            return Err(meta.error(
                "unsupported value_object field attribute; expected `key`, `public` or \
`encoding`",
            ));
        }
        Ok(())
    })?;
    Ok(out)
}
