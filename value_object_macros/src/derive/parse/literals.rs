//! Literal parsing helpers for derive attributes.

use syn::punctuated::Punctuated;
use syn::{Lit, LitStr, Token, parenthesized};

/// Parses a literal from a `key = literal` attribute using `extractor`.
fn parse_lit<T, F>(
    meta: &syn::meta::ParseNestedMeta,
    key: &str,
    expected: &str,
    extractor: F,
) -> Result<T, syn::Error>
where
    F: FnOnce(Lit) -> Option<T>,
{
    let literal = meta.value()?.parse::<Lit>()?;
    let span = literal.span();
    extractor(literal).ok_or_else(|| syn::Error::new(span, format!("{key} must be a {expected}")))
}

/// Parses a string literal from a `key = "..."` attribute.
pub(crate) fn lit_str(meta: &syn::meta::ParseNestedMeta, key: &str) -> Result<LitStr, syn::Error> {
    parse_lit(meta, key, "string", |lit| match lit {
        Lit::Str(s) => Some(s),
        _ => None,
    })
}

/// Parses a boolean literal from a `key = true|false` attribute.
pub(crate) fn lit_bool(meta: &syn::meta::ParseNestedMeta, key: &str) -> Result<bool, syn::Error> {
    parse_lit(meta, key, "boolean", |lit| match lit {
        Lit::Bool(b) => Some(b.value),
        _ => None,
    })
}

/// Parses a parenthesised, comma-separated list of string literals such as
/// `public("street", "city")`.
pub(crate) fn lit_str_list(meta: &syn::meta::ParseNestedMeta) -> Result<Vec<LitStr>, syn::Error> {
    let content;
    parenthesized!(content in meta.input);
    let items = Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?;
    Ok(items.into_iter().collect())
}
