//! `rename_all` rules for deriving field keys from attribute names.

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutyKebabCase, ToShoutySnakeCase, ToSnakeCase,
    ToUpperCamelCase,
};
use syn::LitStr;

/// Supported `#[value_object(rename_all = "...")]` rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RenameRule {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl RenameRule {
    pub(crate) fn parse(value: &LitStr) -> syn::Result<Self> {
        match value.value().as_str() {
            "lowercase" => Ok(Self::Lower),
            "UPPERCASE" => Ok(Self::Upper),
            "PascalCase" => Ok(Self::Pascal),
            "camelCase" => Ok(Self::Camel),
            "snake_case" => Ok(Self::Snake),
            "SCREAMING_SNAKE_CASE" => Ok(Self::ScreamingSnake),
            "kebab-case" => Ok(Self::Kebab),
            "SCREAMING-KEBAB-CASE" => Ok(Self::ScreamingKebab),
            other => Err(syn::Error::new(
                value.span(),
                format!(
                    "unsupported rename_all value '{other}'; expected one of \
\"lowercase\", \"UPPERCASE\", \"PascalCase\", \"camelCase\", \"snake_case\", \
\"SCREAMING_SNAKE_CASE\", \"kebab-case\", or \"SCREAMING-KEBAB-CASE\""
                ),
            )),
        }
    }

    pub(crate) fn apply(self, attribute: &str) -> String {
        match self {
            Self::Lower => attribute.to_ascii_lowercase(),
            Self::Upper => attribute.to_ascii_uppercase(),
            Self::Pascal => attribute.to_upper_camel_case(),
            Self::Camel => attribute.to_lower_camel_case(),
            Self::Snake => attribute.to_snake_case(),
            Self::ScreamingSnake => attribute.to_shouty_snake_case(),
            Self::Kebab => attribute.to_kebab_case(),
            Self::ScreamingKebab => attribute.to_shouty_kebab_case(),
        }
    }
}
