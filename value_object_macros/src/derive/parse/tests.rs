//! Tests for `#[value_object(...)]` attribute parsing and validation.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{DeriveInput, Type, parse_quote};

use super::input::{entry_marker_name, marker_name};
use super::{Encoding, PublicAttr, RenameRule, parse_input};

#[rstest]
fn parses_struct_and_field_attributes() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[value_object(name = "Applicant", crate = "vo")]
        struct ApplicantRecord {
            #[value_object(key = "dob", public = false)]
            born: Date,
            #[value_object(public("street"))]
            addresses: Collection<Nested<Address>>,
            #[value_object(encoding = "ISO-8859-1")]
            photo: Bytes,
        }
    };
    let parsed = parse_input(&input)?;
    ensure!(parsed.ident == "ApplicantRecord");
    ensure!(parsed.name == "Applicant");
    ensure!(parsed.crate_path.is_some());

    let [born, addresses, photo] = parsed.fields.as_slice() else {
        return Err(anyhow!("expected three fields"));
    };
    ensure!(born.attribute == "born" && born.key == "dob");
    ensure!(matches!(born.attrs.public, Some((PublicAttr::Flag(false), _))));
    let Some((PublicAttr::Only(keys), _)) = &addresses.attrs.public else {
        return Err(anyhow!("expected a key restriction"));
    };
    ensure!(keys.iter().map(syn::LitStr::value).eq(["street"]));
    ensure!(matches!(photo.attrs.encoding, Some((Encoding::Latin1, _))));
    Ok(())
}

#[rstest]
#[case::camel("camelCase", "date_of_birth", "dateOfBirth")]
#[case::pascal("PascalCase", "date_of_birth", "DateOfBirth")]
#[case::kebab("kebab-case", "date_of_birth", "date-of-birth")]
#[case::screaming("SCREAMING_SNAKE_CASE", "date_of_birth", "DATE_OF_BIRTH")]
fn rename_rules_apply_heck_conversions(
    #[case] rule: &str,
    #[case] attribute: &str,
    #[case] expected: &str,
) -> Result<()> {
    let lit = syn::LitStr::new(rule, proc_macro2::Span::call_site());
    ensure!(RenameRule::parse(&lit)?.apply(attribute) == expected);
    Ok(())
}

#[rstest]
fn explicit_keys_win_over_rename_rules() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[value_object(rename_all = "camelCase")]
        struct Demo {
            #[value_object(key = "legacy_name")]
            full_name: Primitive,
            home_town: Primitive,
        }
    };
    let parsed = parse_input(&input)?;
    let keys: Vec<&str> = parsed.fields.iter().map(|spec| spec.key.as_str()).collect();
    ensure!(keys == ["legacy_name", "homeTown"], "unexpected keys: {keys:?}");
    ensure!(parsed.name == "Demo");
    Ok(())
}

#[rstest]
#[case::unknown_struct_key(
    parse_quote! {
        #[value_object(prefix = "APP")]
        struct Demo { name: Primitive }
    },
    "unsupported value_object struct attribute"
)]
#[case::unknown_field_key(
    parse_quote! {
        struct Demo { #[value_object(cli_long = "n")] name: Primitive }
    },
    "unsupported value_object field attribute"
)]
#[case::duplicate_attribute(
    parse_quote! {
        struct Demo { #[value_object(key = "a", key = "b")] name: Primitive }
    },
    "duplicate `key` attribute"
)]
#[case::duplicate_key(
    parse_quote! {
        struct Demo {
            name: Primitive,
            #[value_object(key = "name")]
            alias: Primitive,
        }
    },
    "duplicate value object key 'name'"
)]
#[case::scalar_restriction(
    parse_quote! {
        struct Demo { #[value_object(public("day"))] when: Date }
    },
    "`public(...)` requires a `Collection` or `Nested` field"
)]
#[case::misplaced_encoding(
    parse_quote! {
        struct Demo { #[value_object(encoding = "ascii")] name: Primitive }
    },
    "`encoding` requires a `Bytes` or `Collection<Bytes>` field"
)]
#[case::encoding_on_dated_entries(
    parse_quote! {
        struct Demo { #[value_object(encoding = "ascii")] days: Collection<Date> }
    },
    "`encoding` requires a `Bytes` or `Collection<Bytes>` field"
)]
#[case::encoding_on_default_entries(
    parse_quote! {
        struct Demo { #[value_object(encoding = "ascii")] tags: Collection }
    },
    "`encoding` requires a `Bytes` or `Collection<Bytes>` field"
)]
#[case::unknown_encoding(
    parse_quote! {
        struct Demo { #[value_object(encoding = "ebcdic")] blob: Bytes }
    },
    "unsupported encoding 'ebcdic'"
)]
#[case::non_bool_public(
    parse_quote! {
        struct Demo { #[value_object(public = "yes")] name: Primitive }
    },
    "public must be a boolean"
)]
#[case::unknown_rename(
    parse_quote! {
        #[value_object(rename_all = "Title Case")]
        struct Demo { name: Primitive }
    },
    "unsupported rename_all value 'Title Case'"
)]
#[case::generic(
    parse_quote! { struct Demo<T> { name: T } },
    "ValueObject cannot be derived for generic structs"
)]
#[case::tuple(
    parse_quote! { struct Demo(Primitive); },
    "ValueObject requires named fields"
)]
#[case::enumeration(
    parse_quote! { enum Demo { A } },
    "ValueObject can only be derived for structs"
)]
fn invalid_declarations_are_rejected(#[case] input: DeriveInput, #[case] message: &str) {
    let Err(err) = parse_input(&input) else {
        panic!("expected `{message}` to be reported");
    };
    assert!(
        err.to_string().starts_with(message),
        "unexpected error: {err}"
    );
}

#[rstest]
#[case(parse_quote!(Collection<Nested<Address>>), Some("Collection"))]
#[case(parse_quote!(value_object::declare::Nested<Loan>), Some("Nested"))]
#[case(parse_quote!(Bytes), Some("Bytes"))]
#[case(parse_quote!(&'static str), None)]
fn marker_name_reads_the_last_segment(#[case] ty: Type, #[case] expected: Option<&str>) {
    assert_eq!(marker_name(&ty).as_deref(), expected);
}

#[rstest]
#[case(parse_quote!(Collection<Bytes>), Some("Bytes"))]
#[case(parse_quote!(value_object::declare::Collection<Nested<Address>>), Some("Nested"))]
#[case(parse_quote!(Collection), None)]
#[case(parse_quote!(Bytes), None)]
fn entry_marker_name_reads_the_type_argument(#[case] ty: Type, #[case] expected: Option<&str>) {
    assert_eq!(entry_marker_name(&ty).as_deref(), expected);
}

#[rstest]
fn collections_of_bytes_accept_an_encoding() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct Scans {
            #[value_object(encoding = "latin1")]
            pages: Collection<Bytes>,
        }
    };
    let parsed = parse_input(&input)?;
    let [pages] = parsed.fields.as_slice() else {
        return Err(anyhow!("expected one field"));
    };
    ensure!(matches!(pages.attrs.encoding, Some((Encoding::Latin1, _))));
    Ok(())
}
