//! Unit tests for the schema token generators.

use anyhow::{Result, anyhow, ensure};
use quote::quote;
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

use super::{field_tokens, value_object_impl};
use crate::derive::crate_path;
use crate::derive::parse::parse_input;

fn first_field_tokens(input: &DeriveInput) -> Result<String> {
    let parsed = parse_input(input)?;
    let krate = crate_path::resolve(parsed.crate_path.as_ref());
    let spec = parsed
        .fields
        .first()
        .ok_or_else(|| anyhow!("expected at least one field"))?;
    Ok(field_tokens(&krate, spec).to_string())
}

#[rstest]
#[case::plain(
    parse_quote! { struct Demo { name: Primitive } },
    quote! { ::value_object::Field::new(<Primitive as ::value_object::DeclareField>::declare()) }
)]
#[case::explicit_key(
    parse_quote! { struct Demo { #[value_object(key = "dob")] born: Date } },
    quote! {
        ::value_object::Field::new(<Date as ::value_object::DeclareField>::declare())
            .with_key("dob")
    }
)]
#[case::private(
    parse_quote! { struct Demo { #[value_object(public = false)] pin: Primitive } },
    quote! {
        ::value_object::Field::new(<Primitive as ::value_object::DeclareField>::declare())
            .private()
    }
)]
#[case::explicitly_public(
    parse_quote! { struct Demo { #[value_object(public = true)] name: Primitive } },
    quote! { ::value_object::Field::new(<Primitive as ::value_object::DeclareField>::declare()) }
)]
#[case::restricted(
    parse_quote! {
        struct Demo { #[value_object(public("alpha", "charlie"))] tags: Collection }
    },
    quote! {
        ::value_object::Field::new(<Collection as ::value_object::DeclareField>::declare())
            .public_only(["alpha", "charlie"])
    }
)]
#[case::encoding(
    parse_quote! { struct Demo { #[value_object(encoding = "latin-1")] blob: Bytes } },
    quote! {
        ::value_object::Field::new(<Bytes as ::value_object::DeclareField>::declare())
            .with_encoding(::value_object::TextEncoding::Latin1)
    }
)]
#[case::entry_encoding(
    parse_quote! {
        struct Demo { #[value_object(encoding = "ascii")] pages: Collection<Bytes> }
    },
    quote! {
        ::value_object::Field::new(<Collection<Bytes> as ::value_object::DeclareField>::declare())
            .with_encoding(::value_object::TextEncoding::Ascii)
    }
)]
#[case::renamed(
    parse_quote! {
        #[value_object(rename_all = "camelCase")]
        struct Demo { first_name: Primitive }
    },
    quote! {
        ::value_object::Field::new(<Primitive as ::value_object::DeclareField>::declare())
            .with_key("firstName")
    }
)]
fn field_tokens_apply_attributes(
    #[case] input: DeriveInput,
    #[case] expected: proc_macro2::TokenStream,
) -> Result<()> {
    let tokens = first_field_tokens(&input)?;
    ensure!(
        tokens == expected.to_string(),
        "generated tokens differ: {tokens} != {expected}"
    );
    Ok(())
}

#[rstest]
fn impl_caches_schema_and_uses_crate_alias() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[value_object(name = "Loan", crate = "vo")]
        struct LoanRecord {
            amount: Decimal,
        }
    };
    let tokens = value_object_impl(&parse_input(&input)?);
    let expected = quote! {
        impl vo::ValueObjectSchema for LoanRecord {
            fn value_object_type() -> vo::ValueObjectType {
                static VALUE_OBJECT_TYPE: ::std::sync::OnceLock<vo::ValueObjectType> =
                    ::std::sync::OnceLock::new();
                VALUE_OBJECT_TYPE
                    .get_or_init(|| {
                        vo::ValueObjectType::from_declared_fields(
                            "Loan",
                            ::std::vec![(
                                "amount",
                                vo::Field::new(<Decimal as vo::DeclareField>::declare())
                            )],
                        )
                    })
                    .clone()
            }
        }
    };
    ensure!(
        tokens.to_string() == expected.to_string(),
        "generated tokens differ: {tokens} != {expected}"
    );
    Ok(())
}

#[rstest]
fn raw_identifiers_lose_their_prefix() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct r#Demo {
            r#type: Primitive,
        }
    };
    let parsed = parse_input(&input)?;
    ensure!(parsed.name == "Demo");
    let spec = parsed
        .fields
        .first()
        .ok_or_else(|| anyhow!("expected one field"))?;
    ensure!(spec.attribute == "type" && spec.key == "type");
    Ok(())
}
