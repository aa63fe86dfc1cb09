//! trybuild coverage for `#[derive(ValueObject)]`.
//!
//! Ensures that full declarations and the `crate` attribute expand to code
//! that compiles against the public API.

#[test]
fn derive_declarations_compile() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/declare_value_object.rs");
    t.pass("tests/trybuild/crate_path_alias.rs");
}
