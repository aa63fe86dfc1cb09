//! Unit tests for the session document adapter.
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface configuration mistakes"
)]

use anyhow::{Result, ensure};
use rstest::{fixture, rstest};
use serde_json::json;

use super::SessionData;
use crate::{Field, ValueObjectError, ValueObjectType, raw_map};

#[fixture]
fn applicant() -> ValueObjectType {
    ValueObjectType::builder("Applicant")
        .field("name", Field::primitive())
        .field("born", Field::date())
        .field("tags", Field::collection(Field::primitive()))
        .build()
        .expect("valid type")
}

#[rstest]
fn missing_slots_load_as_empty_objects(applicant: ValueObjectType) -> Result<()> {
    let session = SessionData::new();
    let loaded = session.load_object("applicant", &applicant)?;
    ensure!(loaded == applicant.construct_empty());
    ensure!(!session.contains("applicant"));
    Ok(())
}

#[rstest]
fn stored_objects_round_trip(applicant: ValueObjectType) -> Result<()> {
    let mut session = SessionData::new();
    let object = applicant.construct(raw_map(json!({"name": "Marge", "tags": {"hair": "blue"}})))?;
    session.store_object("applicant", &object);
    ensure!(session.load_object("applicant", &applicant)? == object);

    let reloaded = SessionData::from_json_str(&session.to_json_string()?)?;
    ensure!(reloaded == session);
    Ok(())
}

#[rstest]
fn update_merges_into_the_stored_object(applicant: ValueObjectType) -> Result<()> {
    let mut session = SessionData::from_document(
        json!({"applicant": {"name": "Marge", "born": "1956-03-19", "tags": {"hair": "blue"}}})
            .as_object()
            .cloned()
            .unwrap_or_default(),
    );
    let incoming = applicant.construct(raw_map(json!({"tags": {"eyes": "brown"}})))?;
    let merged = session.update_object("applicant", &incoming)?;
    ensure!(
        session.document().get("applicant")
            == Some(&json!({
                "name": "Marge",
                "born": "1956-03-19",
                "tags": {"hair": "blue", "eyes": "brown"}
            }))
    );
    ensure!(session.load_object("applicant", &applicant)? == merged);
    Ok(())
}

#[rstest]
fn malformed_slots_are_reported_with_their_path(applicant: ValueObjectType) -> Result<()> {
    let mut session = SessionData::from_json_str(r#"{"applicant": {"born": "19 March 1956"}}"#)?;
    let err = session
        .update_object("applicant", &applicant.construct_empty())
        .expect_err("stored date is malformed");
    ensure!(err.field() == Some("applicant.born"));
    ensure!(session.document().get("applicant") == Some(&json!({"born": "19 March 1956"})));
    Ok(())
}

#[rstest]
#[case::invalid_json("{not json", "session document JSON error")]
#[case::not_an_object("[1, 2]", "malformed stored value")]
fn documents_must_be_json_objects(#[case] text: &str, #[case] prefix: &str) {
    let err = SessionData::from_json_str(text).expect_err("document is rejected");
    assert!(err.to_string().starts_with(prefix), "unexpected error: {err}");
    if prefix.starts_with("session") {
        assert!(matches!(err, ValueObjectError::Json(_)));
    }
}

#[test]
fn remove_drops_the_slot() -> Result<()> {
    let mut session = SessionData::from_json_str(r#"{"a": {}, "b": {}}"#)?;
    ensure!(session.remove("a") == Some(json!({})));
    ensure!(session.remove("a").is_none());
    ensure!(session.into_document().keys().eq(["b"]));
    Ok(())
}
