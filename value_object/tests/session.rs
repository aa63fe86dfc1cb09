//! Session documents as the storage collaborator uses them: load, store,
//! update and move through JSON text.
#![expect(
    dead_code,
    reason = "declaration structs are only read through their derived schemas"
)]

use anyhow::{Result, anyhow, ensure};
use rstest::{fixture, rstest};
use serde_json::json;
use test_helpers::json::assert_stored;
use value_object::declare::{Date, Primitive};
use value_object::{SessionData, ValueObject, ValueObjectError, ValueObjectSchema, raw_map};

#[derive(ValueObject)]
#[value_object(name = "Applicant", rename_all = "camelCase")]
struct Applicant {
    first_name: Primitive,
    last_name: Primitive,
    gender: Primitive,
    birthday: Date,
    email: Primitive,
}

#[fixture]
fn session() -> SessionData {
    let mut document = serde_json::Map::new();
    document.insert(
        "applicant".to_owned(),
        json!({"firstName": "Marcus", "lastName": "Brody", "birthday": "1939-07-30"}),
    );
    SessionData::from_document(document)
}

#[rstest]
fn fresh_sessions_yield_blank_applicants() -> Result<()> {
    let session = SessionData::new();
    let applicant = session.load::<Applicant>("applicant")?;
    ensure!(applicant == Applicant::value_object_type().construct_empty());
    ensure!(!session.contains("applicant"));
    Ok(())
}

#[rstest]
fn stored_applicants_are_hydrated(session: SessionData) -> Result<()> {
    let applicant = session.load::<Applicant>("applicant")?;
    ensure!(applicant.get("first_name")?.as_str() == Some("Marcus"));
    ensure!(applicant.get("birthday")?.as_date().is_some());
    ensure!(applicant.get("email")?.is_null());
    Ok(())
}

#[rstest]
fn updates_merge_into_the_stored_applicant(mut session: SessionData) -> Result<()> {
    let form = Applicant::construct(raw_map(json!({
        "email": "brody@example.org",
        "lastName": null,
    })))?;
    let merged = session.update_object("applicant", &form)?;
    ensure!(merged.get("last_name")?.as_str() == Some("Brody"));

    let stored = session
        .document()
        .get("applicant")
        .and_then(serde_json::Value::as_object)
        .ok_or_else(|| anyhow!("applicant slot should hold a mapping"))?;
    assert_stored(
        stored,
        json!({
            "firstName": "Marcus",
            "lastName": "Brody",
            "gender": null,
            "birthday": "1939-07-30",
            "email": "brody@example.org",
        }),
    )
}

#[rstest]
fn documents_survive_json_text(mut session: SessionData) -> Result<()> {
    let form = Applicant::construct(raw_map(json!({"gender": "m"})))?;
    session.update_object("applicant", &form)?;
    let text = session.to_json_string()?;
    let reloaded = SessionData::from_json_str(&text)?;
    ensure!(reloaded == session);
    let applicant: ValueObject = reloaded.load::<Applicant>("applicant")?;
    ensure!(applicant.get("gender")?.as_str() == Some("m"));
    Ok(())
}

#[rstest]
fn corrupted_slots_surface_as_errors(mut session: SessionData) -> Result<()> {
    let mut document = session.clone().into_document();
    document.insert("applicant".to_owned(), json!({"birthday": "30 July 1939"}));
    session = SessionData::from_document(document);
    let before = session.clone();

    let form = Applicant::construct(raw_map(json!({"email": "brody@example.org"})))?;
    let Err(err) = session.update_object("applicant", &form) else {
        return Err(anyhow!("an unparseable birthday should fail"));
    };
    ensure!(matches!(err, ValueObjectError::MalformedValue { .. }));
    ensure!(err.field() == Some("applicant.birthday"), "unexpected path in {err}");
    ensure!(session == before, "failed updates must not touch the slot");
    Ok(())
}

#[rstest]
fn store_replaces_and_remove_clears(mut session: SessionData) -> Result<()> {
    let replacement = Applicant::construct(raw_map(json!({"firstName": "Henry"})))?;
    session.store_object("applicant", &replacement);
    ensure!(session.load::<Applicant>("applicant")? == replacement);
    ensure!(session.remove("applicant").is_some());
    ensure!(session.load::<Applicant>("applicant")?.get("first_name")?.is_null());
    Ok(())
}
