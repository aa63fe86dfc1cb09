//! Helpers for writing stored mappings as `serde_json::json!` literals.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use value_object_test_helpers::json::stored;
//!
//! let map = stored(json!({"name": "Marcus"}))?;
//! assert_eq!(map.get("name"), Some(&json!("Marcus")));
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::{Result, bail, ensure};
use value_object::StoredMap;

/// Unwraps a JSON object literal into a stored mapping.
///
/// # Errors
///
/// Returns an error when `json` is not an object.
pub fn stored(json: serde_json::Value) -> Result<StoredMap> {
    match json {
        serde_json::Value::Object(map) => Ok(map),
        other => bail!("expected a JSON object, found {other}"),
    }
}

/// Compares a stored mapping against a JSON literal, key order included.
///
/// # Errors
///
/// Returns an error describing both sides when they differ.
pub fn assert_stored(actual: &StoredMap, expected: serde_json::Value) -> Result<()> {
    let wanted = stored(expected)?;
    ensure!(
        actual == &wanted && actual.keys().eq(wanted.keys()),
        "stored mapping differs:\n  actual:   {}\n  expected: {}",
        serde_json::Value::Object(actual.clone()),
        serde_json::Value::Object(wanted),
    );
    Ok(())
}
