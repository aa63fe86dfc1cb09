//! In-memory session document holding dehydrated value objects.
//!
//! [`SessionData`] is the seam between value objects and whatever persists a
//! session: objects are stored dehydrated under named slots, and the whole
//! document moves to and from storage as JSON text.

use crate::{
    IntoValueObjectResult, StoredMap, ValueObject, ValueObjectError, ValueObjectResult,
    ValueObjectResultExt, ValueObjectSchema, ValueObjectType,
};

static EMPTY_SLOT: serde_json::Value = serde_json::Value::Null;

/// A session document of dehydrated value objects keyed by slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionData {
    document: StoredMap,
}

impl SessionData {
    /// An empty session document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing document.
    #[must_use]
    pub const fn from_document(document: StoredMap) -> Self {
        Self { document }
    }

    /// Parse a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ValueObjectError::Json`] when the text is not valid JSON and
    /// [`ValueObjectError::MalformedValue`] when it is not a JSON object.
    pub fn from_json_str(text: &str) -> ValueObjectResult<Self> {
        match serde_json::from_str::<serde_json::Value>(text).into_value_object()? {
            serde_json::Value::Object(document) => Ok(Self { document }),
            other => Err(ValueObjectError::malformed(
                "session document object",
                crate::value::json_kind_name(&other),
            )),
        }
    }

    /// Serialise the document to JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ValueObjectError::Json`] when serialisation fails.
    pub fn to_json_string(&self) -> ValueObjectResult<String> {
        serde_json::to_string(&self.document).into_value_object()
    }

    /// The underlying document.
    #[must_use]
    pub const fn document(&self) -> &StoredMap {
        &self.document
    }

    /// Consume the session, returning the underlying document.
    #[must_use]
    pub fn into_document(self) -> StoredMap {
        self.document
    }

    /// Whether `slot` holds a value.
    #[must_use]
    pub fn contains(&self, slot: &str) -> bool {
        self.document.contains_key(slot)
    }

    /// Hydrate the object stored in `slot`.
    ///
    /// A missing or null slot yields an instance built from an empty mapping.
    ///
    /// # Errors
    ///
    /// Propagates hydration failures, with the slot name prefixed to the
    /// error path.
    pub fn load_object(
        &self,
        slot: &str,
        vo_type: &ValueObjectType,
    ) -> ValueObjectResult<ValueObject> {
        let stored = self.document.get(slot).unwrap_or(&EMPTY_SLOT);
        vo_type.hydrate_json(stored).within_field(slot)
    }

    /// Hydrate the object stored in `slot` using the schema of `T`.
    ///
    /// # Errors
    ///
    /// See [`SessionData::load_object`].
    pub fn load<T: ValueObjectSchema>(&self, slot: &str) -> ValueObjectResult<ValueObject> {
        self.load_object(slot, &T::value_object_type())
    }

    /// Store the dehydrated form of `object` in `slot`, replacing its
    /// previous contents.
    pub fn store_object(&mut self, slot: impl Into<String>, object: &ValueObject) {
        self.document
            .insert(slot.into(), serde_json::Value::Object(object.dehydrate()));
    }

    /// Merge `incoming` into the object stored in `slot` and store the result.
    ///
    /// The slot is hydrated with `incoming`'s type, updated in place and
    /// dehydrated again. The merged instance is returned.
    ///
    /// # Errors
    ///
    /// Propagates hydration failures; the slot is left unchanged on error.
    pub fn update_object(
        &mut self,
        slot: &str,
        incoming: &ValueObject,
    ) -> ValueObjectResult<ValueObject> {
        let mut current = self.load_object(slot, incoming.value_object_type())?;
        current.update(incoming)?;
        tracing::debug!(
            slot = %slot,
            vo_type = %current.value_object_type().name(),
            "updated session slot"
        );
        self.store_object(slot, &current);
        Ok(current)
    }

    /// Remove `slot`, returning its stored value.
    pub fn remove(&mut self, slot: &str) -> Option<serde_json::Value> {
        self.document.shift_remove(slot)
    }
}

#[cfg(test)]
mod tests;
