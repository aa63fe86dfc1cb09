//! Value-object instances and their types.
//!
//! A [`ValueObject`] always holds exactly one internal value per field
//! declared by its [`ValueObjectType`]. Instances are built by
//! [`ValueObjectType::construct`] or [`ValueObjectType::hydrate`] and change
//! only through [`ValueObject::update`].

mod schema;

use std::fmt;

use indexmap::IndexMap;

pub use schema::{ValueObjectType, ValueObjectTypeBuilder};

use crate::{StoredMap, Value, ValueObjectError, ValueObjectResult, ValueObjectResultExt};

static NULL_VALUE: Value = Value::Null;

/// An instance of a value-object type.
#[derive(Clone, PartialEq)]
pub struct ValueObject {
    vo_type: ValueObjectType,
    values: IndexMap<String, Value>,
}

impl ValueObject {
    pub(crate) const fn from_parts(
        vo_type: ValueObjectType,
        values: IndexMap<String, Value>,
    ) -> Self {
        Self { vo_type, values }
    }

    /// The instance's type.
    #[must_use]
    pub const fn value_object_type(&self) -> &ValueObjectType {
        &self.vo_type
    }

    /// The internal value of the field declared under `attribute`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueObjectError::UnknownAttribute`] when the type declares
    /// no such attribute.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use value_object::{Field, ValueObjectType, raw_map};
    ///
    /// let simple = ValueObjectType::builder("Simple")
    ///     .field("name", Field::primitive())
    ///     .build()?;
    /// let knight = simple.construct(raw_map(json!({"name": "Lancelot"})))?;
    /// assert_eq!(knight.get("name")?.as_str(), Some("Lancelot"));
    /// assert!(knight.get("quest").is_err());
    /// # Ok::<(), value_object::ValueObjectError>(())
    /// ```
    pub fn get(&self, attribute: &str) -> ValueObjectResult<&Value> {
        self.values
            .get(attribute)
            .ok_or_else(|| ValueObjectError::UnknownAttribute {
                type_name: self.vo_type.name().to_owned(),
                attribute: attribute.to_owned(),
            })
    }

    /// The internal value of the field stored under `key`.
    #[must_use]
    pub fn get_by_key(&self, key: &str) -> Option<&Value> {
        self.vo_type
            .attribute_for_key(key)
            .and_then(|attribute| self.values.get(attribute))
    }

    /// Internal values in declaration order, keyed by attribute.
    pub fn values(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values
            .iter()
            .map(|(attribute, value)| (attribute.as_str(), value))
    }

    /// Consume the instance, returning its internal values keyed by
    /// attribute.
    #[must_use]
    pub fn into_values(self) -> IndexMap<String, Value> {
        self.values
    }

    /// Merge `other` into this instance field by field.
    ///
    /// Null values in `other` leave the current value untouched; collections
    /// are unioned by key and nested objects are updated recursively. The
    /// instance is left unchanged when the merge fails.
    ///
    /// # Errors
    ///
    /// Returns [`ValueObjectError::TypeMismatch`] when `other` has a different
    /// type, here or in any nested field.
    pub fn update(&mut self, other: &Self) -> ValueObjectResult<()> {
        if self.vo_type != other.vo_type {
            return Err(ValueObjectError::type_mismatch(
                self.vo_type.name(),
                other.vo_type.name(),
            ));
        }
        tracing::trace!(vo_type = %self.vo_type.name(), "updating value object");
        let mut merged = self.values.clone();
        for (attribute, key, field) in self.vo_type.fields() {
            let incoming = other.values.get(attribute).unwrap_or(&NULL_VALUE);
            if let Some(existing) = merged.get_mut(attribute) {
                field.merge(existing, incoming).within_field(key)?;
            }
        }
        self.values = merged;
        Ok(())
    }

    /// The storage form of the instance, keyed by field key.
    #[must_use]
    pub fn dehydrate(&self) -> StoredMap {
        self.vo_type
            .fields()
            .map(|(attribute, key, field)| {
                let value = self.values.get(attribute).unwrap_or(&NULL_VALUE);
                (key.to_owned(), field.dehydrate(value))
            })
            .collect()
    }

    /// Keys of the fields that [`ValueObject::get_public_values`] would
    /// return for `selected`, in declaration order.
    ///
    /// With no selection every public field is returned. Otherwise only the
    /// selected keys that name public fields are returned; private fields
    /// are never included.
    #[must_use]
    pub fn get_public_field_keys(&self, selected: &[&str]) -> Vec<&str> {
        if selected.is_empty() {
            return self
                .vo_type
                .fields()
                .filter(|(_, _, field)| field.is_public())
                .map(|(_, key, _)| key)
                .collect();
        }
        self.report_unmatched(selected);
        self.vo_type
            .fields()
            .filter(|(_, key, field)| selected.contains(key) && field.is_public())
            .map(|(_, key, _)| key)
            .collect()
    }

    /// The client-facing form of the public fields, keyed by field key.
    ///
    /// `selected` narrows the output to the named field keys; see
    /// [`ValueObject::get_public_field_keys`].
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use value_object::{Field, ValueObjectType, raw_map};
    ///
    /// let simple = ValueObjectType::builder("Simple")
    ///     .field("name", Field::primitive())
    ///     .field("age", Field::primitive())
    ///     .field("pin", Field::primitive().private())
    ///     .build()?;
    /// let object = simple.construct(raw_map(json!({"name": "Ada", "age": 36, "pin": 1234})))?;
    /// assert_eq!(
    ///     serde_json::Value::Object(object.get_public_values(&[])),
    ///     json!({"name": "Ada", "age": 36}),
    /// );
    /// assert_eq!(
    ///     serde_json::Value::Object(object.get_public_values(&["age", "pin"])),
    ///     json!({"age": 36}),
    /// );
    /// # Ok::<(), value_object::ValueObjectError>(())
    /// ```
    #[must_use]
    pub fn get_public_values(&self, selected: &[&str]) -> StoredMap {
        let visible = self.get_public_field_keys(selected);
        self.vo_type
            .fields()
            .filter(|(_, key, _)| visible.contains(key))
            .map(|(attribute, key, field)| {
                let value = self.values.get(attribute).unwrap_or(&NULL_VALUE);
                (key.to_owned(), field.make_public_value(value))
            })
            .collect()
    }

    fn report_unmatched(&self, selected: &[&str]) {
        for requested in selected {
            match self
                .vo_type
                .fields()
                .find(|(_, key, _)| key == requested)
            {
                Some((_, _, field)) if !field.is_public() => tracing::debug!(
                    vo_type = %self.vo_type.name(),
                    key = %requested,
                    "requested field is not public"
                ),
                Some(_) => {}
                None => {
                    if let Some(key) = self.vo_type.key_of(requested) {
                        tracing::warn!(
                            vo_type = %self.vo_type.name(),
                            attribute = %requested,
                            key = %key,
                            "public values are selected by field key, not attribute name"
                        );
                    }
                }
            }
        }
    }
}

impl fmt::Debug for ValueObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct(self.vo_type.name());
        for (attribute, value) in &self.values {
            out.field(attribute, value);
        }
        out.finish()
    }
}

impl serde::Serialize for ValueObject {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.dehydrate().serialize(serializer)
    }
}
