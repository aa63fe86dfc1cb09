//! Conversions between raw, internal, stored and public field values.

use crate::field::codec;
use crate::value::json_kind_name;
use crate::{
    Field, FieldKind, RawMap, StoredMap, Value, ValueObjectError, ValueObjectResult,
    ValueObjectResultExt,
};

impl Field {
    /// Convert a raw entry into the field's internal value.
    ///
    /// Null becomes the field's default: an empty mapping for collections, an
    /// all-null instance for nested fields and null otherwise. Typed fields
    /// accept their own typed value; bytes fields also accept text, which is
    /// encoded with the declared encoding.
    ///
    /// # Errors
    ///
    /// Returns [`ValueObjectError::UnexpectedValue`] when the raw value is of
    /// the wrong kind and [`ValueObjectError::TypeMismatch`] when a nested
    /// field receives an instance of another value-object type.
    pub fn init(&self, raw: Value) -> ValueObjectResult<Value> {
        if raw.is_null() {
            return Ok(self.default_value());
        }
        match &self.kind {
            FieldKind::Primitive => init_primitive(raw),
            FieldKind::Bytes { encoding } => match raw {
                Value::Bytes(bytes) => {
                    encoding.decode(&bytes)?;
                    Ok(Value::Bytes(bytes))
                }
                Value::Primitive(serde_json::Value::String(text)) => encoding
                    .encode(&text)
                    .map(Value::Bytes)
                    .map_err(|_| ValueObjectError::unexpected(encoding.text_description(), "text")),
                other => Err(ValueObjectError::unexpected("bytes", other.kind_name())),
            },
            FieldKind::Date => match raw {
                date @ Value::Date(_) => Ok(date),
                other => Err(ValueObjectError::unexpected("date", other.kind_name())),
            },
            FieldKind::Datetime => match raw {
                at @ Value::Datetime(_) => Ok(at),
                other => Err(ValueObjectError::unexpected("datetime", other.kind_name())),
            },
            FieldKind::Decimal => match raw {
                decimal @ Value::Decimal(_) => Ok(decimal),
                other => Err(ValueObjectError::unexpected("decimal", other.kind_name())),
            },
            FieldKind::Collection(sub_field) => match raw {
                Value::Map(entries) => entries
                    .into_iter()
                    .map(|(key, entry)| {
                        sub_field
                            .init(entry)
                            .within_field(&key)
                            .map(|value| (key, value))
                    })
                    .collect::<ValueObjectResult<RawMap>>()
                    .map(Value::Map),
                other => Err(ValueObjectError::unexpected(
                    "mapping of entries",
                    other.kind_name(),
                )),
            },
            FieldKind::Nested(vo_type) => match raw {
                Value::Object(object) if object.value_object_type() == vo_type => {
                    Ok(Value::Object(object))
                }
                Value::Object(object) => Err(ValueObjectError::type_mismatch(
                    vo_type.name(),
                    object.value_object_type().name(),
                )),
                Value::Map(entries) => vo_type.construct(entries).map(Value::Object),
                other => Err(ValueObjectError::unexpected(
                    "mapping or value object",
                    other.kind_name(),
                )),
            },
        }
    }

    /// Convert a stored entry into a raw-shaped value consumable by
    /// [`Field::init`].
    ///
    /// Nested fields yield a raw mapping rather than an instance.
    ///
    /// # Errors
    ///
    /// Returns [`ValueObjectError::MalformedValue`] when the stored entry does
    /// not match the field's storage format.
    pub fn hydrate(&self, stored: &serde_json::Value) -> ValueObjectResult<Value> {
        if stored.is_null() {
            return match &self.kind {
                FieldKind::Collection(_) => Ok(Value::Map(RawMap::new())),
                FieldKind::Nested(vo_type) => {
                    vo_type.hydrate_values(&StoredMap::new()).map(Value::Map)
                }
                _ => Ok(Value::Null),
            };
        }
        match &self.kind {
            FieldKind::Primitive => Ok(Value::primitive(stored.clone())),
            FieldKind::Bytes { encoding } => match stored {
                serde_json::Value::String(text) => encoding.encode(text).map(Value::Bytes),
                other => Err(ValueObjectError::malformed("text", json_kind_name(other))),
            },
            FieldKind::Date => codec::parse_date(stored).map(Value::Date),
            FieldKind::Datetime => codec::parse_datetime(stored).map(Value::Datetime),
            FieldKind::Decimal => codec::parse_decimal(stored).map(Value::Decimal),
            FieldKind::Collection(sub_field) => match stored {
                serde_json::Value::Object(entries) => entries
                    .iter()
                    .map(|(key, entry)| {
                        sub_field
                            .hydrate(entry)
                            .within_field(key)
                            .map(|value| (key.clone(), value))
                    })
                    .collect::<ValueObjectResult<RawMap>>()
                    .map(Value::Map),
                other => Err(ValueObjectError::malformed("mapping", json_kind_name(other))),
            },
            FieldKind::Nested(vo_type) => match stored {
                serde_json::Value::Object(entries) => {
                    vo_type.hydrate_values(entries).map(Value::Map)
                }
                other => Err(ValueObjectError::malformed("mapping", json_kind_name(other))),
            },
        }
    }

    /// Convert an internal value into its storage form.
    #[must_use]
    pub fn dehydrate(&self, value: &Value) -> serde_json::Value {
        match (&self.kind, value) {
            (FieldKind::Bytes { encoding }, Value::Bytes(bytes)) => {
                serde_json::Value::String(encoding.decode_lossy(bytes))
            }
            (FieldKind::Collection(sub_field), Value::Map(entries)) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(key, entry)| (key.clone(), sub_field.dehydrate(entry)))
                    .collect(),
            ),
            (FieldKind::Collection(_), Value::Null) => serde_json::Value::Object(StoredMap::new()),
            (_, other) => other.to_storage_json(),
        }
    }

    /// Convert an internal value into its client-facing form.
    ///
    /// Dates and datetimes use ISO-8601. Collections keep only the entries
    /// their visibility admits, and nested objects apply both this field's
    /// key restriction and their own field visibility.
    #[must_use]
    pub fn make_public_value(&self, value: &Value) -> serde_json::Value {
        match (&self.kind, value) {
            (FieldKind::Date, Value::Date(date)) => {
                serde_json::Value::String(codec::public_date(*date))
            }
            (FieldKind::Datetime, Value::Datetime(at)) => {
                serde_json::Value::String(codec::public_datetime(at))
            }
            (FieldKind::Collection(sub_field), Value::Map(entries)) => serde_json::Value::Object(
                entries
                    .iter()
                    .filter(|(key, _)| self.visibility.admits(key))
                    .map(|(key, entry)| (key.clone(), sub_field.make_public_value(entry)))
                    .collect(),
            ),
            (FieldKind::Nested(_), Value::Object(object)) => {
                let selected: Vec<&str> = self
                    .visibility
                    .restriction()
                    .map(|keys| keys.iter().map(String::as_str).collect())
                    .unwrap_or_default();
                serde_json::Value::Object(object.get_public_values(&selected))
            }
            _ => self.dehydrate(value),
        }
    }
}

fn init_primitive(raw: Value) -> ValueObjectResult<Value> {
    match raw {
        primitive @ Value::Primitive(_) => Ok(primitive),
        map @ Value::Map(_) => map.into_plain_json().map(Value::primitive).ok_or_else(|| {
            ValueObjectError::unexpected("JSON-compatible value", "mapping with typed entries")
        }),
        other => Err(ValueObjectError::unexpected(
            "JSON-compatible value",
            other.kind_name(),
        )),
    }
}
