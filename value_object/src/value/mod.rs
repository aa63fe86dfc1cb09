//! Internal and raw value representation.
//!
//! [`Value`] is the single currency passed between callers and fields: raw
//! input handed to [`crate::ValueObjectType::construct`], the internal value a
//! field keeps after `init`, and the raw-shaped output of hydration all use
//! it. Storage and public forms are plain [`serde_json::Value`]s.

use bigdecimal::BigDecimal;
use chrono::{DateTime, NaiveDate, Utc};
use indexmap::IndexMap;

use crate::ValueObject;
use crate::field::codec;

mod decimal;

pub use decimal::ExactDecimal;

/// Raw mapping accepted by [`crate::ValueObjectType::construct`], keyed by
/// field key.
pub type RawMap = IndexMap<String, Value>;

/// Storage-shaped mapping produced by [`crate::ValueObject::dehydrate`],
/// keyed by field key.
pub type StoredMap = serde_json::Map<String, serde_json::Value>;

/// Raw or internal value of a single field.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// The null-equivalent; every field kind accepts it.
    #[default]
    Null,
    /// A JSON-compatible scalar or array. Never holds JSON `null`.
    Primitive(serde_json::Value),
    /// A byte string.
    Bytes(Vec<u8>),
    /// A calendar date.
    Date(NaiveDate),
    /// A UTC timestamp.
    Datetime(DateTime<Utc>),
    /// An exact decimal number.
    Decimal(ExactDecimal),
    /// A keyed mapping: raw input for nested objects and collections, and the
    /// internal value of collection fields.
    Map(RawMap),
    /// A nested value-object instance.
    Object(ValueObject),
}

impl Value {
    /// Wrap a JSON value as a primitive, mapping JSON `null` to [`Value::Null`].
    #[must_use]
    pub fn primitive(json: serde_json::Value) -> Self {
        if json.is_null() {
            Self::Null
        } else {
            Self::Primitive(json)
        }
    }

    /// Returns `true` for the null-equivalent.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short name of the variant, used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Primitive(json) => json_kind_name(json),
            Self::Bytes(_) => "bytes",
            Self::Date(_) => "date",
            Self::Datetime(_) => "datetime",
            Self::Decimal(_) => "decimal",
            Self::Map(_) => "mapping",
            Self::Object(_) => "value object",
        }
    }

    /// Returns the primitive JSON value, if any.
    #[must_use]
    pub const fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Primitive(json) => Some(json),
            _ => None,
        }
    }

    /// Returns the primitive string, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_json().and_then(serde_json::Value::as_str)
    }

    /// Returns the primitive integer, if it fits in an `i64`.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_json().and_then(serde_json::Value::as_i64)
    }

    /// Returns the primitive number as an `f64`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        self.as_json().and_then(serde_json::Value::as_f64)
    }

    /// Returns the primitive boolean, if any.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        self.as_json().and_then(serde_json::Value::as_bool)
    }

    /// Returns the byte string, if any.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    /// Returns the date, if any.
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            _ => None,
        }
    }

    /// Returns the timestamp, if any.
    #[must_use]
    pub const fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Datetime(at) => Some(*at),
            _ => None,
        }
    }

    /// Returns the decimal, if any.
    #[must_use]
    pub const fn as_decimal(&self) -> Option<&ExactDecimal> {
        match self {
            Self::Decimal(decimal) => Some(decimal),
            _ => None,
        }
    }

    /// Returns the mapping, if any.
    #[must_use]
    pub const fn as_map(&self) -> Option<&RawMap> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the nested value object, if any.
    #[must_use]
    pub const fn as_object(&self) -> Option<&ValueObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    /// Converts the value into plain JSON when it holds only primitives,
    /// nulls and mappings of those.
    ///
    /// Typed values (bytes, dates, decimals, objects) yield `None`.
    #[must_use]
    pub fn into_plain_json(self) -> Option<serde_json::Value> {
        match self {
            Self::Null => Some(serde_json::Value::Null),
            Self::Primitive(json) => Some(json),
            Self::Map(entries) => entries
                .into_iter()
                .map(|(key, value)| value.into_plain_json().map(|json| (key, json)))
                .collect::<Option<StoredMap>>()
                .map(serde_json::Value::Object),
            Self::Bytes(_)
            | Self::Date(_)
            | Self::Datetime(_)
            | Self::Decimal(_)
            | Self::Object(_) => None,
        }
    }

    /// Renders the value in its storage form without field context.
    ///
    /// Bytes are read as UTF-8 (lossily); fields with a declared encoding
    /// handle bytes themselves before reaching this fallback.
    #[must_use]
    pub fn to_storage_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Primitive(json) => json.clone(),
            Self::Bytes(bytes) => {
                serde_json::Value::String(String::from_utf8_lossy(bytes).into_owned())
            }
            Self::Date(date) => serde_json::Value::String(codec::format_date(*date)),
            Self::Datetime(at) => serde_json::Value::String(codec::format_datetime(at)),
            Self::Decimal(decimal) => serde_json::Value::String(codec::format_decimal(decimal)),
            Self::Map(entries) => serde_json::Value::Object(
                entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value.to_storage_json()))
                    .collect(),
            ),
            Self::Object(object) => serde_json::Value::Object(object.dehydrate()),
        }
    }
}

/// Short name of a JSON value's kind, used in diagnostics.
#[must_use]
pub(crate) const fn json_kind_name(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Build a [`RawMap`] from a JSON object.
///
/// Non-object input yields an empty mapping.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use value_object::{Value, raw_map};
///
/// let raw = raw_map(json!({"name": "Marcus", "loan": {"amount": 10000}}));
/// assert_eq!(raw.get("name").and_then(Value::as_str), Some("Marcus"));
/// assert!(matches!(raw.get("loan"), Some(Value::Map(_))));
/// ```
#[must_use]
pub fn raw_map(json: serde_json::Value) -> RawMap {
    match Value::from(json) {
        Value::Map(entries) => entries,
        _ => RawMap::new(),
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Object(entries) => Self::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
            other => Self::primitive(other),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Primitive(serde_json::Value::String(text.to_owned()))
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Primitive(serde_json::Value::String(text))
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Primitive(serde_json::Value::Bool(flag))
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(number: $ty) -> Self {
                    Self::Primitive(serde_json::Value::from(number))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<f64> for Value {
    /// Non-finite floats have no JSON form and become [`Value::Null`].
    fn from(number: f64) -> Self {
        serde_json::Number::from_f64(number)
            .map_or(Self::Null, |n| Self::Primitive(serde_json::Value::Number(n)))
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<NaiveDate> for Value {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(at: DateTime<Utc>) -> Self {
        Self::Datetime(at)
    }
}

impl From<ExactDecimal> for Value {
    fn from(decimal: ExactDecimal) -> Self {
        Self::Decimal(decimal)
    }
}

impl From<BigDecimal> for Value {
    fn from(decimal: BigDecimal) -> Self {
        Self::Decimal(ExactDecimal::new(decimal))
    }
}

impl From<RawMap> for Value {
    fn from(entries: RawMap) -> Self {
        Self::Map(entries)
    }
}

impl From<ValueObject> for Value {
    fn from(object: ValueObject) -> Self {
        Self::Object(object)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Self>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<K, V> FromIterator<(K, V)> for Value
where
    K: Into<String>,
    V: Into<Self>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::Map(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
