//! Value-object types: the immutable, ordered field declarations of a record.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use super::ValueObject;
use crate::{
    Field, FieldKind, RawMap, StoredMap, ValueObjectError, ValueObjectResult,
    ValueObjectResultExt,
};

static NULL_STORED: serde_json::Value = serde_json::Value::Null;

/// A named, ordered set of field declarations.
///
/// Types are cheap to clone and compare structurally: two types are equal
/// when their names and field declarations are equal.
#[derive(Clone)]
pub struct ValueObjectType {
    inner: Arc<TypeInner>,
}

#[derive(Debug, PartialEq)]
struct TypeInner {
    name: String,
    entries: Vec<FieldEntry>,
}

#[derive(Debug, PartialEq)]
struct FieldEntry {
    attribute: String,
    key: String,
    field: Field,
}

impl FieldEntry {
    fn new(name: impl Into<String>, field: Field) -> Self {
        let attribute = name.into();
        let key = field.key().map_or_else(|| attribute.clone(), str::to_owned);
        Self {
            attribute,
            key,
            field,
        }
    }
}

impl ValueObjectType {
    /// Start declaring a value-object type called `name`.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_object::{Field, ValueObjectType};
    ///
    /// let loan = ValueObjectType::builder("Loan")
    ///     .field("amount", Field::primitive())
    ///     .field("opened", Field::date().with_key("opened_on"))
    ///     .build()?;
    /// assert_eq!(loan.key_of("opened"), Some("opened_on"));
    /// # Ok::<(), value_object::ValueObjectError>(())
    /// ```
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ValueObjectTypeBuilder {
        ValueObjectTypeBuilder {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Assemble a type from declarations already validated at compile time.
    #[doc(hidden)]
    #[must_use]
    pub fn from_declared_fields(name: &str, fields: Vec<(&'static str, Field)>) -> Self {
        let entries = fields
            .into_iter()
            .map(|(attribute, field)| FieldEntry::new(attribute, field))
            .collect();
        Self::from_entries(name.to_owned(), entries)
    }

    fn from_entries(name: String, entries: Vec<FieldEntry>) -> Self {
        Self {
            inner: Arc::new(TypeInner { name, entries }),
        }
    }

    /// Name of the type.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Declared fields in order as `(attribute, key, field)`.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str, &Field)> {
        self.inner
            .entries
            .iter()
            .map(|entry| (entry.attribute.as_str(), entry.key.as_str(), &entry.field))
    }

    /// The field declared under `attribute`.
    #[must_use]
    pub fn field(&self, attribute: &str) -> Option<&Field> {
        self.entry(attribute).map(|entry| &entry.field)
    }

    /// The storage key of the field declared under `attribute`.
    #[must_use]
    pub fn key_of(&self, attribute: &str) -> Option<&str> {
        self.entry(attribute).map(|entry| entry.key.as_str())
    }

    /// The attribute whose field is stored under `key`.
    #[must_use]
    pub fn attribute_for_key(&self, key: &str) -> Option<&str> {
        self.inner
            .entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.attribute.as_str())
    }

    fn entry(&self, attribute: &str) -> Option<&FieldEntry> {
        self.inner
            .entries
            .iter()
            .find(|entry| entry.attribute == attribute)
    }

    /// Build an instance from a raw mapping keyed by field key.
    ///
    /// Absent keys read as null; keys that match no field are ignored.
    ///
    /// # Errors
    ///
    /// Propagates [`Field::init`] failures with the offending field's key
    /// prefixed to the error path.
    pub fn construct(&self, mut raw: RawMap) -> ValueObjectResult<ValueObject> {
        let mut values = IndexMap::with_capacity(self.inner.entries.len());
        for entry in &self.inner.entries {
            let incoming = raw.swap_remove(&entry.key).unwrap_or_default();
            let value = entry.field.init(incoming).within_field(&entry.key)?;
            values.insert(entry.attribute.clone(), value);
        }
        Ok(ValueObject::from_parts(self.clone(), values))
    }

    /// Build an instance whose fields all hold their defaults.
    ///
    /// Equivalent to constructing from an empty mapping.
    #[must_use]
    pub fn construct_empty(&self) -> ValueObject {
        let values = self
            .inner
            .entries
            .iter()
            .map(|entry| (entry.attribute.clone(), entry.field.default_value()))
            .collect();
        ValueObject::from_parts(self.clone(), values)
    }

    /// Turn a stored mapping into a raw mapping consumable by
    /// [`ValueObjectType::construct`].
    ///
    /// Stored keys that match no field are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ValueObjectError::MalformedValue`] when a stored entry does
    /// not match its field's storage format.
    pub fn hydrate_values(&self, stored: &StoredMap) -> ValueObjectResult<RawMap> {
        tracing::trace!(vo_type = %self.name(), "hydrating stored values");
        self.inner
            .entries
            .iter()
            .map(|entry| {
                let raw = stored.get(&entry.key).unwrap_or(&NULL_STORED);
                entry
                    .field
                    .hydrate(raw)
                    .within_field(&entry.key)
                    .map(|value| (entry.key.clone(), value))
            })
            .collect()
    }

    /// Hydrate a stored mapping and construct an instance from it.
    ///
    /// # Errors
    ///
    /// Propagates hydration and construction failures.
    pub fn hydrate(&self, stored: &StoredMap) -> ValueObjectResult<ValueObject> {
        self.construct(self.hydrate_values(stored)?)
    }

    /// Hydrate a stored JSON document; `null` reads as an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns [`ValueObjectError::MalformedValue`] when the document is not
    /// a mapping, and propagates hydration failures otherwise.
    pub fn hydrate_json(&self, stored: &serde_json::Value) -> ValueObjectResult<ValueObject> {
        match stored {
            serde_json::Value::Null => self.hydrate(&StoredMap::new()),
            serde_json::Value::Object(entries) => self.hydrate(entries),
            other => Err(ValueObjectError::malformed(
                "mapping",
                crate::value::json_kind_name(other),
            )),
        }
    }
}

impl PartialEq for ValueObjectType {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.inner == other.inner
    }
}

impl fmt::Debug for ValueObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueObjectType")
            .field("name", &self.inner.name)
            .field(
                "fields",
                &self
                    .inner
                    .entries
                    .iter()
                    .map(|entry| entry.attribute.as_str())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Builder for [`ValueObjectType`].
#[derive(Debug)]
#[must_use]
pub struct ValueObjectTypeBuilder {
    name: String,
    fields: Vec<(String, Field)>,
}

impl ValueObjectTypeBuilder {
    /// Declare `field` under `attribute`.
    pub fn field(mut self, attribute: impl Into<String>, field: Field) -> Self {
        self.fields.push((attribute.into(), field));
        self
    }

    /// Validate the declarations and freeze them into a type.
    ///
    /// # Errors
    ///
    /// Returns [`ValueObjectError::InvalidDefinition`] when two fields share
    /// an attribute or key, or when a key-restricted visibility is declared
    /// on a field without entries.
    pub fn build(self) -> ValueObjectResult<ValueObjectType> {
        let Self { name, fields } = self;
        let mut attributes = HashSet::new();
        let mut keys = HashSet::new();
        let mut entries = Vec::with_capacity(fields.len());
        for (attribute, field) in fields {
            let entry = FieldEntry::new(attribute, field);
            if !attributes.insert(entry.attribute.clone()) {
                return Err(ValueObjectError::invalid_definition(
                    name,
                    format!("duplicate attribute '{}'", entry.attribute),
                ));
            }
            if !keys.insert(entry.key.clone()) {
                return Err(ValueObjectError::invalid_definition(
                    name,
                    format!("duplicate key '{}'", entry.key),
                ));
            }
            if let Some(message) = restriction_error(&entry.attribute, &entry.field) {
                return Err(ValueObjectError::invalid_definition(name, message));
            }
            entries.push(entry);
        }
        Ok(ValueObjectType::from_entries(name, entries))
    }
}

fn restriction_error(attribute: &str, field: &Field) -> Option<String> {
    if field.visibility().restriction().is_some() && !field.kind().has_entries() {
        return Some(format!(
            "field '{attribute}' restricts public keys but is a {} field",
            field.kind().name()
        ));
    }
    match field.kind() {
        FieldKind::Collection(sub_field) => restriction_error(attribute, sub_field),
        _ => None,
    }
}
