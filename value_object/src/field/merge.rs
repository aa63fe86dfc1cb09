//! Merge rules for two internal values of the same field.

use crate::{Field, FieldKind, Value, ValueObjectResult, ValueObjectResultExt};

impl Field {
    /// Merge `incoming` into `existing` in place.
    ///
    /// A null `incoming` never changes `existing`. Collections take the
    /// key-wise union, merging shared keys through the sub-field; nested
    /// objects are updated recursively. Every other kind keeps `incoming`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ValueObjectError::TypeMismatch`] when two nested
    /// instances of different value-object types meet.
    ///
    /// # Examples
    ///
    /// ```
    /// use value_object::{Field, Value};
    ///
    /// let field = Field::collection(Field::primitive());
    /// let mut existing: Value = [("a", 1_i64), ("b", 2)].into_iter().collect();
    /// let incoming: Value = [("b", 3_i64), ("c", 4)].into_iter().collect();
    /// field.merge(&mut existing, &incoming)?;
    /// let expected: Value = [("a", 1_i64), ("b", 3), ("c", 4)].into_iter().collect();
    /// assert_eq!(existing, expected);
    /// # Ok::<(), value_object::ValueObjectError>(())
    /// ```
    pub fn merge(&self, existing: &mut Value, incoming: &Value) -> ValueObjectResult<()> {
        if incoming.is_null() {
            return Ok(());
        }
        match &self.kind {
            FieldKind::Collection(sub_field) => {
                if let (Value::Map(current), Value::Map(entries)) = (&mut *existing, incoming) {
                    for (key, entry) in entries {
                        let slot = current.entry(key.clone()).or_insert(Value::Null);
                        sub_field.merge(slot, entry).within_field(key)?;
                    }
                    return Ok(());
                }
            }
            FieldKind::Nested(_) => {
                if let (Value::Object(current), Value::Object(other)) = (&mut *existing, incoming)
                {
                    return current.update(other);
                }
            }
            FieldKind::Primitive
            | FieldKind::Bytes { .. }
            | FieldKind::Date
            | FieldKind::Datetime
            | FieldKind::Decimal => {}
        }
        existing.clone_from(incoming);
        Ok(())
    }
}
