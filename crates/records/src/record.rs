//! The record aggregate.

use thiserror::Error;

use crate::schema::{RecordSchema, TypeTag};
use crate::value::FieldValue;

/// Error type for explicit record mutation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("unknown field `{0}`")]
    UnknownField(String),
    #[error("type mismatch for field `{field}`: expected {expected}, got {found}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

/// A schema-typed aggregate of field values.
///
/// Values are stored in a vector parallel to the schema's field slice, so
/// every declared field always holds a well-defined value; there is no
/// partially-populated state. Construction goes through [`Record::empty`]
/// (all defaults) or one of the decoders; mutation goes through
/// [`Record::set`].
#[derive(Debug, Clone)]
pub struct Record {
    schema: &'static RecordSchema,
    values: Vec<FieldValue>,
}

impl Record {
    /// A record with every field at its declared default.
    pub fn empty(schema: &'static RecordSchema) -> Self {
        let values = schema.fields.iter().map(FieldValue::default_for).collect();
        Self { schema, values }
    }

    pub(crate) fn from_values(schema: &'static RecordSchema, values: Vec<FieldValue>) -> Self {
        debug_assert_eq!(values.len(), schema.fields.len());
        Self { schema, values }
    }

    pub fn schema(&self) -> &'static RecordSchema {
        self.schema
    }

    pub fn tag(&self) -> TypeTag {
        self.schema.tag
    }

    /// All field values in wire order.
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        let i = self.schema.field_index(name)?;
        Some(&self.values[i])
    }

    /// Replaces a field value; the value must match the declared type and,
    /// for nested values, the declared shape tag.
    pub fn set(&mut self, name: &str, value: FieldValue) -> Result<(), RecordError> {
        let i = self
            .schema
            .field_index(name)
            .ok_or_else(|| RecordError::UnknownField(name.to_owned()))?;
        let def = &self.schema.fields[i];
        if !value.matches(def.ty) {
            return Err(RecordError::TypeMismatch {
                field: def.name,
                expected: def.ty.as_str(),
                found: value.kind(),
            });
        }
        self.values[i] = value;
        Ok(())
    }

    pub(crate) fn set_index(&mut self, index: usize, value: FieldValue) {
        self.values[index] = value;
    }

    // ---------------------------------------------------------- typed reads

    pub fn i64(&self, name: &str) -> Option<i64> {
        self.get(name)?.as_i64()
    }

    pub fn i32(&self, name: &str) -> Option<i32> {
        self.get(name)?.as_i32()
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.get(name)?.as_bool()
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name)?.as_str()
    }

    /// Raw date/time string of a `DateTime` field.
    pub fn date_raw(&self, name: &str) -> Option<&str> {
        self.get(name)?.as_date_raw()
    }

    /// Nested record, `None` when absent or not a nested field.
    pub fn record(&self, name: &str) -> Option<&Record> {
        self.get(name)?.as_record()
    }

    /// Nested sequence, `None` when not a sequence field.
    pub fn list(&self, name: &str) -> Option<&[Record]> {
        self.get(name)?.as_list()
    }
}

impl PartialEq for Record {
    /// Field-for-field equality between records of the same shape.
    fn eq(&self, other: &Self) -> bool {
        self.schema.tag == other.schema.tag && self.values == other.values
    }
}
