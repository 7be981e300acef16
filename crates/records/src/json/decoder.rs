//! JSON payload decoder.

use serde_json::Value;

use super::JsonError;
use crate::record::Record;
use crate::registry::SchemaRegistry;
use crate::schema::{FieldDef, FieldType, RecordSchema};
use crate::value::FieldValue;

/// Decodes records from loosely-typed external JSON payloads.
///
/// Decoding is tolerant per field: an absent key, a `null`, or a
/// type-incompatible value leaves the field at its declared default, and
/// unknown extra keys in the payload are ignored, so server-side additions
/// never break the decode. The whole record only fails on an unregistered
/// nested shape tag, a configuration error caught by
/// [`SchemaRegistry::validate`] before any traffic.
pub struct JsonDecoder<'a> {
    pub registry: &'a SchemaRegistry,
}

impl<'a> JsonDecoder<'a> {
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Decodes one record of the given shape from a JSON value.
    ///
    /// A non-object payload produces a record with every field at its
    /// default.
    pub fn decode(
        &self,
        schema: &'static RecordSchema,
        json: &Value,
    ) -> Result<Record, JsonError> {
        let mut record = Record::empty(schema);
        let Some(obj) = json.as_object() else {
            return Ok(record);
        };
        for (i, def) in schema.fields.iter().enumerate() {
            let Some(raw) = obj.get(def.key) else {
                continue;
            };
            if let Some(value) = self.convert(def, raw)? {
                record.set_index(i, value);
            }
        }
        Ok(record)
    }

    /// Converts one payload value; `None` means incompatible, keep the
    /// default.
    fn convert(&self, def: &FieldDef, raw: &Value) -> Result<Option<FieldValue>, JsonError> {
        match def.ty {
            FieldType::I64 => Ok(raw.as_i64().map(FieldValue::I64)),
            FieldType::I32 => Ok(raw
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .map(FieldValue::I32)),
            FieldType::Bool => Ok(raw.as_bool().map(FieldValue::Bool)),
            FieldType::Str => Ok(raw.as_str().map(|s| FieldValue::Str(s.to_owned()))),
            FieldType::DateTime => Ok(raw.as_str().map(|s| FieldValue::DateTime(s.to_owned()))),
            FieldType::Record(tag) => {
                if !raw.is_object() {
                    return Ok(None);
                }
                let schema = self.registry.resolve(tag).ok_or(JsonError::UnknownTag(tag))?;
                let nested = self.decode(schema, raw)?;
                Ok(Some(FieldValue::Record(Some(Box::new(nested)))))
            }
            FieldType::List(tag) => {
                let Some(arr) = raw.as_array() else {
                    return Ok(None);
                };
                let schema = self.registry.resolve(tag).ok_or(JsonError::UnknownTag(tag))?;
                let mut items = Vec::with_capacity(arr.len());
                for elem in arr {
                    // Non-object elements are dropped, not fatal.
                    if elem.is_object() {
                        items.push(self.decode(schema, elem)?);
                    }
                }
                Ok(Some(FieldValue::List(items)))
            }
        }
    }
}
