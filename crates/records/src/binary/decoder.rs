//! Record binary decoder.

use campus_buffers::Reader;

use super::TranscodeError;
use crate::record::Record;
use crate::registry::SchemaRegistry;
use crate::schema::{FieldDef, FieldType, RecordSchema, TypeTag};
use crate::value::FieldValue;

/// Decodes records from the ordered binary transfer form.
///
/// Strictly symmetric with [`RecordEncoder`](super::RecordEncoder): reads
/// the identical field sequence in declared wire order. Any shortfall of
/// bytes, malformed UTF-8, unknown wire tag, or tag disagreeing with the
/// declared nested shape is fatal; the caller must discard the input as
/// invalid.
pub struct RecordDecoder<'a> {
    pub registry: &'a SchemaRegistry,
}

impl<'a> RecordDecoder<'a> {
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Decodes one record of the given shape from a byte sequence.
    pub fn decode(
        &self,
        schema: &'static RecordSchema,
        data: &[u8],
    ) -> Result<Record, TranscodeError> {
        let mut reader = Reader::new(data);
        self.read_record(&mut reader, schema)
    }

    /// Reads a record body from the cursor position.
    pub fn read_record(
        &self,
        reader: &mut Reader<'_>,
        schema: &'static RecordSchema,
    ) -> Result<Record, TranscodeError> {
        let mut values = Vec::with_capacity(schema.fields.len());
        for def in schema.fields {
            values.push(self.read_value(reader, def)?);
        }
        Ok(Record::from_values(schema, values))
    }

    fn read_value(
        &self,
        reader: &mut Reader<'_>,
        def: &FieldDef,
    ) -> Result<FieldValue, TranscodeError> {
        match def.ty {
            FieldType::I64 => Ok(FieldValue::I64(reader.i64()?)),
            FieldType::I32 => Ok(FieldValue::I32(reader.i32()?)),
            FieldType::Bool => Ok(FieldValue::Bool(reader.u8()? != 0)),
            FieldType::Str => Ok(FieldValue::Str(self.read_str(reader)?)),
            FieldType::DateTime => Ok(FieldValue::DateTime(self.read_str(reader)?)),
            FieldType::Record(tag) => match reader.u8()? {
                0 => Ok(FieldValue::Record(None)),
                1 => {
                    let nested = self.read_tagged(reader, tag)?;
                    Ok(FieldValue::Record(Some(Box::new(nested))))
                }
                n => Err(TranscodeError::InvalidPresence(n)),
            },
            FieldType::List(tag) => {
                let count = reader.u32()?;
                let mut items = Vec::new();
                for _ in 0..count {
                    items.push(self.read_tagged(reader, tag)?);
                }
                Ok(FieldValue::List(items))
            }
        }
    }

    fn read_tagged(
        &self,
        reader: &mut Reader<'_>,
        expected: TypeTag,
    ) -> Result<Record, TranscodeError> {
        let found = reader.u16()?;
        if found != expected {
            return Err(TranscodeError::TagMismatch { expected, found });
        }
        let schema = self
            .registry
            .resolve(found)
            .ok_or(TranscodeError::UnknownTag(found))?;
        self.read_record(reader, schema)
    }

    fn read_str(&self, reader: &mut Reader<'_>) -> Result<String, TranscodeError> {
        let length = reader.u32()? as usize;
        Ok(reader.utf8(length)?.to_owned())
    }
}
