//! Record binary encoder.

use campus_buffers::Writer;

use crate::record::Record;
use crate::value::FieldValue;

/// Encodes records into the ordered binary transfer form.
///
/// Fields are written in declared wire order: integers fixed-width
/// big-endian, booleans as a single byte, strings and date/times as
/// uint32-length-prefixed UTF-8. A nested record is a presence byte
/// followed by its `u16` shape tag and body; a sequence is a uint32 count
/// followed by tagged bodies. Records are well-typed by construction, so
/// encoding cannot fail.
pub struct RecordEncoder {
    pub writer: Writer,
}

impl Default for RecordEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes a record and returns the encoded bytes.
    pub fn encode(&mut self, record: &Record) -> Vec<u8> {
        self.writer.reset();
        self.write_record(record);
        self.writer.flush()
    }

    /// Writes a record body (all fields, wire order) into the writer.
    pub fn write_record(&mut self, record: &Record) {
        for value in record.values() {
            self.write_value(value);
        }
    }

    fn write_value(&mut self, value: &FieldValue) {
        match value {
            FieldValue::I64(n) => self.writer.i64(*n),
            FieldValue::I32(n) => self.writer.i32(*n),
            FieldValue::Bool(b) => self.writer.u8(u8::from(*b)),
            FieldValue::Str(s) | FieldValue::DateTime(s) => self.write_str(s),
            FieldValue::Record(None) => self.writer.u8(0),
            FieldValue::Record(Some(rec)) => {
                self.writer.u8(1);
                self.write_tagged(rec);
            }
            FieldValue::List(items) => {
                self.writer.u32(items.len() as u32);
                for rec in items {
                    self.write_tagged(rec);
                }
            }
        }
    }

    fn write_tagged(&mut self, record: &Record) {
        self.writer.u16(record.tag());
        self.write_record(record);
    }

    fn write_str(&mut self, s: &str) {
        let bytes = s.as_bytes();
        self.writer.u32(bytes.len() as u32);
        self.writer.buf(bytes);
    }
}
