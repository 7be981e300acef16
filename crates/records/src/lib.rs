//! Schema-typed record engine.
//!
//! One declarative [`RecordSchema`] per record shape drives everything:
//! tolerant decoding from external JSON payloads ([`JsonDecoder`]),
//! symmetric binary transcoding in declared wire order
//! ([`RecordEncoder`]/[`RecordDecoder`]), tagged resolution of nested
//! shapes ([`SchemaRegistry`]), and optional derived ordering
//! ([`sort_key`]/[`compare`]).
//!
//! # Example
//!
//! ```
//! use campus_records::{
//!     FieldDef, FieldType, JsonDecoder, OrderKey, RecordDecoder, RecordEncoder,
//!     RecordSchema, SchemaRegistry,
//! };
//!
//! static NICKNAME: RecordSchema = RecordSchema {
//!     tag: 1,
//!     name: "Nickname",
//!     fields: &[
//!         FieldDef::new("course_id", "course_id", FieldType::I64),
//!         FieldDef::new("nickname", "nickname", FieldType::Str),
//!     ],
//!     order_key: OrderKey::None,
//! };
//!
//! let registry = SchemaRegistry::build(&[&NICKNAME]).unwrap();
//! let payload: serde_json::Value =
//!     serde_json::from_str(r#"{"course_id": 42, "nickname": "bio101"}"#).unwrap();
//! let record = JsonDecoder::new(&registry).decode(&NICKNAME, &payload).unwrap();
//! assert_eq!(record.i64("course_id"), Some(42));
//!
//! let bytes = RecordEncoder::new().encode(&record);
//! let back = RecordDecoder::new(&registry).decode(&NICKNAME, &bytes).unwrap();
//! assert_eq!(back, record);
//! ```

pub mod binary;
pub mod json;

mod order;
mod record;
mod registry;
mod schema;
mod value;

pub use binary::{RecordDecoder, RecordEncoder, TranscodeError};
pub use json::{JsonDecoder, JsonError};
pub use order::{compare, sort_key, SortKey};
pub use record::{Record, RecordError};
pub use registry::{RegistryError, SchemaRegistry};
pub use schema::{FieldDef, FieldDefault, FieldType, OrderKey, RecordSchema, TypeTag};
pub use value::FieldValue;
