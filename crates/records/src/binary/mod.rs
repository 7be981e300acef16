//! Ordered binary transcoding.
//!
//! The wire form of a record is the concatenation of its fields in
//! declared schema order, with no framing of its own: both ends must share
//! the same schema out of band. Nested records are the only self-describing
//! part of the format; they carry a `u16` shape tag resolved through the
//! [`SchemaRegistry`](crate::SchemaRegistry).

mod decoder;
mod encoder;
mod error;

pub use decoder::RecordDecoder;
pub use encoder::RecordEncoder;
pub use error::TranscodeError;
