use thiserror::Error;

use crate::schema::TypeTag;

/// Error type for JSON decoding.
///
/// Per-field problems (missing keys, type mismatches) are not errors; they
/// fall back to the declared defaults. The only failure is a nested shape
/// tag missing from the registry, which startup validation prevents.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonError {
    #[error("unknown type tag {0}")]
    UnknownTag(TypeTag),
}
