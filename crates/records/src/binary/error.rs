use thiserror::Error;

use campus_buffers::BufferError;

use crate::schema::TypeTag;

/// Error type for binary decoding.
///
/// Every variant is fatal: the input is corrupt or truncated and the caller
/// must discard it. Encoding cannot fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranscodeError {
    #[error(transparent)]
    Buffer(#[from] BufferError),
    #[error("unknown type tag {0}")]
    UnknownTag(TypeTag),
    #[error("type tag mismatch: expected {expected}, found {found}")]
    TagMismatch { expected: TypeTag, found: TypeTag },
    #[error("invalid presence marker {0}")]
    InvalidPresence(u8),
}
