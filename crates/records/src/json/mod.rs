//! Tolerant JSON field codec.

mod decoder;
mod error;

pub use decoder::JsonDecoder;
pub use error::JsonError;
