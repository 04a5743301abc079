//! serializer/mod.rs
//! The object serializer this layer wraps.
//!
//! The framing layer only ever sees bytes; a `Serializer` turns values into
//! those bytes and back. Two stock implementations ship with the crate.

pub mod bincode;
pub mod json;

pub use self::bincode::Bincode;
pub use self::json::Json;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("{format} encode failed: {msg}")]
    Encode { format: &'static str, msg: String },

    #[error("{format} decode failed: {msg}")]
    Decode { format: &'static str, msg: String },
}

/// Serialize-to-bytes / deserialize-from-bytes, as exposed by the wrapped format.
pub trait Serializer: Send + Sync {
    /// Short format name used in errors and logs.
    fn format_name(&self) -> &'static str;

    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, SerializationError>;

    fn deserialize<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, SerializationError>;
}
