//! serializer/bincode.rs
//! bincode 2 in serde mode with the standard (varint) configuration.
use serde::{de::DeserializeOwned, Serialize};

use crate::serializer::{SerializationError, Serializer};

const FORMAT: &str = "bincode";

#[derive(Copy, Clone, Debug, Default)]
pub struct Bincode;

impl Serializer for Bincode {
    fn format_name(&self) -> &'static str {
        FORMAT
    }

    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, SerializationError> {
        bincode::serde::encode_to_vec(value, bincode::config::standard())
            .map_err(|e| SerializationError::Encode { format: FORMAT, msg: e.to_string() })
    }

    fn deserialize<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, SerializationError> {
        let (value, used): (T, usize) =
            bincode::serde::decode_from_slice(bytes, bincode::config::standard())
                .map_err(|e| SerializationError::Decode { format: FORMAT, msg: e.to_string() })?;
        if used != bytes.len() {
            return Err(SerializationError::Decode {
                format: FORMAT,
                msg: format!("{} trailing bytes after value", bytes.len() - used),
            });
        }
        Ok(value)
    }
}
