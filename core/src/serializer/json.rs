//! serializer/json.rs
//! serde_json. JSON text never starts with the frame magic, so JSON
//! artifacts can never be mistaken for frames.
use serde::{de::DeserializeOwned, Serialize};

use crate::serializer::{SerializationError, Serializer};

const FORMAT: &str = "json";

#[derive(Copy, Clone, Debug, Default)]
pub struct Json;

impl Serializer for Json {
    fn format_name(&self) -> &'static str {
        FORMAT
    }

    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, SerializationError> {
        serde_json::to_vec(value)
            .map_err(|e| SerializationError::Encode { format: FORMAT, msg: e.to_string() })
    }

    fn deserialize<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, SerializationError> {
        serde_json::from_slice(bytes)
            .map_err(|e| SerializationError::Decode { format: FORMAT, msg: e.to_string() })
    }
}
