//! config.rs
//! Write-path configuration: default codec and level, the min-size
//! shortcut, and the chunk size for streaming calls.
//!
//! Loaded from TOML, e.g.
//!
//! ```toml
//! codec = "zlib"
//! level = 9
//! min_size = 128
//! chunk_size = 65536
//! ```
//!
//! Every key is optional; missing keys take the defaults below.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::compression::{CodecId, CodecRegistry};
use crate::constants::{DEFAULT_CHUNK_SIZE, DEFAULT_MIN_SIZE, MAX_CHUNK_SIZE};
use crate::types::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Codec used when a call does not name one. `None` = registry default.
    pub codec: Option<CodecId>,
    /// Level used when a call does not give one. `None` = codec default.
    pub level: Option<i32>,
    /// Serialized payloads shorter than this are framed with `none` unless
    /// the call named a codec explicitly.
    pub min_size: usize,
    /// Chunk size for `dump_streaming` / `load_streaming`.
    pub chunk_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            codec: None,
            level: None,
            min_size: DEFAULT_MIN_SIZE,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn validate(&self) -> Result<()> {
        validate_chunk_size(self.chunk_size)
    }

    /// Codec a call falls back to: the configured one, else the registry default.
    pub fn default_codec(&self, registry: &CodecRegistry) -> CodecId {
        self.codec.unwrap_or_else(|| registry.default_codec().id())
    }

    pub fn with_codec(mut self, codec: CodecId) -> Self {
        self.codec = Some(codec);
        self
    }

    pub fn with_level(mut self, level: i32) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_min_size(mut self, min_size: usize) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }
}

pub(crate) fn validate_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 || chunk_size > MAX_CHUNK_SIZE {
        return Err(Error::Config(format!(
            "chunk_size must be within 1..={MAX_CHUNK_SIZE}, got {chunk_size}"
        )));
    }
    Ok(())
}
