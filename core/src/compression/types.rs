//! compression/types.rs
//! Codec identifiers, level ranges, the `Codec`/`Compressor` traits and
//! their error type.
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compression::constants::codec_ids;

/// Wire-stable codec identifier.
#[repr(u8)]
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, TryFromPrimitive, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CodecId {
    None   = codec_ids::NONE,
    Zstd   = codec_ids::ZSTD,
    Brotli = codec_ids::BROTLI,
    Zlib   = codec_ids::ZLIB,
    Lzma   = codec_ids::LZMA,
    Lz4    = codec_ids::LZ4,
}

impl CodecId {
    /// Every id this build knows about, in wire order.
    pub const ALL: [CodecId; 6] = [
        CodecId::None,
        CodecId::Zstd,
        CodecId::Brotli,
        CodecId::Zlib,
        CodecId::Lzma,
        CodecId::Lz4,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CodecId::None   => "none",
            CodecId::Zstd   => "zstd",
            CodecId::Brotli => "brotli",
            CodecId::Zlib   => "zlib",
            CodecId::Lzma   => "lzma",
            CodecId::Lz4    => "lz4",
        }
    }

    /// Whether the backend for this id was compiled in.
    pub fn is_built_in(self) -> bool {
        match self {
            CodecId::None   => true,
            CodecId::Zstd   => cfg!(feature = "zstd"),
            CodecId::Brotli => cfg!(feature = "brotli"),
            CodecId::Zlib   => cfg!(feature = "zlib"),
            CodecId::Lzma   => cfg!(feature = "lzma"),
            CodecId::Lz4    => cfg!(feature = "lz4"),
        }
    }
}

impl fmt::Display for CodecId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Codec name that matches no known id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown codec name {0:?}")]
pub struct ParseCodecError(pub String);

impl FromStr for CodecId {
    type Err = ParseCodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        CodecId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseCodecError(s.to_string()))
    }
}

/// Inclusive range of levels a backend accepts, plus its default.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LevelRange {
    pub min: u8,
    pub max: u8,
    pub default: u8,
}

impl LevelRange {
    /// Backends without a level knob.
    pub const FIXED: LevelRange = LevelRange { min: 0, max: 0, default: 0 };

    pub const fn new(min: u8, max: u8, default: u8) -> Self {
        Self { min, max, default }
    }

    pub fn contains(&self, level: u8) -> bool {
        (self.min..=self.max).contains(&level)
    }

    /// Narrow a caller-supplied level to a header byte, or `None` when out of range.
    pub fn check(&self, level: i32) -> Option<u8> {
        u8::try_from(level).ok().filter(|l| self.contains(*l))
    }
}

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("codec {codec} init failed: {msg}")]
    CodecInitFailed { codec: &'static str, msg: String },

    #[error("codec {codec} process failed: {msg}")]
    CodecProcessFailed { codec: &'static str, msg: String },

    #[error("codec {codec} stream ended before its end marker")]
    Truncated { codec: &'static str },

    /// The sink or source around the codec failed, not the codec itself.
    #[error("codec stream I/O failed: {0}")]
    Io(#[from] io::Error),
}

impl CompressionError {
    pub fn init(codec: &'static str, e: impl fmt::Display) -> Self {
        CompressionError::CodecInitFailed { codec, msg: e.to_string() }
    }

    pub fn process(codec: &'static str, e: impl fmt::Display) -> Self {
        CompressionError::CodecProcessFailed { codec, msg: e.to_string() }
    }
}

/// Incremental compressor bound to a sink for the duration of one frame.
pub trait Compressor {
    /// Compress one chunk, writing whatever output is ready to the sink.
    fn compress_chunk(&mut self, input: &[u8]) -> Result<(), CompressionError>;
    /// Flush pending state and write the stream trailer.
    fn finish(self: Box<Self>) -> Result<(), CompressionError>;
}

/// A compression backend.
///
/// Implementations are stateless and shared through the registry, so they
/// must be `Send + Sync`. Per-frame state lives in the `Compressor` they hand out.
pub trait Codec: Send + Sync {
    fn id(&self) -> CodecId;

    fn name(&self) -> &'static str {
        self.id().name()
    }

    fn levels(&self) -> LevelRange;

    /// Start a compressed stream into `sink` at a level already checked against `levels()`.
    fn compressor<'a>(
        &self,
        sink: &'a mut dyn Write,
        level: u8,
    ) -> Result<Box<dyn Compressor + 'a>, CompressionError>;

    /// Decompress a complete payload. A payload cut short is an error, never a short result.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError>;

    fn compress(&self, input: &[u8], level: u8) -> Result<Vec<u8>, CompressionError> {
        let mut out = Vec::with_capacity(input.len() / 2 + 64);
        let mut compressor = self.compressor(&mut out, level)?;
        compressor.compress_chunk(input)?;
        compressor.finish()?;
        Ok(out)
    }
}
