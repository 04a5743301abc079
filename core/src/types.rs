//! types.rs
//! Crate-wide error taxonomy.
//!
//! Design notes:
//! - Variants mirror what a caller can act on: "pick another codec"
//!   (`CodecUnavailable`, `InvalidLevel`), "upgrade me" (`UnknownCodec`,
//!   `UnsupportedVersion`) and "this data is broken" (`CorruptFrame`).
//! - `From<T>` impls enable `?` across the compression, header and
//!   serializer layers.
//! - Nothing here is retried; every failure is deterministic for its input.

use std::io;

use thiserror::Error;

use crate::compression::{CodecId, CompressionError};
use crate::serializer::SerializationError;
use crate::utils::enum_name_or_hex;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Unified error for every public entry point.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested codec is not present in the registry (backend not built in).
    #[error("codec {name:?} is not available in this build")]
    CodecUnavailable { name: String },

    /// Level outside the codec's supported range. Never clamped.
    #[error("invalid level {level} for codec {codec}: supported range is {min}..={max}")]
    InvalidLevel {
        codec: &'static str,
        level: i32,
        min: u8,
        max: u8,
    },

    /// Frame names a codec id this registry cannot resolve.
    #[error("frame uses unknown codec {}", codec_label(.codec_id))]
    UnknownCodec { codec_id: u8 },

    /// Frame carries a header layout version this build does not read.
    #[error("frame uses unsupported format version {version}")]
    UnsupportedVersion { version: u8 },

    /// Header parsed but the payload did not decompress.
    #[error("corrupt {codec} frame: {msg}")]
    CorruptFrame { codec: &'static str, msg: String },

    /// Backend failure while compressing freshly serialized bytes.
    #[error("compression error: {0}")]
    Compression(#[source] CompressionError),

    /// Propagated unchanged from the serializer.
    #[error("serialization error: {0}")]
    Serialization(#[from] SerializationError),

    /// Sink or source failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration could not be parsed or failed validation.
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<CompressionError> for Error {
    fn from(e: CompressionError) -> Self {
        match e {
            CompressionError::Io(io) => Error::Io(io),
            other => Error::Compression(other),
        }
    }
}

fn codec_label(raw: &u8) -> String {
    enum_name_or_hex::<CodecId>(*raw)
}

/// Fieldless view of [`Error`], handy for matching in callers and tests.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    CodecUnavailable,
    InvalidLevel,
    UnknownCodec,
    UnsupportedVersion,
    CorruptFrame,
    Compression,
    Serialization,
    Io,
    Config,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::CodecUnavailable { .. } => ErrorKind::CodecUnavailable,
            Error::InvalidLevel { .. } => ErrorKind::InvalidLevel,
            Error::UnknownCodec { .. } => ErrorKind::UnknownCodec,
            Error::UnsupportedVersion { .. } => ErrorKind::UnsupportedVersion,
            Error::CorruptFrame { .. } => ErrorKind::CorruptFrame,
            Error::Compression(_) => ErrorKind::Compression,
            Error::Serialization(_) => ErrorKind::Serialization,
            Error::Io(_) => ErrorKind::Io,
            Error::Config(_) => ErrorKind::Config,
        }
    }
}
