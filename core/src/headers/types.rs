//! headers/types.rs
//! Frame header struct and the detection outcome.
//!
//! Notes:
//! - Fixed 7-byte layout: magic(4) | version(1) | codec_id(1) | level(1).
//! - Single-byte fields, so there is no endianness to agree on.
//! - `level` is informational; decoding never consults it.

use thiserror::Error;

use crate::compression::CodecId;
use crate::constants::{FORMAT_VERSION, HEADER_LEN, MAGIC, SUPPORTED_VERSIONS};
use crate::utils::fmt_bytes;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FrameHeader {
    pub magic: [u8; 4],  // "ZSRD" magic marker
    pub version: u8,     // header layout version
    pub codec_id: u8,    // registry id, 0 = identity
    pub level: u8,       // level used at write time, 0 if not applicable
}

impl Default for FrameHeader {
    fn default() -> Self {
        Self {
            magic: MAGIC,
            version: FORMAT_VERSION,
            codec_id: CodecId::None as u8,
            level: 0,
        }
    }
}

impl FrameHeader {
    /// Fixed header size in bytes.
    pub const LEN: usize = HEADER_LEN;

    pub fn new(codec_id: u8, version: u8, level: u8) -> Self {
        Self { magic: MAGIC, version, codec_id, level }
    }

    /// Typed codec id, when this build knows the raw value.
    pub fn codec(&self) -> Option<CodecId> {
        CodecId::try_from(self.codec_id).ok()
    }

    pub fn is_supported_version(&self) -> bool {
        SUPPORTED_VERSIONS.contains(&self.version)
    }
}

/// Result of looking at the leading bytes of an artifact.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Sniff<'a> {
    /// Magic matched: header plus everything after it.
    Frame { header: FrameHeader, payload: &'a [u8] },
    /// No frame header: the whole input, as written by the plain serializer.
    Legacy(&'a [u8]),
}

impl Sniff<'_> {
    pub fn is_frame(&self) -> bool {
        matches!(self, Sniff::Frame { .. })
    }
}

#[derive(Debug, Error)]
pub enum HeaderError {
    /// Buffer too short to contain a header.
    #[error("header buffer too short: {have} < {need}")]
    BufferTooShort { have: usize, need: usize },

    /// Leading bytes are not the frame magic.
    #[error("invalid magic: expected {}, got {}", fmt_bytes(&MAGIC), fmt_bytes(.have))]
    InvalidMagic { have: [u8; 4] },
}
