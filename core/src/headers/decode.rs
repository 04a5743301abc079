//! headers/decode.rs
//!
//! Header decoding and frame detection.
//!
//! Design notes:
//! - `decode_header` is the only place that decides framed vs. legacy. It
//!   looks at the first `HEADER_LEN` bytes and nothing else.
//! - A magic mismatch is an outcome (`Sniff::Legacy`), not an error.
//! - Version and codec id are returned as found; judging them is the
//!   reader's job, so an unknown codec surfaces as `UnknownCodec` rather
//!   than being mistaken for legacy data.

use crate::constants::{offsets, HEADER_LEN, MAGIC};
use crate::headers::types::{FrameHeader, HeaderError, Sniff};

/// Classify `buf` as a frame or a legacy artifact.
///
/// Input shorter than a header can't be a frame and is classified legacy,
/// even when it begins with a prefix of the magic.
#[inline]
pub fn decode_header(buf: &[u8]) -> Sniff<'_> {
    match decode_header_strict(buf) {
        Ok(header) => Sniff::Frame { header, payload: &buf[HEADER_LEN..] },
        Err(_) => Sniff::Legacy(buf),
    }
}

/// Parse a header, reporting why `buf` doesn't start with one.
#[inline]
pub fn decode_header_strict(buf: &[u8]) -> Result<FrameHeader, HeaderError> {
    if buf.len() < HEADER_LEN {
        return Err(HeaderError::BufferTooShort { have: buf.len(), need: HEADER_LEN });
    }

    let mut magic = [0u8; 4];
    magic.copy_from_slice(&buf[..MAGIC.len()]);
    if magic != MAGIC {
        return Err(HeaderError::InvalidMagic { have: magic });
    }

    Ok(FrameHeader {
        magic,
        version: buf[offsets::VERSION],
        codec_id: buf[offsets::CODEC_ID],
        level: buf[offsets::LEVEL],
    })
}

/// True when `buf` starts with a frame header.
pub fn is_frame(buf: &[u8]) -> bool {
    decode_header(buf).is_frame()
}
