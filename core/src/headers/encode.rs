//! headers/encode.rs
//!
//! Header encoding.
//!
//! Design notes:
//! - Field order must match `decode.rs` exactly; the layout is frozen.
//! - Returns a fixed `[u8; HEADER_LEN]` so the payload offset is known statically.

use crate::constants::{offsets, HEADER_LEN, MAGIC};
use crate::headers::types::FrameHeader;

/// Encode a header from its three variable fields.
#[inline]
pub fn encode_header(codec_id: u8, format_version: u8, level: u8) -> [u8; HEADER_LEN] {
    let mut out = [0u8; HEADER_LEN];
    out[..MAGIC.len()].copy_from_slice(&MAGIC);  // 0..4 magic
    out[offsets::VERSION] = format_version;      // 4    version
    out[offsets::CODEC_ID] = codec_id;           // 5    codec id
    out[offsets::LEVEL] = level;                 // 6    level
    out
}

impl FrameHeader {
    /// Serialize this header. The stored magic is ignored; frames always carry `MAGIC`.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        encode_header(self.codec_id, self.version, self.level)
    }
}
