//! frame/reader.rs
//!
//! Frame Reader: any byte blob -> the serialized bytes it carries.
//!
//! Decision procedure:
//! 1. `decode_header` on the leading bytes.
//! 2. `Sniff::Legacy` -> the whole input, unchanged.
//! 3. `Sniff::Frame` -> check the version, resolve the codec id
//!    (`UnsupportedVersion` / `UnknownCodec` on failure), then decompress the
//!    payload (`CorruptFrame` on failure).
//!
//! Once a header has been recognized the input is never reinterpreted as
//! legacy data. Nothing past the header is inspected to make that call.

use std::borrow::Cow;

use tracing::debug;

use crate::compression::{CodecId, CodecRegistry};
use crate::constants::HEADER_LEN;
use crate::headers::{decode_header, FrameHeader, Sniff};
use crate::types::{Error, Result};
use crate::utils::preview;

#[derive(Copy, Clone, Debug)]
pub struct FrameReader<'r> {
    registry: &'r CodecRegistry,
}

impl FrameReader<'static> {
    /// Reader over the process-wide registry.
    pub fn global() -> Self {
        Self::new(CodecRegistry::global())
    }
}

impl<'r> FrameReader<'r> {
    pub fn new(registry: &'r CodecRegistry) -> Self {
        Self { registry }
    }

    /// Recover the serialized bytes carried by `bytes`.
    ///
    /// Borrows for legacy input and identity frames; allocates only when a
    /// payload had to be decompressed.
    pub fn read<'a>(&self, bytes: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        match decode_header(bytes) {
            Sniff::Legacy(raw) => {
                debug!(len = raw.len(), leading = %preview(raw, HEADER_LEN), "no frame header, reading as legacy");
                Ok(Cow::Borrowed(raw))
            }
            Sniff::Frame { header, payload } => self.read_frame(&header, payload),
        }
    }

    /// Owned variant of [`read`](Self::read) that reuses `bytes` when nothing was decompressed.
    pub fn read_vec(&self, mut bytes: Vec<u8>) -> Result<Vec<u8>> {
        let decompressed = match self.read(&bytes)? {
            Cow::Owned(raw) => Some(raw),
            Cow::Borrowed(_) => None,
        };

        match decompressed {
            Some(raw) => Ok(raw),
            None => {
                if decode_header(&bytes).is_frame() {
                    bytes.drain(..HEADER_LEN);
                }
                Ok(bytes)
            }
        }
    }

    /// Decode the payload of a frame whose header has already been parsed.
    pub fn read_frame<'a>(&self, header: &FrameHeader, payload: &'a [u8]) -> Result<Cow<'a, [u8]>> {
        if !header.is_supported_version() {
            return Err(Error::UnsupportedVersion { version: header.version });
        }

        let codec = self
            .registry
            .resolve(header.codec_id)
            .ok_or(Error::UnknownCodec { codec_id: header.codec_id })?;

        if codec.id() == CodecId::None {
            debug!(payload_len = payload.len(), "read identity frame");
            return Ok(Cow::Borrowed(payload));
        }

        // Every compressing backend emits at least a stream header.
        if payload.is_empty() {
            return Err(Error::CorruptFrame { codec: codec.name(), msg: "empty payload".into() });
        }

        let raw = codec.decompress(payload).map_err(|e| Error::CorruptFrame {
            codec: codec.name(),
            msg: e.to_string(),
        })?;

        debug!(
            codec = codec.name(),
            level = header.level,
            payload_len = payload.len(),
            raw_len = raw.len(),
            "read frame"
        );
        Ok(Cow::Owned(raw))
    }
}
