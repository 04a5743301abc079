//! frame/writer.rs
//!
//! Frame Writer: raw serialized bytes -> header + compressed payload.
//!
//! Design notes:
//! - Codec and level are resolved and validated before any byte is produced.
//! - `write` builds the whole frame in memory; on error nothing is returned.
//! - `write_streaming` pushes the header and then the codec stream into a
//!   sink chunk by chunk. A failure mid-way leaves a partial frame in the
//!   sink, which is the caller's to discard. Sink failures are `Error::Io`
//!   wherever in the frame they happen.
//! - An explicit `none` still produces a frame (codec_id 0), never a bare
//!   legacy artifact.

use std::io::Write;

use tracing::debug;

use crate::compression::stream::compress_chunked;
use crate::compression::{Codec, CodecId, CodecRegistry};
use crate::config::validate_chunk_size;
use crate::constants::{FORMAT_VERSION, HEADER_LEN};
use crate::frame::counting::PayloadSink;
use crate::headers::encode_header;
use crate::telemetry::FrameStats;
use crate::types::{Error, Result};

/// A resolved codec plus a validated level.
#[derive(Copy, Clone)]
pub struct FramePlan<'r> {
    pub codec: &'r dyn Codec,
    pub level: u8,
}

impl FramePlan<'_> {
    pub fn header(&self) -> [u8; HEADER_LEN] {
        encode_header(self.codec.id() as u8, FORMAT_VERSION, self.level)
    }

    fn stats(&self, raw_len: usize, payload_len: u64) -> FrameStats {
        FrameStats {
            codec: self.codec.id(),
            level: self.level,
            raw_len: raw_len as u64,
            payload_len,
            header_len: HEADER_LEN as u64,
        }
    }
}

impl std::fmt::Debug for FramePlan<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FramePlan")
            .field("codec", &self.codec.id())
            .field("level", &self.level)
            .finish()
    }
}

#[derive(Copy, Clone, Debug)]
pub struct FrameWriter<'r> {
    registry: &'r CodecRegistry,
}

impl FrameWriter<'static> {
    /// Writer over the process-wide registry.
    pub fn global() -> Self {
        Self::new(CodecRegistry::global())
    }
}

impl<'r> FrameWriter<'r> {
    pub fn new(registry: &'r CodecRegistry) -> Self {
        Self { registry }
    }

    /// Resolve `codec` (registry default when `None`) and check `level`
    /// (codec default when `None`) against the codec's range.
    pub fn plan(&self, codec: Option<CodecId>, level: Option<i32>) -> Result<FramePlan<'r>> {
        let registry: &'r CodecRegistry = self.registry;
        let codec = match codec {
            Some(id) => registry
                .resolve_id(id)
                .ok_or_else(|| Error::CodecUnavailable { name: id.name().to_string() })?,
            None => registry.default_codec(),
        };

        let range = codec.levels();
        let level = match level {
            None => range.default,
            Some(requested) => range.check(requested).ok_or(Error::InvalidLevel {
                codec: codec.name(),
                level: requested,
                min: range.min,
                max: range.max,
            })?,
        };

        Ok(FramePlan { codec, level })
    }

    /// Frame `raw` with the given selection.
    pub fn write(&self, raw: &[u8], codec: Option<CodecId>, level: Option<i32>) -> Result<Vec<u8>> {
        let plan = self.plan(codec, level)?;
        self.write_planned(raw, plan).map(|(bytes, _)| bytes)
    }

    /// Frame `raw` with an already validated plan, reporting byte statistics.
    pub fn write_planned(&self, raw: &[u8], plan: FramePlan<'_>) -> Result<(Vec<u8>, FrameStats)> {
        let capacity = match plan.codec.id() {
            CodecId::None => HEADER_LEN + raw.len(),
            _ => HEADER_LEN + raw.len() / 2 + 64,
        };
        let mut out = Vec::with_capacity(capacity);
        out.extend_from_slice(&plan.header());

        let mut compressor = plan.codec.compressor(&mut out, plan.level)?;
        compressor.compress_chunk(raw)?;
        compressor.finish()?;

        let stats = plan.stats(raw.len(), (out.len() - HEADER_LEN) as u64);
        debug!(
            codec = plan.codec.name(),
            level = plan.level,
            raw_len = stats.raw_len,
            framed_len = stats.framed_len(),
            ratio = stats.compression_ratio(),
            "wrote frame"
        );
        Ok((out, stats))
    }

    /// Stream a frame for `raw` into `sink`, compressing `chunk_size` bytes at a time.
    pub fn write_streaming(
        &self,
        raw: &[u8],
        plan: FramePlan<'_>,
        chunk_size: usize,
        sink: &mut dyn Write,
    ) -> Result<FrameStats> {
        validate_chunk_size(chunk_size)?;
        sink.write_all(&plan.header())?;

        let mut payload = PayloadSink::new(sink);
        let compressed = compress_chunked(plan.codec, plan.level, raw, chunk_size, &mut payload);
        // A failing sink is an I/O error however the codec reported it, or whether it did.
        if let Some(e) = payload.take_failure() {
            return Err(Error::Io(e));
        }
        compressed?;

        let stats = plan.stats(raw.len(), payload.written());
        debug!(
            codec = plan.codec.name(),
            level = plan.level,
            chunk_size,
            raw_len = stats.raw_len,
            framed_len = stats.framed_len(),
            "streamed frame"
        );
        Ok(stats)
    }
}
