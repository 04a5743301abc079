//! telemetry/counters.rs
//! Summary: describes one written frame (`FrameStats`) and accumulates many
//! of them (`FrameCounters`).
use std::collections::BTreeMap;
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::compression::CodecId;

/// What one write produced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameStats {
    pub codec: CodecId,
    pub level: u8,
    /// Serialized bytes before compression.
    pub raw_len: u64,
    /// Payload bytes after compression.
    pub payload_len: u64,
    pub header_len: u64,
}

impl FrameStats {
    pub fn framed_len(&self) -> u64 {
        self.header_len + self.payload_len
    }

    /// `payload_len / raw_len`; 0.0 for an empty input.
    pub fn compression_ratio(&self) -> f64 {
        if self.raw_len == 0 {
            0.0
        } else {
            self.payload_len as f64 / self.raw_len as f64
        }
    }

    /// Bytes saved by framing + compression; negative when the frame grew.
    pub fn saved_bytes(&self) -> i64 {
        self.raw_len as i64 - self.framed_len() as i64
    }
}

/// Deterministic counters across many frames.
#[derive(Default, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameCounters {
    pub frames: u64,
    pub bytes_raw: u64,
    pub bytes_payload: u64,
    pub bytes_overhead: u64,
    pub frames_by_codec: BTreeMap<CodecId, u64>,
}

impl FrameCounters {
    pub fn record(&mut self, stats: &FrameStats) {
        self.frames += 1;
        self.bytes_raw += stats.raw_len;
        self.bytes_payload += stats.payload_len;
        self.bytes_overhead += stats.header_len;
        *self.frames_by_codec.entry(stats.codec).or_insert(0) += 1;
    }

    pub fn merge(&mut self, other: &FrameCounters) {
        self.frames += other.frames;
        self.bytes_raw += other.bytes_raw;
        self.bytes_payload += other.bytes_payload;
        self.bytes_overhead += other.bytes_overhead;
        for (codec, n) in &other.frames_by_codec {
            *self.frames_by_codec.entry(*codec).or_insert(0) += n;
        }
    }

    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_raw == 0 {
            0.0
        } else {
            self.bytes_payload as f64 / self.bytes_raw as f64
        }
    }

    pub fn output_bytes(&self) -> u64 {
        self.bytes_payload + self.bytes_overhead
    }
}

impl AddAssign for FrameCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
