//! telemetry/mod.rs
//! Per-frame byte statistics.
//!
//! Notes:
//! - Compression ratio: `payload_len / raw_len`, the usual storage metric.
//! - Counters are plain values owned by the caller; merging is explicit,
//!   so there are no locks or atomics anywhere in the write path.

pub mod counters;

pub use counters::*;
