//! zserde-core
//!
//! Transparent compression framing for serializer output.
//! Frames carry a small header naming the codec; bytes without one are
//! read back as plain serializer output.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;
pub mod config;

// Building blocks
pub mod compression;
pub mod headers;
pub mod serializer;
pub mod telemetry;

// Frame layers
pub mod frame;
pub mod api;

pub use api::{
    dump, dump_streaming, dump_with, dumps, dumps_with, load, load_streaming, loads,
    FramedSerializer, WriteOptions,
};
pub use types::{Error, ErrorKind, Result};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::api::{FramedSerializer, WriteOptions};
    pub use crate::compression::{CodecId, CodecRegistry};
    pub use crate::config::Config;
    pub use crate::frame::{FrameReader, FrameWriter};
    pub use crate::serializer::{Bincode, Json, Serializer};
    pub use crate::telemetry::{FrameCounters, FrameStats};
    pub use crate::types::{Error, ErrorKind, Result};
}
