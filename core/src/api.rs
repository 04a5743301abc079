//! api.rs
//! Public entry points: `dump`, `dumps`, `load`, `loads` (+ streaming variants).
//!
//! Data flow on write: value -> serializer -> raw bytes -> Frame Writer -> sink.
//! Data flow on read: source -> bytes -> Frame Reader -> raw bytes -> serializer -> value.
//!
//! Codec policy on write:
//! - A codec named in `WriteOptions` is always honored, at the given level
//!   or the codec's default level.
//! - Otherwise the configured codec (or the registry default) is used at the
//!   configured level, except that payloads shorter than `min_size` are
//!   framed with `none`.

use std::io::{Read, Write};
use std::sync::Arc;

use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

use crate::compression::stream::read_chunked;
use crate::compression::{CodecId, CodecRegistry};
use crate::config::{validate_chunk_size, Config};
use crate::frame::{FramePlan, FrameReader, FrameWriter};
use crate::serializer::{Bincode, Serializer};
use crate::telemetry::FrameStats;
use crate::types::{Error, Result};

/// Per-call codec selection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Codec to use; `None` defers to `Config`.
    pub codec: Option<CodecId>,
    /// Level to use; `None` = the codec's default (or the configured level
    /// when the codec also comes from `Config`).
    pub level: Option<i32>,
}

impl WriteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn codec(mut self, codec: CodecId) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Select a codec by name. Names no codec knows fail with `CodecUnavailable`.
    pub fn codec_name(self, name: &str) -> Result<Self> {
        let id = name
            .parse::<CodecId>()
            .map_err(|_| Error::CodecUnavailable { name: name.to_string() })?;
        Ok(self.codec(id))
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = Some(level);
        self
    }
}

/// A serializer wrapped with transparent frame compression.
///
/// Holds no mutable state; one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct FramedSerializer<S = Bincode> {
    serializer: S,
    registry: Arc<CodecRegistry>,
    config: Config,
}

impl Default for FramedSerializer<Bincode> {
    fn default() -> Self {
        Self::new(Bincode)
    }
}

impl<S: Serializer> FramedSerializer<S> {
    /// Wrap `serializer` using the process-wide registry and default config.
    pub fn new(serializer: S) -> Self {
        Self {
            serializer,
            registry: Arc::clone(CodecRegistry::global()),
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        if let Some(id) = config.codec {
            if !self.registry.is_available(id) {
                warn!(codec = id.name(), "configured codec is not built in; default writes will fail");
            }
        }
        self.config = config;
        self
    }

    pub fn with_registry(mut self, registry: Arc<CodecRegistry>) -> Self {
        self.registry = registry;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn registry(&self) -> &CodecRegistry {
        &self.registry
    }

    pub fn serializer(&self) -> &S {
        &self.serializer
    }

    fn writer(&self) -> FrameWriter<'_> {
        FrameWriter::new(&self.registry)
    }

    fn reader(&self) -> FrameReader<'_> {
        FrameReader::new(&self.registry)
    }

    /// Apply the codec policy for a payload of `raw_len` bytes.
    fn plan(&self, raw_len: usize, opts: WriteOptions) -> Result<FramePlan<'_>> {
        let writer = self.writer();
        if let Some(id) = opts.codec {
            return writer.plan(Some(id), opts.level);
        }

        let id = self.config.default_codec(&self.registry);
        // Validate before the min-size shortcut so a bad level always surfaces.
        let plan = writer.plan(Some(id), opts.level.or(self.config.level))?;
        if raw_len < self.config.min_size && id != CodecId::None {
            debug!(raw_len, min_size = self.config.min_size, "payload below min_size, skipping compression");
            return writer.plan(Some(CodecId::None), None);
        }
        Ok(plan)
    }

    // -------------------------------------------------------------------------
    // Write path
    // -------------------------------------------------------------------------

    pub fn dumps<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        self.dumps_with(value, WriteOptions::default())
    }

    pub fn dumps_with<T: Serialize + ?Sized>(&self, value: &T, opts: WriteOptions) -> Result<Vec<u8>> {
        self.dumps_with_stats(value, opts).map(|(bytes, _)| bytes)
    }

    /// Like [`dumps_with`](Self::dumps_with), also reporting what the frame cost.
    pub fn dumps_with_stats<T: Serialize + ?Sized>(
        &self,
        value: &T,
        opts: WriteOptions,
    ) -> Result<(Vec<u8>, FrameStats)> {
        let raw = self.serializer.serialize(value)?;
        debug!(format = self.serializer.format_name(), raw_len = raw.len(), "serialized value");
        let plan = self.plan(raw.len(), opts)?;
        self.writer().write_planned(&raw, plan)
    }

    pub fn dump<T: Serialize + ?Sized, W: Write>(&self, value: &T, sink: W) -> Result<()> {
        self.dump_with(value, sink, WriteOptions::default())
    }

    /// Serialize and frame fully in memory, then write the frame to `sink` in one go.
    pub fn dump_with<T: Serialize + ?Sized, W: Write>(
        &self,
        value: &T,
        mut sink: W,
        opts: WriteOptions,
    ) -> Result<()> {
        let framed = self.dumps_with(value, opts)?;
        sink.write_all(&framed)?;
        sink.flush()?;
        Ok(())
    }

    /// Serialize, then stream the frame into `sink` in `config.chunk_size` pieces.
    pub fn dump_streaming<T: Serialize + ?Sized, W: Write>(
        &self,
        value: &T,
        mut sink: W,
        opts: WriteOptions,
    ) -> Result<FrameStats> {
        validate_chunk_size(self.config.chunk_size)?;
        let raw = self.serializer.serialize(value)?;
        debug!(format = self.serializer.format_name(), raw_len = raw.len(), "serialized value");
        let plan = self.plan(raw.len(), opts)?;
        let stats = self
            .writer()
            .write_streaming(&raw, plan, self.config.chunk_size, &mut sink)?;
        sink.flush()?;
        Ok(stats)
    }

    // -------------------------------------------------------------------------
    // Read path
    // -------------------------------------------------------------------------

    pub fn loads<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        let raw = self.reader().read(bytes)?;
        self.deserialize(&raw)
    }

    /// Read `source` to EOF, then decode. Works on non-seekable sources.
    pub fn load<T: DeserializeOwned, R: Read>(&self, mut source: R) -> Result<T> {
        let mut bytes = Vec::new();
        source.read_to_end(&mut bytes)?;
        self.load_vec(bytes)
    }

    /// Read `source` in `config.chunk_size` pieces to EOF, then decode.
    pub fn load_streaming<T: DeserializeOwned, R: Read>(&self, source: R) -> Result<T> {
        validate_chunk_size(self.config.chunk_size)?;
        let bytes = read_chunked(source, self.config.chunk_size)?;
        self.load_vec(bytes)
    }

    fn load_vec<T: DeserializeOwned>(&self, bytes: Vec<u8>) -> Result<T> {
        let raw = self.reader().read_vec(bytes)?;
        self.deserialize(&raw)
    }

    fn deserialize<T: DeserializeOwned>(&self, raw: &[u8]) -> Result<T> {
        debug!(format = self.serializer.format_name(), raw_len = raw.len(), "deserializing value");
        Ok(self.serializer.deserialize(raw)?)
    }
}

// -----------------------------------------------------------------------------
// Free functions: bincode + process-wide registry + default config
// -----------------------------------------------------------------------------

pub fn dumps<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    FramedSerializer::default().dumps(value)
}

pub fn dumps_with<T: Serialize + ?Sized>(value: &T, opts: WriteOptions) -> Result<Vec<u8>> {
    FramedSerializer::default().dumps_with(value, opts)
}

pub fn dump<T: Serialize + ?Sized, W: Write>(value: &T, sink: W) -> Result<()> {
    FramedSerializer::default().dump(value, sink)
}

pub fn dump_with<T: Serialize + ?Sized, W: Write>(value: &T, sink: W, opts: WriteOptions) -> Result<()> {
    FramedSerializer::default().dump_with(value, sink, opts)
}

pub fn dump_streaming<T: Serialize + ?Sized, W: Write>(
    value: &T,
    sink: W,
    opts: WriteOptions,
) -> Result<FrameStats> {
    FramedSerializer::default().dump_streaming(value, sink, opts)
}

pub fn loads<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    FramedSerializer::default().loads(bytes)
}

pub fn load<T: DeserializeOwned, R: Read>(source: R) -> Result<T> {
    FramedSerializer::default().load(source)
}

pub fn load_streaming<T: DeserializeOwned, R: Read>(source: R) -> Result<T> {
    FramedSerializer::default().load_streaming(source)
}
