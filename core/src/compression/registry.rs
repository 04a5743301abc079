//! compression/registry.rs
//! Codec registry: codec id / name -> backend.
//!
//! Design notes:
//! - Populated once from the static candidate list in `codecs::backend`;
//!   a backend that was not compiled in is simply absent.
//! - Read-only after construction, so the process-wide instance is shared
//!   across threads without locking.
//! - `none` is always registered; it is the floor for `default_codec()`.

use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::trace;

use crate::compression::codecs::{backend, none::NoneCodec};
use crate::compression::constants::DEFAULT_PREFERENCE;
use crate::compression::types::{Codec, CodecId};

pub struct CodecRegistry {
    /// Sorted by id, no duplicates.
    codecs: Vec<Box<dyn Codec>>,
    default_id: CodecId,
}

static GLOBAL: OnceLock<Arc<CodecRegistry>> = OnceLock::new();

impl CodecRegistry {
    /// Registry holding every backend compiled into this build.
    pub fn with_available_backends() -> Self {
        let codecs = CodecId::ALL
            .into_iter()
            .filter_map(|id| {
                let found = backend(id);
                trace!(codec = id.name(), available = found.is_some(), "probing codec backend");
                found
            })
            .collect();
        Self::from_codecs(codecs)
    }

    /// Registry over an explicit backend set. Later duplicates of an id are dropped.
    pub fn from_codecs(mut codecs: Vec<Box<dyn Codec>>) -> Self {
        codecs.sort_by_key(|c| c.id());
        codecs.dedup_by_key(|c| c.id());
        if codecs.first().map(|c| c.id()) != Some(CodecId::None) {
            codecs.insert(0, Box::new(NoneCodec));
        }

        let default_id = DEFAULT_PREFERENCE
            .iter()
            .filter_map(|raw| CodecId::try_from(*raw).ok())
            .find(|id| codecs.iter().any(|c| c.id() == *id))
            .unwrap_or(CodecId::None);

        Self { codecs, default_id }
    }

    /// The process-wide registry, built on first use.
    pub fn global() -> &'static Arc<CodecRegistry> {
        GLOBAL.get_or_init(|| Arc::new(CodecRegistry::with_available_backends()))
    }

    /// Look up a raw header byte.
    pub fn resolve(&self, codec_id: u8) -> Option<&dyn Codec> {
        self.codecs
            .iter()
            .find(|c| c.id() as u8 == codec_id)
            .map(|c| c.as_ref())
    }

    pub fn resolve_id(&self, id: CodecId) -> Option<&dyn Codec> {
        self.resolve(id as u8)
    }

    /// Case-insensitive lookup by codec name.
    pub fn resolve_by_name(&self, name: &str) -> Option<&dyn Codec> {
        let id: CodecId = name.parse().ok()?;
        self.resolve_id(id)
    }

    /// Best general-purpose size/speed tradeoff among the registered backends:
    /// the first available of zstd, brotli, zlib, lzma, lz4, else `none`.
    pub fn default_codec(&self) -> &dyn Codec {
        self.resolve_id(self.default_id)
            .unwrap_or(&NoneCodec)
    }

    /// Registered codecs in id order.
    pub fn list_available(&self) -> impl Iterator<Item = &dyn Codec> + '_ {
        self.codecs.iter().map(|c| c.as_ref())
    }

    pub fn is_available(&self, id: CodecId) -> bool {
        self.resolve_id(id).is_some()
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::with_available_backends()
    }
}

impl fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("codecs", &self.list_available().map(|c| c.name()).collect::<Vec<_>>())
            .field("default", &self.default_id)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Free functions over the global registry
// -----------------------------------------------------------------------------

pub fn resolve(codec_id: u8) -> Option<&'static dyn Codec> {
    CodecRegistry::global().resolve(codec_id)
}

pub fn resolve_by_name(name: &str) -> Option<&'static dyn Codec> {
    CodecRegistry::global().resolve_by_name(name)
}

pub fn default_codec() -> &'static dyn Codec {
    CodecRegistry::global().default_codec()
}

pub fn list_available() -> Vec<&'static dyn Codec> {
    CodecRegistry::global().list_available().collect()
}
