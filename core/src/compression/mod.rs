//! compression/mod.rs
//! Codec registry and compression backends.
//!
//! Notes:
//! - Codec ids are wire-stable; see `constants::codec_ids`.
//! - Backends are stateless; per-frame state lives in a `Compressor`.
//! - Registry resolves codec ids and names to implementations.

pub mod constants;
pub mod types;
pub mod registry;
pub mod codecs;
pub mod stream;

pub use constants::*;
pub use types::*;
pub use registry::*;
