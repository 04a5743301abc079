//! compression/codecs/mod.rs
//! One file per backend. Each backend except `none` sits behind a cargo
//! feature of the same name (`zlib` for flate2, `lzma` for xz2).

pub mod none;
#[cfg(feature = "zstd")]
pub mod zstd;
#[cfg(feature = "brotli")]
pub mod brotli;
#[cfg(feature = "zlib")]
pub mod zlib;
#[cfg(feature = "lzma")]
pub mod lzma;
#[cfg(feature = "lz4")]
pub mod lz4;

use crate::compression::types::{Codec, CodecId};

/// Availability probe + constructor for one candidate backend.
///
/// Returns `None` when the backend was not compiled in.
pub fn backend(id: CodecId) -> Option<Box<dyn Codec>> {
    match id {
        CodecId::None => Some(Box::new(none::NoneCodec)),
        #[cfg(feature = "zstd")]
        CodecId::Zstd => Some(Box::new(zstd::ZstdCodec)),
        #[cfg(feature = "brotli")]
        CodecId::Brotli => Some(Box::new(brotli::BrotliCodec)),
        #[cfg(feature = "zlib")]
        CodecId::Zlib => Some(Box::new(zlib::ZlibCodec)),
        #[cfg(feature = "lzma")]
        CodecId::Lzma => Some(Box::new(lzma::LzmaCodec)),
        #[cfg(feature = "lz4")]
        CodecId::Lz4 => Some(Box::new(lz4::Lz4Codec)),
        #[allow(unreachable_patterns)]
        _ => None,
    }
}
