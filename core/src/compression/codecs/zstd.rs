//! src/compression/codecs/zstd.rs
//!
//! Zstd backend.
//!
//! Design notes:
//! - Streaming encoder writes straight into the frame sink, so one-shot and
//!   chunked writes produce the same bytes.
//! - The zstd frame checksum is enabled; a damaged payload fails instead of
//!   decoding to garbage.
//! - Decoding goes through the streaming reader, which reports an
//!   incomplete frame when the payload is cut short.
use std::io::Write;

use crate::compression::constants::DEFAULT_LEVEL_ZSTD;
use crate::compression::types::{Codec, CodecId, CompressionError, Compressor, LevelRange};

const CODEC: &str = "zstd";

pub struct ZstdCodec;

struct ZstdCompressor<'a> {
    encoder: zstd::stream::write::Encoder<'static, &'a mut dyn Write>,
}

impl Compressor for ZstdCompressor<'_> {
    fn compress_chunk(&mut self, input: &[u8]) -> Result<(), CompressionError> {
        self.encoder
            .write_all(input)
            .map_err(|e| CompressionError::process(CODEC, e))
    }

    fn finish(self: Box<Self>) -> Result<(), CompressionError> {
        let this = *self;
        let sink = this
            .encoder
            .finish()
            .map_err(|e| CompressionError::process(CODEC, e))?;
        sink.flush().map_err(|e| CompressionError::process(CODEC, e))
    }
}

impl Codec for ZstdCodec {
    fn id(&self) -> CodecId {
        CodecId::Zstd
    }

    fn levels(&self) -> LevelRange {
        LevelRange::new(1, 22, DEFAULT_LEVEL_ZSTD)
    }

    fn compressor<'a>(
        &self,
        sink: &'a mut dyn Write,
        level: u8,
    ) -> Result<Box<dyn Compressor + 'a>, CompressionError> {
        let mut encoder = zstd::stream::write::Encoder::new(sink, i32::from(level))
            .map_err(|e| CompressionError::init(CODEC, e))?;
        encoder
            .include_checksum(true)
            .map_err(|e| CompressionError::init(CODEC, e))?;
        Ok(Box::new(ZstdCompressor { encoder }))
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        zstd::stream::decode_all(input).map_err(|e| CompressionError::process(CODEC, e))
    }
}
