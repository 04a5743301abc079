//! codecs/lzma.rs
//! LZMA2 in the xz container (xz2). The container's CRC64 check catches
//! damaged payloads; the reader reports a premature EOF on truncation.
use std::io::{Read, Write};

use xz2::{read::XzDecoder, write::XzEncoder};

use crate::compression::constants::DEFAULT_LEVEL_LZMA;
use crate::compression::types::{Codec, CodecId, CompressionError, Compressor, LevelRange};

const CODEC: &str = "lzma";

pub struct LzmaCodec;

struct LzmaCompressor<'a> {
    encoder: XzEncoder<&'a mut dyn Write>,
}

impl Compressor for LzmaCompressor<'_> {
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

impl Codec for LzmaCodec {
    fn id(&self) -> CodecId {
        CodecId::Lzma
    }

    fn levels(&self) -> LevelRange {
        LevelRange::new(0, 9, DEFAULT_LEVEL_LZMA)
    }

    fn compressor<'a>(
        &self,
        sink: &'a mut dyn Write,
        level: u8,
    ) -> Result<Box<dyn Compressor + 'a>, CompressionError> {
        let encoder = XzEncoder::new(sink, u32::from(level));
        Ok(Box::new(LzmaCompressor { encoder }))
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut out = Vec::with_capacity(input.len() * 3);
        XzDecoder::new(input)
            .read_to_end(&mut out)
            .map_err(|e| CompressionError::process(CODEC, e))?;
        Ok(out)
    }
}
