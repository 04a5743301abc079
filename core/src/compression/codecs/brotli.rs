//! codecs/brotli.rs
//! Brotli backend. Quality maps 1:1 onto the level byte (0..=11).
use std::io::Write;

use crate::compression::constants::DEFAULT_LEVEL_BROTLI;
use crate::compression::types::{Codec, CodecId, CompressionError, Compressor, LevelRange};

const CODEC: &str = "brotli";
const BUFFER_SIZE: usize = 4096;
const LG_WINDOW: u32 = 22;

pub struct BrotliCodec;

struct BrotliCompressor<'a> {
    writer: brotli::CompressorWriter<&'a mut dyn Write>,
}

impl Compressor for BrotliCompressor<'_> {
    fn compress_chunk(&mut self, input: &[u8]) -> Result<(), CompressionError> {
        self.writer
            .write_all(input)
            .map_err(|e| CompressionError::process(CODEC, e))
    }

    fn finish(self: Box<Self>) -> Result<(), CompressionError> {
        let mut this = *self;
        // into_inner() writes the final meta-block but swallows errors, so
        // surface anything pending through flush() first.
        this.writer
            .flush()
            .map_err(|e| CompressionError::process(CODEC, e))?;
        let sink = this.writer.into_inner();
        sink.flush().map_err(|e| CompressionError::process(CODEC, e))
    }
}

impl Codec for BrotliCodec {
    fn id(&self) -> CodecId {
        CodecId::Brotli
    }

    fn levels(&self) -> LevelRange {
        LevelRange::new(0, 11, DEFAULT_LEVEL_BROTLI)
    }

    fn compressor<'a>(
        &self,
        sink: &'a mut dyn Write,
        level: u8,
    ) -> Result<Box<dyn Compressor + 'a>, CompressionError> {
        let writer = brotli::CompressorWriter::new(sink, BUFFER_SIZE, u32::from(level), LG_WINDOW);
        Ok(Box::new(BrotliCompressor { writer }))
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut reader = input;
        let mut out = Vec::with_capacity(input.len() * 3);
        brotli::BrotliDecompress(&mut reader, &mut out)
            .map_err(|e| CompressionError::process(CODEC, e))?;
        Ok(out)
    }
}
