//! codecs/lz4.rs
//! LZ4 frame format via lz4_flex, content checksum enabled.
//! lz4_flex exposes no compression levels, so the only accepted level is 0.
use std::io::{Read, Write};

use lz4_flex::frame::{FrameDecoder, FrameEncoder, FrameInfo};

use crate::compression::constants::DEFAULT_LEVEL_LZ4;
use crate::compression::types::{Codec, CodecId, CompressionError, Compressor, LevelRange};

const CODEC: &str = "lz4";

pub struct Lz4Codec;

struct Lz4Compressor<'a> {
    encoder: FrameEncoder<&'a mut dyn Write>,
}

impl Compressor for Lz4Compressor<'_> {
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

impl Codec for Lz4Codec {
    fn id(&self) -> CodecId {
        CodecId::Lz4
    }

    fn levels(&self) -> LevelRange {
        LevelRange::new(0, 0, DEFAULT_LEVEL_LZ4)
    }

    fn compressor<'a>(
        &self,
        sink: &'a mut dyn Write,
        _level: u8,
    ) -> Result<Box<dyn Compressor + 'a>, CompressionError> {
        let info = FrameInfo::new().content_checksum(true);
        let encoder = FrameEncoder::with_frame_info(info, sink);
        Ok(Box::new(Lz4Compressor { encoder }))
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut out = Vec::with_capacity(input.len() * 3);
        FrameDecoder::new(input)
            .read_to_end(&mut out)
            .map_err(|e| CompressionError::process(CODEC, e))?;
        Ok(out)
    }
}
