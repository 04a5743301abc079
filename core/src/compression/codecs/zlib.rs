//! codecs/zlib.rs
//! zlib (deflate + adler32 trailer) via flate2.
//!
//! flate2's `read::ZlibDecoder` reports a clean EOF when the stream stops
//! early, so decoding drives `Decompress` directly and demands `StreamEnd`.
use std::io::Write;

use flate2::{write::ZlibEncoder, Compression, Decompress, FlushDecompress, Status};

use crate::compression::constants::DEFAULT_LEVEL_ZLIB;
use crate::compression::types::{Codec, CodecId, CompressionError, Compressor, LevelRange};

const CODEC: &str = "zlib";

pub struct ZlibCodec;

struct ZlibCompressor<'a> {
    encoder: ZlibEncoder<&'a mut dyn Write>,
}

impl Compressor for ZlibCompressor<'_> {
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

impl Codec for ZlibCodec {
    fn id(&self) -> CodecId {
        CodecId::Zlib
    }

    fn levels(&self) -> LevelRange {
        LevelRange::new(0, 9, DEFAULT_LEVEL_ZLIB)
    }

    fn compressor<'a>(
        &self,
        sink: &'a mut dyn Write,
        level: u8,
    ) -> Result<Box<dyn Compressor + 'a>, CompressionError> {
        let encoder = ZlibEncoder::new(sink, Compression::new(u32::from(level)));
        Ok(Box::new(ZlibCompressor { encoder }))
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut inflater = Decompress::new(true);
        let mut out = Vec::with_capacity(input.len().saturating_mul(4).max(256));

        loop {
            let in_before = inflater.total_in();
            let out_before = inflater.total_out();
            // total_in never exceeds input.len()
            let consumed = in_before as usize;

            let status = inflater
                .decompress_vec(&input[consumed..], &mut out, FlushDecompress::None)
                .map_err(|e| CompressionError::process(CODEC, e))?;

            match status {
                Status::StreamEnd => return Ok(out),
                Status::Ok | Status::BufError => {
                    if out.len() == out.capacity() {
                        out.reserve(out.capacity().max(4096));
                        continue;
                    }
                    let progressed =
                        inflater.total_in() != in_before || inflater.total_out() != out_before;
                    if !progressed {
                        return Err(CompressionError::Truncated { codec: CODEC });
                    }
                }
            }
        }
    }
}
