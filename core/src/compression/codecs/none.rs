//! codecs/none.rs
//! Identity codec: the payload is the serialized bytes, untouched.

use std::io::Write;

use crate::compression::types::{Codec, CodecId, CompressionError, Compressor, LevelRange};

pub struct NoneCodec;

struct Passthrough<'a> {
    sink: &'a mut dyn Write,
}

impl Compressor for Passthrough<'_> {
    fn compress_chunk(&mut self, input: &[u8]) -> Result<(), CompressionError> {
        Ok(self.sink.write_all(input)?)
    }

    fn finish(self: Box<Self>) -> Result<(), CompressionError> {
        Ok(self.sink.flush()?)
    }
}

impl Codec for NoneCodec {
    fn id(&self) -> CodecId {
        CodecId::None
    }

    fn levels(&self) -> LevelRange {
        LevelRange::FIXED
    }

    fn compressor<'a>(
        &self,
        sink: &'a mut dyn Write,
        _level: u8,
    ) -> Result<Box<dyn Compressor + 'a>, CompressionError> {
        Ok(Box::new(Passthrough { sink }))
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        Ok(input.to_vec())
    }
}
