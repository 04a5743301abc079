//! compression/stream.rs
//! Chunked helpers that respect chunk_size discipline.
use std::io::{self, Read, Write};

use crate::compression::types::{Codec, CompressionError};
use crate::constants::MAX_CHUNK_SIZE;

/// Compress everything readable from `r` into `sink`, feeding the codec
/// `chunk_size` bytes at a time. Returns the number of input bytes consumed.
///
/// The output is a single codec stream, byte-compatible with `Codec::compress`.
pub fn compress_chunked<R: Read>(
    codec: &dyn Codec,
    level: u8,
    mut r: R,
    chunk_size: usize,
    sink: &mut dyn Write,
) -> Result<u64, CompressionError> {
    debug_assert!(chunk_size > 0 && chunk_size <= MAX_CHUNK_SIZE);
    let mut compressor = codec.compressor(sink, level)?;
    let mut buf = vec![0u8; chunk_size];
    let mut total = 0u64;

    loop {
        let n = match r.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CompressionError::Io(e)),
        };
        compressor.compress_chunk(&buf[..n])?;
        total += n as u64;
    }

    compressor.finish()?;
    Ok(total)
}

/// Drain `r` into memory using `chunk_size` reads. Works on non-seekable sources.
pub fn read_chunked<R: Read>(mut r: R, chunk_size: usize) -> io::Result<Vec<u8>> {
    debug_assert!(chunk_size > 0 && chunk_size <= MAX_CHUNK_SIZE);
    let mut out = Vec::new();
    let mut buf = vec![0u8; chunk_size];

    loop {
        match r.read(&mut buf) {
            Ok(0) => return Ok(out),
            Ok(n) => out.extend_from_slice(&buf[..n]),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
