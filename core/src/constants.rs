//! constants.rs
//! Frozen wire constants for the frame header and write-path defaults.
//!
//! Anything in the "wire" block below is part of the persisted format.
//! Changing it orphans every frame already written.

// -----------------------------------------------------------------------------
// Wire format (frozen)
// -----------------------------------------------------------------------------

/// Magic sequence opening every frame.
///
/// Neither stock serializer can start an artifact with these bytes in
/// practice: JSON text never begins with `Z`, and a bincode artifact would
/// need its first four fields to spell out `ZSRD` followed by a valid
/// version byte.
pub const MAGIC: [u8; 4] = *b"ZSRD";

/// Header layout version written by this build.
pub const FORMAT_VERSION: u8 = 1;

/// Header versions this build knows how to read.
pub const SUPPORTED_VERSIONS: &[u8] = &[FORMAT_VERSION];

/// Total header length: magic + version + codec_id + level.
pub const HEADER_LEN: usize = MAGIC.len() + 3;

/// Byte offsets inside the header.
pub mod offsets {
    pub const VERSION: usize = 4;
    pub const CODEC_ID: usize = 5;
    pub const LEVEL: usize = 6;
    pub const PAYLOAD: usize = 7;
}

// -----------------------------------------------------------------------------
// Write-path defaults
// -----------------------------------------------------------------------------

/// Payloads shorter than this skip compression when the caller did not name a codec.
pub const DEFAULT_MIN_SIZE: usize = 64;

/// Chunk size used by the streaming writer and reader (64 KiB).
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Max chunk size sanity bound (32 MiB).
pub const MAX_CHUNK_SIZE: usize = 32 * 1024 * 1024;
