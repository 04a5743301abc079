/// Stable codec IDs (u8) for headers and wire format.
pub mod codec_ids {
    pub const NONE: u8   = 0x00;
    pub const ZSTD: u8   = 0x01;
    pub const BROTLI: u8 = 0x02;
    pub const ZLIB: u8   = 0x03;
    pub const LZMA: u8   = 0x04;
    pub const LZ4: u8    = 0x05;
}

/// Default compression levels (balanced).
pub const DEFAULT_LEVEL_ZSTD: u8 = 3;
pub const DEFAULT_LEVEL_BROTLI: u8 = 6;
pub const DEFAULT_LEVEL_ZLIB: u8 = 6;
pub const DEFAULT_LEVEL_LZMA: u8 = 6;
pub const DEFAULT_LEVEL_LZ4: u8 = 0; // no levels in lz4_flex

/// Preference order when no default codec is configured.
pub const DEFAULT_PREFERENCE: &[u8] = &[
    codec_ids::ZSTD,
    codec_ids::BROTLI,
    codec_ids::ZLIB,
    codec_ids::LZMA,
    codec_ids::LZ4,
];
