//! headers/mod.rs
//! Frame header: encoding, decoding and framed/legacy detection.
//!
//! Notes:
//! - Fixed-size header (7 bytes) so the payload offset never depends on parsing.
//! - Magic sequence is the sole framed/legacy discriminator.
//! - Bump `FORMAT_VERSION` when the layout changes; readers reject versions
//!   they don't know with `UnsupportedVersion`.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
