//! frame/mod.rs
//! Frame Writer and Frame Reader over a codec registry.

mod counting;
pub mod reader;
pub mod writer;

pub use reader::FrameReader;
pub use writer::{FramePlan, FrameWriter};
