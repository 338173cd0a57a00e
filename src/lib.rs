//! Batch conversion of cue-sheet albums into tagged per-track FLACs.
//!
//! An album arrives as a single lossless image (`.ape`, or `.flac` when it
//! was already decoded) next to a `.cue` sheet. The pipeline shells out to
//! `mac` for decoding, `shntool` for splitting, and `cuetag` for tagging,
//! then archives the original image.

pub mod archive;
pub mod batch;
pub mod config;
pub mod convert;
pub mod discovery;
pub mod logging;
pub mod tracks;

#[cfg(test)]
mod test_fixtures;
