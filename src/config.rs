//! Runtime configuration for the conversion pipeline.

use std::path::PathBuf;

/// Behavior switches, built once in `main` and passed into the pipeline.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    /// Leave tracks alone when they already carry a tag block.
    pub skip_tagged: bool,
    /// Compress the original image to a `.tar.gz` and delete it afterwards.
    pub archive_original: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skip_tagged: true,
            archive_original: true,
        }
    }
}

/// The external programs the pipeline invokes.
///
/// Defaults are bare command names resolved through `PATH`; tests swap in
/// stub scripts.
#[derive(Debug, Clone)]
pub struct Tools {
    /// Monkey's Audio decoder.
    pub mac: PathBuf,
    /// Cue-based splitter.
    pub shntool: PathBuf,
    /// Writes tags from the cue sheet onto the split tracks.
    pub cuetag: PathBuf,
}

impl Default for Tools {
    fn default() -> Self {
        Self {
            mac: PathBuf::from("mac"),
            shntool: PathBuf::from("shntool"),
            cuetag: PathBuf::from("cuetag"),
        }
    }
}
