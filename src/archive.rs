//! Archiving of original album images.
//!
//! After a successful split the lossless image is redundant; it gets packed
//! into a sibling `.tar.gz` and removed. The original is only deleted once
//! the archive has been fully written.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;

/// Compress `image` into `<base>.tar.gz` beside it and delete the original.
///
/// Returns the archive path on success. On any failure the original image
/// is left untouched.
pub fn archive_image(image: &Path) -> Result<PathBuf, String> {
    let archive_path = image.with_extension("tar.gz");
    let entry_name = image
        .file_name()
        .ok_or_else(|| format!("No file name in {}", image.display()))?
        .to_os_string();

    let file = File::create(&archive_path)
        .map_err(|e| format!("Failed to create {}: {}", archive_path.display(), e))?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    builder
        .append_path_with_name(image, &entry_name)
        .map_err(|e| format!("Failed to add {} to archive: {}", image.display(), e))?;
    builder
        .into_inner()
        .and_then(|encoder| encoder.finish())
        .map_err(|e| format!("Failed to finish {}: {}", archive_path.display(), e))?;

    fs::remove_file(image)
        .map_err(|e| format!("Failed to remove {}: {}", image.display(), e))?;

    log::info!(
        "Compressed and removed original image: {}",
        archive_path.display()
    );
    Ok(archive_path)
}
