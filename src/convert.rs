//! The per-album conversion pipeline.
//!
//! Decode the image to WAV, split it into tracks along the cue sheet, tag
//! the tracks, clean up the intermediate, archive the original. Each step
//! requires the previous one to have succeeded; failures stay contained to
//! the one album.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;

use tokio::process::Command;

use crate::archive;
use crate::config::{Config, Tools};
use crate::discovery::{self, WorkItem};
use crate::tracks;

/// Outcome of one album's run through the pipeline.
#[derive(Debug, Clone)]
pub struct ItemOutcome {
    /// The original image the item was built from.
    pub image_path: PathBuf,
    /// Whether the pipeline ran to completion.
    pub success: bool,
    /// Error message if it did not.
    pub error: Option<String>,
}

/// Map a child-process exit into a step result, keeping the last stderr
/// line as the error detail.
pub(crate) fn check_exit(program: &Path, output: &Output) -> Result<(), String> {
    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(format!(
            "{} exited with status {}: {}",
            program.display(),
            output.status,
            stderr.lines().last().unwrap_or("unknown error")
        ))
    }
}

/// Run one work item through the full pipeline.
///
/// This is the error boundary for the item: whatever goes wrong inside is
/// logged and carried in the returned outcome, never propagated to sibling
/// items.
pub async fn convert_item(item: &WorkItem, config: &Config, tools: &Tools) -> ItemOutcome {
    log::info!(
        "Processing {} with {}",
        item.image_path.display(),
        item.cue_path.display()
    );

    match run_pipeline(item, config, tools).await {
        Ok(()) => {
            log::info!("Complete: {}", item.image_path.display());
            ItemOutcome {
                image_path: item.image_path.clone(),
                success: true,
                error: None,
            }
        }
        Err(e) => {
            log::error!("Failed to process {}: {}", item.image_path.display(), e);
            ItemOutcome {
                image_path: item.image_path.clone(),
                success: false,
                error: Some(e),
            }
        }
    }
}

async fn run_pipeline(item: &WorkItem, config: &Config, tools: &Tools) -> Result<(), String> {
    let album_dir = item
        .image_path
        .parent()
        .ok_or_else(|| format!("No parent directory for {}", item.image_path.display()))?;
    let wav_path = item.image_path.with_extension("wav");

    // A .flac image was already decoded (or previously converted); it feeds
    // the splitter directly.
    let split_input = if discovery::has_extension(&item.image_path, "ape") {
        decode_image(&item.image_path, &wav_path, tools).await?;
        wav_path.clone()
    } else {
        log::info!(
            "Skipping decode for {}: already FLAC",
            item.image_path.display()
        );
        item.image_path.clone()
    };

    split_image(&item.cue_path, &split_input, album_dir, tools).await?;

    // An empty tag set ends the item here; intermediate and image stay put.
    if tracks::tag_tracks(&item.cue_path, album_dir, config, tools).await? == 0 {
        return Ok(());
    }

    if wav_path.exists() {
        fs::remove_file(&wav_path)
            .map_err(|e| format!("Failed to remove {}: {}", wav_path.display(), e))?;
    }

    if config.archive_original {
        // The tracks are already on disk at this point; a failed archive
        // leaves the image in place and does not fail the item.
        if let Err(e) = archive::archive_image(&item.image_path) {
            log::error!("Failed to archive {}: {}", item.image_path.display(), e);
        }
    }

    Ok(())
}

/// Decode a lossless-compressed image to WAV.
async fn decode_image(image: &Path, wav: &Path, tools: &Tools) -> Result<(), String> {
    let output = Command::new(&tools.mac)
        .arg(image)
        .arg(wav)
        .arg("-d")
        .output()
        .await
        .map_err(|e| format!("Failed to spawn {}: {}", tools.mac.display(), e))?;
    check_exit(&tools.mac, &output)
}

/// Split the decoded image into per-track FLACs named `NN - Title.flac`.
///
/// Runs in the album directory so the splitter drops its output next to
/// the source.
async fn split_image(
    cue: &Path,
    input: &Path,
    album_dir: &Path,
    tools: &Tools,
) -> Result<(), String> {
    let output = Command::new(&tools.shntool)
        .arg("split")
        .arg("-f")
        .arg(cue)
        .arg("-t")
        .arg("%n - %t")
        .arg("-o")
        .arg("flac")
        .arg(input)
        .current_dir(album_dir)
        .output()
        .await
        .map_err(|e| format!("Failed to spawn {}: {}", tools.shntool.display(), e))?;
    check_exit(&tools.shntool, &output)
}
