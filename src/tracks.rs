//! Locating, filtering, and tagging split track files.
//!
//! The splitter names tracks with a two-digit index prefix, so a plain
//! lexicographic sort restores track order. Pregap spill-over files are
//! deleted on sight; they are not tracks.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use lofty::{Probe, TagExt, TaggedFileExt};
use regex::Regex;
use tokio::process::Command;

use crate::config::{Config, Tools};
use crate::convert::check_exit;
use crate::discovery;

static TRACK_FILE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2} - .*\.(?i:flac)$").unwrap());

/// Check whether a file name looks like a split track (`NN - Title.flac`).
pub fn is_track_file(name: &str) -> bool {
    TRACK_FILE_RE.is_match(name)
}

/// Pregap spill-over from the splitter.
pub fn is_pregap_file(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase().ends_with("pregap.flac"))
        .unwrap_or(false)
}

/// Check whether a track already carries a tag block.
///
/// Any read failure counts as untagged, so an unreadable file gets retagged
/// rather than silently skipped.
pub fn is_tagged(path: &Path) -> bool {
    match Probe::open(path).and_then(|probe| probe.read()) {
        Ok(tagged) => tagged.tags().iter().any(|tag| !tag.is_empty()),
        Err(_) => false,
    }
}

/// Enumerate split tracks in `dir`, sorted by file name.
pub fn list_track_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Could not read {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut tracks: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.file_name()
                    .map(|n| is_track_file(&n.to_string_lossy()))
                    .unwrap_or(false)
        })
        .collect();
    tracks.sort();
    tracks
}

/// Delete pregap files and drop them from the candidate list.
///
/// Deletion failures are warnings; the rest of the directory still gets
/// processed.
pub fn remove_pregap_files(tracks: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut kept = Vec::new();
    for track in tracks {
        if is_pregap_file(&track) {
            match fs::remove_file(&track) {
                Ok(()) => log::info!("Removed pregap file: {}", track.display()),
                Err(e) => log::warn!("Could not delete {}: {}", track.display(), e),
            }
        } else {
            kept.push(track);
        }
    }
    kept
}

/// Tag the split tracks in `dir` from their cue sheet.
///
/// Enumerates tracks, discards pregap artifacts, optionally filters out
/// already-tagged files, then invokes the tagger once with the remaining
/// list. Returns the number of files handed to the tagger; zero means there
/// was nothing left to tag, which is not an error.
pub async fn tag_tracks(
    cue_path: &Path,
    dir: &Path,
    config: &Config,
    tools: &Tools,
) -> Result<usize, String> {
    let tracks = remove_pregap_files(list_track_files(dir));

    let tracks: Vec<PathBuf> = if config.skip_tagged {
        tracks.into_iter().filter(|t| !is_tagged(t)).collect()
    } else {
        tracks
    };

    if tracks.is_empty() {
        log::warn!("No taggable tracks in {}", dir.display());
        return Ok(0);
    }

    let output = Command::new(&tools.cuetag)
        .arg(cue_path)
        .args(&tracks)
        .output()
        .await
        .map_err(|e| format!("Failed to spawn {}: {}", tools.cuetag.display(), e))?;
    check_exit(&tools.cuetag, &output)?;

    log::info!("Tagged {} tracks in {}", tracks.len(), dir.display());
    Ok(tracks.len())
}

/// Tag every already-split album under `root`, one cue sheet at a time.
///
/// Per-cue failures are logged and the walk continues.
pub async fn tag_tree(root: &Path, config: &Config, tools: &Tools) {
    for cue_path in discovery::find_cue_files(root) {
        let dir = cue_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        if let Err(e) = tag_tracks(&cue_path, &dir, config, tools).await {
            log::error!("Tagging failed for {}: {}", cue_path.display(), e);
        }
    }
}
