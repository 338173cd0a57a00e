//! Cue-sheet discovery and image pairing.
//!
//! A work item is a cue sheet plus the same-named lossless image sitting
//! next to it. Discovery is best-effort: cue sheets without a partner are
//! logged and skipped, never errors.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One album to convert: the lossless image and the cue sheet describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub image_path: PathBuf,
    pub cue_path: PathBuf,
}

/// Case-insensitive extension check.
pub(crate) fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}

/// Walk `root` and pair every cue sheet with its same-named image.
///
/// An `.ape` sibling wins; a `.flac` sibling is accepted as the
/// already-decoded case.
pub fn find_work_items(root: &Path) -> Vec<WorkItem> {
    let mut items = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let cue_path = entry.path();
        if !cue_path.is_file() || !has_extension(cue_path, "cue") {
            continue;
        }

        let ape_path = cue_path.with_extension("ape");
        let flac_path = cue_path.with_extension("flac");

        if ape_path.is_file() {
            items.push(WorkItem {
                image_path: ape_path,
                cue_path: cue_path.to_path_buf(),
            });
        } else if flac_path.is_file() {
            items.push(WorkItem {
                image_path: flac_path,
                cue_path: cue_path.to_path_buf(),
            });
        } else {
            log::warn!("No matching image for {}", cue_path.display());
        }
    }

    items
}

/// All cue sheets under `root`, in walk order.
pub fn find_cue_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.path().to_path_buf())
        .filter(|p| p.is_file() && has_extension(p, "cue"))
        .collect()
}
