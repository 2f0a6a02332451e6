//! Directory tree walking.
//!
//! Walks a library root, classifies every file by extension and runs the
//! filename scanner over video files and disc-structure directories. Walk
//! errors (permission problems, broken links) are logged and counted, never
//! fatal for the rest of the tree.

use std::path::{Path, PathBuf};

use reelscan_parser::{FileKind, ScanState, Scanner};
use walkdir::{DirEntry, WalkDir};

use crate::config::ScanConfig;

#[derive(Debug, thiserror::Error)]
pub enum WalkError {
    #[error("scan root does not exist: {0}")]
    MissingRoot(PathBuf),
    #[error("scan root is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// One scanned entry: the path, its coarse type and the extracted metadata.
#[derive(Debug)]
pub struct ScanRecord {
    pub path: PathBuf,
    pub kind: FileKind,
    pub state: ScanState,
}

/// Counters for one tree walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkSummary {
    pub files_seen: usize,
    pub scanned: usize,
    pub skipped: usize,
    pub unresolved: usize,
    pub errors: usize,
}

/// Directory names that are disc structures rather than ordinary folders.
fn is_disc_structure(name: &str) -> bool {
    matches!(
        name.to_lowercase().as_str(),
        "bdmv" | "video_ts" | "audio_ts" | "hvdvd_ts"
    )
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn parent_name(path: &Path) -> String {
    path.parent()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Walk `root` and scan everything the classifier recognizes as video, plus
/// disc-structure directories.
pub fn scan_tree(
    scanner: &Scanner,
    root: &Path,
    options: &ScanConfig,
) -> Result<(Vec<ScanRecord>, WalkSummary), WalkError> {
    if !root.exists() {
        return Err(WalkError::MissingRoot(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(WalkError::NotADirectory(root.to_path_buf()));
    }

    let mut walker = WalkDir::new(root).follow_links(options.follow_links);
    if let Some(depth) = options.max_depth {
        walker = walker.max_depth(depth);
    }
    let skip_hidden = options.skip_hidden;

    let mut records = Vec::new();
    let mut summary = WalkSummary::default();

    let entries = walker
        .into_iter()
        .filter_entry(move |entry| entry.depth() == 0 || !skip_hidden || !is_hidden(entry));
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(%err, "walk error, skipping entry");
                summary.errors += 1;
                continue;
            }
        };
        let name = entry.file_name().to_string_lossy().into_owned();

        if entry.file_type().is_dir() {
            if entry.depth() > 0 && is_disc_structure(&name) {
                let state = scanner.scan(&name, &parent_name(entry.path()), true);
                records.push(ScanRecord {
                    path: entry.path().to_path_buf(),
                    kind: FileKind::Video,
                    state,
                });
                summary.scanned += 1;
            }
            continue;
        }

        summary.files_seen += 1;
        let extension = entry
            .path()
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        let kind = scanner.classify(&extension);
        if kind != FileKind::Video {
            tracing::trace!(file = %name, ?kind, "not a video file, skipping");
            summary.skipped += 1;
            continue;
        }

        let state = scanner.scan(&name, &parent_name(entry.path()), false);
        if state.is_unresolved() {
            tracing::warn!(file = %name, "no usable title or year, needs manual review");
            summary.unresolved += 1;
        }
        records.push(ScanRecord {
            path: entry.path().to_path_buf(),
            kind,
            state,
        });
        summary.scanned += 1;
    }

    Ok((records, summary))
}
