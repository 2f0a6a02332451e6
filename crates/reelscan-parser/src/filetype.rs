//! File-type classification by extension.

use crate::patterns::PatternLibrary;

/// Coarse category of a staged file, used to route it to the right handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FileKind {
    /// NFO sidecar metadata file.
    Nfo,
    /// Watched-state marker file.
    Watched,
    /// Blu-ray disc structure file.
    BlurayMarker,
    /// DVD disc structure file.
    DvdMarker,
    Video,
    Subtitle,
    Image,
    Unknown,
}

impl FileKind {
    /// Fixed-literal extensions checked before the configurable sets.
    fn fixed_marker(extension: &str) -> Option<FileKind> {
        match extension {
            "nfo" => Some(FileKind::Nfo),
            "watched" => Some(FileKind::Watched),
            "bdmv" | "clpi" | "mpls" => Some(FileKind::BlurayMarker),
            "ifo" | "bup" => Some(FileKind::DvdMarker),
            _ => None,
        }
    }
}

impl PatternLibrary {
    /// Classify a file extension. Pure function; matching is
    /// case-insensitive, unknown extensions map to [`FileKind::Unknown`].
    pub fn classify_extension(&self, extension: &str) -> FileKind {
        let ext = extension.trim_start_matches('.').to_lowercase();
        if let Some(kind) = FileKind::fixed_marker(&ext) {
            return kind;
        }
        if self.video_exts.contains(&ext) {
            FileKind::Video
        } else if self.subtitle_exts.contains(&ext) {
            FileKind::Subtitle
        } else if self.image_exts.contains(&ext) {
            FileKind::Image
        } else {
            FileKind::Unknown
        }
    }
}
