//! The scan state container.
//!
//! One [`ScanState`] is created per file or directory name, populated in a
//! single pipeline run, and handed off by value. Numeric fields use `-1` as
//! the canonical "unknown" sentinel; `episodes` empty means the name was
//! classified as a movie.

use std::collections::BTreeMap;

/// Structured metadata extracted from a single file or directory name.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanState {
    /// Original file or directory base name.
    pub name: String,
    /// Name of the containing directory.
    pub parent_name: String,
    /// Whether the scanned entry is a directory.
    pub is_directory: bool,

    /// Working string. Extraction passes replace recognized spans with
    /// sentinel dividers so later passes cannot re-match consumed text; from
    /// the cleanup pass onward it never grows.
    pub rest: String,

    /// Extracted display title.
    pub title: String,
    /// Normalized title used to build natural keys.
    pub clean_title: String,
    /// Release year, `-1` when unknown.
    pub year: i32,
    /// Whether the name was recognized as a trailer/extra.
    pub is_extra: bool,
    /// Part/disc number, `-1` when none.
    pub part: i32,
    /// Title of the part or extra, when present.
    pub part_title: String,
    /// Edition/version phrase, verbatim as matched.
    pub movie_version: String,
    /// Episode title, when present.
    pub episode_title: String,
    /// Season number, `-1` when none.
    pub season: i32,
    /// Episode numbers in marker order; empty means movie.
    pub episodes: Vec<i32>,
    /// Canonical audio codec label.
    pub audio_codec: String,
    /// Canonical video codec label.
    pub video_codec: String,
    /// Container label (uppercased extension or disc-structure synthetic).
    pub container: String,
    /// Frame rate, `-1` when unknown.
    pub fps: i32,
    /// Canonical HD resolution label.
    pub hd_resolution: String,
    /// Canonical video source label.
    pub video_source: String,
    /// External ids by source key (e.g. "imdb" -> "tt0111161").
    pub id_map: BTreeMap<String, String>,
    /// Collection memberships: set name -> optional order index.
    pub set_map: BTreeMap<String, Option<u32>>,
    /// Detected language codes in detection order. Duplicates are allowed by
    /// design; consumers dedupe if they need to.
    pub languages: Vec<String>,
}

impl ScanState {
    /// Create a fresh state for one name. The pipeline does the rest.
    pub fn new(name: impl Into<String>, parent_name: impl Into<String>, is_directory: bool) -> Self {
        let name = name.into();
        Self {
            rest: name.clone(),
            name,
            parent_name: parent_name.into(),
            is_directory,
            title: String::new(),
            clean_title: String::new(),
            year: -1,
            is_extra: false,
            part: -1,
            part_title: String::new(),
            movie_version: String::new(),
            episode_title: String::new(),
            season: -1,
            episodes: Vec::new(),
            audio_codec: String::new(),
            video_codec: String::new(),
            container: String::new(),
            fps: -1,
            hd_resolution: String::new(),
            video_source: String::new(),
            id_map: BTreeMap::new(),
            set_map: BTreeMap::new(),
            languages: Vec::new(),
        }
    }

    /// True when no episode marker was found; the single switch downstream
    /// logic branches on.
    pub fn is_movie(&self) -> bool {
        self.episodes.is_empty()
    }

    /// True when the scan produced neither a usable title nor a year; the
    /// caller should mark the item for manual review.
    pub fn is_unresolved(&self) -> bool {
        self.title.is_empty() && self.year == -1
    }

    /// Natural key for a movie entry: clean title plus year when known.
    pub fn movie_key(&self) -> String {
        if self.year != -1 {
            format!("{}_{}", self.clean_title, self.year)
        } else {
            self.clean_title.clone()
        }
    }

    /// Natural key for a series: the movie key plus the season.
    pub fn series_key(&self) -> String {
        if self.season != -1 {
            format!("{}_s{:02}", self.movie_key(), self.season)
        } else {
            self.movie_key()
        }
    }

    /// Natural key for one episode of this scan.
    pub fn episode_key(&self, episode: i32) -> String {
        format!("{}e{:02}", self.series_key(), episode)
    }

    /// Replace the span `start..end` of `rest` with a sentinel marker.
    ///
    /// Short spans ("E05", "CD1") are widened over adjacent separator bytes
    /// until the marker fits, so section sentinels survive even when the
    /// matched text is shorter than the marker. If no separators are
    /// available the plain divider is used instead; the working string can
    /// never grow.
    pub(crate) fn consume(&mut self, start: usize, end: usize, marker: &str) {
        let (mut start, mut end) = (start, end);
        let bytes = self.rest.as_bytes();
        while marker.len() > end - start {
            if start > 0 && is_separator(bytes[start - 1]) {
                start -= 1;
            } else if end < bytes.len() && is_separator(bytes[end]) {
                end += 1;
            } else {
                break;
            }
        }
        let marker = if marker.len() <= end - start {
            marker
        } else {
            crate::pipeline::DIVIDER
        };
        self.rest.replace_range(start..end, marker);
    }
}

fn is_separator(byte: u8) -> bool {
    matches!(byte, b'.' | b' ' | b'_' | b'-')
}

/// Normalize a title into the form used for natural keys: ASCII letters and
/// digits lowercased, everything else folded into single spaces.
pub fn normalize_title(title: &str) -> String {
    let folded: String = title
        .chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() {
                ch.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state_uses_sentinels() {
        let state = ScanState::new("Movie.mkv", "Movies", false);
        assert_eq!(state.year, -1);
        assert_eq!(state.season, -1);
        assert_eq!(state.part, -1);
        assert_eq!(state.fps, -1);
        assert!(state.episodes.is_empty());
        assert!(state.is_movie());
        assert!(state.is_unresolved());
        assert_eq!(state.rest, "Movie.mkv");
    }

    #[test]
    fn consume_never_grows_rest() {
        let mut state = ScanState::new("abcdef", "", false);
        let before = state.rest.len();
        state.consume(0, 2, "/-t/");
        assert!(state.rest.len() <= before);
        assert_eq!(state.rest, "/cdef");
    }

    #[test]
    fn consume_widens_short_spans_over_separators() {
        let mut state = ScanState::new("Show.E05.The.One", "", false);
        let before = state.rest.len();
        state.consume(5, 8, "/-t/");
        assert_eq!(state.rest, "Show/-t/.The.One");
        assert!(state.rest.len() <= before);

        // With no separators around the span the divider fallback applies.
        let mut state = ScanState::new("abE05cd", "", false);
        state.consume(2, 5, "/-t/");
        assert_eq!(state.rest, "ab/cd");
    }

    #[test]
    fn natural_keys_are_stable() {
        let mut state = ScanState::new("x", "", false);
        state.clean_title = "the movie name".into();
        state.year = 2010;
        assert_eq!(state.movie_key(), "the movie name_2010");

        state.season = 2;
        assert_eq!(state.series_key(), "the movie name_2010_s02");
        assert_eq!(state.episode_key(5), "the movie name_2010_s02e05");
    }

    #[test]
    fn normalize_title_folds_punctuation() {
        assert_eq!(normalize_title("The Movie: Name!"), "the movie name");
        assert_eq!(normalize_title("  Spider-Man  "), "spider man");
        assert_eq!(normalize_title(""), "");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn state_round_trips_through_json() {
        let mut state = ScanState::new("Movie.2010.mkv", "Movies", false);
        state.title = "Movie".into();
        state.year = 2010;
        state.set_map.insert("Saga".into(), Some(3));

        let json = serde_json::to_string(&state).unwrap();
        let back: ScanState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
