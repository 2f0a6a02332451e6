//! reelscan-parser: filename scanning engine for media libraries.
//!
//! Derives structured metadata (title, year, season/episodes, part, codecs,
//! source, languages, collection and id markers) from file and directory
//! names such as `"The.Movie.Name.2010.BluRay.1080p.DTS.x264-GROUP.mkv"`.
//!
//! # Quick start
//!
//! ```
//! use reelscan_parser::scan;
//!
//! let s = scan("The.Movie.Name.2010.BluRay.1080p.DTS.x264-GROUP.mkv");
//! assert_eq!(s.title, "The Movie Name");
//! assert_eq!(s.year, 2010);
//! assert_eq!(s.hd_resolution, "1080p");
//! assert_eq!(s.video_source, "BluRay");
//! assert_eq!(s.video_codec, "H.264");
//! assert_eq!(s.container, "MKV");
//! assert!(s.is_movie());
//! ```

pub mod config;
mod filetype;
mod patterns;
mod pipeline;
mod state;

pub use config::{KeywordGroup, LanguageKeywords, ScannerConfig, ScannerConfigBuilder, SkipKeyword};
pub use filetype::FileKind;
pub use patterns::PatternLibrary;
pub use state::{normalize_title, ScanState};

/// A configured scanner: one compiled [`PatternLibrary`] shared by any number
/// of scans. Construction is the expensive step; `scan` itself allocates only
/// the state it returns.
#[derive(Debug)]
pub struct Scanner {
    library: PatternLibrary,
}

impl Scanner {
    /// Build a scanner from a configuration.
    pub fn new(config: &ScannerConfig) -> Self {
        Self {
            library: PatternLibrary::build(config),
        }
    }

    /// Scan one file or directory name in the context of its parent
    /// directory.
    pub fn scan(&self, name: &str, parent_name: &str, is_directory: bool) -> ScanState {
        let mut state = ScanState::new(name, parent_name, is_directory);
        pipeline::run(&self.library, &mut state);
        tracing::debug!(
            name = %state.name,
            title = %state.title,
            year = state.year,
            episodes = state.episodes.len(),
            "scanned"
        );
        state
    }

    /// Scan a bare file name with no parent context.
    pub fn scan_name(&self, name: &str) -> ScanState {
        self.scan(name, "", false)
    }

    /// Classify a file extension into its coarse category.
    pub fn classify(&self, extension: &str) -> FileKind {
        self.library.classify_extension(extension)
    }

    /// The compiled pattern library backing this scanner.
    pub fn library(&self) -> &PatternLibrary {
        &self.library
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(&ScannerConfig::default())
    }
}

/// Scan a single name with the default configuration.
///
/// Builds a fresh pattern library per call; callers scanning many names
/// should construct a [`Scanner`] once and reuse it.
pub fn scan(name: &str) -> ScanState {
    Scanner::default().scan_name(name)
}
