//! Scanner configuration.
//!
//! Every keyword table the pattern library compiles at startup lives here,
//! together with the toggles that enable or disable optional passes. The
//! defaults cover the common release-name vocabulary; library owners can
//! replace or extend any table through configuration.

/// A canonical key plus the surface forms that map to it.
///
/// All aliases of a group compile into matchers that report the group's
/// `name` as the extracted value, so `XVID` and `xvid` both record `XviD`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeywordGroup {
    /// Canonical label recorded on a match.
    pub name: String,
    /// Surface forms, matched word-delimited and case-insensitively.
    pub aliases: Vec<String>,
}

impl KeywordGroup {
    /// Convenience constructor used by the default tables.
    pub fn new(name: &str, aliases: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// A free-text cleanup keyword stripped from names before structural parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkipKeyword {
    /// The keyword or, when `regex` is set, a raw regular expression.
    pub keyword: String,
    /// Whether matching is case-sensitive.
    #[cfg_attr(feature = "serde", serde(default))]
    pub case_sensitive: bool,
    /// Whether `keyword` is a raw regular expression instead of a literal.
    #[cfg_attr(feature = "serde", serde(default))]
    pub regex: bool,
}

impl SkipKeyword {
    /// A case-insensitive literal keyword.
    pub fn literal(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            case_sensitive: false,
            regex: false,
        }
    }

    /// A raw regular expression entry.
    pub fn pattern(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            case_sensitive: false,
            regex: true,
        }
    }
}

/// A language code plus the filename tokens that declare it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LanguageKeywords {
    /// The language code recorded on a match (e.g. `fr`).
    pub code: String,
    /// Surface tokens. Strict tables match these case-sensitively as whole
    /// tokens; loose tables match case-insensitively.
    pub tokens: Vec<String>,
}

impl LanguageKeywords {
    pub fn new(code: &str, tokens: &[&str]) -> Self {
        Self {
            code: code.to_string(),
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Configuration for the filename scanner.
///
/// Use the builder to override individual tables or toggles:
///
/// ```
/// use reelscan_parser::config::ScannerConfig;
///
/// let config = ScannerConfig::builder()
///     .language_detection(false)
///     .build();
/// assert!(!config.language_detection);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScannerConfig {
    /// Extensions classified as video files.
    pub video_extensions: Vec<String>,
    /// Extensions classified as subtitle files.
    pub subtitle_extensions: Vec<String>,
    /// Extensions classified as image files.
    pub image_extensions: Vec<String>,
    /// Free-text noise stripped before structural parsing.
    pub skip_keywords: Vec<SkipKeyword>,
    /// Edition/version phrases ("director's cut", ...). List order is the
    /// tie-break when several phrases match.
    pub movie_versions: Vec<String>,
    /// Keywords marking trailers/extras, matched inside brackets only.
    pub extra_keywords: Vec<String>,
    /// Video source keyword groups (HDTV, BluRay, ...).
    pub video_sources: Vec<KeywordGroup>,
    /// Audio codec keyword groups.
    pub audio_codecs: Vec<KeywordGroup>,
    /// Video codec keyword groups.
    pub video_codecs: Vec<KeywordGroup>,
    /// HD resolution keyword groups.
    pub hd_resolutions: Vec<KeywordGroup>,
    /// Case-sensitive exact-token language table, safe against title words.
    pub strict_languages: Vec<LanguageKeywords>,
    /// Case-insensitive language table, applied only after title extraction.
    pub loose_languages: Vec<LanguageKeywords>,
    /// Master switch for both language passes.
    pub language_detection: bool,
    /// Whether episode titles are recorded (the marker is consumed either way).
    pub episode_titles: bool,
    /// Whether ambiguous base names fall back to the parent directory name.
    pub use_parent_name: bool,
    /// Override for the parent-fallback pattern (raw regex). `None` keeps the
    /// built-in disc/part-style default.
    pub parent_name_pattern: Option<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            video_extensions: strings(&[
                "avi", "mkv", "mp4", "m4v", "mov", "wmv", "flv", "webm", "ts", "m2ts", "mpg",
                "mpeg", "divx", "ogm", "vob", "iso", "img",
            ]),
            subtitle_extensions: strings(&["srt", "sub", "ssa", "ass", "smi", "idx", "sup", "vtt"]),
            image_extensions: strings(&["jpg", "jpeg", "png", "gif", "bmp", "webp", "tbn"]),
            skip_keywords: vec![
                SkipKeyword::literal("proper"),
                SkipKeyword::literal("repack"),
                SkipKeyword::literal("limited"),
                SkipKeyword::literal("internal"),
                SkipKeyword::literal("readnfo"),
                SkipKeyword::literal("festival"),
            ],
            movie_versions: strings(&[
                "director's cut",
                "directors cut",
                "extended cut",
                "extended edition",
                "final cut",
                "theatrical cut",
                "special edition",
                "ultimate edition",
                "remastered",
                "unrated",
                "uncut",
            ]),
            extra_keywords: strings(&[
                "trailer",
                "sample",
                "extra",
                "bonus",
                "featurette",
                "interview",
                "deleted scenes",
                "behind the scenes",
            ]),
            video_sources: vec![
                KeywordGroup::new("HDTV", &["hdtv", "pdtv", "dtv", "dvb"]),
                KeywordGroup::new(
                    "BluRay",
                    &["bluray", "blu-ray", "bdrip", "brrip", "bdremux", "bd25", "bd50"],
                ),
                KeywordGroup::new("DVD", &["dvdrip", "dvd-r", "dvd"]),
                KeywordGroup::new("WEB-DL", &["web-dl", "webdl", "webrip", "web-rip", "vodrip"]),
                KeywordGroup::new("SDTV", &["sdtv", "tvrip"]),
                KeywordGroup::new("CAM", &["camrip", "cam"]),
                KeywordGroup::new("TS", &["telesync"]),
                KeywordGroup::new("VHS", &["vhsrip", "vhs"]),
                KeywordGroup::new("LINE", &["line"]),
            ],
            audio_codecs: vec![
                KeywordGroup::new("AC3", &["ac3", "ac-3"]),
                KeywordGroup::new("EAC3", &["eac3", "e-ac3", "ddp", "dd+"]),
                KeywordGroup::new("DTS", &["dts-hd", "dtshd", "dts"]),
                KeywordGroup::new("TrueHD", &["truehd", "true-hd"]),
                KeywordGroup::new("AAC", &["aac"]),
                KeywordGroup::new("FLAC", &["flac"]),
                KeywordGroup::new("MP3", &["mp3"]),
            ],
            video_codecs: vec![
                KeywordGroup::new("H.264", &["h264", "h.264", "x264", "x.264", "avc"]),
                KeywordGroup::new("H.265", &["h265", "h.265", "x265", "x.265", "hevc"]),
                KeywordGroup::new("XviD", &["xvid"]),
                KeywordGroup::new("DivX", &["divx", "div3"]),
                KeywordGroup::new("AV1", &["av1"]),
                KeywordGroup::new("MPEG-2", &["mpeg2", "mpeg-2"]),
                KeywordGroup::new("VC-1", &["vc1", "vc-1"]),
            ],
            hd_resolutions: vec![
                KeywordGroup::new("480p", &["480p", "480i"]),
                KeywordGroup::new("576p", &["576p"]),
                KeywordGroup::new("720p", &["720p", "720i"]),
                KeywordGroup::new("1080p", &["1080p", "1080i"]),
                KeywordGroup::new("2160p", &["2160p", "4k", "uhd"]),
            ],
            strict_languages: vec![
                LanguageKeywords::new("en", &["EN", "ENG", "ENGLISH"]),
                LanguageKeywords::new("fr", &["FR", "FRA", "FRENCH", "TRUEFRENCH", "VF", "VFF"]),
                LanguageKeywords::new("de", &["DE", "GER", "GERMAN", "DEUTSCH"]),
                LanguageKeywords::new("es", &["ES", "ESP", "SPANISH", "ESPANOL"]),
                LanguageKeywords::new("it", &["IT", "ITA", "ITALIAN"]),
                LanguageKeywords::new("ru", &["RU", "RUS", "RUSSIAN"]),
                LanguageKeywords::new("ja", &["JP", "JPN", "JAPANESE"]),
                LanguageKeywords::new("pt", &["PT", "POR", "PORTUGUESE"]),
                LanguageKeywords::new("nl", &["NL", "DUTCH"]),
                LanguageKeywords::new("pl", &["PL", "POLISH"]),
                LanguageKeywords::new("sv", &["SWE", "SWEDISH"]),
            ],
            loose_languages: vec![
                LanguageKeywords::new("en", &["eng", "english"]),
                LanguageKeywords::new("fr", &["fra", "fre", "french", "truefrench", "vostfr"]),
                LanguageKeywords::new("de", &["ger", "german", "deutsch"]),
                LanguageKeywords::new("es", &["esp", "spanish", "espanol", "castellano"]),
                LanguageKeywords::new("it", &["ita", "italian", "italiano"]),
                LanguageKeywords::new("ru", &["rus", "russian"]),
                LanguageKeywords::new("ja", &["jpn", "jap", "japanese"]),
                LanguageKeywords::new("pt", &["por", "portuguese"]),
                LanguageKeywords::new("nl", &["dutch", "nederlands"]),
                LanguageKeywords::new("pl", &["polish", "polski"]),
                LanguageKeywords::new("sv", &["swe", "swedish"]),
            ],
            language_detection: true,
            episode_titles: true,
            use_parent_name: true,
            parent_name_pattern: None,
        }
    }
}

impl ScannerConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> ScannerConfigBuilder {
        ScannerConfigBuilder::default()
    }
}

/// Builder for `ScannerConfig`. Unset fields keep their defaults.
#[derive(Debug, Clone, Default)]
pub struct ScannerConfigBuilder {
    video_extensions: Option<Vec<String>>,
    subtitle_extensions: Option<Vec<String>>,
    image_extensions: Option<Vec<String>>,
    skip_keywords: Option<Vec<SkipKeyword>>,
    movie_versions: Option<Vec<String>>,
    extra_keywords: Option<Vec<String>>,
    video_sources: Option<Vec<KeywordGroup>>,
    audio_codecs: Option<Vec<KeywordGroup>>,
    video_codecs: Option<Vec<KeywordGroup>>,
    hd_resolutions: Option<Vec<KeywordGroup>>,
    strict_languages: Option<Vec<LanguageKeywords>>,
    loose_languages: Option<Vec<LanguageKeywords>>,
    language_detection: Option<bool>,
    episode_titles: Option<bool>,
    use_parent_name: Option<bool>,
    parent_name_pattern: Option<String>,
}

impl ScannerConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the video extension list.
    pub fn video_extensions(mut self, exts: Vec<String>) -> Self {
        self.video_extensions = Some(exts);
        self
    }

    /// Replace the subtitle extension list.
    pub fn subtitle_extensions(mut self, exts: Vec<String>) -> Self {
        self.subtitle_extensions = Some(exts);
        self
    }

    /// Replace the image extension list.
    pub fn image_extensions(mut self, exts: Vec<String>) -> Self {
        self.image_extensions = Some(exts);
        self
    }

    /// Replace the cleanup keyword list.
    pub fn skip_keywords(mut self, keywords: Vec<SkipKeyword>) -> Self {
        self.skip_keywords = Some(keywords);
        self
    }

    /// Replace the edition/version phrase list.
    pub fn movie_versions(mut self, phrases: Vec<String>) -> Self {
        self.movie_versions = Some(phrases);
        self
    }

    /// Replace the extra/trailer keyword list.
    pub fn extra_keywords(mut self, keywords: Vec<String>) -> Self {
        self.extra_keywords = Some(keywords);
        self
    }

    /// Replace the video source groups.
    pub fn video_sources(mut self, groups: Vec<KeywordGroup>) -> Self {
        self.video_sources = Some(groups);
        self
    }

    /// Replace the audio codec groups.
    pub fn audio_codecs(mut self, groups: Vec<KeywordGroup>) -> Self {
        self.audio_codecs = Some(groups);
        self
    }

    /// Replace the video codec groups.
    pub fn video_codecs(mut self, groups: Vec<KeywordGroup>) -> Self {
        self.video_codecs = Some(groups);
        self
    }

    /// Replace the HD resolution groups.
    pub fn hd_resolutions(mut self, groups: Vec<KeywordGroup>) -> Self {
        self.hd_resolutions = Some(groups);
        self
    }

    /// Replace the strict language table.
    pub fn strict_languages(mut self, table: Vec<LanguageKeywords>) -> Self {
        self.strict_languages = Some(table);
        self
    }

    /// Replace the loose language table.
    pub fn loose_languages(mut self, table: Vec<LanguageKeywords>) -> Self {
        self.loose_languages = Some(table);
        self
    }

    /// Enable or disable both language passes.
    pub fn language_detection(mut self, enabled: bool) -> Self {
        self.language_detection = Some(enabled);
        self
    }

    /// Enable or disable episode-title capture.
    pub fn episode_titles(mut self, enabled: bool) -> Self {
        self.episode_titles = Some(enabled);
        self
    }

    /// Enable or disable the parent-name fallback.
    pub fn use_parent_name(mut self, enabled: bool) -> Self {
        self.use_parent_name = Some(enabled);
        self
    }

    /// Override the parent-fallback pattern with a raw regex.
    pub fn parent_name_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.parent_name_pattern = Some(pattern.into());
        self
    }

    /// Build the configuration, filling unset fields with defaults.
    pub fn build(self) -> ScannerConfig {
        let defaults = ScannerConfig::default();
        ScannerConfig {
            video_extensions: self.video_extensions.unwrap_or(defaults.video_extensions),
            subtitle_extensions: self
                .subtitle_extensions
                .unwrap_or(defaults.subtitle_extensions),
            image_extensions: self.image_extensions.unwrap_or(defaults.image_extensions),
            skip_keywords: self.skip_keywords.unwrap_or(defaults.skip_keywords),
            movie_versions: self.movie_versions.unwrap_or(defaults.movie_versions),
            extra_keywords: self.extra_keywords.unwrap_or(defaults.extra_keywords),
            video_sources: self.video_sources.unwrap_or(defaults.video_sources),
            audio_codecs: self.audio_codecs.unwrap_or(defaults.audio_codecs),
            video_codecs: self.video_codecs.unwrap_or(defaults.video_codecs),
            hd_resolutions: self.hd_resolutions.unwrap_or(defaults.hd_resolutions),
            strict_languages: self.strict_languages.unwrap_or(defaults.strict_languages),
            loose_languages: self.loose_languages.unwrap_or(defaults.loose_languages),
            language_detection: self
                .language_detection
                .unwrap_or(defaults.language_detection),
            episode_titles: self.episode_titles.unwrap_or(defaults.episode_titles),
            use_parent_name: self.use_parent_name.unwrap_or(defaults.use_parent_name),
            parent_name_pattern: self.parent_name_pattern.or(defaults.parent_name_pattern),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
