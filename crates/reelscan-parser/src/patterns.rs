//! Compiled pattern library.
//!
//! Built once from a [`ScannerConfig`] plus hard-coded defaults, then shared
//! read-only by any number of concurrent scans. Keyword tables compile into
//! one matcher per canonical key; a malformed user-supplied regex is skipped
//! with a warning and never aborts construction.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{KeywordGroup, LanguageKeywords, ScannerConfig, SkipKeyword};

/// Frame rates recognized by the fixed FPS token patterns.
const FPS_RATES: [i32; 8] = [23, 24, 25, 29, 30, 50, 59, 60];

/// Default pattern for base names that should fall back to the parent
/// directory name (disc/part-style names carry no title of their own).
static DEFAULT_PARENT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:cd|dis[ck]|dvd|part|pt)[\s._-]?\d{1,3}\b|^(?:video_ts|audio_ts|bdmv|hvdvd_ts)$")
        .expect("parent fallback pattern should compile")
});

/// A compiled matcher carrying the canonical key it reports.
#[derive(Debug, Clone)]
pub(crate) struct KeywordMatcher {
    pub(crate) canonical: String,
    pub(crate) pattern: Regex,
}

impl KeywordMatcher {
    /// Find the first occurrence, returning the canonical key and byte span.
    pub(crate) fn find(&self, text: &str) -> Option<(usize, usize)> {
        self.pattern.find(text).map(|m| (m.start(), m.end()))
    }
}

/// The compiled pattern library. Read-only after construction.
#[derive(Debug)]
pub struct PatternLibrary {
    // Fixed structural patterns.
    pub(crate) id_marker: Regex,
    pub(crate) id_split: Regex,
    pub(crate) imdb_id: Regex,
    pub(crate) set_marker: Regex,
    pub(crate) set_order: Regex,
    pub(crate) tv_marker: Regex,
    pub(crate) season_in_marker: Regex,
    pub(crate) episode_in_marker: Regex,
    pub(crate) incomplete_name: Regex,
    pub(crate) trailing_year: Regex,
    pub(crate) trailing_junk: Regex,
    pub(crate) part_patterns: Vec<Regex>,
    pub(crate) parent_pattern: Regex,

    // Keyword-table matchers, preserving configuration order.
    pub(crate) cleanup: Vec<Regex>,
    pub(crate) versions: Vec<KeywordMatcher>,
    pub(crate) extras: Vec<Regex>,
    pub(crate) fps: Vec<(i32, Regex)>,
    pub(crate) audio_codecs: Vec<KeywordMatcher>,
    pub(crate) video_codecs: Vec<KeywordMatcher>,
    pub(crate) resolutions: Vec<KeywordMatcher>,
    pub(crate) sources: Vec<KeywordMatcher>,
    pub(crate) strict_languages: Vec<(String, Regex)>,
    pub(crate) loose_languages: Vec<(String, Regex)>,

    // Extension sets for the file-type classifier.
    pub(crate) video_exts: HashSet<String>,
    pub(crate) subtitle_exts: HashSet<String>,
    pub(crate) image_exts: HashSet<String>,

    // Pass toggles.
    pub(crate) language_detection: bool,
    pub(crate) episode_titles: bool,
    pub(crate) use_parent_name: bool,
}

impl PatternLibrary {
    /// Compile the library from a configuration.
    ///
    /// Malformed per-entry regexes are skipped with a logged warning; the
    /// rest of the library still builds (spec'd as a non-fatal configuration
    /// error).
    pub fn build(config: &ScannerConfig) -> Self {
        let parent_pattern = match &config.parent_name_pattern {
            Some(raw) => match Regex::new(raw) {
                Ok(re) => re,
                Err(err) => {
                    tracing::warn!(pattern = %raw, %err, "invalid parent-name pattern, keeping default");
                    DEFAULT_PARENT_PATTERN.clone()
                }
            },
            None => DEFAULT_PARENT_PATTERN.clone(),
        };

        Self {
            id_marker: fixed(r"(?i)\[ID[\s._]+([^\[\]]+)\]"),
            id_split: fixed(r"^\s*([A-Za-z0-9]+)[-\s]+(\S.*?)\s*$"),
            imdb_id: fixed(r"(?i)\b(tt\d{6,9})\b"),
            set_marker: fixed(r"(?i)\[SET[\s._]+([^\[\]]+)\]"),
            set_order: fixed(r"^(.*?)[\s._]*-[\s._]*(\d{1,4})\s*$"),
            tv_marker: fixed(
                r"(?i)\b(?:s(?:eason)?[\s._-]?\d{1,2}(?:[\s._-]?e(?:p(?:isode)?)?[\s._-]?\d{1,3}(?:[\s._-]?e?\d{1,3})*)?|\d{1,2}x\d{1,3}(?:[\s._-]?x\d{1,3})*|(?:ep(?:isode)?[\s._-]?|e)\d{1,3}(?:[\s._-]?e\d{1,3})*)\b",
            ),
            season_in_marker: fixed(r"(?i)s(?:eason)?[\s._-]?(\d{1,2})|(\d{1,2})[\s._-]?x"),
            episode_in_marker: fixed(r"(?i)(?:ep(?:isode)?[\s._-]?|e|x[\s._-]?)(\d{1,3})|-(\d{1,3})"),
            incomplete_name: fixed(
                r"(?i)^[\s._-]*(?:(?:cd|dis[ck]|dvd|part|pt)[\s._-]?\d{1,3}|s(?:eason)?[\s._-]?\d{1,2}|(?:ep(?:isode)?[\s._-]?|e)\d{1,3}|\d{1,2}x\d{1,3})",
            ),
            trailing_year: fixed(r"[\s._(\[-]+(\d{4})[)\]]?(?:[\s._-]*[IVX]{1,4})?[\s._-]*$"),
            trailing_junk: fixed(r"[\s-]+$|[\s-]*[(\[{]$"),
            part_patterns: vec![
                fixed(r"(?i)[\s._-](?:cd|dis[ck]|dvd)[\s._-]?(\d{1,2})\b"),
                fixed(r"(?i)[\s._-](?:part|pt)[\s._-]?(\d{1,2})\b"),
                fixed(r"(?i)[\s._-](\d{1,2})[\s._-]?of[\s._-]?\d{1,2}\b"),
            ],
            parent_pattern,

            cleanup: compile_skip_keywords(&config.skip_keywords),
            versions: compile_groups_ordered(
                config
                    .movie_versions
                    .iter()
                    .map(|phrase| KeywordGroup::new(phrase, &[phrase.as_str()])),
                "movie version",
            ),
            extras: compile_extras(&config.extra_keywords),
            fps: FPS_RATES
                .iter()
                .map(|rate| {
                    (
                        *rate,
                        fixed(&format!(r"(?i)\b{rate}(?:\.\d{{1,3}})?[\s._-]?fps\b")),
                    )
                })
                .collect(),
            audio_codecs: compile_groups_ordered(config.audio_codecs.iter().cloned(), "audio codec"),
            video_codecs: compile_groups_ordered(config.video_codecs.iter().cloned(), "video codec"),
            resolutions: compile_groups_ordered(config.hd_resolutions.iter().cloned(), "resolution"),
            sources: compile_groups_ordered(config.video_sources.iter().cloned(), "video source"),
            strict_languages: compile_languages(&config.strict_languages, true),
            loose_languages: compile_languages(&config.loose_languages, false),

            video_exts: lowercase_set(&config.video_extensions),
            subtitle_exts: lowercase_set(&config.subtitle_extensions),
            image_exts: lowercase_set(&config.image_extensions),

            language_detection: config.language_detection,
            episode_titles: config.episode_titles,
            use_parent_name: config.use_parent_name,
        }
    }
}

/// Compile a built-in pattern. These are fixed strings, so a failure is a
/// programming error rather than a configuration error.
fn fixed(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("built-in pattern failed to compile: {err}"))
}

/// Turn a keyword into a word-delimited pattern body.
///
/// Spaces inside a phrase become a flexible delimiter class so that
/// "director's cut" matches "Director's.Cut" and "directors_cut" variants of
/// its aliases. Word boundaries are only anchored next to alphanumeric ends;
/// `\b` between two non-word characters never matches.
fn keyword_pattern(keyword: &str, case_sensitive: bool) -> Result<Regex, regex::Error> {
    let mut pattern = String::new();
    if !case_sensitive {
        pattern.push_str("(?i)");
    }
    pattern.push_str(&keyword_body(keyword));
    Regex::new(&pattern)
}

/// Word-delimited pattern body for one keyword, without flags.
fn keyword_body(keyword: &str) -> String {
    let mut body = String::new();
    if keyword.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        body.push_str(r"\b");
    }
    for (i, part) in keyword.split(' ').enumerate() {
        if i > 0 {
            body.push_str(r"[\s._-]+");
        }
        body.push_str(&regex::escape(part));
    }
    if keyword.ends_with(|c: char| c.is_ascii_alphanumeric()) {
        body.push_str(r"\b");
    }
    body
}

fn compile_skip_keywords(keywords: &[SkipKeyword]) -> Vec<Regex> {
    let mut compiled = Vec::with_capacity(keywords.len());
    for entry in keywords {
        let result = if entry.regex {
            let raw = if entry.case_sensitive {
                entry.keyword.clone()
            } else {
                format!("(?i){}", entry.keyword)
            };
            Regex::new(&raw)
        } else {
            keyword_pattern(&entry.keyword, entry.case_sensitive)
        };
        match result {
            // A pattern that matches the empty string would insert a divider
            // at every position of the working string.
            Ok(re) if re.is_match("") => {
                tracing::warn!(keyword = %entry.keyword, "skipping cleanup keyword that matches the empty string")
            }
            Ok(re) => compiled.push(re),
            Err(err) => {
                tracing::warn!(keyword = %entry.keyword, %err, "skipping malformed cleanup keyword")
            }
        }
    }
    compiled
}

/// Fold each group's aliases into one alternation matcher per canonical key.
fn compile_groups_ordered(
    groups: impl Iterator<Item = KeywordGroup>,
    kind: &str,
) -> Vec<KeywordMatcher> {
    let mut compiled = Vec::new();
    for group in groups {
        if group.aliases.is_empty() {
            continue;
        }
        let alternation = group
            .aliases
            .iter()
            .map(|alias| keyword_body(alias))
            .collect::<Vec<_>>()
            .join("|");
        match Regex::new(&format!("(?i)(?:{alternation})")) {
            Ok(pattern) => compiled.push(KeywordMatcher {
                canonical: group.name.clone(),
                pattern,
            }),
            Err(err) => {
                tracing::warn!(group = %group.name, %err, "skipping malformed {kind} group")
            }
        }
    }
    compiled
}

/// Extra/trailer keywords only count inside bracket-like delimiters; the
/// bracket interior is captured as the tentative part title.
fn compile_extras(keywords: &[String]) -> Vec<Regex> {
    let mut compiled = Vec::with_capacity(keywords.len());
    for keyword in keywords {
        let body = keyword_body(keyword);
        let pattern = format!(r"[\[({{][\s._-]*((?i:{body})[^\])}}]*)[\])}}]");
        match Regex::new(&pattern) {
            Ok(re) => compiled.push(re),
            Err(err) => {
                tracing::warn!(keyword = %keyword, %err, "skipping malformed extra keyword")
            }
        }
    }
    compiled
}

/// Strict tables compile to case-sensitive whole-token patterns searched in
/// the rest string; loose tables compile to case-insensitive anchored
/// patterns tested against individual title tokens.
fn compile_languages(table: &[LanguageKeywords], strict: bool) -> Vec<(String, Regex)> {
    let mut compiled = Vec::with_capacity(table.len());
    for entry in table {
        if entry.tokens.is_empty() {
            continue;
        }
        let alternation = entry
            .tokens
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = if strict {
            format!(r"\b(?:{alternation})\b")
        } else {
            format!(r"(?i)^\s*(?:{alternation})\s*$")
        };
        match Regex::new(&pattern) {
            Ok(re) => compiled.push((entry.code.clone(), re)),
            Err(err) => {
                tracing::warn!(code = %entry.code, %err, "skipping malformed language entry")
            }
        }
    }
    compiled
}

fn lowercase_set(extensions: &[String]) -> HashSet<String> {
    extensions.iter().map(|e| e.to_lowercase()).collect()
}
