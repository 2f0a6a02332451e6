//! The ordered extraction pipeline.
//!
//! Each pass either finds nothing and leaves the state untouched, or records
//! derived fields and replaces the matched span in `rest` with a sentinel
//! divider so later passes cannot re-match the same text. Pass order is fixed;
//! reordering changes results.

mod cleanup;
mod codec;
mod container;
mod episode;
mod extras;
mod ids;
mod language;
mod parent;
mod part;
mod set;
mod source;
mod title;
mod version;

use crate::patterns::PatternLibrary;
use crate::state::{normalize_title, ScanState};

/// Plain section divider substituted for consumed spans.
pub(crate) const DIVIDER: &str = "/";
/// Marks where an extras/trailer annotation was consumed.
pub(crate) const EXTRA_MARK: &str = "/-x/";
/// Marks where the season/episode cluster was consumed.
pub(crate) const TV_MARK: &str = "/-t/";
/// Marks where a part/disc marker was consumed.
pub(crate) const PART_MARK: &str = "/-p/";
/// Marks where an external id marker was consumed.
pub(crate) const ID_MARK: &str = "/-i/";

/// One extraction pass over the mutable scan state.
pub(crate) type PassFn = fn(&PatternLibrary, &mut ScanState);

/// The pipeline, in execution order.
pub(crate) const PASSES: &[(&str, PassFn)] = &[
    ("parent-fallback", parent::fallback),
    ("container", container::extract),
    ("cleanup", cleanup::extract),
    ("parent-merge", parent::merge),
    ("version", version::extract),
    ("extras", extras::extract),
    ("codec", codec::extract),
    ("source", source::extract),
    ("episode", episode::extract),
    ("part", part::extract),
    ("set", set::extract),
    ("ids", ids::extract),
    ("language", language::extract),
    ("title", title::extract),
    ("episode-title", episode::extract_title),
    ("part-title", part::extract_title),
];

/// Run every pass in order, then apply the synthetic-title fallback.
pub(crate) fn run(library: &PatternLibrary, state: &mut ScanState) {
    for (name, pass) in PASSES {
        pass(library, state);
        tracing::trace!(pass = name, rest = %state.rest, "pass complete");
    }

    // A year without a title still identifies the entry; use it verbatim
    // rather than discarding the scan.
    if state.title.is_empty() && state.year != -1 {
        state.title = state.year.to_string();
        state.clean_title = normalize_title(&state.title);
    }
}

/// Clean a single rest-string token: dots and underscores become spaces,
/// whitespace collapses, trailing dashes and unclosed brackets are stripped.
/// Leading dashes are preserved so marker remainders stay recognizable.
pub(crate) fn clean_token(library: &PatternLibrary, token: &str) -> String {
    let spaced = token.replace(['.', '_'], " ");
    let mut cleaned = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
    loop {
        let next = library.trailing_junk.replace(&cleaned, "").into_owned();
        if next == cleaned {
            break;
        }
        cleaned = next;
    }
    cleaned
}

/// Clean a second-title candidate (episode or part title): token cleanup plus
/// removal of the leading dash that delimits it from the preceding section.
pub(crate) fn clean_second_title(library: &PatternLibrary, raw: &str) -> String {
    clean_token(library, raw)
        .trim_start_matches(['-', ' '])
        .to_string()
}

/// Sentinel interiors that tokenization must never mistake for content.
fn is_marker_interior(segment: &str) -> bool {
    matches!(segment, "-x" | "-t" | "-p" | "-i")
}

/// Find the first usable second-title segment at or after `base`, returning
/// its span in `rest` and the cleaned text.
pub(crate) fn second_title_span(
    library: &PatternLibrary,
    rest: &str,
    base: usize,
) -> Option<(usize, usize, String)> {
    let mut offset = base;
    for segment in rest[base..].split(['/', '\\', '|']) {
        if !is_marker_interior(segment) {
            let text = clean_second_title(library, segment);
            if !text.is_empty() {
                return Some((offset, offset + segment.len(), text));
            }
        }
        offset += segment.len() + 1;
    }
    None
}

/// Parse a token as a plausible release year (1800..=3000), tolerating
/// surrounding parentheses or brackets.
pub(crate) fn plausible_year(token: &str) -> Option<i32> {
    let trimmed = token.trim_matches(['(', ')', '[', ']', ' ']);
    bounded_year(trimmed)
}

/// Parse digits as a year, enforcing the plausibility bounds.
pub(crate) fn bounded_year(digits: &str) -> Option<i32> {
    let year: i32 = digits.parse().ok()?;
    (1800..=3000).contains(&year).then_some(year)
}
