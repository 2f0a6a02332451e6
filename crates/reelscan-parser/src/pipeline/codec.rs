//! Technical keyword extraction: frame rate, audio codec, video codec and
//! HD resolution. Each field records at most one canonical value; the first
//! match in table order wins.

use crate::patterns::PatternLibrary;
use crate::state::ScanState;

use super::DIVIDER;

pub(crate) fn extract(library: &PatternLibrary, state: &mut ScanState) {
    if state.fps == -1 {
        let found = library
            .fps
            .iter()
            .find_map(|(rate, re)| re.find(&state.rest).map(|m| (*rate, m.start(), m.end())));
        if let Some((rate, start, end)) = found {
            state.fps = rate;
            state.consume(start, end, DIVIDER);
        }
    }

    if state.audio_codec.is_empty() {
        if let Some(canonical) = take_first(library, state, |lib| &lib.audio_codecs) {
            state.audio_codec = canonical;
        }
    }
    if state.video_codec.is_empty() {
        if let Some(canonical) = take_first(library, state, |lib| &lib.video_codecs) {
            state.video_codec = canonical;
        }
    }
    if state.hd_resolution.is_empty() {
        if let Some(canonical) = take_first(library, state, |lib| &lib.resolutions) {
            state.hd_resolution = canonical;
        }
    }
}

/// Find the first matcher with a hit, consume its span and return the
/// canonical key.
fn take_first(
    library: &PatternLibrary,
    state: &mut ScanState,
    table: impl Fn(&PatternLibrary) -> &Vec<crate::patterns::KeywordMatcher>,
) -> Option<String> {
    let (canonical, start, end) = table(library).iter().find_map(|matcher| {
        matcher
            .find(&state.rest)
            .map(|(s, e)| (matcher.canonical.clone(), s, e))
    })?;
    state.consume(start, end, DIVIDER);
    Some(canonical)
}
