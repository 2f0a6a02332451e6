//! Season/episode extraction and the episode-title pass.

use crate::patterns::PatternLibrary;
use crate::state::ScanState;

use super::{second_title_span, TV_MARK};

/// Find the season/episode cluster, record season and episode numbers, and
/// replace the cluster with the TV sentinel.
pub(crate) fn extract(library: &PatternLibrary, state: &mut ScanState) {
    let Some((start, end, span)) = library
        .tv_marker
        .find(&state.rest)
        .map(|m| (m.start(), m.end(), m.as_str().to_string()))
    else {
        return;
    };
    state.consume(start, end, TV_MARK);

    // Season defaults to 1 for bare episode markers ("E05", "Episode 12").
    state.season = library
        .season_in_marker
        .captures(&span)
        .and_then(|c| c.get(1).or_else(|| c.get(2)))
        .and_then(|g| g.as_str().parse().ok())
        .unwrap_or(1);

    for caps in library.episode_in_marker.captures_iter(&span) {
        let number = caps
            .get(1)
            .or_else(|| caps.get(2))
            .and_then(|g| g.as_str().parse::<i32>().ok());
        if let Some(number) = number {
            state.episodes.push(number);
        }
    }
}

/// Capture the text after the TV sentinel as the episode title. The span is
/// consumed even when episode titles are disabled, so the title pass sees the
/// same working string either way.
pub(crate) fn extract_title(library: &PatternLibrary, state: &mut ScanState) {
    if state.season == -1 {
        return;
    }
    let Some(base) = state.rest.find(TV_MARK).map(|p| p + TV_MARK.len()) else {
        return;
    };
    let Some((start, end, text)) = second_title_span(library, &state.rest, base) else {
        return;
    };
    if library.episode_titles {
        state.episode_title = text;
    }
    state.consume(start, end, super::DIVIDER);
}
