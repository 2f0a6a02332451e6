//! Video source extraction (BluRay, HDTV, WEB-DL, ...).
//!
//! Consumption is protected: if striking the matched span would destroy the
//! only part/disc marker in the name, the source is recorded but the text is
//! left in place for the part pass to claim.

use crate::patterns::PatternLibrary;
use crate::state::ScanState;

use super::DIVIDER;

pub(crate) fn extract(library: &PatternLibrary, state: &mut ScanState) {
    // A disc-structure directory may have pinned the source already.
    if !state.video_source.is_empty() {
        return;
    }
    let Some((canonical, start, end)) = library.sources.iter().find_map(|matcher| {
        matcher
            .find(&state.rest)
            .map(|(s, e)| (matcher.canonical.clone(), s, e))
    }) else {
        return;
    };
    state.video_source = canonical;

    let mut candidate = state.rest.clone();
    candidate.replace_range(start..end, DIVIDER);
    let destroys_part = library
        .part_patterns
        .iter()
        .any(|p| p.is_match(&state.rest) && !p.is_match(&candidate));
    if destroys_part {
        tracing::debug!(source = %state.video_source, "source span overlaps a part marker, leaving it");
        return;
    }
    state.consume(start, end, DIVIDER);
}
