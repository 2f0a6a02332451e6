//! Edition/version extraction ("director's cut", "extended edition", ...).

use crate::patterns::PatternLibrary;
use crate::state::ScanState;

use super::DIVIDER;

/// Record the first matching edition phrase verbatim, then strike every
/// occurrence of every edition pattern from the working string.
pub(crate) fn extract(library: &PatternLibrary, state: &mut ScanState) {
    let Some((start, end)) = library
        .versions
        .iter()
        .find_map(|matcher| matcher.find(&state.rest))
    else {
        return;
    };
    state.movie_version = state.rest[start..end].to_string();
    for matcher in &library.versions {
        state.rest = matcher.pattern.replace_all(&state.rest, DIVIDER).into_owned();
    }
}
