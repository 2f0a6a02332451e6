//! Parent-directory naming passes.
//!
//! Disc rips often name the payload after the physical medium ("CD1.avi",
//! "VIDEO_TS") and put the real title on the containing directory. Two passes
//! handle this: a fallback that swaps the working string for the parent name
//! when the base name is pure disc noise, and a merge that prefixes the parent
//! name when the base name starts with a part or episode marker.

use crate::patterns::PatternLibrary;
use crate::state::ScanState;

use super::DIVIDER;

/// If the base name matches the parent-fallback pattern, scan the parent
/// directory name instead.
pub(crate) fn fallback(library: &PatternLibrary, state: &mut ScanState) {
    if !library.use_parent_name || state.parent_name.is_empty() {
        return;
    }
    if library.parent_pattern.is_match(&state.name) {
        tracing::debug!(name = %state.name, parent = %state.parent_name, "scanning parent name");
        state.rest = state.parent_name.clone();
    }
}

/// If the working string still begins with a part or episode marker, the name
/// carries no title of its own; prepend the cleaned parent name so the title
/// pass has something to work with.
pub(crate) fn merge(library: &PatternLibrary, state: &mut ScanState) {
    if state.parent_name.is_empty() || !library.incomplete_name.is_match(&state.rest) {
        return;
    }
    let mut parent = state.parent_name.clone();
    for re in &library.cleanup {
        parent = re.replace_all(&parent, DIVIDER).into_owned();
    }
    state.rest = format!("{parent}{DIVIDER}{}", state.rest);
}
