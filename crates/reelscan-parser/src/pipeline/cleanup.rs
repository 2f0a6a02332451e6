//! Cleanup pass: strike configured skip keywords (release-group noise,
//! "limited", "proper" and the like) out of the working string.

use crate::patterns::PatternLibrary;
use crate::state::ScanState;

use super::DIVIDER;

pub(crate) fn extract(library: &PatternLibrary, state: &mut ScanState) {
    for re in &library.cleanup {
        if re.is_match(&state.rest) {
            state.rest = re.replace_all(&state.rest, DIVIDER).into_owned();
        }
    }
}
