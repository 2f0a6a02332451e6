//! Extras detection: bracketed trailer/featurette annotations.

use crate::patterns::PatternLibrary;
use crate::state::ScanState;

use super::{clean_second_title, EXTRA_MARK};

/// Flag the entry as an extra when a configured keyword appears inside
/// bracket-like delimiters, carrying the bracket interior as the tentative
/// part title.
pub(crate) fn extract(library: &PatternLibrary, state: &mut ScanState) {
    for re in &library.extras {
        let Some(caps) = re.captures(&state.rest) else {
            continue;
        };
        let whole = caps.get(0).map(|m| (m.start(), m.end()));
        let interior = caps
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        state.is_extra = true;
        state.part_title = clean_second_title(library, &interior);
        if let Some((start, end)) = whole {
            state.consume(start, end, EXTRA_MARK);
        }
        return;
    }
}
