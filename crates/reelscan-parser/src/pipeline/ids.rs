//! External id extraction: explicit `[ID source-value]` markers and bare
//! IMDb ids.

use crate::patterns::PatternLibrary;
use crate::state::ScanState;

use super::ID_MARK;

pub(crate) fn extract(library: &PatternLibrary, state: &mut ScanState) {
    if let Some((start, end, interior)) = library.id_marker.captures(&state.rest).map(|caps| {
        let whole = caps.get(0).map(|m| (m.start(), m.end())).unwrap_or((0, 0));
        let interior = caps
            .get(1)
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
        (whole.0, whole.1, interior)
    }) {
        state.consume(start, end, ID_MARK);
        match library.id_split.captures(&interior) {
            Some(caps) => {
                let source = caps.get(1).map(|m| m.as_str().to_lowercase());
                let value = caps.get(2).map(|m| m.as_str().to_string());
                if let (Some(source), Some(value)) = (source, value) {
                    state.id_map.insert(source, value);
                }
            }
            None => {
                tracing::warn!(marker = %interior, "malformed id marker, ignoring");
            }
        }
        return;
    }

    if let Some((start, end, id)) = library
        .imdb_id
        .find(&state.rest)
        .map(|m| (m.start(), m.end(), m.as_str().to_string()))
    {
        state.id_map.insert("imdb".into(), id);
        state.consume(start, end, ID_MARK);
    }
}
