//! Collection marker extraction: `[SET <name>]` and `[SET <name>-<order>]`.

use crate::patterns::PatternLibrary;
use crate::state::ScanState;

use super::{clean_token, DIVIDER};

/// Record every `[SET ...]` marker as a collection membership. A numeric
/// suffix after a dash is the order within the collection.
pub(crate) fn extract(library: &PatternLibrary, state: &mut ScanState) {
    loop {
        let Some((start, end, interior)) = library.set_marker.captures(&state.rest).map(|caps| {
            let whole = caps.get(0).map(|m| (m.start(), m.end())).unwrap_or((0, 0));
            let interior = caps
                .get(1)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            (whole.0, whole.1, interior)
        }) else {
            return;
        };
        state.consume(start, end, DIVIDER);

        let (raw_name, order) = match library.set_order.captures(&interior) {
            Some(caps) => {
                let name = caps
                    .get(1)
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
                let order = caps.get(2).and_then(|m| m.as_str().parse::<u32>().ok());
                (name, order)
            }
            None => (interior, None),
        };
        let name = clean_token(library, &raw_name);
        if name.is_empty() {
            continue;
        }
        state.set_map.insert(name, order);
    }
}
