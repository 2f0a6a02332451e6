//! Strict language detection.
//!
//! Strict tokens are matched case-sensitively in the working string, so `FR`
//! is a language but `Friends` is not. The loose, token-level pass lives in
//! the title pass, after tokenization.

use crate::patterns::PatternLibrary;
use crate::state::ScanState;

use super::DIVIDER;

pub(crate) fn extract(library: &PatternLibrary, state: &mut ScanState) {
    if !library.language_detection {
        return;
    }
    // Leftmost match across the whole table per iteration, so detection
    // order follows string position rather than table order.
    loop {
        let found = library
            .strict_languages
            .iter()
            .filter_map(|(code, re)| re.find(&state.rest).map(|m| (m.start(), m.end(), code.clone())))
            .min_by_key(|(start, ..)| *start);
        let Some((start, end, code)) = found else {
            return;
        };
        state.languages.push(code);
        state.consume(start, end, DIVIDER);
    }
}
