//! Part/disc number extraction and the part-title pass.

use crate::patterns::PatternLibrary;
use crate::state::ScanState;

use super::{second_title_span, DIVIDER, PART_MARK};

/// Record the first part/disc number and replace its marker with the part
/// sentinel.
pub(crate) fn extract(library: &PatternLibrary, state: &mut ScanState) {
    for pattern in &library.part_patterns {
        let Some(caps) = pattern.captures(&state.rest) else {
            continue;
        };
        let Some(number) = caps.get(1).and_then(|g| g.as_str().parse::<i32>().ok()) else {
            continue;
        };
        let Some(whole) = caps.get(0).map(|m| (m.start(), m.end())) else {
            continue;
        };
        state.part = number;
        state.consume(whole.0, whole.1, PART_MARK);
        return;
    }
}

/// Capture the text after the part sentinel as the part title. Extras keep
/// the bracket interior recorded earlier instead.
pub(crate) fn extract_title(library: &PatternLibrary, state: &mut ScanState) {
    if state.part == -1 || state.is_extra {
        return;
    }
    let Some(base) = state.rest.find(PART_MARK).map(|p| p + PART_MARK.len()) else {
        return;
    };
    let Some((start, end, text)) = second_title_span(library, &state.rest, base) else {
        return;
    };
    state.part_title = text;
    state.consume(start, end, DIVIDER);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScannerConfig;
    use crate::patterns::PatternLibrary;

    fn library() -> PatternLibrary {
        PatternLibrary::build(&ScannerConfig::default())
    }

    #[test]
    fn disc_markers_set_the_part_number() {
        let library = library();
        for (rest, part) in [
            ("Movie.CD1", 1),
            ("Movie.Disk2", 2),
            ("Movie.Part.3", 3),
            ("Movie.2of2", 2),
        ] {
            let mut state = ScanState::new(rest, "", false);
            state.rest = rest.into();
            extract(&library, &mut state);
            assert_eq!(state.part, part, "in {rest}");
            assert!(state.rest.contains(PART_MARK), "in {rest}");
        }
    }

    #[test]
    fn plain_numbers_are_not_parts() {
        let library = library();
        let mut state = ScanState::new("Movie.2010", "", false);
        state.rest = "Movie.2010".into();
        extract(&library, &mut state);
        assert_eq!(state.part, -1);
        assert_eq!(state.rest, "Movie.2010");
    }

    #[test]
    fn part_title_follows_the_marker() {
        let library = library();
        let mut state = ScanState::new("Movie.CD1.The.Long.Road.avi", "", false);
        state.rest = "Movie/-p/.The.Long.Road".into();
        state.part = 1;
        extract_title(&library, &mut state);
        assert_eq!(state.part_title, "The Long Road");
        assert_eq!(state.rest, "Movie/-p//");
    }

    #[test]
    fn extras_keep_their_bracket_title() {
        let library = library();
        let mut state = ScanState::new("Movie.[TRAILER].CD1.avi", "", false);
        state.rest = "Movie./-x//-p/.Other".into();
        state.part = 1;
        state.is_extra = true;
        state.part_title = "TRAILER".into();
        extract_title(&library, &mut state);
        assert_eq!(state.part_title, "TRAILER");
        assert_eq!(state.rest, "Movie./-x//-p/.Other");
    }
}
