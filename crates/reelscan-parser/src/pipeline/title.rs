//! Title extraction.
//!
//! The working string left of the first structural sentinel is split into
//! divider-delimited tokens. The first usable token becomes the title; the
//! tokens after it are probed for a year and for loose language markers.

use crate::patterns::PatternLibrary;
use crate::state::ScanState;

use super::{bounded_year, clean_token, is_marker_interior, plausible_year, EXTRA_MARK, PART_MARK, TV_MARK};
use crate::state::normalize_title;

pub(crate) fn extract(library: &PatternLibrary, state: &mut ScanState) {
    // Tokens past the first structural sentinel belong to the episode or
    // part, never to the title.
    let boundary = [
        (state.is_extra, EXTRA_MARK),
        (state.season != -1, TV_MARK),
        (state.part != -1, PART_MARK),
    ]
    .into_iter()
    .filter(|(relevant, _)| *relevant)
    .filter_map(|(_, mark)| state.rest.find(mark))
    .min()
    .unwrap_or(state.rest.len());

    let head = state.rest[..boundary].to_string();
    let tokens: Vec<&str> = head.split(['/', '\\', '|']).collect();

    let mut title = String::new();
    let mut title_index = None;
    for (index, raw) in tokens.iter().enumerate() {
        let cleaned = clean_token(library, raw);
        // Dash-led fragments are release-group tags or marker remainders.
        if cleaned.is_empty() || cleaned.starts_with('-') {
            continue;
        }
        title = cleaned;
        title_index = Some(index);
        break;
    }
    let Some(title_index) = title_index else {
        return;
    };

    // The first non-empty token after the title may carry the year; every
    // later token is still probed for loose language markers.
    let mut year_slot_open = true;
    for raw in &tokens[title_index + 1..] {
        let cleaned = clean_token(library, raw);
        // Sentinel interiors are structure, not content; they must not use
        // up the year slot.
        if cleaned.is_empty() || is_marker_interior(&cleaned) {
            continue;
        }
        if year_slot_open {
            year_slot_open = false;
            if state.year == -1 {
                if let Some(year) = plausible_year(&cleaned) {
                    state.year = year;
                }
            }
        }
        if library.language_detection && cleaned.len() >= 2 && !cleaned.contains('-') {
            for (code, re) in &library.loose_languages {
                if re.is_match(&cleaned) {
                    state.languages.push(code.clone());
                }
            }
        }
    }

    // Fallback: a trailing year inside the provisional title itself.
    if state.year == -1 {
        let stripped = library.trailing_year.captures(&title).and_then(|caps| {
            let start = caps.get(0)?.start();
            let year = bounded_year(caps.get(1)?.as_str())?;
            Some((start, year))
        });
        if let Some((start, year)) = stripped {
            state.year = year;
            title.truncate(start);
        }
    }

    state.title = title;
    state.clean_title = normalize_title(&state.title);
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
    fn first_clean_token_becomes_the_title() {
        let library = library();
        let mut state = ScanState::new("x", "", false);
        state.rest = "The.Movie.Name./.(2010)/".into();
        extract(&library, &mut state);
        assert_eq!(state.title, "The Movie Name");
        assert_eq!(state.clean_title, "the movie name");
        assert_eq!(state.year, 2010);
    }

    #[test]
    fn dash_led_tokens_are_skipped() {
        let library = library();
        let mut state = ScanState::new("x", "", false);
        state.rest = "/-GROUP/The.Movie".into();
        extract(&library, &mut state);
        assert_eq!(state.title, "The Movie");
    }

    #[test]
    fn tokens_past_the_tv_sentinel_are_ignored() {
        let library = library();
        let mut state = ScanState::new("x", "", false);
        state.rest = "The.Series./-t/.Episode.Title".into();
        state.season = 2;
        state.episodes = vec![5];
        extract(&library, &mut state);
        assert_eq!(state.title, "The Series");
        assert_eq!(state.episode_title, "");
    }

    #[test]
    fn trailing_year_is_split_off_the_title() {
        let library = library();
        let mut state = ScanState::new("x", "", false);
        state.rest = "The.Movie.Name.2010./-GROUP".into();
        extract(&library, &mut state);
        assert_eq!(state.title, "The Movie Name");
        assert_eq!(state.year, 2010);
    }

    #[test]
    fn only_the_next_token_may_carry_the_year() {
        let library = library();
        let mut state = ScanState::new("x", "", false);
        state.rest = "The.Movie/junk/(2010)".into();
        extract(&library, &mut state);
        assert_eq!(state.title, "The Movie");
        // "junk" occupied the year slot.
        assert_eq!(state.year, -1);
    }

    #[test]
    fn implausible_years_are_rejected() {
        let library = library();
        let mut state = ScanState::new("x", "", false);
        state.rest = "The.Movie/(1024)".into();
        extract(&library, &mut state);
        assert_eq!(state.year, -1);
    }

    #[test]
    fn loose_languages_found_in_later_tokens() {
        let library = library();
        let mut state = ScanState::new("x", "", false);
        state.rest = "The.Movie./.vostfr/".into();
        extract(&library, &mut state);
        assert_eq!(state.title, "The Movie");
        assert_eq!(state.languages, vec!["fr"]);
    }

    #[test]
    fn year_only_name_survives_as_a_year() {
        let library = library();
        let mut state = ScanState::new("x", "", false);
        state.rest = "(2010)".into();
        extract(&library, &mut state);
        // The bracketed year is first taken as the provisional title, then
        // the fallback converts it to a year and empties the title. The
        // pipeline's synthetic-title step fills the title back in.
        assert_eq!(state.year, 2010);
        assert_eq!(state.title, "");
    }
}
