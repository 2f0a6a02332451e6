//! Container extraction.
//!
//! Plain files report their uppercased extension and have it stripped from the
//! working string. Disc-structure directories (BDMV, VIDEO_TS and friends) get
//! a synthetic container label and pin the video source early.

use crate::patterns::PatternLibrary;
use crate::state::ScanState;

pub(crate) fn extract(_library: &PatternLibrary, state: &mut ScanState) {
    if state.is_directory {
        match state.name.to_lowercase().as_str() {
            "bdmv" | "hvdvd_ts" => {
                state.container = "BLURAY".into();
                state.video_source = "BluRay".into();
            }
            "video_ts" | "audio_ts" => {
                state.container = "DVD".into();
                state.video_source = "DVD".into();
            }
            _ => {}
        }
        return;
    }

    let Some(dot) = state.name.rfind('.') else {
        return;
    };
    let extension = &state.name[dot + 1..];
    if extension.is_empty()
        || extension.len() > 5
        || !extension.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return;
    }
    state.container = extension.to_uppercase();
    // The rest string only carries the extension if the parent fallback did
    // not replace it.
    if state.rest.ends_with(&state.name[dot..]) {
        state.rest.truncate(state.rest.len() - (state.name.len() - dot));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScannerConfig;

    fn library() -> PatternLibrary {
        PatternLibrary::build(&ScannerConfig::default())
    }

    #[test]
    fn extension_becomes_container_and_is_stripped() {
        let library = library();
        let mut state = ScanState::new("The.Movie.2010.mkv", "", false);
        extract(&library, &mut state);
        assert_eq!(state.container, "MKV");
        assert_eq!(state.rest, "The.Movie.2010");
    }

    #[test]
    fn disc_directories_get_synthetic_containers() {
        let library = library();
        let mut state = ScanState::new("BDMV", "The Movie (2010)", true);
        extract(&library, &mut state);
        assert_eq!(state.container, "BLURAY");
        assert_eq!(state.video_source, "BluRay");

        let mut state = ScanState::new("VIDEO_TS", "The Movie (2010)", true);
        extract(&library, &mut state);
        assert_eq!(state.container, "DVD");
        assert_eq!(state.video_source, "DVD");
    }

    #[test]
    fn plain_directories_have_no_container() {
        let library = library();
        let mut state = ScanState::new("The Movie (2010)", "", true);
        extract(&library, &mut state);
        assert_eq!(state.container, "");
        assert_eq!(state.rest, "The Movie (2010)");
    }

    #[test]
    fn dotless_names_are_untouched() {
        let library = library();
        let mut state = ScanState::new("Movie", "", false);
        extract(&library, &mut state);
        assert_eq!(state.container, "");
        assert_eq!(state.rest, "Movie");
    }
}
