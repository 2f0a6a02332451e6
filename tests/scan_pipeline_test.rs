//! End-to-end scanning behavior of the parser engine.

use reelscan_parser::{scan, ScannerConfig, Scanner};

// ---------------------------------------------------------------------------
// Representative names
// ---------------------------------------------------------------------------

#[test]
fn movie_with_release_group() {
    let scanner = Scanner::default();
    let s = scanner.scan(
        "The.Movie.Name.2010.BluRay.x264-GROUP.mkv",
        "The Movie Name (2010)",
        false,
    );
    assert_eq!(s.title, "The Movie Name");
    assert_eq!(s.year, 2010);
    assert_eq!(s.container, "MKV");
    assert_eq!(s.video_source, "BluRay");
    assert_eq!(s.video_codec, "H.264");
    assert!(s.episodes.is_empty());
    assert!(s.is_movie());
}

#[test]
fn tv_episode_with_title() {
    let s = scan("Show.Name.S02E05.Episode.Title.HDTV.mkv");
    assert_eq!(s.title, "Show Name");
    assert_eq!(s.season, 2);
    assert_eq!(s.episodes, vec![5]);
    assert_eq!(s.episode_title, "Episode Title");
    assert_eq!(s.video_source, "HDTV");
    assert!(!s.is_movie());
}

#[test]
fn bare_episode_marker_keeps_its_section_boundary() {
    let s = scan("Show.E05.The.One.mkv");
    assert_eq!(s.title, "Show");
    assert_eq!(s.season, 1);
    assert_eq!(s.episodes, vec![5]);
    assert_eq!(s.episode_title, "The One");
}

#[test]
fn text_past_a_bare_episode_marker_cannot_supply_the_year() {
    let s = scan("Show.E05.2010.mkv");
    assert_eq!(s.title, "Show");
    assert_eq!(s.episodes, vec![5]);
    assert_eq!(s.year, -1);
}

#[test]
fn set_marker_excluded_from_title() {
    let s = scan("Movie [SET Trilogy-1].avi");
    assert_eq!(s.set_map.get("Trilogy"), Some(&Some(1)));
    assert_eq!(s.title, "Movie");
    assert!(!s.title.contains("SET"));
}

#[test]
fn disc_number_is_a_part() {
    let s = scan("movie.CD1.avi");
    assert_eq!(s.part, 1);
    assert_eq!(s.title, "movie");
    assert!(!s.rest.to_lowercase().contains("cd1"));
}

#[test]
fn explicit_id_marker() {
    let s = scan("[ID imdb-tt0111161].Title.avi");
    assert_eq!(s.id_map.get("imdb"), Some(&"tt0111161".to_string()));
    assert_eq!(s.title, "Title");
}

#[test]
fn hopeless_name_is_unresolved_not_a_panic() {
    let s = scan("....avi");
    assert!(s.is_unresolved());
    assert_eq!(s.title, "");
    assert_eq!(s.year, -1);
}

#[test]
fn disc_rip_named_after_the_medium() {
    let scanner = Scanner::default();
    let s = scanner.scan("CD1.avi", "The Movie (2010)", false);
    // The parent directory name takes over as the working string.
    assert_eq!(s.title, "The Movie");
    assert_eq!(s.year, 2010);
}

#[test]
fn episode_in_season_folder() {
    let scanner = Scanner::default();
    let s = scanner.scan("S02E05.The.One.mkv", "The Series Name", false);
    assert_eq!(s.title, "The Series Name");
    assert_eq!(s.season, 2);
    assert_eq!(s.episodes, vec![5]);
    assert_eq!(s.episode_title, "The One");
}

// ---------------------------------------------------------------------------
// Invariants
// ---------------------------------------------------------------------------

#[test]
fn default_sentinels_without_markers() {
    let s = scan("Plain.Movie.Name.mkv");
    assert_eq!(s.year, -1);
    assert_eq!(s.season, -1);
    assert_eq!(s.part, -1);
    assert_eq!(s.fps, -1);
    assert!(s.episodes.is_empty());
}

#[test]
fn year_bounds_are_enforced() {
    let s = scan("The.Movie.1024.mkv");
    assert_eq!(s.year, -1);
    // The implausible number stays in the title rather than becoming a year.
    assert_eq!(s.title, "The Movie 1024");
}

#[test]
fn consumed_edition_span_cannot_leak_a_language() {
    let config = ScannerConfig::builder()
        .movie_versions(vec!["french cut".to_string()])
        .build();
    let scanner = Scanner::new(&config);
    let s = scanner.scan_name("Movie.French.Cut.FRENCH.2010.mkv");
    assert_eq!(s.movie_version, "French.Cut");
    // Only the independent FRENCH token counts, not the consumed edition.
    assert_eq!(s.languages, vec!["fr"]);
    assert_eq!(s.title, "Movie");
    assert_eq!(s.year, 2010);
}

#[test]
fn strict_and_loose_passes_may_both_report_a_language() {
    let s = scan("Movie.XVID.FR.vostfr.avi");
    // Duplicates are allowed by design; consumers dedupe if they need to.
    assert_eq!(s.languages, vec!["fr", "fr"]);
    assert_eq!(s.video_codec, "XviD");
    assert_eq!(s.title, "Movie");
}

#[test]
fn scanning_is_deterministic() {
    let scanner = Scanner::default();
    let name = "The.Series.S01E05E06.[SET Saga-3].[ID tmdb-42].FRENCH.2009.mkv";
    let a = scanner.scan_name(name);
    let b = scanner.scan_name(name);
    assert_eq!(a.clean_title, b.clean_title);
    assert_eq!(a.year, b.year);
    assert_eq!(a.season, b.season);
    assert_eq!(a.episodes, b.episodes);
    assert_eq!(a.id_map, b.id_map);
    assert_eq!(a.set_map, b.set_map);
    assert_eq!(a, b);
}

#[test]
fn multi_episode_name_never_yields_an_empty_list() {
    for name in [
        "Show.S01E05.mkv",
        "Show.S01E05E06.mkv",
        "Show.1x05.mkv",
        "Show.E05.mkv",
    ] {
        let s = scan(name);
        assert!(!s.episodes.is_empty(), "empty episodes for {name}");
        assert!(!s.is_movie(), "movie classification for {name}");
    }
}

#[test]
fn natural_keys_are_stable_for_series() {
    let s = scan("The.Series.S02E05.mkv");
    assert_eq!(s.series_key(), format!("{}_s02", s.movie_key()));
    assert_eq!(s.episode_key(5), format!("{}e05", s.series_key()));
}
