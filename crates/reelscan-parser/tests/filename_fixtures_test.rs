//! Table-driven fixture tests for reelscan-parser.
//!
//! Each fixture is a filename plus the fields a scan must produce. Fields not
//! present in a fixture are not checked, so cases stay focused on what the
//! name actually encodes.

use reelscan_parser::Scanner;
use serde_json::{json, Value};

fn fixtures() -> Value {
    json!([
        {
            "input": "The.Movie.Name.2010.BluRay.1080p.DTS.x264-GROUP.mkv",
            "title": "The Movie Name",
            "year": 2010,
            "source": "BluRay",
            "resolution": "1080p",
            "audio_codec": "DTS",
            "video_codec": "H.264",
            "container": "MKV"
        },
        {
            "input": "Another Movie (1999).avi",
            "title": "Another Movie",
            "year": 1999,
            "container": "AVI"
        },
        {
            "input": "Show.Name.S02E05.Episode.Title.HDTV.mkv",
            "title": "Show Name",
            "season": 2,
            "episodes": [5],
            "episode_title": "Episode Title",
            "source": "HDTV"
        },
        {
            "input": "Show.Name.1x05.mkv",
            "title": "Show Name",
            "season": 1,
            "episodes": [5]
        },
        {
            "input": "Show.Name.S01E05E06.720p.WEBRip.mkv",
            "title": "Show Name",
            "season": 1,
            "episodes": [5, 6],
            "source": "WEB-DL",
            "resolution": "720p"
        },
        {
            "input": "Movie.Director's.Cut.2008.DVDRip.XviD.avi",
            "title": "Movie",
            "year": 2008,
            "version": "Director's.Cut",
            "source": "DVD",
            "video_codec": "XviD"
        },
        {
            "input": "Old.Film.1934.25fps.DVDRip.avi",
            "title": "Old Film",
            "year": 1934,
            "fps": 25,
            "source": "DVD"
        },
        {
            "input": "Movie.FRENCH.2010.mkv",
            "title": "Movie",
            "year": 2010,
            "languages": ["fr"]
        },
        {
            "input": "Movie.Name.[SET The Saga-2].2011.mkv",
            "title": "Movie Name",
            "year": 2011
        },
        {
            "input": "Film.tt0468569.2008.mkv",
            "title": "Film",
            "year": 2008
        }
    ])
}

fn as_str(case: &Value, key: &str) -> Option<String> {
    case.get(key).and_then(|v| v.as_str()).map(str::to_string)
}

fn as_int(case: &Value, key: &str) -> Option<i64> {
    case.get(key).and_then(|v| v.as_i64())
}

#[test]
fn fixture_table_scans_as_expected() {
    let scanner = Scanner::default();
    for case in fixtures().as_array().unwrap() {
        let input = case["input"].as_str().unwrap();
        let state = scanner.scan_name(input);

        if let Some(title) = as_str(case, "title") {
            assert_eq!(state.title, title, "title of {input}");
        }
        if let Some(year) = as_int(case, "year") {
            assert_eq!(i64::from(state.year), year, "year of {input}");
        }
        if let Some(season) = as_int(case, "season") {
            assert_eq!(i64::from(state.season), season, "season of {input}");
        }
        if let Some(episodes) = case.get("episodes").and_then(|v| v.as_array()) {
            let expected: Vec<i32> = episodes
                .iter()
                .map(|e| e.as_i64().unwrap() as i32)
                .collect();
            assert_eq!(state.episodes, expected, "episodes of {input}");
        }
        if let Some(episode_title) = as_str(case, "episode_title") {
            assert_eq!(state.episode_title, episode_title, "episode title of {input}");
        }
        if let Some(source) = as_str(case, "source") {
            assert_eq!(state.video_source, source, "source of {input}");
        }
        if let Some(resolution) = as_str(case, "resolution") {
            assert_eq!(state.hd_resolution, resolution, "resolution of {input}");
        }
        if let Some(audio) = as_str(case, "audio_codec") {
            assert_eq!(state.audio_codec, audio, "audio codec of {input}");
        }
        if let Some(video) = as_str(case, "video_codec") {
            assert_eq!(state.video_codec, video, "video codec of {input}");
        }
        if let Some(container) = as_str(case, "container") {
            assert_eq!(state.container, container, "container of {input}");
        }
        if let Some(version) = as_str(case, "version") {
            assert_eq!(state.movie_version, version, "version of {input}");
        }
        if let Some(fps) = as_int(case, "fps") {
            assert_eq!(i64::from(state.fps), fps, "fps of {input}");
        }
        if let Some(languages) = case.get("languages").and_then(|v| v.as_array()) {
            let expected: Vec<String> = languages
                .iter()
                .map(|l| l.as_str().unwrap().to_string())
                .collect();
            assert_eq!(state.languages, expected, "languages of {input}");
        }
    }
}

#[test]
fn set_and_id_markers_from_fixture_names() {
    let scanner = Scanner::default();

    let state = scanner.scan_name("Movie.Name.[SET The Saga-2].2011.mkv");
    assert_eq!(state.set_map.get("The Saga"), Some(&Some(2)));

    let state = scanner.scan_name("Film.tt0468569.2008.mkv");
    assert_eq!(state.id_map.get("imdb"), Some(&"tt0468569".to_string()));
}
