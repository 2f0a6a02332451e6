//! Benchmark Scanner::scan() throughput across filename complexity.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use reelscan_parser::Scanner;

fn bench_scanner(c: &mut Criterion) {
    let inputs = [
        ("simple_movie", "The.Movie.Name.2010.BluRay.1080p.DTS.x264-GROUP.mkv"),
        (
            "tv_episode",
            "The.Series.Name.S02E05.Episode.Title.HDTV.XviD.avi",
        ),
        ("multi_episode", "Show.S01E01E02.1080p.WEB-DL.x265-GROUP.mkv"),
        (
            "markers_heavy",
            "Movie.Name.[SET Epic Collection-2].[ID imdb-tt0111161].FRENCH.2010.mkv",
        ),
        (
            "long_complex",
            "A.Very.Long.Movie.Title.With.Many.Words.2003.EXTENDED.CUT.2160p.BluRay.x265.DTS-HD.25fps-SWTYBLZ.mkv",
        ),
    ];

    let scanner = Scanner::default();
    let mut group = c.benchmark_group("scanner");
    for (name, input) in &inputs {
        group.bench_function(*name, |b| {
            b.iter(|| scanner.scan_name(black_box(input)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_scanner);
criterion_main!(benches);
