//! Benchmarks for sorting and searching a song catalog.

use std::hint::black_box;

use {
    criterion::{BatchSize, Criterion, criterion_group, criterion_main},
    songbook::{Song, SongIdGenerator, filter_by_keyword, sort_songs},
};

fn build_catalog(size: usize) -> Vec<Song> {
    let ids = SongIdGenerator::new();
    (0..size)
        .map(|i| {
            let rating = i64::try_from(i % 5).unwrap() + 1;
            let duration = i64::try_from(i % 600).unwrap() + 1;
            let mut song = Song::new(
                &format!("Track {}", (i * 7919) % size),
                &format!("Artist {}", i % 50),
                duration,
                rating,
                &ids,
            )
            .unwrap();
            song.add_tag(if i % 3 == 0 { "Live" } else { "Studio" }).unwrap();
            song
        })
        .collect()
}

fn bench_sort(c: &mut Criterion) {
    let catalog = build_catalog(10_000);
    c.bench_function("sort_songs_10k", |b| {
        b.iter_batched(
            || catalog.clone(),
            |mut songs| sort_songs(black_box(&mut songs)),
            BatchSize::LargeInput,
        );
    });
}

fn bench_filter(c: &mut Criterion) {
    let catalog = build_catalog(10_000);
    c.bench_function("filter_by_keyword_10k", |b| {
        b.iter(|| filter_by_keyword(black_box(&catalog), black_box("live")).len());
    });
}

criterion_group!(benches, bench_sort, bench_filter);
criterion_main!(benches);
