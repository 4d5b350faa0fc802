//! ChunkedBuffer benchmark: Measure chunked storage performance.
//!
//! Compares range edits on the chunked buffer against rebuilding a plain
//! `String`, at document sizes where the difference shows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use unrolled::ChunkedBuffer;

const CAPACITY: usize = 1500;

fn document(chars: usize) -> String {
    (0..chars)
        .map(|i| if i % 7 == 6 { ' ' } else { (b'a' + (i % 26) as u8) as char })
        .collect()
}

fn buffer_insert(c: &mut Criterion) {
    let line = document(80);

    c.bench_function("buffer_insert_80_chars", |b| {
        let mut buffer = ChunkedBuffer::new(CAPACITY);
        b.iter(|| {
            buffer.insert(black_box(&line));
        });
    });
}

fn buffer_copy(c: &mut Criterion) {
    let buffer = ChunkedBuffer::from_text(CAPACITY, &document(1_000_000));

    c.bench_function("buffer_copy_10k_mid_1m", |b| {
        b.iter(|| buffer.copy_range(black_box(500_000), black_box(510_000)));
    });
}

fn buffer_cut_paste(c: &mut Criterion) {
    let mut buffer = ChunkedBuffer::from_text(CAPACITY, &document(1_000_000));

    c.bench_function("buffer_cut_paste_10k_mid_1m", |b| {
        b.iter(|| {
            let cut = buffer.cut_range(black_box(400_000), black_box(410_000)).unwrap();
            buffer.paste_at(black_box(600_000), &cut).unwrap();
        });
    });
}

fn buffer_materialize(c: &mut Criterion) {
    let buffer = ChunkedBuffer::from_text(CAPACITY, &document(1_000_000));

    c.bench_function("buffer_materialize_1m", |b| {
        b.iter(|| black_box(buffer.materialize()));
    });
}

fn buffer_vs_string(c: &mut Criterion) {
    let mut group = c.benchmark_group("cut_paste_vs_string");

    for chars in [10_000, 100_000, 1_000_000] {
        let text = document(chars);
        let (start, end, at) = (chars / 4, chars / 4 + chars / 100, chars / 2);

        let mut buffer = ChunkedBuffer::from_text(CAPACITY, &text);
        group.bench_with_input(BenchmarkId::new("chunked", chars), &chars, |b, _| {
            b.iter(|| {
                let cut = buffer.cut_range(black_box(start), black_box(end)).unwrap();
                buffer.paste_at(black_box(at), &cut).unwrap();
            });
        });

        let mut plain = text.clone();
        group.bench_with_input(BenchmarkId::new("string", chars), &chars, |b, _| {
            b.iter(|| {
                let cut: String = plain.drain(black_box(start)..black_box(end)).collect();
                plain.insert_str(black_box(at), &cut);
            });
        });
    }

    group.finish();
}

fn buffer_stats(c: &mut Criterion) {
    let buffer = ChunkedBuffer::from_text(CAPACITY, &document(1_000_000));

    c.bench_function("buffer_stats_1m", |b| {
        b.iter(|| black_box(buffer.stats()));
    });
}

criterion_group!(
    benches,
    buffer_insert,
    buffer_copy,
    buffer_cut_paste,
    buffer_materialize,
    buffer_vs_string,
    buffer_stats,
);
criterion_main!(benches);
