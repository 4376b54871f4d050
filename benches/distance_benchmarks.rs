//! Benchmarks for the edit distance engine.
//!
//! Tests various scenarios:
//! - String length variations (short, medium, long)
//! - Similarity patterns (identical, similar, different)
//! - Character sets (ASCII, Unicode)
//! - Common prefix/suffix stripping

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use levrank::distance::*;

fn generate_test_pairs() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        // (name, source, target)
        ("empty", "", ""),
        ("short_identical", "test", "test"),
        ("short_1edit", "test", "best"),
        ("short_different", "abc", "xyz"),
        ("medium_similar", "programming", "programing"),
        ("medium_different", "completely", "different"),
        (
            "long_similar",
            "The quick brown fox jumps over the lazy dog",
            "The quick brown fox jumped over the lazy dog",
        ),
        (
            "long_different",
            "Pack my box with five dozen liquor jugs",
            "How vexingly quick daft zebras jump",
        ),
        ("unicode_short", "café", "cafe"),
        ("unicode_mixed", "Hello 世界", "Hello World"),
        (
            "long_common_prefix",
            "this_is_a_very_long_common_prefix_abc",
            "this_is_a_very_long_common_prefix_xyz",
        ),
        (
            "long_common_suffix",
            "abc_this_is_a_very_long_common_suffix",
            "xyz_this_is_a_very_long_common_suffix",
        ),
    ]
}

fn bench_standard_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("standard_distance");

    for (name, source, target) in generate_test_pairs() {
        let size = source.len() + target.len();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(name),
            &(source, target),
            |b, &(s, t)| {
                b.iter(|| standard_distance(black_box(s), black_box(t)));
            },
        );
    }

    group.finish();
}

fn bench_char_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("char_distance");

    for (name, source, target) in generate_test_pairs() {
        let s: Vec<char> = source.chars().collect();
        let t: Vec<char> = target.chars().collect();

        group.bench_with_input(BenchmarkId::from_parameter(name), &(s, t), |b, (s, t)| {
            b.iter(|| char_distance(black_box(s), black_box(t)));
        });
    }

    group.finish();
}

fn bench_string_length_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("length_scaling");

    for len in [8, 32, 128, 512] {
        let source: String = "abcdefgh".chars().cycle().take(len).collect();
        let target: String = "hgfedcba".chars().cycle().take(len).collect();

        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, _| {
            b.iter(|| standard_distance(black_box(&source), black_box(&target)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_standard_distance,
    bench_char_distance,
    bench_string_length_scaling
);
criterion_main!(benches);
