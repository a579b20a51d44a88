//! Benchmarks for the base line diff
//!
//! Performance-critical paths:
//! - `MyersDiff::diff`: shortest edit script on raw lines
//! - `BaseDiffer::diff`: chunking, key normalization and record building

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use switchdiff_kernel::{BaseDiffer, Chunking, DiffAlgorithm, DiffOptions, MyersDiff};

fn generate_lines(count: usize, stride: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            if stride > 0 && i % stride == 0 {
                format!("  permit tcp any host 10.1.{}.{} eq 22", i / 256, i % 256)
            } else {
                format!("  permit tcp any host 10.0.{}.{} eq 22", i / 256, i % 256)
            }
        })
        .collect()
}

fn bench_myers_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("myers/diff");
    let algorithm = MyersDiff::new();

    for (count, stride) in [(100usize, 10usize), (1000, 10), (1000, 100), (5000, 500)] {
        let base = generate_lines(count, 0);
        let target = generate_lines(count, stride);
        let base: Vec<&str> = base.iter().map(String::as_str).collect();
        let target: Vec<&str> = target.iter().map(String::as_str).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{count}_lines_every_{stride}")),
            &count,
            |b, _| b.iter(|| algorithm.diff(black_box(&base), black_box(&target))),
        );
    }

    group.finish();
}

fn bench_base_differ(c: &mut Criterion) {
    let mut group = c.benchmark_group("myers/base_differ");
    let old = generate_lines(1000, 0).join("\n");
    let new = generate_lines(1000, 50).join("\n");

    for chunking in [Chunking::Lines, Chunking::SectionPreserving] {
        let differ = BaseDiffer::new(
            MyersDiff::new(),
            DiffOptions {
                chunking,
                ..DiffOptions::default()
            },
        );

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{chunking:?}")),
            &chunking,
            |b, _| b.iter(|| differ.diff(black_box(&old), black_box(&new))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_myers_diff, bench_base_differ);
criterion_main!(benches);
