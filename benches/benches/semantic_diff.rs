//! Benchmarks for the semantic diff pipelines
//!
//! Performance-critical paths:
//! - `build_diff_model`: base diff, shifts and section tracking
//! - `build_effective_diff_model`: the above plus access-list reconciliation
//! - `perform_semantic_shifts`: shifting on an already built model

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use switchdiff_kernel::{
    SemanticDiffBuilder, build_diff_model, build_effective_diff_model, perform_semantic_shifts,
};

/// A configuration with `sections` access lists of eight rules each.
fn generate_config(sections: usize, variant: usize) -> String {
    let mut text = String::from("hostname core-sw1\n!\n");
    for section in 0..sections {
        text.push_str(&format!("ip access-list extended acl_vlan{section}\n"));
        text.push_str("  remark Allow DNS lookups\n");
        for rule in 0..8 {
            let host = (rule + variant * (section % 3)) % 8;
            text.push_str(&format!(
                "  permit udp 172.20.{section}.0/24 host 10.0.0.{host} eq dns\n"
            ));
        }
        text.push_str("  deny ip any any log\n!\n");
    }
    text
}

fn bench_build_diff_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("semantic_diff/build_diff_model");

    for sections in [10usize, 100, 500] {
        let old = generate_config(sections, 0);
        let new = generate_config(sections, 1);

        group.throughput(Throughput::Bytes((old.len() + new.len()) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{sections}_sections")),
            &sections,
            |b, _| b.iter(|| build_diff_model(black_box(&old), black_box(&new))),
        );
    }

    group.finish();
}

fn bench_build_effective_diff_model(c: &mut Criterion) {
    let mut group = c.benchmark_group("semantic_diff/build_effective_diff_model");

    for sections in [10usize, 100, 500] {
        let old = generate_config(sections, 0);
        let new = generate_config(sections, 1);

        group.throughput(Throughput::Bytes((old.len() + new.len()) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{sections}_sections")),
            &sections,
            |b, _| b.iter(|| build_effective_diff_model(black_box(&old), black_box(&new), true)),
        );
    }

    group.finish();
}

fn bench_inserted_sections(c: &mut Criterion) {
    let mut group = c.benchmark_group("semantic_diff/inserted_sections");
    let builder = SemanticDiffBuilder::new();

    // Appending identical sections is the worst case for shift ambiguity
    for inserted in [1usize, 10, 50] {
        let old = generate_config(20, 0);
        let new = format!("{old}{}", generate_config(inserted, 0));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{inserted}_inserted")),
            &inserted,
            |b, _| b.iter(|| builder.build_diff_model(black_box(&old), black_box(&new))),
        );
    }

    group.finish();
}

fn bench_perform_semantic_shifts(c: &mut Criterion) {
    let mut group = c.benchmark_group("semantic_diff/perform_semantic_shifts");

    for sections in [10usize, 100] {
        let old = generate_config(sections, 0);
        let new = generate_config(sections, 1);
        let model = build_diff_model(&old, &new);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{sections}_sections")),
            &model,
            |b, model| {
                b.iter(|| {
                    let mut model = model.clone();
                    black_box(perform_semantic_shifts(&mut model))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build_diff_model,
    bench_build_effective_diff_model,
    bench_inserted_sections,
    bench_perform_semantic_shifts
);
criterion_main!(benches);
