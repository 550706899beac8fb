//! Benchmarks for version parsing, comparison, and formatting
//!
//! Copyright (c) 2025 Versio Team
//! Licensed under the Apache-2.0 license

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use versio_core::{parse, Version};

const INPUTS: &[&str] = &[
    "1",
    "1.2.3",
    "10.20.30",
    "1.0.0-alpha",
    "1.0.0-alpha.beta.rc.1",
    "1.2.3+build.2023.10.05",
    "1.2.3-rc.1+build.5",
];

fn bench_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for input in INPUTS {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| parse(black_box(input)).unwrap());
        });
    }
    group.finish();
}

fn bench_parse_errors(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_errors");
    for input in ["", "1.2.3.4", "1.0.0-~.~", "1.0.0+A+AA"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), &input, |b, input| {
            b.iter(|| parse(black_box(input)).unwrap_err());
        });
    }
    group.finish();
}

fn bench_precedence(c: &mut Criterion) {
    let lhs: Version = "1.0.0-alpha.beta.rc.11+build.5".parse().unwrap();
    let rhs: Version = "1.0.0-alpha.beta.rc.2+build.9".parse().unwrap();

    c.bench_function("precedence", |b| {
        b.iter(|| black_box(&lhs).precedence(black_box(&rhs)));
    });
}

fn bench_formatting(c: &mut Criterion) {
    let version: Version = "1.2.3-rc.1+build.5".parse().unwrap();

    c.bench_function("format", |b| {
        b.iter(|| black_box(&version).to_string());
    });
}

criterion_group!(
    benches,
    bench_parsing,
    bench_parse_errors,
    bench_precedence,
    bench_formatting
);

criterion_main!(benches);
