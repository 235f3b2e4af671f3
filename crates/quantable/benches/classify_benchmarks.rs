//! Benchmarks for column classification and bucketing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quantable::{bucketize, ColumnClassifier, RawValue};

fn numeric_column(rows: usize) -> Vec<RawValue> {
    (0..rows)
        .map(|i| RawValue::from(format!("{}", (i * 37) % 10_000)))
        .collect()
}

fn categorical_column(rows: usize) -> Vec<RawValue> {
    let pool = ["alpha", "beta", "gamma", "delta"];
    (0..rows)
        .map(|i| RawValue::from(pool[i % pool.len()]))
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let classifier = ColumnClassifier::new();
    let numeric = numeric_column(10_000);
    let categorical = categorical_column(10_000);

    c.bench_function("classify_numeric_10k", |b| {
        b.iter(|| classifier.classify(black_box(&numeric)))
    });

    c.bench_function("classify_categorical_10k", |b| {
        b.iter(|| classifier.classify(black_box(&categorical)))
    });
}

fn bench_bucketize(c: &mut Criterion) {
    let numbers: Vec<f64> = (0..10_000).map(|i| (i % 997) as f64).collect();
    let boundaries: Vec<f64> = (0..=10).map(|i| i as f64 * 100.0).collect();

    c.bench_function("bucketize_10k", |b| {
        b.iter(|| bucketize(black_box(&numbers), black_box(&boundaries), "x"))
    });
}

criterion_group!(benches, bench_classify, bench_bucketize);
criterion_main!(benches);
