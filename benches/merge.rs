use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use seqmerge::boundary::{decode, encode};
use seqmerge::{merge, merge_nested, sort_by_reference, KeyExtractor, Value};

fn interleaved(size: usize) -> (Vec<u32>, Vec<u32>) {
    let size = u32::try_from(size).unwrap_or(u32::MAX);
    let source: Vec<u32> = (0..size).filter(|i| i % 3 != 1).collect();
    let update: Vec<u32> = (0..size).filter(|i| i % 3 != 2).rev().collect();
    (source, update)
}

fn grouped(size: usize, width: usize) -> Vec<Value> {
    (0..size)
        .map(|g| Value::Array((0..width).map(|i| Value::from(g * width + i)).collect()))
        .collect()
}

fn benchmark_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");

    for size in [10, 100, 1000, 10000].iter() {
        let (source, update) = interleaved(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| merge(black_box(&source), black_box(&update)))
        });
    }
    group.finish();
}

fn benchmark_merge_values(c: &mut Criterion) {
    let (source, update) = interleaved(1000);
    let source: Vec<Value> = source.into_iter().map(Value::from).collect();
    let update: Vec<Value> = update.into_iter().map(Value::from).collect();

    c.bench_function("merge_values_1000", |b| {
        b.iter(|| merge(black_box(&source), black_box(&update)))
    });
}

fn benchmark_merge_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_nested");

    for size in [10, 100, 1000].iter() {
        let source = grouped(*size, 4);
        let update = grouped(*size + *size / 2, 3);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| merge_nested(black_box(&source), black_box(&update)))
        });
    }
    group.finish();
}

fn benchmark_boundary_roundtrip(c: &mut Criterion) {
    let data = grouped(1000, 5);

    c.bench_function("boundary_roundtrip_1000", |b| {
        b.iter(|| decode(encode(black_box(&data))))
    });
}

fn benchmark_sort_by_reference(c: &mut Criterion) {
    let reference: Vec<Value> = (0..1000usize).map(Value::from).collect();
    let items: Vec<Value> = (0..1000usize).rev().map(Value::from).collect();

    c.bench_function("sort_by_reference_1000", |b| {
        b.iter(|| {
            sort_by_reference(
                black_box(&items),
                black_box(&reference),
                &KeyExtractor::Identity,
            )
        })
    });
}

criterion_group!(
    benches,
    benchmark_merge,
    benchmark_merge_values,
    benchmark_merge_nested,
    benchmark_boundary_roundtrip,
    benchmark_sort_by_reference
);
criterion_main!(benches);
