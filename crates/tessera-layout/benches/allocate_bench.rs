//! Benchmarks for breakpoint resolution and grid allocation.
//!
//! Run with: cargo bench -p tessera-layout --bench allocate_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tessera_layout::{BreakpointTable, SpanRow, allocate, presets};

fn bench_resolve(c: &mut Criterion) {
    let table = BreakpointTable::tailwind();
    c.bench_function("resolve/tailwind", |b| {
        b.iter(|| {
            for width in (0..2000).step_by(50) {
                black_box(table.resolve(black_box(width)));
            }
        })
    });
}

fn bench_allocate(c: &mut Criterion) {
    let rows: Vec<SpanRow> = (0..50)
        .map(|i| match i % 3 {
            0 => SpanRow::new([2, 2, 2]),
            1 => SpanRow::new([1, 4, 1]),
            _ => SpanRow::new([6]),
        })
        .collect::<Result<_, _>>()
        .expect("valid rows");

    let mut group = c.benchmark_group("allocate");
    for items in [10usize, 100, 1000] {
        group.throughput(Throughput::Elements(items as u64));
        group.bench_with_input(BenchmarkId::from_parameter(items), &items, |b, &n| {
            b.iter(|| black_box(allocate(black_box(&rows), 6, n)))
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let grid = presets::dashboard_grid().expect("preset is valid");
    c.bench_function("layout/dashboard_resize_sweep", |b| {
        b.iter(|| {
            for width in (320..2000).step_by(40) {
                black_box(grid.layout(black_box(width), 12));
            }
        })
    });
}

criterion_group!(benches, bench_resolve, bench_allocate, bench_layout);
criterion_main!(benches);
