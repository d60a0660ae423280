//! Layout benchmarks
//!
//! Column inference over block x-coordinates and overlap column assignment
//! for crowded days.

use calendify::layout::infer_day_bands;
use calendify::render::{assign_columns, Interval};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Deterministic pseudo-random sequence
fn lcg(seed: u64, count: usize) -> Vec<u64> {
    let mut s = seed;
    (0..count)
        .map(|_| {
            s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
            s >> 33
        })
        .collect()
}

/// X-coordinates scattered around five column centres
fn column_xs(count: usize) -> Vec<f32> {
    lcg(7, count)
        .into_iter()
        .enumerate()
        .map(|(i, r)| 100.0 + 200.0 * (i % 5) as f32 + (r % 40) as f32)
        .collect()
}

fn day_intervals(count: usize) -> Vec<Interval> {
    lcg(11, count)
        .into_iter()
        .map(|r| {
            let start = (r % 600) as i32;
            Interval::new(start, start + 50 + (r % 100) as i32)
        })
        .collect()
}

fn bench_infer_day_bands(c: &mut Criterion) {
    let mut group = c.benchmark_group("infer_day_bands");
    for &count in &[10usize, 50, 200] {
        let xs = column_xs(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &xs, |b, xs| {
            b.iter(|| infer_day_bands(black_box(xs)))
        });
    }
    group.finish();
}

fn bench_assign_columns(c: &mut Criterion) {
    let mut group = c.benchmark_group("assign_columns");
    for &count in &[5usize, 20, 80] {
        let intervals = day_intervals(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &intervals, |b, intervals| {
            b.iter(|| assign_columns(black_box(intervals)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_infer_day_bands, bench_assign_columns);
criterion_main!(benches);
