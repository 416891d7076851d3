//! Benchmarks for contour tracing and path stitching.
//!
//! Run with: cargo bench --package isoline --bench extract_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;

use isoline::{extract_layer, extract_layers, spread_isovalues, IsoLayer, Point, Segment};
use scalar_field::ScalarField;

/// A smooth field of overlapping sine hills, normalized into 0..1.
fn smooth_field(rows: usize, cols: usize) -> ScalarField {
    ScalarField::from_fn(rows, cols, |r, c| {
        let fy = r as f64 / rows as f64;
        let fx = c as f64 / cols as f64;
        let v1 = (fx * std::f64::consts::PI * 4.0).sin();
        let v2 = (fy * std::f64::consts::PI * 4.0).sin();
        let v3 = ((fx + fy) * std::f64::consts::PI * 2.0).sin();
        0.5 + (v1 + v2 + v3) / 6.0
    })
    .unwrap()
}

/// The smooth field with per-sample noise, for many short contour runs.
fn noisy_field(rows: usize, cols: usize) -> ScalarField {
    let mut rng = rand::thread_rng();
    let base = smooth_field(rows, cols);
    let values = base
        .values()
        .iter()
        .map(|&v| v + rng.gen_range(-0.05..0.05))
        .collect();
    ScalarField::from_values(rows, cols, values).unwrap()
}

fn bench_extract_single_level(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_single_level");

    for size in [64usize, 128, 256] {
        let smooth = smooth_field(size, size);
        let noisy = noisy_field(size, size);

        group.throughput(Throughput::Elements((size * size) as u64));

        group.bench_with_input(
            BenchmarkId::new("smooth", format!("{size}x{size}")),
            &smooth,
            |b, field| {
                b.iter(|| extract_layer(black_box(field), black_box(0.5), 1e-5));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("noisy", format!("{size}x{size}")),
            &noisy,
            |b, field| {
                b.iter(|| extract_layer(black_box(field), black_box(0.5), 1e-5));
            },
        );
    }

    group.finish();
}

fn bench_extract_multi_level(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_multi_level");

    let field = smooth_field(128, 128);
    for levels in [2usize, 5, 10] {
        let isovalues = spread_isovalues(0.2, 0.8, levels);
        group.bench_with_input(
            BenchmarkId::new("levels", levels),
            &isovalues,
            |b, isovalues| {
                b.iter(|| extract_layers(black_box(&field), black_box(isovalues), 1e-5));
            },
        );
    }

    group.finish();
}

fn bench_stitching(c: &mut Criterion) {
    let mut group = c.benchmark_group("stitching");

    // One long chain: every segment extends the same path, exercising
    // the linear scan at its cheapest.
    for count in [100usize, 1000] {
        let chain: Vec<Segment> = (0..count)
            .map(|i| {
                Segment::new(
                    Point::new(i as f64, 0.0),
                    Point::new(i as f64 + 1.0, 0.0),
                )
            })
            .collect();
        group.bench_with_input(BenchmarkId::new("chain", count), &chain, |b, chain| {
            b.iter(|| {
                let mut layer = IsoLayer::new(0.5);
                for &s in chain {
                    layer.add_segment(black_box(s));
                }
                layer
            });
        });
    }

    // Many disjoint fragments: every insertion scans the whole
    // collection without matching, the worst case for the linear scan.
    for count in [100usize, 1000] {
        let scattered: Vec<Segment> = (0..count)
            .map(|i| {
                Segment::new(
                    Point::new(i as f64 * 10.0, 0.0),
                    Point::new(i as f64 * 10.0 + 1.0, 0.0),
                )
            })
            .collect();
        group.bench_with_input(
            BenchmarkId::new("scattered", count),
            &scattered,
            |b, scattered| {
                b.iter(|| {
                    let mut layer = IsoLayer::new(0.5);
                    for &s in scattered {
                        layer.add_segment(black_box(s));
                    }
                    layer
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_extract_single_level,
    bench_extract_multi_level,
    bench_stitching
);
criterion_main!(benches);
