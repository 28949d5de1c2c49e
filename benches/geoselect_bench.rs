//! Criterion benchmarks for fitness evaluation and full finder runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_geoselect::geo::{hull_area_km2, pairwise_distances, GeoPoint};
use u_geoselect::locations::{CandidateSet, DispersionFitness, FinderConfig, OptimalLocationsFinder};

/// Deterministic scatter over Europe-sized bounds.
fn candidates(n: usize) -> CandidateSet {
    CandidateSet::from_rows((0..n).map(|i| {
        let lat = 35.0 + ((i * 7919) % 3000) as f64 / 100.0;
        let lon = -10.0 + ((i * 104_729) % 4000) as f64 / 100.0;
        (lat, lon, format!("c{i}"))
    }))
    .expect("generated coordinates are in range")
}

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");

    for m in [5usize, 20, 50] {
        let points: Vec<GeoPoint> = candidates(m).iter().map(|l| l.point()).collect();
        group.bench_with_input(BenchmarkId::new("pairwise", m), &points, |b, pts| {
            b.iter(|| pairwise_distances(black_box(pts)))
        });
        group.bench_with_input(BenchmarkId::new("hull_area", m), &points, |b, pts| {
            b.iter(|| hull_area_km2(black_box(pts)))
        });
    }

    group.finish();
}

fn bench_fitness(c: &mut Criterion) {
    let mut group = c.benchmark_group("fitness");
    let set = candidates(1000);
    let fitness = DispersionFitness::new(&set);

    for k in [3usize, 10, 30] {
        let indices: Vec<usize> = (0..k).map(|i| i * 31).collect();
        group.bench_with_input(BenchmarkId::from_parameter(k), &indices, |b, idx| {
            b.iter(|| fitness.evaluate(black_box(idx)))
        });
    }

    group.finish();
}

fn bench_finder(c: &mut Criterion) {
    let mut group = c.benchmark_group("finder");
    group.sample_size(10);

    for n in [100usize, 1000] {
        let set = candidates(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &set, |b, set| {
            b.iter(|| {
                OptimalLocationsFinder::new(set, 8)
                    .with_config(FinderConfig::default().with_seed(42))
                    .find()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_geometry, bench_fitness, bench_finder);
criterion_main!(benches);
