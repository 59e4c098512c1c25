//! Criterion benchmarks for trajan-motion: Hurst estimation, tau-indexed MSD and gyration.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

use trajan_motion::{
    LagSet, TimedTrajectory, Trajectory, cumulative_gyration, estimate_hurst, jump_lengths,
    msd_by_tau,
};

fn make_walk(n: usize, dim: usize) -> Trajectory {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let mut pos = vec![0.0; dim];
    let mut coords = Vec::with_capacity(n * dim);
    for _ in 0..n {
        for p in &mut pos {
            *p += normal.sample(&mut rng);
        }
        coords.extend_from_slice(&pos);
    }
    Trajectory::new(dim, coords).unwrap()
}

fn bench_hurst(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_hurst");
    for &len in &[1_000usize, 10_000] {
        let series = make_walk(len, 1).into_inner();
        let lags = LagSet::range(2, 100).unwrap();
        group.bench_with_input(BenchmarkId::new("lags2_100", len), &(series, lags), |b, (s, l)| {
            b.iter(|| estimate_hurst(s, l).unwrap());
        });
    }
    group.finish();
}

fn bench_msd_by_tau(c: &mut Criterion) {
    let n = 1_000;
    let times: Vec<f64> = (0..n).map(|i| i as f64).collect();
    let timed = TimedTrajectory::new(times, make_walk(n, 3)).unwrap();

    c.bench_function("msd_by_tau_1000x3", |b| {
        b.iter(|| msd_by_tau(&timed, 1.0).unwrap());
    });
}

fn bench_gyration_and_jumps(c: &mut Criterion) {
    let walk = make_walk(100_000, 3);

    c.bench_function("cumulative_gyration_100k", |b| {
        b.iter(|| cumulative_gyration(walk.as_view(), None).unwrap());
    });
    c.bench_function("jump_lengths_100k", |b| {
        b.iter(|| jump_lengths(walk.as_view()));
    });
}

criterion_group!(benches, bench_hurst, bench_msd_by_tau, bench_gyration_and_jumps);
criterion_main!(benches);
