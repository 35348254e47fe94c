//! Criterion benchmarks for the search engines.
//!
//! Uses random uniform instances so timings depend only on the number of
//! cities and the engine parameters.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use tsp_localsearch::hc::{HcConfig, HcMode, HillClimbing};
use tsp_localsearch::multistart::{MultiStartConfig, MultiStartHillClimbing};
use tsp_localsearch::neighborhood::Neighborhood;
use tsp_localsearch::random::create_rng;
use tsp_localsearch::sa::{SaConfig, SimulatedAnnealing};
use tsp_localsearch::tour::{random_tour, DistanceMatrix, Tour};

fn uniform_instance(n: usize, seed: u64) -> (DistanceMatrix, Tour) {
    let mut rng = create_rng(seed);
    let coords: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.random_range(0.0..1000.0), rng.random_range(0.0..1000.0)))
        .collect();
    let start = random_tour(n, &mut rng);
    (DistanceMatrix::from_coordinates(&coords), start)
}

fn bench_neighborhoods(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_neighbors");

    for &n in &[20usize, 52, 100] {
        let (_, tour) = uniform_instance(n, 1);
        for family in [Neighborhood::Swap, Neighborhood::TwoOpt] {
            group.bench_with_input(BenchmarkId::new(family.name(), n), &tour, |b, t| {
                b.iter(|| black_box(family.all_neighbors(black_box(t))))
            });
        }
    }
    group.finish();
}

fn bench_hill_climbing(c: &mut Criterion) {
    let mut group = c.benchmark_group("hill_climbing");
    group.sample_size(10);

    for &n in &[20usize, 52] {
        let (matrix, start) = uniform_instance(n, 2);
        for mode in [HcMode::First, HcMode::Best] {
            group.bench_with_input(
                BenchmarkId::new(mode.name(), n),
                &(matrix.clone(), start.clone()),
                |b, (m, s)| {
                    b.iter(|| {
                        let hc = HillClimbing::new(m, s.clone(), HcConfig::new(mode)).unwrap();
                        black_box(hc.run())
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_multi_start(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_start");
    group.sample_size(10);

    let (matrix, _) = uniform_instance(30, 3);
    let config = MultiStartConfig::default().with_num_starts(5).with_seed(42);
    group.bench_function("n30_s5", |b| {
        b.iter(|| {
            let ms = MultiStartHillClimbing::new(black_box(&matrix), config.clone()).unwrap();
            black_box(ms.run())
        })
    });
    group.finish();
}

fn bench_simulated_annealing(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulated_annealing");
    group.sample_size(10);

    for &n in &[20usize, 52, 100] {
        let (matrix, start) = uniform_instance(n, 4);
        let config = SaConfig::default().with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(matrix, start, config),
            |b, (m, s, c)| {
                b.iter(|| {
                    let sa = SimulatedAnnealing::new(m, s.clone(), c.clone()).unwrap();
                    black_box(sa.run())
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_neighborhoods,
    bench_hill_climbing,
    bench_multi_start,
    bench_simulated_annealing
);
criterion_main!(benches);
