//! Criterion benchmarks for the GDP evaluator and the NSGA-II loop.
//!
//! Instances are synthetic: points spread on a plane with Euclidean
//! distances, so timings depend only on size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gdp_nsga2::gdp::{GdpProblem, Instance};
use gdp_nsga2::nsga2::ranking::rank_population;
use gdp_nsga2::nsga2::{operators, Individual, MoProblem, Nsga2Config, Nsga2Runner};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ===========================================================================
// Synthetic instances
// ===========================================================================

fn plane_instance(n: usize, seed: u64) -> Instance {
    let mut rng = StdRng::seed_from_u64(seed);
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect();
    let distances = points
        .iter()
        .map(|a| {
            points
                .iter()
                .map(|b| ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt())
                .collect()
        })
        .collect();
    let costs = (0..n).map(|_| rng.random_range(1..=10)).collect();
    let capacities = (0..n).map(|_| rng.random_range(1..=10)).collect();
    Instance::new(distances, costs, capacities, 5 * n as u64 / 4, n as u64).expect("valid synthetic instance")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gdp_evaluate");

    for &n in &[50usize, 150, 500] {
        let instance = plane_instance(n, 42);
        let mut rng = StdRng::seed_from_u64(7);
        let chromosome = operators::random_sampling(n, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(instance, chromosome), |b, (inst, ch)| {
            let problem = GdpProblem::new(inst);
            b.iter(|| black_box(problem.evaluate(black_box(ch))))
        });
    }
    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_population");
    group.sample_size(20);

    for &pool_size in &[100usize, 200, 400] {
        let instance = plane_instance(50, 42);
        let problem = GdpProblem::new(&instance);
        let mut rng = StdRng::seed_from_u64(7);
        let pool: Vec<_> = (0..pool_size)
            .map(|_| {
                let ch = operators::random_sampling(50, &mut rng);
                let e = problem.evaluate(&ch);
                Individual::new(ch, e)
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(pool_size), &pool, |b, pool| {
            b.iter(|| {
                let mut pool = pool.clone();
                black_box(rank_population(&mut pool))
            })
        });
    }
    group.finish();
}

fn bench_nsga2_gdp(c: &mut Criterion) {
    let mut group = c.benchmark_group("nsga2_gdp");
    group.sample_size(10);

    for (n, pop, gen) in [(50usize, 50usize, 50usize), (100, 100, 30), (150, 100, 20)] {
        let instance = plane_instance(n, 42);
        let config = Nsga2Config {
            population_size: pop,
            generations: gen,
            seed: Some(42),
            ..Nsga2Config::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", n, pop, gen), n),
            &(instance, config),
            |b, (inst, cfg)| {
                let problem = GdpProblem::new(inst);
                b.iter(|| {
                    let result = Nsga2Runner::run(black_box(&problem), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_rank, bench_nsga2_gdp);
criterion_main!(benches);
