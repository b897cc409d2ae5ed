use std::collections::VecDeque;
use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{
    apply_large_runtime_config, apply_medium_runtime_config, apply_small_runtime_config,
    default_rng, nearly_sorted_u32s, random_permutation, random_u32s,
};
use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId, Criterion, criterion_group, criterion_main};
use merge_insertion::{SortAlgorithm, SortContext, algorithm_name, all_algorithms, sort_seq};
use rand::rngs::StdRng;

const SIZES: [usize; 4] = [256, 1024, 4096, 16384];

#[derive(Clone, Copy)]
enum Distribution {
    RandomUniform,
    RandomPermutation,
    NearlySorted1pctSwaps,
}

impl Distribution {
    fn label(self) -> &'static str {
        match self {
            Self::RandomUniform => "random_uniform",
            Self::RandomPermutation => "random_permutation",
            Self::NearlySorted1pctSwaps => "nearly_sorted_1pct_swaps",
        }
    }

    fn generate(self, rng: &mut StdRng, size: usize) -> Vec<u32> {
        match self {
            Self::RandomUniform => random_u32s(rng, size),
            Self::RandomPermutation => random_permutation(rng, size),
            Self::NearlySorted1pctSwaps => nearly_sorted_u32s(rng, size),
        }
    }
}

const DISTRIBUTIONS: [Distribution; 3] = [
    Distribution::RandomUniform,
    Distribution::RandomPermutation,
    Distribution::NearlySorted1pctSwaps,
];

// The quadratic baselines are test/count references, not benchmark targets.
#[inline]
fn is_benchmark_target(algo: SortAlgorithm) -> bool {
    !matches!(
        algo,
        SortAlgorithm::InsertionSort | SortAlgorithm::BinaryInsertionSort
    )
}

fn apply_runtime<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    if size <= 1024 {
        apply_small_runtime_config(group);
    } else if size <= 4096 {
        apply_medium_runtime_config(group);
    } else {
        apply_large_runtime_config(group);
    }
}

fn bench_sort(c: &mut Criterion) {
    for &dist in &DISTRIBUTIONS {
        bench_vec_track(c, dist);
        bench_deque_track(c, dist);
    }
}

fn bench_vec_track(c: &mut Criterion, dist: Distribution) {
    let mut group = c.benchmark_group(format!("sort_u32/vec/{}", dist.label()));

    for &algo in all_algorithms() {
        if !is_benchmark_target(algo) {
            continue;
        }
        for &size in &SIZES {
            apply_runtime(&mut group, size);
            let mut rng = default_rng();
            let base = dist.generate(&mut rng, size);

            group.bench_function(BenchmarkId::new(algorithm_name(algo), size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    let mut ctx = SortContext::default();
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = Instant::now();
                        sort_seq(algo, &mut data, &mut ctx);
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }
    }

    for &size in &SIZES {
        apply_runtime(&mut group, size);
        let mut rng = default_rng();
        let base = dist.generate(&mut rng, size);

        group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let mut data = base.clone();
                    let start = Instant::now();
                    data.sort_unstable();
                    total += start.elapsed();
                    black_box(&data);
                }
                total
            });
        });
    }

    group.finish();
}

fn bench_deque_track(c: &mut Criterion, dist: Distribution) {
    let mut group = c.benchmark_group(format!("sort_u32/deque/{}", dist.label()));

    for &algo in all_algorithms() {
        if !is_benchmark_target(algo) {
            continue;
        }
        for &size in &SIZES {
            apply_runtime(&mut group, size);
            let mut rng = default_rng();
            let base: VecDeque<u32> = dist.generate(&mut rng, size).into();

            group.bench_function(BenchmarkId::new(algorithm_name(algo), size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    let mut ctx = SortContext::default();
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = Instant::now();
                        sort_seq(algo, &mut data, &mut ctx);
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }
    }

    for &size in &SIZES {
        apply_runtime(&mut group, size);
        let mut rng = default_rng();
        let base: VecDeque<u32> = dist.generate(&mut rng, size).into();

        group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
            bencher.iter_custom(|iters| {
                let mut total = Duration::ZERO;
                for _ in 0..iters {
                    let mut data = base.clone();
                    let start = Instant::now();
                    data.make_contiguous().sort_unstable();
                    total += start.elapsed();
                    black_box(&data);
                }
                total
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
