//! Industry-level partition benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 1M elements)
//! - Predicate selectivity (1% to 99% matching)
//! - Copying splits (allocating and preallocated)
//! - Boundary queries on partitioned data
//! - Data patterns (ascending, descending, alternating, rare matches)
//!
//! For sequential execution, use `FASTCLEAVE_BACKEND=seq cargo bench`.
//! For multi-core execution, use `FASTCLEAVE_BACKEND=par cargo bench`.

use cleave::prelude::Partition;
use criterion::{
    BatchSize, Bencher, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main,
};
use fastCleave::prelude::*;
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTCLEAVE_BACKEND").ok().as_deref() {
        Some("seq") | Some("serial") => (false, "seq"),
        Some("par") | Some("parallel") | _ => (true, "par"),
    }
}

/// Time an in-place partition, rebuilding the input for every iteration.
fn run_stable_partition<T, B, P>(b: &mut Bencher<'_>, source: &[T], backend: B, pred: P)
where
    T: Clone + Sync,
    B: Partition,
    P: Fn(&T) -> bool + Sync + Send + Copy,
{
    let partitioner = Cleave::new().backend(backend).build().unwrap();
    b.iter_batched(
        || source.to_vec(),
        |mut values| {
            partitioner.stable_partition(&mut values, pred).unwrap();
            values
        },
        BatchSize::LargeInput,
    );
}

/// Time the allocating copy split.
fn run_partition_copy<B: Partition>(b: &mut Bencher<'_>, source: &[i64], backend: B) {
    let partitioner = Cleave::new().backend(backend).build().unwrap();
    b.iter(|| {
        partitioner
            .stable_partition_copy(black_box(source), |v| *v < 500)
            .unwrap()
    });
}

/// Time the copy split into caller-provided buffers.
fn run_copy_into<B: Partition>(
    b: &mut Bencher<'_>,
    source: &[i64],
    out_true: &mut [i64],
    out_false: &mut [i64],
    backend: B,
) {
    let partitioner = Cleave::new().backend(backend).build().unwrap();
    b.iter(|| {
        partitioner
            .stable_partition_copy_into(black_box(source), out_true, out_false, |v| *v < 500)
            .unwrap()
    });
}

/// Time the boundary query on already partitioned input.
fn run_partition_point<B: Partition>(b: &mut Bencher<'_>, source: &[i64], backend: B) {
    let partitioner = Cleave::new().backend(backend).build().unwrap();
    b.iter(|| {
        partitioner
            .partition_point(black_box(source), |v| *v < 500)
            .unwrap()
    });
}

/// Time the partitionedness check.
fn run_is_partitioned<B: Partition>(b: &mut Bencher<'_>, source: &[i64], backend: B) {
    let partitioner = Cleave::new().backend(backend).build().unwrap();
    b.iter(|| partitioner.is_partitioned(black_box(source), |v| *v < 500));
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate uniformly distributed integers in 0..1000.
fn generate_uniform_values(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(0, 1_000).unwrap();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Generate standard normal floats.
fn generate_normal_values(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(0.0, 1.0).unwrap();

    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Generate values where matches are rare (5% of elements are negative).
fn generate_rare_match_values(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(0, 1_000).unwrap();

    let mut values: Vec<i64> = (0..size).map(|_| dist.sample(&mut rng)).collect();

    // Flip 5% of elements to the matching side
    let n_matches = size / 20;
    for _ in 0..n_matches {
        let idx = rng.random_range(0..size);
        values[idx] = -values[idx] - 1;
    }
    values
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(50);

    for size in [1_000, 10_000, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(size as u64));

        let values = generate_uniform_values(size, 42);

        group.bench_with_input(BenchmarkId::new("stable_partition", size), &size, |b, _| {
            if use_parallel {
                run_stable_partition(b, &values, Par, |v| v % 2 == 0);
            } else {
                run_stable_partition(b, &values, Seq, |v| v % 2 == 0);
            }
        });
    }
    group.finish();
}

fn bench_selectivity(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("selectivity_{}", mode_name));
    group.sample_size(100);

    let size = 100_000;
    let values = generate_uniform_values(size, 42);

    for selectivity in [0.01, 0.1, 0.5, 0.9, 0.99] {
        // Values are uniform in 0..1000, so the threshold sets the match rate
        let threshold = (1_000.0 * selectivity) as i64;

        group.bench_with_input(
            BenchmarkId::new("stable_partition", selectivity),
            &threshold,
            |b, &threshold| {
                if use_parallel {
                    run_stable_partition(b, &values, Par, move |v| *v < threshold);
                } else {
                    run_stable_partition(b, &values, Seq, move |v| *v < threshold);
                }
            },
        );
    }
    group.finish();
}

fn bench_copying(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("copying_{}", mode_name));
    group.sample_size(100);

    for size in [10_000, 100_000] {
        let values = generate_uniform_values(size, 42);

        group.bench_with_input(BenchmarkId::new("allocating", size), &size, |b, _| {
            if use_parallel {
                run_partition_copy(b, &values, Par);
            } else {
                run_partition_copy(b, &values, Seq);
            }
        });

        let mut out_true = vec![0i64; size];
        let mut out_false = vec![0i64; size];
        group.bench_with_input(BenchmarkId::new("preallocated", size), &size, |b, _| {
            if use_parallel {
                run_copy_into(b, &values, &mut out_true, &mut out_false, Par);
            } else {
                run_copy_into(b, &values, &mut out_true, &mut out_false, Seq);
            }
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("queries_{}", mode_name));
    group.sample_size(100);

    for size in [10_000, 1_000_000] {
        // Partition up front so the queries see valid input
        let mut values = generate_uniform_values(size, 42);
        Cleave::new()
            .backend(Seq)
            .build()
            .unwrap()
            .stable_partition(&mut values, |v| *v < 500)
            .unwrap();

        group.bench_with_input(BenchmarkId::new("partition_point", size), &size, |b, _| {
            if use_parallel {
                run_partition_point(b, &values, Par);
            } else {
                run_partition_point(b, &values, Seq);
            }
        });

        group.bench_with_input(BenchmarkId::new("is_partitioned", size), &size, |b, _| {
            if use_parallel {
                run_is_partitioned(b, &values, Par);
            } else {
                run_is_partitioned(b, &values, Seq);
            }
        });
    }
    group.finish();
}

fn bench_data_patterns(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("patterns_{}", mode_name));
    group.sample_size(50);

    let size = 100_000;
    let half = (size / 2) as i64;

    // Already partitioned: nothing moves
    let ascending: Vec<i64> = (0..size as i64).collect();
    group.bench_function("ascending", |b| {
        if use_parallel {
            run_stable_partition(b, &ascending, Par, move |v| *v < half);
        } else {
            run_stable_partition(b, &ascending, Seq, move |v| *v < half);
        }
    });

    // Fully reversed: every element moves
    let descending: Vec<i64> = (0..size as i64).rev().collect();
    group.bench_function("descending", |b| {
        if use_parallel {
            run_stable_partition(b, &descending, Par, move |v| *v < half);
        } else {
            run_stable_partition(b, &descending, Seq, move |v| *v < half);
        }
    });

    // Alternating matches: maximal interleaving
    let alternating: Vec<i64> = (0..size as i64).map(|i| i % 2).collect();
    group.bench_function("alternating", |b| {
        if use_parallel {
            run_stable_partition(b, &alternating, Par, |v| *v == 0);
        } else {
            run_stable_partition(b, &alternating, Seq, |v| *v == 0);
        }
    });

    // Rare matches: 5% of elements on the matching side
    let rare = generate_rare_match_values(size, 42);
    group.bench_function("rare_matches", |b| {
        if use_parallel {
            run_stable_partition(b, &rare, Par, |v| *v < 0);
        } else {
            run_stable_partition(b, &rare, Seq, |v| *v < 0);
        }
    });

    // Floating point elements
    let floats = generate_normal_values(size, 42);
    group.bench_function("normal_floats", |b| {
        if use_parallel {
            run_stable_partition(b, &floats, Par, |v| *v > 0.0);
        } else {
            run_stable_partition(b, &floats, Seq, |v| *v > 0.0);
        }
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_selectivity,
    bench_copying,
    bench_queries,
    bench_data_patterns,
);

criterion_main!(benches);
