//! Vector kernel benchmarks against plain scalar loops.
//!
//! Each group runs one operation over packed `xyzw` data of increasing size:
//!
//! - **scalar**: per-float loop using the standard library
//! - **kernel**: [`Vector4Batch::map_vectors`] on the active backend
//! - **parallel kernel**: [`Vector4Batch::par_map_vectors`] (rayon above the threshold)
//!
//! The active backend is printed once so reports from different machines can be told
//! apart.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use simdly_vec4::batch::Vector4Batch;
use simdly_vec4::vector4f::*;
use simdly_vec4::{backend_name, Vector4f, DEFAULT_NORMALIZE_THRESHOLD};

// ================================================================================================
// BENCHMARK CONFIGURATION
// ================================================================================================

/// Float counts spanning the cache hierarchy.
const VECTOR_SIZES: &[usize] = &[
    1_024,     // 4 KiB - L1 cache
    16_384,    // 64 KiB - L1→L2 transition
    262_144,   // 1 MiB - parallel threshold
    4_194_304, // 16 MiB - main memory
];

fn generate_test_data(len: usize, range: f32) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.random_range(-range..=range)).collect()
}

fn format_size(size: usize) -> String {
    let bytes = size * std::mem::size_of::<f32>();
    if bytes >= 1 << 20 {
        format!("{} MiB", bytes >> 20)
    } else {
        format!("{} KiB", bytes >> 10)
    }
}

// ================================================================================================
// BENCHMARK IMPLEMENTATIONS
// ================================================================================================

fn bench_map<S, K>(c: &mut Criterion, name: &str, range: f32, scalar: S, kernel: K)
where
    S: Fn(f32) -> f32 + Copy,
    K: Fn(Vector4f) -> Vector4f + Send + Sync + Copy,
{
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group(format!("{name} {}", format_size(size)));
        group.throughput(Throughput::Bytes((size * std::mem::size_of::<f32>()) as u64));

        let input = generate_test_data(size, range);

        group.bench_with_input(BenchmarkId::new("scalar", size), &input, |b, input| {
            let mut data = input.clone();
            b.iter(|| {
                for value in data.iter_mut() {
                    *value = scalar(black_box(*value));
                }
                black_box(&data);
            });
        });

        group.bench_with_input(BenchmarkId::new("kernel", size), &input, |b, input| {
            let mut data = input.clone();
            b.iter(|| {
                let _ = black_box(data.map_vectors(kernel));
            });
        });

        group.bench_with_input(
            BenchmarkId::new("parallel kernel", size),
            &input,
            |b, input| {
                let mut data = input.clone();
                b.iter(|| {
                    let _ = black_box(data.par_map_vectors(kernel));
                });
            },
        );

        group.finish();
    }
}

fn benchmark_sin(c: &mut Criterion) {
    bench_map(c, "Sine", 10.0, f32::sin, vector_sin);
}

fn benchmark_atan(c: &mut Criterion) {
    bench_map(c, "Arctangent", 100.0, f32::atan, vector_atan);
}

fn benchmark_round_bankers(c: &mut Criterion) {
    bench_map(c, "Round half even", 1.0e4, f32::round_ties_even, vector_round_bankers);
}

fn benchmark_reciprocal(c: &mut Criterion) {
    bench_map(c, "Reciprocal", 1.0e3, f32::recip, vector_reciprocal);
}

fn benchmark_normalize3(c: &mut Criterion) {
    let fallback = vector_zero();
    let mut group = c.benchmark_group("Normalize3");

    for &size in VECTOR_SIZES {
        group.throughput(Throughput::Bytes((size * std::mem::size_of::<f32>()) as u64));
        let input = generate_test_data(size, 100.0);

        group.bench_with_input(BenchmarkId::new("scalar", size), &input, |b, input| {
            let mut data = input.clone();
            b.iter(|| {
                for record in data.chunks_exact_mut(4) {
                    let length_squared =
                        record[0] * record[0] + record[1] * record[1] + record[2] * record[2];
                    if length_squared >= DEFAULT_NORMALIZE_THRESHOLD {
                        let scale = 1.0 / length_squared.sqrt();
                        record.iter_mut().for_each(|value| *value *= scale);
                    } else {
                        record.fill(0.0);
                    }
                }
                black_box(&data);
            });
        });

        group.bench_with_input(BenchmarkId::new("kernel", size), &input, |b, input| {
            let mut data = input.clone();
            b.iter(|| {
                let _ = black_box(data.par_map_vectors(|v| {
                    vector_normalize3(v, fallback, DEFAULT_NORMALIZE_THRESHOLD)
                }));
            });
        });
    }

    group.finish();
}

fn benchmark_mix_and_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("Mix and dot");
    let a = vector_set(1.0, 2.0, 3.0, 4.0);
    let b = vector_set(5.0, 6.0, 7.0, 8.0);

    group.bench_function("mix XAYB", |bencher| {
        bencher.iter(|| simdly_vec4::vector_mix!(black_box(a), black_box(b), X, A, Y, B))
    });
    group.bench_function("mix WCXX", |bencher| {
        bencher.iter(|| simdly_vec4::vector_mix!(black_box(a), black_box(b), W, C, X, X))
    });
    group.bench_function("dot", |bencher| {
        bencher.iter(|| vector_dot(black_box(a), black_box(b)))
    });
    group.bench_function("cross3", |bencher| {
        bencher.iter(|| vector_cross3(black_box(a), black_box(b)))
    });

    group.finish();
}

fn print_backend(_: &mut Criterion) {
    println!("Vector kernel backend: {}", backend_name());
}

criterion_group!(
    benches,
    print_backend,
    benchmark_sin,
    benchmark_atan,
    benchmark_round_bankers,
    benchmark_reciprocal,
    benchmark_normalize3,
    benchmark_mix_and_dot
);
criterion_main!(benches);
