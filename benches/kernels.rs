use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use matbench::Parallelism;
use matbench::blas::matmul_reference;
use matbench::kernels::sum::{sum, sum_scalar};
use matbench::matrix::flipped::{matmul_flipped, matmul_flipped_simd};
use matbench::matrix::naive::matmul_naive;
use matbench::matrix::random::{input_rng, random_matrix, random_vec};
use matbench::matrix::transpose::transposed;
use matbench::threaded::FlippedSimdPool;

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");
    group.sample_size(10);

    let mut rng = input_rng(Some(0));
    let half = FlippedSimdPool::new(Parallelism::Divisor(2)).unwrap();

    for n in [128, 256, 512] {
        let a = random_matrix(&mut rng, n);
        let b = random_matrix(&mut rng, n);
        let bt = transposed(&b, n);
        let mut out = vec![0.0f32; n * n];

        group.throughput(Throughput::Elements((2 * n * n * n) as u64));

        group.bench_with_input(BenchmarkId::new("reference", n), &n, |bencher, &n| {
            bencher.iter(|| matmul_reference(black_box(&a), black_box(&b), &mut out, n))
        });
        group.bench_with_input(BenchmarkId::new("naive", n), &n, |bencher, &n| {
            bencher.iter(|| matmul_naive(black_box(&a), black_box(&b), &mut out, n))
        });
        group.bench_with_input(BenchmarkId::new("flipped", n), &n, |bencher, &n| {
            bencher.iter(|| matmul_flipped(black_box(&a), black_box(&bt), &mut out, n))
        });
        group.bench_with_input(BenchmarkId::new("flipped_simd", n), &n, |bencher, &n| {
            bencher.iter(|| matmul_flipped_simd(black_box(&a), black_box(&bt), &mut out, n))
        });
        group.bench_with_input(BenchmarkId::new("flipped_simd_mt", n), &n, |bencher, &n| {
            bencher.iter(|| half.multiply(black_box(&a), black_box(&bt), &mut out, n))
        });
    }

    group.finish();
}

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");

    let len = 1 << 24;
    let values = random_vec(&mut input_rng(Some(1)), len);
    group.throughput(Throughput::Elements(len as u64));

    group.bench_function("loop", |bencher| bencher.iter(|| sum_scalar(black_box(&values))));
    group.bench_function("simd", |bencher| bencher.iter(|| sum(black_box(&values))));

    group.finish();
}

criterion_group!(benches, bench_matmul, bench_sum);
criterion_main!(benches);
