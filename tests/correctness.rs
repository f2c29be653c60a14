use matbench::blas::{Order, Transpose, matmul_reference, sgemm};
use matbench::harness::MulBench;
use matbench::matrix::flipped::{matmul_flipped, matmul_flipped_simd};
use matbench::matrix::naive::matmul_naive;
use matbench::matrix::random::{input_rng, random_matrix};
use matbench::matrix::transpose::{transpose, transposed};
use matbench::matrix::{identity, within_tolerance};
use matbench::threaded::{FlippedSimdPool, WorkerPools};
use matbench::variant::{Parallelism, Variant};

fn assert_matrices_close(expected: &[f32], actual: &[f32], name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        assert!(
            within_tolerance(expected[i], actual[i]),
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            expected[i],
            actual[i]
        );
    }
}

/// C = A × B accumulated in f64, rounded once at the end.
fn trusted_product(a: &[f32], b: &[f32], n: usize) -> Vec<f32> {
    let mut c = vec![0.0f32; n * n];
    for row in 0..n {
        for col in 0..n {
            let mut acc = 0.0f64;
            for i in 0..n {
                acc += a[row * n + i] as f64 * b[i * n + col] as f64;
            }
            c[row * n + col] = acc as f32;
        }
    }
    c
}

fn all_variants() -> Vec<Variant> {
    let mut variants = Variant::SEQUENTIAL.to_vec();
    variants.push(Variant::FlippedSimdParallel(Parallelism::Unbounded));
    for d in [1, 2, 4, 8] {
        variants.push(Variant::FlippedSimdParallel(Parallelism::Divisor(d)));
    }
    variants
}

/// Runs every variant on the same instance and checks each against `expected`.
fn check_every_variant(bench: &mut MulBench, expected: &[f32], name: &str) {
    let mut pools = WorkerPools::new();
    for variant in all_variants() {
        bench.compute(variant, &mut pools).unwrap();
        assert_matrices_close(expected, bench.output(), &format!("{}_{}", name, variant));
    }
}

// ============================================================
// Known small products
// ============================================================

#[test]
fn test_2x2_multiply() {
    let a = vec![1.0, 2.0, 3.0, 4.0];
    let b = vec![5.0, 6.0, 7.0, 8.0];
    let expected = vec![19.0, 22.0, 43.0, 50.0];

    let mut bench = MulBench::from_parts(2, a, b);
    check_every_variant(&mut bench, &expected, "2x2");
}

#[test]
fn test_single_element() {
    let mut bench = MulBench::from_parts(1, vec![3.0], vec![-0.25]);
    check_every_variant(&mut bench, &[-0.75], "1x1");
}

#[test]
fn test_zero_dimension_is_noop() {
    let mut c: Vec<f32> = Vec::new();
    matmul_naive(&[], &[], &mut c, 0);
    matmul_flipped(&[], &[], &mut c, 0);
    matmul_flipped_simd(&[], &[], &mut c, 0);
    matmul_reference(&[], &[], &mut c, 0);
    FlippedSimdPool::new(Parallelism::Divisor(1))
        .unwrap()
        .multiply(&[], &[], &mut c, 0);
    assert!(c.is_empty());
}

// ============================================================
// Algebraic properties
// ============================================================

#[test]
fn test_identity_times_b_is_b() {
    let mut rng = input_rng(Some(11));
    for n in [1, 2, 5, 8, 17, 33] {
        let b = random_matrix(&mut rng, n);
        let mut bench = MulBench::from_parts(n, identity(n), b.clone());
        check_every_variant(&mut bench, &b, &format!("identity_{}", n));
    }
}

#[test]
fn test_zero_a_gives_zero() {
    let mut rng = input_rng(Some(12));
    for n in [1, 3, 9, 32] {
        let b = random_matrix(&mut rng, n);
        let mut bench = MulBench::from_parts(n, vec![0.0; n * n], b);
        check_every_variant(&mut bench, &vec![0.0; n * n], &format!("zero_{}", n));
    }
}

// ============================================================
// Random inputs against an f64 product
// ============================================================

#[test]
fn test_random_matches_trusted_product() {
    let mut rng = input_rng(Some(2024));
    let sizes = [3, 7, 8, 9, 15, 16, 17, 31, 32, 33, 64, 65, 100, 129];

    for n in sizes {
        let a = random_matrix(&mut rng, n);
        let b = random_matrix(&mut rng, n);
        let expected = trusted_product(&a, &b, n);

        let mut bench = MulBench::from_parts(n, a, b);
        check_every_variant(&mut bench, &expected, &format!("random_{}", n));
    }
}

#[test]
fn test_variants_agree_with_each_other() {
    let mut rng = input_rng(Some(5));
    let n = 96;
    let mut bench = MulBench::new(n, &mut rng);
    let mut pools = WorkerPools::new();

    bench.compute(Variant::Reference, &mut pools).unwrap();
    let reference = bench.output().to_vec();

    for variant in all_variants() {
        bench.compute(variant, &mut pools).unwrap();
        assert_matrices_close(&reference, bench.output(), &format!("agree_{}", variant));
    }
}

#[test]
fn test_parallel_result_independent_of_divisor() {
    let mut rng = input_rng(Some(99));
    let n = 130;
    let a = random_matrix(&mut rng, n);
    let bt = transposed(&random_matrix(&mut rng, n), n);

    let mut single = vec![0.0; n * n];
    matmul_flipped_simd(&a, &bt, &mut single, n);

    for d in [1, 2, 4, 8] {
        let pool = FlippedSimdPool::new(Parallelism::Divisor(d)).unwrap();
        let mut c = vec![0.0; n * n];
        pool.multiply(&a, &bt, &mut c, n);
        // Same dot kernel per row, so rows are bit-identical.
        assert_eq!(single, c, "divisor {}", d);
    }
}

#[test]
fn test_output_fully_overwritten() {
    let mut rng = input_rng(Some(3));
    let n = 21;
    let a = random_matrix(&mut rng, n);
    let b = random_matrix(&mut rng, n);
    let bt = transposed(&b, n);

    let kernels: [(&str, fn(&[f32], &[f32], &mut [f32], usize), &[f32]); 4] = [
        ("reference", matmul_reference, &b),
        ("naive", matmul_naive, &b),
        ("flipped", matmul_flipped, &bt),
        ("flipped_simd", matmul_flipped_simd, &bt),
    ];

    for (name, kernel, rhs) in kernels {
        let mut c = vec![f32::NAN; n * n];
        kernel(&a, rhs, &mut c, n);
        assert!(c.iter().all(|x| x.is_finite()), "{}: left stale slots", name);
    }

    let mut c = vec![f32::NAN; n * n];
    FlippedSimdPool::new(Parallelism::Unbounded)
        .unwrap()
        .multiply(&a, &bt, &mut c, n);
    assert!(c.iter().all(|x| x.is_finite()), "parallel: left stale slots");
}

// ============================================================
// Precondition violations
// ============================================================

#[test]
#[should_panic(expected = "B: expected 3x3=9 elements")]
fn test_naive_rejects_short_b() {
    let mut c = vec![0.0; 9];
    matmul_naive(&[0.0; 9], &[0.0; 8], &mut c, 3);
}

#[test]
#[should_panic(expected = "C: expected 2x2=4 elements")]
fn test_flipped_rejects_long_c() {
    let mut c = vec![0.0; 5];
    matmul_flipped(&[0.0; 4], &[0.0; 4], &mut c, 2);
}

#[test]
#[should_panic(expected = "A: expected 4x4=16 elements")]
fn test_parallel_rejects_short_a() {
    let pool = FlippedSimdPool::new(Parallelism::Divisor(2)).unwrap();
    let mut c = vec![0.0; 16];
    pool.multiply(&[0.0; 12], &[0.0; 16], &mut c, 4);
}

#[test]
#[should_panic(expected = "A: expected")]
fn test_instance_rejects_mismatched_inputs() {
    MulBench::from_parts(3, vec![0.0; 4], vec![0.0; 9]);
}

// ============================================================
// Reference adapter: storage order and transpose flags
// ============================================================

#[test]
fn test_sgemm_col_major_with_swapped_operands() {
    let mut rng = input_rng(Some(8));
    let n = 19;
    let a = random_matrix(&mut rng, n);
    let b = random_matrix(&mut rng, n);

    let mut row_major = vec![0.0; n * n];
    matmul_reference(&a, &b, &mut row_major, n);

    // Row-major A is column-major Aᵀ; Cᵀ = Bᵀ·Aᵀ in column-major is C in row-major.
    let mut col_major = vec![0.0; n * n];
    sgemm(
        Order::ColMajor,
        Transpose::NoTrans,
        Transpose::NoTrans,
        n,
        n,
        n,
        1.0,
        &b,
        n,
        &a,
        n,
        0.0,
        &mut col_major,
        n,
    );

    assert_matrices_close(&row_major, &col_major, "col_major_swapped");
}

#[test]
fn test_sgemm_transpose_flags() {
    let mut rng = input_rng(Some(9));
    let n = 13;
    let a = random_matrix(&mut rng, n);
    let b = random_matrix(&mut rng, n);
    let expected = trusted_product(&a, &b, n);

    let at = transposed(&a, n);
    let bt = transposed(&b, n);
    let mut c = vec![0.0; n * n];
    sgemm(
        Order::RowMajor,
        Transpose::Trans,
        Transpose::Trans,
        n,
        n,
        n,
        1.0,
        &at,
        n,
        &bt,
        n,
        0.0,
        &mut c,
        n,
    );

    assert_matrices_close(&expected, &c, "trans_trans");
}

#[test]
fn test_sgemm_non_square_with_beta() {
    // 2x3 · 3x2, C starts at ones and beta = 1
    let a = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let b = vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0];
    let mut c = vec![1.0; 4];

    sgemm(
        Order::RowMajor,
        Transpose::NoTrans,
        Transpose::NoTrans,
        2,
        2,
        3,
        1.0,
        &a,
        3,
        &b,
        2,
        1.0,
        &mut c,
        2,
    );

    assert_eq!(c, vec![59.0, 65.0, 140.0, 155.0]);
}

#[test]
#[should_panic(expected = "leading dimension")]
fn test_sgemm_rejects_small_leading_dimension() {
    let mut c = vec![0.0; 4];
    sgemm(
        Order::RowMajor,
        Transpose::NoTrans,
        Transpose::NoTrans,
        2,
        2,
        2,
        1.0,
        &[0.0; 4],
        1,
        &[0.0; 4],
        2,
        0.0,
        &mut c,
        2,
    );
}

#[test]
fn test_transpose_round_trip_non_square() {
    let src: Vec<f32> = (0..12).map(|i| i as f32).collect();
    let mut once = vec![0.0; 12];
    let mut twice = vec![0.0; 12];

    transpose(&src, &mut once, 3, 4);
    transpose(&once, &mut twice, 4, 3);

    assert_eq!(once[1], 4.0);
    assert_eq!(src, twice);
}
