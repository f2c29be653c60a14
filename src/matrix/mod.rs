//! Row-major square matrices and the single-threaded kernels.
//!
//! A matrix is a flat `[f32]` of length n², element (r, c) at `r * n + c`.
//! Every kernel here overwrites all n² slots of its output.

pub mod flipped;
pub mod naive;
pub mod random;
pub mod transpose;

/// Relative part of the matrix comparison tolerance.
pub const REL_TOLERANCE: f32 = 1e-3;

/// Absolute part of the matrix comparison tolerance, for entries near zero.
pub const ABS_TOLERANCE: f32 = 1e-4;

/// Fails fast unless `a`, `b` and `c` all hold exactly n² elements.
///
/// # Panics
///
/// Panics with a message naming the offending operand.
pub fn check_square(a: &[f32], b: &[f32], c: &[f32], n: usize) {
    let len = n * n;
    assert_eq!(a.len(), len, "A: expected {}x{}={} elements", n, n, len);
    assert_eq!(b.len(), len, "B: expected {}x{}={} elements", n, n, len);
    assert_eq!(c.len(), len, "C: expected {}x{}={} elements", n, n, len);
}

/// `true` when `actual` is within `ABS_TOLERANCE + REL_TOLERANCE * |expected|`.
pub fn within_tolerance(expected: f32, actual: f32) -> bool {
    (expected - actual).abs() <= ABS_TOLERANCE + REL_TOLERANCE * expected.abs()
}

/// Largest element-wise absolute difference between two equal-length buffers.
pub fn max_abs_diff(expected: &[f32], actual: &[f32]) -> f32 {
    assert_eq!(expected.len(), actual.len(), "max_abs_diff: length mismatch");
    expected
        .iter()
        .zip(actual)
        .map(|(e, a)| (e - a).abs())
        .fold(0.0, f32::max)
}

/// `true` when every element pair passes [`within_tolerance`].
pub fn all_within_tolerance(expected: &[f32], actual: &[f32]) -> bool {
    expected.len() == actual.len()
        && expected
            .iter()
            .zip(actual)
            .all(|(&e, &a)| within_tolerance(e, a))
}

/// Tolerance for comparing two sums of `len` values in [-0.5, 0.5).
///
/// Grows with √len: rounding error from a different accumulation order
/// behaves like a random walk.
pub fn sum_tolerance(len: usize) -> f32 {
    1e-3 * (len as f32).sqrt().max(1.0)
}

/// n×n identity matrix.
pub fn identity(n: usize) -> Vec<f32> {
    let mut m = vec![0.0; n * n];
    for i in 0..n {
        m[i * n + i] = 1.0;
    }
    m
}
