//! "Flipped" kernels: B arrives pre-transposed, so the inner reduction
//! walks one row of A and one row of Bᵀ, both contiguous.

use crate::kernels::dot::{DotFn, dot_kernel};

/// Flipped matrix multiplication with a scalar inner loop.
///
/// Same arithmetic as [`matmul_naive`](super::naive::matmul_naive), but
/// column `col` of B is read as row `col` of `bt`, so both operands of
/// the reduction are sequential in memory.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `bt` - Transposed matrix Bᵀ (n × n), row-major
/// * `c` - Matrix C = A × B (n × n), row-major, overwritten
/// * `n` - Dimension
///
/// # Panics
///
/// Panics if any buffer does not hold n² elements.
pub fn matmul_flipped(a: &[f32], bt: &[f32], c: &mut [f32], n: usize) {
    super::check_square(a, bt, c, n);
    if n == 0 {
        return;
    }

    for (a_row, c_row) in a.chunks_exact(n).zip(c.chunks_exact_mut(n)) {
        for (bt_row, out) in bt.chunks_exact(n).zip(c_row.iter_mut()) {
            let mut acc = 0.0f32;
            for (x, y) in a_row.iter().zip(bt_row) {
                acc += x * y;
            }
            *out = acc;
        }
    }
}

/// Flipped multiplication with a SIMD dot product for each output slot.
///
/// ```
/// use matbench::matrix::flipped::matmul_flipped_simd;
/// use matbench::matrix::transpose::transposed;
///
/// let a = vec![1.0f32, 2.0, 3.0, 4.0];
/// let b = vec![5.0f32, 6.0, 7.0, 8.0];
/// let mut c = vec![0.0; 4];
///
/// matmul_flipped_simd(&a, &transposed(&b, 2), &mut c, 2);
/// assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0]);
/// ```
///
/// # Panics
///
/// Panics if any buffer does not hold n² elements.
pub fn matmul_flipped_simd(a: &[f32], bt: &[f32], c: &mut [f32], n: usize) {
    super::check_square(a, bt, c, n);
    if n == 0 {
        return;
    }

    let dot = dot_kernel();
    for (a_row, c_row) in a.chunks_exact(n).zip(c.chunks_exact_mut(n)) {
        fill_row(dot, a_row, bt, c_row);
    }
}

/// Computes one output row: `c_row[col] = dot(a_row, bt row col)`.
///
/// Shared by the sequential and the parallel flipped SIMD kernels; each
/// call touches only its own output row.
pub(crate) fn fill_row(dot: DotFn, a_row: &[f32], bt: &[f32], c_row: &mut [f32]) {
    let n = a_row.len();
    for (bt_row, out) in bt.chunks_exact(n).zip(c_row.iter_mut()) {
        *out = dot(a_row, bt_row);
    }
}
