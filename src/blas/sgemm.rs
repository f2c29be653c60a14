//! BLAS-style sgemm on top of `matrixmultiply`.

/// Storage order of every matrix in one [`sgemm`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    RowMajor,
    ColMajor,
}

/// Whether an input operand is used as stored or transposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transpose {
    NoTrans,
    Trans,
}

impl Order {
    /// (row stride, column stride) of a stored matrix with leading dimension `ld`.
    fn strides(self, ld: usize) -> (isize, isize) {
        let ld = ld as isize;
        match self {
            Order::RowMajor => (ld, 1),
            Order::ColMajor => (1, ld),
        }
    }

    /// Minimum buffer length for a stored `rows × cols` matrix.
    fn required_len(self, rows: usize, cols: usize, ld: usize, name: &str) -> usize {
        let contiguous = match self {
            Order::RowMajor => cols,
            Order::ColMajor => rows,
        };
        assert!(
            ld >= contiguous.max(1),
            "{}: leading dimension {} smaller than {}",
            name,
            ld,
            contiguous
        );
        if rows == 0 || cols == 0 {
            return 0;
        }
        match self {
            Order::RowMajor => (rows - 1) * ld + cols,
            Order::ColMajor => (cols - 1) * ld + rows,
        }
    }
}

/// Strides of op(X), and the shape X is stored in, for a logical `rows × cols` op(X).
fn operand(
    order: Order,
    trans: Transpose,
    rows: usize,
    cols: usize,
    ld: usize,
) -> ((isize, isize), (usize, usize)) {
    let (rs, cs) = order.strides(ld);
    match trans {
        Transpose::NoTrans => ((rs, cs), (rows, cols)),
        Transpose::Trans => ((cs, rs), (cols, rows)),
    }
}

/// C = alpha·op(A)·op(B) + beta·C
///
/// op(A) is m × k, op(B) is k × n, C is m × n, all stored in `order`.
/// When `beta` is zero, C is overwritten without being read.
///
/// # Panics
///
/// Panics if a leading dimension is too small for its matrix or a
/// buffer is too short for the shape it is described with.
#[allow(clippy::too_many_arguments)]
pub fn sgemm(
    order: Order,
    trans_a: Transpose,
    trans_b: Transpose,
    m: usize,
    n: usize,
    k: usize,
    alpha: f32,
    a: &[f32],
    lda: usize,
    b: &[f32],
    ldb: usize,
    beta: f32,
    c: &mut [f32],
    ldc: usize,
) {
    let ((rsa, csa), (a_rows, a_cols)) = operand(order, trans_a, m, k, lda);
    let ((rsb, csb), (b_rows, b_cols)) = operand(order, trans_b, k, n, ldb);
    let (rsc, csc) = order.strides(ldc);

    let a_len = order.required_len(a_rows, a_cols, lda, "A");
    let b_len = order.required_len(b_rows, b_cols, ldb, "B");
    let c_len = order.required_len(m, n, ldc, "C");
    assert!(a.len() >= a_len, "A: need {} elements, got {}", a_len, a.len());
    assert!(b.len() >= b_len, "B: need {} elements, got {}", b_len, b.len());
    assert!(c.len() >= c_len, "C: need {} elements, got {}", c_len, c.len());

    if m == 0 || n == 0 {
        return;
    }

    // SAFETY: every index the routine visits, (m-1)·rs + (k-1)·cs and the
    // like, lies inside the length just checked; C does not alias A or B
    // because it is borrowed mutably.
    unsafe {
        matrixmultiply::sgemm(
            m,
            k,
            n,
            alpha,
            a.as_ptr(),
            rsa,
            csa,
            b.as_ptr(),
            rsb,
            csb,
            beta,
            c.as_mut_ptr(),
            rsc,
            csc,
        );
    }
}

/// Reference kernel: C = A × B for row-major n × n buffers.
///
/// ```
/// use matbench::blas::matmul_reference;
///
/// let a = vec![1.0f32, 2.0, 3.0, 4.0];
/// let b = vec![5.0f32, 6.0, 7.0, 8.0];
/// let mut c = vec![f32::NAN; 4];
///
/// matmul_reference(&a, &b, &mut c, 2);
/// assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0]);
/// ```
///
/// # Panics
///
/// Panics if any buffer does not hold n² elements.
pub fn matmul_reference(a: &[f32], b: &[f32], c: &mut [f32], n: usize) {
    crate::matrix::check_square(a, b, c, n);
    let ld = n.max(1);
    sgemm(
        Order::RowMajor,
        Transpose::NoTrans,
        Transpose::NoTrans,
        n,
        n,
        n,
        1.0,
        a,
        ld,
        b,
        ld,
        0.0,
        c,
        ld,
    );
}
