/// Naive matrix multiplication: C = A × B, output-row / output-column /
/// reduction loop order.
///
/// This is the textbook triple loop. It's slow because the innermost loop
/// walks B down a column with stride `n`, missing cache on nearly every
/// access once a column no longer fits.
///
/// Each output slot is accumulated left to right in a register and then
/// written once, so C is fully overwritten.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, overwritten
/// * `n` - Dimension
///
/// # Panics
///
/// Panics if any buffer does not hold n² elements.
pub fn matmul_naive(a: &[f32], b: &[f32], c: &mut [f32], n: usize) {
    super::check_square(a, b, c, n);

    for row in 0..n {
        for col in 0..n {
            let mut acc = 0.0f32;
            for i in 0..n {
                acc += a[row * n + i] * b[i * n + col];
            }
            c[row * n + col] = acc;
        }
    }
}
