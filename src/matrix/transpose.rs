//! Row-major transposition, used to lay out Bᵀ for the flipped kernels.

/// Writes the `cols`×`rows` transpose of the row-major `rows`×`cols` matrix
/// `src` into `dst`, so `dst[j * rows + i] == src[i * cols + j]`.
///
/// # Panics
///
/// Panics if either buffer does not hold `rows * cols` elements.
///
/// ```
/// use matbench::matrix::transpose::transpose;
///
/// let src = [1u8, 2, 3, 4, 5, 6];
/// let mut dst = [0u8; 6];
/// transpose(&src, &mut dst, 2, 3);
/// assert_eq!(dst, [1, 4, 2, 5, 3, 6]);
/// ```
pub fn transpose<T: Copy>(src: &[T], dst: &mut [T], rows: usize, cols: usize) {
    assert_eq!(src.len(), rows * cols, "transpose: src length mismatch");
    assert_eq!(dst.len(), rows * cols, "transpose: dst length mismatch");

    for (i, row) in src.chunks_exact(cols.max(1)).take(rows).enumerate() {
        for (j, &value) in row.iter().enumerate() {
            dst[j * rows + i] = value;
        }
    }
}

/// Bᵀ of a square n×n matrix as a new buffer, so column j of B can be read
/// as the contiguous row j.
///
/// ```
/// use matbench::matrix::transpose::transposed;
///
/// assert_eq!(transposed(&[1.0, 2.0, 3.0, 4.0], 2), vec![1.0, 3.0, 2.0, 4.0]);
/// ```
pub fn transposed(src: &[f32], n: usize) -> Vec<f32> {
    let mut dst = vec![0.0; n * n];
    transpose(src, &mut dst, n, n);
    dst
}
