//! Dot product of two contiguous f32 spans.

/// Signature shared by every dot kernel.
pub type DotFn = fn(&[f32], &[f32]) -> f32;

/// Lane count of the portable fallback accumulator.
const LANES: usize = 8;

/// Picks the fastest dot kernel this CPU supports (AVX2+FMA > portable).
///
/// Resolve once and call the returned function in hot loops.
pub fn dot_kernel() -> DotFn {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") && is_x86_feature_detected!("fma") {
            return dot_avx2_checked;
        }
    }

    dot_lanes
}

/// Vectorized dot product: Σ a[i]·b[i].
///
/// Summation order differs from a left-to-right loop, so results can
/// differ from [`dot_scalar`] in the last few bits.
///
/// # Panics
///
/// Panics if the spans have different lengths.
///
/// ```
/// use matbench::kernels::dot::dot;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// assert_eq!(dot(&a, &b), 32.0);
/// ```
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    dot_kernel()(a, b)
}

/// Left-to-right scalar dot product.
pub fn dot_scalar(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "dot: span lengths differ");
    let mut acc = 0.0f32;
    for (x, y) in a.iter().zip(b) {
        acc += x * y;
    }
    acc
}

/// Portable fallback: eight independent accumulators the compiler can keep
/// in one vector register, reduced pairwise at the end.
pub fn dot_lanes(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "dot: span lengths differ");

    let mut acc = [0.0f32; LANES];
    let a_chunks = a.chunks_exact(LANES);
    let b_chunks = b.chunks_exact(LANES);
    let a_tail = a_chunks.remainder();
    let b_tail = b_chunks.remainder();

    for (ca, cb) in a_chunks.zip(b_chunks) {
        for lane in 0..LANES {
            acc[lane] += ca[lane] * cb[lane];
        }
    }

    let mut total = reduce_lanes(acc);
    for (x, y) in a_tail.iter().zip(b_tail) {
        total += x * y;
    }
    total
}

pub(crate) fn reduce_lanes(acc: [f32; LANES]) -> f32 {
    let quad = [acc[0] + acc[4], acc[1] + acc[5], acc[2] + acc[6], acc[3] + acc[7]];
    (quad[0] + quad[2]) + (quad[1] + quad[3])
}

#[cfg(target_arch = "x86_64")]
fn dot_avx2_checked(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "dot: span lengths differ");
    // Only handed out by `dot_kernel` after AVX2 and FMA were detected.
    unsafe { dot_avx2(a, b) }
}

/// AVX2 dot product with four 8-wide FMA accumulators.
///
/// # Safety
///
/// Caller must ensure:
/// - CPU supports AVX2 and FMA
/// - `a.len() == b.len()`
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2,fma")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn dot_avx2(a: &[f32], b: &[f32]) -> f32 {
    use std::arch::x86_64::*;

    let len = a.len();
    let pa = a.as_ptr();
    let pb = b.as_ptr();

    let mut acc0 = _mm256_setzero_ps();
    let mut acc1 = _mm256_setzero_ps();
    let mut acc2 = _mm256_setzero_ps();
    let mut acc3 = _mm256_setzero_ps();

    // 32 floats per iteration keeps four FMAs in flight
    let main = (len / 32) * 32;
    let mut i = 0;
    while i < main {
        acc0 = _mm256_fmadd_ps(_mm256_loadu_ps(pa.add(i)), _mm256_loadu_ps(pb.add(i)), acc0);
        acc1 = _mm256_fmadd_ps(
            _mm256_loadu_ps(pa.add(i + 8)),
            _mm256_loadu_ps(pb.add(i + 8)),
            acc1,
        );
        acc2 = _mm256_fmadd_ps(
            _mm256_loadu_ps(pa.add(i + 16)),
            _mm256_loadu_ps(pb.add(i + 16)),
            acc2,
        );
        acc3 = _mm256_fmadd_ps(
            _mm256_loadu_ps(pa.add(i + 24)),
            _mm256_loadu_ps(pb.add(i + 24)),
            acc3,
        );
        i += 32;
    }

    while i + 8 <= len {
        acc0 = _mm256_fmadd_ps(_mm256_loadu_ps(pa.add(i)), _mm256_loadu_ps(pb.add(i)), acc0);
        i += 8;
    }

    let acc = _mm256_add_ps(_mm256_add_ps(acc0, acc1), _mm256_add_ps(acc2, acc3));
    let mut total = hsum_avx(acc);

    while i < len {
        total += *pa.add(i) * *pb.add(i);
        i += 1;
    }
    total
}

/// Horizontal sum of the eight lanes of a 256-bit register.
///
/// Needs AVX only.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx")]
#[allow(unsafe_op_in_unsafe_fn)]
pub(crate) unsafe fn hsum_avx(v: std::arch::x86_64::__m256) -> f32 {
    use std::arch::x86_64::*;

    let lo = _mm256_castps256_ps128(v);
    let hi = _mm256_extractf128_ps::<1>(v);
    let quad = _mm_add_ps(lo, hi);
    let pair = _mm_hadd_ps(quad, quad);
    let single = _mm_hadd_ps(pair, pair);
    _mm_cvtss_f32(single)
}
