//! Sum of a contiguous f32 span.

use super::dot::reduce_lanes;

const LANES: usize = 8;

/// Vectorized horizontal-reduction sum.
///
/// Picks AVX2 when available, otherwise a portable lane accumulator.
///
/// ```
/// use matbench::kernels::sum::sum;
///
/// let xs = [0.5f32; 100];
/// assert_eq!(sum(&xs), 50.0);
/// ```
pub fn sum(xs: &[f32]) -> f32 {
    #[cfg(target_arch = "x86_64")]
    {
        if is_x86_feature_detected!("avx2") {
            return unsafe { sum_avx2(xs) };
        }
    }

    sum_lanes(xs)
}

/// Sequential left-to-right accumulation, one element at a time.
pub fn sum_scalar(xs: &[f32]) -> f32 {
    let mut total = 0.0f32;
    for &x in xs {
        total += x;
    }
    total
}

/// Portable fallback with eight independent accumulators.
pub fn sum_lanes(xs: &[f32]) -> f32 {
    let mut acc = [0.0f32; LANES];
    let chunks = xs.chunks_exact(LANES);
    let tail = chunks.remainder();

    for chunk in chunks {
        for lane in 0..LANES {
            acc[lane] += chunk[lane];
        }
    }

    let mut total = reduce_lanes(acc);
    for &x in tail {
        total += x;
    }
    total
}

/// AVX2 sum with four 8-wide accumulators.
///
/// # Safety
///
/// Caller must ensure the CPU supports AVX2.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
#[allow(unsafe_op_in_unsafe_fn)]
pub unsafe fn sum_avx2(xs: &[f32]) -> f32 {
    use super::dot::hsum_avx;
    use std::arch::x86_64::*;

    let len = xs.len();
    let p = xs.as_ptr();

    let mut acc0 = _mm256_setzero_ps();
    let mut acc1 = _mm256_setzero_ps();
    let mut acc2 = _mm256_setzero_ps();
    let mut acc3 = _mm256_setzero_ps();

    let main = (len / 32) * 32;
    let mut i = 0;
    while i < main {
        acc0 = _mm256_add_ps(_mm256_loadu_ps(p.add(i)), acc0);
        acc1 = _mm256_add_ps(_mm256_loadu_ps(p.add(i + 8)), acc1);
        acc2 = _mm256_add_ps(_mm256_loadu_ps(p.add(i + 16)), acc2);
        acc3 = _mm256_add_ps(_mm256_loadu_ps(p.add(i + 24)), acc3);
        i += 32;
    }

    while i + 8 <= len {
        acc0 = _mm256_add_ps(_mm256_loadu_ps(p.add(i)), acc0);
        i += 8;
    }

    let acc = _mm256_add_ps(_mm256_add_ps(acc0, acc1), _mm256_add_ps(acc2, acc3));
    let mut total = hsum_avx(acc);

    while i < len {
        total += *p.add(i);
        i += 1;
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sums_to_zero() {
        assert_eq!(sum(&[]), 0.0);
        assert_eq!(sum_scalar(&[]), 0.0);
        assert_eq!(sum_lanes(&[]), 0.0);
    }

    #[test]
    fn exact_on_small_integers() {
        for len in [1, 7, 8, 9, 31, 32, 33, 65, 1000] {
            let xs: Vec<f32> = (0..len).map(|i| (i % 5) as f32).collect();
            let expected = sum_scalar(&xs);
            assert_eq!(sum(&xs), expected, "len {}", len);
            assert_eq!(sum_lanes(&xs), expected, "len {}", len);
        }
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn avx2_sum_requires_only_avx2() {
        if !is_x86_feature_detected!("avx2") {
            return;
        }
        for len in [0, 5, 8, 40, 1001] {
            let xs: Vec<f32> = (0..len).map(|i| (i % 3) as f32 * 0.5).collect();
            // same gate as `sum`: AVX2 alone, FMA not checked
            let total = unsafe { sum_avx2(&xs) };
            assert_eq!(total, sum_scalar(&xs), "len {}", len);
        }
    }
}
