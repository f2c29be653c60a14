//! SIMD reduction microkernels.
//!
//! These are the inner loops the vectorized matmul variants and the array
//! sum benchmark are built on. Each public entry point checks CPU features
//! at runtime and falls back to a portable lane accumulator.
//!
//! Available kernels:
//! - `dot`: Σ a[i]·b[i] over two contiguous spans (AVX2 + FMA)
//! - `sum`: Σ x[i] over one span (AVX2)

pub mod dot;
pub mod sum;
