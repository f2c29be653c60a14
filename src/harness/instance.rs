//! One benchmark instance: fixed inputs, one output buffer, every kernel.

use rand::Rng;

use super::timer::{Measurement, time};
use crate::blas::matmul_reference;
use crate::error::Result;
use crate::matrix::flipped::{matmul_flipped, matmul_flipped_simd};
use crate::matrix::naive::matmul_naive;
use crate::matrix::random::random_matrix;
use crate::matrix::transpose::transposed;
use crate::threaded::WorkerPools;
use crate::variant::Variant;

/// Owns A, B (and Bᵀ for the flipped kernels) plus the output C for one
/// size, so every variant runs on identical inputs.
///
/// A and B never change after construction. Each [`compute`](Self::compute)
/// overwrites all of C.
pub struct MulBench {
    n: usize,
    a: Vec<f32>,
    b: Vec<f32>,
    bt: Vec<f32>,
    c: Vec<f32>,
}

impl MulBench {
    /// Random A and B drawn from `rng`, uniform in [-0.5, 0.5).
    pub fn new<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let a = random_matrix(rng, n);
        let b = random_matrix(rng, n);
        Self::from_parts(n, a, b)
    }

    /// Instance over caller-supplied inputs.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` does not hold n² elements.
    pub fn from_parts(n: usize, a: Vec<f32>, b: Vec<f32>) -> Self {
        assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
        assert_eq!(b.len(), n * n, "B: expected {}x{}={} elements", n, n, n * n);

        let bt = transposed(&b, n);
        Self {
            n,
            a,
            b,
            bt,
            c: vec![0.0; n * n],
        }
    }

    pub fn a(&self) -> &[f32] {
        &self.a
    }

    pub fn b(&self) -> &[f32] {
        &self.b
    }

    /// C as written by the last [`compute`](Self::compute).
    pub fn output(&self) -> &[f32] {
        &self.c
    }

    /// Runs `variant` once and times only the kernel call.
    ///
    /// Parallel variants take their pool from `pools`; a pool built here is
    /// built before the clock starts.
    pub fn compute(&mut self, variant: Variant, pools: &mut WorkerPools) -> Result<Measurement> {
        let n = self.n;
        let (a, b, bt) = (self.a.as_slice(), self.b.as_slice(), self.bt.as_slice());
        let c = self.c.as_mut_slice();

        let measurement = match variant {
            Variant::Reference => {
                Measurement::new(variant, n, time(|| matmul_reference(a, b, c, n)))
            }
            Variant::Naive => Measurement::new(variant, n, time(|| matmul_naive(a, b, c, n))),
            Variant::Flipped => Measurement::new(variant, n, time(|| matmul_flipped(a, bt, c, n))),
            Variant::FlippedSimd => {
                Measurement::new(variant, n, time(|| matmul_flipped_simd(a, bt, c, n)))
            }
            Variant::FlippedSimdParallel(parallelism) => {
                let pool = pools.get(parallelism)?;
                let elapsed = time(|| pool.multiply(a, bt, c, n));
                Measurement::new(variant, n, elapsed).with_workers(pool.max_workers())
            }
        };
        Ok(measurement)
    }
}
