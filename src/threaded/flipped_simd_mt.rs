//! Multi-threaded flipped SIMD matmul.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::Result;
use crate::kernels::dot::dot_kernel;
use crate::matrix::check_square;
use crate::matrix::flipped::fill_row;
use crate::variant::{Parallelism, logical_cores};

/// Flipped SIMD matmul with output rows spread over a capped worker pool.
///
/// Each output row is an independent task: a worker reads one row of A and
/// all of Bᵀ (both shared read-only) and writes only its own row of C, so no
/// locking is needed. Build the pool once and reuse it across calls.
pub struct FlippedSimdPool {
    /// `None` runs on rayon's global pool.
    pool: Option<ThreadPool>,
}

impl FlippedSimdPool {
    /// Builds a pool capped at `logical_cores / divisor` workers
    /// (`Parallelism::Divisor`), or wraps the global pool (`Unbounded`).
    ///
    /// # Errors
    ///
    /// `BenchError::ZeroDivisor` for a divisor of zero, `PoolBuild` if the
    /// threads can't be spawned.
    pub fn new(parallelism: Parallelism) -> Result<Self> {
        let pool = match parallelism.worker_cap(logical_cores())? {
            Some(cap) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(cap)
                    .thread_name(|i| format!("matbench-worker-{}", i))
                    .build()?,
            ),
            None => None,
        };
        Ok(Self { pool })
    }

    /// Upper bound on concurrently running rows.
    pub fn max_workers(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    /// C = A × B, with `bt` = Bᵀ. Blocks until every row is written.
    ///
    /// # Panics
    ///
    /// Panics if any buffer does not hold n² elements.
    pub fn multiply(&self, a: &[f32], bt: &[f32], c: &mut [f32], n: usize) {
        check_square(a, bt, c, n);
        if n == 0 {
            return;
        }

        let dot = dot_kernel();
        let rows = |c: &mut [f32]| {
            c.par_chunks_mut(n)
                .zip(a.par_chunks(n))
                .for_each(|(c_row, a_row)| fill_row(dot, a_row, bt, c_row));
        };

        match &self.pool {
            Some(pool) => pool.install(|| rows(c)),
            None => rows(c),
        }
    }
}
