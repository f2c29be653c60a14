//! Kernel variants and parallelism settings.

use std::fmt;
use std::num::NonZeroUsize;
use std::thread;

use crate::error::{BenchError, Result};

/// How many workers the parallel kernel may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Parallelism {
    /// Whatever the process-wide rayon pool provides.
    Unbounded,
    /// At most `logical_cores / divisor` workers, never fewer than one.
    Divisor(usize),
}

impl Parallelism {
    /// Worker cap for a machine with `cores` logical cores.
    ///
    /// Returns `None` for [`Parallelism::Unbounded`].
    pub fn worker_cap(self, cores: usize) -> Result<Option<usize>> {
        match self {
            Parallelism::Unbounded => Ok(None),
            Parallelism::Divisor(0) => Err(BenchError::ZeroDivisor),
            Parallelism::Divisor(d) => Ok(Some((cores / d).max(1))),
        }
    }
}

impl fmt::Display for Parallelism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parallelism::Unbounded => write!(f, "unbounded"),
            Parallelism::Divisor(d) => write!(f, "cores/{}", d),
        }
    }
}

/// Number of logical cores visible to this process.
pub fn logical_cores() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// One of the interchangeable C = A×B implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    /// Optimized GEMM through the reference adapter.
    Reference,
    /// Textbook triple loop, B walked by column.
    Naive,
    /// Triple loop over A and a pre-transposed B, both walked by row.
    Flipped,
    /// Flipped, with a SIMD dot product for the inner reduction.
    FlippedSimd,
    /// Flipped SIMD with output rows spread over a worker pool.
    FlippedSimdParallel(Parallelism),
}

impl Variant {
    /// The four single-threaded variants, in report order.
    pub const SEQUENTIAL: [Variant; 4] = [
        Variant::Reference,
        Variant::Naive,
        Variant::Flipped,
        Variant::FlippedSimd,
    ];

    /// Every single-threaded variant plus the parallel one at `divisor`.
    pub fn all_with_divisor(divisor: usize) -> Vec<Variant> {
        let mut variants = Self::SEQUENTIAL.to_vec();
        variants.push(Variant::FlippedSimdParallel(Parallelism::Divisor(divisor)));
        variants
    }

    pub fn is_parallel(self) -> bool {
        matches!(self, Variant::FlippedSimdParallel(_))
    }

    /// Short label used in reports.
    pub fn label(self) -> String {
        match self {
            Variant::Reference => "reference".to_string(),
            Variant::Naive => "naive".to_string(),
            Variant::Flipped => "flipped".to_string(),
            Variant::FlippedSimd => "flipped-simd".to_string(),
            Variant::FlippedSimdParallel(p) => format!("flipped-simd-parallel({})", p),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
