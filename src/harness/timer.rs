//! Wall-clock timing of single kernel invocations.

use std::fmt;
use std::time::{Duration, Instant};

use crate::variant::Variant;

/// Runs `f` once and returns its result with the elapsed wall-clock time.
///
/// Only the call itself is timed; set up inputs before calling this.
pub fn timed<T, F: FnOnce() -> T>(f: F) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Runs `f` once and returns the elapsed wall-clock time.
pub fn time<F: FnOnce()>(f: F) -> Duration {
    timed(f).1
}

/// Floating point operations in one n × n × n multiply (n multiplies and
/// n adds per output).
pub fn matmul_flops(n: usize) -> f64 {
    2.0 * (n as f64).powi(3)
}

/// One timed kernel invocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub variant: Variant,
    pub size: usize,
    pub elapsed: Duration,
    /// Worker cap of the pool that ran it, for parallel variants.
    pub workers: Option<usize>,
}

impl Measurement {
    pub fn new(variant: Variant, size: usize, elapsed: Duration) -> Self {
        Self {
            variant,
            size,
            elapsed,
            workers: None,
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Achieved throughput in GFLOPS; zero for an unmeasurably short run.
    pub fn gflops(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            return 0.0;
        }
        matmul_flops(self.size) / secs / 1e9
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{} {}", self.size, self.size, self.variant)?;
        if let Some(workers) = self.workers {
            write!(f, " [max {} workers]", workers)?;
        }
        write!(f, ": {:.3?} ({:.2} GFLOPS)", self.elapsed, self.gflops())
    }
}
