//! Array sum benchmark: scalar accumulation vs. vectorized reduction.

use std::fmt;
use std::time::Duration;

use super::report::ratio;
use super::timer::timed;
use crate::kernels::sum::{sum, sum_scalar};
use crate::matrix::sum_tolerance;

/// Length used by the `sum_billion` binary.
pub const BILLION: usize = 1_000 * 1_000 * 1_000;

/// Result and duration of one summation strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumRun {
    pub label: &'static str,
    pub total: f32,
    pub elapsed: Duration,
}

/// Both strategies over the same buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumComparison {
    pub len: usize,
    pub scalar: SumRun,
    pub simd: SumRun,
}

impl SumComparison {
    /// Sums `values` with the scalar loop, then with the SIMD reduction.
    pub fn run(values: &[f32]) -> Self {
        let (total, elapsed) = timed(|| sum_scalar(values));
        let scalar = SumRun {
            label: "loop",
            total,
            elapsed,
        };

        let (total, elapsed) = timed(|| sum(values));
        let simd = SumRun {
            label: "simd",
            total,
            elapsed,
        };

        Self {
            len: values.len(),
            scalar,
            simd,
        }
    }

    pub fn difference(&self) -> f32 {
        (self.scalar.total - self.simd.total).abs()
    }

    /// Whether the two totals are within [`sum_tolerance`] of each other.
    pub fn agrees(&self) -> bool {
        self.difference() <= sum_tolerance(self.len)
    }

    /// scalar time / SIMD time
    pub fn speedup(&self) -> f64 {
        ratio(self.scalar.elapsed, self.simd.elapsed)
    }
}

impl fmt::Display for SumRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sum ({}): {} in {:.3?}", self.label, self.total, self.elapsed)
    }
}

impl fmt::Display for SumComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.scalar)?;
        writeln!(f, "{}", self.simd)?;
        writeln!(
            f,
            "loop:simd: {:.4}, |difference| {} (tolerance {}, {})",
            self.speedup(),
            self.difference(),
            sum_tolerance(self.len),
            if self.agrees() { "ok" } else { "outside tolerance" }
        )
    }
}
