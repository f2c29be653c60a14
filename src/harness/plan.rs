//! Declarative experiment plans.
//!
//! A plan is an ordered list of experiments. The driver runs them in
//! order; the first must be a warm-up, because every later ratio divides
//! by a baseline it captures.

use std::fmt;

use crate::error::{BenchError, Result};
use crate::variant::{Parallelism, Variant};

pub const WARM_UP_SIZE: usize = 256;
pub const WARM_UP_ITERATIONS: usize = 20;
pub const WARM_UP_DIVISOR: usize = 2;

pub const COMPARISON_SIZE: usize = 2000;
/// Extra reference runs before the comparison, to settle the GEMM
/// library's own one-time initialization.
pub const COMPARISON_REFERENCE_RUNS: usize = 10;
pub const COMPARISON_DIVISORS: [usize; 4] = [1, 2, 4, 8];

pub const SWEEP_START: usize = 256;
pub const SWEEP_END: usize = 2560;
pub const SWEEP_STEP: usize = 256;
pub const SWEEP_DIVISOR: usize = 2;

pub const STRESS_SIZE: usize = 8000;
pub const STRESS_DIVISOR: usize = 2;

/// Stage of the pipeline an experiment belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    WarmUp,
    Comparison,
    Sweep,
    Stress,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::WarmUp => "warm-up",
            Phase::Comparison => "comparison",
            Phase::Sweep => "sweep",
            Phase::Stress => "stress",
        };
        f.write_str(name)
    }
}

/// One experiment: which kernels to run, at which sizes, how often.
#[derive(Debug, Clone, PartialEq)]
pub struct Experiment {
    pub phase: Phase,
    /// A fresh instance is built for each size, in order.
    pub sizes: Vec<usize>,
    /// Run in this order on every iteration.
    pub variants: Vec<Variant>,
    /// Passes over `variants` per size; only the last pass feeds baselines
    /// and ratio reports.
    pub iterations: usize,
    /// Reference kernel runs before the first pass. Printed, but kept out
    /// of the ratio report.
    pub reference_runs: usize,
    /// Compare each variant's output against the reference kernel's.
    /// Requires [`Variant::Reference`] to be the first variant.
    pub verify: bool,
}

impl Experiment {
    /// Repeats every variant at one small size; the last pass becomes the
    /// baseline for all later ratios.
    pub fn warm_up(size: usize, iterations: usize, variants: Vec<Variant>) -> Self {
        Self {
            phase: Phase::WarmUp,
            sizes: vec![size],
            variants,
            iterations,
            reference_runs: 0,
            verify: false,
        }
    }

    /// One size, each variant once, after `reference_runs` reference runs.
    pub fn comparison(size: usize, reference_runs: usize, variants: Vec<Variant>) -> Self {
        Self {
            phase: Phase::Comparison,
            sizes: vec![size],
            variants,
            iterations: 1,
            reference_runs,
            verify: true,
        }
    }

    /// Each variant once at every size in `sizes`.
    pub fn sweep(sizes: impl IntoIterator<Item = usize>, variants: Vec<Variant>) -> Self {
        Self {
            phase: Phase::Sweep,
            sizes: sizes.into_iter().collect(),
            variants,
            iterations: 1,
            reference_runs: 0,
            verify: true,
        }
    }

    /// One very large size. Only the variants listed are run; at this size
    /// the single-threaded ones take minutes each, so they must be opted in.
    pub fn stress(size: usize, variants: Vec<Variant>) -> Self {
        Self {
            phase: Phase::Stress,
            sizes: vec![size],
            variants,
            iterations: 1,
            reference_runs: 0,
            verify: false,
        }
    }

    /// Turns output verification on or off. Verifying experiments must list
    /// [`Variant::Reference`] first.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(BenchError::NoSizes(self.phase));
        }
        if self.sizes.contains(&0) {
            return Err(BenchError::ZeroSize(self.phase));
        }
        if self.variants.is_empty() {
            return Err(BenchError::NoVariants(self.phase));
        }
        if self.iterations == 0 {
            return Err(BenchError::ZeroIterations(self.phase));
        }
        if self.verify && self.variants.first() != Some(&Variant::Reference) {
            return Err(BenchError::VerifyWithoutReference(self.phase));
        }
        let zero_divisor = self
            .variants
            .iter()
            .any(|v| *v == Variant::FlippedSimdParallel(Parallelism::Divisor(0)));
        if zero_divisor {
            return Err(BenchError::ZeroDivisor);
        }
        Ok(())
    }
}

/// Ordered experiments plus the input seed.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentPlan {
    pub experiments: Vec<Experiment>,
    /// Fixed seed for A and B; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl ExperimentPlan {
    pub fn new(experiments: Vec<Experiment>) -> Self {
        Self {
            experiments,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// warm-up → mid-size comparison → size sweep → stress.
    ///
    /// The stress experiment runs only the parallel kernel; add variants
    /// with [`Experiment::stress`] to opt into the slow ones.
    pub fn standard() -> Self {
        let parallel = |d| Variant::FlippedSimdParallel(Parallelism::Divisor(d));

        let mut comparison = Variant::SEQUENTIAL.to_vec();
        comparison.extend(COMPARISON_DIVISORS.iter().map(|&d| parallel(d)));

        Self::new(vec![
            Experiment::warm_up(
                WARM_UP_SIZE,
                WARM_UP_ITERATIONS,
                Variant::all_with_divisor(WARM_UP_DIVISOR),
            ),
            Experiment::comparison(COMPARISON_SIZE, COMPARISON_REFERENCE_RUNS, comparison),
            Experiment::sweep(
                (SWEEP_START..=SWEEP_END).step_by(SWEEP_STEP),
                Variant::all_with_divisor(SWEEP_DIVISOR),
            ),
            Experiment::stress(STRESS_SIZE, vec![parallel(STRESS_DIVISOR)]),
        ])
    }

    /// Checks ordering and that every experiment does some work.
    pub fn validate(&self) -> Result<()> {
        let first = self.experiments.first().ok_or(BenchError::EmptyPlan)?;
        if first.phase != Phase::WarmUp {
            return Err(BenchError::MissingWarmUp(first.phase));
        }
        self.experiments.iter().try_for_each(Experiment::validate)
    }
}
