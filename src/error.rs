//! Error types for the benchmark harness.
//!
//! Kernels themselves never return errors: a dimension mismatch is a
//! precondition violation and panics. These errors cover the parts that
//! can fail at runtime: worker pool setup, plan validation, and writing
//! the report.

use thiserror::Error;

use crate::harness::plan::Phase;

/// Errors produced while setting up or running experiments.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("parallelism divisor must be at least 1")]
    ZeroDivisor,

    #[error("failed to build worker pool: {0}")]
    PoolBuild(#[from] rayon::ThreadPoolBuildError),

    #[error("experiment plan is empty")]
    EmptyPlan,

    #[error("experiment plan must start with a warm-up phase, found {0}")]
    MissingWarmUp(Phase),

    #[error("{0} experiment has no sizes")]
    NoSizes(Phase),

    #[error("{0} experiment has a zero matrix size")]
    ZeroSize(Phase),

    #[error("{0} experiment selects no kernel variants")]
    NoVariants(Phase),

    #[error("{0} experiment runs zero iterations")]
    ZeroIterations(Phase),

    #[error("{0} experiment verifies outputs but does not run the reference kernel first")]
    VerifyWithoutReference(Phase),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, BenchError>;
