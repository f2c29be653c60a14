//! Benchmark harness: instances, timing, reports and the experiment driver.
//!
//! - `instance`: one size's inputs and output, runs any variant
//! - `timer`: wall-clock timing and per-run measurements
//! - `report`: ratios against warm-up baselines and between variants
//! - `plan`: declarative experiment descriptors
//! - `driver`: runs a plan phase by phase
//! - `sum`: the independent array-sum benchmark

pub mod driver;
pub mod instance;
pub mod plan;
pub mod report;
pub mod sum;
pub mod timer;

pub use driver::Driver;
pub use instance::MulBench;
pub use plan::{Experiment, ExperimentPlan, Phase};
pub use report::{ReferenceTimings, SizeReport, SweepSummary, ratio};
pub use timer::{Measurement, time, timed};
