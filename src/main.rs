//! Benchmark runner: warm-up, mid-size comparison, size sweep, stress.

use std::io;

use matbench::BenchError;
use matbench::harness::{Driver, ExperimentPlan};

fn main() -> Result<(), BenchError> {
    println!("=== f32 Matrix Multiplication Benchmark ===");

    let stdout = io::stdout();
    let mut driver = Driver::new(ExperimentPlan::standard(), stdout.lock())?;
    driver.run()
}
