//! Single-precision matrix multiplication microbenchmarks.
//!
//! How much do loop order, SIMD and thread count matter for C = A×B on
//! square f32 matrices? This crate times five ways of computing the same
//! product on identical inputs and reports how they scale against each
//! other and against a small warm-up size.
//!
//! ## Usage
//!
//! ```
//! use matbench::harness::MulBench;
//! use matbench::matrix::random::input_rng;
//! use matbench::threaded::WorkerPools;
//! use matbench::Variant;
//!
//! let mut rng = input_rng(Some(42));
//! let mut pools = WorkerPools::new();
//! let mut bench = MulBench::new(64, &mut rng);
//!
//! let m = bench.compute(Variant::FlippedSimd, &mut pools).unwrap();
//! println!("{}", m);
//! ```
//!
//! Or run a whole plan (see `src/main.rs` for the standard one):
//!
//! ```
//! use matbench::harness::{Driver, Experiment, ExperimentPlan};
//! use matbench::Variant;
//!
//! let plan = ExperimentPlan::new(vec![
//!     Experiment::warm_up(16, 2, Variant::all_with_divisor(2)),
//!     Experiment::sweep([16, 32], Variant::all_with_divisor(2)),
//! ])
//! .with_seed(1);
//!
//! let mut driver = Driver::new(plan, Vec::<u8>::new()).unwrap();
//! driver.run().unwrap();
//! ```
//!
//! ## What's inside
//!
//! - Reference GEMM through a BLAS-style adapter (`blas`)
//! - Naive, flipped and flipped SIMD kernels (`matrix`)
//! - AVX2/FMA dot and sum microkernels (`kernels`)
//! - Row-parallel flipped SIMD kernel with a capped worker pool (`threaded`)
//! - Timing, ratio reports and the experiment driver (`harness`)

pub mod blas;
pub mod error;
pub mod harness;
pub mod kernels;
pub mod matrix;
pub mod threaded;
pub mod variant;

pub use blas::matmul_reference;
pub use error::{BenchError, Result};
pub use matrix::flipped::{matmul_flipped, matmul_flipped_simd};
pub use matrix::naive::matmul_naive;
pub use threaded::FlippedSimdPool;
pub use variant::{Parallelism, Variant};
