//! Multi-threaded matmul.
//!
//! The flipped SIMD kernel with its output rows distributed over a rayon
//! pool. The number of workers is capped by a divisor of the logical core
//! count so experiments can sweep parallelism (all, half, quarter, eighth
//! of the cores) and watch where memory bandwidth stops scaling.
//!
//! Available implementations:
//! - `flipped_simd_mt`: capped-pool flipped SIMD kernel
//! - `pools`: per-cap pool cache, so pools are built outside timed regions

pub mod flipped_simd_mt;
pub mod pools;

pub use flipped_simd_mt::FlippedSimdPool;
pub use pools::WorkerPools;
