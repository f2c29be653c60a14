//! Reference GEMM.
//!
//! The reference kernel hands the whole product to an optimized
//! single-precision GEMM (`matrixmultiply::sgemm`). That routine speaks in
//! raw pointers and element strides; [`sgemm`] puts the classic BLAS
//! contract (storage order, transpose flags, leading dimensions) in front
//! of it. Operands are borrowed slices, so the pointers handed to the
//! native routine cannot outlive the call.
//!
//! Every kernel in this crate is row-major. [`matmul_reference`] is the
//! one place that convention meets the GEMM, via `Order::RowMajor`.

pub mod sgemm;

pub use sgemm::{Order, Transpose, matmul_reference, sgemm};
