//! `mc-matrix` - Dense matrix types and multiplication kernels for matcheck.
//!
//! This crate provides:
//! - A `Matrix` type backed by contiguous row-major `f64` storage
//! - A `Shape` type carrying explicit row/column counts
//! - A `MulKernel` trait for pluggable multiplication kernels
//! - A general kernel and a square-only fast-path kernel
//! - Element-wise result comparison with an absolute tolerance

pub mod compare;
pub mod error;
pub mod general;
pub mod kernel;
pub mod matrix;
pub mod shape;
pub mod square;

// Re-export primary types at the crate root for convenience.
pub use compare::{matrices_equal, DEFAULT_TOLERANCE};
pub use error::{MatrixError, Result};
pub use general::GeneralKernel;
pub use kernel::MulKernel;
pub use matrix::Matrix;
pub use shape::Shape;
pub use square::SquareKernel;
