use std::fmt::Debug;

use crate::error::{MatrixError, Result};

/// Trait for matrix multiplication kernels.
///
/// All kernels compute C = A @ B over row-major `f64` slices. Inputs are
/// borrowed read-only; the output slice is caller-owned and fully
/// overwritten (no accumulation into prior contents).
pub trait MulKernel: Send + Sync + Debug {
    /// Returns the name of this kernel (e.g., "general", "square").
    fn name(&self) -> &str;

    /// Matrix multiplication: C = A @ B.
    ///
    /// - `a`: row-major data of shape [m, k]
    /// - `b`: row-major data of shape [k, n]
    /// - `c`: row-major output of shape [m, n]
    fn multiply(
        &self,
        a: &[f64],
        b: &[f64],
        c: &mut [f64],
        m: usize,
        k: usize,
        n: usize,
    ) -> Result<()>;
}

/// Validate that all three slices hold exactly m*k, k*n, and m*n elements.
pub(crate) fn check_lengths(
    a: &[f64],
    b: &[f64],
    c: &[f64],
    m: usize,
    k: usize,
    n: usize,
) -> Result<()> {
    if a.len() != m * k {
        return Err(MatrixError::DataLength {
            expected: m * k,
            got: a.len(),
        });
    }
    if b.len() != k * n {
        return Err(MatrixError::DataLength {
            expected: k * n,
            got: b.len(),
        });
    }
    if c.len() != m * n {
        return Err(MatrixError::DataLength {
            expected: m * n,
            got: c.len(),
        });
    }
    Ok(())
}
