use crate::error::Result;
use crate::kernel::{check_lengths, MulKernel};

/// General-shape multiplication kernel using i-j-k loop order.
///
/// The textbook triple loop: for each output cell, sum products along the
/// shared dimension. The summation index always ranges over `k` (columns of
/// A, rows of B), so rectangular inputs are handled correctly.
///
/// Slice lengths are validated up front and reported as errors rather than
/// left to slip out of bounds.
#[derive(Debug, Clone)]
pub struct GeneralKernel;

impl GeneralKernel {
    pub fn new() -> Self {
        GeneralKernel
    }
}

impl Default for GeneralKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl MulKernel for GeneralKernel {
    fn name(&self) -> &str {
        "general"
    }

    fn multiply(
        &self,
        a: &[f64],
        b: &[f64],
        c: &mut [f64],
        m: usize,
        k: usize,
        n: usize,
    ) -> Result<()> {
        check_lengths(a, b, c, m, k, n)?;

        for i in 0..m {
            for j in 0..n {
                let mut sum = 0.0;
                for p in 0..k {
                    sum += a[i * k + p] * b[p * n + j];
                }
                c[i * n + j] = sum;
            }
        }
        Ok(())
    }
}
