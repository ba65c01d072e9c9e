use crate::error::{MatrixError, Result};
use crate::kernel::{check_lengths, MulKernel};

/// Square-only fast-path kernel using i-k-j loop order.
///
/// Zeroes each output row, then accumulates one row of A against rows of B.
/// The innermost loop walks B and C sequentially (stride 1), which is
/// kinder to the cache than the i-j-k order.
///
/// Only defined for equal square operands; anything else is rejected with
/// an error instead of indexing the wrong elements.
#[derive(Debug, Clone)]
pub struct SquareKernel;

impl SquareKernel {
    pub fn new() -> Self {
        SquareKernel
    }
}

impl Default for SquareKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl MulKernel for SquareKernel {
    fn name(&self) -> &str {
        "square"
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
        if m != k || k != n {
            return Err(MatrixError::NotSquare { m, k, n });
        }
        check_lengths(a, b, c, n, n, n)?;

        for i in 0..n {
            c[i * n..(i + 1) * n].fill(0.0);
            for p in 0..n {
                for j in 0..n {
                    c[i * n + j] += a[i * n + p] * b[p * n + j];
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::general::GeneralKernel;
    use approx::assert_abs_diff_eq;

    fn kernel() -> SquareKernel {
        SquareKernel::new()
    }

    #[test]
    fn test_2x2() {
        let a = vec![1.0, 2.0, 3.0, 4.0];
        let b = vec![5.0, 6.0, 7.0, 8.0];
        let mut c = vec![0.0; 4];
        kernel().multiply(&a, &b, &mut c, 2, 2, 2).unwrap();
        assert_eq!(c, vec![19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_overwrites_output() {
        // Stale output contents must not leak into the result.
        let a = vec![1.0, 0.0, 0.0, 1.0];
        let b = vec![1.0, 2.0, 3.0, 4.0];
        let mut c = vec![99.0; 4];
        kernel().multiply(&a, &b, &mut c, 2, 2, 2).unwrap();
        assert_eq!(c, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_matches_general_kernel() {
        let square = kernel();
        let general = GeneralKernel::new();

        for size in [1usize, 2, 3, 5, 8, 13] {
            let a: Vec<f64> = (0..size * size).map(|i| (i % 10) as f64).collect();
            let b: Vec<f64> = (0..size * size).map(|i| (i % 7) as f64 - 3.0).collect();

            let mut c_square = vec![0.0; size * size];
            let mut c_general = vec![0.0; size * size];

            square
                .multiply(&a, &b, &mut c_square, size, size, size)
                .unwrap();
            general
                .multiply(&a, &b, &mut c_general, size, size, size)
                .unwrap();

            assert_abs_diff_eq!(
                c_square.as_slice(),
                c_general.as_slice(),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_rejects_rectangular() {
        let a = vec![1.0; 6];
        let b = vec![1.0; 6];
        let mut c = vec![0.0; 4];
        let err = kernel().multiply(&a, &b, &mut c, 2, 3, 2).unwrap_err();
        assert!(matches!(err, MatrixError::NotSquare { m: 2, k: 3, n: 2 }));
    }

    #[test]
    fn test_bad_length() {
        let a = vec![1.0; 3];
        let b = vec![1.0; 4];
        let mut c = vec![0.0; 4];
        assert!(kernel().multiply(&a, &b, &mut c, 2, 2, 2).is_err());
    }
}
