use crate::error::{MatrixError, Result};
use crate::kernel::MulKernel;
use crate::shape::Shape;

/// A dense matrix backed by contiguous row-major `f64` storage.
///
/// The element at (r, c) lives at linear index `r * cols + c`. The shape is
/// carried with the buffer; computations are dispatched to a `MulKernel`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    shape: Shape,
}

impl Matrix {
    /// Create a new matrix from row-major data and a shape.
    ///
    /// # Panics
    /// Panics if `data.len() != shape.numel()`.
    pub fn new(data: Vec<f64>, shape: Shape) -> Self {
        assert_eq!(
            data.len(),
            shape.numel(),
            "data length {} does not match shape {} (numel={})",
            data.len(),
            shape,
            shape.numel()
        );
        Matrix { data, shape }
    }

    /// Create a zero-filled matrix with the given shape.
    pub fn zeros(shape: Shape) -> Self {
        Matrix {
            data: vec![0.0; shape.numel()],
            shape,
        }
    }

    /// Create the n-by-n identity matrix.
    pub fn identity(n: usize) -> Self {
        let shape = Shape::square(n);
        let mut data = vec![0.0; shape.numel()];
        for i in 0..n {
            data[shape.index(i, i)] = 1.0;
        }
        Matrix { data, shape }
    }

    /// Returns the matrix shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Returns the underlying data as a row-major slice.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Returns the element at (r, c).
    ///
    /// # Panics
    /// Panics if the position is out of bounds.
    pub fn get(&self, r: usize, c: usize) -> f64 {
        assert!(
            r < self.shape.rows && c < self.shape.cols,
            "position ({}, {}) out of bounds for {} matrix",
            r,
            c,
            self.shape
        );
        self.data[self.shape.index(r, c)]
    }

    /// Matrix multiplication through the given kernel.
    ///
    /// self is [m, k], other is [k, n], result is [m, n]. The inner
    /// dimensions must agree; the output buffer is allocated here and
    /// handed to the kernel to fill.
    pub fn multiply(&self, other: &Matrix, kernel: &dyn MulKernel) -> Result<Matrix> {
        let m = self.shape.rows;
        let k = self.shape.cols;
        let k2 = other.shape.rows;
        let n = other.shape.cols;

        if k != k2 {
            return Err(MatrixError::MatmulMismatch { m, k, k2, n });
        }

        let mut out = vec![0.0; m * n];
        kernel.multiply(&self.data, &other.data, &mut out, m, k, n)?;
        Ok(Matrix::new(out, Shape::new(m, n)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::general::GeneralKernel;
    use crate::square::SquareKernel;

    #[test]
    fn test_new_matrix() {
        let m = Matrix::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], Shape::new(2, 3));
        assert_eq!(m.shape(), Shape::new(2, 3));
        assert_eq!(m.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(m.get(0, 2), 3.0);
        assert_eq!(m.get(1, 0), 4.0);
    }

    #[test]
    #[should_panic]
    fn test_new_length_mismatch_panics() {
        let _m = Matrix::new(vec![1.0, 2.0], Shape::new(3, 1));
    }

    #[test]
    fn test_zeros() {
        let z = Matrix::zeros(Shape::new(2, 3));
        assert_eq!(z.data(), &[0.0; 6]);
    }

    #[test]
    fn test_identity() {
        let i = Matrix::identity(3);
        assert_eq!(
            i.data(),
            &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_multiply() {
        let kernel = GeneralKernel::new();
        let a = Matrix::new(vec![1.0, 2.0, 3.0, 4.0], Shape::square(2));
        let b = Matrix::new(vec![5.0, 6.0, 7.0, 8.0], Shape::square(2));
        let c = a.multiply(&b, &kernel).unwrap();
        assert_eq!(c.shape(), Shape::square(2));
        assert_eq!(c.data(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_identity_law() {
        let kernel = GeneralKernel::new();
        let a = Matrix::new((0..9).map(|i| i as f64).collect(), Shape::square(3));
        let i = Matrix::identity(3);
        assert_eq!(a.multiply(&i, &kernel).unwrap(), a);
        assert_eq!(i.multiply(&a, &kernel).unwrap(), a);
    }

    #[test]
    fn test_multiply_dimension_mismatch() {
        let kernel = GeneralKernel::new();
        let a = Matrix::new(vec![1.0, 2.0, 3.0], Shape::new(1, 3));
        let b = Matrix::new(vec![1.0, 2.0, 3.0, 4.0], Shape::square(2));
        let err = a.multiply(&b, &kernel).unwrap_err();
        assert!(matches!(
            err,
            MatrixError::MatmulMismatch {
                m: 1,
                k: 3,
                k2: 2,
                n: 2
            }
        ));
    }

    #[test]
    fn test_multiply_square_kernel_rejects_rectangular() {
        let kernel = SquareKernel::new();
        let a = Matrix::new(vec![1.0; 6], Shape::new(2, 3));
        let b = Matrix::new(vec![1.0; 6], Shape::new(3, 2));
        assert!(a.multiply(&b, &kernel).is_err());
    }
}
