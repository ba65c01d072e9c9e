//! Element-wise result comparison.
//!
//! Equality is absolute: two elements match when `|expected - actual|` is
//! at most the tolerance. Exact `==` comparison is fragile for results
//! produced by different summation orders, so callers that really want it
//! can pass a tolerance of `0.0`.

use crate::matrix::Matrix;

/// Default absolute tolerance for element comparison.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Slice-level comparison in row-major order.
///
/// True only if both slices have the same length and every pair of
/// elements differs by at most `tolerance`. NaN never matches anything.
pub fn approx_eq(expected: &[f64], actual: &[f64], tolerance: f64) -> bool {
    expected.len() == actual.len()
        && expected
            .iter()
            .zip(actual)
            .all(|(e, a)| (e - a).abs() <= tolerance)
}

/// Matrix-level comparison: shapes must match, then element-wise.
pub fn matrices_equal(expected: &Matrix, actual: &Matrix, tolerance: f64) -> bool {
    expected.shape() == actual.shape() && approx_eq(expected.data(), actual.data(), tolerance)
}

/// Largest absolute element-wise difference, for mismatch diagnostics.
///
/// Returns infinity if the shapes differ.
pub fn max_abs_diff(expected: &Matrix, actual: &Matrix) -> f64 {
    if expected.shape() != actual.shape() {
        return f64::INFINITY;
    }
    expected
        .data()
        .iter()
        .zip(actual.data())
        .map(|(e, a)| (e - a).abs())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::Shape;

    #[test]
    fn test_reflexive() {
        let m = Matrix::new(vec![1.0, 2.5, -3.0, 0.0], Shape::square(2));
        assert!(matrices_equal(&m, &m, 0.0));
        assert!(matrices_equal(&m, &m, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_within_tolerance() {
        let a = Matrix::new(vec![1.0, 2.0], Shape::new(1, 2));
        let b = Matrix::new(vec![1.0 + 5e-10, 2.0], Shape::new(1, 2));
        assert!(matrices_equal(&a, &b, 1e-9));
        assert!(!matrices_equal(&a, &b, 0.0));
    }

    #[test]
    fn test_single_element_sensitivity() {
        let a = Matrix::new(vec![1.0, 2.0, 3.0, 4.0], Shape::square(2));
        let mut data = a.data().to_vec();
        data[2] += 2e-9;
        let b = Matrix::new(data, Shape::square(2));
        assert!(!matrices_equal(&a, &b, 1e-9));
    }

    #[test]
    fn test_shape_mismatch() {
        let a = Matrix::new(vec![1.0, 2.0], Shape::new(1, 2));
        let b = Matrix::new(vec![1.0, 2.0], Shape::new(2, 1));
        assert!(!matrices_equal(&a, &b, DEFAULT_TOLERANCE));
        assert_eq!(max_abs_diff(&a, &b), f64::INFINITY);
    }

    #[test]
    fn test_length_mismatch_slices() {
        assert!(!approx_eq(&[1.0], &[1.0, 2.0], 1.0));
    }

    #[test]
    fn test_nan_never_matches() {
        let a = Matrix::new(vec![f64::NAN], Shape::new(1, 1));
        assert!(!matrices_equal(&a, &a, DEFAULT_TOLERANCE));
    }

    #[test]
    fn test_max_abs_diff() {
        let a = Matrix::new(vec![1.0, 2.0, 3.0], Shape::new(1, 3));
        let b = Matrix::new(vec![1.5, 2.0, 2.0], Shape::new(1, 3));
        assert_eq!(max_abs_diff(&a, &b), 1.0);
    }
}
