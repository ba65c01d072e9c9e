use mc_matrix::{compare, GeneralKernel, Matrix, MatrixError, MulKernel, SquareKernel};

use crate::error::{HarnessError, Result};

/// Kernel selection code, as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Code 1: the general-shape kernel.
    General,
    /// Code 2: the square-only fast path.
    Square,
}

impl Method {
    /// Instantiate the kernel this method selects.
    pub fn kernel(&self) -> Box<dyn MulKernel> {
        match self {
            Method::General => Box::new(GeneralKernel::new()),
            Method::Square => Box::new(SquareKernel::new()),
        }
    }
}

impl TryFrom<i32> for Method {
    type Error = HarnessError;

    fn try_from(code: i32) -> Result<Method> {
        match code {
            1 => Ok(Method::General),
            2 => Ok(Method::Square),
            other => Err(HarnessError::InvalidMethod(other)),
        }
    }
}

/// Outcome of one verification run.
#[derive(Debug)]
pub struct Verification {
    /// True if the computed product matched `expected` within tolerance.
    pub passed: bool,
    /// Largest element-wise deviation, for diagnostics.
    pub max_abs_diff: f64,
}

/// Multiply `a` by `b` with the selected kernel and compare the product
/// against `expected`.
///
/// Shape compatibility is validated before any arithmetic: the kernel
/// checks its own preconditions, and the expected matrix must have the
/// product's shape. The scratch product buffer lives only inside this call.
pub fn run(
    method: Method,
    a: &Matrix,
    b: &Matrix,
    expected: &Matrix,
    tolerance: f64,
) -> Result<Verification> {
    let kernel = method.kernel();
    let computed = a.multiply(b, kernel.as_ref())?;

    if computed.shape() != expected.shape() {
        return Err(HarnessError::Matrix(MatrixError::ShapeMismatch {
            expected: computed.shape(),
            got: expected.shape(),
        }));
    }

    Ok(Verification {
        passed: compare::matrices_equal(expected, &computed, tolerance),
        max_abs_diff: compare::max_abs_diff(expected, &computed),
    })
}
