use thiserror::Error;

use crate::shape::Shape;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("matmul dimension mismatch: [{m}x{k}] @ [{k2}x{n}]")]
    MatmulMismatch {
        m: usize,
        k: usize,
        k2: usize,
        n: usize,
    },
    #[error("square kernel requires equal dimensions, got [{m}x{k}] @ [{k}x{n}]")]
    NotSquare { m: usize, k: usize, n: usize },
    #[error("buffer holds {got} elements but {expected} are required")]
    DataLength { expected: usize, got: usize },
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: Shape, got: Shape },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
