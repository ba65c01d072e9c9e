use std::path::PathBuf;

use thiserror::Error;

use mc_matrix::Shape;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{}:{line}: invalid matrix value {value:?}", path.display())]
    InvalidValue {
        path: PathBuf,
        line: usize,
        value: String,
    },
    #[error("{}: header declares {got}, expected {expected}", path.display())]
    HeaderMismatch {
        path: PathBuf,
        expected: Shape,
        got: Shape,
    },
    #[error("{}: found {got} values, expected {expected}", path.display())]
    ElementCount {
        path: PathBuf,
        expected: usize,
        got: usize,
    },
    #[error("invalid method selected: {0}")]
    InvalidMethod(i32),
    #[error("matrix error: {0}")]
    Matrix(#[from] mc_matrix::MatrixError),
    #[error("usage: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
