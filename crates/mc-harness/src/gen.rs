//! Random fixture generation.
//!
//! Produces matrix triples (A, B, A@B) as fixture files that verification
//! can consume directly. Values are uniform in [0, 10) rounded to two
//! decimals, so the files stay small and readable.

use std::path::{Path, PathBuf};

use rand::Rng;

use mc_matrix::{GeneralKernel, Matrix, Shape};

use crate::error::Result;
use crate::loader;

/// Paths of one generated fixture triple.
#[derive(Debug)]
pub struct FixturePaths {
    pub a: PathBuf,
    pub b: PathBuf,
    pub c: PathBuf,
}

/// Uniform random matrix in [0, 10), rounded to two decimals.
pub fn random_matrix(rng: &mut impl Rng, shape: Shape) -> Matrix {
    let data = (0..shape.numel())
        .map(|_| (rng.gen_range(0.0..10.0) * 100.0_f64).round() / 100.0)
        .collect();
    Matrix::new(data, shape)
}

/// Generate `a_<size>.txt`, `b_<size>.txt`, and their product
/// `c_<size>.txt` under `out_dir`, creating the directory if needed.
pub fn generate_fixtures(
    rng: &mut impl Rng,
    size: usize,
    out_dir: &Path,
) -> Result<FixturePaths> {
    std::fs::create_dir_all(out_dir)?;

    let shape = Shape::square(size);
    let a = random_matrix(rng, shape);
    let b = random_matrix(rng, shape);
    let c = a.multiply(&b, &GeneralKernel::new())?;

    let paths = FixturePaths {
        a: out_dir.join(format!("a_{size}.txt")),
        b: out_dir.join(format!("b_{size}.txt")),
        c: out_dir.join(format!("c_{size}.txt")),
    };
    loader::write_matrix(&paths.a, &a)?;
    loader::write_matrix(&paths.b, &b)?;
    loader::write_matrix(&paths.c, &c)?;
    Ok(paths)
}
