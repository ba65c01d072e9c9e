//! Text fixture format for dense matrices.
//!
//! A fixture file holds zero or more leading `#` comment lines followed by
//! `rows * cols` whitespace-separated decimal values in row-major order.
//! Line breaks between values are not significant. The first comment line
//! consisting of exactly two integers (`# ROWS COLS`) is treated as a
//! dimension header and validated against the shape the caller requested;
//! other comments are skipped.
//! `write_matrix` emits that header, so files round-trip through this
//! module unchanged in meaning.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use mc_matrix::{Matrix, Shape};

use crate::error::{HarnessError, Result};

/// Read a matrix of the given shape from a fixture file.
///
/// Errors on missing files, malformed values, a header disagreeing with
/// `shape`, or a value count other than `shape.numel()`.
pub fn read_matrix(path: &Path, shape: Shape) -> Result<Matrix> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut values = Vec::with_capacity(shape.numel());
    let mut header_checked = false;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }

        if let Some(rest) = text.strip_prefix('#') {
            if values.is_empty() && !header_checked {
                if let Some(declared) = parse_header(rest) {
                    header_checked = true;
                    if declared != shape {
                        return Err(HarnessError::HeaderMismatch {
                            path: path.to_path_buf(),
                            expected: shape,
                            got: declared,
                        });
                    }
                }
            }
            continue;
        }

        for token in text.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| HarnessError::InvalidValue {
                path: path.to_path_buf(),
                line: idx + 1,
                value: token.to_string(),
            })?;
            values.push(value);
        }
    }

    if values.len() != shape.numel() {
        return Err(HarnessError::ElementCount {
            path: path.to_path_buf(),
            expected: shape.numel(),
            got: values.len(),
        });
    }

    Ok(Matrix::new(values, shape))
}

/// Write a matrix in the format `read_matrix` accepts: a `# ROWS COLS`
/// header followed by one line per row.
pub fn write_matrix(path: &Path, matrix: &Matrix) -> Result<()> {
    let shape = matrix.shape();
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(out, "# {} {}", shape.rows, shape.cols)?;
    for r in 0..shape.rows {
        for c in 0..shape.cols {
            if c > 0 {
                write!(out, " ")?;
            }
            write!(out, "{}", matrix.get(r, c))?;
        }
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

/// Parse a comment body as a `ROWS COLS` dimension header.
///
/// Returns None for ordinary comments.
fn parse_header(rest: &str) -> Option<Shape> {
    let mut parts = rest.split_whitespace();
    let rows = parts.next()?.parse().ok()?;
    let cols = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Shape::new(rows, cols))
}
