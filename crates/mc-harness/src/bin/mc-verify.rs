//! File-driven verification driver.
//!
//! ```text
//! mc-verify <method> <size> <a-file> <b-file> <expected-c-file>
//! ```
//!
//! Loads three size-by-size matrices, multiplies A by B with the kernel the
//! method code selects (1 = general, 2 = square fast path), and compares
//! the product against the expected matrix. Exit status 0 on a pass, 1 on a
//! result mismatch, 2 on configuration or I/O errors.

use std::path::PathBuf;
use std::process::ExitCode;

use mc_harness::error::{HarnessError, Result};
use mc_harness::loader;
use mc_harness::runner::{self, Method};
use mc_matrix::{Shape, DEFAULT_TOLERANCE};

const USAGE: &str = "mc-verify <method> <size> <a-file> <b-file> <expected-c-file>";

struct Args {
    method: i32,
    size: usize,
    a_path: PathBuf,
    b_path: PathBuf,
    c_path: PathBuf,
}

fn parse_args(mut argv: impl Iterator<Item = String>) -> Result<Args> {
    let usage = || HarnessError::Usage(USAGE.to_string());

    argv.next(); // program name

    let method = argv.next().ok_or_else(usage)?.parse().map_err(|_| usage())?;
    let size = argv.next().ok_or_else(usage)?.parse().map_err(|_| usage())?;
    let a_path = PathBuf::from(argv.next().ok_or_else(usage)?);
    let b_path = PathBuf::from(argv.next().ok_or_else(usage)?);
    let c_path = PathBuf::from(argv.next().ok_or_else(usage)?);

    if argv.next().is_some() {
        return Err(usage());
    }

    Ok(Args {
        method,
        size,
        a_path,
        b_path,
        c_path,
    })
}

fn verify(args: &Args) -> Result<bool> {
    let method = Method::try_from(args.method)?;
    let shape = Shape::square(args.size);

    let a = loader::read_matrix(&args.a_path, shape)?;
    let b = loader::read_matrix(&args.b_path, shape)?;
    let expected = loader::read_matrix(&args.c_path, shape)?;

    let outcome = runner::run(method, &a, &b, &expected, DEFAULT_TOLERANCE)?;
    if outcome.passed {
        println!("All tests pass.");
    } else {
        eprintln!(
            "result mismatch: max |expected - computed| = {:e}",
            outcome.max_abs_diff
        );
    }
    Ok(outcome.passed)
}

fn main() -> ExitCode {
    let args = match parse_args(std::env::args()) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("mc-verify: {e}");
            return ExitCode::from(2);
        }
    };

    match verify(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("mc-verify: {e}");
            ExitCode::from(2)
        }
    }
}
