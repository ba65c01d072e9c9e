//! Random fixture generator.
//!
//! ```text
//! mc-genmat <size> <out-dir>
//! ```
//!
//! Writes `a_<size>.txt` and `b_<size>.txt` filled with uniform random
//! values, plus the expected product `c_<size>.txt` computed with the
//! general kernel. The output files use the same format `mc-verify` reads,
//! so a generated triple passes verification as-is.

use std::path::PathBuf;
use std::process::ExitCode;

use mc_harness::error::HarnessError;
use mc_harness::gen;

const USAGE: &str = "mc-genmat <size> <out-dir>";

fn main() -> ExitCode {
    let mut argv = std::env::args();
    argv.next(); // program name

    let parsed = argv
        .next()
        .and_then(|s| s.parse::<usize>().ok())
        .zip(argv.next().map(PathBuf::from))
        .ok_or_else(|| HarnessError::Usage(USAGE.to_string()));

    let result = parsed.and_then(|(size, out_dir)| {
        let mut rng = rand::thread_rng();
        gen::generate_fixtures(&mut rng, size, &out_dir).map(|_| ())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("mc-genmat: {e}");
            ExitCode::from(2)
        }
    }
}
