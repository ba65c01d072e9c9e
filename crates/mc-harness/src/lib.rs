//! `mc-harness` - Matrix fixture loading and verification for matcheck.
//!
//! This crate provides:
//! - A text fixture reader/writer for dense matrices
//! - A verification runner that multiplies two loaded matrices with a
//!   selected kernel and compares the result against a third
//! - Kernel selection by numeric method code

pub mod error;
pub mod gen;
pub mod loader;
pub mod runner;

pub use error::{HarnessError, Result};
pub use runner::{run, Method, Verification};
