//! Command-line driver for hypersphere Monte Carlo π estimation
//!
//! Sweeps a range of dimensions, runs the selected estimator a fixed number
//! of times per dimension, and prints one comma-terminated line of estimates
//! per dimension on stdout. Diagnostics go to stderr through `tracing`.

pub mod config;
pub mod driver;
pub mod error;

pub use error::{CliError, Result};

/// Driver version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
