//! CLI error types.

use sampler_core::SamplerError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors that abort a driver run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid or unreadable configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A sampler invocation failed.
    #[error("Sampler error: {0}")]
    Sampler(#[from] SamplerError),

    /// Writing the results failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
