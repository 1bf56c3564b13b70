//! Error types for sampler configuration.
//!
//! These errors occur when a [`SamplingConfig`](super::SamplingConfig) is
//! built with invalid parameters.

use thiserror::Error;

/// Configuration error for the samplers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Total sample count of zero; the hit fraction would be undefined.
    #[error("Invalid sample count {0}: must be at least 1")]
    InvalidSampleCount(u64),

    /// Batch size of zero.
    #[error("Invalid batch size {0}: must be at least 1")]
    InvalidBatchSize(u64),

    /// Worker count of zero.
    #[error("Invalid worker count {0}: must be at least 1")]
    InvalidWorkerCount(usize),
}
