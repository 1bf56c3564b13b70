//! Monte Carlo samplers for hypersphere-volume π estimation.
//!
//! Two estimators share one contract: given a dimension `d`, a radius `r`
//! and a [`SamplingConfig`], draw `N` points uniformly in `[-1, 1]^d`, count
//! those with squared norm ≤ 1, and convert the hit fraction into a π
//! estimate with [`pi_from_hits`](crate::geometry::pi_from_hits).
//!
//! # Architecture
//!
//! ```text
//! SamplingConfig (N, batch size, workers, seed policy)
//! ├── StreamingSampler   one point at a time, one generator per worker,
//! │                      parallel sum of per-worker hit counts
//! └── BatchedSampler     sequential batches into a reusable buffer,
//!                        single-threaded fill, parallel count per batch
//! ```
//!
//! Both block until the reduction completes; no partial estimate is ever
//! observable.
//!
//! # Examples
//!
//! ```rust
//! use sampler_core::mc::{estimate_pi, estimate_pi_batched, SamplingConfig};
//!
//! let config = SamplingConfig::builder()
//!     .total_samples(200_000)
//!     .batch_size(64_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let streaming = estimate_pi(3, 1.0, &config).unwrap();
//! let batched = estimate_pi_batched(3, 1.0, &config).unwrap();
//!
//! assert!((streaming - std::f64::consts::PI).abs() < 0.1);
//! assert!((batched - std::f64::consts::PI).abs() < 0.1);
//! ```

pub mod batched;
pub mod config;
pub mod error;
pub mod estimate;
pub mod partition;
pub mod pool;
pub mod streaming;

// Re-exports for convenient access
pub use batched::{count_hits_batched, estimate_pi_batched, BatchedSampler};
pub use config::{
    SamplingConfig, SamplingConfigBuilder, SeedPolicy, DEFAULT_BATCH_SIZE, DEFAULT_TOTAL_SAMPLES,
};
pub use error::ConfigError;
pub use estimate::PiEstimate;
pub use partition::{partition, BatchPlan, WorkerSpan};
pub use pool::configure_global_pool;
pub use streaming::{count_hits_streaming, estimate_pi, StreamingSampler};

/// Which estimator to run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Estimator {
    /// [`StreamingSampler`].
    #[default]
    Streaming,
    /// [`BatchedSampler`].
    Batched,
}

impl Estimator {
    /// Returns the lowercase name of the estimator.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Streaming => "streaming",
            Self::Batched => "batched",
        }
    }

    /// Runs one invocation of this estimator.
    ///
    /// # Errors
    ///
    /// See [`StreamingSampler::run`] and [`BatchedSampler::run`].
    pub fn run(
        &self,
        dim: usize,
        radius: f64,
        config: &SamplingConfig,
    ) -> Result<PiEstimate, crate::SamplerError> {
        match self {
            Self::Streaming => StreamingSampler::new(config.clone())?.run(dim, radius),
            Self::Batched => BatchedSampler::new(config.clone())?.run(dim, radius),
        }
    }
}

impl std::fmt::Display for Estimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Estimator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "streaming" | "stream" => Ok(Self::Streaming),
            "batched" | "batch" => Ok(Self::Batched),
            other => Err(format!(
                "unknown estimator '{}': expected 'streaming' or 'batched'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimator_parsing() {
        assert_eq!("streaming".parse::<Estimator>(), Ok(Estimator::Streaming));
        assert_eq!("Batched".parse::<Estimator>(), Ok(Estimator::Batched));
        assert_eq!("batch".parse::<Estimator>(), Ok(Estimator::Batched));
        assert!("adaptive".parse::<Estimator>().is_err());
    }

    #[test]
    fn test_estimator_display_round_trips() {
        for estimator in [Estimator::Streaming, Estimator::Batched] {
            assert_eq!(estimator.to_string().parse::<Estimator>(), Ok(estimator));
        }
        assert_eq!(Estimator::default(), Estimator::Streaming);
    }

    #[test]
    fn test_estimator_run_dispatches() {
        let config = SamplingConfig::builder()
            .total_samples(1_000)
            .batch_size(300)
            .seed(9)
            .build()
            .unwrap();

        let streaming = Estimator::Streaming.run(2, 1.0, &config).unwrap();
        let batched = Estimator::Batched.run(2, 1.0, &config).unwrap();
        assert_eq!(streaming.samples, 1_000);
        assert_eq!(batched.samples, 1_000);
    }
}
