//! Sampler configuration.
//!
//! This module provides the configuration type and builder shared by the
//! streaming and batched samplers.

use super::error::ConfigError;
use crate::rng::clock_seed;

/// Default number of samples drawn per estimate.
pub const DEFAULT_TOTAL_SAMPLES: u64 = 500_000_000;

/// Default number of points materialised per batch by the batched sampler.
pub const DEFAULT_BATCH_SIZE: u64 = 50_000_000;

/// How the base seed of an invocation is chosen.
///
/// Per-worker seeds are always derived from the base seed with
/// [`worker_seed`](crate::rng::worker_seed).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SeedPolicy {
    /// Fresh seed from the wall clock for every invocation.
    #[default]
    Clock,

    /// Fixed seed; identical inputs give bit-identical estimates.
    ///
    /// The streaming sampler splits samples into one stream per worker, so
    /// the estimate also depends on the worker count. Without an explicit
    /// [`SamplingConfigBuilder::workers`] that count is the rayon pool size,
    /// and results only repeat across machines with the same parallelism.
    Fixed(u64),
}

impl SeedPolicy {
    /// Resolves the base seed for one sampler invocation.
    #[inline]
    pub fn base_seed(&self) -> u64 {
        match self {
            Self::Clock => clock_seed(),
            Self::Fixed(seed) => *seed,
        }
    }
}

/// Monte Carlo sampling configuration.
///
/// Immutable; use [`SamplingConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use sampler_core::mc::{SamplingConfig, SeedPolicy};
///
/// let config = SamplingConfig::builder()
///     .total_samples(1_000_000)
///     .batch_size(250_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.total_samples(), 1_000_000);
/// assert_eq!(config.seed(), SeedPolicy::Fixed(42));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SamplingConfig {
    /// Number of points drawn per estimate.
    total_samples: u64,
    /// Points per batch (batched sampler only).
    batch_size: u64,
    /// Number of worker streams; `None` means one per rayon thread.
    workers: Option<usize>,
    /// Seed policy.
    seed: SeedPolicy,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            total_samples: DEFAULT_TOTAL_SAMPLES,
            batch_size: DEFAULT_BATCH_SIZE,
            workers: None,
            seed: SeedPolicy::Clock,
        }
    }
}

impl SamplingConfig {
    /// Creates a new configuration builder starting from the defaults.
    #[inline]
    pub fn builder() -> SamplingConfigBuilder {
        SamplingConfigBuilder::default()
    }

    /// Returns the number of points drawn per estimate.
    #[inline]
    pub fn total_samples(&self) -> u64 {
        self.total_samples
    }

    /// Returns the batch size of the batched sampler.
    #[inline]
    pub fn batch_size(&self) -> u64 {
        self.batch_size
    }

    /// Returns the explicit worker count, if any.
    #[inline]
    pub fn workers(&self) -> Option<usize> {
        self.workers
    }

    /// Returns the number of worker streams the streaming sampler will use.
    ///
    /// Falls back to the size of the current rayon pool.
    #[inline]
    pub fn effective_workers(&self) -> usize {
        self.workers
            .unwrap_or_else(rayon::current_num_threads)
            .max(1)
    }

    /// Returns the seed policy.
    #[inline]
    pub fn seed(&self) -> SeedPolicy {
        self.seed
    }

    /// Returns a copy of this configuration with a different seed policy.
    ///
    /// The seed never affects validity, so no re-validation is needed.
    #[inline]
    pub fn with_seed_policy(mut self, seed: SeedPolicy) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the sample count, batch size or explicit
    /// worker count is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_samples == 0 {
            return Err(ConfigError::InvalidSampleCount(self.total_samples));
        }
        if self.batch_size == 0 {
            return Err(ConfigError::InvalidBatchSize(self.batch_size));
        }
        if let Some(0) = self.workers {
            return Err(ConfigError::InvalidWorkerCount(0));
        }
        Ok(())
    }
}

/// Builder for [`SamplingConfig`].
///
/// Unset fields keep their defaults; validation happens in [`build`](Self::build).
#[derive(Clone, Debug, Default)]
pub struct SamplingConfigBuilder {
    inner: SamplingConfig,
}

impl SamplingConfigBuilder {
    /// Sets the number of points drawn per estimate.
    #[inline]
    pub fn total_samples(mut self, total_samples: u64) -> Self {
        self.inner.total_samples = total_samples;
        self
    }

    /// Sets the batch size of the batched sampler.
    #[inline]
    pub fn batch_size(mut self, batch_size: u64) -> Self {
        self.inner.batch_size = batch_size;
        self
    }

    /// Sets an explicit number of worker streams.
    #[inline]
    pub fn workers(mut self, workers: usize) -> Self {
        self.inner.workers = Some(workers);
        self
    }

    /// Fixes the base seed for reproducible estimates.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.inner.seed = SeedPolicy::Fixed(seed);
        self
    }

    /// Sets the seed policy.
    #[inline]
    pub fn seed_policy(mut self, seed: SeedPolicy) -> Self {
        self.inner.seed = seed;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any field is invalid.
    pub fn build(self) -> Result<SamplingConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_run() {
        let config = SamplingConfig::builder().build().unwrap();

        assert_eq!(config.total_samples(), 500_000_000);
        assert_eq!(config.batch_size(), 50_000_000);
        assert_eq!(config.workers(), None);
        assert_eq!(config.seed(), SeedPolicy::Clock);
    }

    #[test]
    fn test_builder_overrides() {
        let config = SamplingConfig::builder()
            .total_samples(10)
            .batch_size(3)
            .workers(4)
            .seed(99)
            .build()
            .unwrap();

        assert_eq!(config.total_samples(), 10);
        assert_eq!(config.batch_size(), 3);
        assert_eq!(config.workers(), Some(4));
        assert_eq!(config.effective_workers(), 4);
        assert_eq!(config.seed(), SeedPolicy::Fixed(99));
    }

    #[test]
    fn test_effective_workers_defaults_to_pool_size() {
        let config = SamplingConfig::default();
        assert_eq!(config.effective_workers(), rayon::current_num_threads().max(1));
    }

    #[test]
    fn test_invalid_zero_samples() {
        let result = SamplingConfig::builder().total_samples(0).build();
        assert_eq!(result, Err(ConfigError::InvalidSampleCount(0)));
    }

    #[test]
    fn test_invalid_zero_batch() {
        let result = SamplingConfig::builder().batch_size(0).build();
        assert_eq!(result, Err(ConfigError::InvalidBatchSize(0)));
    }

    #[test]
    fn test_invalid_zero_workers() {
        let result = SamplingConfig::builder().workers(0).build();
        assert_eq!(result, Err(ConfigError::InvalidWorkerCount(0)));
    }

    #[test]
    fn test_with_seed_policy_keeps_other_fields() {
        let config = SamplingConfig::builder()
            .total_samples(10)
            .workers(3)
            .build()
            .unwrap()
            .with_seed_policy(SeedPolicy::Fixed(8));

        assert_eq!(config.total_samples(), 10);
        assert_eq!(config.workers(), Some(3));
        assert_eq!(config.seed(), SeedPolicy::Fixed(8));
    }

    #[test]
    fn test_seed_policy() {
        assert_eq!(SeedPolicy::default(), SeedPolicy::Clock);
        assert_eq!(SeedPolicy::Fixed(5).base_seed(), 5);
        assert_ne!(SeedPolicy::Clock.base_seed(), SeedPolicy::Clock.base_seed());
    }
}
