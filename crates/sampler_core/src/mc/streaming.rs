//! Streaming sampler.
//!
//! Points are generated one at a time and consumed immediately, so memory
//! use is constant. The sample range is split into contiguous
//! [`WorkerSpan`]s; each rayon task owns one span and one generator and
//! returns a local hit count. The counts are combined with a parallel sum.
//!
//! ```text
//! [0, N) ──partition──► span_0 … span_{W-1}
//!                          │          │
//!                    SamplerRng   SamplerRng   (seed = worker_seed(base, w))
//!                          │          │
//!                       hits_0 …  hits_{W-1}
//!                          └────sum───┘
//!                                │
//!                          PiEstimate
//! ```

use rayon::prelude::*;
use tracing::{debug, warn};

use super::config::SamplingConfig;
use super::error::ConfigError;
use super::estimate::PiEstimate;
use super::partition::{partition, WorkerSpan};
use crate::error::{check_inputs, SamplerError};
use crate::rng::{worker_seed, SamplerRng, UniformSource};

/// Draws `len` points of dimension `dim` from `source` and counts hits.
#[inline]
fn count_span<S: UniformSource>(dim: usize, len: u64, source: &mut S) -> u64 {
    let mut inside = 0;
    for _ in 0..len {
        let mut sum = 0.0;
        for _ in 0..dim {
            let x = source.next_symmetric();
            sum += x * x;
        }
        if sum <= 1.0 {
            inside += 1;
        }
    }
    inside
}

/// Counts hits over `total` points split across `workers` parallel streams.
///
/// `make_source` is called once per worker, on the worker's own thread, and
/// the returned source is used exclusively by that worker. The result is the
/// sum of the per-worker counts, so it depends only on the points drawn and
/// not on the partition.
///
/// # Examples
///
/// ```rust
/// use sampler_core::mc::count_hits_streaming;
/// use sampler_core::rng::{worker_seed, SamplerRng};
///
/// let hits = count_hits_streaming(2, 10_000, 4, |span| {
///     SamplerRng::from_seed(worker_seed(42, span.worker))
/// });
/// assert!(hits <= 10_000);
/// ```
pub fn count_hits_streaming<S, F>(dim: usize, total: u64, workers: usize, make_source: F) -> u64
where
    S: UniformSource,
    F: Fn(&WorkerSpan) -> S + Sync,
{
    partition(total, workers)
        .into_par_iter()
        .map(|span| {
            let mut source = make_source(&span);
            count_span(dim, span.len, &mut source)
        })
        .sum()
}

/// Streaming Monte Carlo π estimator.
///
/// # Examples
///
/// ```rust
/// use sampler_core::mc::{SamplingConfig, StreamingSampler};
///
/// let config = SamplingConfig::builder()
///     .total_samples(100_000)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// let sampler = StreamingSampler::new(config).unwrap();
/// let estimate = sampler.run(3, 1.0).unwrap();
/// assert!(estimate.hits <= estimate.samples);
/// ```
#[derive(Clone, Debug)]
pub struct StreamingSampler {
    config: SamplingConfig,
}

impl StreamingSampler {
    /// Creates a sampler after validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration is invalid.
    pub fn new(config: SamplingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the sampler configuration.
    #[inline]
    pub fn config(&self) -> &SamplingConfig {
        &self.config
    }

    /// Runs one invocation and returns its estimate.
    ///
    /// Blocks until every worker has finished.
    ///
    /// # Errors
    ///
    /// - [`SamplerError::InvalidDimension`] if `dim == 0`
    /// - [`SamplerError::InvalidRadius`] if `radius` is not finite and positive
    /// - [`SamplerError::NumericalOverflow`] if the estimate overflows
    pub fn run(&self, dim: usize, radius: f64) -> Result<PiEstimate, SamplerError> {
        check_inputs(dim, radius)?;

        let total = self.config.total_samples();
        let workers = self.config.effective_workers();
        let base = self.config.seed().base_seed();

        let hits = count_hits_streaming(dim, total, workers, |span| {
            SamplerRng::from_seed(worker_seed(base, span.worker))
        });

        if hits == 0 {
            warn!(dim, samples = total, "no samples landed inside the hypersphere");
        }

        let estimate = PiEstimate::from_hits(dim, radius, hits, total)?;
        debug!(
            dim,
            workers,
            base_seed = base,
            hits,
            samples = total,
            estimate = estimate.value,
            "streaming estimate complete"
        );
        Ok(estimate)
    }
}

/// Estimates π with the streaming sampler.
///
/// Convenience wrapper around [`StreamingSampler::run`] returning only the
/// value.
///
/// # Errors
///
/// Invalid configuration, dimension or radius; see [`StreamingSampler::run`].
pub fn estimate_pi(dim: usize, radius: f64, config: &SamplingConfig) -> Result<f64, SamplerError> {
    let sampler = StreamingSampler::new(config.clone())?;
    Ok(sampler.run(dim, radius)?.value)
}
