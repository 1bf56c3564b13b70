//! Batched sampler.
//!
//! Points are materialised into a reusable buffer one batch at a time.
//! Filling the buffer is single-threaded (one owned generator); counting
//! hits within the filled batch is a rayon parallel reduction over points.
//! Peak memory is bounded by `batch_size * dim` coordinates.

use tracing::{debug, trace, warn};

use super::config::SamplingConfig;
use super::error::ConfigError;
use super::estimate::PiEstimate;
use super::partition::BatchPlan;
use crate::error::{check_inputs, SamplerError};
use crate::geometry::par_count_inside;
use crate::rng::{SamplerRng, UniformSource};

/// Allocates the zeroed batch buffer, reporting failure instead of aborting.
fn allocate_buffer(points: u64, dim: usize) -> Result<Vec<f64>, SamplerError> {
    let elements = usize::try_from(points)
        .ok()
        .and_then(|p| p.checked_mul(dim))
        .ok_or(SamplerError::Allocation {
            elements: usize::MAX,
        })?;

    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(elements)
        .map_err(|_| SamplerError::Allocation { elements })?;
    buffer.resize(elements, 0.0);
    Ok(buffer)
}

/// Counts hits over all batches of `plan`, drawing coordinates from `source`.
///
/// The running total never exceeds `plan.total_samples()`.
///
/// # Errors
///
/// [`SamplerError::Allocation`] if the batch buffer cannot be allocated.
///
/// # Panics
///
/// Panics if `dim == 0`.
pub fn count_hits_batched<S: UniformSource>(
    dim: usize,
    plan: &BatchPlan,
    source: &mut S,
) -> Result<u64, SamplerError> {
    let mut buffer = allocate_buffer(plan.max_batch_len(), dim)?;
    let mut total_in = 0;

    for (b, len) in plan.batch_lens().enumerate() {
        // len <= max_batch_len, which fit in usize above
        let batch = &mut buffer[..len as usize * dim];
        source.fill_symmetric(batch);

        let inside = par_count_inside(batch, dim);
        trace!(batch = b, len, inside, "batch counted");
        total_in += inside;
    }

    Ok(total_in)
}

/// Batched Monte Carlo π estimator.
///
/// Statistically interchangeable with the
/// [`StreamingSampler`](super::StreamingSampler); use it when bounded,
/// explicit sample buffers are wanted.
///
/// # Examples
///
/// ```rust
/// use sampler_core::mc::{BatchedSampler, SamplingConfig};
///
/// let config = SamplingConfig::builder()
///     .total_samples(100_000)
///     .batch_size(30_000)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// let estimate = BatchedSampler::new(config).unwrap().run(2, 1.0).unwrap();
/// assert!((estimate.value - std::f64::consts::PI).abs() < 0.1);
/// ```
#[derive(Clone, Debug)]
pub struct BatchedSampler {
    config: SamplingConfig,
}

impl BatchedSampler {
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

    /// Returns the batch layout used for every invocation.
    #[inline]
    pub fn plan(&self) -> BatchPlan {
        BatchPlan::new(self.config.total_samples(), self.config.batch_size())
    }

    /// Runs one invocation and returns its estimate.
    ///
    /// # Errors
    ///
    /// - [`SamplerError::InvalidDimension`] / [`SamplerError::InvalidRadius`]
    /// - [`SamplerError::Allocation`] if the batch buffer cannot be allocated
    /// - [`SamplerError::NumericalOverflow`] if the estimate overflows
    pub fn run(&self, dim: usize, radius: f64) -> Result<PiEstimate, SamplerError> {
        check_inputs(dim, radius)?;

        let plan = self.plan();
        let mut rng = SamplerRng::from_seed(self.config.seed().base_seed());
        let hits = count_hits_batched(dim, &plan, &mut rng)?;

        if hits == 0 {
            warn!(
                dim,
                samples = plan.total_samples(),
                "no samples landed inside the hypersphere"
            );
        }

        let estimate = PiEstimate::from_hits(dim, radius, hits, plan.total_samples())?;
        debug!(
            dim,
            batches = plan.n_batches(),
            batch_size = plan.batch_size(),
            seed = rng.seed(),
            hits,
            samples = plan.total_samples(),
            estimate = estimate.value,
            "batched estimate complete"
        );
        Ok(estimate)
    }
}

/// Estimates π with the batched sampler.
///
/// # Errors
///
/// See [`BatchedSampler::run`].
pub fn estimate_pi_batched(
    dim: usize,
    radius: f64,
    config: &SamplingConfig,
) -> Result<f64, SamplerError> {
    let sampler = BatchedSampler::new(config.clone())?;
    Ok(sampler.run(dim, radius)?.value)
}
