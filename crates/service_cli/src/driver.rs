//! Dimension sweep driver.
//!
//! For each dimension in the configured range the driver runs the selected
//! estimator `iterations` times and writes one CSV-like line:
//!
//! ```text
//! 3,3.141523,3.141672,...,3.141598,
//! ```
//!
//! The dimension is followed by a comma, each estimate is printed with six
//! decimals and a trailing comma, and the line ends with a newline.

use std::io::Write;

use sampler_core::mc::{SamplingConfig, SeedPolicy};
use sampler_core::rng::worker_seed;
use tracing::{debug, info};

use crate::config::DriverConfig;
use crate::error::Result;

/// Formats one output row.
pub fn format_row(dim: usize, estimates: &[f64]) -> String {
    let values: String = estimates.iter().map(|v| format!("{:.6},", v)).collect();
    format!("{},{}\n", dim, values)
}

/// Runs the configured sweep.
#[derive(Debug, Clone)]
pub struct Driver {
    config: DriverConfig,
    sampling: SamplingConfig,
}

impl Driver {
    /// Creates a driver from a validated configuration.
    pub fn new(config: DriverConfig) -> Result<Self> {
        config.validate()?;
        let sampling = config.sampling_config().map_err(crate::config::ConfigError::from)?;
        Ok(Self { config, sampling })
    }

    /// Returns the driver configuration.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Returns the sampler configuration for one run of the sweep.
    ///
    /// A fixed base seed is mixed with the dimension and iteration so every
    /// run draws its own stream while the sweep as a whole stays
    /// reproducible. Clock seeding is left as is.
    pub fn run_config(&self, dim: usize, iteration: usize) -> SamplingConfig {
        match self.sampling.seed() {
            SeedPolicy::Fixed(base) => {
                let seed = worker_seed(worker_seed(base, dim), iteration);
                self.sampling.clone().with_seed_policy(SeedPolicy::Fixed(seed))
            }
            SeedPolicy::Clock => self.sampling.clone(),
        }
    }

    /// Runs every iteration for one dimension and returns the estimates in order.
    pub fn run_dimension(&self, dim: usize) -> Result<Vec<f64>> {
        let mut estimates = Vec::with_capacity(self.config.iterations);
        for iteration in 0..self.config.iterations {
            let sampling = self.run_config(dim, iteration);
            let estimate = self
                .config
                .estimator
                .run(dim, self.config.radius, &sampling)?;
            debug!(
                dim,
                iteration,
                hits = estimate.hits,
                value = estimate.value,
                "Estimate complete"
            );
            estimates.push(estimate.value);
        }
        Ok(estimates)
    }

    /// Runs the whole sweep, writing one line per dimension to `out`.
    ///
    /// Each line is flushed as soon as its dimension completes.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        info!(
            estimator = %self.config.estimator,
            samples = self.config.samples,
            iterations = self.config.iterations,
            min_dim = self.config.min_dim,
            max_dim = self.config.max_dim,
            "Starting sweep"
        );

        for dim in self.config.dimensions() {
            let estimates = self.run_dimension(dim)?;
            out.write_all(format_row(dim, &estimates).as_bytes())?;
            out.flush()?;
            info!(dim, "Dimension complete");
        }

        Ok(())
    }
}
