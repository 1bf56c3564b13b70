//! Driver configuration management
//!
//! Handles loading configuration from defaults, an optional TOML file, and
//! CLI arguments. With no file and no flags the driver reproduces the
//! reference run: dimensions 2..=10, 25 streaming estimates each,
//! 500,000,000 samples per estimate, radius 1.0.

use serde::Deserialize;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use sampler_core::mc::{
    Estimator, SamplingConfig, SeedPolicy, DEFAULT_BATCH_SIZE, DEFAULT_TOTAL_SAMPLES,
};

/// Default smallest dimension.
pub const DEFAULT_MIN_DIM: usize = 2;

/// Default largest dimension.
pub const DEFAULT_MAX_DIM: usize = 10;

/// Default number of estimates per dimension.
pub const DEFAULT_ITERATIONS: usize = 25;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid dimension range {min}..={max}: need 1 <= min <= max")]
    InvalidDimensionRange { min: usize, max: usize },

    #[error("Invalid iteration count {0}: must be at least 1")]
    InvalidIterations(usize),

    #[error("Invalid radius {0}: must be finite and positive")]
    InvalidRadius(f64),

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid estimator: {0}")]
    InvalidEstimator(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error(transparent)]
    Sampling(#[from] sampler_core::ConfigError),
}

/// Log levels supported by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Driver configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DriverConfig {
    /// Estimator to run
    #[serde(deserialize_with = "deserialize_estimator")]
    pub estimator: Estimator,
    /// Samples per estimate
    pub samples: u64,
    /// Points per batch (batched estimator)
    pub batch_size: u64,
    /// Estimates per dimension
    pub iterations: usize,
    /// Smallest dimension, inclusive
    pub min_dim: usize,
    /// Largest dimension, inclusive
    pub max_dim: usize,
    /// Hypersphere radius
    pub radius: f64,
    /// Fixed base seed; clock-seeded when absent
    pub seed: Option<u64>,
    /// Worker pool size; rayon default when absent
    pub threads: Option<usize>,
    /// Worker streams per estimate; pool size when absent
    pub workers: Option<usize>,
    /// Log level
    pub log_level: LogLevel,
}

fn deserialize_estimator<'de, D>(deserializer: D) -> Result<Estimator, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Estimator::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            estimator: Estimator::Streaming,
            samples: DEFAULT_TOTAL_SAMPLES,
            batch_size: DEFAULT_BATCH_SIZE,
            iterations: DEFAULT_ITERATIONS,
            min_dim: DEFAULT_MIN_DIM,
            max_dim: DEFAULT_MAX_DIM,
            radius: 1.0,
            seed: None,
            threads: None,
            workers: None,
            log_level: LogLevel::Warn,
        }
    }
}

impl DriverConfig {
    /// Create a new DriverConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DriverConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_dim == 0 || self.min_dim > self.max_dim {
            return Err(ConfigError::InvalidDimensionRange {
                min: self.min_dim,
                max: self.max_dim,
            });
        }
        if self.iterations == 0 {
            return Err(ConfigError::InvalidIterations(self.iterations));
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(self.radius));
        }
        self.sampling_config()?;
        Ok(())
    }

    /// Dimensions to sweep
    pub fn dimensions(&self) -> RangeInclusive<usize> {
        self.min_dim..=self.max_dim
    }

    /// Build the sampler configuration shared by every invocation
    pub fn sampling_config(&self) -> Result<SamplingConfig, sampler_core::ConfigError> {
        let seed = match self.seed {
            Some(seed) => SeedPolicy::Fixed(seed),
            None => SeedPolicy::Clock,
        };

        let builder = SamplingConfig::builder()
            .total_samples(self.samples)
            .batch_size(self.batch_size)
            .seed_policy(seed);

        match self.workers {
            Some(workers) => builder.workers(workers).build(),
            None => builder.build(),
        }
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(estimator) = &cli.estimator {
            self.estimator = Estimator::from_str(estimator).map_err(ConfigError::InvalidEstimator)?;
        }
        if let Some(samples) = cli.samples {
            self.samples = samples;
        }
        if let Some(batch_size) = cli.batch_size {
            self.batch_size = batch_size;
        }
        if let Some(iterations) = cli.iterations {
            self.iterations = iterations;
        }
        if let Some(min_dim) = cli.min_dim {
            self.min_dim = min_dim;
        }
        if let Some(max_dim) = cli.max_dim {
            self.max_dim = max_dim;
        }
        if let Some(radius) = cli.radius {
            self.radius = radius;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if cli.threads.is_some() {
            self.threads = cli.threads;
        }
        if cli.workers.is_some() {
            self.workers = cli.workers;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        Ok(())
    }
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    pub estimator: Option<String>,
    pub samples: Option<u64>,
    pub batch_size: Option<u64>,
    pub iterations: Option<usize>,
    pub min_dim: Option<usize>,
    pub max_dim: Option<usize>,
    pub radius: Option<f64>,
    pub seed: Option<u64>,
    pub threads: Option<usize>,
    pub workers: Option<usize>,
    pub log_level: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Config file
/// 3. Default values
pub fn build_config(cli: &CliArgs) -> Result<DriverConfig, ConfigError> {
    let mut config = if let Some(config_path) = &cli.config_file {
        DriverConfig::from_file(config_path)?
    } else {
        DriverConfig::default()
    };

    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}
