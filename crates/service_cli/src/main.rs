//! hyperpi - Monte Carlo estimation of π from hypersphere volumes
//!
//! With no arguments, reproduces the reference sweep: dimensions 2 through
//! 10, 25 estimates per dimension, 500,000,000 samples per estimate.

use anyhow::Context;
use clap::Parser;
use sampler_core::mc::configure_global_pool;
use service_cli::config::{build_config, CliArgs as ConfigCliArgs};
use service_cli::driver::Driver;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Estimate π from the volume of the unit d-ball
#[derive(Parser, Debug)]
#[command(name = "hyperpi")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Estimator to run (streaming, batched)
    #[arg(long)]
    estimator: Option<String>,

    /// Samples per estimate
    #[arg(long)]
    samples: Option<u64>,

    /// Points per batch for the batched estimator
    #[arg(long)]
    batch_size: Option<u64>,

    /// Estimates per dimension
    #[arg(long)]
    iterations: Option<usize>,

    /// Smallest dimension, inclusive
    #[arg(long)]
    min_dim: Option<usize>,

    /// Largest dimension, inclusive
    #[arg(long)]
    max_dim: Option<usize>,

    /// Hypersphere radius
    #[arg(long)]
    radius: Option<f64>,

    /// Fixed base seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads
    #[arg(long)]
    threads: Option<usize>,

    /// Worker streams per estimate; fix it for seeds that reproduce across machines
    #[arg(long)]
    workers: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            estimator: args.estimator,
            samples: args.samples,
            batch_size: args.batch_size,
            iterations: args.iterations,
            min_dim: args.min_dim,
            max_dim: args.max_dim,
            radius: args.radius,
            seed: args.seed,
            threads: args.threads,
            workers: args.workers,
            log_level: args.log_level,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args).context("failed to load configuration")?;

    init_tracing(config.log_level.as_filter_str());

    tracing::info!("hyperpi v{}", service_cli::VERSION);
    tracing::info!(
        estimator = %config.estimator,
        samples = config.samples,
        batch_size = config.batch_size,
        iterations = config.iterations,
        min_dim = config.min_dim,
        max_dim = config.max_dim,
        radius = config.radius,
        seed = ?config.seed,
        threads = ?config.threads,
        workers = ?config.workers,
        "Configuration loaded"
    );

    if let Some(threads) = config.threads {
        configure_global_pool(threads).context("failed to build worker pool")?;
    }

    let driver = Driver::new(config)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    driver.run(&mut out).context("sweep failed")?;

    Ok(())
}
