//! # Sampler Core (Monte Carlo Kernel)
//!
//! Estimates π by sampling points uniformly in the hypercube `[-1, 1]^d`,
//! counting how many land inside the inscribed unit hypersphere, and
//! inverting the closed-form hypersphere volume.
//!
//! This crate provides:
//! - Seeded per-worker random number generation ([`rng`])
//! - Hypersphere geometry and the π-recovery formula ([`geometry`])
//! - Streaming and batched Monte Carlo samplers ([`mc`])
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::mc::{estimate_pi, SamplingConfig};
//!
//! let config = SamplingConfig::builder()
//!     .total_samples(200_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let pi = estimate_pi(2, 1.0, &config).unwrap();
//! assert!((pi - std::f64::consts::PI).abs() < 0.05);
//! ```
//!
//! ## Concurrency
//!
//! Both samplers are blocking fork-join computations on the rayon pool.
//! Each worker owns its generator; the only shared step is the final
//! integer sum of per-worker hit counts.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod geometry;
pub mod mc;
pub mod rng;

// Re-export commonly used items for convenience
pub use error::SamplerError;
pub use mc::{
    estimate_pi, estimate_pi_batched, BatchedSampler, ConfigError, Estimator, PiEstimate,
    SamplingConfig, SeedPolicy, StreamingSampler,
};
pub use rng::{SamplerRng, UniformSource};
