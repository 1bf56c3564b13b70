//! # Random Number Generation Infrastructure
//!
//! Random number facilities for the Monte Carlo samplers.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator is built from an explicit 64-bit seed
//! - **Ownership**: each parallel worker owns its generator; nothing is shared
//!   or synchronised between workers
//! - **Testability**: samplers draw through the [`UniformSource`] trait, so a
//!   replayed fixed sequence can stand in for the real stream
//!
//! ## Module Structure
//!
//! - [`prng`]: seeded PRNG wrapper around `rand::rngs::StdRng`
//! - [`seed`]: base seed derivation and per-worker seed mixing
//!
//! ## Usage Example
//!
//! ```rust
//! use sampler_core::rng::{worker_seed, SamplerRng, UniformSource};
//!
//! let mut rng = SamplerRng::from_seed(worker_seed(12345, 3));
//!
//! // Uniform in [0, 1)
//! let u = rng.next_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! // Coordinate in [-1, 1)
//! let x = rng.next_symmetric();
//! assert!((-1.0..1.0).contains(&x));
//! ```

mod prng;
mod seed;

pub use prng::SamplerRng;
pub use seed::{clock_seed, worker_seed};

/// A stream of uniform variates in `[0, 1)`.
///
/// Implemented by [`SamplerRng`] for production runs. Tests implement it
/// with a replayed sequence to make the sampled points deterministic and
/// independent of how work is partitioned across workers.
pub trait UniformSource {
    /// Returns the next uniform value in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Returns the next coordinate in `[-1, 1)`, computed as `2u - 1`.
    #[inline]
    fn next_symmetric(&mut self) -> f64 {
        2.0 * self.next_uniform() - 1.0
    }

    /// Fills `buffer` with coordinates in `[-1, 1)`.
    ///
    /// Empty buffers are a no-op.
    #[inline]
    fn fill_symmetric(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_symmetric();
        }
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }

    #[inline]
    fn fill_symmetric(&mut self, buffer: &mut [f64]) {
        (**self).fill_symmetric(buffer)
    }
}
