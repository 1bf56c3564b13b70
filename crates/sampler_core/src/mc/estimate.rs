//! The value produced by one sampler invocation.

use crate::error::SamplerError;
use crate::geometry::pi_from_hits;

/// A π estimate together with the counts it was derived from.
///
/// Produced once, after every sample of the invocation has been drawn and
/// reduced; never mutated.
///
/// # Examples
///
/// ```rust
/// use sampler_core::mc::PiEstimate;
///
/// let estimate = PiEstimate::from_hits(2, 1.0, 3, 4).unwrap();
/// assert_eq!(estimate.value, 3.0);
/// assert_eq!(estimate.hit_fraction(), 0.75);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PiEstimate {
    /// Dimension of the sampled hypercube.
    pub dim: usize,
    /// Radius used in the volume formula.
    pub radius: f64,
    /// Points found inside the hypersphere.
    pub hits: u64,
    /// Points drawn.
    pub samples: u64,
    /// The π estimate.
    pub value: f64,
}

impl PiEstimate {
    /// Derives the estimate from a reduced hit count.
    ///
    /// # Errors
    ///
    /// See [`pi_from_hits`].
    pub fn from_hits(dim: usize, radius: f64, hits: u64, samples: u64) -> Result<Self, SamplerError> {
        let value = pi_from_hits(hits, samples, dim, radius)?;
        Ok(Self {
            dim,
            radius,
            hits,
            samples,
            value,
        })
    }

    /// Fraction of points inside the hypersphere.
    #[inline]
    pub fn hit_fraction(&self) -> f64 {
        self.hits as f64 / self.samples as f64
    }

    /// Absolute distance from the true value of π.
    #[inline]
    pub fn abs_error(&self) -> f64 {
        (self.value - std::f64::consts::PI).abs()
    }
}
