//! Error types for the sampling kernels.
//!
//! Every failure is fatal for the invocation that produced it; callers are
//! expected to abort the run rather than retry.

use thiserror::Error;

use crate::mc::ConfigError;

/// Errors raised while running a sampler or deriving a π estimate.
///
/// # Examples
/// ```
/// use sampler_core::SamplerError;
///
/// let err = SamplerError::InvalidDimension(0);
/// assert_eq!(err.to_string(), "Invalid dimension 0: must be at least 1");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplerError {
    /// Dimension below 1; the `2/d` exponent is undefined.
    #[error("Invalid dimension {0}: must be at least 1")]
    InvalidDimension(usize),

    /// Radius that is not a finite positive number.
    #[error("Invalid radius {0}: must be finite and positive")]
    InvalidRadius(f64),

    /// An intermediate quantity of the estimate overflowed `f64`.
    #[error("Numerical overflow computing {quantity} for dimension {dim}")]
    NumericalOverflow {
        /// Dimension being estimated.
        dim: usize,
        /// Name of the quantity that overflowed.
        quantity: &'static str,
    },

    /// The batch buffer could not be allocated.
    #[error("Failed to allocate sample buffer of {elements} coordinates")]
    Allocation {
        /// Requested number of `f64` coordinates.
        elements: usize,
    },

    /// Invalid sampling configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A dedicated worker pool could not be built.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}

/// Checks the `(dimension, radius)` preconditions shared by all samplers.
///
/// # Errors
///
/// - [`SamplerError::InvalidDimension`] when `dim == 0`
/// - [`SamplerError::InvalidRadius`] when `radius` is not finite or `<= 0`
pub fn check_inputs(dim: usize, radius: f64) -> Result<(), SamplerError> {
    if dim == 0 {
        return Err(SamplerError::InvalidDimension(dim));
    }
    if !radius.is_finite() || radius <= 0.0 {
        return Err(SamplerError::InvalidRadius(radius));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SamplerError::InvalidRadius(-1.0);
        assert!(err.to_string().contains("Invalid radius -1"));

        let err = SamplerError::NumericalOverflow {
            dim: 400,
            quantity: "gamma(d/2 + 1)",
        };
        assert!(err.to_string().contains("dimension 400"));

        let err = SamplerError::Allocation { elements: 12 };
        assert!(err.to_string().contains("12 coordinates"));
    }

    #[test]
    fn test_config_error_is_transparent() {
        let err: SamplerError = ConfigError::InvalidSampleCount(0).into();
        assert_eq!(err.to_string(), ConfigError::InvalidSampleCount(0).to_string());
    }

    #[test]
    fn test_check_inputs() {
        assert!(check_inputs(1, 1.0).is_ok());
        assert!(check_inputs(10, 0.5).is_ok());
        assert_eq!(check_inputs(0, 1.0), Err(SamplerError::InvalidDimension(0)));
        assert!(matches!(
            check_inputs(2, 0.0),
            Err(SamplerError::InvalidRadius(_))
        ));
        assert!(matches!(
            check_inputs(2, f64::NAN),
            Err(SamplerError::InvalidRadius(_))
        ));
        assert!(matches!(
            check_inputs(2, f64::INFINITY),
            Err(SamplerError::InvalidRadius(_))
        ));
    }
}
