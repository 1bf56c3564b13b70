//! Hypersphere geometry and the π-recovery formula.
//!
//! Points are stored as flat `f64` buffers of `dim` consecutive coordinates.
//! A point is a *hit* when its squared norm is at most 1.0; the boundary is
//! inclusive.
//!
//! The estimate inverts the volume of the `d`-ball,
//! `V = π^(d/2) r^d / Γ(d/2 + 1)`, applied to the sampled ball volume
//! `p_hat · (2r)^d`:
//!
//! ```text
//! pi_est = (p_hat · (2r)^d · Γ(d/2 + 1))^(2/d)
//! ```

use rayon::prelude::*;

use crate::error::{check_inputs, SamplerError};
use crate::mc::ConfigError;

/// `sqrt(π)`, i.e. `Γ(1/2)`.
const SQRT_PI: f64 = 1.772_453_850_905_516;

/// Returns the squared Euclidean norm of a point.
#[inline]
pub fn squared_norm(point: &[f64]) -> f64 {
    point.iter().map(|x| x * x).sum()
}

/// Returns true if the point lies inside or on the unit hypersphere.
///
/// ```rust
/// use sampler_core::geometry::is_inside;
///
/// assert!(is_inside(&[1.0, 0.0]));
/// assert!(is_inside(&[0.5, 0.5, 0.5, 0.5]));
/// assert!(!is_inside(&[0.8, 0.8]));
/// ```
#[inline]
pub fn is_inside(point: &[f64]) -> bool {
    squared_norm(point) <= 1.0
}

/// Counts hits in a flat buffer of `dim`-dimensional points, sequentially.
///
/// A trailing partial point (fewer than `dim` coordinates) is ignored.
///
/// # Panics
///
/// Panics if `dim == 0`.
pub fn count_inside(points: &[f64], dim: usize) -> u64 {
    points.chunks_exact(dim).filter(|p| is_inside(p)).count() as u64
}

/// Counts hits in a flat buffer with a rayon parallel reduction over points.
///
/// # Panics
///
/// Panics if `dim == 0`.
pub fn par_count_inside(points: &[f64], dim: usize) -> u64 {
    points
        .par_chunks_exact(dim)
        .filter(|p| is_inside(p))
        .count() as u64
}

/// Counts hits after splitting the points into `parts` contiguous groups.
///
/// Each group is counted independently in parallel and the group counts are
/// summed. Because integer addition is associative and commutative, the
/// result equals [`count_inside`] for every value of `parts`.
///
/// # Panics
///
/// Panics if `dim == 0`.
pub fn count_inside_partitioned(points: &[f64], dim: usize, parts: usize) -> u64 {
    let n_points = points.len() / dim;
    if n_points == 0 {
        return 0;
    }
    let parts = parts.clamp(1, n_points);
    let per_part = n_points.div_ceil(parts);

    points[..n_points * dim]
        .par_chunks(per_part * dim)
        .map(|group| count_inside(group, dim))
        .sum()
}

/// Returns `Γ(d/2 + 1)` for an integer dimension.
///
/// Computed exactly as a product: `(d/2)!` for even `d` and
/// `√π · Π_{j=1}^{(d+1)/2} (j − ½)` for odd `d`. Overflows to infinity for
/// `d ≥ 342`.
///
/// ```rust
/// use approx::assert_relative_eq;
/// use sampler_core::geometry::gamma_half_dim;
///
/// assert_relative_eq!(gamma_half_dim(2), 1.0);
/// assert_relative_eq!(gamma_half_dim(4), 2.0);
/// assert_relative_eq!(gamma_half_dim(1), std::f64::consts::PI.sqrt() / 2.0, epsilon = 1e-15);
/// ```
pub fn gamma_half_dim(dim: usize) -> f64 {
    if dim % 2 == 0 {
        (1..=dim / 2).fold(1.0, |acc, k| acc * k as f64)
    } else {
        (1..=(dim + 1) / 2).fold(SQRT_PI, |acc, j| acc * (j as f64 - 0.5))
    }
}

/// Volume of the bounding hypercube, `(2r)^d`.
#[inline]
pub fn cube_volume(dim: usize, radius: f64) -> f64 {
    (2.0 * radius).powf(dim as f64)
}

/// Exact volume of the `d`-ball of radius `r`.
#[inline]
pub fn ball_volume(dim: usize, radius: f64) -> f64 {
    std::f64::consts::PI.powf(dim as f64 / 2.0) * radius.powf(dim as f64) / gamma_half_dim(dim)
}

/// Converts a hit fraction into a π estimate.
///
/// Implements `(p_hat · (2r)^d · Γ(d/2 + 1))^(2/d)`.
///
/// The formula does not divide out `r^d`, so it only recovers π for
/// `radius == 1.0`; for other radii its expectation is `π · r²`.
///
/// # Errors
///
/// - [`SamplerError::InvalidDimension`] / [`SamplerError::InvalidRadius`]
///   for bad inputs
/// - [`SamplerError::NumericalOverflow`] if the cube volume, `Γ(d/2 + 1)` or
///   the final value is not finite
pub fn pi_from_fraction(p_hat: f64, dim: usize, radius: f64) -> Result<f64, SamplerError> {
    check_inputs(dim, radius)?;

    let vol_cube = cube_volume(dim, radius);
    if !vol_cube.is_finite() {
        return Err(SamplerError::NumericalOverflow {
            dim,
            quantity: "cube volume (2r)^d",
        });
    }

    let gamma = gamma_half_dim(dim);
    if !gamma.is_finite() {
        return Err(SamplerError::NumericalOverflow {
            dim,
            quantity: "gamma(d/2 + 1)",
        });
    }

    let vol_ball = p_hat * vol_cube;
    let pi_est = (vol_ball * gamma).powf(2.0 / dim as f64);
    if !pi_est.is_finite() {
        return Err(SamplerError::NumericalOverflow {
            dim,
            quantity: "pi estimate",
        });
    }

    Ok(pi_est)
}

/// Converts a hit count over `samples` draws into a π estimate.
///
/// # Errors
///
/// [`ConfigError::InvalidSampleCount`] when `samples == 0`, otherwise as
/// [`pi_from_fraction`].
pub fn pi_from_hits(hits: u64, samples: u64, dim: usize, radius: f64) -> Result<f64, SamplerError> {
    if samples == 0 {
        return Err(ConfigError::InvalidSampleCount(0).into());
    }
    debug_assert!(hits <= samples, "hits {} exceed samples {}", hits, samples);

    pi_from_fraction(hits as f64 / samples as f64, dim, radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    // ========================================================================
    // In-sphere test
    // ========================================================================

    #[test]
    fn test_boundary_points_are_inside() {
        assert!(is_inside(&[1.0, 0.0]));
        assert!(is_inside(&[0.0, -1.0]));
        assert!(is_inside(&[0.0, 0.0, -1.0]));
        assert!(is_inside(&[0.5, 0.5, 0.5, 0.5]));
        assert!(is_inside(&[-0.5, 0.5, -0.5, 0.5]));
    }

    #[test]
    fn test_outside_points() {
        assert!(!is_inside(&[1.0, 1e-7]));
        assert!(!is_inside(&[-1.0, -1.0]));
        assert!(!is_inside(&[0.6, 0.6, 0.6]));
    }

    #[test]
    fn test_count_inside_ignores_trailing_partial_point() {
        // (0,0) inside, (1,1) outside, trailing 0.0 ignored
        let points = [0.0, 0.0, 1.0, 1.0, 0.0];
        assert_eq!(count_inside(&points, 2), 1);
        assert_eq!(par_count_inside(&points, 2), 1);
        assert_eq!(count_inside_partitioned(&points, 2, 3), 1);
    }

    #[test]
    fn test_partitioned_count_is_partition_invariant() {
        let points: Vec<f64> = (0..3000)
            .map(|i| ((i * 7919) % 2001) as f64 / 1000.0 - 1.0)
            .collect();
        let expected = count_inside(&points, 3);

        for parts in [1, 2, 3, 7, 64, 999, 1000, 5000] {
            assert_eq!(count_inside_partitioned(&points, 3, parts), expected);
        }
        assert_eq!(par_count_inside(&points, 3), expected);
    }

    #[test]
    fn test_partitioned_count_empty() {
        assert_eq!(count_inside_partitioned(&[], 4, 8), 0);
    }

    // ========================================================================
    // Gamma and volumes
    // ========================================================================

    #[test]
    fn test_gamma_half_dim_values() {
        assert_relative_eq!(gamma_half_dim(0), 1.0);
        assert_relative_eq!(gamma_half_dim(2), 1.0);
        assert_relative_eq!(gamma_half_dim(3), 0.75 * PI.sqrt(), epsilon = 1e-14);
        assert_relative_eq!(gamma_half_dim(6), 6.0);
        assert_relative_eq!(gamma_half_dim(10), 120.0);
        assert_relative_eq!(gamma_half_dim(5), 3.323_350_970_447_842_6, epsilon = 1e-13);
    }

    #[test]
    fn test_gamma_half_dim_overflows_for_huge_dimension() {
        assert!(gamma_half_dim(400).is_infinite());
    }

    #[test]
    fn test_known_ball_volumes() {
        assert_relative_eq!(ball_volume(2, 1.0), PI, epsilon = 1e-14);
        assert_relative_eq!(ball_volume(3, 1.0), 4.0 * PI / 3.0, epsilon = 1e-14);
        assert_relative_eq!(ball_volume(2, 2.0), 4.0 * PI, epsilon = 1e-13);
        assert_relative_eq!(cube_volume(3, 1.0), 8.0);
        assert_relative_eq!(cube_volume(2, 0.5), 1.0);
    }

    // ========================================================================
    // Estimate formula
    // ========================================================================

    #[test]
    fn test_exact_fraction_recovers_pi() {
        for dim in 1..=12 {
            let p = ball_volume(dim, 1.0) / cube_volume(dim, 1.0);
            let pi = pi_from_fraction(p, dim, 1.0).unwrap();
            assert_relative_eq!(pi, PI, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_quarter_hits_in_two_dimensions() {
        // p_hat = 3/4 in d=2 gives (0.75 * 4 * 1)^1 = 3
        assert_relative_eq!(pi_from_hits(3, 4, 2, 1.0).unwrap(), 3.0);
    }

    #[test]
    fn test_non_unit_radius_keeps_historical_formula() {
        // With r = 2 the exact fraction still yields pi * r^2, not pi
        let p = ball_volume(2, 2.0) / cube_volume(2, 2.0);
        let value = pi_from_fraction(p, 2, 2.0).unwrap();
        assert_relative_eq!(value, 4.0 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_hits_gives_zero() {
        assert_eq!(pi_from_hits(0, 100, 5, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(
            pi_from_hits(1, 2, 0, 1.0),
            Err(SamplerError::InvalidDimension(0))
        );
        assert!(matches!(
            pi_from_hits(1, 2, 2, -1.0),
            Err(SamplerError::InvalidRadius(_))
        ));
        assert!(matches!(
            pi_from_hits(0, 0, 2, 1.0),
            Err(SamplerError::Config(ConfigError::InvalidSampleCount(0)))
        ));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert!(matches!(
            pi_from_fraction(0.5, 400, 1.0),
            Err(SamplerError::NumericalOverflow {
                quantity: "gamma(d/2 + 1)",
                ..
            })
        ));
        assert!(matches!(
            pi_from_fraction(0.5, 2000, 1.0),
            Err(SamplerError::NumericalOverflow {
                quantity: "cube volume (2r)^d",
                ..
            })
        ));
    }
}
