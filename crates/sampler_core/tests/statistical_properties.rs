//! Statistical and structural properties of the samplers.
//!
//! # Test Categories
//!
//! 1. **Range**: estimates are finite and positive
//! 2. **Convergence**: estimates approach π as the sample count grows
//! 3. **Reduction invariance**: hit totals do not depend on the partition
//! 4. **Batch clipping**: the batched sampler draws exactly `N` points
//! 5. **Reproducibility**: fixed seeds give bit-identical estimates

use std::f64::consts::PI;

use proptest::prelude::*;
use sampler_core::mc::{
    count_hits_batched, count_hits_streaming, estimate_pi, estimate_pi_batched, BatchPlan,
    SamplingConfig, StreamingSampler, WorkerSpan,
};
use sampler_core::rng::UniformSource;

/// Replays a shared sequence of uniforms from a given offset.
struct Replay<'a> {
    values: &'a [f64],
    pos: usize,
}

impl UniformSource for Replay<'_> {
    fn next_uniform(&mut self) -> f64 {
        let u = self.values[self.pos];
        self.pos += 1;
        u
    }
}

/// Deterministic pseudo-uniform sequence in [0, 1).
fn fixed_uniforms(n: usize) -> Vec<f64> {
    let mut state: u64 = 0x2545_F491_4F6C_DD1D;
    (0..n)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 11) as f64 / (1u64 << 53) as f64
        })
        .collect()
}

fn seeded(total: u64, seed: u64) -> SamplingConfig {
    SamplingConfig::builder()
        .total_samples(total)
        .seed(seed)
        .build()
        .unwrap()
}

// ============================================================================
// Convergence
// ============================================================================

#[test]
fn test_streaming_converges_low_dimensions() {
    let config = seeded(1_000_000, 2024);

    for dim in [2, 3] {
        let pi = estimate_pi(dim, 1.0, &config).unwrap();
        assert!(
            (pi - PI).abs() < 0.05,
            "dim {} estimate {} outside tolerance",
            dim,
            pi
        );
    }
}

#[test]
fn test_streaming_higher_dimensions_wider_tolerance() {
    let config = seeded(1_000_000, 77);

    for dim in 4..=10 {
        let pi = estimate_pi(dim, 1.0, &config).unwrap();
        assert!(
            (pi - PI).abs() < 0.25,
            "dim {} estimate {} outside tolerance",
            dim,
            pi
        );
    }
}

#[test]
fn test_batched_converges_low_dimensions() {
    let config = SamplingConfig::builder()
        .total_samples(1_000_000)
        .batch_size(300_000)
        .seed(4242)
        .build()
        .unwrap();

    for dim in [2, 3] {
        let pi = estimate_pi_batched(dim, 1.0, &config).unwrap();
        assert!(
            (pi - PI).abs() < 0.05,
            "dim {} estimate {} outside tolerance",
            dim,
            pi
        );
    }
}

// ============================================================================
// Reproducibility (end-to-end scenario)
// ============================================================================

#[test]
fn test_same_seed_bit_identical_different_seed_differs() {
    let run = |seed| {
        StreamingSampler::new(seeded(10_000_000, seed))
            .unwrap()
            .run(2, 1.0)
            .unwrap()
    };

    let first = run(12_345);
    let second = run(12_345);
    let other = run(54_321);

    assert_eq!(first.value.to_bits(), second.value.to_bits());
    assert_eq!(first.hits, second.hits);
    assert_ne!(first.hits, other.hits);

    for estimate in [first, other] {
        assert!(
            (estimate.value - 3.14159).abs() < 0.02,
            "estimate {} outside tolerance",
            estimate.value
        );
    }
}

// ============================================================================
// Reduction invariance with a mocked stream
// ============================================================================

#[test]
fn test_one_worker_equals_many_workers() {
    let dim = 4;
    let n_points = 10_000;
    let values = fixed_uniforms(n_points * dim);
    let source_for = |span: &WorkerSpan| Replay {
        values: &values,
        pos: span.start as usize * dim,
    };

    let single = count_hits_streaming(dim, n_points as u64, 1, source_for);
    for workers in [2, 5, 16, 333] {
        assert_eq!(
            count_hits_streaming(dim, n_points as u64, workers, source_for),
            single
        );
    }
}

#[test]
fn test_batched_and_streaming_agree_on_same_points() {
    let dim = 3;
    let n_points = 2_500;
    let values = fixed_uniforms(n_points * dim);

    let streaming = count_hits_streaming(dim, n_points as u64, 4, |span: &WorkerSpan| Replay {
        values: &values,
        pos: span.start as usize * dim,
    });

    for batch_size in [1, 7, 1_000, 2_500, 10_000] {
        let mut source = Replay {
            values: &values,
            pos: 0,
        };
        let plan = BatchPlan::new(n_points as u64, batch_size);
        let batched = count_hits_batched(dim, &plan, &mut source).unwrap();

        assert_eq!(batched, streaming, "batch size {}", batch_size);
        // Exactly N points were consumed
        assert_eq!(source.pos, n_points * dim);
    }
}

// ============================================================================
// Batch clipping
// ============================================================================

#[test]
fn test_last_batch_is_clipped() {
    for (total, batch) in [(10u64, 3u64), (9, 3), (1, 50), (1_000_003, 100_000)] {
        let plan = BatchPlan::new(total, batch);
        let last = plan.batch_len(plan.n_batches() - 1);
        let expected = if total % batch == 0 { batch } else { total % batch };
        assert_eq!(last, expected.min(total));
        assert_eq!(plan.batch_lens().sum::<u64>(), total);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Estimates are finite and positive for small dimensions and sample counts.
    #[test]
    fn prop_estimate_finite_positive(dim in 1usize..=6, total in 2_000u64..20_000, seed in any::<u64>()) {
        let config = seeded(total, seed);
        let pi = estimate_pi(dim, 1.0, &config).unwrap();
        prop_assert!(pi.is_finite());
        prop_assert!(pi > 0.0, "dim {} total {} seed {} gave {}", dim, total, seed, pi);
    }

    /// The batched sampler never reports more hits than samples.
    #[test]
    fn prop_batched_hits_bounded(dim in 1usize..=10, total in 1u64..5_000, batch in 1u64..2_000, seed in any::<u64>()) {
        let config = SamplingConfig::builder()
            .total_samples(total)
            .batch_size(batch)
            .seed(seed)
            .build()
            .unwrap();
        let estimate = sampler_core::BatchedSampler::new(config).unwrap().run(dim, 1.0).unwrap();
        prop_assert!(estimate.hits <= total);
        prop_assert_eq!(estimate.samples, total);
    }
}
