//! Seed derivation for sampler invocations and their workers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Weyl increment (2^64 / golden ratio), odd so multiplication is a bijection.
const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// Number of clock seeds handed out by this process.
static CLOCK_SEEDS_ISSUED: AtomicU64 = AtomicU64::new(0);

/// SplitMix64 finaliser; a bijection on `u64`.
#[inline]
fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Derives a base seed from the wall clock.
///
/// The nanosecond timestamp is combined with a process-wide counter so that
/// two invocations started within the same clock tick still get different
/// streams.
pub fn clock_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;
    let issued = CLOCK_SEEDS_ISSUED.fetch_add(1, Ordering::Relaxed);
    mix64(nanos ^ issued.wrapping_mul(GOLDEN_GAMMA))
}

/// Derives the seed for one worker from the invocation's base seed.
///
/// For a fixed `base`, distinct workers always receive distinct seeds.
///
/// ```rust
/// use sampler_core::rng::worker_seed;
///
/// assert_ne!(worker_seed(7, 0), worker_seed(7, 1));
/// assert_eq!(worker_seed(7, 3), worker_seed(7, 3));
/// ```
#[inline]
pub fn worker_seed(base: u64, worker: usize) -> u64 {
    mix64(base ^ (worker as u64).wrapping_add(1).wrapping_mul(GOLDEN_GAMMA))
}
