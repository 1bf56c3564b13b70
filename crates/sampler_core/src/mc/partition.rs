//! Work partitioning for the samplers.
//!
//! - [`partition`] splits `[0, N)` into contiguous per-worker spans
//! - [`BatchPlan`] splits `N` samples into sequential batches, clipping the
//!   last one

/// A contiguous slice `[start, start + len)` of the sample index range,
/// owned by one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkerSpan {
    /// Worker index, used to derive the worker's seed.
    pub worker: usize,
    /// First sample index.
    pub start: u64,
    /// Number of samples.
    pub len: u64,
}

/// Splits `total` samples into `workers` contiguous spans.
///
/// The first `total % workers` spans receive one extra sample. When
/// `workers > total` the trailing spans are empty. A `workers` of zero is
/// treated as one.
///
/// ```rust
/// use sampler_core::mc::partition;
///
/// let spans = partition(10, 3);
/// let lens: Vec<u64> = spans.iter().map(|s| s.len).collect();
/// assert_eq!(lens, vec![4, 3, 3]);
/// assert_eq!(spans[2].start, 7);
/// ```
pub fn partition(total: u64, workers: usize) -> Vec<WorkerSpan> {
    let workers = workers.max(1);
    let base = total / workers as u64;
    let extra = total % workers as u64;

    let mut start = 0;
    (0..workers)
        .map(|worker| {
            let len = base + u64::from((worker as u64) < extra);
            let span = WorkerSpan { worker, start, len };
            start += len;
            span
        })
        .collect()
}

/// Sequential batch layout of a batched sampler run.
///
/// # Examples
///
/// ```rust
/// use sampler_core::mc::BatchPlan;
///
/// let plan = BatchPlan::new(25, 10);
/// assert_eq!(plan.n_batches(), 3);
/// assert_eq!(plan.batch_len(0), 10);
/// assert_eq!(plan.batch_len(2), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchPlan {
    total_samples: u64,
    batch_size: u64,
}

impl BatchPlan {
    /// Creates a plan. A `batch_size` of zero is treated as one.
    #[inline]
    pub fn new(total_samples: u64, batch_size: u64) -> Self {
        Self {
            total_samples,
            batch_size: batch_size.max(1),
        }
    }

    /// Returns the total number of samples.
    #[inline]
    pub fn total_samples(&self) -> u64 {
        self.total_samples
    }

    /// Returns the nominal batch size.
    #[inline]
    pub fn batch_size(&self) -> u64 {
        self.batch_size
    }

    /// Number of batches, `ceil(total / batch_size)`.
    #[inline]
    pub fn n_batches(&self) -> u64 {
        self.total_samples.div_ceil(self.batch_size)
    }

    /// Length of the largest batch; the buffer capacity needed.
    #[inline]
    pub fn max_batch_len(&self) -> u64 {
        self.batch_size.min(self.total_samples)
    }

    /// Number of points in batch `b`.
    ///
    /// Every batch but the last has `batch_size` points; the last has
    /// `total - b * batch_size`. Out-of-range batches have zero.
    #[inline]
    pub fn batch_len(&self, b: u64) -> u64 {
        let start = b.saturating_mul(self.batch_size);
        self.total_samples.saturating_sub(start).min(self.batch_size)
    }

    /// Iterates over all batch lengths in order.
    pub fn batch_lens(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.n_batches()).map(move |b| self.batch_len(b))
    }
}
