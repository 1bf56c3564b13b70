//! Worker pool sizing.

use tracing::info;

use crate::error::SamplerError;

/// Sizes the global rayon pool used by both samplers.
///
/// Must be called before any parallel work runs; rayon only accepts one
/// global configuration per process.
///
/// # Errors
///
/// [`SamplerError::ThreadPool`] if `threads == 0` or the global pool has
/// already been initialised.
pub fn configure_global_pool(threads: usize) -> Result<(), SamplerError> {
    if threads == 0 {
        return Err(SamplerError::ThreadPool(
            "thread count must be at least 1".to_string(),
        ));
    }

    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("sampler-{}", i))
        .build_global()
        .map_err(|e| SamplerError::ThreadPool(e.to_string()))?;

    info!(threads, "configured sampler worker pool");
    Ok(())
}
