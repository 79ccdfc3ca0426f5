//! Threaded backend: shared-memory workers with a lock-guarded combine

use parking_lot::Mutex;
use residue_tracing::perf_span;

use crate::backend::{Backend, LaunchConfig};
use crate::error::{BackendError, Result};
use residue_arith::{mul_mod, partial_product};

/// Shared-memory backend
///
/// Spawns `config.workers` scoped threads per invocation. Each worker
/// computes a private partial product over its partition slice (no
/// cross-worker state during the bit loop) and folds its contribution into
/// one shared accumulator guarded by a [`parking_lot::Mutex`]. The lock is
/// held for a single modular multiply per worker, so each contribution is
/// applied exactly once and none can be lost to interleaving.
///
/// Invocations are short-lived and run to completion; threads are not pooled
/// or cancelled.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadedBackend;

impl ThreadedBackend {
    /// Create a new threaded backend
    pub const fn new() -> Self {
        Self
    }
}

impl Backend for ThreadedBackend {
    fn mod_exp(&self, base: u64, exponent: u64, modulus: u64, config: &LaunchConfig) -> Result<u64> {
        config.validate()?;
        if modulus == 0 {
            return Err(BackendError::ZeroModulus);
        }
        let _span = perf_span!(
            "threaded_mod_exp",
            workers = config.workers,
            partition = %config.partition
        );

        let workers = config.workers;
        let partition = config.partition;
        let base = base % modulus;
        let result = Mutex::new(1 % modulus);

        std::thread::scope(|scope| {
            for worker in 0..workers {
                let result = &result;
                scope.spawn(move || {
                    let local = partial_product(base, exponent, modulus, partition.indices(worker, workers));
                    // The one synchronized region: one multiply per worker.
                    let mut shared = result.lock();
                    *shared = mul_mod(*shared, local, modulus);
                });
            }
        });

        Ok(result.into_inner())
    }

    fn name(&self) -> &'static str {
        "threaded"
    }
}
