//! Rayon backend: rank-striped partials folded by a collective reduce

use rayon::prelude::*;
use residue_tracing::perf_span;

use crate::backend::{Backend, LaunchConfig};
use crate::error::{BackendError, Result};
use residue_arith::{mul_mod, partial_product};

/// Rank/collective backend
///
/// The in-process analog of a distributed reduction: each of
/// `config.workers` ranks computes a private partial product over its
/// partition slice, and the partials are combined by [`reduce`] with identity
/// `1 mod modulus` and operator `(x, y) → x*y mod m`. The operator is
/// associative and commutative, so the reduction tree's internal combining
/// order is unconstrained and no rank ever touches shared mutable state.
///
/// The pool is built per invocation and sized to the configured rank count,
/// so a launch with `W` ranks really runs `W` concurrent contexts.
///
/// [`reduce`]: rayon::iter::ParallelIterator::reduce
#[derive(Debug, Clone, Copy, Default)]
pub struct RayonBackend;

impl RayonBackend {
    /// Create a new rayon backend
    pub const fn new() -> Self {
        Self
    }
}

impl Backend for RayonBackend {
    fn mod_exp(&self, base: u64, exponent: u64, modulus: u64, config: &LaunchConfig) -> Result<u64> {
        config.validate()?;
        if modulus == 0 {
            return Err(BackendError::ZeroModulus);
        }
        let _span = perf_span!(
            "rayon_mod_exp",
            workers = config.workers,
            partition = %config.partition
        );

        let workers = config.workers;
        let partition = config.partition;
        let base = base % modulus;

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers as usize)
            .thread_name(|rank| format!("residue-rank-{rank}"))
            .build()
            .map_err(|e| BackendError::PoolBuild(e.to_string()))?;

        let result = pool.install(|| {
            (0..workers)
                .into_par_iter()
                .map(|rank| partial_product(base, exponent, modulus, partition.indices(rank, workers)))
                .reduce(|| 1 % modulus, |x, y| mul_mod(x, y, modulus))
        });

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "rayon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use residue_arith::{pow_mod, Partition};

    #[test]
    fn test_matches_reference_across_worker_counts() {
        let backend = RayonBackend::new();
        for workers in [1, 2, 4, 8] {
            for partition in [Partition::Striped, Partition::Blocked] {
                let config = LaunchConfig::new(workers, partition);
                assert_eq!(backend.mod_exp(5, 117, 19, &config).unwrap(), 1);
                assert_eq!(
                    backend.mod_exp(2, 63, (1 << 61) - 1, &config).unwrap(),
                    pow_mod(2, 63, (1 << 61) - 1)
                );
            }
        }
    }

    #[test]
    fn test_modulus_one() {
        let backend = RayonBackend::new();
        let config = LaunchConfig::new(4, Partition::Striped);
        assert_eq!(backend.mod_exp(12345, 678, 1, &config).unwrap(), 0);
    }

    #[test]
    fn test_preconditions_rejected() {
        let backend = RayonBackend::new();
        assert!(matches!(
            backend.mod_exp(1, 1, 0, &LaunchConfig::default()),
            Err(BackendError::ZeroModulus)
        ));
        assert!(matches!(
            backend.mod_exp(1, 1, 7, &LaunchConfig::new(0, Partition::Striped)),
            Err(BackendError::InvalidLaunchConfig(_))
        ));
    }
}
