//! Backend trait for kernel execution
//!
//! This trait defines the interface every execution backend implements.
//! Backends compute `base^exponent mod modulus` across a configurable set of
//! workers and must be indistinguishable from the sequential reference.

use super::types::LaunchConfig;
use crate::error::Result;

/// Backend trait for bit-parallel modular exponentiation
///
/// # Execution Model
///
/// A launch partitions the 64 exponent bit positions among
/// `config.workers` workers according to `config.partition`:
///
/// ```text
/// exponent bits:   0  1  2  3  4  5  6  7 ... 63
///                  │  │  │  │  │  │  │  │      │
/// striped, W=4:    w0 w1 w2 w3 w0 w1 w2 w3 ... w3
/// blocked, W=4:    w0 w0 ... w0 │ w1 ... │ w2 ... │ w3 ...
/// ```
///
/// Each worker computes a private partial product over its indices, deriving
/// `base^(2^i) mod modulus` by replaying the squaring chain from the original
/// `base`, and the backend combines the partials under the modulus. The
/// combine step applies each worker's contribution exactly once; it is the
/// only point that may require synchronization.
///
/// # Correctness Contract
///
/// For every valid input, `mod_exp` must return exactly what sequential
/// square-and-multiply returns, independent of:
///
/// - the number of workers,
/// - the partition strategy,
/// - worker scheduling and combine order.
///
/// # Errors
///
/// - `BackendError::ZeroModulus` if `modulus == 0`; the kernel must not
///   attempt to proceed past a violated precondition.
/// - `BackendError::InvalidLaunchConfig` if the configuration fails
///   validation (e.g. zero workers).
///
/// There are no transient failure modes and no retries: over valid inputs
/// the kernel is a total arithmetic function.
pub trait Backend {
    /// Compute `base^exponent mod modulus` under the given launch configuration.
    fn mod_exp(&self, base: u64, exponent: u64, modulus: u64, config: &LaunchConfig) -> Result<u64>;

    /// Short stable name for logs and error messages.
    fn name(&self) -> &'static str;
}
