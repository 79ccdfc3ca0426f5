//! Launch configuration for kernel execution

use std::fmt;
use std::num::NonZeroUsize;
use std::thread;

use serde::{Deserialize, Serialize};

use crate::error::{BackendError, Result};
use residue_arith::Partition;

/// Launch configuration for a kernel invocation
///
/// Specifies how many workers share the exponent's bit positions and which
/// partition strategy assigns them. A configuration is plain data; it is
/// validated at launch time, not at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchConfig {
    /// Number of workers sharing the 64 bit positions. Must be non-zero.
    pub workers: u32,

    /// Strategy assigning bit indices to workers.
    pub partition: Partition,
}

impl LaunchConfig {
    /// Create a new launch configuration
    pub const fn new(workers: u32, partition: Partition) -> Self {
        Self { workers, partition }
    }

    /// Single-worker configuration
    pub const fn single() -> Self {
        Self::new(1, Partition::Blocked)
    }

    /// Configuration sized to the host's available parallelism
    ///
    /// Falls back to one worker when the parallelism of the host cannot be
    /// determined.
    pub fn with_available_parallelism() -> Self {
        let workers = thread::available_parallelism().map(NonZeroUsize::get).unwrap_or(1) as u32;
        Self::new(workers, Partition::default())
    }

    /// Validate the configuration before launch
    ///
    /// # Errors
    ///
    /// Returns `BackendError::InvalidLaunchConfig` if `workers == 0`. A
    /// zero-worker launch is a precondition violation and is rejected before
    /// any work starts.
    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(BackendError::invalid_launch("worker count must be non-zero"));
        }
        Ok(())
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self::single()
    }
}

impl fmt::Display for LaunchConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} worker(s), {} partition", self.workers, self.partition)
    }
}
