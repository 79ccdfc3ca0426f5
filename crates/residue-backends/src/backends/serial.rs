//! Serial backend: the sequential reference

use crate::backend::{Backend, LaunchConfig};
use crate::error::{BackendError, Result};
use residue_arith::pow_mod;

/// Sequential square-and-multiply backend
///
/// Ground truth for every other backend and the natural choice when a launch
/// has a single worker. The configured worker count and partition are
/// accepted but irrelevant: one pass over the exponent bits computes the
/// result directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialBackend;

impl SerialBackend {
    /// Create a new serial backend
    pub const fn new() -> Self {
        Self
    }
}

impl Backend for SerialBackend {
    fn mod_exp(&self, base: u64, exponent: u64, modulus: u64, config: &LaunchConfig) -> Result<u64> {
        config.validate()?;
        if modulus == 0 {
            return Err(BackendError::ZeroModulus);
        }
        Ok(pow_mod(base, exponent, modulus))
    }

    fn name(&self) -> &'static str {
        "serial"
    }
}
