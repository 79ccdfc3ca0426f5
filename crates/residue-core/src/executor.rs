//! Executor for managing backend execution
//!
//! The `Executor` wraps a `residue_backends::Backend` and provides the
//! narrow functional interface the transforms consume: one `mod_exp` call
//! per unit, with the backend choice and launch configuration decided once
//! at construction instead of at every call site.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use residue_backends::{Backend, LaunchConfig, RayonBackend, SerialBackend, ThreadedBackend};

/// Environment variable selecting the backend (`serial` | `threaded` | `rayon`).
pub const ENV_BACKEND: &str = "RESIDUE_BACKEND";
/// Environment variable overriding the worker count.
pub const ENV_WORKERS: &str = "RESIDUE_WORKERS";
/// Environment variable selecting the partition strategy (`striped` | `blocked`).
pub const ENV_PARTITION: &str = "RESIDUE_PARTITION";

/// Backend type for executor initialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendType {
    /// Sequential square-and-multiply reference
    Serial,
    /// Scoped worker threads with a lock-guarded combine
    Threaded,
    /// Rank-striped partials folded by a collective reduce
    Rayon,
}

impl BackendType {
    fn instantiate(self) -> Box<dyn Backend + Send + Sync> {
        match self {
            BackendType::Serial => Box::new(SerialBackend::new()),
            BackendType::Threaded => Box::new(ThreadedBackend::new()),
            BackendType::Rayon => Box::new(RayonBackend::new()),
        }
    }
}

impl fmt::Display for BackendType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendType::Serial => write!(f, "serial"),
            BackendType::Threaded => write!(f, "threaded"),
            BackendType::Rayon => write!(f, "rayon"),
        }
    }
}

impl FromStr for BackendType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "serial" => Ok(BackendType::Serial),
            "threaded" => Ok(BackendType::Threaded),
            "rayon" => Ok(BackendType::Rayon),
            other => Err(format!("unknown backend type: {other}")),
        }
    }
}

/// Executor for kernel execution
///
/// Owns a boxed backend plus the launch configuration applied to every call.
/// Construction is cheap; backends hold no buffers or pools between calls,
/// and no state persists across invocations.
///
/// # Example
///
/// ```
/// use residue_core::Executor;
///
/// let exec = Executor::new();
/// assert_eq!(exec.mod_exp(5, 117, 19).unwrap(), 1);
/// ```
pub struct Executor {
    backend: Box<dyn Backend + Send + Sync>,
    config: LaunchConfig,
}

impl Executor {
    /// Create an executor with the threaded backend sized to the host's
    /// available parallelism.
    pub fn new() -> Self {
        Self::with_backend(BackendType::Threaded, LaunchConfig::with_available_parallelism())
    }

    /// Create an executor with an explicit backend and launch configuration.
    pub fn with_backend(backend: BackendType, config: LaunchConfig) -> Self {
        Self {
            backend: backend.instantiate(),
            config,
        }
    }

    /// Create an executor from the process environment.
    ///
    /// Honors [`ENV_BACKEND`], [`ENV_WORKERS`], and [`ENV_PARTITION`].
    /// Unset variables fall back to the defaults of [`Executor::new`];
    /// values that fail to parse are reported as [`Error::Config`] rather
    /// than silently ignored.
    pub fn from_env() -> Result<Self> {
        let backend = match env::var(ENV_BACKEND) {
            Ok(value) => value.parse::<BackendType>().map_err(Error::Config)?,
            Err(_) => BackendType::Threaded,
        };
        let mut config = LaunchConfig::with_available_parallelism();
        if let Ok(value) = env::var(ENV_WORKERS) {
            config.workers = value
                .parse::<u32>()
                .map_err(|_| Error::Config(format!("invalid {ENV_WORKERS} value: {value}")))?;
        }
        if let Ok(value) = env::var(ENV_PARTITION) {
            config.partition = value.parse().map_err(Error::Config)?;
        }
        Ok(Self::with_backend(backend, config))
    }

    /// Name of the active backend.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Launch configuration applied to every kernel call.
    pub fn config(&self) -> &LaunchConfig {
        &self.config
    }

    /// Compute `base^exponent mod modulus` on the configured backend.
    ///
    /// # Errors
    ///
    /// Propagates the backend's precondition failures (`modulus == 0`,
    /// zero workers) as [`Error::Backend`].
    #[tracing::instrument(skip(self), level = "debug", fields(backend = self.backend.name()))]
    pub fn mod_exp(&self, base: u64, exponent: u64, modulus: u64) -> Result<u64> {
        Ok(self.backend.mod_exp(base, exponent, modulus, &self.config)?)
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Executor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Executor")
            .field("backend", &self.backend.name())
            .field("config", &self.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use residue_arith::Partition;

    #[test]
    fn test_default_executor_runs_the_known_scenario() {
        let exec = Executor::new();
        assert_eq!(exec.backend_name(), "threaded");
        assert_eq!(exec.mod_exp(5, 117, 19).unwrap(), 1);
    }

    #[test]
    fn test_every_backend_type_instantiates_and_agrees() {
        for backend in [BackendType::Serial, BackendType::Threaded, BackendType::Rayon] {
            let exec = Executor::with_backend(backend, LaunchConfig::new(4, Partition::Striped));
            assert_eq!(exec.mod_exp(3, 16, 17).unwrap(), 1, "{backend} disagreed");
        }
    }

    #[test]
    fn test_zero_modulus_propagates_as_backend_error() {
        let exec = Executor::new();
        assert!(matches!(exec.mod_exp(5, 117, 0), Err(Error::Backend(_))));
    }

    #[test]
    fn test_backend_type_parse_round_trip() {
        for backend in [BackendType::Serial, BackendType::Threaded, BackendType::Rayon] {
            assert_eq!(backend.to_string().parse::<BackendType>().unwrap(), backend);
        }
        assert!("gpu".parse::<BackendType>().is_err());
    }
}
