//! Execution backends for bit-parallel modular exponentiation
//!
//! This crate provides:
//! - **Backend Trait**: Pluggable kernel execution interface
//! - **Serial Backend**: Sequential square-and-multiply reference
//! - **Threaded Backend**: Shared-memory workers with a lock-guarded combine
//! - **Rayon Backend**: Rank-striped partials folded by a collective reduce
//!
//! # Architecture
//!
//! Every backend computes `base^exponent mod modulus` by splitting the 64
//! exponent bit positions across workers and recombining private partial
//! products under the modulus:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Backend Trait                         │
//! │          mod_exp(base, exponent, modulus, config)        │
//! └─────────────────────┬───────────────────────────────────┘
//!                       │
//!         ┌─────────────┼──────────────┐
//!         ▼             ▼              ▼
//!   ┌──────────┐  ┌──────────┐  ┌──────────┐
//!   │  Serial  │  │ Threaded │  │  Rayon   │
//!   │ Backend  │  │ Backend  │  │ Backend  │
//!   └──────────┘  └──────────┘  └──────────┘
//! ```
//!
//! The combination operator `(x, y) → x*y mod m` is associative and
//! commutative, so the final result is independent of worker count, partition
//! strategy, and scheduling order: every backend is interchangeable with the
//! sequential reference.
//!
//! # Usage
//!
//! ```rust
//! use residue_backends::{Backend, LaunchConfig, Partition, ThreadedBackend};
//!
//! # fn main() -> residue_backends::Result<()> {
//! let backend = ThreadedBackend::new();
//! let config = LaunchConfig::new(4, Partition::Blocked);
//! assert_eq!(backend.mod_exp(5, 117, 19, &config)?, 1);
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod backends;
pub mod error;

pub use backend::{Backend, LaunchConfig};
pub use backends::{RayonBackend, SerialBackend, ThreadedBackend};
pub use error::{BackendError, Result};

// The partition strategies are part of the launch surface; re-export them so
// downstream crates configure launches from one import.
pub use residue_arith::Partition;
