//! # residue-core – Parallel Modular Exponentiation Toolkit
//!
//! `residue-core` is the user-facing crate of the workspace. It wraps the
//! execution backends behind an [`Executor`] facade and layers the
//! byte-stream transforms on top: encryption maps each plaintext byte
//! through `b^e mod n` to a 64-bit word, decryption maps each word back
//! through `c^d mod n`.
//!
//! ## Architecture
//!
//! ```text
//! ops::stream / ops::file          one kernel call per unit
//!   ↓ delegates to
//! Executor                         backend choice + launch configuration
//!   ↓ delegates to
//! residue-backends::Backend        serial / threaded / rayon kernels
//!   ↓ built on
//! residue-arith                    mul_mod, pow_mod, partial products
//! ```
//!
//! The kernel's correctness contract holds at every layer: the result of a
//! transform is independent of the backend, the worker count, and the
//! partition strategy.
//!
//! ## Example
//!
//! ```
//! use residue_core::{ops::stream, Executor, KeyPair};
//!
//! # fn main() -> residue_core::Result<()> {
//! let exec = Executor::new();
//! let pair = KeyPair::new(65537, 2753, 3233);
//!
//! let words = stream::encrypt(&exec, b"hi", &pair.public)?;
//! let bytes = stream::decrypt(&exec, &words, &pair.private)?;
//! assert_eq!(&bytes, b"hi");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod executor;
pub mod keys;
pub mod ops;

pub use error::{Error, Result};
pub use executor::{BackendType, Executor};
pub use keys::{KeyPair, PrivateKey, PublicKey};

// The narrow functional interface, re-exported so callers reach the whole
// surface from one crate.
pub use residue_arith::{mul_mod, pow_mod, Partition};
pub use residue_backends::{BackendError, LaunchConfig};
