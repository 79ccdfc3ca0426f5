//! # residue-arith – Modular Arithmetic Foundation
//!
//! `residue-arith` is the dependency-light leaf of the workspace. It owns the
//! arithmetic that every execution backend reproduces: exact 64-bit modular
//! multiplication through a 128-bit intermediate, the sequential
//! square-and-multiply reference, the per-worker partial-product kernel body,
//! and the bit-index partitioning strategies that split an exponent's 64 bit
//! positions across workers.
//!
//! Everything in this crate is a pure function over value types. There is no
//! concurrency, no I/O, and no shared state; the backends crate layers the
//! scheduling models on top.
//!
//! ## Quick Start
//!
//! ```
//! use residue_arith::{mul_mod, pow_mod, partial_product, Partition, EXPONENT_BITS};
//!
//! // Exact even at the 64-bit boundary
//! assert_eq!(mul_mod(u64::MAX, u64::MAX, u64::MAX - 1), 1);
//!
//! // Sequential reference semantics
//! assert_eq!(pow_mod(5, 117, 19), 1);
//!
//! // A two-worker striped split recombines to the same answer
//! let partials: Vec<u64> = (0..2)
//!     .map(|w| partial_product(5, 117, 19, Partition::Striped.indices(w, 2)))
//!     .collect();
//! let combined = partials.into_iter().fold(1 % 19, |acc, p| mul_mod(acc, p, 19));
//! assert_eq!(combined, pow_mod(5, 117, 19));
//! assert_eq!(EXPONENT_BITS, 64);
//! ```

pub mod constants;
pub mod mulmod;
pub mod partition;
pub mod powmod;

pub use constants::EXPONENT_BITS;
pub use mulmod::mul_mod;
pub use partition::{Partition, PartitionIndices};
pub use powmod::{partial_product, pow_mod};
