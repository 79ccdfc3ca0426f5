//! Backend implementations
//!
//! Three backends cover the scheduling models the kernel supports:
//!
//! - [`SerialBackend`] - sequential square-and-multiply; the reference.
//! - [`ThreadedBackend`] - shared-memory model: scoped worker threads with a
//!   mutex-guarded combine.
//! - [`RayonBackend`] - rank/collective model: striped partials folded by a
//!   reduction tree on a sized thread pool, with no shared mutable state.

mod rayon;
mod serial;
mod threaded;

pub use self::rayon::RayonBackend;
pub use serial::SerialBackend;
pub use threaded::ThreadedBackend;
