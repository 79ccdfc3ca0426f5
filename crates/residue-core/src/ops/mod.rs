//! Transform operations over the kernel
//!
//! - [`stream`] - in-memory byte-stream encryption and decryption
//! - [`file`] - the flat 64-bit-word ciphertext artifact at the file boundary

pub mod file;
pub mod stream;
