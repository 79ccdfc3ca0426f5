//! Error types for residue-core operations

/// Result type for residue-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in residue-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Kernel execution failed (precondition violation or pool construction)
    #[error("backend error: {0}")]
    Backend(#[from] residue_backends::BackendError),

    /// I/O failure at the stream boundary; output already written stays written
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Ciphertext artifact length is not a whole number of 64-bit words
    #[error("ciphertext length {0} is not a multiple of the 8-byte word size")]
    MalformedCiphertext(usize),

    /// Environment-driven configuration could not be parsed
    #[error("invalid configuration: {0}")]
    Config(String),
}
