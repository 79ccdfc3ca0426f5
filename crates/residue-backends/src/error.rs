//! Error types for backend execution

/// Result type for backend operations
pub type Result<T> = std::result::Result<T, BackendError>;

/// Errors that can occur during kernel execution
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// Zero modulus rejected before any arithmetic runs
    #[error("modulus must be non-zero")]
    ZeroModulus,

    /// Launch configuration failed validation
    #[error("invalid launch configuration: {0}")]
    InvalidLaunchConfig(String),

    /// Worker pool construction failed
    #[error("worker pool build failed: {0}")]
    PoolBuild(String),
}

impl BackendError {
    /// Create an invalid-launch-configuration error
    pub fn invalid_launch(msg: impl Into<String>) -> Self {
        Self::InvalidLaunchConfig(msg.into())
    }
}
