//! Utility types for trait definitions.

/// Type to handle FMM related errors
#[derive(thiserror::Error, Debug)]
pub enum FmmError {
    /// Failure to run some business logic
    #[error("Failed: {0}")]
    Failed(String),

    /// Rejected configuration parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}
