//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to load a test bitmap
    #[error("failed to load bitmap '{path}': {message}")]
    GridLoad { path: String, message: String },

    /// Failed to write a bitmap
    #[error("failed to write bitmap '{path}': {message}")]
    GridWrite { path: String, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
