//! I/O error types
//!
//! Provides a unified error type for bitmap decoding and encoding so that
//! callers only need to handle one error type.

use thiserror::Error;

/// Error type for bitmap I/O operations.
///
/// Wraps standard I/O failures, malformed input and grid construction
/// errors.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream does not start with a recognised PNM magic number
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A valid PNM stream of a type other than bitmap
    #[error("wrong image type {0}: expected a PBM bitmap (P1 or P4)")]
    WrongImageType(String),

    /// The bitmap data is structurally invalid or truncated
    #[error("invalid image data: {0}")]
    InvalidData(String),

    /// An error from the core library (e.g. allocation failure)
    #[error("core error: {0}")]
    Core(#[from] unblackedges_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
