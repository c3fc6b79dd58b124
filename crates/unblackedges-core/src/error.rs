//! Error types for unblackedges-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! the packed storage layout.

use thiserror::Error;

/// Bit grid error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid grid dimensions (zero, or too large to address)
    #[error("invalid grid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Coordinate out of bounds
    #[error("index out of bounds: ({row}, {col}) outside {height} rows x {width} cols")]
    IndexOutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },

    /// Cell value other than 0 or 1
    #[error("invalid bit value: {0} (expected 0 or 1)")]
    InvalidValue(u32),

    /// Number of supplied values does not match the grid size
    #[error("dimension mismatch: expected {expected} values, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Memory allocation failed
    #[error("memory allocation failed")]
    AllocationFailed,
}

/// Result type alias for bit grid operations
pub type Result<T> = std::result::Result<T, Error>;
