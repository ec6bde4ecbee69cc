//! Error types for linefill-core
//!
//! Provides a unified error type for buffer construction and access.
//! Each variant captures enough context for diagnostics without exposing
//! internal layout details.

use thiserror::Error;

/// Linefill core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid buffer dimensions
    #[error("invalid buffer dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Raw data length does not fit the declared dimensions
    #[error("buffer size mismatch: {width}x{height} needs {expected} bytes, got {actual}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    /// Pixel coordinate outside the buffer
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} buffer")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
