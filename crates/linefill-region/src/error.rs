//! Error types for linefill-region

use thiserror::Error;

/// Errors that can occur during region fill operations
///
/// Every variant is a precondition failure detected before the buffer is
/// touched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] linefill_core::Error),

    /// Zero-sized raster
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Raw data length does not fit the declared dimensions
    #[error("raster size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Non-finite or negative seed coordinate
    #[error("invalid {axis} coordinate: {value}")]
    InvalidCoordinate { axis: &'static str, value: f64 },

    /// Seed position outside the raster
    #[error("invalid seed position: ({x}, {y}) outside {width}x{height}")]
    InvalidSeed {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
