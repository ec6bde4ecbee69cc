//! Error types for linefill-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Transform mode key not recognized
    #[error("unknown transform mode: {0:?}")]
    UnknownTransform(String),

    /// Invalid color value
    #[error("invalid color value: {0}")]
    InvalidColorValue(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
