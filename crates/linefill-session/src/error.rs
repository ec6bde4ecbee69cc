//! Session error types

use linefill_color::ColorError;
use linefill_region::RegionError;
use thiserror::Error;

/// Errors returned by fill session operations
///
/// Every variant is raised before the buffer or the ledger is touched, so a
/// failed call leaves the session exactly as it was.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Flood fill rejected its input (e.g. the seed is outside the buffer)
    #[error("region error: {0}")]
    Region(#[from] RegionError),

    /// A mode key or color value could not be parsed
    #[error("color error: {0}")]
    Color(#[from] ColorError),

    /// The region index has not been registered
    #[error("unknown region {index} ({registered} registered)")]
    UnknownRegion { index: usize, registered: usize },

    /// Every assignable palette slot is taken
    #[error("region registry is full ({capacity} regions)")]
    RegistryFull { capacity: usize },

    /// The record could not be encoded or decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;
