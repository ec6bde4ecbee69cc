//! linefill-region - Region filling for linefill
//!
//! This crate provides the flood fill that colors a clicked area of a
//! line-art template:
//!
//! - **Scanline flood fill** ([`seedfill`]) - fills the area connected to a
//!   seed pixel, tolerant of antialiased edges
//! - **Match rule** ([`pixel_matches`]) - the per-pixel test the fill uses
//!
//! # Examples
//!
//! ```
//! use linefill_core::{PixelBuffer, Rgba};
//! use linefill_region::{FloodFillOptions, floodfill};
//!
//! let mut buf = PixelBuffer::new_filled(10, 10, Rgba::WHITE).unwrap();
//! let red = Rgba::new(255, 0, 0, 255);
//!
//! let outcome = floodfill(&mut buf, 5, 5, red, &FloodFillOptions::default()).unwrap();
//! assert_eq!(outcome.pixels_filled, 100);
//!
//! // Filling again with the same color changes nothing
//! let again = floodfill(&mut buf, 5, 5, red, &FloodFillOptions::default()).unwrap();
//! assert!(!again.changed());
//! ```

pub mod error;
pub mod seedfill;

// Re-export core types
pub use linefill_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export seedfill types and functions
pub use seedfill::{
    FillBounds, FillOutcome, FloodFillOptions, MAX_TOLERANCE, Tolerance, floodfill,
    floodfill_rgba, pixel_matches,
};
