//! Linefill Color - Color math for fill colors
//!
//! This crate provides the pure functions that turn a palette entry into a
//! concrete fill color:
//!
//! - **Color space conversion** ([`colorspace`]): RGB <-> HSL, hue rotation
//! - **Transforms** ([`transform`]): none, shade, tint, complement, analogous
//! - **Parsing** ([`parse`]): hex color strings
//!
//! # Example
//!
//! ```
//! use linefill_color::{TransformMode, apply_transform};
//! use linefill_core::Rgb;
//!
//! let base = Rgb::new(255, 0, 0);
//! assert_eq!(apply_transform(base, TransformMode::Complement), Rgb::new(0, 255, 255));
//! ```

pub mod colorspace;
pub mod error;
pub mod parse;
pub mod transform;

// Re-export core types
pub use linefill_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

pub use colorspace::{Hsl, hsl_to_rgb, rgb_to_hsl, rotate_hue, true_mod};
pub use parse::parse_hex_color;
pub use transform::{
    ANALOG_ROTATION, COMPLEMENT_ROTATION, SHADE_STEP, TINT_STEP, TransformMode, apply_transform,
};
