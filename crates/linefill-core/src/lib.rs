//! Linefill Core - Basic data structures for the coloring engine
//!
//! This crate provides the fundamental types shared by the other linefill
//! crates:
//!
//! - [`PixelBuffer`] - Row-major RGBA8 raster with a fixed size
//! - [`Rgba`] / [`Rgb`] - Pixel and palette color values
//! - [`Error`] / [`Result`] - Core error type
//!
//! # Example
//!
//! ```
//! use linefill_core::{PixelBuffer, Rgba};
//!
//! let mut buf = PixelBuffer::new_filled(4, 3, Rgba::WHITE).unwrap();
//! buf.set_pixel(1, 2, Rgba::BLACK).unwrap();
//! assert_eq!(buf.get_pixel(1, 2), Some(Rgba::BLACK));
//! assert_eq!(buf.as_bytes().len(), 4 * 3 * 4);
//! ```

pub mod buffer;
pub mod color;
pub mod error;

pub use buffer::PixelBuffer;
pub use color::{Rgb, Rgba};
pub use error::{Error, Result};
