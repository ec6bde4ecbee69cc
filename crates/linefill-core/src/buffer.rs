//! PixelBuffer - the raster that fills operate on
//!
//! # Pixel layout
//!
//! - One RGBA quadruplet of 8-bit channels per pixel
//! - Rows are stored top to bottom, pixels left to right
//! - No row padding: the byte offset of `(x, y)` is `(y * width + x) * 4`
//!
//! # Invariant
//!
//! `width * height * 4 == data.len()` holds for the whole lifetime of the
//! buffer. Dimensions are fixed at construction; the contents are mutated in
//! place or the buffer is replaced wholesale.

use crate::color::{BYTES_PER_PIXEL, Rgba};
use crate::error::{Error, Result};
use std::fmt;

/// Row-major RGBA8 raster with fixed dimensions
#[derive(Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// Number of bytes needed for a `width x height` buffer.
///
/// Returns `None` on overflow.
pub fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(BYTES_PER_PIXEL)
}

impl PixelBuffer {
    /// Create a fully transparent buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero or the
    /// byte length overflows.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, Rgba::TRANSPARENT)
    }

    /// Create a buffer with every pixel set to `color`.
    pub fn new_filled(width: u32, height: u32, color: Rgba) -> Result<Self> {
        let len = checked_len(width, height)?;
        let data = color
            .to_array()
            .iter()
            .copied()
            .cycle()
            .take(len)
            .collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap raw RGBA8 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::BufferSizeMismatch`] if `data.len() != width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = checked_len(width, height)?;
        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw bytes
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Raw bytes, mutable. The slice length is fixed, so the size
    /// invariant cannot be broken through it.
    #[inline]
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return its bytes
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Whether `(x, y)` lies inside the buffer
    #[inline]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Byte offset of pixel `(x, y)`, or `None` if out of bounds
    #[inline]
    pub fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if self.contains(x, y) {
            Some((y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL)
        } else {
            None
        }
    }

    /// Get the color at `(x, y)`.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.offset(x, y)
            .and_then(|i| Rgba::from_slice(&self.data[i..]))
    }

    /// Set the color at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) -> Result<()> {
        let i = self.offset(x, y).ok_or(Error::IndexOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&color.to_array());
        Ok(())
    }

    /// Iterate over all pixels in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = Rgba> + '_ {
        self.data
            .chunks_exact(BYTES_PER_PIXEL)
            .map(|px| Rgba::new(px[0], px[1], px[2], px[3]))
    }

    /// Count pixels equal to `color`
    pub fn count_color(&self, color: Rgba) -> usize {
        self.pixels().filter(|&p| p == color).count()
    }
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

fn checked_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    byte_len(width, height).ok_or(Error::InvalidDimension { width, height })
}
