//! Color value types
//!
//! [`Rgba`] is the pixel value stored in a [`PixelBuffer`](crate::PixelBuffer).
//! [`Rgb`] is the opaque form used by palettes and color transforms; its
//! alpha is implicitly 255.

use std::fmt;

/// Bytes per pixel in an RGBA8 buffer
pub const BYTES_PER_PIXEL: usize = 4;

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Fully opaque RGBA form
    pub const fn to_rgba(self) -> Rgba {
        Rgba::new(self.r, self.g, self.b, 255)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// RGBA color with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully transparent black
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    /// Opaque black
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    /// Opaque white
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    /// Read a color from the first four bytes of `bytes`.
    ///
    /// Returns `None` if fewer than four bytes are available.
    #[inline]
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [r, g, b, a, ..] => Some(Self::new(*r, *g, *b, *a)),
            _ => None,
        }
    }

    /// Channels as an array in buffer order
    #[inline]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Drop the alpha channel
    pub const fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

impl From<Rgb> for Rgba {
    fn from(c: Rgb) -> Self {
        c.to_rgba()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.r, self.g, self.b, self.a
        )
    }
}
