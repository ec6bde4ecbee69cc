//! Tolerance-aware scanline flood fill
//!
//! Fills the region connected to a seed pixel in an RGBA8 raster. Whole
//! horizontal runs are filled per work item; the pixels directly above and
//! below each run are pushed onto an explicit stack, so recursion depth never
//! grows with the image.
//!
//! # Match rule
//!
//! A candidate pixel is filled when, in order:
//!
//! 1. it is not already the fill color (no match),
//! 2. it is fully transparent and the fill is not (match),
//! 3. the target and fill colors are within tolerance on all four channels
//!    (no match, the fill would be invisible),
//! 4. it equals the target exactly (match),
//! 5. it is within tolerance of the target on R, G and B and within
//!    `255 - tolerance` on alpha (match),
//! 6. otherwise no match.
//!
//! The loose alpha allowance in (5) lets fills cross antialiased,
//! translucent edges of line art while opaque strokes still stop them.
//! Rule (1) makes a filled pixel unmatchable, which bounds every pixel to a
//! single write and at most two pushes.

use crate::error::{RegionError, RegionResult};
use linefill_core::color::BYTES_PER_PIXEL;
use linefill_core::{PixelBuffer, Rgba};

/// Largest accepted tolerance
pub const MAX_TOLERANCE: u8 = 254;

/// Per-channel color tolerance, always in `0..=254`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tolerance(u8);

impl Tolerance {
    /// Exact matching
    pub const EXACT: Tolerance = Tolerance(0);

    /// Create a tolerance, clamping to [`MAX_TOLERANCE`]
    pub fn new(value: u8) -> Self {
        Self(value.min(MAX_TOLERANCE))
    }

    /// Normalize an untyped tolerance value.
    ///
    /// Non-finite values become 0, negative values take their absolute
    /// value, and the result is rounded and clamped to [`MAX_TOLERANCE`].
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self::EXACT;
        }
        Self(value.abs().round().min(MAX_TOLERANCE as f64) as u8)
    }

    /// The tolerance value
    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }
}

/// Options for flood fill operations
#[derive(Debug, Clone, Default)]
pub struct FloodFillOptions {
    /// Per-channel tolerance when comparing pixels to the seed color
    pub tolerance: Tolerance,
}

impl FloodFillOptions {
    /// Set the tolerance
    pub fn with_tolerance(mut self, tolerance: u8) -> Self {
        self.tolerance = Tolerance::new(tolerance);
        self
    }
}

/// Bounding rectangle of the pixels written by a fill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FillBounds {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Result of a flood fill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillOutcome {
    /// Number of pixels written
    pub pixels_filled: usize,
    /// Bounding rectangle of the written pixels, `None` if nothing changed
    pub bounds: Option<FillBounds>,
}

impl FillOutcome {
    /// Whether any pixel was written
    #[inline]
    pub fn changed(&self) -> bool {
        self.pixels_filled > 0
    }
}

/// Test a candidate pixel against the fill rule.
///
/// `target` is the seed color sampled before the fill started.
pub fn pixel_matches(candidate: Rgba, target: Rgba, fill: Rgba, tolerance: Tolerance) -> bool {
    if candidate == fill {
        return false;
    }
    if candidate.a == 0 && fill.a > 0 {
        return true;
    }

    let tol = tolerance.value();
    if within(target, fill, tol, tol) {
        return false;
    }
    if candidate == target {
        return true;
    }
    within(candidate, target, tol, 255 - tol)
}

#[inline]
fn within(a: Rgba, b: Rgba, rgb_tol: u8, alpha_tol: u8) -> bool {
    a.r.abs_diff(b.r) <= rgb_tol
        && a.g.abs_diff(b.g) <= rgb_tol
        && a.b.abs_diff(b.b) <= rgb_tol
        && a.a.abs_diff(b.a) <= alpha_tol
}

/// Flood fill a buffer starting from `(x, y)`.
///
/// Returns a [`FillOutcome`] with `pixels_filled == 0` when the seed does
/// not match the fill rule (for example it already has the fill color);
/// the buffer is not modified in that case.
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if the seed is out of bounds. The
/// buffer is left untouched.
pub fn floodfill(
    buffer: &mut PixelBuffer,
    x: u32,
    y: u32,
    fill: Rgba,
    options: &FloodFillOptions,
) -> RegionResult<FillOutcome> {
    let (width, height) = (buffer.width(), buffer.height());
    if !buffer.contains(x, y) {
        return Err(RegionError::InvalidSeed {
            x,
            y,
            width,
            height,
        });
    }
    Ok(fill_raster(
        buffer.as_bytes_mut(),
        width,
        height,
        x,
        y,
        fill,
        options.tolerance,
    ))
}

/// Flood fill a raw RGBA8 byte slice.
///
/// This is the untyped entry point: dimensions and coordinates come from
/// outside and are validated before anything is written. Fractional
/// coordinates are truncated toward zero. The tolerance is normalized with
/// [`Tolerance::from_f64`].
///
/// # Errors
///
/// - [`RegionError::InvalidDimension`] if `width` or `height` is zero
/// - [`RegionError::BufferSizeMismatch`] if `data.len() != width * height * 4`
/// - [`RegionError::InvalidCoordinate`] if `x` or `y` is negative or not finite
/// - [`RegionError::InvalidSeed`] if the seed lies outside the raster
pub fn floodfill_rgba(
    data: &mut [u8],
    width: u32,
    height: u32,
    x: f64,
    y: f64,
    fill: Rgba,
    tolerance: f64,
) -> RegionResult<FillOutcome> {
    if width == 0 || height == 0 {
        return Err(RegionError::InvalidDimension { width, height });
    }
    let expected = linefill_core::buffer::byte_len(width, height)
        .ok_or(RegionError::InvalidDimension { width, height })?;
    if data.len() != expected {
        return Err(RegionError::BufferSizeMismatch {
            expected,
            actual: data.len(),
        });
    }

    let xi = seed_coordinate("x", x)?;
    let yi = seed_coordinate("y", y)?;
    if xi >= width || yi >= height {
        return Err(RegionError::InvalidSeed {
            x: xi,
            y: yi,
            width,
            height,
        });
    }

    Ok(fill_raster(
        data,
        width,
        height,
        xi,
        yi,
        fill,
        Tolerance::from_f64(tolerance),
    ))
}

fn seed_coordinate(axis: &'static str, value: f64) -> RegionResult<u32> {
    if !value.is_finite() || value < 0.0 {
        return Err(RegionError::InvalidCoordinate { axis, value });
    }
    let truncated = value.trunc();
    if truncated != value {
        tracing::warn!(axis, from = value, to = truncated, "seed coordinate truncated");
    }
    Ok(truncated.min(u32::MAX as f64) as u32)
}

/// Scanline fill state over a validated raster.
///
/// Positions are pixel indices (`y * width + x`); byte offsets are the index
/// times four.
struct ScanlineFill<'a> {
    data: &'a mut [u8],
    width: usize,
    pixels: usize,
    target: Rgba,
    fill: Rgba,
    tolerance: Tolerance,
    stack: Vec<usize>,
    filled: usize,
    min_x: usize,
    max_x: usize,
    min_y: usize,
    max_y: usize,
}

impl ScanlineFill<'_> {
    #[inline]
    fn pixel(&self, index: usize) -> Option<Rgba> {
        if index >= self.pixels {
            return None;
        }
        Rgba::from_slice(&self.data[index * BYTES_PER_PIXEL..])
    }

    /// Non-mutating compare
    #[inline]
    fn compare(&self, index: usize) -> bool {
        self.pixel(index)
            .is_some_and(|p| pixel_matches(p, self.target, self.fill, self.tolerance))
    }

    /// Compare and, on a match, write the fill color
    fn compare_and_set(&mut self, index: usize) -> bool {
        if !self.compare(index) {
            return false;
        }
        let offset = index * BYTES_PER_PIXEL;
        self.data[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&self.fill.to_array());
        self.filled += 1;
        true
    }

    fn run(&mut self, seed: usize) {
        self.stack.push(seed);

        while let Some(index) = self.stack.pop() {
            if !self.compare_and_set(index) {
                continue;
            }

            let row_start = index - index % self.width;
            let row_end = row_start + self.width;

            let mut west = index;
            while west > row_start && self.compare_and_set(west - 1) {
                west -= 1;
            }
            let mut east = index;
            while east + 1 < row_end && self.compare_and_set(east + 1) {
                east += 1;
            }

            let y = index / self.width;
            self.min_x = self.min_x.min(west - row_start);
            self.max_x = self.max_x.max(east - row_start);
            self.min_y = self.min_y.min(y);
            self.max_y = self.max_y.max(y);

            for j in west..=east {
                if j >= self.width && self.compare(j - self.width) {
                    self.stack.push(j - self.width);
                }
                if j + self.width < self.pixels && self.compare(j + self.width) {
                    self.stack.push(j + self.width);
                }
            }
        }
    }

    fn outcome(&self) -> FillOutcome {
        if self.filled == 0 {
            return FillOutcome::default();
        }
        FillOutcome {
            pixels_filled: self.filled,
            bounds: Some(FillBounds {
                x: self.min_x as u32,
                y: self.min_y as u32,
                width: (self.max_x - self.min_x + 1) as u32,
                height: (self.max_y - self.min_y + 1) as u32,
            }),
        }
    }
}

/// Fill a raster whose dimensions and seed are already validated
fn fill_raster(
    data: &mut [u8],
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    fill: Rgba,
    tolerance: Tolerance,
) -> FillOutcome {
    let width = width as usize;
    let pixels = width * height as usize;
    let seed = y as usize * width + x as usize;
    let Some(target) = Rgba::from_slice(&data[seed * BYTES_PER_PIXEL..]) else {
        return FillOutcome::default();
    };

    if !pixel_matches(target, target, fill, tolerance) {
        tracing::debug!(x, y, %target, %fill, "seed not fillable");
        return FillOutcome::default();
    }

    let mut state = ScanlineFill {
        data,
        width,
        pixels,
        target,
        fill,
        tolerance,
        stack: Vec::new(),
        filled: 0,
        min_x: usize::MAX,
        max_x: 0,
        min_y: usize::MAX,
        max_y: 0,
    };
    state.run(seed);

    let outcome = state.outcome();
    tracing::debug!(
        x,
        y,
        %fill,
        tolerance = tolerance.value(),
        pixels = outcome.pixels_filled,
        "flood fill complete"
    );
    outcome
}
