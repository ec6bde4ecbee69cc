//! Synthetic line-art fixtures
//!
//! Small templates built in memory so regression tests do not depend on
//! image files: white paper with black strokes, optionally antialiased.

use linefill_core::{PixelBuffer, Rgba};

/// Paper color used by the fixtures
pub const PAPER: Rgba = Rgba::WHITE;
/// Stroke color used by the fixtures
pub const INK: Rgba = Rgba::BLACK;

/// Blank sheet of paper
pub fn paper(width: u32, height: u32) -> PixelBuffer {
    uniform(width, height, PAPER)
}

/// Buffer with every pixel set to `color`
pub fn uniform(width: u32, height: u32, color: Rgba) -> PixelBuffer {
    PixelBuffer::new_filled(width, height, color).expect("fixture dimensions")
}

/// Paper with a one-pixel rectangle outline covering `[x0, x1] x [y0, y1]`
pub fn outlined_box(width: u32, height: u32, x0: u32, y0: u32, x1: u32, y1: u32) -> PixelBuffer {
    let mut buf = paper(width, height);
    draw_box(&mut buf, x0, y0, x1, y1, INK);
    buf
}

/// Draw a one-pixel rectangle outline
pub fn draw_box(buf: &mut PixelBuffer, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgba) {
    for x in x0..=x1 {
        set(buf, x, y0, color);
        set(buf, x, y1, color);
    }
    for y in y0..=y1 {
        set(buf, x0, y, color);
        set(buf, x1, y, color);
    }
}

/// Draw a full-height vertical line at column `x`
pub fn draw_vline(buf: &mut PixelBuffer, x: u32, color: Rgba) {
    for y in 0..buf.height() {
        set(buf, x, y, color);
    }
}

/// Draw a full-width horizontal line at row `y`
pub fn draw_hline(buf: &mut PixelBuffer, y: u32, color: Rgba) {
    for x in 0..buf.width() {
        set(buf, x, y, color);
    }
}

/// Paper split into a left and right half by a vertical stroke
pub fn two_rooms(width: u32, height: u32) -> PixelBuffer {
    let mut buf = paper(width, height);
    draw_vline(&mut buf, width / 2, INK);
    buf
}

/// Count pixels equal to `color` inside `[x0, x1] x [y0, y1]`
pub fn count_in_rect(
    buf: &PixelBuffer,
    x0: u32,
    y0: u32,
    x1: u32,
    y1: u32,
    color: Rgba,
) -> usize {
    let mut n = 0;
    for y in y0..=y1 {
        for x in x0..=x1 {
            if buf.get_pixel(x, y) == Some(color) {
                n += 1;
            }
        }
    }
    n
}

fn set(buf: &mut PixelBuffer, x: u32, y: u32, color: Rgba) {
    if buf.contains(x, y) {
        let _ = buf.set_pixel(x, y, color);
    }
}
