//! PNG template support
//!
//! Every PNG layout is normalized to RGBA8 on read: palettes and
//! low bit depths are expanded, 16-bit samples are stripped to 8 bits,
//! grayscale is replicated into R, G and B, and a missing alpha channel
//! becomes fully opaque. Writes are always 8-bit RGBA.

use crate::{IoError, IoResult};
use linefill_core::PixelBuffer;
use linefill_core::color::BYTES_PER_PIXEL;
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image into an RGBA8 buffer
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<PixelBuffer> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            output_info.bit_depth
        )));
    }

    let samples = match output_info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG output color type: {:?}",
                other
            )));
        }
    };

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];

    let mut rgba = Vec::with_capacity(width as usize * height as usize * BYTES_PER_PIXEL);
    for row in data.chunks(bytes_per_row).take(height as usize) {
        for px in row[..width as usize * samples].chunks_exact(samples) {
            let quad = match *px {
                [g] => [g, g, g, 255],
                [g, a] => [g, g, g, a],
                [r, g, b] => [r, g, b, 255],
                [r, g, b, a] => [r, g, b, a],
                _ => unreachable!("chunks_exact yields 1..=4 samples"),
            };
            rgba.extend_from_slice(&quad);
        }
    }

    tracing::debug!(width, height, color_type = ?output_info.color_type, "decoded PNG");
    Ok(PixelBuffer::from_raw(width, height, rgba)?)
}

/// Write a buffer as an 8-bit RGBA PNG
pub fn write_png<W: Write>(buffer: &PixelBuffer, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, buffer.width(), buffer.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(buffer.as_bytes())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use linefill_core::Rgba;
    use std::io::Cursor;

    fn encode(width: u32, height: u32, color: ColorType, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        {
            let mut encoder = Encoder::new(&mut out, width, height);
            encoder.set_color(color);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
            writer.finish().unwrap();
        }
        out
    }

    #[test]
    fn test_round_trip_rgba() {
        let mut buf = PixelBuffer::new_filled(3, 2, Rgba::WHITE).unwrap();
        buf.set_pixel(1, 1, Rgba::new(10, 20, 30, 40)).unwrap();

        let mut bytes = Vec::new();
        write_png(&buf, &mut bytes).unwrap();
        let back = read_png(Cursor::new(bytes)).unwrap();
        assert_eq!(back, buf);
    }

    #[test]
    fn test_rgb_becomes_opaque() {
        let png = encode(2, 1, ColorType::Rgb, &[1, 2, 3, 4, 5, 6]);
        let buf = read_png(Cursor::new(png)).unwrap();
        assert_eq!(buf.as_bytes(), &[1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn test_gray_alpha_is_replicated() {
        let png = encode(2, 1, ColorType::GrayscaleAlpha, &[7, 8, 200, 0]);
        let buf = read_png(Cursor::new(png)).unwrap();
        assert_eq!(buf.get_pixel(0, 0), Some(Rgba::new(7, 7, 7, 8)));
        assert_eq!(buf.get_pixel(1, 0), Some(Rgba::new(200, 200, 200, 0)));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        let err = read_png(Cursor::new(b"not a png".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }
}
