//! Hex color parsing

use crate::error::{ColorError, ColorResult};
use linefill_core::Rgba;

/// Parse `#rrggbb` or `#rrggbbaa` (the `#` is optional).
///
/// Six-digit colors are fully opaque.
pub fn parse_hex_color(s: &str) -> ColorResult<Rgba> {
    let hex = s.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);

    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) || (hex.len() != 6 && hex.len() != 8) {
        return Err(ColorError::InvalidColorValue(format!(
            "expected #rrggbb or #rrggbbaa, got {:?}",
            s
        )));
    }

    let channel = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|_| ColorError::InvalidColorValue(format!("invalid hex digits in {:?}", s)))
    };

    let a = if hex.len() == 8 { channel(6)? } else { 255 };
    Ok(Rgba::new(channel(0)?, channel(2)?, channel(4)?, a))
}
