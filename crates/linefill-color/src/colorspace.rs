//! RGB <-> HSL conversion
//!
//! HSL is a transient representation used only to rotate hues; colors are
//! always stored as RGB.
//!
//! Ranges:
//! - `h`: hue in degrees, [0.0, 360.0)
//! - `s`: saturation in percent, [0.0, 100.0]
//! - `l`: lightness in percent, [0.0, 100.0]

use linefill_core::Rgb;

/// HSL color representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create a new HSL color
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// Floor-style modulo: the result has the sign of `m`.
///
/// Unlike `%`, `true_mod(-30.0, 360.0)` is `330.0`, which is what hue
/// wraparound needs.
#[inline]
pub fn true_mod(n: f64, m: f64) -> f64 {
    ((n % m) + m) % m
}

/// Convert RGB values to HSL
///
/// Achromatic inputs (`max == min`) short-circuit to hue 0 and saturation 0.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);
    let delta = cmax - cmin;

    let l = (cmax + cmin) / 2.0;

    if delta == 0.0 {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let s = delta / (1.0 - (2.0 * l - 1.0).abs());

    let h = if cmax == r {
        60.0 * true_mod((g - b) / delta, 6.0)
    } else if cmax == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    Hsl::new(true_mod(h, 360.0), s * 100.0, l * 100.0)
}

/// Convert HSL values to RGB
///
/// The hue is wrapped into [0, 360) first; output channels are rounded to
/// the nearest integer and clamped to 0..=255.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let s = (hsl.s / 100.0).clamp(0.0, 1.0);
    let l = (hsl.l / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hh = true_mod(hsl.h, 360.0) / 60.0;
    let x = c * (1.0 - (true_mod(hh, 2.0) - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if hh >= 5.0 {
        (c, 0.0, x)
    } else if hh >= 4.0 {
        (x, 0.0, c)
    } else if hh >= 3.0 {
        (0.0, x, c)
    } else if hh >= 2.0 {
        (0.0, c, x)
    } else if hh >= 1.0 {
        (x, c, 0.0)
    } else {
        (c, x, 0.0)
    };

    Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
}

/// Rotate the hue by `degrees`, wrapping into [0, 360)
pub fn rotate_hue(hsl: Hsl, degrees: f64) -> Hsl {
    Hsl::new(true_mod(hsl.h + degrees, 360.0), hsl.s, hsl.l)
}

#[inline]
fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-6, "{} != {}", a, b);
    }

    #[test]
    fn test_true_mod_is_non_negative() {
        assert_close(true_mod(-30.0, 360.0), 330.0);
        assert_close(true_mod(390.0, 360.0), 30.0);
        assert_close(true_mod(-1.5, 6.0), 4.5);
        assert_close(true_mod(0.0, 360.0), 0.0);
    }

    #[test]
    fn test_primaries() {
        let red = rgb_to_hsl(255, 0, 0);
        assert_close(red.h, 0.0);
        assert_close(red.s, 100.0);
        assert_close(red.l, 50.0);

        let green = rgb_to_hsl(0, 255, 0);
        assert_close(green.h, 120.0);

        let blue = rgb_to_hsl(0, 0, 255);
        assert_close(blue.h, 240.0);

        let magenta = rgb_to_hsl(255, 0, 255);
        assert_close(magenta.h, 300.0);
    }

    #[test]
    fn test_achromatic_short_circuit() {
        let gray = rgb_to_hsl(128, 128, 128);
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert_close(gray.l, 128.0 / 255.0 * 100.0);
        assert_eq!(hsl_to_rgb(gray), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_hsl_to_rgb_sectors() {
        assert_eq!(hsl_to_rgb(Hsl::new(0.0, 100.0, 50.0)), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(60.0, 100.0, 50.0)), Rgb::new(255, 255, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(120.0, 100.0, 50.0)), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(Hsl::new(180.0, 100.0, 50.0)), Rgb::new(0, 255, 255));
        assert_eq!(hsl_to_rgb(Hsl::new(240.0, 100.0, 50.0)), Rgb::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(Hsl::new(300.0, 100.0, 50.0)), Rgb::new(255, 0, 255));
        // 360 wraps to red
        assert_eq!(hsl_to_rgb(Hsl::new(360.0, 100.0, 50.0)), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_rotate_hue_wraps() {
        let hsl = Hsl::new(350.0, 50.0, 50.0);
        assert_close(rotate_hue(hsl, 30.0).h, 20.0);
        assert_close(rotate_hue(Hsl::new(10.0, 0.0, 0.0), -30.0).h, 340.0);
    }
}
