//! Palette transforms
//!
//! A fill never uses a palette entry verbatim unless the mode is
//! [`TransformMode::None`]; the other modes derive a related color from the
//! base entry: darker (shade), lighter (tint), opposite hue (complement) or
//! a neighboring hue (analogous, 30 degrees either way).

use crate::colorspace::{hsl_to_rgb, rgb_to_hsl, rotate_hue};
use crate::error::{ColorError, ColorResult};
use linefill_core::Rgb;
use std::fmt;
use std::str::FromStr;

/// Amount subtracted from each channel by [`TransformMode::Shade`]
pub const SHADE_STEP: u8 = 30;
/// Amount added to each channel by [`TransformMode::Tint`]
pub const TINT_STEP: u8 = 45;
/// Hue rotation of [`TransformMode::Complement`], in degrees
pub const COMPLEMENT_ROTATION: f64 = 180.0;
/// Hue rotation of the analogous modes, in degrees
pub const ANALOG_ROTATION: f64 = 30.0;

/// How a fill color is derived from its base palette entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum TransformMode {
    /// Base color unchanged
    #[default]
    None,
    /// Each channel darkened by [`SHADE_STEP`]
    Shade,
    /// Each channel lightened by [`TINT_STEP`]
    Tint,
    /// Hue rotated by 180 degrees
    Complement,
    /// Hue rotated by +30 degrees
    AnalogCcw,
    /// Hue rotated by -30 degrees
    AnalogCw,
}

impl TransformMode {
    /// All modes, in key order
    pub const ALL: [TransformMode; 6] = [
        TransformMode::None,
        TransformMode::Shade,
        TransformMode::Tint,
        TransformMode::Complement,
        TransformMode::AnalogCcw,
        TransformMode::AnalogCw,
    ];

    /// Short mode key (`none`, `shade`, `tint`, `complement`, `analog-ccw`,
    /// `analog-cw`)
    pub fn key(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Shade => "shade",
            Self::Tint => "tint",
            Self::Complement => "complement",
            Self::AnalogCcw => "analog-ccw",
            Self::AnalogCw => "analog-cw",
        }
    }

    /// Key under which fill coordinates made in this mode are recorded
    pub fn coord_key(self) -> &'static str {
        match self {
            Self::None => "coords-norm",
            Self::Shade => "coords-shade",
            Self::Tint => "coords-tint",
            Self::Complement => "coords-complement",
            Self::AnalogCcw => "coords-analogccw",
            Self::AnalogCw => "coords-analogcw",
        }
    }

    /// Look up a mode by its record coordinate key
    pub fn from_coord_key(key: &str) -> ColorResult<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.coord_key() == key)
            .ok_or_else(|| ColorError::UnknownTransform(key.to_string()))
    }

    /// Apply this mode to `base`
    pub fn apply(self, base: Rgb) -> Rgb {
        apply_transform(base, self)
    }
}

impl fmt::Display for TransformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TransformMode {
    type Err = ColorError;

    /// Accepts the short key, the record coordinate key, or the empty
    /// string / `norm` for [`TransformMode::None`].
    fn from_str(s: &str) -> ColorResult<Self> {
        match s {
            "" | "norm" | "none" => Ok(Self::None),
            "shade" => Ok(Self::Shade),
            "tint" => Ok(Self::Tint),
            "complement" => Ok(Self::Complement),
            "analog-ccw" | "analogccw" => Ok(Self::AnalogCcw),
            "analog-cw" | "analogcw" => Ok(Self::AnalogCw),
            other => Self::from_coord_key(other),
        }
    }
}

/// Derive a fill color from `base` according to `mode`
///
/// Shade and tint clamp every channel at 0 and 255 respectively. The hue
/// modes go through HSL, so their output may differ from an exact rotation
/// by one unit per channel due to rounding.
pub fn apply_transform(base: Rgb, mode: TransformMode) -> Rgb {
    match mode {
        TransformMode::None => base,
        TransformMode::Shade => Rgb::new(
            base.r.saturating_sub(SHADE_STEP),
            base.g.saturating_sub(SHADE_STEP),
            base.b.saturating_sub(SHADE_STEP),
        ),
        TransformMode::Tint => Rgb::new(
            base.r.saturating_add(TINT_STEP),
            base.g.saturating_add(TINT_STEP),
            base.b.saturating_add(TINT_STEP),
        ),
        TransformMode::Complement => rotate(base, COMPLEMENT_ROTATION),
        TransformMode::AnalogCcw => rotate(base, ANALOG_ROTATION),
        TransformMode::AnalogCw => rotate(base, -ANALOG_ROTATION),
    }
}

fn rotate(base: Rgb, degrees: f64) -> Rgb {
    hsl_to_rgb(rotate_hue(rgb_to_hsl(base.r, base.g, base.b), degrees))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_is_identity() {
        let c = Rgb::new(228, 36, 38);
        assert_eq!(apply_transform(c, TransformMode::None), c);
    }

    #[test]
    fn test_shade_clamps_every_channel() {
        assert_eq!(
            apply_transform(Rgb::new(228, 36, 38), TransformMode::Shade),
            Rgb::new(198, 6, 8)
        );
        assert_eq!(
            apply_transform(Rgb::new(10, 20, 29), TransformMode::Shade),
            Rgb::new(0, 0, 0)
        );
    }

    #[test]
    fn test_tint_clamps_at_white() {
        assert_eq!(
            apply_transform(Rgb::new(241, 231, 13), TransformMode::Tint),
            Rgb::new(255, 255, 58)
        );
    }

    #[test]
    fn test_complement_of_primaries() {
        assert_eq!(
            apply_transform(Rgb::new(255, 0, 0), TransformMode::Complement),
            Rgb::new(0, 255, 255)
        );
        assert_eq!(
            apply_transform(Rgb::new(0, 0, 255), TransformMode::Complement),
            Rgb::new(255, 255, 0)
        );
    }

    #[test]
    fn test_analogous_rotations() {
        // red +30 -> orange, red -30 -> rose
        assert_eq!(
            apply_transform(Rgb::new(255, 0, 0), TransformMode::AnalogCcw),
            Rgb::new(255, 128, 0)
        );
        assert_eq!(
            apply_transform(Rgb::new(255, 0, 0), TransformMode::AnalogCw),
            Rgb::new(255, 0, 128)
        );
    }

    #[test]
    fn test_keys_round_trip() {
        for mode in TransformMode::ALL {
            assert_eq!(mode.key().parse::<TransformMode>().unwrap(), mode);
            assert_eq!(mode.coord_key().parse::<TransformMode>().unwrap(), mode);
            assert_eq!(TransformMode::from_coord_key(mode.coord_key()).unwrap(), mode);
        }
        assert_eq!("".parse::<TransformMode>().unwrap(), TransformMode::None);
        assert!(matches!(
            "sepia".parse::<TransformMode>(),
            Err(ColorError::UnknownTransform(_))
        ));
    }
}
