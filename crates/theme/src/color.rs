//! Hex color parsing and HSL conversion.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected a 6-digit hex color, got '{0}'")]
    MalformedHex(String),
}

/// Hue-saturation-lightness triple, in CSS custom-property form.
///
/// `hue` is degrees in `[0, 360)`; saturation and lightness are integer
/// percents. Displays as `"<hue> <saturation>% <lightness>%"`, suitable for a
/// `hsl(var(--x))` binding.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl core::fmt::Display for Hsl {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}% {}%", self.hue, self.saturation, self.lightness)
    }
}

/// Parse a `#RRGGBB` (or bare `RRGGBB`) string into channel bytes.
pub fn parse_hex(hex: &str) -> Result<(u8, u8, u8), ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorError::MalformedHex(hex.to_string()));
    }
    let r = u8::from_str_radix(&digits[0..2], 16).map_err(|_| ColorError::MalformedHex(hex.to_string()))?;
    let g = u8::from_str_radix(&digits[2..4], 16).map_err(|_| ColorError::MalformedHex(hex.to_string()))?;
    let b = u8::from_str_radix(&digits[4..6], 16).map_err(|_| ColorError::MalformedHex(hex.to_string()))?;
    Ok((r, g, b))
}

/// Convert a hex color to its HSL triple.
///
/// Channels normalize to `[0, 1]`; lightness is the midpoint of the channel
/// extremes, saturation scales the channel delta against lightness, and hue
/// picks its sector from the dominant channel. Hue rounds to whole degrees
/// (wrapping 360 back to 0); saturation and lightness round to whole
/// percents.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl, ColorError> {
    let (r, g, b) = parse_hex(hex)?;
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    let (hue, saturation) = if max == min {
        // Achromatic: all channels equal.
        (0.0, 0.0)
    } else {
        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        let sector = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        (sector * 60.0, saturation)
    };

    Ok(Hsl {
        hue: (hue.round() as u16) % 360,
        saturation: (saturation * 100.0).round() as u8,
        lightness: (lightness * 100.0).round() as u8,
    })
}
