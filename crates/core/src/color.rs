//! Color types and conversion functions for the itten core.
//!
//! Provides the 8-bit `Rgb` triple used by catalog entries and the `Hsv`
//! triple used by shade generation and color descriptions. Conversions are
//! pure functions.

use crate::error::WheelError;
use serde::{Deserialize, Serialize};

/// 8-bit sRGB color.
///
/// Serializes as a `[r, g, b]` array. Hex strings are handled explicitly with
/// [`Rgb::from_hex`] and [`Rgb::to_hex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[u8; 3]", into = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// HSV color: hue in degrees [0, 360), saturation and value in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string like "#FF00AA" or "ff00aa" (case insensitive).
    ///
    /// Returns `WheelError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Rgb, WheelError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(WheelError::InvalidColor(format!(
                "expected 6 hex digits in '{hex}'"
            )));
        }
        let channel = |range: std::ops::Range<usize>, label: &str| {
            u8::from_str_radix(&digits[range], 16).map_err(|e| {
                WheelError::InvalidColor(format!("invalid {label} component in '{hex}': {e}"))
            })
        };
        Ok(Rgb {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }

    /// Formats the color as `"#RRGGBB"` (uppercase).
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Perceived brightness in [0, 255] using the 299/587/114 luma weights.
    pub fn brightness(self) -> f64 {
        (self.r as f64 * 299.0 + self.g as f64 * 587.0 + self.b as f64 * 114.0) / 1000.0
    }

    /// Black or white, whichever reads better on top of this color.
    pub fn text_color(self) -> Rgb {
        if self.brightness() > 128.0 {
            Rgb::BLACK
        } else {
            Rgb::WHITE
        }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Rgb { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// Quantizes a [0, 1] channel to a byte, rounding to nearest.
fn channel_to_byte(c: f64) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Converts an 8-bit color to HSV.
///
/// Achromatic colors (r == g == b) get hue 0.
pub fn rgb_to_hsv(c: Rgb) -> Hsv {
    let max = c.r.max(c.g).max(c.b);
    let min = c.r.min(c.g).min(c.b);
    let delta = (max - min) as f64;
    let (r, g, b) = (c.r as f64, c.g as f64, c.b as f64);

    let h = if max == min {
        0.0
    } else if max == c.r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == c.g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0 { 0.0 } else { delta / max as f64 };

    Hsv {
        h: h.rem_euclid(360.0),
        s,
        v: max as f64 / 255.0,
    }
}

/// Converts HSV to an 8-bit color. Hue wraps modulo 360; `s` and `v` are clamped.
pub fn hsv_to_rgb(c: Hsv) -> Rgb {
    let s = c.s.clamp(0.0, 1.0);
    let v = c.v.clamp(0.0, 1.0);
    let sector = c.h.rem_euclid(360.0) / 60.0;
    let i = sector.floor();
    let f = sector - i;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match i as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Rgb {
        r: channel_to_byte(r),
        g: channel_to_byte(g),
        b: channel_to_byte(b),
    }
}
