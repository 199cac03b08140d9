//! RGB and HSL color values with SVG paint formatting

use crate::io::error::{EngineError, invalid_parameter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 8-bit sRGB triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Pure black
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation towards `other`, channels rounded to nearest
    #[must_use]
    pub fn lerp(self, other: Self, ratio: f64) -> Self {
        let mix = |from: u8, to: u8| {
            let value = (f64::from(to) - f64::from(from)).mul_add(ratio, f64::from(from));
            value.round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }

    /// Channels as an array
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = EngineError;

    /// Parse `#rrggbb` (the leading `#` is optional, hex digits are case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid_parameter("color", &s, &"expected #rrggbb"));
        }

        let channel = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                .ok_or_else(|| invalid_parameter("color", &s, &"expected #rrggbb"))
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

/// Hue/saturation/lightness color, hue in degrees and the rest in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    /// Hue in degrees, `[0, 360)`
    pub hue: f64,
    /// Saturation in percent
    pub saturation: f64,
    /// Lightness in percent
    pub lightness: f64,
}

impl Hsl {
    /// Create an HSL color, wrapping the hue into `[0, 360)`
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation,
            lightness,
        }
    }

    /// Convert to sRGB
    pub fn to_rgb(self) -> Rgb {
        let h = self.hue / 360.0;
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let l = (self.lightness / 100.0).clamp(0.0, 1.0);

        if s.abs() < f64::EPSILON {
            let gray = to_channel(l);
            return Rgb::new(gray, gray, gray);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0f64.mul_add(l, -q);

        Rgb::new(
            to_channel(hue_to_channel(p, q, h + 1.0 / 3.0)),
            to_channel(hue_to_channel(p, q, h)),
            to_channel(hue_to_channel(p, q, h - 1.0 / 3.0)),
        )
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        ((q - p) * 6.0).mul_add(t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        ((q - p) * (2.0 / 3.0 - t)).mul_add(6.0, p)
    } else {
        p
    }
}

fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

/// A stroke or fill color as produced by the color mapper
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "space", rename_all = "lowercase")]
pub enum Color {
    /// Explicit sRGB color
    Rgb(Rgb),
    /// HSL color, kept in HSL so hues remain inspectable
    Hsl(Hsl),
}

impl Color {
    /// Black in RGB space
    pub const BLACK: Self = Self::Rgb(Rgb::BLACK);

    /// Resolve to sRGB
    pub fn to_rgb(self) -> Rgb {
        match self {
            Self::Rgb(rgb) => rgb,
            Self::Hsl(hsl) => hsl.to_rgb(),
        }
    }

    /// Hue in degrees when the color was produced in HSL space
    pub const fn hue(self) -> Option<f64> {
        match self {
            Self::Rgb(_) => None,
            Self::Hsl(hsl) => Some(hsl.hue),
        }
    }

    /// SVG paint value (`#rrggbb` or `hsl(h, s%, l%)`)
    pub fn svg_paint(self) -> String {
        match self {
            Self::Rgb(rgb) => rgb.to_string(),
            Self::Hsl(hsl) => format!(
                "hsl({}, {}%, {}%)",
                trim_float(hsl.hue),
                trim_float(hsl.saturation),
                trim_float(hsl.lightness)
            ),
        }
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Self::Rgb(rgb)
    }
}

impl From<Hsl> for Color {
    fn from(hsl: Hsl) -> Self {
        Self::Hsl(hsl)
    }
}

/// Shortest decimal form with at most four places
pub(crate) fn trim_float(value: f64) -> String {
    let rounded = format!("{value:.4}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
