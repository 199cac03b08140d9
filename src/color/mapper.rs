//! Per-element color derivation
//!
//! Every builder colors its elements by index within a group, so a single
//! function maps (mode, index, group size, seed) to a concrete color.

use crate::color::model::{Color, Hsl, Rgb};
use crate::io::configuration::{ARTISTIC_PALETTES, GOLDEN_ANGLE_DEGREES};
use crate::io::error::{EngineError, invalid_parameter};
use crate::math::noise::noise;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How builders color their elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorMode {
    /// Constant black
    #[default]
    Black,
    /// The palette's custom color, unchanged
    Single,
    /// Hue ramp from red to violet across the group
    Gradient,
    /// Golden-angle hue steps, evenly spread for any group size
    Rainbow,
    /// Seed-dependent base hue shifted by ten degrees per element
    HueShift,
    /// RGB ramp between the palette's two gradient colors
    CustomGradient,
    /// Fixed art-historical palette picked by seed, cycled by index
    Artistic,
}

impl ColorMode {
    /// Every mode, in selector order
    pub const ALL: [Self; 7] = [
        Self::Black,
        Self::Single,
        Self::Gradient,
        Self::Rainbow,
        Self::HueShift,
        Self::CustomGradient,
        Self::Artistic,
    ];

    /// Stable selector name, also used in raster export filenames
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Single => "single",
            Self::Gradient => "gradient",
            Self::Rainbow => "rainbow",
            Self::HueShift => "hue-shift",
            Self::CustomGradient => "custom-gradient",
            Self::Artistic => "artistic",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| invalid_parameter("color-mode", &s, &"unknown color mode"))
    }
}

/// User-chosen colors consumed by the `Single` and `CustomGradient` modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Color for `ColorMode::Single`
    pub custom: Rgb,
    /// First gradient stop for `ColorMode::CustomGradient`
    pub gradient_start: Rgb,
    /// Last gradient stop for `ColorMode::CustomGradient`
    pub gradient_end: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            custom: Rgb::new(0xff, 0x00, 0x00),
            gradient_start: Rgb::new(0xff, 0x00, 0xff),
            gradient_end: Rgb::new(0x00, 0xff, 0xff),
        }
    }
}

// Position of `index` within a group; zero for single-element groups
const fn group_ratio(index: usize, total: usize) -> f64 {
    if total <= 1 {
        0.0
    } else {
        index as f64 / (total - 1) as f64
    }
}

/// Color of element `index` in a group of `total` elements
pub fn line_color(
    mode: ColorMode,
    index: usize,
    total: usize,
    seed: f64,
    palette: &Palette,
) -> Color {
    match mode {
        ColorMode::Black => Color::BLACK,
        ColorMode::Single => Color::Rgb(palette.custom),
        ColorMode::Gradient => Hsl::new(group_ratio(index, total) * 270.0, 70.0, 50.0).into(),
        ColorMode::Rainbow => Hsl::new(index as f64 * GOLDEN_ANGLE_DEGREES, 80.0, 50.0).into(),
        ColorMode::HueShift => {
            let base = (seed * 360.0).rem_euclid(360.0);
            Hsl::new(base + index as f64 * 10.0, 75.0, 55.0).into()
        }
        ColorMode::CustomGradient => palette
            .gradient_start
            .lerp(palette.gradient_end, group_ratio(index, total))
            .into(),
        ColorMode::Artistic => artistic_color(index, seed),
    }
}

/// Palette the artistic mode uses for `seed`
pub fn artistic_palette(seed: f64) -> &'static [Rgb] {
    let choice = (noise(seed) * ARTISTIC_PALETTES.len() as f64) as usize;
    ARTISTIC_PALETTES.get(choice).copied().unwrap_or_default()
}

fn artistic_color(index: usize, seed: f64) -> Color {
    let colors = artistic_palette(seed);
    colors
        .get(index.checked_rem(colors.len()).unwrap_or_default())
        .map_or(Color::BLACK, |&rgb| Color::Rgb(rgb))
}

/// Color source bound to one parameter set
#[derive(Debug, Clone, Copy)]
pub struct ColorMapper {
    mode: ColorMode,
    seed: f64,
    palette: Palette,
}

impl ColorMapper {
    /// Bind a mode, seed and palette
    pub const fn new(mode: ColorMode, seed: f64, palette: Palette) -> Self {
        Self {
            mode,
            seed,
            palette,
        }
    }

    /// Color of element `index` in a group of `total`
    pub fn color(&self, index: usize, total: usize) -> Color {
        line_color(self.mode, index, total, self.seed, &self.palette)
    }
}
