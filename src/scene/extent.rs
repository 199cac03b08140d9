//! Canvas sizing from aspect-ratio selectors
//!
//! Geometry lives in physical units (millimetres for laser and print work);
//! the pixel size is derived with a fixed display scale.

use crate::io::configuration::PIXELS_PER_UNIT;
use crate::io::error::{EngineError, Result, invalid_parameter};
use crate::math::transform::Point;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canvas shape selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 1:1
    #[default]
    Square,
    /// 16:9
    Widescreen,
    /// 9:16
    Portrait,
    /// 3:4
    ThreeFour,
    /// 4:3
    FourThree,
    /// 2:3
    TwoThree,
    /// 3:2
    ThreeTwo,
    /// Square of the base size
    Custom,
}

impl AspectRatio {
    /// Every selector, in menu order
    pub const ALL: [Self; 8] = [
        Self::Square,
        Self::Widescreen,
        Self::Portrait,
        Self::ThreeFour,
        Self::FourThree,
        Self::TwoThree,
        Self::ThreeTwo,
        Self::Custom,
    ];

    /// Width and height components, `None` for custom
    pub const fn components(self) -> Option<(f64, f64)> {
        match self {
            Self::Square => Some((1.0, 1.0)),
            Self::Widescreen => Some((16.0, 9.0)),
            Self::Portrait => Some((9.0, 16.0)),
            Self::ThreeFour => Some((3.0, 4.0)),
            Self::FourThree => Some((4.0, 3.0)),
            Self::TwoThree => Some((2.0, 3.0)),
            Self::ThreeTwo => Some((3.0, 2.0)),
            Self::Custom => None,
        }
    }

    /// Selector label
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Widescreen => "16:9",
            Self::Portrait => "9:16",
            Self::ThreeFour => "3:4",
            Self::FourThree => "4:3",
            Self::TwoThree => "2:3",
            Self::ThreeTwo => "3:2",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|ratio| ratio.as_str() == s)
            .ok_or_else(|| invalid_parameter("ratio", &s, &"unknown aspect ratio"))
    }
}

/// Physical and pixel size of the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasExtent {
    /// Width in physical units
    pub width: f64,
    /// Height in physical units
    pub height: f64,
    /// Display width in pixels
    pub pixel_width: u32,
    /// Display height in pixels
    pub pixel_height: u32,
}

impl CanvasExtent {
    /// Extent from explicit physical dimensions
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either side is non-positive or non-finite
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if !(width.is_finite() && height.is_finite()) {
            return Err(EngineError::InvalidDimensions {
                width,
                height,
                reason: "dimensions must be finite".to_string(),
            });
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(EngineError::InvalidDimensions {
                width,
                height,
                reason: "dimensions must be positive".to_string(),
            });
        }

        Ok(Self {
            width,
            height,
            pixel_width: to_pixels(width),
            pixel_height: to_pixels(height),
        })
    }

    /// Extent for an aspect ratio whose larger component maps to `base_size`
    ///
    /// Both physical sides round to the nearest whole unit.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if the base size, or a rounded side, is not positive
    pub fn from_ratio(ratio: AspectRatio, base_size: f64) -> Result<Self> {
        if !(base_size.is_finite() && base_size > 0.0) {
            return Err(EngineError::InvalidDimensions {
                width: base_size,
                height: base_size,
                reason: "base size must be a positive number".to_string(),
            });
        }

        let (width, height) = match ratio.components() {
            None => (base_size, base_size),
            Some((ratio_w, ratio_h)) => {
                let scale = base_size / ratio_w.max(ratio_h);
                ((ratio_w * scale).round(), (ratio_h * scale).round())
            }
        };
        Self::new(width, height)
    }

    /// Canvas center
    pub const fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Shorter side
    pub const fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Longer side
    pub const fn max_side(&self) -> f64 {
        self.width.max(self.height)
    }

    /// Distance from the center to a corner
    pub fn half_diagonal(&self) -> f64 {
        (self.width / 2.0).hypot(self.height / 2.0)
    }
}

fn to_pixels(physical: f64) -> u32 {
    (physical * PIXELS_PER_UNIT).round() as u32
}

/// The selector inputs an extent was derived from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSelection {
    /// Aspect ratio selector
    pub ratio: AspectRatio,
    /// Size of the larger side in physical units
    pub base_size: f64,
}

impl Default for CanvasSelection {
    fn default() -> Self {
        Self {
            ratio: AspectRatio::default(),
            base_size: crate::io::configuration::DEFAULT_BASE_SIZE,
        }
    }
}

impl CanvasSelection {
    /// Derive the extent for this selection
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if the base size is not positive
    pub fn extent(&self) -> Result<CanvasExtent> {
        CanvasExtent::from_ratio(self.ratio, self.base_size)
    }
}
