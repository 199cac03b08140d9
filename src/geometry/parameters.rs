//! Pattern kinds and their control parameters

use crate::color::{ColorMapper, ColorMode, Palette};
use crate::io::configuration::{DEFAULT_AMPLITUDE, DEFAULT_COMPLEXITY, DEFAULT_FREQUENCY};
use crate::io::error::{EngineError, Result, invalid_parameter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The nine geometry algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    /// Jittered concentric rings
    #[default]
    ConcentricCircles,
    /// Parallel near-diagonal lines
    DiagonalStripes,
    /// Background bars behind a grid of wireframe cubes
    CubeIllusion,
    /// Scan-lines bent around an elliptical eye with a pupil
    EyePattern,
    /// Nested squares shrinking towards the center
    SquareTunnel,
    /// Scan-lines displaced by two sine waves
    WaveDisplacement,
    /// Scan-lines swirled by a tangential field
    CircularDisplacement,
    /// Two line families at mismatched spacing and angle
    MoireInterference,
    /// Rays twisting with radius
    SpiralDistortion,
}

impl PatternKind {
    /// Every kind, in selector order
    pub const ALL: [Self; 9] = [
        Self::ConcentricCircles,
        Self::DiagonalStripes,
        Self::CubeIllusion,
        Self::EyePattern,
        Self::SquareTunnel,
        Self::WaveDisplacement,
        Self::CircularDisplacement,
        Self::MoireInterference,
        Self::SpiralDistortion,
    ];

    /// Stable selector name, also used in export filenames
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConcentricCircles => "concentric-circles",
            Self::DiagonalStripes => "diagonal-stripes",
            Self::CubeIllusion => "cube-illusion",
            Self::EyePattern => "eye-pattern",
            Self::SquareTunnel => "square-tunnel",
            Self::WaveDisplacement => "wave-displacement",
            Self::CircularDisplacement => "circular-displacement",
            Self::MoireInterference => "moire-interference",
            Self::SpiralDistortion => "spiral-distortion",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EngineError::UnknownPatternKind {
                name: s.to_string(),
            })
    }
}

/// Rotational symmetry applied to a builder's output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Symmetry {
    /// Single copy
    #[default]
    None,
    /// `n` copies evenly rotated about the canvas center
    Fold(u8),
}

impl Symmetry {
    /// Fold counts offered by the selector
    pub const FOLDS: [u8; 5] = [2, 4, 6, 8, 12];

    /// Number of copies produced
    pub const fn copies(self) -> usize {
        match self {
            Self::None => 1,
            Self::Fold(n) => n as usize,
        }
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Fold(n) => write!(f, "{n}"),
        }
    }
}

impl FromStr for Symmetry {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "none" {
            return Ok(Self::None);
        }
        s.parse::<u8>()
            .ok()
            .filter(|n| Self::FOLDS.contains(n))
            .map(Self::Fold)
            .ok_or_else(|| invalid_parameter("symmetry", &s, &"expected none, 2, 4, 6, 8 or 12"))
    }
}

/// Complete control state of one pattern
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternParameters {
    /// Which builder runs
    pub kind: PatternKind,
    /// Repetition count driver (rings, lines, rays); builders treat 0 as 1
    pub complexity: u32,
    /// Stroke width in physical units
    pub line_width: f64,
    /// Wave cycles
    pub frequency: u32,
    /// Displacement strength in physical units
    pub amplitude: f64,
    /// Group rotation in degrees
    pub rotation: f64,
    /// Element coloring strategy
    pub color_mode: ColorMode,
    /// Colors used by the custom color modes
    pub palette: Palette,
    /// Rotational symmetry of the final scene
    pub symmetry: Symmetry,
    /// Seed for every jitter; only its behavior under the noise function matters
    pub seed: f64,
}

impl Default for PatternParameters {
    fn default() -> Self {
        Self {
            kind: PatternKind::default(),
            complexity: DEFAULT_COMPLEXITY,
            line_width: auto_line_width(DEFAULT_COMPLEXITY),
            frequency: DEFAULT_FREQUENCY,
            amplitude: DEFAULT_AMPLITUDE,
            rotation: 0.0,
            color_mode: ColorMode::default(),
            palette: Palette::default(),
            symmetry: Symmetry::default(),
            seed: 0.0,
        }
    }
}

impl PatternParameters {
    /// Complexity clamped to at least one
    pub fn effective_complexity(&self) -> usize {
        self.complexity.max(1) as usize
    }

    /// Color mapper bound to this parameter set
    pub const fn color_mapper(&self) -> ColorMapper {
        ColorMapper::new(self.color_mode, self.seed, self.palette)
    }

    /// Check every numeric field is usable by the builders
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The line width is not a positive finite number
    /// - Amplitude, rotation or seed is not finite
    /// - A symmetry fold count is not one of the offered values
    pub fn validate(&self) -> Result<()> {
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(invalid_parameter(
                "line_width",
                &self.line_width,
                &"must be a positive number",
            ));
        }
        for (name, value) in [
            ("amplitude", self.amplitude),
            ("rotation", self.rotation),
            ("seed", self.seed),
        ] {
            if !value.is_finite() {
                return Err(invalid_parameter(name, &value, &"must be finite"));
            }
        }
        if let Symmetry::Fold(n) = self.symmetry {
            if !Symmetry::FOLDS.contains(&n) {
                return Err(invalid_parameter(
                    "symmetry",
                    &n,
                    &"expected 2, 4, 6, 8 or 12",
                ));
            }
        }
        Ok(())
    }
}

/// Line width that thins as complexity grows
///
/// Low complexity draws 3 to 2 units, medium 2 to 1, high 1 down to 0.5.
pub fn auto_line_width(complexity: u32) -> f64 {
    let c = f64::from(complexity);
    if c < 50.0 {
        3.0 - c / 50.0
    } else if c < 150.0 {
        2.0 - (c - 50.0) / 100.0
    } else {
        (1.0 - (c - 150.0) / 300.0).max(0.5)
    }
}
