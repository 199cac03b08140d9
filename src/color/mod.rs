//! Color representation and per-element color derivation

/// Per-element color derivation from a color mode
pub mod mapper;
/// RGB and HSL color values
pub mod model;

pub use mapper::{ColorMapper, ColorMode, Palette, artistic_palette, line_color};
pub use model::{Color, Hsl, Rgb};
