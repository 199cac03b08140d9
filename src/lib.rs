//! Deterministic procedural optical-art line patterns
//!
//! Nine geometry builders turn a parameter set and a seed into an ordered list
//! of vector primitives. The scene engine assembles and swaps those lists; the
//! exporters write them out as SVG documents or PNG/JPEG images.

#![forbid(unsafe_code)]

/// Color model and per-element color mapping
pub mod color;
/// Pattern parameters, vector primitives and the pattern builders
pub mod geometry;
/// Input/output operations, configuration and error handling
pub mod io;
/// Seeded noise and planar transform helpers
pub mod math;
/// Canvas sizing, symmetry, variation policies and the generation engine
pub mod scene;

pub use io::error::{EngineError, Result};
