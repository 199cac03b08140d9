//! Pattern parameters, vector primitives and the pattern builders

/// One geometry builder per pattern kind
pub mod builders;
/// Pattern kinds and their control parameters
pub mod parameters;
/// Immutable vector primitives
pub mod primitive;
/// Scan-line and polyline sampling helpers shared by builders
pub mod sampling;

pub use builders::build_pattern;
pub use parameters::{PatternKind, PatternParameters, Symmetry};
pub use primitive::{Primitive, Rotation, Shape};
