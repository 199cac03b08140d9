/// Wireframe cubes over vertical background bars
pub mod cube;
/// Scan-lines swirled by a tangential radial field
pub mod circular;
/// Jittered concentric rings
pub mod concentric;
/// Scan-lines bent around an elliptical eye
pub mod eye;
/// Two mismatched families of horizontal lines
pub mod moire;
/// Twisting rays from the canvas center
pub mod spiral;
/// Near-diagonal parallel lines
pub mod stripes;
/// Nested squares receding towards the center
pub mod tunnel;
/// Scan-lines displaced by two sine waves
pub mod wave;

use crate::geometry::parameters::{PatternKind, PatternParameters};
use crate::geometry::primitive::Primitive;
use crate::scene::extent::CanvasExtent;

/// Run the builder selected by `params.kind`
///
/// Pure: equal parameters and extents always produce equal primitive
/// sequences. Complexity below one is treated as one, and the result is
/// never empty.
pub fn build_pattern(params: &PatternParameters, extent: &CanvasExtent) -> Vec<Primitive> {
    match params.kind {
        PatternKind::ConcentricCircles => concentric::build(params, extent),
        PatternKind::DiagonalStripes => stripes::build(params, extent),
        PatternKind::CubeIllusion => cube::build(params, extent),
        PatternKind::EyePattern => eye::build(params, extent),
        PatternKind::SquareTunnel => tunnel::build(params, extent),
        PatternKind::WaveDisplacement => wave::build(params, extent),
        PatternKind::CircularDisplacement => circular::build(params, extent),
        PatternKind::MoireInterference => moire::build(params, extent),
        PatternKind::SpiralDistortion => spiral::build(params, extent),
    }
}
