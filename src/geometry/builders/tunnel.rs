use crate::geometry::parameters::PatternParameters;
use crate::geometry::primitive::{Primitive, Shape};
use crate::math::noise::centered_noise;
use crate::scene::extent::CanvasExtent;

/// Outermost square side as a fraction of the shorter canvas side
pub const OUTER_FRACTION: f64 = 0.9;
/// Largest per-square tilt in degrees, either way
pub const MAX_TILT: f64 = 5.0;
const SQUARE_SEED_STEP: f64 = 0.5;

/// `complexity` centered squares shrinking linearly, each slightly tilted
pub fn build(params: &PatternParameters, extent: &CanvasExtent) -> Vec<Primitive> {
    let count = params.effective_complexity();
    let center = extent.center();
    let outer = OUTER_FRACTION * extent.min_side();
    let colors = params.color_mapper();

    (0..count)
        .map(|i| {
            let scale = 1.0 - i as f64 / count as f64;
            let key = (i as f64).mul_add(SQUARE_SEED_STEP, params.seed);
            let tilt = centered_noise(key) * 2.0 * MAX_TILT;
            Primitive::stroked(
                Shape::centered_square(center, outer * scale),
                colors.color(i, count),
                params.line_width,
            )
            .with_rotation(tilt + params.rotation, center)
        })
        .collect()
}
