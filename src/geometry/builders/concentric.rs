use crate::geometry::parameters::PatternParameters;
use crate::geometry::primitive::{Primitive, Shape};
use crate::math::noise::centered_noise;
use crate::scene::extent::CanvasExtent;

/// Outermost ring radius as a fraction of the shorter canvas side
pub const MAX_RADIUS_FRACTION: f64 = 0.45;
/// Seed step between consecutive rings
const RING_SEED_STEP: f64 = 0.1;
/// Seed offset separating the vertical jitter from the horizontal one
const VERTICAL_SEED_OFFSET: f64 = 0.05;

/// `complexity` rings of evenly growing radius, each with a jittered center
///
/// Jitter on each axis is at most a quarter of the amplitude. A non-zero
/// rotation is applied to every ring about the canvas center.
pub fn build(params: &PatternParameters, extent: &CanvasExtent) -> Vec<Primitive> {
    let count = params.effective_complexity();
    let center = extent.center();
    let radius_step = MAX_RADIUS_FRACTION * extent.min_side() / count as f64;
    let jitter = params.amplitude / 2.0;
    let colors = params.color_mapper();

    (0..count)
        .map(|i| {
            let key = (i as f64).mul_add(RING_SEED_STEP, params.seed);
            let ring = Shape::Circle {
                cx: centered_noise(key).mul_add(jitter, center.x),
                cy: centered_noise(key + VERTICAL_SEED_OFFSET).mul_add(jitter, center.y),
                r: radius_step * (i as f64 + 1.0),
            };
            Primitive::stroked(ring, colors.color(i, count), params.line_width)
                .with_rotation(params.rotation, center)
        })
        .collect()
}
