use crate::geometry::parameters::PatternParameters;
use crate::geometry::primitive::{Primitive, Shape};
use crate::math::noise::centered_noise;
use crate::math::transform::{Point, polar_offset};
use crate::scene::extent::CanvasExtent;

const NOMINAL_ANGLE: f64 = 45.0;
const ANGLE_JITTER: f64 = 10.0;
const LINE_SEED_STEP: f64 = 0.1;
const ANGLE_SEED_OFFSET: f64 = 0.5;

/// Parallel lines near 45 degrees swept across three canvas lengths
///
/// Anchors step by `max_side / complexity` over `[-max_side, 2 * max_side)`
/// along the top edge. Each line is shifted by at most a quarter spacing and
/// tilted by at most ten degrees; the whole set turns about the center.
pub fn build(params: &PatternParameters, extent: &CanvasExtent) -> Vec<Primitive> {
    let complexity = params.effective_complexity();
    let max_side = extent.max_side();
    let spacing = max_side / complexity as f64;
    let count = complexity * 3;
    let center = extent.center();
    let colors = params.color_mapper();

    (0..count)
        .map(|i| {
            let key = (i as f64).mul_add(LINE_SEED_STEP, params.seed);
            let offset = centered_noise(key) * spacing / 2.0;
            let angle = centered_noise(key + ANGLE_SEED_OFFSET)
                .mul_add(2.0 * ANGLE_JITTER, NOMINAL_ANGLE);
            let anchor = Point::new((i as f64).mul_add(spacing, -max_side) + offset, 0.0);

            let start = polar_offset(anchor, angle + 180.0, max_side);
            let end = polar_offset(anchor, angle, 2.0 * max_side);
            Primitive::stroked(Shape::line(start, end), colors.color(i, count), params.line_width)
                .with_rotation(params.rotation, center)
        })
        .collect()
}
