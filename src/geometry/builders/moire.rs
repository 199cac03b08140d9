use crate::geometry::parameters::PatternParameters;
use crate::geometry::primitive::{Primitive, Shape};
use crate::math::noise::{centered_noise, noise};
use crate::math::transform::Point;
use crate::scene::extent::CanvasExtent;

/// Largest extra line count of the second family
const EXTRA_LINES: f64 = 5.0;
/// Largest tilt of the second family in degrees, either way
pub const MAX_TILT: f64 = 5.0;
/// Stroke width of the second family relative to the first
pub const SECOND_FAMILY_WIDTH: f64 = 0.7;

/// Two families of horizontal lines at slightly different spacings
///
/// The first family is spaced `height / complexity`. The second is spaced
/// `height / (complexity + noise(seed) * 5)`, tilted by a seed-derived angle
/// and drawn thinner; it overhangs the canvas so the tilt leaves no gaps.
pub fn build(params: &PatternParameters, extent: &CanvasExtent) -> Vec<Primitive> {
    let count = params.effective_complexity();
    let center = extent.center();
    let colors = params.color_mapper();

    let spacing = extent.height / count as f64;
    let mut primitives: Vec<Primitive> = (0..count)
        .map(|i| {
            let y = i as f64 * spacing;
            let line = Shape::line(Point::new(0.0, y), Point::new(extent.width, y));
            Primitive::stroked(line, colors.color(i, count), params.line_width)
                .with_rotation(params.rotation, center)
        })
        .collect();

    let denser = noise(params.seed).mul_add(EXTRA_LINES, count as f64);
    let dense_spacing = extent.height / denser;
    let dense_count = denser.ceil() as usize;
    let tilt = centered_noise(params.seed + 1.0) * 2.0 * MAX_TILT;
    let overhang = extent.width / 2.0;

    primitives.extend((0..dense_count).map(|i| {
        let y = i as f64 * dense_spacing;
        let line = Shape::line(
            Point::new(-overhang, y),
            Point::new(extent.width + overhang, y),
        );
        Primitive::stroked(
            line,
            colors.color(i, dense_count),
            params.line_width * SECOND_FAMILY_WIDTH,
        )
        .with_rotation(tilt + params.rotation, center)
    }));

    primitives
}
