use crate::geometry::parameters::PatternParameters;
use crate::geometry::primitive::{Primitive, Shape};
use crate::geometry::sampling::{displaced_scan_line, sample_xs, scan_line_ys};
use crate::io::configuration::CIRCULAR_SEGMENTS;
use crate::math::transform::Point;
use crate::scene::extent::CanvasExtent;

/// Field radius as a fraction of the shorter canvas side
pub const FIELD_RADIUS_FRACTION: f64 = 0.3;
const RING_RATE: f64 = 0.1;
const SEED_RATE: f64 = 10.0;

/// Scan-lines whose points slide along circles around the canvas center
///
/// The tangential offset is `amplitude * exp(-dist / field_radius) *
/// sin(dist * 0.1 + seed * 10)`; the center point itself stays put.
pub fn build(params: &PatternParameters, extent: &CanvasExtent) -> Vec<Primitive> {
    let count = params.effective_complexity();
    let center = extent.center();
    let field_radius = FIELD_RADIUS_FRACTION * extent.min_side();
    let colors = params.color_mapper();

    let swirl = |p: Point| {
        let dx = p.x - center.x;
        let dy = p.y - center.y;
        let dist = dx.hypot(dy);
        if dist < f64::EPSILON {
            return p;
        }
        let strength = params.amplitude
            * (-dist / field_radius).exp()
            * dist.mul_add(RING_RATE, params.seed * SEED_RATE).sin();
        p.offset(-dy / dist * strength, dx / dist * strength)
    };

    scan_line_ys(extent.height, count)
        .enumerate()
        .map(|(i, y)| {
            let xs = sample_xs(extent.width, CIRCULAR_SEGMENTS);
            let points = displaced_scan_line(xs, y, &swirl);
            Primitive::stroked(
                Shape::polyline(points),
                colors.color(i, count),
                params.line_width,
            )
            .with_rotation(params.rotation, center)
        })
        .collect()
}
