use crate::geometry::parameters::PatternParameters;
use crate::geometry::primitive::{Primitive, Shape};
use crate::math::noise::centered_noise;
use crate::math::transform::Point;
use crate::scene::extent::CanvasExtent;

/// Glyph rows and columns
pub const GRID_SIZE: usize = 3;
/// Glyph edge length as a fraction of the smaller cell side
const GLYPH_FRACTION: f64 = 0.4;
/// Largest horizontal jitter as a fraction of the glyph size
const JITTER_FRACTION: f64 = 0.3;

/// Vertical bars behind a 3x3 grid of wireframe cubes
///
/// Bars sit every `width / (2 * complexity)` units including both edges.
/// Each glyph is a front square, a back square shifted a third of its size
/// up and right, and the four edges joining their corners.
pub fn build(params: &PatternParameters, extent: &CanvasExtent) -> Vec<Primitive> {
    let bar_count = params.effective_complexity() * 2;
    let bar_spacing = extent.width / bar_count as f64;
    let colors = params.color_mapper();

    let mut primitives: Vec<Primitive> = (0..=bar_count)
        .map(|i| {
            let x = i as f64 * bar_spacing;
            let bar = Shape::line(Point::new(x, 0.0), Point::new(x, extent.height));
            Primitive::stroked(bar, colors.color(i, bar_count + 1), params.line_width)
        })
        .collect();

    let cell_width = extent.width / GRID_SIZE as f64;
    let cell_height = extent.height / GRID_SIZE as f64;
    let size = GLYPH_FRACTION * cell_width.min(cell_height);

    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let jitter =
                centered_noise(params.seed + (row + col) as f64) * 2.0 * JITTER_FRACTION * size;
            let center = Point::new(
                (col as f64 + 0.5).mul_add(cell_width, jitter),
                (row as f64 + 0.5) * cell_height,
            );
            let glyph = row * GRID_SIZE + col;
            let color = colors.color(glyph, GRID_SIZE * GRID_SIZE);
            primitives.extend(
                cube_glyph(center, size)
                    .into_iter()
                    .map(|shape| Primitive::stroked(shape, color, params.line_width)),
            );
        }
    }

    primitives
}

/// Front square, back square and the four connecting edges of one cube
fn cube_glyph(center: Point, size: f64) -> Vec<Shape> {
    let depth = size / 3.0;
    let back_center = center.offset(depth, -depth);
    let half = size / 2.0;
    let corners = [(-half, -half), (half, -half), (half, half), (-half, half)];

    let mut shapes = vec![
        Shape::centered_square(center, size),
        Shape::centered_square(back_center, size),
    ];
    shapes.extend(
        corners
            .iter()
            .map(|&(dx, dy)| Shape::line(center.offset(dx, dy), back_center.offset(dx, dy))),
    );
    shapes
}
