use crate::color::Color;
use crate::geometry::parameters::PatternParameters;
use crate::geometry::primitive::{Primitive, Shape};
use crate::geometry::sampling::{displaced_scan_line, scan_line_ys, stepped_xs};
use crate::io::configuration::{EYE_FIELD_STRENGTH, EYE_SAMPLE_STEP};
use crate::math::transform::Point;
use crate::scene::extent::CanvasExtent;
use std::f64::consts::PI;

/// Horizontal semi-axis of the eye as a fraction of canvas width
const EYE_WIDTH_FRACTION: f64 = 0.4;
/// Vertical semi-axis of the eye as a fraction of canvas height
const EYE_HEIGHT_FRACTION: f64 = 0.2;
/// Pupil radius as a fraction of the shorter canvas side
pub const PUPIL_FRACTION: f64 = 0.05;
const RIPPLE_X_RATE: f64 = 0.02;
const RIPPLE_SEED_RATE: f64 = 3.0;
const RIPPLE_WEIGHT: f64 = 0.3;

/// Elliptical displacement field centered on the canvas
#[derive(Debug, Clone, Copy)]
struct EyeField {
    center: Point,
    semi_x: f64,
    semi_y: f64,
    seed: f64,
}

impl EyeField {
    /// Vertical offset of a scan-line point
    fn displacement(&self, point: Point) -> f64 {
        let nx = (point.x - self.center.x) / self.semi_x;
        let ny = (point.y - self.center.y) / self.semi_y;
        let strength = (-2.0 * nx.hypot(ny)).exp() * EYE_FIELD_STRENGTH;

        let lid = strength * (nx * PI).sin() * (1.0 - ny.abs());
        let ripple = point
            .x
            .mul_add(RIPPLE_X_RATE, self.seed * RIPPLE_SEED_RATE)
            .sin()
            * strength
            * RIPPLE_WEIGHT;
        lid + ripple
    }
}

/// `complexity` scan-lines bent by the eye field, then a filled pupil
pub fn build(params: &PatternParameters, extent: &CanvasExtent) -> Vec<Primitive> {
    let count = params.effective_complexity();
    let center = extent.center();
    let field = EyeField {
        center,
        semi_x: EYE_WIDTH_FRACTION * extent.width,
        semi_y: EYE_HEIGHT_FRACTION * extent.height,
        seed: params.seed,
    };
    let colors = params.color_mapper();

    let mut primitives: Vec<Primitive> = scan_line_ys(extent.height, count)
        .enumerate()
        .map(|(i, y)| {
            let points = displaced_scan_line(stepped_xs(extent.width, EYE_SAMPLE_STEP), y, |p| {
                p.offset(0.0, field.displacement(p))
            });
            Primitive::stroked(
                Shape::polyline(points),
                colors.color(i, count),
                params.line_width,
            )
        })
        .collect();

    let pupil = Shape::Circle {
        cx: center.x,
        cy: center.y,
        r: PUPIL_FRACTION * extent.min_side(),
    };
    primitives.push(Primitive::filled(pupil, Color::BLACK));
    primitives
}
