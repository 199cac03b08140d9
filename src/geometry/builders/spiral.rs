use crate::geometry::parameters::PatternParameters;
use crate::geometry::primitive::{Primitive, Shape};
use crate::io::configuration::SPIRAL_SEGMENTS;
use crate::math::noise::noise;
use crate::math::transform::polar_offset;
use crate::scene::extent::CanvasExtent;

/// Ray length as a fraction of the shorter canvas side
pub const RAY_LENGTH_FRACTION: f64 = 0.4;
const RIPPLE_RATE: f64 = 0.1;
const RIPPLE_GAIN: f64 = 0.05;

/// `2 * complexity` rays whose angle grows with radius
///
/// Each ray twists through `1 + 2 * noise(seed + i)` half-turns between
/// the center and its tip, and its radius ripples with
/// `sin(r * frequency * 0.1 + seed) * amplitude * 0.05`.
pub fn build(params: &PatternParameters, extent: &CanvasExtent) -> Vec<Primitive> {
    let rays = params.effective_complexity() * 2;
    let center = extent.center();
    let length = RAY_LENGTH_FRACTION * extent.min_side();
    let frequency = f64::from(params.frequency);
    let colors = params.color_mapper();

    (0..rays)
        .map(|i| {
            let base = 360.0 * i as f64 / rays as f64;
            let twist = noise(params.seed + i as f64).mul_add(2.0, 1.0) * 180.0;

            let points = (0..=SPIRAL_SEGMENTS)
                .map(|j| {
                    let fraction = j as f64 / SPIRAL_SEGMENTS as f64;
                    let r = length * fraction;
                    let ripple = (r * frequency).mul_add(RIPPLE_RATE, params.seed).sin()
                        * params.amplitude
                        * RIPPLE_GAIN;
                    polar_offset(center, twist.mul_add(fraction, base), r + ripple)
                })
                .collect();

            Primitive::stroked(
                Shape::polyline(points),
                colors.color(i, rays),
                params.line_width,
            )
            .with_rotation(params.rotation, center)
        })
        .collect()
}
