use crate::geometry::parameters::PatternParameters;
use crate::geometry::primitive::{Primitive, Shape};
use crate::geometry::sampling::{displaced_scan_line, sample_xs, scan_line_ys};
use crate::io::configuration::WAVE_SEGMENTS;
use crate::scene::extent::CanvasExtent;
use std::f64::consts::TAU;

const AMPLITUDE_DIVISOR: f64 = 20.0;
const DECAY_RATE: f64 = 3.0;

/// Scan-lines displaced vertically by a horizontal and a radial sine wave
///
/// Both waves complete `frequency` cycles, across the width and from the
/// center to a corner respectively. Their sum fades as
/// `exp(-3 * dist / max_dist)` and is scaled by `amplitude / 20`.
pub fn build(params: &PatternParameters, extent: &CanvasExtent) -> Vec<Primitive> {
    let count = params.effective_complexity();
    let center = extent.center();
    let max_dist = extent.half_diagonal();
    let frequency = f64::from(params.frequency);
    let along_rate = TAU * frequency / extent.width;
    let radial_rate = TAU * frequency / max_dist;
    let gain = params.amplitude / AMPLITUDE_DIVISOR;
    let colors = params.color_mapper();

    scan_line_ys(extent.height, count)
        .enumerate()
        .map(|(i, y)| {
            let points = displaced_scan_line(sample_xs(extent.width, WAVE_SEGMENTS), y, |p| {
                let dist = p.distance_to(center);
                let along = along_rate.mul_add(p.x, params.seed * 5.0).sin();
                let radial = radial_rate.mul_add(dist, params.seed * 10.0).sin();
                let decay = (-DECAY_RATE * dist / max_dist).exp();
                p.offset(0.0, (along + radial) * decay * gain)
            });
            Primitive::stroked(
                Shape::polyline(points),
                colors.color(i, count),
                params.line_width,
            )
            .with_rotation(params.rotation, center)
        })
        .collect()
}
