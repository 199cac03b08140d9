//! Scan-line and polyline sampling helpers shared by builders

use crate::math::transform::Point;

/// Vertical positions of `count` evenly spaced horizontal scan-lines
///
/// Lines sit at the middle of equal bands so none touch the canvas edge.
pub fn scan_line_ys(height: f64, count: usize) -> impl Iterator<Item = f64> {
    let spacing = height / count.max(1) as f64;
    (0..count).map(move |i| (i as f64 + 0.5) * spacing)
}

/// `segments + 1` evenly spaced horizontal sample positions across `[0, width]`
pub fn sample_xs(width: f64, segments: usize) -> impl Iterator<Item = f64> {
    let segments = segments.max(1);
    (0..=segments).map(move |j| width * j as f64 / segments as f64)
}

/// Horizontal sample positions stepping by `step` across `[0, width]`, inclusive
pub fn stepped_xs(width: f64, step: f64) -> impl Iterator<Item = f64> {
    let count = (width / step).floor() as usize;
    (0..=count).map(move |j| j as f64 * step)
}

/// Sample a scan-line at height `y` through a displacement function
///
/// `displace` maps an undisplaced point to its displaced position.
pub fn displaced_scan_line(
    xs: impl Iterator<Item = f64>,
    y: f64,
    mut displace: impl FnMut(Point) -> Point,
) -> Vec<Point> {
    xs.map(|x| displace(Point::new(x, y))).collect()
}
