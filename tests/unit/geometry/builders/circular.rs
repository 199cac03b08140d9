//! Tests for the circular displacement builder

#[cfg(test)]
mod tests {
    use op_art::geometry::builders::circular::build;
    use op_art::geometry::sampling::{sample_xs, scan_line_ys};
    use op_art::geometry::{PatternKind, PatternParameters, Shape};
    use op_art::io::configuration::CIRCULAR_SEGMENTS;
    use op_art::math::transform::Point;
    use op_art::scene::CanvasExtent;

    fn fixture() -> (PatternParameters, CanvasExtent) {
        let params = PatternParameters {
            kind: PatternKind::CircularDisplacement,
            complexity: 15,
            amplitude: 30.0,
            seed: 0.61,
            ..PatternParameters::default()
        };
        let extent = CanvasExtent::new(150.0, 150.0).expect("valid extent");
        (params, extent)
    }

    fn paths(params: &PatternParameters, extent: &CanvasExtent) -> Vec<Vec<Point>> {
        build(params, extent)
            .into_iter()
            .map(|p| match p.shape {
                Shape::Path { points, .. } => points,
                other => unreachable!("Expected path, got {other:?}"),
            })
            .collect()
    }

    // Tests one path per complexity step at the circular resolution
    // Verified by sharing the wave resolution
    #[test]
    fn test_path_count_and_resolution() {
        let (params, extent) = fixture();
        let lines = paths(&params, &extent);
        assert_eq!(lines.len(), 15);
        assert!(lines.iter().all(|l| l.len() == CIRCULAR_SEGMENTS + 1));
    }

    // Tests points move along the tangent of their circle around the center
    // Verified by displacing along the radius instead
    #[test]
    fn test_displacement_is_tangential() {
        let (params, extent) = fixture();
        let center = extent.center();
        let ys: Vec<f64> = scan_line_ys(extent.height, 15).collect();

        for (line, y) in paths(&params, &extent).iter().zip(ys) {
            for (moved, x) in line.iter().zip(sample_xs(extent.width, CIRCULAR_SEGMENTS)) {
                let radial = (x - center.x, y - center.y);
                let shift = (moved.x - x, moved.y - y);
                let dot = shift.0.mul_add(radial.0, shift.1 * radial.1);
                assert!(dot.abs() < 1e-6, "non-tangential shift at ({x}, {y})");
                assert!(shift.0.hypot(shift.1) <= params.amplitude + 1e-9);
            }
        }
    }

    // Tests zero amplitude leaves every scan-line straight
    // Verified by adding a constant swirl term
    #[test]
    fn test_zero_amplitude_is_flat() {
        let (mut params, extent) = fixture();
        params.amplitude = 0.0;
        for (line, y) in paths(&params, &extent)
            .iter()
            .zip(scan_line_ys(extent.height, 15))
        {
            assert!(line.iter().all(|p| (p.y - y).abs() < 1e-12));
        }
    }

    // Tests identical inputs produce identical swirls
    // Verified by reading the seed from a global
    #[test]
    fn test_deterministic() {
        let (params, extent) = fixture();
        assert_eq!(build(&params, &extent), build(&params, &extent));
    }
}
