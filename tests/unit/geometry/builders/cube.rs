//! Tests for the cube illusion builder

#[cfg(test)]
mod tests {
    use op_art::geometry::builders::cube::{GRID_SIZE, build};
    use op_art::geometry::{PatternKind, PatternParameters, Shape};
    use op_art::scene::CanvasExtent;

    fn fixture() -> (PatternParameters, CanvasExtent) {
        let params = PatternParameters {
            kind: PatternKind::CubeIllusion,
            complexity: 10,
            seed: 0.3,
            ..PatternParameters::default()
        };
        let extent = CanvasExtent::new(200.0, 100.0).expect("valid extent");
        (params, extent)
    }

    // Tests bars plus six shapes per glyph
    // Verified by dropping the closing bar on the right edge
    #[test]
    fn test_primitive_count() {
        let (params, extent) = fixture();
        let primitives = build(&params, &extent);
        let glyphs = GRID_SIZE * GRID_SIZE;
        assert_eq!(primitives.len(), 21 + glyphs * 6);

        let squares = primitives
            .iter()
            .filter(|p| matches!(p.shape, Shape::Rect { .. }))
            .count();
        assert_eq!(squares, glyphs * 2);
    }

    // Tests background bars are vertical and evenly spaced
    // Verified by spacing bars by width / complexity
    #[test]
    fn test_background_bars() {
        let (params, extent) = fixture();
        let primitives = build(&params, &extent);
        for (i, bar) in primitives.iter().take(21).enumerate() {
            match bar.shape {
                Shape::Line { x1, y1, x2, y2 } => {
                    let expected = i as f64 * 10.0;
                    assert!((x1 - expected).abs() < 1e-9);
                    assert!((x2 - expected).abs() < 1e-9);
                    assert!(y1.abs() < f64::EPSILON);
                    assert!((y2 - extent.height).abs() < f64::EPSILON);
                }
                ref other => unreachable!("Expected bar line, got {other:?}"),
            }
        }
    }

    // Tests the back square sits a third of the size up and right
    // Verified by offsetting the back square down
    #[test]
    fn test_glyph_depth_offset() {
        let (params, extent) = fixture();
        let primitives = build(&params, &extent);
        match primitives.get(21..23).map(|glyph| (glyph.first(), glyph.last())) {
            Some((Some(front), Some(back))) => match (&front.shape, &back.shape) {
                (
                    Shape::Rect { x, y, w, .. },
                    Shape::Rect {
                        x: back_x,
                        y: back_y,
                        ..
                    },
                ) => {
                    assert!((back_x - x - w / 3.0).abs() < 1e-9);
                    assert!((y - back_y - w / 3.0).abs() < 1e-9);
                }
                other => unreachable!("Expected two squares, got {other:?}"),
            },
            other => unreachable!("Expected glyph squares, got {other:?}"),
        }
    }

    // Tests glyph jitter stays within 30% of the glyph size
    // Verified by jittering by the full glyph size
    #[test]
    fn test_glyph_jitter_bounds() {
        let (params, extent) = fixture();
        let cell_width = extent.width / GRID_SIZE as f64;
        let cell_height = extent.height / GRID_SIZE as f64;
        let size = 0.4 * cell_width.min(cell_height);

        let fronts = build(&params, &extent)
            .into_iter()
            .skip(21)
            .step_by(6)
            .collect::<Vec<_>>();
        assert_eq!(fronts.len(), GRID_SIZE * GRID_SIZE);

        for (glyph, front) in fronts.iter().enumerate() {
            let col = glyph % GRID_SIZE;
            if let Shape::Rect { x, w, .. } = front.shape {
                let center_x = x + w / 2.0;
                let nominal = (col as f64 + 0.5) * cell_width;
                assert!((center_x - nominal).abs() <= 0.3 * size + 1e-9);
                assert!((w - size).abs() < 1e-9);
            }
        }
    }

    // Tests identical inputs produce identical cubes
    // Verified by jittering from a random source
    #[test]
    fn test_deterministic() {
        let (params, extent) = fixture();
        assert_eq!(build(&params, &extent), build(&params, &extent));
    }
}
