//! Tests for the SVG document writer

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use op_art::EngineError;
    use op_art::color::{Color, ColorMode, Hsl, Rgb};
    use op_art::geometry::{PatternKind, Primitive, Shape};
    use op_art::io::svg::{export_svg, primitive_element, render_svg, svg_filename};
    use op_art::math::transform::Point;
    use op_art::scene::{CanvasExtent, Scene};

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9)
            .single()
            .expect("valid timestamp")
    }

    fn scene(primitives: Vec<Primitive>) -> Scene {
        Scene {
            kind: PatternKind::ConcentricCircles,
            color_mode: ColorMode::Black,
            extent: CanvasExtent::new(400.0, 225.0).expect("valid extent"),
            primitives,
        }
    }

    fn ring(r: f64) -> Primitive {
        Primitive::stroked(
            Shape::Circle {
                cx: 200.0,
                cy: 112.5,
                r,
            },
            Color::BLACK,
            1.5,
        )
    }

    // Tests exporting an empty scene is refused
    // Verified by writing an empty document
    #[test]
    fn test_export_empty_scene() {
        assert!(matches!(
            export_svg(&scene(Vec::new()), timestamp()),
            Err(EngineError::ExportPrecondition { .. })
        ));
    }

    // Tests the root element carries physical size and matching viewBox
    // Verified by sizing the root in pixels
    #[test]
    fn test_root_element_dimensions() {
        let document = render_svg(&scene(vec![ring(10.0)]));
        assert!(document.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(document.contains(r#"width="400mm" height="225mm" viewBox="0 0 400 225""#));
        assert!(document.trim_end().ends_with("</svg>"));
    }

    // Tests one element per primitive in drawing order
    // Verified by sorting elements by tag
    #[test]
    fn test_elements_in_order() {
        let document = render_svg(&scene(vec![ring(10.0), ring(20.0), ring(30.0)]));
        assert_eq!(document.matches("<circle").count(), 3);

        let first = document.find(r#"r="10""#).expect("first ring");
        let last = document.find(r#"r="30""#).expect("last ring");
        assert!(first < last);
    }

    // Tests the export filename layout
    // Verified by using colons in the timestamp
    #[test]
    fn test_svg_filename() {
        let name = svg_filename(&scene(vec![ring(1.0)]), timestamp());
        assert_eq!(
            name,
            "optical-art-concentric-circles-400x225mm-2024-05-06T07-08-09.svg"
        );
    }

    // Tests the exported document matches the renderer
    // Verified by exporting a different scene than rendered
    #[test]
    fn test_export_svg() {
        let pattern = scene(vec![ring(5.0)]);
        let document = export_svg(&pattern, timestamp()).expect("exportable scene");
        assert_eq!(document.contents, render_svg(&pattern));
        assert!(document.filename.ends_with(".svg"));
    }

    // Tests stroke, fill and rotation attributes
    // Verified by dropping the rotation pivot
    #[test]
    fn test_stroked_rotated_element() {
        let element = primitive_element(
            &Primitive::stroked(
                Shape::Rect {
                    x: 1.0,
                    y: 2.0,
                    w: 3.0,
                    h: 4.0,
                },
                Color::Rgb(Rgb::new(255, 0, 0)),
                0.25,
            )
            .with_rotation(30.0, Point::new(5.0, 5.5)),
        );
        assert_eq!(
            element,
            r##"<rect x="1" y="2" width="3" height="4" fill="none" stroke="#ff0000" stroke-width="0.25" transform="rotate(30 5 5.5)"/>"##
        );
    }

    // Tests filled primitives have no stroke
    // Verified by emitting a zero-width stroke
    #[test]
    fn test_filled_element() {
        let element = primitive_element(&Primitive::filled(
            Shape::Circle {
                cx: 1.0,
                cy: 1.0,
                r: 0.5,
            },
            Color::BLACK,
        ));
        assert_eq!(
            element,
            r##"<circle cx="1" cy="1" r="0.5" fill="#000000" stroke="none"/>"##
        );
    }

    // Tests path data for open and closed polylines
    // Verified by always closing paths
    #[test]
    fn test_path_data() {
        let open = Shape::polyline(vec![Point::new(0.0, 0.0), Point::new(1.5, 2.0)]);
        let element = primitive_element(&Primitive::stroked(open, Color::BLACK, 1.0));
        assert!(element.contains(r#"d="M 0 0 L 1.5 2""#));

        let closed = Shape::Path {
            points: vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(1.0, 1.0),
            ],
            closed: true,
        };
        let element = primitive_element(&Primitive::stroked(closed, Color::BLACK, 1.0));
        assert!(element.contains(r#"d="M 0 0 L 1 0 L 1 1 Z""#));
    }

    // Tests HSL colors are written in CSS hsl() form with trimmed decimals
    // Verified by converting HSL to hex before writing
    #[test]
    fn test_hsl_paint() {
        let element = primitive_element(&Primitive::stroked(
            Shape::line(Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
            Color::Hsl(Hsl::new(52.523_292_150_113_55, 80.0, 50.0)),
            2.0,
        ));
        assert!(element.contains(r#"stroke="hsl(52.5233, 80%, 50%)""#));
    }
}
